//! Mock generator for testing.

use std::sync::Mutex;

use crate::{DiagramGenerator, GenerateError, GeneratedDiagram};

/// Generator returning a preconfigured result and recording its inputs.
///
/// # Example
///
/// ```ignore
/// use pagegram_generate::{DiagramGenerator, MockGenerator};
///
/// let generator = MockGenerator::with_code("graph TD\nA-->B");
/// generator.generate("excerpt").unwrap();
/// assert_eq!(generator.excerpts(), vec!["excerpt".to_owned()]);
/// ```
#[derive(Debug)]
pub struct MockGenerator {
    result: Result<GeneratedDiagram, GenerateError>,
    excerpts: Mutex<Vec<String>>,
}

impl MockGenerator {
    /// Always return `code`.
    #[must_use]
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            result: Ok(GeneratedDiagram { code: code.into() }),
            excerpts: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with `error`.
    #[must_use]
    pub fn failing(error: GenerateError) -> Self {
        Self {
            result: Err(error),
            excerpts: Mutex::new(Vec::new()),
        }
    }

    /// Excerpts received so far, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn excerpts(&self) -> Vec<String> {
        self.excerpts.lock().unwrap().clone()
    }
}

impl DiagramGenerator for MockGenerator {
    fn generate(&self, excerpt: &str) -> Result<GeneratedDiagram, GenerateError> {
        self.excerpts.lock().unwrap().push(excerpt.to_owned());
        self.result.clone()
    }
}
