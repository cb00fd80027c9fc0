//! Editor state machine.

use pagegram_diagrams::{DiagramRenderer, RENDER_ERROR_MESSAGE, RenderedGraphic, SvgExport};

use crate::source::{DiagramSource, SourceError};
use crate::zoom::Zoom;

/// Visible pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Preview,
    Code,
}

/// Request status.
///
/// Loading and failure are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// What the preview pane shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview<'a> {
    /// An error message in place of the diagram.
    Alert(&'a str),
    /// The rendered diagram, scaled by the current zoom.
    Graphic { markup: &'a str, scale: f64 },
    /// Nothing rendered yet.
    Empty,
}

/// Error from an editor operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// A generation request is already in flight.
    #[error("A generation request is already in progress")]
    Busy,

    /// There is no rendered diagram to export.
    #[error("No rendered diagram to export")]
    NothingToExport,
}

/// Session state of the diagram editor.
///
/// Owns the page URL, the Mermaid text, the last successful rendering and the
/// view state. Every change to the text re-renders it; zoom and tab changes
/// never touch the markup.
pub struct Editor<R> {
    renderer: R,
    url: String,
    code: String,
    graphic: Option<RenderedGraphic>,
    status: Status,
    tab: Tab,
    zoom: Zoom,
}

impl<R: DiagramRenderer> Editor<R> {
    /// Create an empty editor rendering with `renderer`.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            url: String::new(),
            code: String::new(),
            graphic: None,
            status: Status::Idle,
            tab: Tab::Preview,
            zoom: Zoom::default(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn graphic(&self) -> Option<&RenderedGraphic> {
        self.graphic.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    /// Current error message, if the last operation failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Failed(message) => Some(message),
            Status::Idle | Status::Loading => None,
        }
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    #[must_use]
    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.zoom_out();
    }

    /// Enter the loading state and return the URL to submit.
    ///
    /// Clears any previous error. Fails with [`EditorError::Busy`] while a
    /// request is in flight.
    pub fn begin_generation(&mut self) -> Result<String, EditorError> {
        if self.is_loading() {
            return Err(EditorError::Busy);
        }
        self.status = Status::Loading;
        Ok(self.url.clone())
    }

    /// Apply the outcome of a generation request and leave the loading state.
    pub fn finish_generation(&mut self, result: Result<String, SourceError>) {
        match result {
            Ok(code) => {
                self.status = Status::Idle;
                self.code = code;
                self.render_current();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Diagram generation failed");
                self.graphic = None;
                self.status = Status::Failed(e.to_string());
            }
        }
    }

    /// Generate diagram code for the current URL from `source` and render it.
    ///
    /// Source failures end up in [`Editor::status`]; only [`EditorError::Busy`]
    /// is returned.
    pub fn generate<S: DiagramSource + ?Sized>(&mut self, source: &S) -> Result<(), EditorError> {
        let url = self.begin_generation()?;
        let result = source.generate(&url);
        self.finish_generation(result);
        Ok(())
    }

    /// Replace the Mermaid text and re-render it.
    ///
    /// On render failure the typed text is kept and the graphic cleared.
    /// While a generation request is in flight the status stays `Loading`.
    pub fn edit_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
        self.render_current();
    }

    /// What the preview pane should display.
    #[must_use]
    pub fn preview(&self) -> Preview<'_> {
        if let Status::Failed(message) = &self.status {
            return Preview::Alert(message);
        }
        match &self.graphic {
            Some(graphic) => Preview::Graphic {
                markup: &graphic.markup,
                scale: self.zoom.factor(),
            },
            None => Preview::Empty,
        }
    }

    /// Package the current rendering for download.
    pub fn export(&self) -> Result<SvgExport, EditorError> {
        self.graphic
            .as_ref()
            .map(SvgExport::from_graphic)
            .ok_or(EditorError::NothingToExport)
    }

    fn render_current(&mut self) {
        match self.renderer.render(&self.code) {
            Ok(graphic) => {
                self.graphic = Some(graphic);
                if !self.is_loading() {
                    self.status = Status::Idle;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to render diagram");
                self.graphic = None;
                if !self.is_loading() {
                    self.status = Status::Failed(RENDER_ERROR_MESSAGE.to_owned());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pagegram_diagrams::MockRenderer;
    use pretty_assertions::assert_eq;

    use super::*;

    struct FixedSource {
        result: Result<String, SourceError>,
        requested: RefCell<Vec<String>>,
    }

    impl FixedSource {
        fn new(result: Result<String, SourceError>) -> Self {
            Self {
                result,
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl DiagramSource for FixedSource {
        fn generate(&self, url: &str) -> Result<String, SourceError> {
            self.requested.borrow_mut().push(url.to_owned());
            self.result.clone()
        }
    }

    #[test]
    fn test_new_editor_is_idle_and_empty() {
        let editor = Editor::new(MockRenderer);
        assert_eq!(editor.status(), &Status::Idle);
        assert_eq!(editor.tab(), Tab::Preview);
        assert_eq!(editor.preview(), Preview::Empty);
        assert_eq!(editor.code(), "");
    }

    #[test]
    fn test_begin_generation_returns_url() {
        let mut editor = Editor::new(MockRenderer);
        editor.set_url("https://example.com");

        let url = editor.begin_generation().unwrap();

        assert_eq!(url, "https://example.com");
        assert!(editor.is_loading());
        assert_eq!(editor.error(), None);
    }

    #[test]
    fn test_begin_generation_while_loading_is_busy() {
        let mut editor = Editor::new(MockRenderer);
        editor.begin_generation().unwrap();

        assert_eq!(editor.begin_generation(), Err(EditorError::Busy));
        assert!(editor.is_loading());
    }

    #[test]
    fn test_begin_generation_clears_previous_error() {
        let mut editor = Editor::new(MockRenderer);
        editor.edit_code("not mermaid");
        assert!(editor.error().is_some());

        editor.begin_generation().unwrap();

        assert_eq!(editor.error(), None);
    }

    #[test]
    fn test_finish_generation_success_renders() {
        let mut editor = Editor::new(MockRenderer);
        editor.begin_generation().unwrap();

        editor.finish_generation(Ok("graph TD\nA-->B".to_owned()));

        assert_eq!(editor.status(), &Status::Idle);
        assert_eq!(editor.code(), "graph TD\nA-->B");
        let graphic = editor.graphic().unwrap();
        assert!(graphic.markup.starts_with("<svg"));
    }

    #[test]
    fn test_finish_generation_failure_sets_error() {
        let mut editor = Editor::new(MockRenderer);
        editor.edit_code("graph TD\nA-->B");
        editor.begin_generation().unwrap();

        editor.finish_generation(Err(SourceError::Rejected("URL is required".to_owned())));

        assert_eq!(editor.status(), &Status::Failed("URL is required".to_owned()));
        assert!(editor.graphic().is_none());
        assert_eq!(editor.preview(), Preview::Alert("URL is required"));
    }

    #[test]
    fn test_finish_generation_with_unrenderable_code() {
        let mut editor = Editor::new(MockRenderer);
        editor.begin_generation().unwrap();

        editor.finish_generation(Ok("Sure! Here is your diagram".to_owned()));

        assert_eq!(editor.error(), Some(RENDER_ERROR_MESSAGE));
        assert_eq!(editor.code(), "Sure! Here is your diagram");
        assert!(editor.graphic().is_none());
    }

    #[test]
    fn test_generate_uses_source() {
        let source = FixedSource::new(Ok("flowchart LR\nX-->Y".to_owned()));
        let mut editor = Editor::new(MockRenderer);
        editor.set_url("https://example.com/post");

        editor.generate(&source).unwrap();

        assert_eq!(
            source.requested.borrow().as_slice(),
            ["https://example.com/post".to_owned()]
        );
        assert_eq!(editor.code(), "flowchart LR\nX-->Y");
        assert!(editor.graphic().is_some());
        assert!(!editor.is_loading());
    }

    #[test]
    fn test_generate_while_loading_does_not_call_source() {
        let source = FixedSource::new(Ok("graph TD".to_owned()));
        let mut editor = Editor::new(MockRenderer);
        editor.begin_generation().unwrap();

        assert_eq!(editor.generate(&source), Err(EditorError::Busy));
        assert!(source.requested.borrow().is_empty());
    }

    #[test]
    fn test_invalid_edit_keeps_text_and_clears_graphic() {
        let mut editor = Editor::new(MockRenderer);
        editor.edit_code("graph TD\nA-->B");
        assert!(editor.graphic().is_some());

        editor.edit_code("this is not a diagram");

        assert_eq!(editor.code(), "this is not a diagram");
        assert!(editor.graphic().is_none());
        assert_eq!(editor.error(), Some(RENDER_ERROR_MESSAGE));
        assert_eq!(editor.preview(), Preview::Alert(RENDER_ERROR_MESSAGE));
    }

    #[test]
    fn test_valid_edit_clears_error() {
        let mut editor = Editor::new(MockRenderer);
        editor.edit_code("oops");
        editor.edit_code("sequenceDiagram\nA->>B: hi");

        assert_eq!(editor.status(), &Status::Idle);
        assert!(editor.graphic().is_some());
    }

    #[test]
    fn test_edit_while_loading_stays_loading() {
        let mut editor = Editor::new(MockRenderer);
        editor.begin_generation().unwrap();

        editor.edit_code("oops");

        assert!(editor.is_loading());
        assert!(editor.graphic().is_none());
    }

    #[test]
    fn test_rendering_same_code_is_identical() {
        let mut editor = Editor::new(MockRenderer);
        editor.edit_code("graph TD\nA-->B");
        let first = editor.graphic().cloned();
        editor.edit_code("graph TD\nA-->B");

        assert_eq!(editor.graphic().cloned(), first);
    }

    #[test]
    fn test_zoom_does_not_touch_markup() {
        let mut editor = Editor::new(MockRenderer);
        editor.edit_code("graph TD\nA-->B");
        let markup = editor.graphic().unwrap().markup.clone();

        editor.zoom_in();
        editor.zoom_in();

        assert_eq!(editor.graphic().unwrap().markup, markup);
        assert_eq!(
            editor.preview(),
            Preview::Graphic {
                markup: &markup,
                scale: 1.2
            }
        );
    }

    #[test]
    fn test_zoom_bounds() {
        let mut editor = Editor::new(MockRenderer);
        for _ in 0..11 {
            editor.zoom_in();
        }
        assert_eq!(editor.zoom(), Zoom::MAX);

        for _ in 0..30 {
            editor.zoom_out();
        }
        assert_eq!(editor.zoom(), Zoom::MIN);
    }

    #[test]
    fn test_select_tab() {
        let mut editor = Editor::new(MockRenderer);
        editor.select_tab(Tab::Code);
        assert_eq!(editor.tab(), Tab::Code);
    }

    #[test]
    fn test_export_without_graphic() {
        let editor = Editor::new(MockRenderer);
        assert_eq!(editor.export(), Err(EditorError::NothingToExport));
    }

    #[test]
    fn test_export_after_render() {
        let mut editor = Editor::new(MockRenderer);
        editor.edit_code("graph TD\nA-->B");

        let export = editor.export().unwrap();

        assert_eq!(export.file_name, "mermaid-diagram.svg");
        assert_eq!(export.mime, "image/svg+xml");
        assert_eq!(export.contents, editor.graphic().unwrap().markup);
    }
}
