//! `${VAR}` expansion for configuration strings.
//!
//! - `${VAR}` expands to the value of VAR and fails when it is unset
//! - `${VAR:-default}` falls back to `default`
//!
//! Bare `$VAR` is left alone so URLs containing `$` survive untouched.

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// `field` is the dotted config path reported in errors.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut unset: Vec<String> = Vec::new();
    let expanded = shellexpand::env_with_context_no_errors(value, |var| {
        let found = std::env::var(var).ok();
        if found.is_none() {
            unset.push(var.to_owned());
        }
        found
    });

    // Unset variables without a default are left verbatim by shellexpand.
    if let Some(name) = unset
        .iter()
        .find(|name| expanded.contains(&format!("${{{name}}}")))
    {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{name}}} not set"),
        });
    }

    Ok(expanded.into_owned())
}

/// Expand an optional field in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(raw) = value.as_deref() {
        *value = Some(expand_env(raw, field)?);
    }
    Ok(())
}
