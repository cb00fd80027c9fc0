//! HTTP request handlers.

pub(crate) mod config;
pub(crate) mod generate;
pub(crate) mod render;
