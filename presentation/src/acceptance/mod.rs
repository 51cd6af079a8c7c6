//! Acceptance run reporting

pub mod reporter;
