//! Reusable view pieces for the login surface.

pub mod form_field;
pub mod notice;
