//! Shared utilities: code generation and format validation.

pub mod code_generator;
pub mod validate;
