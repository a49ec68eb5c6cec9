//! Function signature templates.
//!
//! This module provides:
//! - The argument type grammar (`uint256`, `bytes32`, `address`, ...)
//! - Template validation, run before any search work is scheduled
//! - Placeholder normalization and candidate formatting

pub mod grammar;
mod validator;

pub use grammar::{BaseType, TypeBound};
pub use validator::{check_type, validate, SignatureError, SignatureTemplate, PLACEHOLDER};
