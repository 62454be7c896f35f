//! Text utilities - pure string manipulation and syntactic validation.
//!
//! These functions are **framework-agnostic** and have no dependencies on the
//! configuration or service layers, making them testable in isolation.
//!
//! # Components
//!
//! - [`strings`]: ASCII case conversion, delimiter-based [`split`](strings::split)
//!   and [`join`](strings::join)
//! - [`validate`]: emptiness, alphanumeric, and email-shape checks
//!
//! # Split semantics
//!
//! [`strings::split`] preserves interior and leading empty segments but drops
//! a single trailing empty segment when the input ends with the delimiter.
//! This is non-standard compared to most split implementations and is part of
//! the documented contract; see the function docs before relying on
//! round-trips through [`strings::join`].

pub mod strings;
pub mod validate;

pub use strings::{join, split, to_lower, to_upper};
pub use validate::{is_alphanumeric, is_empty, is_valid_email};
