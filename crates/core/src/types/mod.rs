//! Core types for Packstore.
//!
//! This module provides type-safe wrappers for money and document kinds.

pub mod document;
pub mod money;

pub use document::DocumentKind;
pub use money::{CurrencyCode, Money, MoneyError};
