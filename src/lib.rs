//! Browser-side wiring for the score search form.
//!
//! The page provides a slider for a year interval, a dropdown of score values,
//! a file picker and a database selector. This crate keeps those widgets in
//! sync:
//!
//! - the slider's current value is mirrored into a display element,
//! - a radio toggle enables the slider and forces the "Publication year" value,
//! - selected file names are listed under the file picker and cleared on reset,
//! - score options not offered by the chosen database are disabled.
//!
//! All logic is written against the [`UiElement`] trait so it can run against
//! the real DOM ([`dom::DomElement`]) or an in-memory fake in tests.

use std::fmt;

pub mod availability;
pub mod config;
pub mod context;
pub mod dom;
pub mod element;
pub mod handlers;
pub mod logging;

#[cfg(test)]
mod testing;

pub use availability::AvailabilityMap;
pub use context::FormContext;
pub use element::UiElement;

/// Errors raised while resolving or updating form elements.
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// An element the page must provide was not found.
    MissingElement(String),
    /// A DOM call was rejected by the browser.
    Dom(String),
    /// The availability mapping could not be read.
    Availability(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingElement(id) => write!(f, "Element #{} not found in document", id),
            FormError::Dom(msg) => write!(f, "DOM operation failed: {}", msg),
            FormError::Availability(msg) => write!(f, "Invalid availability mapping: {}", msg),
        }
    }
}

impl std::error::Error for FormError {}
