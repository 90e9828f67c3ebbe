//! ssml-core - SSML fragment validation, escaping and serialization
//!
//! This crate provides the primitives shared by the SSML builders. It is used
//! by both `ssml-speech` (the standard tag set) and `ssml-amazon` (vendor
//! extension tags layered on the same element sequence).
//!
//! # Architecture
//!
//! ```text
//! operation call ──▶ validate ──▶ escape ──▶ Tag ──▶ ┌─────────────┐
//!                                                    │ ElementSink │ ──▶ <speak>…</speak>
//!                                                    └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use ssml_core::{escape, EscapeMode, Tag, Value};
//!
//! let word = escape(&Value::from("Cat's & Dog's"), EscapeMode::Entities).unwrap();
//! let fragment = Tag::new("emphasis").attr("level", "strong").wrap(&word);
//!
//! assert_eq!(
//!     fragment,
//!     "<emphasis level='strong'>Cat&apos;s &amp; Dog&apos;s</emphasis>"
//! );
//! ```

mod escape;
mod options;
mod sink;
mod tag;
pub mod validate;
mod value;

pub use escape::{escape, escape_str, strip_str, EscapeMode};
pub use options::Options;
pub use sink::{serialize, ElementSink, SpeechObject, SPEAK_TAG, SSML_TYPE};
pub use tag::{Quote, Tag};
pub use value::Value;

/// Error type for SSML builder operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    /// A required value was missing, empty, not in an allowed set or malformed
    #[error("{0}")]
    InvalidArgument(String),

    /// The escaping routine received a value it cannot render
    #[error("{0}")]
    InvalidType(String),

    #[error("{0}")]
    DurationOutOfRange(String),

    #[error("{0}")]
    RateOutOfRange(String),
}

impl SpeechError {
    /// The message carried by this error, without the variant name
    pub fn message(&self) -> &str {
        match self {
            SpeechError::InvalidArgument(msg)
            | SpeechError::InvalidType(msg)
            | SpeechError::DurationOutOfRange(msg)
            | SpeechError::RateOutOfRange(msg) => msg,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpeechError>;
