//! # ssml-amazon
//!
//! Amazon-specific SSML tags on top of `ssml-speech`.
//!
//! [`AmazonSpeech`] owns its own element sequence and implements
//! [`ElementSink`], so every standard operation from [`SpeechOps`] works on it
//! unchanged. It adds the vendor tags Alexa understands beyond the standard
//! set:
//!
//! - `<amazon:effect name="whispered">` via [`AmazonSpeech::whisper`]
//! - `<voice name="…">` via [`AmazonSpeech::voice`]
//!
//! ## Example
//!
//! ```rust
//! use ssml_amazon::{AmazonSpeech, ElementSink, SpeechOps};
//!
//! # fn main() -> ssml_amazon::Result<()> {
//! let mut speech = AmazonSpeech::new();
//! speech
//!     .say("Good night")?
//!     .whisper("and sweet dreams", true)?
//!     .pause("1s")?;
//!
//! assert_eq!(
//!     speech.ssml(false),
//!     "<speak>Good night <amazon:effect name=\"whispered\">and sweet dreams</amazon:effect> \
//!      <break time='1s'/></speak>"
//! );
//! # Ok(())
//! # }
//! ```

mod speech;

pub use speech::AmazonSpeech;

pub use ssml_speech::{ElementSink, Options, Result, SpeechError, SpeechObject, SpeechOps};
