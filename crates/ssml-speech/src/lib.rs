//! # ssml-speech
//!
//! Build SSML (Speech Synthesis Markup Language) responses for voice
//! assistants from chained method calls.
//!
//! Only the subset of SSML that Alexa devices understand is supported. Each
//! operation validates and escapes its input, formats one fragment and
//! appends it; [`ElementSink::ssml`] joins the fragments and wraps them in
//! `<speak>`.
//!
//! ## Design
//!
//! The operations are provided methods of [`SpeechOps`], implemented for
//! every [`ElementSink`]. Vendor builders such as `ssml-amazon` only need to
//! own an element sequence to get the whole standard tag set.
//!
//! ## Example
//!
//! ```rust
//! use ssml_speech::{ElementSink, ProsodyAttributes, Speech, SpeechOps};
//!
//! # fn main() -> ssml_speech::Result<()> {
//! let mut speech = Speech::new();
//! speech
//!     .say("Let's begin your lesson")?
//!     .pause("1s")?
//!     .emphasis("strong", "really")?
//!     .prosody(&ProsodyAttributes::new().rate("slow"), "listen carefully")?;
//!
//! assert_eq!(
//!     speech.ssml(false),
//!     "<speak>Let&apos;s begin your lesson <break time='1s'/> \
//!      <emphasis level='strong'>really</emphasis> \
//!      <prosody rate='slow'>listen carefully</prosody></speak>"
//! );
//! # Ok(())
//! # }
//! ```

mod attributes;
mod ops;
mod random;
mod speech;

pub use attributes::{PartOfSpeechOptions, ProsodyAttributes, SayAsOptions};
pub use ops::SpeechOps;
pub use random::choose;
pub use speech::Speech;

pub use ssml_core::{
    ElementSink, EscapeMode, Options, Result, SpeechError, SpeechObject, Value,
};
