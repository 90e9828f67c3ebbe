//! The element sequence every builder owns, and its serialization.

use serde::Serialize;

use crate::escape::escape;
use crate::options::Options;
use crate::{Result, Value};

/// Root element wrapped around a complete document
pub const SPEAK_TAG: &str = "speak";

/// Type tag of the result object handed to the response layer
pub const SSML_TYPE: &str = "SSML";

/// Join fragments with single spaces, wrapped in `<speak>` unless
/// `exclude_speak_tag` is set.
pub fn serialize(elements: &[String], exclude_speak_tag: bool) -> String {
    let body = elements.join(" ");
    if exclude_speak_tag {
        return body;
    }

    let mut output = String::with_capacity(body.len() + 2 * SPEAK_TAG.len() + 5);
    output.push('<');
    output.push_str(SPEAK_TAG);
    output.push('>');
    output.push_str(&body);
    output.push_str("</");
    output.push_str(SPEAK_TAG);
    output.push('>');
    output
}

/// The record a speech response carries: `{"type": "SSML", "speech": "…"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechObject {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub speech: String,
}

/// Something that accumulates SSML fragments.
///
/// Builders implement the four required methods; escaping, serialization and
/// the result object come for free and behave identically for every builder.
pub trait ElementSink {
    /// The fragments appended so far, in order
    fn elements(&self) -> &[String];

    /// Append one finished fragment
    fn append(&mut self, fragment: String);

    fn options(&self) -> &Options;

    /// A fresh, empty builder of the same kind and options, used for nested
    /// content such as the body of an `<audio>` tag
    fn nested(&self) -> Self
    where
        Self: Sized;

    /// Append a fragment produced by `operation` and return the builder for
    /// chaining
    fn emit(&mut self, operation: &'static str, fragment: String) -> &mut Self
    where
        Self: Sized,
    {
        tracing::trace!(operation, fragment_len = fragment.len(), "appended SSML fragment");
        self.append(fragment);
        self
    }

    /// Escape a payload with this builder's escape mode
    fn escape(&self, value: &Value<'_>) -> Result<String> {
        escape(value, self.options().escape_mode)
    }

    /// Serialize the document
    fn ssml(&self, exclude_speak_tag: bool) -> String {
        serialize(self.elements(), exclude_speak_tag)
    }

    /// The wrapped document as a response object
    fn to_object(&self) -> SpeechObject {
        SpeechObject {
            kind: SSML_TYPE,
            speech: self.ssml(false),
        }
    }
}
