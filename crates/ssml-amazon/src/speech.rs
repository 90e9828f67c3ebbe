//! AmazonSpeech - the standard builder plus Amazon's vendor tags.

use std::fmt;

use ssml_core::validate::{not_empty, present};
use ssml_core::{ElementSink, Options, Quote, Result, Tag, Value};

/// Builds SSML with Amazon extensions.
///
/// Every standard operation from [`SpeechOps`](ssml_speech::SpeechOps) is
/// available; the Amazon tags are added as inherent methods.
#[derive(Debug, Clone, Default)]
pub struct AmazonSpeech {
    elements: Vec<String>,
    options: Options,
}

fn not_given(param: &str, op: &str, value: &Value<'_>) -> String {
    match value {
        Value::Missing => format!("The {param} provided to AmazonSpeech::{op}(..) was 'None'"),
        _ => format!("The {param} provided to AmazonSpeech::{op}(..) was '{value}'"),
    }
}

impl AmazonSpeech {
    /// Create an empty builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with custom options
    pub fn with_options(options: Options) -> Self {
        Self {
            elements: Vec::new(),
            options,
        }
    }

    /// Append `words` with the whispered voice effect.
    ///
    /// When `escape` is false the words are inserted verbatim, which allows
    /// nesting other SSML inside the effect.
    pub fn whisper<'a>(&mut self, words: impl Into<Value<'a>>, escape: bool) -> Result<&mut Self> {
        let words = words.into();
        let msg = not_given("words", "whisper", &words);
        present(&words, &msg)?;
        not_empty(&words, &msg)?;

        let body = self.body(&words, escape)?;
        let fragment = Tag::new("amazon:effect")
            .quoted(Quote::Double)
            .attr("name", "whispered")
            .wrap(&body);
        Ok(self.emit("whisper", fragment))
    }

    /// Append `words` spoken by the Amazon Polly voice `name`.
    pub fn voice<'a, 'b>(
        &mut self,
        name: impl Into<Value<'a>>,
        words: impl Into<Value<'b>>,
        escape: bool,
    ) -> Result<&mut Self> {
        let name = name.into();
        let words = words.into();
        let name_msg = not_given("name", "voice", &name);
        present(&name, &name_msg)?;
        not_empty(&name, &name_msg)?;
        let words_msg = not_given("words", "voice", &words);
        present(&words, &words_msg)?;
        not_empty(&words, &words_msg)?;

        let body = self.body(&words, escape)?;
        let fragment = Tag::new("voice")
            .quoted(Quote::Double)
            .attr("name", name.to_string())
            .wrap(&body);
        Ok(self.emit("voice", fragment))
    }

    fn body(&self, words: &Value<'_>, escape: bool) -> Result<String> {
        if escape {
            self.escape(words)
        } else {
            Ok(words.to_string())
        }
    }
}

impl ElementSink for AmazonSpeech {
    fn elements(&self) -> &[String] {
        &self.elements
    }

    fn append(&mut self, fragment: String) {
        self.elements.push(fragment);
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn nested(&self) -> Self {
        Self::with_options(self.options.clone())
    }
}

impl fmt::Display for AmazonSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ssml(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssml_core::{EscapeMode, SpeechError};
    use ssml_speech::SpeechOps;

    fn message(err: SpeechError) -> String {
        err.message().to_string()
    }

    #[test]
    fn test_whisper() {
        let mut speech = AmazonSpeech::new();
        speech.whisper("good night and sweet dreams", true).unwrap();
        assert_eq!(
            speech.ssml(false),
            "<speak><amazon:effect name=\"whispered\">good night and sweet dreams</amazon:effect></speak>"
        );
    }

    #[test]
    fn test_whisper_escapes_special_characters() {
        let mut speech = AmazonSpeech::new();
        speech.whisper("good night & sweet dreams", true).unwrap();
        assert_eq!(
            speech.ssml(false),
            "<speak><amazon:effect name=\"whispered\">good night &amp; sweet dreams</amazon:effect></speak>"
        );
    }

    #[test]
    fn test_whisper_raw() {
        let mut speech = AmazonSpeech::new();
        speech.whisper("<s>shh</s>", false).unwrap();
        assert_eq!(
            speech.ssml(true),
            "<amazon:effect name=\"whispered\"><s>shh</s></amazon:effect>"
        );
    }

    #[test]
    fn test_whisper_rejects_missing_and_empty() {
        let mut speech = AmazonSpeech::new();
        let missing = message(speech.whisper(None::<&str>, true).unwrap_err());
        assert_eq!(
            missing,
            "The words provided to AmazonSpeech::whisper(..) was 'None'"
        );
        let err = speech.whisper("", true).unwrap_err();
        assert!(matches!(err, SpeechError::InvalidArgument(_)));
        let empty = message(err);
        assert_eq!(empty, "The words provided to AmazonSpeech::whisper(..) was ''");
        assert_ne!(missing, empty);
        assert!(speech.elements().is_empty());
    }

    #[test]
    fn test_voice() {
        let mut speech = AmazonSpeech::new();
        speech.voice("Kendra", "I'm Kendra", true).unwrap();
        assert_eq!(
            speech.ssml(true),
            "<voice name=\"Kendra\">I&apos;m Kendra</voice>"
        );

        let mut speech = AmazonSpeech::new();
        speech.voice("Brian", "<emphasis level='strong'>hello</emphasis>", false).unwrap();
        assert_eq!(
            speech.ssml(true),
            "<voice name=\"Brian\"><emphasis level='strong'>hello</emphasis></voice>"
        );
    }

    #[test]
    fn test_voice_rejects_empty_arguments() {
        let mut speech = AmazonSpeech::new();
        assert_eq!(
            message(speech.voice("", "hello", true).unwrap_err()),
            "The name provided to AmazonSpeech::voice(..) was ''"
        );
        assert_eq!(
            message(speech.voice("Kendra", "", true).unwrap_err()),
            "The words provided to AmazonSpeech::voice(..) was ''"
        );
        assert_eq!(
            message(speech.voice(None::<&str>, "hello", true).unwrap_err()),
            "The name provided to AmazonSpeech::voice(..) was 'None'"
        );
        assert_eq!(
            message(speech.voice("Kendra", None::<&str>, true).unwrap_err()),
            "The words provided to AmazonSpeech::voice(..) was 'None'"
        );
        assert!(speech.elements().is_empty());
    }

    #[test]
    fn test_audio_with_rejects_missing_url() {
        let mut speech = AmazonSpeech::new();
        let err = speech
            .audio_with(None::<&str>, |b| {
                b.whisper("listen", true)?;
                Ok(())
            })
            .unwrap_err();
        assert_eq!(message(err), "The url provided to Speech::audio(..) was missing");
        assert!(speech.elements().is_empty());
    }

    #[test]
    fn test_standard_operations_share_the_sequence() {
        let mut speech = AmazonSpeech::new();
        speech.say("Hello").unwrap();
        speech.whisper("secret", true).unwrap();
        speech.pause("1ms").unwrap();
        assert_eq!(
            speech.ssml(false),
            "<speak>Hello <amazon:effect name=\"whispered\">secret</amazon:effect> <break time='1ms'/></speak>"
        );
        assert_eq!(speech.to_object().speech, speech.to_string());
    }

    #[test]
    fn test_audio_body_can_whisper() {
        let mut speech = AmazonSpeech::new();
        speech
            .audio_with("https://example.com/rain.mp3", |b| {
                b.whisper("listen", true)?;
                Ok(())
            })
            .unwrap();
        assert_eq!(
            speech.ssml(true),
            "<audio src='https://example.com/rain.mp3'><amazon:effect name=\"whispered\">listen</amazon:effect></audio>"
        );
    }

    #[test]
    fn test_escape_mode_is_respected() {
        let mut speech = AmazonSpeech::with_options(Options {
            escape_mode: EscapeMode::Strip,
        });
        speech.whisper("Tom & Jerry's", true).unwrap();
        assert_eq!(
            speech.ssml(true),
            "<amazon:effect name=\"whispered\">Tom and Jerrys</amazon:effect>"
        );
    }
}
