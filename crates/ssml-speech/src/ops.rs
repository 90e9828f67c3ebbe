//! The standard SSML operations, available on every [`ElementSink`].

use rand::Rng;

use ssml_core::validate::{
    in_list, not_empty, present, rejected, validate_duration, validate_pitch, validate_rate,
    validate_volume, BREAK_STRENGTHS, EMPHASIS_LEVELS, INTERPRETATIONS,
};
use ssml_core::{ElementSink, Result, SpeechError, Tag, Value};

use crate::attributes::{given, PartOfSpeechOptions, ProsodyAttributes, SayAsOptions};
use crate::random;

fn missing(param: &str, op: &str) -> String {
    format!("The {param} provided to Speech::{op}(..) was missing")
}

fn empty(param: &str, op: &str) -> String {
    format!("The {param} provided to Speech::{op}(..) was empty")
}

fn not_valid(param: &str, op: &str, value: &str) -> String {
    format!("The {param} provided to Speech::{op}(..) was not valid. Received {param}: {value}")
}

fn missing_bag(param: &str, op: &str) -> SpeechError {
    rejected(SpeechError::InvalidArgument(format!(
        "The {param} provided to Speech::{op}(..) were missing"
    )))
}

fn break_time(duration: &str) -> String {
    Tag::new("break").attr("time", duration).empty()
}

fn spell_out(word: &str) -> String {
    Tag::new("say-as").attr("interpret-as", "spell-out").wrap(word)
}

/// Chainable SSML operations.
///
/// Every operation validates its input first and appends nothing when it
/// fails, so a builder never holds a fragment made from rejected input. On
/// success the builder is returned for chaining with `?`:
///
/// ```rust
/// use ssml_speech::{ElementSink, Speech, SpeechOps};
///
/// # fn main() -> ssml_speech::Result<()> {
/// let mut speech = Speech::new();
/// speech.say("Hello")?.pause("1s")?.sentence("Welcome back")?;
/// assert_eq!(
///     speech.ssml(false),
///     "<speak>Hello <break time='1s'/> <s>Welcome back</s></speak>"
/// );
/// # Ok(())
/// # }
/// ```
pub trait SpeechOps: ElementSink + Sized {
    /// Append escaped plain text.
    fn say<'a>(&mut self, saying: impl Into<Value<'a>>) -> Result<&mut Self> {
        let saying = saying.into();
        present(&saying, &missing("saying", "say"))?;
        let fragment = self.escape(&saying)?;
        Ok(self.emit("say", fragment))
    }

    /// Append a `<p>` paragraph.
    fn paragraph<'a>(&mut self, paragraph: impl Into<Value<'a>>) -> Result<&mut Self> {
        let paragraph = paragraph.into();
        present(&paragraph, &missing("paragraph", "paragraph"))?;
        let fragment = Tag::new("p").wrap(&self.escape(&paragraph)?);
        Ok(self.emit("paragraph", fragment))
    }

    /// Append an `<s>` sentence.
    fn sentence<'a>(&mut self, sentence: impl Into<Value<'a>>) -> Result<&mut Self> {
        let sentence = sentence.into();
        present(&sentence, &missing("sentence", "sentence"))?;
        let fragment = Tag::new("s").wrap(&self.escape(&sentence)?);
        Ok(self.emit("sentence", fragment))
    }

    /// Append a timed `<break>`. The duration is a number followed by `s` or
    /// `ms`, at most 10 seconds.
    fn pause<'a>(&mut self, duration: impl Into<Value<'a>>) -> Result<&mut Self> {
        let duration = duration.into();
        present(&duration, &missing("duration", "pause"))?;
        let duration = duration.to_string();
        validate_duration(&duration)?;
        Ok(self.emit("pause", break_time(&duration)))
    }

    /// Append a `<break>` with a strength such as `medium` or `x-strong`.
    fn pause_by_strength<'a>(&mut self, strength: impl Into<Value<'a>>) -> Result<&mut Self> {
        let strength = strength.into();
        present(&strength, &missing("strength", "pause_by_strength"))?;
        let strength = strength.to_string();
        let strength = in_list(
            &strength,
            BREAK_STRENGTHS,
            &not_valid("strength", "pause_by_strength", &strength),
        )?;
        let fragment = Tag::new("break").attr("strength", strength).empty();
        Ok(self.emit("pause_by_strength", fragment))
    }

    /// Append a self-closing `<audio>` tag. The URL is inserted as given.
    fn audio<'a>(&mut self, url: impl Into<Value<'a>>) -> Result<&mut Self> {
        let url = url.into();
        present(&url, &missing("url", "audio"))?;
        let fragment = Tag::new("audio").attr("src", url.to_string()).empty();
        Ok(self.emit("audio", fragment))
    }

    /// Append an `<audio>` tag whose body is built by `build` on a fresh
    /// nested builder. The nested content is serialized without `<speak>`.
    fn audio_with<'a, F>(&mut self, url: impl Into<Value<'a>>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let url = url.into();
        present(&url, &missing("url", "audio"))?;

        let mut nested = self.nested();
        build(&mut nested)?;

        let fragment = Tag::new("audio")
            .attr("src", url.to_string())
            .wrap(&nested.ssml(true));
        Ok(self.emit("audio", fragment))
    }

    /// Append a word to be spelled out letter by letter.
    fn spell<'a>(&mut self, word: impl Into<Value<'a>>) -> Result<&mut Self> {
        let word = word.into();
        present(&word, &missing("word", "spell"))?;
        let fragment = spell_out(&self.escape(&word)?);
        Ok(self.emit("spell", fragment))
    }

    /// Spell a word one character at a time with a pause of `delay` after
    /// each character.
    fn spell_slowly<'a, 'b>(
        &mut self,
        word: impl Into<Value<'a>>,
        delay: impl Into<Value<'b>>,
    ) -> Result<&mut Self> {
        let word = word.into();
        let delay = delay.into();
        present(&word, &missing("word", "spell_slowly"))?;
        present(&delay, &missing("duration", "pause"))?;
        let delay = delay.to_string();
        validate_duration(&delay)?;

        let text = word.to_string();
        let mut fragments = Vec::with_capacity(text.len() * 2);
        for c in text.chars() {
            fragments.push(spell_out(&self.escape(&Value::from(c))?));
            fragments.push(break_time(&delay));
        }

        for fragment in fragments {
            self.emit("spell_slowly", fragment);
        }
        Ok(self)
    }

    /// Append a `<say-as>` tag with `interpret-as` and optional `format`.
    ///
    /// The word is inserted without escaping. Without an interpretation the
    /// word is appended as-is.
    fn say_as<'o>(&mut self, options: impl Into<Option<&'o SayAsOptions>>) -> Result<&mut Self> {
        let options = options
            .into()
            .ok_or_else(|| missing_bag("options", "say_as"))?;
        let word = Value::from(options.word.as_deref());
        present(&word, &missing("word", "say_as"))?;
        let word = word.to_string();

        let fragment = match given(&options.interpret) {
            Some(interpret) => {
                let interpret = in_list(
                    interpret,
                    INTERPRETATIONS,
                    &not_valid("interpret", "say_as", interpret),
                )?;
                Tag::new("say-as")
                    .attr("interpret-as", interpret)
                    .attr_opt("format", given(&options.format))
                    .wrap(&word)
            }
            None => word,
        };
        Ok(self.emit("say_as", fragment))
    }

    /// Append a `<w>` tag giving the word's part of speech. Nothing is
    /// appended when no role is given.
    fn part_of_speech<'o>(
        &mut self,
        options: impl Into<Option<&'o PartOfSpeechOptions>>,
    ) -> Result<&mut Self> {
        let options = options
            .into()
            .ok_or_else(|| missing_bag("options", "part_of_speech"))?;
        let word = Value::from(options.word.as_deref());
        present(&word, &missing("word", "part_of_speech"))?;
        let word = self.escape(&word)?;

        if let Some(role) = given(&options.role) {
            let fragment = Tag::new("w").attr("role", role).wrap(&word);
            self.emit("part_of_speech", fragment);
        }
        Ok(self)
    }

    /// Append a `<phoneme>` tag giving the phonetic pronunciation `ph` of
    /// `word` in `alphabet` (e.g. `ipa`).
    fn phoneme<'a, 'b, 'c>(
        &mut self,
        alphabet: impl Into<Value<'a>>,
        ph: impl Into<Value<'b>>,
        word: impl Into<Value<'c>>,
    ) -> Result<&mut Self> {
        let alphabet = alphabet.into();
        let ph = ph.into();
        let word = word.into();
        present(&alphabet, &missing("alphabet", "phoneme"))?;
        present(&ph, &missing("ph", "phoneme"))?;
        present(&word, &missing("word", "phoneme"))?;

        let word = self.escape(&word)?;
        let ph = ph.to_string().replace('\'', "&apos;");
        let fragment = Tag::new("phoneme")
            .attr("alphabet", alphabet.to_string())
            .attr("ph", ph)
            .wrap(&word);
        Ok(self.emit("phoneme", fragment))
    }

    /// Append an `<emphasis>` tag with level `strong`, `moderate` or
    /// `reduced`.
    fn emphasis<'a, 'b>(
        &mut self,
        level: impl Into<Value<'a>>,
        word: impl Into<Value<'b>>,
    ) -> Result<&mut Self> {
        let level = level.into();
        let word = word.into();
        present(&level, &missing("level", "emphasis"))?;
        present(&word, &missing("word", "emphasis"))?;
        not_empty(&word, &empty("word", "emphasis"))?;
        let level = level.to_string();
        let level = in_list(&level, EMPHASIS_LEVELS, &not_valid("level", "emphasis", &level))?;

        let fragment = Tag::new("emphasis")
            .attr("level", level)
            .wrap(&self.escape(&word)?);
        Ok(self.emit("emphasis", fragment))
    }

    /// Append a `<prosody>` tag carrying whichever of rate, pitch and volume
    /// are given.
    fn prosody<'o, 'b>(
        &mut self,
        attributes: impl Into<Option<&'o ProsodyAttributes>>,
        word: impl Into<Value<'b>>,
    ) -> Result<&mut Self> {
        let attributes = attributes
            .into()
            .ok_or_else(|| missing_bag("attributes", "prosody"))?;
        let word = word.into();
        present(&word, &missing("word", "prosody"))?;
        not_empty(&word, &empty("word", "prosody"))?;

        let rate = given(&attributes.rate).map(validate_rate).transpose()?;
        let pitch = given(&attributes.pitch).map(validate_pitch).transpose()?;
        let volume = given(&attributes.volume).map(validate_volume).transpose()?;

        let fragment = Tag::new("prosody")
            .attr_opt("rate", rate)
            .attr_opt("pitch", pitch)
            .attr_opt("volume", volume)
            .wrap(&self.escape(&word)?);
        Ok(self.emit("prosody", fragment))
    }

    /// Append a `<sub>` tag so `word` is pronounced as `alias`.
    fn sub<'a, 'b>(
        &mut self,
        alias: impl Into<Value<'a>>,
        word: impl Into<Value<'b>>,
    ) -> Result<&mut Self> {
        let alias = alias.into();
        let word = word.into();
        present(&alias, &missing("alias", "sub"))?;
        not_empty(&alias, &empty("alias", "sub"))?;
        present(&word, &missing("word", "sub"))?;
        not_empty(&word, &empty("word", "sub"))?;

        let fragment = Tag::new("sub")
            .attr("alias", alias.to_string())
            .wrap(&self.escape(&word)?);
        Ok(self.emit("sub", fragment))
    }

    /// Append raw SSML without any escaping.
    fn say_with_ssml<'a>(&mut self, saying: impl Into<Value<'a>>) -> Result<&mut Self> {
        let saying = saying.into();
        present(&saying, &missing("saying", "say_with_ssml"))?;
        Ok(self.emit("say_with_ssml", saying.to_string()))
    }

    /// Say one of `choices`, picked uniformly at random.
    fn say_random_choice<T: AsRef<str>>(&mut self, choices: &[T]) -> Result<&mut Self> {
        self.say_random_choice_with(choices, &mut rand::rng())
    }

    /// Say one of `choices`, picked with the given randomness source.
    fn say_random_choice_with<T, R>(&mut self, choices: &[T], rng: &mut R) -> Result<&mut Self>
    where
        T: AsRef<str>,
        R: Rng + ?Sized,
    {
        let choice = random::choose(choices, rng)?;
        let fragment = self.escape(&Value::from(choice.as_ref()))?;
        Ok(self.emit("say_random_choice", fragment))
    }
}

impl<S: ElementSink> SpeechOps for S {}
