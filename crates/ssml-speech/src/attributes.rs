//! Option bags for the multi-attribute operations.

/// Options for `<say-as>`: the word plus how to interpret and format it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SayAsOptions {
    /// Text to insert (required)
    pub word: Option<String>,
    /// Value of `interpret-as`, e.g. `cardinal` or `date`
    pub interpret: Option<String>,
    /// Value of `format`, e.g. `mdy` for dates
    pub format: Option<String>,
}

impl SayAsOptions {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
            ..Default::default()
        }
    }

    pub fn interpret(mut self, interpret: impl Into<String>) -> Self {
        self.interpret = Some(interpret.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// Options for `<w>`: the word and its part of speech
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartOfSpeechOptions {
    /// Text to insert (required)
    pub word: Option<String>,
    /// Value of `role`, e.g. `amazon:VB`
    pub role: Option<String>,
}

impl PartOfSpeechOptions {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
            role: None,
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Attributes for `<prosody>`. Each one is optional; those present are
/// rendered in the order rate, pitch, volume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProsodyAttributes {
    /// A named rate (`x-slow` … `x-fast`) or a percentage of at least 20%
    pub rate: Option<String>,
    /// A named pitch (`x-low` … `x-high`) or a signed percentage
    pub pitch: Option<String>,
    /// A named volume (`silent` … `x-loud`) or a signed change in dB
    pub volume: Option<String>,
}

impl ProsodyAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rate(mut self, rate: impl Into<String>) -> Self {
        self.rate = Some(rate.into());
        self
    }

    pub fn pitch(mut self, pitch: impl Into<String>) -> Self {
        self.pitch = Some(pitch.into());
        self
    }

    pub fn volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = Some(volume.into());
        self
    }
}

/// A field counts as given only when it holds a non-empty string
pub(crate) fn given(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
