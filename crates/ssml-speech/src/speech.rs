//! Speech - the standard SSML builder.

use std::fmt;

use ssml_core::{ElementSink, Options};

/// Builds an SSML document from chained operations.
///
/// The operations themselves live on [`SpeechOps`](crate::SpeechOps), which
/// every [`ElementSink`] gets; `Speech` only owns the element sequence and
/// the options.
#[derive(Debug, Clone, Default)]
pub struct Speech {
    elements: Vec<String>,
    options: Options,
}

impl Speech {
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

    /// Number of fragments appended so far
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ElementSink for Speech {
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

impl fmt::Display for Speech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ssml(false))
    }
}
