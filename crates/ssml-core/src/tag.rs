//! Formatting of single SSML tags into fragment strings.

use indexmap::IndexMap;

/// Quote character used around attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quote {
    #[default]
    Single,
    Double,
}

impl Quote {
    fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

/// A tag under construction.
///
/// Attribute values are written verbatim; callers validate or escape them
/// before they get here. Attributes render in insertion order.
#[derive(Debug, Clone)]
pub struct Tag {
    name: String,
    attrs: IndexMap<String, String>,
    quote: Quote,
}

impl Tag {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attrs: IndexMap::new(),
            quote: Quote::default(),
        }
    }

    /// Use `quote` around attribute values
    pub fn quoted(mut self, quote: Quote) -> Self {
        self.quote = quote;
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }

    /// Add the attribute only when a value is present
    pub fn attr_opt(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Render a self-closing tag: `<name a='v'/>`
    pub fn empty(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 16);
        self.write_open(&mut out);
        out.push_str("/>");
        out
    }

    /// Render the tag around `content`: `<name a='v'>content</name>`
    pub fn wrap(&self, content: &str) -> String {
        let mut out = String::with_capacity(self.name.len() * 2 + content.len() + 16);
        self.write_open(&mut out);
        out.push('>');
        out.push_str(content);
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
        out
    }

    fn write_open(&self, out: &mut String) {
        let quote = self.quote.as_char();
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push('=');
            out.push(quote);
            out.push_str(value);
            out.push(quote);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_wrap() {
        assert_eq!(Tag::new("p").wrap("hi"), "<p>hi</p>");
    }

    #[test]
    fn test_self_closing() {
        assert_eq!(
            Tag::new("break").attr("time", "1s").empty(),
            "<break time='1s'/>"
        );
    }

    #[test]
    fn test_attribute_order() {
        let tag = Tag::new("prosody")
            .attr("rate", "30%")
            .attr("pitch", "-40.5%")
            .attr("volume", "+6dB");
        assert_eq!(
            tag.wrap("x"),
            "<prosody rate='30%' pitch='-40.5%' volume='+6dB'>x</prosody>"
        );
    }

    #[test]
    fn test_optional_attribute() {
        let tag = Tag::new("say-as")
            .attr("interpret-as", "date")
            .attr_opt("format", None::<&str>);
        assert_eq!(tag.wrap("1"), "<say-as interpret-as='date'>1</say-as>");
    }

    #[test]
    fn test_double_quotes() {
        let tag = Tag::new("amazon:effect")
            .quoted(Quote::Double)
            .attr("name", "whispered");
        assert_eq!(
            tag.wrap("psst"),
            "<amazon:effect name=\"whispered\">psst</amazon:effect>"
        );
    }
}
