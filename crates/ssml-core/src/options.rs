//! Configuration options for SSML builders

use crate::escape::EscapeMode;

/// Options shared by every builder operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// How text payloads are escaped (entity encoding unless set otherwise)
    pub escape_mode: EscapeMode,
}

impl Options {
    /// Options using the legacy strip escaping
    pub fn legacy() -> Self {
        Self {
            escape_mode: EscapeMode::Strip,
        }
    }
}
