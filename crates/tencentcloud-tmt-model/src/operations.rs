//! TMT operation enum.

use std::fmt;

/// All supported TMT operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TmtOperation {
    /// Translate one fragment of a spoken utterance.
    SpeechTranslate,
    /// Translate a text.
    TextTranslate,
    /// Detect the language of a text.
    LanguageDetect,
}

impl TmtOperation {
    /// All operations, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::SpeechTranslate,
        Self::TextTranslate,
        Self::LanguageDetect,
    ];

    /// Returns the remote action name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SpeechTranslate => "SpeechTranslate",
            Self::TextTranslate => "TextTranslate",
            Self::LanguageDetect => "LanguageDetect",
        }
    }

    /// Parse a remote action name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SpeechTranslate" => Some(Self::SpeechTranslate),
            "TextTranslate" => Some(Self::TextTranslate),
            "LanguageDetect" => Some(Self::LanguageDetect),
            _ => None,
        }
    }
}

impl fmt::Display for TmtOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
