//! Language selection for syntax highlighting
//!
//! Maps a file name or a configured name to one of the built-in rule-sets.

use std::path::Path;

use super::builtin::{CPP_RULES, C_RULES};
use super::rules::RuleSet;

/// A language with a built-in rule-set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    C,
    CPlusPlus,
}

const C_EXTENSIONS: &[&str] = &["c", "h"];
const CPP_EXTENSIONS: &[&str] = &["cpp", "cc", "cxx", "c++", "hpp", "hh", "hxx", "h++"];

impl Language {
    /// Get the rule-set driving the tokenizer for this language
    pub fn rules(self) -> &'static RuleSet {
        match self {
            Language::C => &C_RULES,
            Language::CPlusPlus => &CPP_RULES,
        }
    }

    /// Language name (e.g., "C++")
    pub fn name(self) -> &'static str {
        self.rules().name
    }

    /// Short tag for the status bar
    pub fn abbrev(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::CPlusPlus => "cpp",
        }
    }

    /// Status bar tag for an optional language, `?` when highlighting is off
    pub fn abbrev_of(language: Option<Language>) -> &'static str {
        language.map_or("?", Language::abbrev)
    }

    /// Detect language from filename
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        if C_EXTENSIONS.contains(&ext.as_str()) {
            Some(Language::C)
        } else if CPP_EXTENSIONS.contains(&ext.as_str()) {
            Some(Language::CPlusPlus)
        } else {
            None
        }
    }

    /// Parse a configured language name
    ///
    /// Returns `Some(None)` for an explicit "none", `None` for an unknown name.
    pub fn from_name(name: &str) -> Option<Option<Self>> {
        match name.trim().to_lowercase().as_str() {
            "c" => Some(Some(Language::C)),
            "cpp" | "c++" | "cplusplus" | "cxx" => Some(Some(Language::CPlusPlus)),
            "none" | "off" | "text" => Some(None),
            _ => None,
        }
    }
}
