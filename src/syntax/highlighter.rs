//! Incremental highlighting engine
//!
//! The colors of a row are a function of its text and of the continuation
//! state of the row above. After an edit the engine re-tokenizes the edited
//! row and walks forward only while the continuation state keeps changing;
//! the first row whose state comes out unchanged shields everything below it.

use crate::row::Row;

use super::language::Language;
use super::rules::RuleSet;
use super::tokenizer::Tokenizer;

/// Re-tokenizes rows for the active language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlighter {
    language: Option<Language>,
}

impl Highlighter {
    /// Create a highlighter, `None` disables highlighting
    pub fn new(language: Option<Language>) -> Self {
        Self { language }
    }

    /// Get the active language
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Change the active language; callers should `refresh_all` afterwards
    pub fn set_language(&mut self, language: Option<Language>) {
        self.language = language;
    }

    /// Re-highlight one row and cascade into the rows below it
    ///
    /// Returns the number of rows that were re-tokenized. Out-of-range
    /// indices and a disabled highlighter are no-ops.
    pub fn update(&self, rows: &mut [Row], row_index: usize) -> usize {
        let Some(language) = self.language else {
            return 0;
        };
        let rules = language.rules();

        let mut visited = 0;
        let mut next = Some(row_index);
        while let Some(index) = next.take() {
            if index >= rows.len() {
                break;
            }
            visited += 1;
            if highlight_row(rows, index, rules) {
                tracing::trace!(
                    row = index,
                    open = rows[index].is_open(),
                    "continuation state changed, cascading"
                );
                next = Some(index + 1);
            }
        }
        visited
    }

    /// Re-derive every row from the top of the document
    ///
    /// With no language every row goes back to the default style and is
    /// marked closed.
    pub fn refresh_all(&self, rows: &mut [Row]) {
        match self.language {
            Some(language) => {
                let rules = language.rules();
                for index in 0..rows.len() {
                    highlight_row(rows, index, rules);
                }
            }
            None => {
                for row in rows.iter_mut() {
                    row.reset_style();
                    row.set_open(false);
                }
            }
        }
        tracing::debug!(
            rows = rows.len(),
            language = self.language.map(Language::name),
            "re-highlighted document"
        );
    }
}

/// Tokenize and paint one row, returns whether its continuation state changed
fn highlight_row(rows: &mut [Row], index: usize, rules: &RuleSet) -> bool {
    let upper_open = index
        .checked_sub(1)
        .and_then(|i| rows.get(i))
        .is_some_and(Row::is_open);

    let row = &mut rows[index];
    let (spans, open) = {
        let mut tokenizer = Tokenizer::new(row, rules, upper_open);
        let spans: Vec<_> = tokenizer
            .by_ref()
            .map(|token| (token.kind.color(), token.len()))
            .collect();
        (spans, tokenizer.is_open())
    };

    let mut pos = 0;
    for (color, len) in spans {
        let end = (pos + len).min(row.len());
        for i in pos..end {
            row.set_fg(i, color);
        }
        pos = end;
    }

    let previous_open = row.is_open();
    // Empty rows carry the state of the row above through unchanged
    row.set_open(if row.is_empty() { upper_open } else { open });
    row.is_open() != previous_open
}
