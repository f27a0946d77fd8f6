// file: src/models/article.rs
// description: structured article produced from a tagged document body
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub docno: String,
    pub date: String,
    /// One fragment per heading line, in document order
    pub headline: Vec<String>,
    /// Body paragraphs, trimmed, in document order
    pub paragraphs: Vec<String>,
}

impl Article {
    pub fn headline_text(&self) -> String {
        self.headline.join(" ")
    }

    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|p| p.split_whitespace().count())
            .sum()
    }
}
