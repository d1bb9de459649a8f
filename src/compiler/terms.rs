//! Search term tokenization
//!
//! Splits the global search box value into terms and classifies each one.
//! A term containing exactly one colon is scoped to a single field
//! (`field:text`); every other term is global and must match at least one
//! configured column. Terms are derived once per request and never re-split.

/// One classified token from the search box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerm {
    /// `field:text` — case-insensitive substring match on one field
    Scoped { field: String, text: String },
    /// Matched case-insensitively against every configured column
    Global(String),
}

impl SearchTerm {
    /// Classifies one whitespace-delimited token.
    ///
    /// Colon count must equal exactly one for a scoped term; a token with
    /// two or more colons is global. This is defined protocol behavior,
    /// not an error case.
    pub fn classify(token: &str) -> Self {
        if token.matches(':').count() == 1 {
            // Exactly one colon, so the split cannot fail.
            match token.split_once(':') {
                Some((field, text)) => SearchTerm::Scoped {
                    field: field.to_string(),
                    text: text.to_string(),
                },
                None => SearchTerm::Global(token.to_string()),
            }
        } else {
            SearchTerm::Global(token.to_string())
        }
    }

    pub fn is_scoped(&self) -> bool {
        matches!(self, SearchTerm::Scoped { .. })
    }
}

/// Tokenizes a raw search value on whitespace and classifies every token.
///
/// An empty or all-whitespace value yields no terms.
pub fn tokenize(search_value: &str) -> Vec<SearchTerm> {
    search_value
        .split_whitespace()
        .map(SearchTerm::classify)
        .collect()
}
