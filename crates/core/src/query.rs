//! Search query composition for the catalog search endpoint.
//!
//! The search endpoint takes a single `q` string built from field-scoped
//! clauses (`intitle:`, `inauthor:`, `subject:`). Composition is pure so
//! the shell can validate input before any request goes out.

use thiserror::Error;

/// Structured search request.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    /// Raw fallback query, used only when no scoped field is given.
    pub query: Option<String>,
    pub max_results: u32,
}

impl SearchParams {
    pub const DEFAULT_MAX_RESULTS: u32 = 20;
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            genre: None,
            query: None,
            max_results: Self::DEFAULT_MAX_RESULTS,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("at least one search parameter required")]
    EmptyQuery,
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Compose the `q` string for a search request.
///
/// Scoped clauses are appended in a fixed title/author/genre order with
/// their values percent-encoded, then space-joined. The raw `query` field
/// is only consulted when no scoped field is present. An empty composed
/// query is an error; no request should be made for it.
pub fn build_search_query(params: &SearchParams) -> Result<String, QueryError> {
    let mut clauses = Vec::new();

    if let Some(title) = non_blank(&params.title) {
        clauses.push(format!("intitle:{}", urlencoding::encode(title)));
    }
    if let Some(author) = non_blank(&params.author) {
        clauses.push(format!("inauthor:{}", urlencoding::encode(author)));
    }
    if let Some(genre) = non_blank(&params.genre) {
        clauses.push(format!("subject:{}", urlencoding::encode(genre)));
    }

    let query = if clauses.is_empty() {
        non_blank(&params.query).unwrap_or_default().to_string()
    } else {
        clauses.join(" ")
    };

    if query.is_empty() {
        return Err(QueryError::EmptyQuery);
    }

    Ok(query)
}
