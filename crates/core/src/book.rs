use serde::{Deserialize, Serialize};

/// A single catalog entry as returned by the volumes API.
///
/// Only `id` is guaranteed to be present. Every other field may be absent
/// and must be treated as missing data rather than an error.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Volume {
    pub id: String,
    #[serde(rename = "volumeInfo")]
    pub volume_info: Option<VolumeInfo>,
}

/// Nested volume metadata. All fields optional.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<u32>,
    pub categories: Option<Vec<String>>,
    pub language: Option<String>,
    pub image_links: Option<ImageLinks>,
    pub industry_identifiers: Option<Vec<IndustryIdentifier>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
}

/// ISBN-style identifier pair, e.g. `{ "type": "ISBN_13", "identifier": "..." }`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IndustryIdentifier {
    #[serde(rename = "type")]
    pub identifier_type: String,
    pub identifier: String,
}

/// Search endpoint response body. A response with no `items` key is an
/// empty result set, not an error.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SearchResponse {
    #[serde(rename = "totalItems")]
    pub total_items: Option<u64>,
    pub items: Option<Vec<Volume>>,
}

/// One search result row shaped for display
#[derive(Debug, Serialize, Clone)]
pub struct BookSummary {
    pub id: String,
    pub title: Option<String>,
    pub authors: Option<String>,
    pub published_date: Option<String>,
    pub categories: Option<String>,
}

/// Complete search output with the composed query it answered
#[derive(Debug, Serialize, Clone)]
pub struct SearchOutput {
    pub query: String,
    pub total_items: u64,
    pub items: Vec<BookSummary>,
}

/// Single volume shaped for the detail view
#[derive(Debug, Serialize, Clone)]
pub struct DetailOutput {
    pub id: String,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub page_count: Option<u32>,
    pub categories: Vec<String>,
    pub language: Option<String>,
    pub isbn: Vec<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

/// Flatten a volume into a display summary row
pub fn summarize_volume(volume: &Volume) -> BookSummary {
    let info = volume.volume_info.as_ref();

    BookSummary {
        id: volume.id.clone(),
        title: info.and_then(|i| i.title.clone()),
        authors: info
            .and_then(|i| i.authors.as_ref())
            .filter(|a| !a.is_empty())
            .map(|a| a.join(", ")),
        published_date: info.and_then(|i| i.published_date.clone()),
        categories: info
            .and_then(|i| i.categories.as_ref())
            .filter(|c| !c.is_empty())
            .map(|c| c.join(", ")),
    }
}

/// Transform search response items into display output
pub fn transform_search_items(items: Vec<Volume>, query: String, total_items: u64) -> SearchOutput {
    let summaries = items.iter().map(summarize_volume).collect();

    SearchOutput {
        query,
        total_items,
        items: summaries,
    }
}

/// Transform a single volume into detail output, flattening the optional
/// metadata nest for display.
pub fn transform_volume(volume: Volume) -> DetailOutput {
    let info = volume.volume_info.unwrap_or_default();

    let isbn = info
        .industry_identifiers
        .unwrap_or_default()
        .iter()
        .map(|i| format!("{}: {}", i.identifier_type, i.identifier))
        .collect();

    DetailOutput {
        id: volume.id,
        title: info.title,
        authors: info.authors.unwrap_or_default(),
        publisher: info.publisher,
        published_date: info.published_date,
        page_count: info.page_count,
        categories: info.categories.unwrap_or_default(),
        language: info.language,
        isbn,
        description: info.description,
        thumbnail: info.image_links.and_then(|l| l.thumbnail),
    }
}
