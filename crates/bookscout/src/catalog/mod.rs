use crate::prelude::{println, *};
use bookscout_core::book::{SearchResponse, Volume};
use bookscout_core::query::{build_search_query, SearchParams};
use tokio::task::JoinHandle;

pub mod get;
pub mod search;

const CATALOG_API_BASE: &str = "https://www.googleapis.com/books/v1/volumes";

#[derive(Debug, clap::Parser)]
#[command(name = "catalog")]
#[command(about = "Book catalog (Google Books volumes API) operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Search the catalog by title, author or genre
    #[clap(name = "search")]
    Search(search::SearchOptions),

    /// Fetch the full record for one book
    #[clap(name = "get")]
    Get(get::GetOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Catalog API Base: {}", CATALOG_API_BASE);
        println!();
    }

    match app.command {
        Commands::Search(options) => search::run(options, global).await,
        Commands::Get(options) => get::run(options, global).await,
    }
}

pub fn get_api_base() -> &'static str {
    CATALOG_API_BASE
}

/// Thin client for the remote catalog service.
///
/// Each call is exactly one outbound request: no caching, no retry, no
/// rate limiting. The client enforces no timeout of its own; transport
/// defaults govern request lifetime.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self::with_base_url(CATALOG_API_BASE.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Search the catalog. The composed query is validated before any
    /// request goes out.
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse, Error> {
        let query = build_search_query(params).map_err(|e| Error::Validation(e.to_string()))?;

        let url = f!(
            "{}?q={}&maxResults={}",
            self.base_url,
            urlencoding::encode(&query),
            params.max_results
        );

        let response = self.http.get(&url).send().await.map_err(|e| {
            log::debug!("Catalog search transport failure: {e}");
            Error::Request {
                status: None,
                message: "Failed to fetch books. Please try again.".to_string(),
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::Request {
                status: Some(status.as_u16()),
                message: f!("Catalog search failed with HTTP {status}"),
            });
        }

        response.json::<SearchResponse>().await.map_err(|e| {
            log::debug!("Catalog search parse failure: {e}");
            Error::Request {
                status: None,
                message: "Failed to fetch books. Please try again.".to_string(),
            }
        })
    }

    /// Fetch one volume by identifier.
    pub async fn get_volume(&self, id: &str) -> Result<Volume, Error> {
        let url = f!("{}/{}", self.base_url, urlencoding::encode(id));

        let response = self.http.get(&url).send().await.map_err(|e| {
            log::debug!("Catalog detail transport failure: {e}");
            Error::Request {
                status: None,
                message: "Failed to fetch book details. Please try again.".to_string(),
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::Request {
                status: Some(status.as_u16()),
                message: f!("Catalog lookup for {id} failed with HTTP {status}"),
            });
        }

        response.json::<Volume>().await.map_err(|e| {
            log::debug!("Catalog detail parse failure: {e}");
            Error::Request {
                status: None,
                message: "Failed to fetch book details. Please try again.".to_string(),
            }
        })
    }

    /// Start a search as a background lookup the caller may abandon.
    pub fn search_task(&self, params: SearchParams) -> Lookup<SearchResponse> {
        let client = self.clone();
        Lookup::spawn(async move { client.search(&params).await })
    }

    /// Start a detail lookup as a background task the caller may abandon.
    pub fn details_task(&self, id: String) -> Lookup<Volume> {
        let client = self.clone();
        Lookup::spawn(async move { client.get_volume(&id).await })
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle on an in-flight catalog lookup.
///
/// Abandoning drops interest in the result only: the request itself is
/// left to finish on its own and its response is discarded.
pub struct Lookup<T> {
    handle: JoinHandle<Result<T, Error>>,
}

impl<T: Send + 'static> Lookup<T> {
    fn spawn<F>(fut: F) -> Self
    where
        F: std::future::Future<Output = Result<T, Error>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(fut),
        }
    }

    /// Wait for the lookup to finish.
    pub async fn wait(self) -> Result<T, Error> {
        self.handle.await.map_err(|e| Error::Request {
            status: None,
            message: f!("Lookup task failed: {e}"),
        })?
    }

    /// Drop interest in the result.
    pub fn abandon(self) {
        drop(self.handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_empty_params_fails_before_any_request() {
        // The base URL is unroutable, so anything but an early validation
        // error would surface as a transport failure instead.
        let client = CatalogClient::with_base_url("http://127.0.0.1:1".to_string());

        let result = client.search(&SearchParams::default()).await;

        match result {
            Err(Error::Validation(message)) => {
                assert!(message.contains("at least one search parameter"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_transport_failure_is_generic() {
        let client = CatalogClient::with_base_url("http://127.0.0.1:1".to_string());
        let params = SearchParams {
            title: Some("Dune".to_string()),
            ..Default::default()
        };

        let result = client.search(&params).await;

        match result {
            Err(Error::Request { status, message }) => {
                assert_eq!(status, None);
                assert_eq!(message, "Failed to fetch books. Please try again.");
            }
            other => panic!("expected request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_details_transport_failure_is_generic() {
        let client = CatalogClient::with_base_url("http://127.0.0.1:1".to_string());

        let result = client.get_volume("abc123").await;

        match result {
            Err(Error::Request { status, message }) => {
                assert_eq!(status, None);
                assert_eq!(message, "Failed to fetch book details. Please try again.");
            }
            other => panic!("expected request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_lookup_wait_propagates_error() {
        let client = CatalogClient::with_base_url("http://127.0.0.1:1".to_string());

        let result = client.details_task("abc123".to_string()).wait().await;

        assert!(matches!(result, Err(Error::Request { .. })));
    }

    #[tokio::test]
    async fn test_lookup_abandon_discards_result() {
        let client = CatalogClient::with_base_url("http://127.0.0.1:1".to_string());

        let lookup = client.details_task("abc123".to_string());
        lookup.abandon();
        // Nothing to assert: the task keeps running detached and its
        // result is never observed.
    }
}
