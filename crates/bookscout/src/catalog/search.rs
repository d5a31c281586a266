use crate::prelude::{println, *};
use bookscout_core::book::{transform_search_items, BookSummary, SearchOutput};
use bookscout_core::query::{build_search_query, SearchParams};
use colored::Colorize;

use super::CatalogClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SearchOptions {
    /// Title to search for (intitle: clause)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Author to search for (inauthor: clause)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Genre or subject to search for (subject: clause)
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Raw query, used when no scoped field is given
    #[arg(short, long)]
    pub query: Option<String>,

    /// Maximum number of results to request
    #[arg(short, long, env = "BOOKSCOUT_MAX_RESULTS", default_value = "20")]
    pub max_results: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchOptions {
    fn into_params(self) -> SearchParams {
        SearchParams {
            title: self.title,
            author: self.author,
            genre: self.genre,
            query: self.query,
            max_results: self.max_results,
        }
    }
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Searching catalog...");
    }

    let json = options.json;
    let output = search_books_data(options.into_params()).await?;

    if json {
        output_json(&output)?;
    } else {
        output_formatted(&output)?;
    }

    Ok(())
}

/// Runs a catalog search and returns it as a structured SearchOutput
pub async fn search_books_data(params: SearchParams) -> Result<SearchOutput> {
    // Composed up front so the output can echo the query that actually ran.
    let query = build_search_query(&params).map_err(|e| Error::Validation(e.to_string()))?;

    let client = CatalogClient::new();
    let response = client.search_task(params).wait().await?;

    let total_items = response.total_items.unwrap_or(0);
    let items = response.items.unwrap_or_default();

    Ok(transform_search_items(items, query, total_items))
}

/// Convert search output to JSON string
fn format_search_json(output: &SearchOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert search output to formatted text with colors
fn format_search_text(output: &SearchOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "CATALOG SEARCH RESULTS ({} matches)",
            output.total_items
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "\n{}: {}\n",
        "Query".green(),
        output.query.bright_white()
    ));

    if output.items.is_empty() {
        result.push_str(&format!("\n{}\n", "No books matched this search.".yellow()));
    } else {
        for (idx, book) in output.items.iter().enumerate() {
            result.push_str(&format!(
                "\n{} {}\n",
                format!("[{}]", idx + 1).yellow().bold(),
                book.title
                    .as_ref()
                    .unwrap_or(&"(No title)".to_string())
                    .white()
                    .bold()
            ));

            result.push_str(&format!(
                "    {}: {} | {}: {}\n",
                "Authors".green(),
                book.authors
                    .as_ref()
                    .unwrap_or(&"unknown".to_string())
                    .bright_white(),
                "Published".green(),
                book.published_date
                    .as_ref()
                    .unwrap_or(&"unknown".to_string())
                    .bright_black()
            ));

            if let Some(categories) = &book.categories {
                result.push_str(&format!(
                    "    {}: {}\n",
                    "Categories".green(),
                    categories.bright_magenta()
                ));
            }

            result.push_str(&format!(
                "    {}: {} | {}: {}\n",
                "ID".green(),
                book.id.bright_white(),
                "Details".green(),
                format!("bookscout catalog get {}", book.id).cyan()
            ));
        }
    }

    result.push_str(&format!("\n{}:\n", "To favorite a book".bright_white().bold()));
    result.push_str(&format!("  {}\n", "bookscout favorites add <ID>".cyan()));
    if let Some(first) = output.items.first() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Example".green(),
            format!("bookscout favorites add {}", first.id).cyan()
        ));
    }

    result.push('\n');
    result
}

fn output_json(output: &SearchOutput) -> Result<()> {
    let json = format_search_json(output)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(output: &SearchOutput) -> Result<()> {
    let formatted = format_search_text(output);
    print!("{}", formatted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_summary(id: &str, title: &str) -> BookSummary {
        BookSummary {
            id: id.to_string(),
            title: Some(title.to_string()),
            authors: Some("Frank Herbert".to_string()),
            published_date: Some("1965".to_string()),
            categories: Some("Fiction".to_string()),
        }
    }

    fn create_test_output(items: Vec<BookSummary>, query: &str) -> SearchOutput {
        let total_items = items.len() as u64;
        SearchOutput {
            query: query.to_string(),
            total_items,
            items,
        }
    }

    #[test]
    fn test_format_search_json_basic() {
        let output = create_test_output(vec![create_test_summary("abc", "Dune")], "intitle:Dune");

        let json = format_search_json(&output).unwrap();

        assert!(json.contains("\"id\": \"abc\""));
        assert!(json.contains("\"title\": \"Dune\""));
        assert!(json.contains("\"query\": \"intitle:Dune\""));
        assert!(json.contains("\"total_items\": 1"));
    }

    #[test]
    fn test_format_search_json_empty() {
        let output = create_test_output(vec![], "intitle:nothing");

        let json = format_search_json(&output).unwrap();

        assert!(json.contains("\"items\": []"));
    }

    #[test]
    fn test_format_search_json_structure() {
        let output = create_test_output(vec![create_test_summary("abc", "Dune")], "intitle:Dune");

        let json = format_search_json(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed.get("query").is_some());
        assert!(parsed.get("items").is_some());
        assert_eq!(parsed["items"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_format_search_text_basic() {
        let output = create_test_output(vec![create_test_summary("abc", "Dune")], "intitle:Dune");

        let formatted = format_search_text(&output);

        assert!(formatted.contains("CATALOG SEARCH RESULTS"));
        assert!(formatted.contains("Dune"));
        assert!(formatted.contains("Frank Herbert"));
        assert!(formatted.contains("[1]"));
        assert!(formatted.contains("intitle:Dune"));
    }

    #[test]
    fn test_format_search_text_multiple() {
        let output = create_test_output(
            vec![
                create_test_summary("a", "Dune"),
                create_test_summary("b", "Dune Messiah"),
            ],
            "inauthor:Herbert",
        );

        let formatted = format_search_text(&output);

        assert!(formatted.contains("[1]"));
        assert!(formatted.contains("[2]"));
        assert!(formatted.contains("Dune Messiah"));
    }

    #[test]
    fn test_format_search_text_empty() {
        let output = create_test_output(vec![], "intitle:nothing");

        let formatted = format_search_text(&output);

        assert!(formatted.contains("No books matched this search."));
    }

    #[test]
    fn test_format_search_text_missing_fields() {
        let summary = BookSummary {
            id: "bare".to_string(),
            title: None,
            authors: None,
            published_date: None,
            categories: None,
        };
        let output = create_test_output(vec![summary], "intitle:x");

        let formatted = format_search_text(&output);

        assert!(formatted.contains("(No title)"));
        assert!(formatted.contains("unknown"));
        assert!(!formatted.contains("Categories"));
    }

    #[test]
    fn test_format_search_text_includes_commands() {
        let output = create_test_output(vec![create_test_summary("abc", "Dune")], "intitle:Dune");

        let formatted = format_search_text(&output);

        assert!(formatted.contains("bookscout catalog get abc"));
        assert!(formatted.contains("bookscout favorites add abc"));
    }
}
