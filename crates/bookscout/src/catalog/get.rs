use crate::prelude::{println, *};
use bookscout_core::book::{transform_volume, DetailOutput};
use colored::Colorize;

use super::CatalogClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct GetOptions {
    /// Volume identifier, as returned by catalog search
    #[arg(value_name = "VOLUME_ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: GetOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching volume {}...", options.id);
    }

    let detail = get_book_details_data(options.id).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        print!("{}", format_details_text(&detail));
    }

    Ok(())
}

/// Fetches one volume and returns it shaped for the detail view
pub async fn get_book_details_data(id: String) -> Result<DetailOutput> {
    let client = CatalogClient::new();
    let volume = client.details_task(id).wait().await?;

    Ok(transform_volume(volume))
}

/// Convert detail output to formatted text with colors
fn format_details_text(detail: &DetailOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        detail
            .title
            .as_ref()
            .unwrap_or(&"(No title)".to_string())
            .to_uppercase()
            .bright_cyan()
            .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(&format!("\n{}: {}\n", "ID".green(), detail.id.bright_white()));

    if !detail.authors.is_empty() {
        result.push_str(&format!(
            "{}: {}\n",
            "Authors".green(),
            detail.authors.join(", ").bright_white()
        ));
    }
    if let Some(publisher) = &detail.publisher {
        result.push_str(&format!("{}: {}\n", "Publisher".green(), publisher.bright_white()));
    }
    if let Some(published_date) = &detail.published_date {
        result.push_str(&format!(
            "{}: {}\n",
            "Published".green(),
            published_date.bright_white()
        ));
    }
    if let Some(page_count) = detail.page_count {
        result.push_str(&format!(
            "{}: {}\n",
            "Pages".green(),
            page_count.to_string().bright_white()
        ));
    }
    if !detail.categories.is_empty() {
        result.push_str(&format!(
            "{}: {}\n",
            "Categories".green(),
            detail.categories.join(", ").bright_magenta()
        ));
    }
    if let Some(language) = &detail.language {
        result.push_str(&format!("{}: {}\n", "Language".green(), language.bright_white()));
    }
    for isbn in &detail.isbn {
        result.push_str(&format!("{}: {}\n", "ISBN".green(), isbn.bright_white()));
    }
    if let Some(thumbnail) = &detail.thumbnail {
        result.push_str(&format!(
            "{}: {}\n",
            "Cover".green(),
            thumbnail.cyan().underline()
        ));
    }

    if let Some(description) = &detail.description {
        result.push_str(&format!("\n{}\n", "DESCRIPTION".bright_yellow().bold()));
        result.push_str(&format!("{}\n", "-".repeat(80).bright_yellow()));
        result.push_str(&format!("{}\n", description));
    }

    result.push_str(&format!("\n{}:\n", "To favorite this book".bright_white().bold()));
    result.push_str(&format!(
        "  {}\n",
        format!("bookscout favorites add {}", detail.id).cyan()
    ));

    result.push('\n');
    result
}
