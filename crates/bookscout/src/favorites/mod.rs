use crate::catalog::CatalogClient;
use crate::prelude::{new_table, println, *};
use bookscout_core::book::{summarize_volume, Volume};
use colored::Colorize;

pub mod store;

pub use store::FavoritesStore;

#[derive(Debug, clap::Parser)]
#[command(name = "favorites")]
#[command(about = "Local favorites list operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Fetch a book by id and add it to the favorites list
    #[clap(name = "add")]
    Add(AddOptions),

    /// Remove a book from the favorites list
    #[clap(name = "remove")]
    Remove(RemoveOptions),

    /// List favorited books in insertion order
    #[clap(name = "list")]
    List(ListOptions),

    /// Check whether a book is in the favorites list
    #[clap(name = "check")]
    Check(CheckOptions),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct AddOptions {
    /// Volume identifier, as returned by catalog search
    #[arg(value_name = "VOLUME_ID")]
    pub id: String,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct RemoveOptions {
    /// Volume identifier to remove
    #[arg(value_name = "VOLUME_ID")]
    pub id: String,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CheckOptions {
    /// Volume identifier to check
    #[arg(value_name = "VOLUME_ID")]
    pub id: String,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let path = store::default_store_path()?;

    if global.verbose {
        println!("Favorites store: {}", path.display());
        println!();
    }

    let mut store = FavoritesStore::open(path);

    match app.command {
        Commands::Add(options) => add(options, &mut store).await,
        Commands::Remove(options) => remove(options, &mut store),
        Commands::List(options) => list(options, &store),
        Commands::Check(options) => check(options, &store),
    }
}

async fn add(options: AddOptions, store: &mut FavoritesStore) -> Result<()> {
    if store.is_favorite(&options.id) {
        println!("{} is already in your favorites.", options.id.bright_white());
        return Ok(());
    }

    let client = CatalogClient::new();
    let volume = client.details_task(options.id.clone()).wait().await?;

    let title = display_title(&volume);
    store.add(volume);

    println!(
        "Added {} ({}) to favorites.",
        title.bright_white().bold(),
        options.id
    );
    Ok(())
}

fn remove(options: RemoveOptions, store: &mut FavoritesStore) -> Result<()> {
    if !store.is_favorite(&options.id) {
        println!("{} is not in your favorites.", options.id.bright_white());
        return Ok(());
    }

    store.remove(&options.id);
    println!("Removed {} from favorites.", options.id.bright_white());
    Ok(())
}

fn list(options: ListOptions, store: &FavoritesStore) -> Result<()> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(store.favorites())?);
    } else {
        print!("{}", format_favorites_text(store.favorites()));
    }
    Ok(())
}

fn check(options: CheckOptions, store: &FavoritesStore) -> Result<()> {
    if store.is_favorite(&options.id) {
        println!("{} is in your favorites.", options.id.bright_white());
    } else {
        println!("{} is not in your favorites.", options.id.bright_white());
    }
    Ok(())
}

fn display_title(volume: &Volume) -> String {
    volume
        .volume_info
        .as_ref()
        .and_then(|i| i.title.clone())
        .unwrap_or_else(|| "(No title)".to_string())
}

/// Convert the favorites list to a formatted table
fn format_favorites_text(books: &[Volume]) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!("FAVORITES ({} books)", books.len())
            .bright_cyan()
            .bold()
    ));
    result.push_str(&format!("{}\n\n", "=".repeat(80).bright_cyan()));

    if books.is_empty() {
        result.push_str(&format!("{}\n", "No favorites yet.".yellow()));
        result.push_str(&format!(
            "\n{}:\n  {}\n",
            "To add one".bright_white().bold(),
            "bookscout favorites add <ID>".cyan()
        ));
        result.push('\n');
        return result;
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["ID", "Title", "Authors", "Published"]);

    for book in books {
        let summary = summarize_volume(book);
        table.add_row(prettytable::row![
            summary.id,
            summary.title.unwrap_or_else(|| "(No title)".to_string()),
            summary.authors.unwrap_or_else(|| "unknown".to_string()),
            summary.published_date.unwrap_or_else(|| "unknown".to_string())
        ]);
    }

    result.push_str(&table.to_string());

    result.push_str(&format!(
        "\n{}:\n  {}\n",
        "To remove one".bright_white().bold(),
        "bookscout favorites remove <ID>".cyan()
    ));

    result.push('\n');
    result
}
