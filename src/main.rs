use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use mealdb_browser::{render, App, BrowserConfig, UiEvent};

/// Search TheMealDB by ingredient and render the resulting page
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write the page to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the popular recipes
    Popular,
    /// Search recipes by ingredient
    Search {
        /// Ingredient to search for
        term: String,
    },
    /// Show the detail overlay for a recipe
    Show {
        /// Recipe identifier
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = BrowserConfig::load()?;
    let app = App::from_config(&config)?;

    let outcome = match cli.command {
        Commands::Popular => app.dispatch(UiEvent::Loaded).await,
        Commands::Search { term } => {
            app.dispatch(UiEvent::SearchInput(term)).await;
            app.dispatch(UiEvent::SearchClicked).await
        }
        Commands::Show { id } => app.dispatch(UiEvent::CardClicked(id)).await,
    };
    info!("{:?}", outcome);

    let document = render::page_document(&app.view().snapshot());
    match cli.output {
        Some(path) => tokio::fs::write(&path, document).await?,
        None => print!("{}", document),
    }

    Ok(())
}
