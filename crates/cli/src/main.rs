use api_rest::ApiDoc;
use clap::{Parser, Subcommand};
use recipes_core::{load_seed, Recipe, RecipeStore, UpdatePolicy, DEFAULT_SEED_FILE};
use std::path::PathBuf;
use utoipa::OpenApi;

#[derive(Parser)]
#[command(name = "recipes-cli")]
#[command(about = "Recipes service CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the recipes in a seed file
    List {
        /// Seed file to read
        #[arg(long, default_value = DEFAULT_SEED_FILE)]
        file: PathBuf,
    },
    /// Search a seed file for recipes carrying a tag (case-insensitive)
    Search {
        /// Tag to match
        tag: String,
        /// Seed file to read
        #[arg(long, default_value = DEFAULT_SEED_FILE)]
        file: PathBuf,
    },
    /// Print the OpenAPI document of the REST API
    Openapi,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Some(Commands::List { file }) => {
            let recipes = load_seed(&file)?;
            print_recipes(&recipes);
        }
        Some(Commands::Search { tag, file }) => {
            let store = RecipeStore::with_recipes(load_seed(&file)?, UpdatePolicy::default());
            print_recipes(&store.search_by_tag(&tag));
        }
        Some(Commands::Openapi) => {
            println!("{}", ApiDoc::openapi().to_pretty_json()?);
        }
        None => {
            println!("Use 'recipes-cli --help' for commands");
        }
    }

    Ok(())
}

fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }
    for recipe in recipes {
        println!("{}", describe(recipe));
    }
}

fn describe(recipe: &Recipe) -> String {
    format!(
        "ID: {}, Name: {}, Tags: [{}], Published: {}",
        recipe.id,
        recipe.name,
        recipe.tags.join(", "),
        recipe.published_at.to_rfc3339()
    )
}
