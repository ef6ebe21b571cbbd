use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_remix::{
    open_recipe_box, AddOutcome, DeleteOutcome, RecipeBox, RecipeError, RecipeView, RemixView,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults to ./recipe-remix.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a random recipe
    Random {
        /// Remix it with this theme
        #[arg(long)]
        remix: Option<String>,
        /// Add it to your saved recipes
        #[arg(long)]
        save: bool,
    },
    /// Show a recipe by name
    Show {
        name: String,
        #[arg(long)]
        remix: Option<String>,
        #[arg(long)]
        save: bool,
    },
    /// List saved recipes
    Saved,
    /// Remove a recipe from your saved recipes
    Forget { name: String },
    /// Interactive session
    Shell,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let mut recipe_box = match open_recipe_box(cli.config.as_deref()) {
        Ok(recipe_box) => recipe_box,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    let ok = match cli.command {
        Command::Random { remix, save } => {
            let loaded = recipe_box.load_random().await;
            show_and_follow_up(&recipe_box, loaded, remix, save).await
        }
        Command::Show { name, remix, save } => {
            let loaded = recipe_box.load_saved(&name).await;
            show_and_follow_up(&recipe_box, loaded, remix, save).await
        }
        Command::Saved => report(recipe_box.saved().map(|names| print_saved(&names))),
        Command::Forget { name } => {
            report(recipe_box.delete_saved(&name).map(|o| print_deleted(&name, o)))
        }
        Command::Shell => {
            if let Err(e) = shell(&mut recipe_box).await {
                eprintln!("{}", e);
                false
            } else {
                true
            }
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

async fn show_and_follow_up(
    recipe_box: &RecipeBox,
    loaded: Result<RecipeView, RecipeError>,
    remix: Option<String>,
    save: bool,
) -> bool {
    if !report(loaded.map(|view| print_recipe(&view))) {
        return false;
    }

    let mut ok = true;
    if let Some(theme) = remix {
        println!("Cooking up your remix... This might take a moment!");
        ok &= report(recipe_box.remix_current(&theme).await.map(|r| print_remix(&r)));
    }
    if save {
        ok &= report(save_current(recipe_box));
    }
    ok
}

fn save_current(recipe_box: &RecipeBox) -> Result<(), RecipeError> {
    let outcome = recipe_box.save_current()?;
    let name = recipe_box.current().map(|v| v.name).unwrap_or_default();
    match outcome {
        AddOutcome::Added => println!("Saved \"{}\".", name),
        AddOutcome::AlreadyExists => println!("\"{}\" is already in your saved recipes.", name),
    }
    Ok(())
}

/// Print the failure, if any, and tell whether the action succeeded
fn report(result: Result<(), RecipeError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e.user_message());
            false
        }
    }
}

const SHELL_HELP: &str = "\
Commands:
  random           load a random recipe
  open <name>      load a recipe by name
  remix <theme>    remix the current recipe
  save             save the current recipe
  saved            list saved recipes
  forget <name>    remove a saved recipe
  help             show this help
  quit             leave";

async fn shell(recipe_box: &mut RecipeBox) -> std::io::Result<()> {
    println!("{}", SHELL_HELP);
    if !recipe_box.can_remix() {
        println!("(remixing is off until an API key is configured)");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "random" => {
                println!("Loading...");
                report(recipe_box.load_random().await.map(|v| print_recipe(&v)));
            }
            "open" => {
                println!("Loading...");
                report(recipe_box.load_saved(arg).await.map(|v| print_recipe(&v)));
            }
            "remix" => {
                println!("Cooking up your remix... This might take a moment!");
                report(recipe_box.remix_current(arg).await.map(|r| print_remix(&r)));
            }
            "save" => {
                report(save_current(recipe_box));
            }
            "saved" => {
                report(recipe_box.saved().map(|names| print_saved(&names)));
            }
            "forget" => {
                report(recipe_box.delete_saved(arg).map(|o| print_deleted(arg, o)));
            }
            "help" => println!("{}", SHELL_HELP),
            "quit" | "exit" => break,
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }
    }

    Ok(())
}

fn print_recipe(view: &RecipeView) {
    println!();
    println!("{}", view.name);
    if !view.image_url.is_empty() {
        println!("{}", view.image_url);
    }
    println!();
    println!("Ingredients:");
    for line in &view.ingredients {
        println!("  - {}", line);
    }
    println!();
    println!("Instructions:");
    for segment in &view.instructions {
        println!("  {}", segment);
    }
    println!();
}

fn print_remix(remix: &RemixView) {
    println!();
    println!("Your {} Remix:", remix.theme);
    println!("{}", remix.text);
    println!();
}

fn print_saved(names: &[String]) {
    if names.is_empty() {
        println!("No saved recipes yet.");
        return;
    }
    println!("Saved recipes:");
    for name in names {
        println!("  - {}", name);
    }
}

fn print_deleted(name: &str, outcome: DeleteOutcome) {
    match outcome {
        DeleteOutcome::Deleted => println!("Removed \"{}\".", name),
        DeleteOutcome::NotPresent => println!("\"{}\" was not in your saved recipes.", name),
    }
}
