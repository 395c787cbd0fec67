use cinelog::api::{CatalogApi, CmdMessage, MessageLevel};
use cinelog::commands::RatingStats;
use cinelog::config::{CatalogConfig, StorageKind};
use cinelog::error::Result;
use cinelog::model::Movie;
use cinelog::omdb::{OmdbClient, DEFAULT_API_URL};
use cinelog::store::json::FileStore;
use cinelog::store::sqlite::SqliteStore;
use cinelog::store::MovieStore;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let data_dir = resolve_data_dir();
    let config = CatalogConfig::load(&data_dir).unwrap_or_default();

    let api_url = config
        .api_url
        .clone()
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let lookup = if cli.offline {
        None
    } else {
        OmdbClient::from_env(&api_url)?
    };

    match cli.storage.unwrap_or(config.storage) {
        StorageKind::Json => {
            let path = cli.data.unwrap_or_else(|| data_dir.join("movies.json"));
            run_menu(CatalogApi::new(FileStore::new(path)), lookup)
        }
        StorageKind::Sqlite => {
            let path = cli.data.unwrap_or_else(|| data_dir.join("movies.db"));
            run_menu(CatalogApi::new(SqliteStore::open(path)?), lookup)
        }
    }
}

fn resolve_data_dir() -> PathBuf {
    ProjectDirs::from("com", "cinelog", "cinelog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

const MENU: &str = "Menu:
0. Exit
1. List movies
2. Add movie
3. Delete movie
4. Update movie
5. Stats
6. Random movie
7. Search movie
8. Movies sorted by rating";

fn run_menu<S: MovieStore>(mut api: CatalogApi<S>, lookup: Option<OmdbClient>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{}", "********** My Movies Database **********".bold());

    loop {
        println!();
        println!("{}", MENU);
        println!();
        // EOF ends the session as cleanly as choice 0.
        let Some(choice) = read_line(&mut input, "Enter choice (0-8): ")? else {
            break;
        };
        println!();

        let outcome = match choice.as_str() {
            "0" => {
                println!("Bye!");
                break;
            }
            "1" => handle_list(&api),
            "2" => handle_add(&mut api, &mut input, lookup.as_ref()),
            "3" => handle_delete(&mut api, &mut input),
            "4" => handle_update(&mut api, &mut input),
            "5" => handle_stats(&api),
            "6" => handle_random(&api),
            "7" => handle_search(&api, &mut input),
            "8" => handle_sorted(&api),
            _ => {
                println!("{}", "Invalid choice, please try again.".yellow());
                Ok(())
            }
        };
        // No menu action is fatal; report and return to the prompt.
        if let Err(e) = outcome {
            println!("{}", e.to_string().red());
        }
    }
    Ok(())
}

fn handle_list<S: MovieStore>(api: &CatalogApi<S>) -> Result<()> {
    let result = api.list_movies()?;
    let count = result.listed.len();
    println!(
        "{} movie{} in total",
        count,
        if count == 1 { "" } else { "s" }
    );
    print_movies(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add<S: MovieStore, R: BufRead>(
    api: &mut CatalogApi<S>,
    input: &mut R,
    lookup: Option<&OmdbClient>,
) -> Result<()> {
    let Some(title) = prompt_nonempty(input, "Enter movie name: ")? else {
        return Ok(());
    };

    let movie = match lookup {
        Some(client) => match client.lookup(&title) {
            Ok(movie) => movie,
            // Lookup failures abort the add; nothing is written.
            Err(e) => {
                println!("{}", e.to_string().red());
                return Ok(());
            }
        },
        None => {
            let Some(year) = prompt_year(input, "Enter release year: ")? else {
                return Ok(());
            };
            let Some(rating) = prompt_rating(input, "Enter rating (1.0-10.0): ")? else {
                return Ok(());
            };
            Movie::new(title, year, rating)
        }
    };

    let result = api.add_movie(movie)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete<S: MovieStore, R: BufRead>(api: &mut CatalogApi<S>, input: &mut R) -> Result<()> {
    let Some(title) = prompt_nonempty(input, "Enter movie name to delete: ")? else {
        return Ok(());
    };
    let result = api.delete_movie(&title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update<S: MovieStore, R: BufRead>(api: &mut CatalogApi<S>, input: &mut R) -> Result<()> {
    let Some(title) = prompt_nonempty(input, "Enter movie name to update: ")? else {
        return Ok(());
    };
    let Some(rating) = prompt_rating(input, "Enter new rating (1.0-10.0): ")? else {
        return Ok(());
    };
    let result = api.update_movie(&title, rating)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats<S: MovieStore>(api: &CatalogApi<S>) -> Result<()> {
    let result = api.stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_random<S: MovieStore>(api: &CatalogApi<S>) -> Result<()> {
    let result = api.random_movie()?;
    if let Some(movie) = result.listed.first() {
        println!("Your movie for tonight: {}", movie.to_string().green());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search<S: MovieStore, R: BufRead>(api: &CatalogApi<S>, input: &mut R) -> Result<()> {
    let Some(term) = prompt_nonempty(input, "Enter part of movie name: ")? else {
        return Ok(());
    };
    let result = api.search_movies(&term)?;
    print_movies(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_sorted<S: MovieStore>(api: &CatalogApi<S>) -> Result<()> {
    let result = api.movies_by_rating()?;
    print_movies(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn print_stats(stats: &RatingStats) {
    println!("Average rating: {:.2}", stats.average);
    println!("Median rating:  {:.2}", stats.median);
    println!("Best movie(s):");
    for movie in &stats.best {
        println!("- {}: {:.1}", movie.title, movie.rating);
    }
    println!("Worst movie(s):");
    for movie in &stats.worst {
        println!("- {}: {:.1}", movie.title, movie.rating);
    }
}

fn print_movies(movies: &[Movie]) {
    for movie in movies {
        println!("{}", movie);
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Prompt and read one line. `None` means EOF on stdin.
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_nonempty<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    loop {
        let Some(line) = read_line(input, prompt)? else {
            return Ok(None);
        };
        if !line.is_empty() {
            return Ok(Some(line));
        }
        println!("{}", "Input cannot be empty. Please try again.".yellow());
    }
}

fn prompt_year<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<i32>> {
    loop {
        let Some(line) = read_line(input, prompt)? else {
            return Ok(None);
        };
        match line.parse::<i32>() {
            Ok(year) => return Ok(Some(year)),
            Err(_) => println!("{}", "Error: Invalid number.".yellow()),
        }
    }
}

fn prompt_rating<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<f64>> {
    loop {
        let Some(line) = read_line(input, prompt)? else {
            return Ok(None);
        };
        match line.parse::<f64>() {
            Ok(rating) if (1.0..=10.0).contains(&rating) => return Ok(Some(rating)),
            Ok(_) => println!("{}", "Error: Rating must be between 1.0 and 10.0.".yellow()),
            Err(_) => println!("{}", "Error: Invalid number.".yellow()),
        }
    }
}
