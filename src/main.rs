mod bee;
mod config;
mod error;
mod games;
mod logging;
mod sweeper;
mod words;

use config::Config;
use error::{Error, Result};
use games::bugfinder::BugFinderConfig;
use games::spellingbee::SpellingBeeConfig;
use std::env;
use tracing::{error, info};

fn main()
{
    let config = Config::from_env();
    if let Err(err) = logging::init(&config) {
        eprintln!("Warning: couldn't open log file ({err}). Continuing without logs.");
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let code = match run(&args, &config) {
        Ok(()) => 0,
        Err(err) => {
            error!(%err, "game ended with an error");
            eprintln!("Error: {err}");
            err.exit_code()
        }
    };

    info!(code, "Exit game.");
    std::process::exit(code);
}

fn run(args: &[String], config: &Config) -> Result<()>
{
    let command = args.first().map(String::as_str);
    let rest = args.get(1..).unwrap_or_default();
    match command {
        None => interactive_menu(config),
        Some("list") => {
            list_games();
            Ok(())
        }
        Some("bugfinder") | Some("minesweeper") => run_game("bugfinder", rest, config),
        Some("spellingbee") => run_game("spellingbee", rest, config),
        Some("-h") | Some("--help") => {
            print_help();
            Ok(())
        }
        Some(other) => Err(Error::InvalidArgument(format!(
            "Unknown command '{other}'. Run with --help."
        ))),
    }
}

fn run_game(name: &str, args: &[String], config: &Config) -> Result<()>
{
    match name {
        "bugfinder" => games::bugfinder::run(BugFinderConfig::from_args(args)?),
        "spellingbee" => games::spellingbee::run(SpellingBeeConfig::from_args(args, config)?),
        _ => Err(Error::InvalidArgument(format!(
            "Unknown game '{name}'. Run with --help."
        ))),
    }
}

fn interactive_menu(config: &Config) -> Result<()>
{
    let registry = games::registry();
    println!("Desk Puzzles");
    println!();
    println!("Select a game:");
    for (idx, game) in registry.iter().enumerate() {
        println!("  {}. {} - {}", idx + 1, game.name, game.description);
    }
    println!();
    print!("Enter number or name (default 1, q to quit): ");
    std::io::Write::flush(&mut std::io::stdout())?;

    let input = games::read_line()?;

    match select_game(input.trim(), &registry)? {
        Some(name) => run_game(name, &[], config),
        None => Ok(()),
    }
}

/// Resolves a menu answer to a game name; `None` means quit.
fn select_game(choice: &str, registry: &[games::GameDescriptor]) -> Result<Option<&'static str>>
{
    if choice.is_empty() {
        return Ok(registry.first().map(|game| game.name));
    }
    if choice.eq_ignore_ascii_case("q") {
        return Ok(None);
    }
    if let Ok(index) = choice.parse::<usize>() {
        if index >= 1 && index <= registry.len() {
            return Ok(Some(registry[index - 1].name));
        }
    }

    registry
        .iter()
        .find(|game| game.name.eq_ignore_ascii_case(choice))
        .map(|game| Some(game.name))
        .ok_or_else(|| Error::InvalidArgument("Invalid selection.".to_string()))
}

fn list_games()
{
    println!("Available games:");
    for game in games::registry() {
        println!("  {:<12} - {}", game.name, game.description);
    }
}

fn print_help()
{
    println!("desk-puzzles");
    println!("\nUsage:");
    println!("  desk-puzzles list");
    println!("  desk-puzzles bugfinder [GRID_LEN [NUM_MINES]]");
    println!("  desk-puzzles spellingbee [--dictionary PATH]");
    println!("\nNotes:");
    println!("  GRID_LEN is 8-32 (default 16); NUM_MINES must lie between 1/8 and 1/3 of the squares.");
    println!("  Values out of range fall back to the defaults.");
    println!("  DESK_PUZZLES_SAVE_DIR sets where finished SpellingBee games are saved (default .).");
    println!("  DESK_PUZZLES_DICTIONARY points at a word list, one word per line.");
    println!("  DESK_PUZZLES_LOG_FILE and RUST_LOG control logging (default desk-puzzles.log, info).");
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn menu_choice_by_number_name_or_default()
    {
        let registry = games::registry();
        assert_eq!(select_game("", &registry).unwrap(), Some("bugfinder"));
        assert_eq!(select_game("2", &registry).unwrap(), Some("spellingbee"));
        assert_eq!(select_game("SpellingBee", &registry).unwrap(), Some("spellingbee"));
        assert_eq!(select_game("q", &registry).unwrap(), None);
        assert!(select_game("9", &registry).is_err());
        assert!(select_game("chess", &registry).is_err());
    }

    #[test]
    fn unknown_commands_are_value_errors()
    {
        let config = Config::default();
        let err = run(&["chess".to_string()], &config).unwrap_err();
        assert_eq!(err.exit_code(), 27);

        let err = run(&["bugfinder".to_string(), "huge".to_string()], &config).unwrap_err();
        assert_eq!(err.exit_code(), 27);
    }

    #[test]
    fn list_and_help_succeed()
    {
        let config = Config::default();
        assert!(run(&["list".to_string()], &config).is_ok());
        assert!(run(&["--help".to_string()], &config).is_ok());
    }
}
