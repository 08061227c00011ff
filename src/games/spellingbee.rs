use crate::bee::{Dictionary, GameEngine, GuessOutcome, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::games::terminal::{self, TICK_MS, TerminalGuard, bg, bold, fg};
use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::ThreadRng;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

const REQUIRED_BG: (u8, u8, u8) = (200, 170, 0);
const LETTER_BG: (u8, u8, u8) = (230, 230, 230);
const LETTER_FG: (u8, u8, u8) = (0, 0, 200);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpellingBeeConfig
{
    dictionary: Option<PathBuf>,
    save_dir: PathBuf,
}

impl SpellingBeeConfig
{
    /// Accepts `--dictionary PATH` (or `--dictionary=PATH`) over the configured one.
    pub fn from_args(args: &[String], config: &Config) -> Result<Self>
    {
        let mut dictionary = config.dictionary_path.clone();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "--dictionary" {
                let value = iter
                    .next()
                    .ok_or_else(|| Error::InvalidArgument("Expected a path after --dictionary".to_string()))?;
                dictionary = Some(PathBuf::from(value));
            } else if let Some(rest) = arg.strip_prefix("--dictionary=") {
                dictionary = Some(PathBuf::from(rest));
            } else {
                return Err(Error::InvalidArgument(format!("Unknown spellingbee option '{arg}'")));
            }
        }

        Ok(Self {
            dictionary,
            save_dir: config.save_dir.clone(),
        })
    }

    fn load_dictionary(&self) -> Result<Dictionary>
    {
        match &self.dictionary {
            Some(path) => Dictionary::load(path),
            None => Ok(Dictionary::embedded()),
        }
    }
}

const INFO_TEXT: &[&str] = &[
    "How to Play the Game:",
    "------------------------------------------",
    "1) Using ONLY the displayed letters, type a word (at least 4 letters long).",
    "2) Any number of each displayed letter is allowed,",
    "   but the Central letter MUST be present in the word.",
    "3) Press ENTER to evaluate your guess.",
    "4) FYI, most simple plurals are just ignored...",
    "5) Press the space bar to scramble the PLACEMENT of the outer letters.",
    "6) Your Valid or Invalid guesses are displayed in the appropriate lists.",
    "7) Pangrams are words that use ALL seven letters -- and earn DOUBLE points!",
    "8) Exit the game when you are ready and your game information will be saved.",
];

struct Screen
{
    layout: Vec<char>,
    response: String,
    message: String,
    show_info: bool,
    confirm_exit: bool,
}

impl Screen
{
    fn new(layout: Vec<char>) -> Self
    {
        Self {
            layout,
            response: String::new(),
            message: String::new(),
            show_info: false,
            confirm_exit: false,
        }
    }
}

pub fn run(config: SpellingBeeConfig) -> Result<()>
{
    let dict = config.load_dictionary()?;
    let mut rng = rand::thread_rng();
    let mut engine = GameEngine::start(&dict, &mut rng)?;
    info!("SpellingBee runtime = {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));

    let played = play(&mut engine, &mut rng);

    // the session is saved however the game ended
    match engine.end_game(&config.save_dir) {
        Ok(path) => println!("Game saved to {}", path.display()),
        Err(err) => {
            error!(%err, "could not save game");
            if played.is_ok() {
                return Err(err);
            }
        }
    }
    played
}

fn play(engine: &mut GameEngine, rng: &mut ThreadRng) -> Result<()>
{
    let mut term = TerminalGuard::enter()?;
    let mut screen = Screen::new(engine.surround_letters().to_vec());
    term.draw(&screen_lines(engine, &screen))?;
    let mut last_tick = Instant::now();

    loop {
        for key in terminal::pending_keys()? {
            if handle_key(engine, &mut screen, &key, rng) {
                info!("Proceed to EXIT!");
                return Ok(());
            }
        }

        if last_tick.elapsed() >= Duration::from_millis(TICK_MS) {
            term.draw(&screen_lines(engine, &screen))?;
            last_tick = Instant::now();
        }

        std::thread::sleep(Duration::from_millis(1));
    }
}

/// Returns true once the player confirms leaving.
fn handle_key(engine: &mut GameEngine, screen: &mut Screen, key: &KeyEvent, rng: &mut ThreadRng) -> bool
{
    if screen.confirm_exit {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
            _ => {
                info!("Continue the game...");
                screen.confirm_exit = false;
                screen.message.clear();
            }
        }
        return false;
    }

    if screen.show_info {
        screen.show_info = false;
        return false;
    }

    match key.code {
        KeyCode::Esc => {
            screen.confirm_exit = true;
            screen.message = "Exit game? (y/n)".to_string();
        }
        KeyCode::Char('?') => screen.show_info = true,
        KeyCode::Char(' ') => {
            screen.layout = engine.scrambled_surround(rng);
            debug!("scramble_letters()");
        }
        KeyCode::Backspace => {
            screen.response.pop();
        }
        KeyCode::Enter => submit_response(engine, screen),
        KeyCode::Char(ch) if ch.is_ascii_alphabetic() && !engine.is_complete() => {
            screen.message.clear();
            screen.response.push(ch);
            screen.response = GameEngine::format_guess(&screen.response);
        }
        _ => {}
    }
    false
}

fn submit_response(engine: &mut GameEngine, screen: &mut Screen)
{
    if screen.response.is_empty() {
        return;
    }
    let entry = std::mem::take(&mut screen.response);
    let level_before = engine.current_level();
    let outcome = engine.submit(&entry);
    debug!(entry, ?outcome, "response");

    screen.message = if engine.is_complete() && matches!(outcome, GuessOutcome::Accepted { .. }) {
        GuessOutcome::GameOver.message(&entry)
    } else {
        outcome.message(&entry)
    };
    if engine.current_level() != level_before {
        screen.message = format!("{}  {}!", screen.message, engine.current_level());
    }
}

fn letter_tile(c: char, required: bool) -> String
{
    let tile = format!(" {c} ");
    if required {
        bold(&bg(&fg(&tile, (90, 0, 120)), REQUIRED_BG))
    } else {
        bold(&bg(&fg(&tile, LETTER_FG), LETTER_BG))
    }
}

/// The seven letters laid out as a hive: two on top, three across, two below.
fn hive_lines(required: char, layout: &[char]) -> Vec<String>
{
    let tile = |i: usize| letter_tile(layout.get(i).copied().unwrap_or(' '), false);
    vec![
        format!("     {}  {}", tile(0), tile(1)),
        format!("  {}  {}  {}", tile(2), letter_tile(required, true), tile(3)),
        format!("     {}  {}", tile(4), tile(5)),
    ]
}

fn word_list(words: &[String]) -> String
{
    if words.is_empty() {
        "-".to_string()
    } else {
        words.join("   ")
    }
}

fn screen_lines(engine: &GameEngine, screen: &Screen) -> Vec<String>
{
    if screen.show_info {
        let mut lines: Vec<String> = INFO_TEXT.iter().map(|line| line.to_string()).collect();
        lines.push(String::new());
        lines.push("Press any key to return to the game.".to_string());
        return lines;
    }

    let mut lines = Vec::new();
    let level = format!("{}{}", engine.current_level(), if engine.is_complete() { "!!" } else { "  :)" });
    lines.push(bold("My SpellingBee Game"));
    lines.push(fg(&level, (218, 165, 32)));
    lines.push(String::new());
    lines.push(format!(
        "{:03} / {} points      {:03} / {} words",
        engine.point_total(),
        engine.maximum_points(),
        engine.num_good_guesses(),
        engine.total_num_answers()
    ));
    lines.push(String::new());
    lines.extend(hive_lines(engine.required_letter(), &screen.layout));
    lines.push(String::new());
    lines.push(format!("Try: {}", screen.response));
    lines.push(format!("Message: {}", fg(&screen.message, (220, 0, 0))));
    lines.push(String::new());

    lines.push(fg("Valid responses:", (0, 160, 0)));
    lines.push(format!("  Pangrams: {}", bold(&word_list(engine.pangram_guesses()))));
    lines.push(format!("  Regular: {}", word_list(engine.good_guesses())));
    lines.push(fg("INVALID responses:", (200, 0, 0)));
    lines.push(format!("  Bad/Missing letter: {}", word_list(engine.bad_letter_guesses())));
    lines.push(format!("  NOT words: {}", word_list(engine.bad_word_guesses())));
    lines.push(String::new());
    lines.push(format!(
        "Type {MIN_WORD_LENGTH}-{MAX_WORD_LENGTH} letters, Enter submits, Space scrambles, ? for help, Esc to exit."
    ));
    lines
}
