mod dictionary;
mod session;

pub use dictionary::{Dictionary, Puzzle};
pub use session::Session;

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Local;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::error::Result;
use dictionary::distinct_letters;

pub const MIN_WORD_LENGTH: usize = 4;
pub const MAX_WORD_LENGTH: usize = 19;
pub const NUM_LETTERS: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLevel
{
    Beginning,
    GoodStart,
    MovingUp,
    Good,
    Solid,
    Nice,
    Great,
    Amazing,
    Genius,
    QueenBee,
}

impl PointLevel
{
    pub const ALL: [PointLevel; 10] = [
        PointLevel::Beginning,
        PointLevel::GoodStart,
        PointLevel::MovingUp,
        PointLevel::Good,
        PointLevel::Solid,
        PointLevel::Nice,
        PointLevel::Great,
        PointLevel::Amazing,
        PointLevel::Genius,
        PointLevel::QueenBee,
    ];

    /// Share of the maximum points, in percent, needed to reach this level.
    pub fn threshold(self) -> u32
    {
        match self {
            PointLevel::Beginning => 0,
            PointLevel::GoodStart => 2,
            PointLevel::MovingUp => 5,
            PointLevel::Good => 8,
            PointLevel::Solid => 15,
            PointLevel::Nice => 25,
            PointLevel::Great => 40,
            PointLevel::Amazing => 50,
            PointLevel::Genius => 70,
            PointLevel::QueenBee => 100,
        }
    }

    pub fn for_points(points: u32, maximum: u32) -> Self
    {
        if maximum == 0 {
            return PointLevel::Beginning;
        }
        let scaled = u64::from(points) * 100;
        Self::ALL
            .into_iter()
            .rev()
            .find(|level| scaled >= u64::from(level.threshold()) * u64::from(maximum))
            .unwrap_or(PointLevel::Beginning)
    }
}

impl fmt::Display for PointLevel
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let name = match self {
            PointLevel::Beginning => "Beginning",
            PointLevel::GoodStart => "Good Start",
            PointLevel::MovingUp => "Moving Up",
            PointLevel::Good => "Good",
            PointLevel::Solid => "Solid",
            PointLevel::Nice => "Nice",
            PointLevel::Great => "Great",
            PointLevel::Amazing => "Amazing",
            PointLevel::Genius => "Genius",
            PointLevel::QueenBee => "Queen Bee",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome
{
    TooShort,
    AlreadyFound,
    AlreadyTried,
    PluralIgnored,
    Accepted { points: u32, pangram: bool },
    MissingRequired,
    UnavailableLetter(char),
    NotAWord,
    GameOver,
}

impl GuessOutcome
{
    pub fn message(&self, word: &str) -> String
    {
        match self {
            GuessOutcome::TooShort => format!("Words need at least {MIN_WORD_LENGTH} letters"),
            GuessOutcome::AlreadyFound => format!("Already have '{word}'  ;)"),
            GuessOutcome::AlreadyTried => format!("Already tried '{word}'  :("),
            GuessOutcome::PluralIgnored => "Most simple PLURALS are IGNORED  :p".to_string(),
            GuessOutcome::Accepted { points, pangram: true } => format!("Pangram! {points} points."),
            GuessOutcome::Accepted { points: 1, .. } => "1 point!".to_string(),
            GuessOutcome::Accepted { points, .. } => format!("{points} points!"),
            GuessOutcome::MissingRequired => "MISSING Central letter!".to_string(),
            GuessOutcome::UnavailableLetter(c) => format!("UNAVAILABLE letter '{c}'  :o"),
            GuessOutcome::NotAWord => ":(".to_string(),
            GuessOutcome::GameOver => "VICTORY!".to_string(),
        }
    }
}

pub struct GameEngine
{
    puzzle: Puzzle,
    answers: BTreeSet<String>,
    maximum_points: u32,
    good_guesses: Vec<String>,
    pangram_guesses: Vec<String>,
    bad_word_guesses: Vec<String>,
    bad_letter_guesses: Vec<String>,
    point_total: u32,
    current_points: u32,
    level: PointLevel,
}

impl GameEngine
{
    /// Answers are the dictionary words this puzzle allows, plus the pangram itself.
    pub fn new(puzzle: Puzzle, dict: &Dictionary) -> Self
    {
        let mut answers: BTreeSet<String> = dict
            .iter()
            .filter(|word| is_playable(&puzzle, word))
            .map(str::to_string)
            .collect();
        answers.insert(puzzle.pangram().to_string());

        let maximum_points: u32 = answers.iter().map(|word| score(&puzzle, word)).sum();

        info!(
            pangram = puzzle.pangram(),
            required = %puzzle.required_letter(),
            answers = answers.len(),
            maximum_points,
            "new SpellingBee game"
        );

        Self {
            puzzle,
            answers,
            maximum_points,
            good_guesses: Vec::new(),
            pangram_guesses: Vec::new(),
            bad_word_guesses: Vec::new(),
            bad_letter_guesses: Vec::new(),
            point_total: 0,
            current_points: 0,
            level: PointLevel::Beginning,
        }
    }

    pub fn start<R: Rng + ?Sized>(dict: &Dictionary, rng: &mut R) -> Result<Self>
    {
        let puzzle = Puzzle::random(dict, rng)?;
        Ok(Self::new(puzzle, dict))
    }

    /// Uppercases, drops anything but A-Z and caps the length.
    pub fn format_guess(text: &str) -> String
    {
        text.chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase())
            .take(MAX_WORD_LENGTH)
            .collect()
    }

    pub fn required_letter(&self) -> char
    {
        self.puzzle.required_letter()
    }

    pub fn surround_letters(&self) -> &[char]
    {
        self.puzzle.surround_letters()
    }

    pub fn maximum_points(&self) -> u32
    {
        self.maximum_points
    }

    pub fn total_num_answers(&self) -> usize
    {
        self.answers.len()
    }

    pub fn point_total(&self) -> u32
    {
        self.point_total
    }

    pub fn num_good_guesses(&self) -> usize
    {
        self.good_guesses.len()
    }

    pub fn good_guesses(&self) -> &[String]
    {
        &self.good_guesses
    }

    pub fn pangram_guesses(&self) -> &[String]
    {
        &self.pangram_guesses
    }

    pub fn bad_word_guesses(&self) -> &[String]
    {
        &self.bad_word_guesses
    }

    pub fn bad_letter_guesses(&self) -> &[String]
    {
        &self.bad_letter_guesses
    }

    pub fn current_level(&self) -> PointLevel
    {
        self.level
    }

    /// Every answer has been found.
    pub fn is_complete(&self) -> bool
    {
        self.point_total == self.maximum_points
    }

    pub fn is_pangram(&self, word: &str) -> bool
    {
        uses_all_letters(&self.puzzle, word)
    }

    /// One point for a four-letter word, one per letter above that; pangrams double.
    pub fn word_points(&self, word: &str) -> u32
    {
        score(&self.puzzle, word)
    }

    /// A plural whose singular is an answer but which is not an answer itself.
    pub fn check_plurals(&self, word: &str) -> bool
    {
        match word.strip_suffix('S') {
            Some(stem) => !self.answers.contains(word) && self.answers.contains(stem),
            None => false,
        }
    }

    pub fn check_bad_letter(&self, word: &str) -> Option<char>
    {
        word.chars().find(|c| !self.puzzle.contains_letter(*c))
    }

    /// Records the guess in the matching list and scores it when it is an answer.
    pub fn check_guess(&mut self, word: &str) -> bool
    {
        if self.answers.contains(word) {
            self.current_points = self.word_points(word);
            self.point_total += self.current_points;
            self.good_guesses.push(word.to_string());
            self.good_guesses.sort();
            if self.is_pangram(word) {
                self.pangram_guesses.push(word.to_string());
            }
            debug!(word, points = self.current_points, total = self.point_total, "good guess");

            let level = PointLevel::for_points(self.point_total, self.maximum_points);
            if level != self.level {
                info!("CHANGING level to '{level}'");
                self.level = level;
            }
            return true;
        }

        if !word.contains(self.puzzle.required_letter()) || self.check_bad_letter(word).is_some() {
            self.bad_letter_guesses.push(word.to_string());
        } else {
            self.bad_word_guesses.push(word.to_string());
            self.bad_word_guesses.sort();
        }
        debug!(word, "bad guess");
        false
    }

    pub fn submit(&mut self, entry: &str) -> GuessOutcome
    {
        if self.is_complete() {
            return GuessOutcome::GameOver;
        }

        let word = Self::format_guess(entry);
        if word.len() < MIN_WORD_LENGTH {
            return GuessOutcome::TooShort;
        }
        if self.good_guesses.contains(&word) {
            return GuessOutcome::AlreadyFound;
        }
        if self.bad_word_guesses.contains(&word) || self.bad_letter_guesses.contains(&word) {
            return GuessOutcome::AlreadyTried;
        }
        if self.check_plurals(&word) {
            debug!(word, "plural ignored");
            return GuessOutcome::PluralIgnored;
        }

        if self.check_guess(&word) {
            if self.is_complete() {
                info!(points = self.point_total, "VICTORY!");
            }
            return GuessOutcome::Accepted {
                points: self.current_points,
                pangram: self.is_pangram(&word),
            };
        }

        if !word.contains(self.puzzle.required_letter()) {
            GuessOutcome::MissingRequired
        } else if let Some(c) = self.check_bad_letter(&word) {
            GuessOutcome::UnavailableLetter(c)
        } else {
            GuessOutcome::NotAWord
        }
    }

    /// The six outer letters in a fresh random order.
    pub fn scrambled_surround<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<char>
    {
        let mut letters = self.puzzle.surround_letters().to_vec();
        letters.shuffle(rng);
        letters
    }

    pub fn session(&self) -> Session
    {
        Session {
            pangram: self.puzzle.pangram().to_string(),
            required_letter: self.puzzle.required_letter(),
            surround_letters: self.puzzle.surround_letters().to_vec(),
            good_guesses: self.good_guesses.clone(),
            pangram_guesses: self.pangram_guesses.clone(),
            bad_word_guesses: self.bad_word_guesses.clone(),
            bad_letter_guesses: self.bad_letter_guesses.clone(),
            point_total: self.point_total,
            maximum_points: self.maximum_points,
            total_num_answers: self.answers.len(),
            level: self.level.to_string(),
            saved_at: Local::now(),
        }
    }

    pub fn end_game(&self, save_dir: &Path) -> Result<PathBuf>
    {
        let path = self.session().write(save_dir)?;
        info!(
            points = self.point_total,
            maximum = self.maximum_points,
            words = self.good_guesses.len(),
            level = %self.level,
            file = %path.display(),
            "game saved"
        );
        Ok(path)
    }
}

fn is_playable(puzzle: &Puzzle, word: &str) -> bool
{
    word.len() >= MIN_WORD_LENGTH
        && word.contains(puzzle.required_letter())
        && word.chars().all(|c| puzzle.contains_letter(c))
}

fn score(puzzle: &Puzzle, word: &str) -> u32
{
    let len = word.len();
    let base = match len {
        0..MIN_WORD_LENGTH => 0,
        MIN_WORD_LENGTH => 1,
        _ => len as u32,
    };
    if uses_all_letters(puzzle, word) { base * 2 } else { base }
}

fn uses_all_letters(puzzle: &Puzzle, word: &str) -> bool
{
    distinct_letters(word).len() == NUM_LETTERS && word.chars().all(|c| puzzle.contains_letter(c))
}

#[cfg(test)]
mod tests
{
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine() -> GameEngine
    {
        let dict = Dictionary::from_words([
            "plant", "plants", "deal", "planted", "tend", "land", "pedal", "dental", "cat", "place",
        ]);
        GameEngine::new(Puzzle::new("planted", 'a').unwrap(), &dict)
    }

    #[test]
    fn answers_and_maximum_points()
    {
        let ge = engine();
        // PLANT 5, DEAL 1, PLANTED 14, LAND 1, PEDAL 5, DENTAL 6
        assert_eq!(ge.total_num_answers(), 6);
        assert_eq!(ge.maximum_points(), 32);
        assert_eq!(ge.current_level(), PointLevel::Beginning);
    }

    #[test]
    fn untypeable_words_never_block_completion()
    {
        let dict = Dictionary::from_words(["planted", "pantedplantedplanted"]);
        let mut ge = GameEngine::new(Puzzle::new("planted", 'a').unwrap(), &dict);
        assert_eq!(ge.total_num_answers(), 1);
        assert_eq!(ge.maximum_points(), 14);

        ge.submit("planted");
        assert!(ge.is_complete());
        assert_eq!(ge.submit("plant"), GuessOutcome::GameOver);
    }

    #[test]
    fn format_guess_keeps_letters_only()
    {
        assert_eq!(GameEngine::format_guess("Plan t"), "PLANT");
        assert_eq!(GameEngine::format_guess("pl4nt!"), "PLNT");
        assert_eq!(GameEngine::format_guess(&"a".repeat(30)).len(), MAX_WORD_LENGTH);
        assert_eq!(GameEngine::format_guess(""), "");
    }

    #[test]
    fn scoring_rules()
    {
        let ge = engine();
        assert_eq!(ge.word_points("DEAL"), 1);
        assert_eq!(ge.word_points("PLANT"), 5);
        assert_eq!(ge.word_points("DENTAL"), 6);
        assert_eq!(ge.word_points("PLANTED"), 14);
        assert_eq!(ge.word_points("PLA"), 0);
        assert!(ge.is_pangram("PLANTED"));
        assert!(ge.is_pangram("PLANTEDD"));
        assert!(!ge.is_pangram("PLANTE"));
    }

    #[test]
    fn plurals_and_bad_letters()
    {
        let ge = engine();
        assert!(ge.check_plurals("PLANTS"));
        assert!(!ge.check_plurals("PLANT"));
        assert!(!ge.check_plurals("TENDS"));
        assert_eq!(ge.check_bad_letter("PLACE"), Some('C'));
        assert_eq!(ge.check_bad_letter("PLANTED"), None);
    }

    #[test]
    fn submit_reports_every_outcome()
    {
        let mut ge = engine();
        assert_eq!(ge.submit("pla"), GuessOutcome::TooShort);
        assert_eq!(ge.submit("plants"), GuessOutcome::PluralIgnored);
        assert_eq!(ge.submit("tend"), GuessOutcome::MissingRequired);
        assert_eq!(ge.submit("tend"), GuessOutcome::AlreadyTried);
        assert_eq!(ge.submit("place"), GuessOutcome::UnavailableLetter('C'));
        assert_eq!(ge.submit("pale"), GuessOutcome::NotAWord);
        assert_eq!(
            ge.submit("plant"),
            GuessOutcome::Accepted {
                points: 5,
                pangram: false
            }
        );
        assert_eq!(ge.submit("PLANT"), GuessOutcome::AlreadyFound);

        assert_eq!(ge.bad_letter_guesses(), &["TEND".to_string(), "PLACE".to_string()]);
        assert_eq!(ge.bad_word_guesses(), &["PALE".to_string()]);
        assert_eq!(ge.point_total(), 5);
        assert_eq!(ge.num_good_guesses(), 1);
    }

    #[test]
    fn pangram_and_levels_through_to_victory()
    {
        let mut ge = engine();
        ge.submit("plant");
        assert_eq!(ge.current_level(), PointLevel::Solid);

        assert_eq!(
            ge.submit("planted"),
            GuessOutcome::Accepted {
                points: 14,
                pangram: true
            }
        );
        assert_eq!(ge.pangram_guesses(), &["PLANTED".to_string()]);
        assert_eq!(ge.current_level(), PointLevel::Amazing);

        for word in ["deal", "land", "pedal", "dental"] {
            assert!(matches!(ge.submit(word), GuessOutcome::Accepted { .. }));
        }
        assert!(ge.is_complete());
        assert_eq!(ge.current_level(), PointLevel::QueenBee);
        assert_eq!(ge.submit("anything"), GuessOutcome::GameOver);
        assert_eq!(
            ge.good_guesses(),
            &["DEAL", "DENTAL", "LAND", "PEDAL", "PLANT", "PLANTED"].map(String::from)
        );
    }

    #[test]
    fn level_thresholds()
    {
        assert_eq!(PointLevel::for_points(0, 100), PointLevel::Beginning);
        assert_eq!(PointLevel::for_points(2, 100), PointLevel::GoodStart);
        assert_eq!(PointLevel::for_points(49, 100), PointLevel::Great);
        assert_eq!(PointLevel::for_points(70, 100), PointLevel::Genius);
        assert_eq!(PointLevel::for_points(99, 100), PointLevel::Genius);
        assert_eq!(PointLevel::for_points(100, 100), PointLevel::QueenBee);
        assert_eq!(PointLevel::for_points(5, 0), PointLevel::Beginning);
        assert_eq!(PointLevel::QueenBee.to_string(), "Queen Bee");
    }

    #[test]
    fn outcome_messages()
    {
        let one = GuessOutcome::Accepted {
            points: 1,
            pangram: false,
        };
        assert_eq!(one.message("DEAL"), "1 point!");
        assert_eq!(GuessOutcome::AlreadyFound.message("DEAL"), "Already have 'DEAL'  ;)");
        assert_eq!(
            GuessOutcome::UnavailableLetter('C').message("PLACE"),
            "UNAVAILABLE letter 'C'  :o"
        );
    }

    #[test]
    fn scramble_keeps_the_same_letters()
    {
        let ge = engine();
        let mut rng = StdRng::seed_from_u64(42);
        let mut scrambled = ge.scrambled_surround(&mut rng);
        scrambled.sort();
        let mut expected = ge.surround_letters().to_vec();
        expected.sort();
        assert_eq!(scrambled, expected);
    }

    #[test]
    fn start_picks_a_puzzle_from_the_dictionary()
    {
        let mut rng = StdRng::seed_from_u64(1);
        let ge = GameEngine::start(&Dictionary::embedded(), &mut rng).unwrap();
        assert!(ge.total_num_answers() >= 1);
        assert_eq!(ge.surround_letters().len(), 6);
    }

    #[test]
    fn end_game_writes_session_json()
    {
        let mut ge = engine();
        ge.submit("plant");
        ge.submit("tend");

        let dir = std::env::temp_dir().join(format!("desk-puzzles-save-{}", std::process::id()));
        let path = ge.end_game(&dir).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("spellingbee_PLANTED_"));
        assert!(name.ends_with(".json"));

        let saved: Session = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.pangram, "PLANTED");
        assert_eq!(saved.required_letter, 'A');
        assert_eq!(saved.good_guesses, vec!["PLANT".to_string()]);
        assert_eq!(saved.bad_letter_guesses, vec!["TEND".to_string()]);
        assert_eq!(saved.point_total, 5);
        assert_eq!(saved.maximum_points, 32);
        assert_eq!(saved.level, "Solid");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
