use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{info, warn};

use super::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, NUM_LETTERS};
use crate::error::{Error, Result};
use crate::words::WORDS;

pub struct Dictionary
{
    words: BTreeSet<String>,
}

impl Dictionary
{
    /// Keeps alphabetic words that fit the playable length range, uppercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_ascii_uppercase())
            .filter(|word| {
                (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len())
                    && word.chars().all(|c| c.is_ascii_alphabetic())
            })
            .collect();
        Self { words }
    }

    pub fn embedded() -> Self
    {
        Self::from_words(WORDS.iter())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self>
    {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Dictionary {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::from_words(content.lines());
        if dict.is_empty() {
            warn!(path = %path.display(), "dictionary has no playable words");
        }
        info!("Loaded {} words from {}", dict.len(), path.display());
        Ok(dict)
    }

    #[cfg(test)]
    pub fn contains(&self, word: &str) -> bool
    {
        self.words.contains(&word.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize
    {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str>
    {
        self.words.iter().map(String::as_str)
    }

    /// Words made of exactly seven distinct letters.
    pub fn pangram_candidates(&self) -> Vec<&str>
    {
        self.iter()
            .filter(|word| distinct_letters(word).len() == NUM_LETTERS)
            .collect()
    }
}

pub(crate) fn distinct_letters(word: &str) -> BTreeSet<char>
{
    word.chars().collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle
{
    pangram: String,
    required_letter: char,
    surround_letters: Vec<char>,
}

impl Puzzle
{
    pub fn new(pangram: &str, required_letter: char) -> Result<Self>
    {
        let pangram = pangram.trim().to_ascii_uppercase();
        let required_letter = required_letter.to_ascii_uppercase();

        if !pangram.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::Puzzle(format!("'{pangram}' is not a plain word")));
        }
        if pangram.len() > MAX_WORD_LENGTH {
            return Err(Error::Puzzle(format!(
                "'{pangram}' is longer than {MAX_WORD_LENGTH} letters"
            )));
        }
        if distinct_letters(&pangram).len() != NUM_LETTERS {
            return Err(Error::Puzzle(format!(
                "'{pangram}' must use exactly {NUM_LETTERS} different letters"
            )));
        }
        if !pangram.contains(required_letter) {
            return Err(Error::Puzzle(format!(
                "required letter '{required_letter}' is not in '{pangram}'"
            )));
        }

        let mut surround_letters = Vec::with_capacity(NUM_LETTERS - 1);
        for c in pangram.chars() {
            if c != required_letter && !surround_letters.contains(&c) {
                surround_letters.push(c);
            }
        }

        Ok(Self {
            pangram,
            required_letter,
            surround_letters,
        })
    }

    pub fn random<R: Rng + ?Sized>(dict: &Dictionary, rng: &mut R) -> Result<Self>
    {
        let candidates = dict.pangram_candidates();
        let pangram = candidates
            .choose(rng)
            .ok_or_else(|| Error::Puzzle("dictionary has no seven-letter pangrams".to_string()))?;
        let letters: Vec<char> = distinct_letters(pangram).into_iter().collect();
        let required = letters[rng.gen_range(0..letters.len())];
        Self::new(pangram, required)
    }

    pub fn pangram(&self) -> &str
    {
        &self.pangram
    }

    pub fn required_letter(&self) -> char
    {
        self.required_letter
    }

    pub fn surround_letters(&self) -> &[char]
    {
        &self.surround_letters
    }

    pub fn contains_letter(&self, c: char) -> bool
    {
        c == self.required_letter || self.surround_letters.contains(&c)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn from_words_normalises_and_filters()
    {
        let dict = Dictionary::from_words(["plant", " Deal ", "cat", "co-op", "", "PEDAL"]);
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("plant"));
        assert!(dict.contains("DEAL"));
        assert!(!dict.contains("cat"));
        assert!(!dict.contains("co-op"));
    }

    #[test]
    fn from_words_drops_words_too_long_to_type()
    {
        let long = "pantedplantedplanted";
        assert_eq!(long.len(), MAX_WORD_LENGTH + 1);
        let dict = Dictionary::from_words(["planted", long, &long[..MAX_WORD_LENGTH]]);
        assert_eq!(dict.len(), 2);
        assert!(!dict.contains(long));
        assert!(dict.contains(&long[..MAX_WORD_LENGTH]));
    }

    #[test]
    fn embedded_list_has_pangrams()
    {
        let dict = Dictionary::embedded();
        assert!(!dict.is_empty());
        let candidates = dict.pangram_candidates();
        assert!(candidates.contains(&"PLANTED"));
        assert!(candidates.contains(&"MONARCH"));
        assert!(!candidates.contains(&"PLANT"));
    }

    #[test]
    fn load_reads_one_word_per_line()
    {
        let dir = std::env::temp_dir().join(format!("desk-puzzles-dict-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("words.txt");
        fs::write(&path, "planted\nplant\n\nx\n").unwrap();

        let dict = Dictionary::load(&path).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("PLANTED"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_missing_file_is_a_dictionary_error()
    {
        let err = Dictionary::load("/definitely/not/here.txt").err().unwrap();
        assert!(matches!(err, Error::Dictionary { .. }));
    }

    #[test]
    fn puzzle_splits_required_and_surround()
    {
        let puzzle = Puzzle::new("planted", 'a').unwrap();
        assert_eq!(puzzle.pangram(), "PLANTED");
        assert_eq!(puzzle.required_letter(), 'A');
        assert_eq!(puzzle.surround_letters(), &['P', 'L', 'N', 'T', 'E', 'D']);
        assert!(puzzle.contains_letter('D'));
        assert!(!puzzle.contains_letter('S'));
    }

    #[test]
    fn puzzle_rejects_bad_input()
    {
        assert!(Puzzle::new("plant", 'a').is_err());
        assert!(Puzzle::new("planted", 'z').is_err());
        assert!(Puzzle::new("plan ted", 'a').is_err());
        assert!(Puzzle::new("pantedplantedplanted", 'a').is_err());
    }

    #[test]
    fn random_puzzle_comes_from_candidates()
    {
        let dict = Dictionary::from_words(["planted", "plant", "deal"]);
        let mut rng = StdRng::seed_from_u64(3);
        let puzzle = Puzzle::random(&dict, &mut rng).unwrap();
        assert_eq!(puzzle.pangram(), "PLANTED");
        assert!(puzzle.pangram().contains(puzzle.required_letter()));
        assert_eq!(puzzle.surround_letters().len(), 6);

        let empty = Dictionary::from_words(["plant"]);
        assert!(Puzzle::random(&empty, &mut rng).is_err());
    }
}
