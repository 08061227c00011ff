use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Snapshot of one word-game session, written when the game is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session
{
    pub pangram: String,
    pub required_letter: char,
    pub surround_letters: Vec<char>,
    pub good_guesses: Vec<String>,
    pub pangram_guesses: Vec<String>,
    pub bad_word_guesses: Vec<String>,
    pub bad_letter_guesses: Vec<String>,
    pub point_total: u32,
    pub maximum_points: u32,
    pub total_num_answers: usize,
    pub level: String,
    pub saved_at: DateTime<Local>,
}

impl Session
{
    fn file_stem(&self) -> String
    {
        format!("spellingbee_{}_{}", self.pangram, self.saved_at.format("%Y%m%d-%H%M%S"))
    }

    pub fn file_name(&self) -> String
    {
        format!("{}.json", self.file_stem())
    }

    /// Writes to a new file; a numeric suffix keeps saves from the same second apart.
    pub fn write(&self, dir: &Path) -> Result<PathBuf>
    {
        fs::create_dir_all(dir)?;
        let (file, path) = self.create_file(dir)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(path)
    }

    fn create_file(&self, dir: &Path) -> Result<(File, PathBuf)>
    {
        let mut path = dir.join(self.file_name());
        let mut suffix = 0;
        loop {
            match File::options().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((file, path)),
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                    suffix += 1;
                    path = dir.join(format!("{}_{suffix}.json", self.file_stem()));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn session() -> Session
    {
        Session {
            pangram: "PLANTED".to_string(),
            required_letter: 'A',
            surround_letters: vec!['P', 'L', 'N', 'T', 'E', 'D'],
            good_guesses: vec!["PLANT".to_string()],
            pangram_guesses: Vec::new(),
            bad_word_guesses: Vec::new(),
            bad_letter_guesses: Vec::new(),
            point_total: 5,
            maximum_points: 32,
            total_num_answers: 6,
            level: "Solid".to_string(),
            saved_at: Local.with_ymd_and_hms(2026, 10, 19, 8, 30, 5).unwrap(),
        }
    }

    #[test]
    fn file_name_carries_pangram_and_timestamp()
    {
        assert_eq!(session().file_name(), "spellingbee_PLANTED_20261019-083005.json");
    }

    #[test]
    fn saves_in_the_same_second_do_not_overwrite()
    {
        let dir = std::env::temp_dir().join(format!("desk-puzzles-session-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let first = session();
        let mut second = session();
        second.point_total = 6;

        let first_path = first.write(&dir).unwrap();
        let second_path = second.write(&dir).unwrap();
        assert_ne!(first_path, second_path);
        assert_eq!(
            second_path.file_name().unwrap().to_string_lossy(),
            "spellingbee_PLANTED_20261019-083005_1.json"
        );

        let read = |path: &Path| -> Session { serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap() };
        assert_eq!(read(&first_path), first);
        assert_eq!(read(&second_path), second);

        fs::remove_dir_all(&dir).unwrap();
    }
}
