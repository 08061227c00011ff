use crate::error::{Error, Result};
use crate::games::terminal::{self, TICK_MS, TerminalGuard, bg, bold, fg};
use crate::sweeper::{
    Board, DEFAULT_GRID_LEN, DEFAULT_NUM_MINES, Face, GridParams, LARGE_GRID_LEN, Outcome, Pos, Status,
};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};
use tracing::info;

const CURSOR_BG: (u8, u8, u8) = (70, 110, 190);
const HIDDEN_BG: (u8, u8, u8) = (60, 60, 60);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BugFinderConfig
{
    grid_len: usize,
    num_mines: usize,
}

impl BugFinderConfig
{
    /// Accepts `[GRID_LEN [NUM_MINES]]`; range checks happen in `GridParams`.
    pub fn from_args(args: &[String]) -> Result<Self>
    {
        if args.len() > 2 {
            return Err(Error::InvalidArgument(format!(
                "bugfinder takes at most 2 arguments, got {}",
                args.len()
            )));
        }

        let grid_len = match args.first() {
            Some(value) => parse_count(value, "grid length")?,
            None => DEFAULT_GRID_LEN,
        };
        let num_mines = match args.get(1) {
            Some(value) => parse_count(value, "mine count")?,
            None => DEFAULT_NUM_MINES,
        };

        Ok(Self {
            grid_len,
            num_mines,
        })
    }

    pub fn params(&self) -> GridParams
    {
        GridParams::new(self.grid_len, self.num_mines)
    }
}

impl Default for BugFinderConfig
{
    fn default() -> Self
    {
        Self {
            grid_len: DEFAULT_GRID_LEN,
            num_mines: DEFAULT_NUM_MINES,
        }
    }
}

fn parse_count(value: &str, what: &str) -> Result<usize>
{
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::InvalidArgument(format!("{what} must be a whole number, got '{value}'")))
}

enum Action
{
    Quit,
    Move(isize, isize),
    Reveal,
    RightClick,
    Restart,
    None,
}

fn action_for(key: &KeyEvent) -> Action
{
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Left | KeyCode::Char('h') => Action::Move(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => Action::Move(1, 0),
        KeyCode::Up | KeyCode::Char('k') => Action::Move(0, -1),
        KeyCode::Down | KeyCode::Char('j') => Action::Move(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Reveal,
        KeyCode::Char('f') => Action::RightClick,
        KeyCode::Char('n') => Action::Restart,
        _ => Action::None,
    }
}

pub fn run(config: BugFinderConfig) -> Result<()>
{
    let params = config.params();
    info!(
        grid_len = params.grid_len(),
        num_mines = params.num_mines(),
        "Initializing BugFinder"
    );

    let mut term = TerminalGuard::enter()?;
    let mut rng = rand::thread_rng();
    let mut board = Board::new(params, &mut rng);
    let mut cursor = board.start();
    term.draw(&screen_lines(&board, cursor))?;
    let mut last_tick = Instant::now();

    loop {
        for key in terminal::pending_keys()? {
            match action_for(&key) {
                Action::Quit => return Ok(()),
                Action::Move(dx, dy) => cursor = step(cursor, dx, dy, board.grid_len()),
                Action::Reveal => {
                    board.reveal(cursor);
                }
                Action::RightClick => {
                    right_click(&mut board, cursor);
                }
                Action::Restart => {
                    if board.restart(&mut rng) {
                        cursor = board.start();
                    }
                }
                Action::None => {}
            }
        }

        if last_tick.elapsed() >= Duration::from_millis(TICK_MS) {
            term.draw(&screen_lines(&board, cursor))?;
            last_tick = Instant::now();
        }

        std::thread::sleep(Duration::from_millis(1));
    }
}

/// Flags a hidden square, clears around a revealed one.
fn right_click(board: &mut Board, pos: Pos) -> Outcome
{
    match board.square(pos).map(|square| square.is_revealed) {
        Some(true) => board.clear_around(pos),
        Some(false) => board.toggle_flag(pos),
        None => Outcome::Ignored,
    }
}

fn step(pos: Pos, dx: isize, dy: isize, grid_len: usize) -> Pos
{
    let max = grid_len.saturating_sub(1);
    Pos::new(
        pos.x.saturating_add_signed(dx).min(max),
        pos.y.saturating_add_signed(dy).min(max),
    )
}

fn status_label(status: Status) -> &'static str
{
    match status {
        Status::Ready => "(+)",
        Status::Playing => "(:)",
        Status::Failed => "(X)",
        Status::Success => "(D)",
    }
}

fn number_color(n: u8) -> (u8, u8, u8)
{
    match n {
        1 => (255, 0, 0),
        2 => (60, 60, 255),
        3 => (0, 128, 0),
        4 => (255, 0, 255),
        5 => (0, 255, 255),
        6 => (128, 128, 0),
        7 => (160, 160, 164),
        _ => (120, 120, 120),
    }
}

/// Boards wider than `LARGE_GRID_LEN` drop the leading pad to stay on screen.
fn render_square(face: Face, compact: bool) -> String
{
    let text = if compact {
        format!("{} ", plain_square(face))
    } else {
        format!(" {} ", plain_square(face))
    };
    match face {
        Face::Hidden => bg(&text, HIDDEN_BG),
        Face::Flagged => bg(&fg(&text, (255, 80, 80)), HIDDEN_BG),
        Face::Start => fg(&text, (255, 105, 180)),
        Face::BadFlag => fg(&text, (200, 120, 0)),
        Face::MissingFlag => fg(&text, (255, 200, 0)),
        Face::Mine => fg(&text, (200, 0, 0)),
        Face::Number(n) => bold(&fg(&text, number_color(n))),
        Face::Empty => text,
    }
}

fn plain_square(face: Face) -> String
{
    match face {
        Face::Hidden => ".".to_string(),
        Face::Flagged => "F".to_string(),
        Face::Start => "*".to_string(),
        Face::BadFlag => "x".to_string(),
        Face::MissingFlag => "!".to_string(),
        Face::Mine => "@".to_string(),
        Face::Number(n) => n.to_string(),
        Face::Empty => " ".to_string(),
    }
}

fn render_row(board: &Board, y: usize, cursor: Pos) -> String
{
    let compact = board.grid_len() > LARGE_GRID_LEN;
    let mut row = String::new();
    for x in 0..board.grid_len() {
        let pos = Pos::new(x, y);
        let face = board.square(pos).map(|s| s.face()).unwrap_or(Face::Hidden);
        if pos == cursor && !board.is_finished() {
            let marked = if compact {
                format!("{}]", plain_square(face))
            } else {
                format!("[{}]", plain_square(face))
            };
            row.push_str(&bg(&marked, CURSOR_BG));
        } else {
            row.push_str(&render_square(face, compact));
        }
    }
    row
}

fn counter(value: i64) -> String
{
    format!("{value:03}")
}

fn screen_lines(board: &Board, cursor: Pos) -> Vec<String>
{
    let mut lines = Vec::new();
    lines.push(format!(
        "{}   {}x{}, {} bugs   Flags: {}   Open: {}/{}",
        bold("BugFinder"),
        board.grid_len(),
        board.grid_len(),
        board.num_mines(),
        board.total_flags(),
        board.total_revealed(),
        board.total_empty()
    ));
    lines.push(format!(
        "Bugs: {}   {}   Time: {}",
        counter(board.mines_left()),
        status_label(board.status()),
        counter(board.elapsed_secs() as i64)
    ));
    lines.push(String::new());

    for y in 0..board.grid_len() {
        lines.push(render_row(board, y, cursor));
    }

    lines.push(String::new());
    lines.push(match board.status() {
        Status::Success => fg("Victory!  Press n for a new game, Esc to quit.", (0, 200, 0)),
        Status::Failed => fg("FAILED! :(  Press n for a new game, Esc to quit.", (220, 0, 0)),
        _ => "Arrows/hjkl move. Space reveals. f flags a hidden square or clears around a number."
            .to_string(),
    });
    lines.push("Esc quits.".to_string());
    lines
}

#[cfg(test)]
mod tests
{
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(values: &[&str]) -> Vec<String>
    {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn config_defaults_without_args()
    {
        let config = BugFinderConfig::from_args(&[]).unwrap();
        assert_eq!(config, BugFinderConfig::default());
        let params = config.params();
        assert_eq!((params.grid_len(), params.num_mines()), (16, 66));
    }

    #[test]
    fn config_takes_positional_numbers()
    {
        let config = BugFinderConfig::from_args(&args(&["24", "100"])).unwrap();
        let params = config.params();
        assert_eq!((params.grid_len(), params.num_mines()), (24, 100));

        // out of range falls back rather than failing
        let params = BugFinderConfig::from_args(&args(&["99"])).unwrap().params();
        assert_eq!((params.grid_len(), params.num_mines()), (16, 66));
    }

    #[test]
    fn config_rejects_non_numbers()
    {
        let err = BugFinderConfig::from_args(&args(&["big"])).unwrap_err();
        assert_eq!(err.exit_code(), 27);
        assert!(BugFinderConfig::from_args(&args(&["8", "-3"])).is_err());
        assert!(BugFinderConfig::from_args(&args(&["8", "10", "x"])).is_err());
    }

    #[test]
    fn cursor_stays_on_grid()
    {
        assert_eq!(step(Pos::new(0, 0), -1, -1, 8), Pos::new(0, 0));
        assert_eq!(step(Pos::new(7, 3), 1, 0, 8), Pos::new(7, 3));
        assert_eq!(step(Pos::new(3, 3), 1, -1, 8), Pos::new(4, 2));
    }

    #[test]
    fn right_click_flags_hidden_and_clears_revealed()
    {
        let mines: Vec<Pos> = (0..8).map(|y| Pos::new(3, y)).collect();
        let mut board = Board::from_layout(8, &mines, Pos::new(0, 0)).unwrap();

        assert_eq!(right_click(&mut board, Pos::new(3, 0)), Outcome::Continue);
        assert_eq!(board.total_flags(), 1);
        assert_eq!(right_click(&mut board, Pos::new(2, 0)), Outcome::Lost);
    }

    #[test]
    fn counters_are_zero_padded()
    {
        assert_eq!(counter(7), "007");
        assert_eq!(counter(66), "066");
        assert_eq!(counter(-2), "-02");
    }

    #[test]
    fn wide_boards_use_narrow_cells()
    {
        assert_eq!(render_square(Face::Empty, false), "   ");
        assert_eq!(render_square(Face::Empty, true), "  ");
        assert!(render_square(Face::Hidden, true).contains(". "));
    }

    #[test]
    fn screen_shows_one_row_per_grid_line()
    {
        let board = Board::from_layout(8, &[Pos::new(7, 7)], Pos::new(0, 0)).unwrap();
        let lines = screen_lines(&board, Pos::new(0, 0));
        assert_eq!(lines.len(), 3 + 8 + 3);
        assert!(lines[1].starts_with("Bugs: 001"));
        assert!(lines[1].contains("(+)"));
        assert!(lines[0].contains("8x8, 1 bugs"));
        assert!(lines[0].contains("Open: 63/63"));
    }
}
