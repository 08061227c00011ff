mod square;

pub use square::{Face, Pos, Square};

use rand::Rng;
use rand::seq::{SliceRandom, index};
use std::time::Instant;
use tracing::{debug, info, warn};

pub const MIN_GRID_LEN: usize = 8;
pub const DEFAULT_GRID_LEN: usize = 16;
pub const LARGE_GRID_LEN: usize = 24;
pub const MAX_GRID_LEN: usize = 32;
pub const DEFAULT_NUM_MINES: usize = 66;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status
{
    Ready,
    Playing,
    Failed,
    Success,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome
{
    Ignored,
    Continue,
    Lost,
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridParams
{
    grid_len: usize,
    num_mines: usize,
}

impl GridParams
{
    /// Out-of-range values fall back: the grid to its default length, the
    /// mines to a sixth of the squares.
    pub fn new(grid_len: usize, num_mines: usize) -> Self
    {
        let checked_len = if (MIN_GRID_LEN..=MAX_GRID_LEN).contains(&grid_len) {
            grid_len
        } else {
            warn!(grid_len, "grid length out of range, using {DEFAULT_GRID_LEN}");
            DEFAULT_GRID_LEN
        };

        let num_squares = checked_len * checked_len;
        let checked_mines = if (num_squares / 8..=num_squares / 3).contains(&num_mines) {
            num_mines
        } else {
            let fallback = num_squares / 6;
            warn!(num_mines, "mine count out of range, using {fallback}");
            fallback
        };

        Self {
            grid_len: checked_len,
            num_mines: checked_mines,
        }
    }

    pub fn grid_len(&self) -> usize
    {
        self.grid_len
    }

    pub fn num_mines(&self) -> usize
    {
        self.num_mines
    }

    pub fn num_squares(&self) -> usize
    {
        self.grid_len * self.grid_len
    }
}

impl Default for GridParams
{
    fn default() -> Self
    {
        Self::new(DEFAULT_GRID_LEN, DEFAULT_NUM_MINES)
    }
}

#[derive(Debug)]
pub struct Board
{
    params: GridParams,
    squares: Vec<Square>,
    start: Pos,
    total_flags: usize,
    total_revealed: usize,
    status: Status,
    started_at: Option<Instant>,
    final_secs: u64,
}

impl Board
{
    pub fn new<R: Rng + ?Sized>(params: GridParams, rng: &mut R) -> Self
    {
        let mines: Vec<usize> = index::sample(rng, params.num_squares(), params.num_mines).into_vec();
        let mut is_mine = vec![false; params.num_squares()];
        for idx in &mines {
            is_mine[*idx] = true;
        }

        let safe: Vec<usize> = (0..params.num_squares()).filter(|idx| !is_mine[*idx]).collect();
        // num_mines is capped at a third of the squares, so safe is never empty
        let start_idx = safe.choose(rng).copied().unwrap_or(0);

        Self::build(params, &is_mine, start_idx)
    }

    fn build(params: GridParams, is_mine: &[bool], start_idx: usize) -> Self
    {
        let len = params.grid_len;
        let start = Pos::new(start_idx % len, start_idx / len);

        let mut board = Self {
            params,
            squares: vec![Square::default(); params.num_squares()],
            start,
            total_flags: 0,
            total_revealed: 0,
            status: Status::Ready,
            started_at: None,
            final_secs: 0,
        };

        for (square, mine) in board.squares.iter_mut().zip(is_mine) {
            square.is_mine = *mine;
        }

        for y in 0..len {
            for x in 0..len {
                let pos = Pos::new(x, y);
                let count = board
                    .surrounding(pos)
                    .into_iter()
                    .filter(|p| *p != pos && board.squares[board.index(*p)].is_mine)
                    .count();
                let idx = board.index(pos);
                board.squares[idx].adjacent = count as u8;
            }
        }

        let idx = board.index(start);
        board.squares[idx].is_start = true;
        for pos in board.surrounding(start) {
            if !board.squares[board.index(pos)].is_mine {
                board.click(pos);
            }
        }

        info!(
            grid_len = len,
            num_mines = params.num_mines,
            empty_squares = board.total_empty(),
            start_x = start.x,
            start_y = start.y,
            "new board"
        );
        board
    }

    pub fn grid_len(&self) -> usize
    {
        self.params.grid_len
    }

    pub fn num_mines(&self) -> usize
    {
        self.params.num_mines
    }

    pub fn status(&self) -> Status
    {
        self.status
    }

    pub fn start(&self) -> Pos
    {
        self.start
    }

    pub fn total_flags(&self) -> usize
    {
        self.total_flags
    }

    pub fn total_revealed(&self) -> usize
    {
        self.total_revealed
    }

    pub fn total_empty(&self) -> usize
    {
        self.params.num_squares() - self.params.num_mines
    }

    /// Mines not yet accounted for by flags; negative when over-flagged.
    pub fn mines_left(&self) -> i64
    {
        self.params.num_mines as i64 - self.total_flags as i64
    }

    pub fn is_finished(&self) -> bool
    {
        matches!(self.status, Status::Failed | Status::Success)
    }

    pub fn square(&self, pos: Pos) -> Option<&Square>
    {
        self.in_bounds(pos).then(|| &self.squares[self.index(pos)])
    }

    pub fn elapsed_secs(&self) -> u64
    {
        match (self.status, self.started_at) {
            (Status::Playing, Some(started)) => started.elapsed().as_secs(),
            (Status::Failed | Status::Success, _) => self.final_secs,
            _ => 0,
        }
    }

    /// The clipped 3x3 block centred on `pos`, `pos` included.
    pub fn surrounding(&self, pos: Pos) -> Vec<Pos>
    {
        let len = self.params.grid_len;
        let mut positions = Vec::with_capacity(9);
        for x in pos.x.saturating_sub(1)..(pos.x + 2).min(len) {
            for y in pos.y.saturating_sub(1)..(pos.y + 2).min(len) {
                positions.push(Pos::new(x, y));
            }
        }
        positions
    }

    pub fn reveal(&mut self, pos: Pos) -> Outcome
    {
        if !self.in_bounds(pos) || self.is_finished() {
            return Outcome::Ignored;
        }
        self.begin();

        let idx = self.index(pos);
        if self.squares[idx].is_flagged {
            self.squares[idx].is_flagged = false;
            self.total_flags -= 1;
        }

        if self.squares[idx].is_mine {
            debug!(x = pos.x, y = pos.y, "revealed a mine");
            return self.lose();
        }

        self.click(pos);
        debug!(total_revealed = self.total_revealed, "current num revealed");
        self.check_win()
    }

    pub fn toggle_flag(&mut self, pos: Pos) -> Outcome
    {
        if !self.in_bounds(pos) || self.is_finished() {
            return Outcome::Ignored;
        }

        let idx = self.index(pos);
        if self.squares[idx].is_revealed {
            return Outcome::Ignored;
        }
        self.begin();

        let square = &mut self.squares[idx];
        square.is_flagged = !square.is_flagged;
        if square.is_flagged {
            self.total_flags += 1;
        } else {
            self.total_flags -= 1;
        }
        debug!(total_flags = self.total_flags, "current num flags");
        self.check_win()
    }

    /// Reveals every safe neighbour of a revealed square once its mines are
    /// all flagged; any wrong or missing flag around it loses the game.
    pub fn clear_around(&mut self, pos: Pos) -> Outcome
    {
        if !self.in_bounds(pos) || self.is_finished() {
            return Outcome::Ignored;
        }
        if !self.squares[self.index(pos)].is_revealed {
            return Outcome::Ignored;
        }
        self.begin();

        let neighbours = self.surrounding(pos);
        for near in &neighbours {
            let idx = self.index(*near);
            let square = &mut self.squares[idx];
            if square.is_flagged && !square.is_mine {
                info!(x = near.x, y = near.y, "erroneous flag");
                square.bad_flag = true;
                return self.lose();
            }
            if square.is_mine && !square.is_flagged {
                info!(x = near.x, y = near.y, "missing flag");
                square.missing_flag = true;
                return self.lose();
            }
        }

        for near in neighbours {
            if !self.squares[self.index(near)].is_mine {
                self.click(near);
            }
        }
        self.check_win()
    }

    /// Starts a fresh board with the same parameters once a game is over.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool
    {
        if !self.is_finished() {
            return false;
        }
        info!("starting new game");
        *self = Self::new(self.params, rng);
        true
    }

    fn click(&mut self, pos: Pos)
    {
        let mut pending = vec![pos];
        while let Some(next) = pending.pop() {
            let idx = self.index(next);
            let square = &mut self.squares[idx];
            if square.is_revealed || square.is_mine {
                continue;
            }

            square.is_revealed = true;
            if square.is_flagged {
                square.is_flagged = false;
                self.total_flags -= 1;
            }
            self.total_revealed += 1;

            if square.adjacent == 0 {
                pending.extend(
                    self.surrounding(next)
                        .into_iter()
                        .filter(|p| !self.squares[self.index(*p)].is_revealed),
                );
            }
        }
    }

    fn begin(&mut self)
    {
        if self.status == Status::Ready {
            self.status = Status::Playing;
            self.started_at = Some(Instant::now());
            debug!("first move, clock started");
        }
    }

    fn finish(&mut self, status: Status)
    {
        self.final_secs = self.started_at.map(|t| t.elapsed().as_secs()).unwrap_or(0);
        self.status = status;
    }

    fn lose(&mut self) -> Outcome
    {
        self.finish(Status::Failed);
        for square in &mut self.squares {
            square.is_revealed = true;
        }
        info!(secs = self.final_secs, "failed");
        Outcome::Lost
    }

    fn check_win(&mut self) -> Outcome
    {
        if self.total_revealed == self.total_empty() && self.total_flags == self.params.num_mines {
            self.finish(Status::Success);
            info!(secs = self.final_secs, "victory");
            Outcome::Won
        } else {
            Outcome::Continue
        }
    }

    fn in_bounds(&self, pos: Pos) -> bool
    {
        pos.x < self.params.grid_len && pos.y < self.params.grid_len
    }

    fn index(&self, pos: Pos) -> usize
    {
        pos.x + pos.y * self.params.grid_len
    }
}

#[cfg(test)]
use crate::error::{Error, Result};

#[cfg(test)]
impl Board
{
    /// A board with fixed mine positions; the mine count is not range checked.
    pub(crate) fn from_layout(grid_len: usize, mines: &[Pos], start: Pos) -> Result<Self>
    {
        if grid_len == 0 {
            return Err(Error::InvalidArgument("grid length must be positive".to_string()));
        }
        let in_bounds = |pos: &Pos| pos.x < grid_len && pos.y < grid_len;

        let mut is_mine = vec![false; grid_len * grid_len];
        for pos in mines {
            if !in_bounds(pos) {
                return Err(Error::InvalidArgument(format!(
                    "mine at ({}, {}) is off the grid",
                    pos.x, pos.y
                )));
            }
            is_mine[pos.x + pos.y * grid_len] = true;
        }

        if !in_bounds(&start) || is_mine[start.x + start.y * grid_len] {
            return Err(Error::InvalidArgument(
                "start square must be on the grid and free of mines".to_string(),
            ));
        }

        let params = GridParams {
            grid_len,
            num_mines: is_mine.iter().filter(|mine| **mine).count(),
        };
        Ok(Self::build(params, &is_mine, start.x + start.y * grid_len))
    }
}
