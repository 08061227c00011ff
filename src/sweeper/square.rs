#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos
{
    pub x: usize,
    pub y: usize,
}

impl Pos
{
    pub const fn new(x: usize, y: usize) -> Self
    {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Square
{
    pub is_start: bool,
    pub is_mine: bool,
    pub adjacent: u8,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Flag sitting on a safe square, found by a failed clear.
    pub bad_flag: bool,
    /// Unflagged mine next to a failed clear.
    pub missing_flag: bool,
}

/// What a revealed square shows on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face
{
    Hidden,
    Flagged,
    Start,
    BadFlag,
    MissingFlag,
    Mine,
    Number(u8),
    Empty,
}

impl Square
{
    pub fn face(&self) -> Face
    {
        if !self.is_revealed {
            return if self.is_flagged {
                Face::Flagged
            } else {
                Face::Hidden
            };
        }

        if self.is_start {
            Face::Start
        } else if self.bad_flag {
            Face::BadFlag
        } else if self.missing_flag {
            Face::MissingFlag
        } else if self.is_mine {
            Face::Mine
        } else if self.adjacent > 0 {
            Face::Number(self.adjacent)
        } else {
            Face::Empty
        }
    }
}
