pub mod bugfinder;
pub mod spellingbee;
mod terminal;

pub use terminal::read_line;

pub struct GameDescriptor
{
    pub name: &'static str,
    pub description: &'static str,
}

pub fn registry() -> Vec<GameDescriptor>
{
    vec![
        GameDescriptor {
            name: "bugfinder",
            description: "Minesweeper: reveal the grid, flag every bug",
        },
        GameDescriptor {
            name: "spellingbee",
            description: "Make words from seven letters, always using the centre one",
        },
    ]
}
