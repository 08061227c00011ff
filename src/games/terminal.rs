use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crate::error::{Error, Result};

pub const TICK_MS: u64 = 33;

pub struct TerminalGuard
{
    stdout: Stdout,
}

impl TerminalGuard
{
    pub fn enter() -> io::Result<Self>
    {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Self { stdout })
    }

    /// Replaces the whole screen with `lines`.
    pub fn draw(&mut self, lines: &[String]) -> Result<()>
    {
        let output = format!("{}\r\n", lines.join("\r\n"));
        queue!(self.stdout, MoveTo(0, 0), Clear(ClearType::All))?;
        self.stdout.write_all(output.as_bytes())?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalGuard
{
    fn drop(&mut self)
    {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Drains pending key presses without blocking. Ctrl-C in raw mode arrives
/// as a key event and is turned into an interrupt.
pub fn pending_keys() -> Result<Vec<KeyEvent>>
{
    let mut keys = Vec::new();
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if is_interrupt(&key) {
                return Err(Error::Interrupted);
            }
            keys.push(key);
        }
    }
    Ok(keys)
}

pub fn is_interrupt(key: &KeyEvent) -> bool
{
    matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL)
}

struct RawMode;

impl RawMode
{
    fn enable() -> io::Result<Self>
    {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode
{
    fn drop(&mut self)
    {
        let _ = terminal::disable_raw_mode();
    }
}

enum LineEdit
{
    Typed(char),
    Erased,
    Done,
    Unchanged,
}

/// Reads one line of input in raw mode, so Ctrl-C becomes `Error::Interrupted`
/// like it does in the games. Falls back to a plain read when stdin is not a tty.
pub fn read_line() -> Result<String>
{
    let Ok(_raw) = RawMode::enable() else {
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        return Ok(input);
    };

    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        match edit_line(&mut line, &key)? {
            LineEdit::Typed(c) => write!(stdout, "{c}")?,
            LineEdit::Erased => write!(stdout, "\x08 \x08")?,
            LineEdit::Done => break,
            LineEdit::Unchanged => {}
        }
        stdout.flush()?;
    }
    write!(stdout, "\r\n")?;
    stdout.flush()?;
    Ok(line)
}

fn edit_line(line: &mut String, key: &KeyEvent) -> Result<LineEdit>
{
    if is_interrupt(key) {
        return Err(Error::Interrupted);
    }
    let edit = match key.code {
        KeyCode::Enter => LineEdit::Done,
        KeyCode::Backspace => match line.pop() {
            Some(_) => LineEdit::Erased,
            None => LineEdit::Unchanged,
        },
        KeyCode::Char(c) if !c.is_control() => {
            line.push(c);
            LineEdit::Typed(c)
        }
        _ => LineEdit::Unchanged,
    };
    Ok(edit)
}

pub fn fg(text: &str, (r, g, b): (u8, u8, u8)) -> String
{
    format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
}

pub fn bg(text: &str, (r, g, b): (u8, u8, u8)) -> String
{
    format!("\x1b[48;2;{r};{g};{b}m{text}\x1b[0m")
}

pub fn bold(text: &str) -> String
{
    format!("\x1b[1m{text}\x1b[0m")
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn ctrl_c_is_an_interrupt()
    {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(is_interrupt(&ctrl_c));
        assert!(!is_interrupt(&plain_c));
    }

    #[test]
    fn line_editing_handles_typing_and_backspace()
    {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        let mut line = String::new();
        assert!(matches!(edit_line(&mut line, &key(KeyCode::Char('2'))), Ok(LineEdit::Typed('2'))));
        assert!(matches!(edit_line(&mut line, &key(KeyCode::Char('x'))), Ok(LineEdit::Typed('x'))));
        assert!(matches!(edit_line(&mut line, &key(KeyCode::Backspace)), Ok(LineEdit::Erased)));
        assert_eq!(line, "2");
        assert!(matches!(edit_line(&mut line, &key(KeyCode::Tab)), Ok(LineEdit::Unchanged)));
        assert!(matches!(edit_line(&mut line, &key(KeyCode::Enter)), Ok(LineEdit::Done)));

        let mut empty = String::new();
        assert!(matches!(edit_line(&mut empty, &key(KeyCode::Backspace)), Ok(LineEdit::Unchanged)));
    }

    #[test]
    fn ctrl_c_interrupts_line_input()
    {
        let mut line = "sp".to_string();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let err = edit_line(&mut line, &ctrl_c).err().unwrap();
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn colour_wrappers_reset_afterwards()
    {
        assert_eq!(fg("1", (255, 0, 0)), "\x1b[38;2;255;0;0m1\x1b[0m");
        assert!(bg(" ", (40, 40, 40)).ends_with("\x1b[0m"));
    }
}
