//! Interactive branch picker.
//!
//! [`SelectionTerminal`] draws the candidate list, reads keystrokes one byte at a
//! time and returns a [`SelectionResult`]. Every redraw starts from a cleared
//! screen, so the same cursor position always produces the same frame.
//!
//! # Keys
//! - `j` / Down arrow: move down (stops at the last row)
//! - `k` / Up arrow: move up (stops at the first row)
//! - Enter: confirm the row under the cursor
//! - `q`, `Q`, Ctrl+C, Ctrl+D, Ctrl+Z or end of input: quit
//!
//! Raw mode is only entered when asked for (stdin is a terminal) and is always
//! restored through [`RawModeGuard`], whichever way the loop ends.

use crate::core::{
    error::{BranchNavigatorError, Result},
    state::{Action, BranchCandidate, SelectionResult},
    theme::Theme,
};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use std::io::{ErrorKind, Read, Write};

const LINE_BREAK: &str = "\r\n";

const CTRL_C: u8 = 0x03;
const CTRL_D: u8 = 0x04;
const CTRL_Z: u8 = 0x1a;
const ESCAPE: u8 = 0x1b;

/// Anything that can let the user pick one of the candidates
pub trait BranchSelector {
    fn select(
        &mut self,
        candidates: &[BranchCandidate],
        input: &mut dyn Read,
    ) -> Result<SelectionResult>;
}

/// Header and footer labels describing the configured action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionDetails {
    pub name: String,
    pub description: String,
    pub enter_label: String,
}

impl From<Action> for ActionDetails {
    fn from(action: Action) -> Self {
        Self {
            name: action.name().to_string(),
            description: action.description().to_string(),
            enter_label: action.name().to_string(),
        }
    }
}

/// Keeps the terminal in raw mode for as long as it is alive
pub struct RawModeGuard(());

impl RawModeGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().map_err(|e| {
            BranchNavigatorError::configuration(format!(
                "failed to configure terminal for interactive input: {e}"
            ))
        })?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            log::warn!("Failed to restore terminal mode: {e}");
        }
    }
}

enum Key {
    Up,
    Down,
    Confirm,
    Quit,
    Ignored,
}

pub struct SelectionTerminal<W: Write> {
    output: W,
    action: ActionDetails,
    theme: Theme,
    raw_mode: bool,
}

impl<W: Write> SelectionTerminal<W> {
    pub fn new(output: W, action: ActionDetails) -> Self {
        Self {
            output,
            action,
            theme: Theme::default(),
            raw_mode: false,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enter raw mode while selecting; only sensible when stdin is a terminal
    pub fn with_raw_mode(mut self, raw_mode: bool) -> Self {
        self.raw_mode = raw_mode;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_key(input: &mut dyn Read) -> Result<Key> {
        let Some(byte) = read_byte(input)? else {
            return Ok(Key::Quit);
        };

        let key = match byte {
            CTRL_C | CTRL_D | CTRL_Z | b'q' | b'Q' => Key::Quit,
            b'j' => Key::Down,
            b'k' => Key::Up,
            b'\r' | b'\n' => Key::Confirm,
            ESCAPE => match read_byte(input)? {
                Some(b'[') => match read_byte(input)? {
                    Some(b'A') => Key::Up,
                    Some(b'B') => Key::Down,
                    _ => Key::Ignored,
                },
                _ => Key::Ignored,
            },
            _ => Key::Ignored,
        };
        Ok(key)
    }

    fn run_loop(
        &mut self,
        candidates: &[BranchCandidate],
        input: &mut dyn Read,
    ) -> Result<SelectionResult> {
        let last = candidates.len().saturating_sub(1);
        let mut cursor = 0;
        self.render(candidates, cursor)?;

        loop {
            match Self::read_key(input)? {
                Key::Quit => return Ok(SelectionResult::Quit),
                Key::Down if cursor < last => {
                    cursor += 1;
                    self.render(candidates, cursor)?;
                }
                Key::Up if cursor > 0 => {
                    cursor -= 1;
                    self.render(candidates, cursor)?;
                }
                Key::Confirm => {
                    let Some(selected) = candidates.get(cursor) else {
                        return Ok(SelectionResult::Quit);
                    };
                    if selected.is_current {
                        write!(self.output, "already on '{}'{LINE_BREAK}", selected.name)?;
                        self.output.flush()?;
                        return Ok(SelectionResult::AlreadyOn(selected.name.clone()));
                    }
                    return Ok(SelectionResult::Selected(selected.name.clone()));
                }
                Key::Up | Key::Down | Key::Ignored => {}
            }
        }
    }

    /// Redraw the whole picker with the row at `cursor` highlighted
    pub fn render(&mut self, candidates: &[BranchCandidate], cursor: usize) -> Result<()> {
        let theme = self.theme;
        let out = &mut self.output;

        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

        let name = self.action.name.trim();
        let description = self.action.description.trim();
        if !name.is_empty() {
            let label = format!("Action: {name}");
            write!(out, "{}{LINE_BREAK}", theme.action_label.paint(&label))?;
        }
        if !description.is_empty() {
            write!(out, "{}{LINE_BREAK}", theme.action_description.paint(description))?;
        }
        if !name.is_empty() || !description.is_empty() {
            write!(out, "{LINE_BREAK}")?;
        }

        write!(out, "{}{LINE_BREAK}", theme.branch.paint("Select a branch:"))?;

        for (index, candidate) in candidates.iter().enumerate() {
            let row = format!("> {}", candidate.name);
            match (index == cursor, candidate.is_current) {
                (true, true) => write!(
                    out,
                    "{}{}{LINE_BREAK}",
                    theme.selected.paint(&row),
                    theme.selected_badge.paint(" (current branch)")
                )?,
                (true, false) => write!(out, "{}{LINE_BREAK}", theme.selected.paint(&row))?,
                (false, true) => write!(
                    out,
                    "  {} {}{LINE_BREAK}",
                    theme.branch.paint(&candidate.name),
                    theme.badge.paint("(current branch)")
                )?,
                (false, false) => {
                    write!(out, "  {}{LINE_BREAK}", theme.branch.paint(&candidate.name))?
                }
            }
        }

        let enter_label = match self.action.enter_label.trim() {
            "" => "select",
            label => label,
        };
        let help = format!("j/k or ↑/↓ to move, Enter to {enter_label}, q to exit");
        write!(out, "{LINE_BREAK}{}{LINE_BREAK}", theme.help.paint(&help))?;

        out.flush()?;
        Ok(())
    }
}

impl<W: Write> BranchSelector for SelectionTerminal<W> {
    fn select(
        &mut self,
        candidates: &[BranchCandidate],
        input: &mut dyn Read,
    ) -> Result<SelectionResult> {
        let _raw_mode = if self.raw_mode {
            Some(RawModeGuard::enter()?)
        } else {
            None
        };

        self.run_loop(candidates, input)
    }
}

/// Read a single byte without buffering ahead, so later readers see the rest.
///
/// `None` means end of input.
fn read_byte(input: &mut dyn Read) -> Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}
