//! Line-oriented save file format.
//!
//! ```text
//! 2            current player, 1-based
//! 11           horizontal edges of dot row 0, one digit per column
//! 101          vertical edges of cell row 0, width + 1 digits
//! 10           ...alternating, 2 * height + 1 edge lines in total
//! 010
//! 01
//! 1,0          cell owners, one line per cell row; 0 = unowned
//! 0,0
//! ```
//!
//! The file records neither the grid size nor the player count; both come
//! from the command line and are needed to decode it.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::common::Orientation;
use crate::config::GameConfig;
use crate::game::GameState;
use crate::grid::Grid;
use crate::player::PlayerId;

/// What is wrong with a save file's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentErrorKind {
    /// The file ends before all expected lines.
    MissingLine,
    /// More lines than the grid needs.
    UnexpectedLine,
    /// A field is not a base-10 number.
    NotANumber,
    /// Current player outside `1..=players`.
    CurrentPlayerOutOfRange { number: usize },
    /// Edge digit other than `0` or `1`.
    InvalidEdgeDigit { found: char },
    /// Cell owner outside `0..=players`.
    OwnerOutOfRange { number: usize },
    /// A line holds the wrong number of fields.
    FieldCount { expected: usize, found: usize },
}

/// Malformed save file contents, located by 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentError {
    pub line: usize,
    pub kind: ContentErrorKind,
}

impl ContentError {
    fn new(line: usize, kind: ContentErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ContentErrorKind::MissingLine => write!(f, "missing line"),
            ContentErrorKind::UnexpectedLine => write!(f, "unexpected extra line"),
            ContentErrorKind::NotANumber => write!(f, "field is not a number"),
            ContentErrorKind::CurrentPlayerOutOfRange { number } => {
                write!(f, "current player {} out of range", number)
            }
            ContentErrorKind::InvalidEdgeDigit { found } => {
                write!(f, "edge digit {:?} is not 0 or 1", found)
            }
            ContentErrorKind::OwnerOutOfRange { number } => {
                write!(f, "cell owner {} out of range", number)
            }
            ContentErrorKind::FieldCount { expected, found } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ContentError {}

/// Render `state` in the save file format.
pub fn encode(state: &GameState) -> String {
    let grid = &state.grid;
    let mut out = String::new();
    let _ = writeln!(out, "{}", state.current.number());
    for j in 0..2 * grid.height() + 1 {
        let (orientation, row, cols) = if j % 2 == 0 {
            (Orientation::Horizontal, j / 2, grid.width())
        } else {
            (Orientation::Vertical, j / 2, grid.width() + 1)
        };
        for col in 0..cols {
            let drawn = grid.edge(orientation, row, col).unwrap_or(false);
            out.push(if drawn { '1' } else { '0' });
        }
        out.push('\n');
    }
    for row in grid.owners().chunks(grid.width()) {
        for (i, owner) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "{}", owner.map_or(0, PlayerId::number));
        }
        out.push('\n');
    }
    out
}

/// Parse save file text for a game of the given configuration.
///
/// The whole text is validated before a state is returned.
pub fn decode(text: &str, config: &GameConfig) -> Result<GameState, ContentError> {
    let (height, width, players) = (config.height(), config.width(), config.players());
    let mut grid = Grid::new(height, width)
        .map_err(|_| ContentError::new(0, ContentErrorKind::MissingLine))?;
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));
    let mut next_line = |expected_line: usize| {
        lines
            .next()
            .ok_or(ContentError::new(expected_line, ContentErrorKind::MissingLine))
    };

    let (line_no, line) = next_line(1)?;
    let number = parse_number(line_no, line.trim())?;
    let current = PlayerId::from_number(number)
        .filter(|_| number <= players)
        .ok_or(ContentError::new(
            line_no,
            ContentErrorKind::CurrentPlayerOutOfRange { number },
        ))?;

    for j in 0..2 * height + 1 {
        let (line_no, line) = next_line(j + 2)?;
        let (orientation, row, cols) = if j % 2 == 0 {
            (Orientation::Horizontal, j / 2, width)
        } else {
            (Orientation::Vertical, j / 2, width + 1)
        };
        let bits = parse_bits(line_no, line, cols)?;
        for (col, _) in bits.iter().enumerate().filter(|(_, drawn)| **drawn) {
            grid.set_edge(orientation, row, col)
                .map_err(|_| ContentError::new(line_no, ContentErrorKind::UnexpectedLine))?;
        }
    }

    for row in 0..height {
        let (line_no, line) = next_line(2 * height + 3 + row)?;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != width {
            return Err(ContentError::new(
                line_no,
                ContentErrorKind::FieldCount {
                    expected: width,
                    found: fields.len(),
                },
            ));
        }
        for (col, field) in fields.iter().enumerate() {
            let number = parse_number(line_no, field.trim())?;
            if number > players {
                return Err(ContentError::new(
                    line_no,
                    ContentErrorKind::OwnerOutOfRange { number },
                ));
            }
            if let Some(owner) = PlayerId::from_number(number) {
                grid.set_owner(row, col, owner).map_err(|_| {
                    ContentError::new(line_no, ContentErrorKind::OwnerOutOfRange { number })
                })?;
            }
        }
    }

    if let Some((line_no, _)) = lines.next() {
        return Err(ContentError::new(line_no, ContentErrorKind::UnexpectedLine));
    }

    Ok(GameState {
        grid,
        player_count: players,
        current,
    })
}

fn parse_number(line_no: usize, field: &str) -> Result<usize, ContentError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ContentError::new(line_no, ContentErrorKind::NotANumber));
    }
    field
        .parse()
        .map_err(|_| ContentError::new(line_no, ContentErrorKind::NotANumber))
}

fn parse_bits(line_no: usize, line: &str, expected: usize) -> Result<Vec<bool>, ContentError> {
    let found = line.chars().count();
    if found != expected {
        return Err(ContentError::new(
            line_no,
            ContentErrorKind::FieldCount { expected, found },
        ));
    }
    line.chars()
        .map(|ch| match ch {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(ContentError::new(
                line_no,
                ContentErrorKind::InvalidEdgeDigit { found: other },
            )),
        })
        .collect()
}

#[cfg(feature = "std")]
pub use file::{load, save, SaveError};

#[cfg(feature = "std")]
mod file {
    use std::path::{Path, PathBuf};
    use std::{fmt, fs, io};

    use log::info;

    use super::{decode, encode, ContentError};
    use crate::config::GameConfig;
    use crate::exit_codes;
    use crate::game::GameState;

    /// Errors from reading or writing a save file.
    #[derive(Debug)]
    pub enum SaveError {
        /// The file could not be opened or read.
        Read { path: PathBuf, source: io::Error },
        /// The file could not be created or written.
        Write { path: PathBuf, source: io::Error },
        /// The file was read but its contents are malformed.
        Content { path: PathBuf, source: ContentError },
    }

    impl SaveError {
        /// Process exit status when this error ends the program.
        pub fn exit_code(&self) -> i32 {
            match self {
                SaveError::Read { .. } | SaveError::Write { .. } => exit_codes::UNREADABLE_SAVE,
                SaveError::Content { .. } => exit_codes::MALFORMED_SAVE,
            }
        }
    }

    impl fmt::Display for SaveError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                SaveError::Read { path, source } => {
                    write!(f, "cannot read {}: {}", path.display(), source)
                }
                SaveError::Write { path, source } => {
                    write!(f, "cannot write {}: {}", path.display(), source)
                }
                SaveError::Content { path, source } => {
                    write!(f, "malformed {}: {}", path.display(), source)
                }
            }
        }
    }

    impl std::error::Error for SaveError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                SaveError::Read { source, .. } | SaveError::Write { source, .. } => Some(source),
                SaveError::Content { source, .. } => Some(source),
            }
        }
    }

    /// Read and validate the save file at `path`.
    pub fn load(path: &Path, config: &GameConfig) -> Result<GameState, SaveError> {
        let bytes = fs::read(path).map_err(|source| SaveError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let state = decode(&text, config).map_err(|source| SaveError::Content {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loaded {}", path.display());
        Ok(state)
    }

    /// Write `state` to `path`, replacing any existing file.
    pub fn save(path: &Path, state: &GameState) -> Result<(), SaveError> {
        fs::write(path, encode(state)).map_err(|source| SaveError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("saved {}", path.display());
        Ok(())
    }
}
