#![cfg(feature = "std")]

//! The interactive read-eval-print loop.

use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::string::String;

use anyhow::Context;
use log::{debug, info, warn};

use crate::{
    config::MAX_LINE_LEN,
    game::{GameEngine, GameStatus},
    player::PlayerId,
    render::winners_line,
    save,
};

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<row> <col> <h|v>`; the orientation is validated when played.
    Draw { row: i64, col: i64, token: char },
    /// `w <path>`
    Save(String),
}

impl Command {
    /// Parse one input line, without requiring a trailing newline.
    ///
    /// `w ` followed by anything is a save; the rest of the line is the path.
    /// Otherwise the line must start with two integers and a non-blank
    /// character, separated by optional whitespace; trailing text is ignored.
    /// Returns `None` for lines that are neither.
    pub fn parse(line: &str) -> Option<Command> {
        if let Some(path) = line.strip_prefix("w ") {
            let path = path.strip_suffix('\n').unwrap_or(path);
            let path = path.strip_suffix('\r').unwrap_or(path);
            return Some(Command::Save(path.to_string()));
        }
        let mut scan = Scanner::new(line);
        let row = scan.int()?;
        let col = scan.int()?;
        let token = scan.token_char()?;
        Some(Command::Draw { row, col, token })
    }
}

struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Optionally signed decimal integer after optional whitespace.
    fn int(&mut self) -> Option<i64> {
        self.skip_whitespace();
        let bytes = self.rest.as_bytes();
        let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let (number, rest) = self.rest.split_at(sign + digits);
        self.rest = rest;
        number.parse().ok()
    }

    /// First non-whitespace character.
    fn token_char(&mut self) -> Option<char> {
        self.skip_whitespace();
        let ch = self.rest.chars().next()?;
        self.rest = &self.rest[ch.len_utf8()..];
        Some(ch)
    }
}

enum InputLine {
    Line(String),
    /// Longer than `MAX_LINE_LEN`; the rest of it was discarded.
    TooLong,
    End,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every cell was claimed; `winners` share the top score.
    Finished { winners: Vec<PlayerId> },
    /// Input ended (or could not be read) before the game finished.
    InputExhausted,
}

/// Drives a [`GameEngine`] from line-based input.
///
/// The grid and prompts go to `output`; save confirmations and save
/// failures go to `errors`.
pub struct Session<R, W, E> {
    engine: GameEngine,
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(engine: GameEngine, input: R, output: W, errors: E) -> Self {
        Self {
            engine,
            input,
            output,
            errors,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Render the grid, then read and apply commands until the game
    /// finishes or input runs out.
    ///
    /// Errors are reserved for failures to write the grid or prompts.
    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        self.draw_grid()?;
        if let Some(outcome) = self.finished()? {
            return Ok(outcome);
        }
        loop {
            write!(self.output, "{}> ", self.engine.current_player()).context("write prompt")?;
            self.output.flush().context("flush prompt")?;

            let line = match self.read_line() {
                InputLine::Line(line) => line,
                InputLine::TooLong => {
                    warn!("ignoring input line over {} bytes", MAX_LINE_LEN);
                    continue;
                }
                InputLine::End => return Ok(Outcome::InputExhausted),
            };
            match Command::parse(&line) {
                Some(Command::Save(path)) => self.save(&path)?,
                Some(Command::Draw { row, col, token }) => {
                    if self.engine.play(row, col, token).is_accepted() {
                        self.draw_grid()?;
                    }
                    if let Some(outcome) = self.finished()? {
                        return Ok(outcome);
                    }
                }
                None => debug!("ignoring input {:?}", line.trim_end()),
            }
        }
    }

    /// Read one line, buffering at most `MAX_LINE_LEN + 1` bytes of it.
    fn read_line(&mut self) -> InputLine {
        let mut buf = Vec::new();
        let limit = MAX_LINE_LEN as u64 + 1;
        let mut read = (&mut self.input).take(limit).read_until(b'\n', &mut buf);
        if let Ok(n) = read {
            if n > MAX_LINE_LEN && buf.last() != Some(&b'\n') {
                read = self.skip_line().map(|()| n);
            }
        }
        match read {
            Ok(0) => InputLine::End,
            Ok(n) if n > MAX_LINE_LEN => InputLine::TooLong,
            Ok(_) => InputLine::Line(String::from_utf8_lossy(&buf).into_owned()),
            Err(err) => {
                warn!("failed to read input: {}", err);
                InputLine::End
            }
        }
    }

    /// Drop input up to and including the next newline.
    fn skip_line(&mut self) -> io::Result<()> {
        loop {
            let (used, done) = {
                let available = self.input.fill_buf()?;
                match available.iter().position(|&b| b == b'\n') {
                    Some(i) => (i + 1, true),
                    None => (available.len(), available.is_empty()),
                }
            };
            self.input.consume(used);
            if done {
                return Ok(());
            }
        }
    }

    fn save(&mut self, path: &str) -> anyhow::Result<()> {
        let message = match save::save(Path::new(path), &self.engine.state()) {
            Ok(()) => "Save complete",
            Err(err) => {
                info!("{}", err);
                "Can not open file for write"
            }
        };
        writeln!(self.errors, "{}", message).context("write save status")
    }

    fn draw_grid(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", self.engine.grid()).context("write grid")
    }

    fn finished(&mut self) -> anyhow::Result<Option<Outcome>> {
        match self.engine.status() {
            GameStatus::InProgress => Ok(None),
            GameStatus::Finished { winners } => {
                writeln!(self.output, "{}", winners_line(&winners)).context("write winners")?;
                self.output.flush().context("flush winners")?;
                Ok(Some(Outcome::Finished { winners }))
            }
        }
    }
}
