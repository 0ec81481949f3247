//! Stable exit codes for the `boxes` binary.

/// The game finished and the winners were displayed.
pub const OK: i32 = 0;
/// Wrong number or shape of command-line arguments.
pub const USAGE: i32 = 1;
/// Height or width outside `2..=999`.
pub const INVALID_DIMENSIONS: i32 = 2;
/// Player count outside `2..=100`.
pub const INVALID_PLAYER_COUNT: i32 = 3;
/// The save file given on the command line cannot be opened.
pub const UNREADABLE_SAVE: i32 = 4;
/// The save file's contents are malformed.
pub const MALFORMED_SAVE: i32 = 5;
/// Standard input ended before the game did.
pub const INPUT_EXHAUSTED: i32 = 6;
/// Writing to standard output failed.
pub const OUTPUT_FAILURE: i32 = 7;
