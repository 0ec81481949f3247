#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitgrid;
#[cfg(feature = "std")]
mod cli;
mod common;
mod completion;
mod config;
pub mod exit_codes;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod moves;
mod player;
pub mod prelude;
mod render;
pub mod save;
#[cfg(feature = "std")]
mod session;

pub use bitgrid::{BitGrid, BitGridError};
#[cfg(feature = "std")]
pub use cli::*;
pub use common::*;
pub use completion::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level};
pub use moves::*;
pub use player::*;
pub use render::winners_line;
#[cfg(feature = "std")]
pub use session::*;
