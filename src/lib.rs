#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod cli;
mod combat;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
mod grid;
mod input;
#[cfg(feature = "std")]
mod logging;
pub mod placer;
mod ship;

pub use combat::fire;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use input::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use ship::*;
