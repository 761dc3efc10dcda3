#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod engine;
#[cfg(feature = "std")]
pub mod game;
#[cfg(feature = "std")]
mod logging;

pub use crate::engine::*;
#[cfg(feature = "std")]
pub use game::{GameOptions, GameSummary, HotseatGame, TurnOutcome};
#[cfg(feature = "std")]
pub use logging::init_logging;
