//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types: codes, feedback, the
//! game configuration and the enumerated guess space. Everything here is pure.

mod code;
mod config;
mod feedback;
mod space;

pub use code::{Code, CodeError, Color, MAX_COLORS};
pub use config::{ConfigError, GameConfig, MAX_LENGTH, MAX_SPACE_SIZE};
pub use feedback::{Feedback, is_consistent};
pub use space::GuessSpace;
