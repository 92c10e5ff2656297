//! Mastermind Solver
//!
//! A Mastermind code breaker using worst-case (minimax) guess selection. Every
//! secret of the classical 6-color, 4-peg board is found in at most five steps.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, Feedback};
//!
//! let guess = Code::parse("0011").unwrap();
//! let secret = Code::parse("1320").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &secret);
//! assert_eq!((feedback.exact(), feedback.partial()), (0, 2));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
