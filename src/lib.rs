//! Forca Solver
//!
//! A hangman agent for Portuguese words. It guesses one letter at a time from
//! positional letter priors, common bigrams and syllables, and per-position counts
//! learned from every word it has solved before.
//!
//! # Quick Start
//!
//! ```rust
//! use forca_solver::core::SecretWord;
//! use forca_solver::game::{GameSession, play_turn};
//! use forca_solver::model::PositionalFrequencyTable;
//! use forca_solver::solver::{HeuristicStrategy, Solver};
//!
//! let solver = Solver::new(HeuristicStrategy::default());
//! let mut table = PositionalFrequencyTable::new();
//! let mut session = GameSession::started(SecretWord::new("banana").unwrap());
//!
//! let turn = play_turn(&solver, &mut session, &mut table).unwrap();
//! assert_eq!(turn.letter.as_char(), 'a');
//! assert_eq!(session.revealed().to_string(), "_a_a_a");
//! ```

// Core domain types
pub mod core;

// Learned letter frequencies
pub mod model;

// Letter selection
pub mod solver;

// Game flow and learning
pub mod game;

// Durable storage for learned frequencies
pub mod persistence;

// Advisory word checks
pub mod dictionary;

pub mod config;
pub mod error;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
