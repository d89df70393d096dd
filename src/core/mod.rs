//! Core domain types for hangman
//!
//! Letters, accent normalization, the secret word and its partially revealed form.
//! Everything here is pure and never touches I/O.

pub mod accent;
mod letter;
mod revealed;
mod word;

pub use letter::{Letter, LetterSet};
pub use revealed::{PLACEHOLDER, RevealedWord};
pub use word::{SecretWord, WordError};
