//! Game flow: session state, single turns and learning from finished games

mod learning;
mod session;
mod turn;

pub use learning::{LearningBridge, PersistOutcome};
pub use session::{GameSession, GameState};
pub use turn::{TurnOutcome, play_turn};
