//! Core vocabulary: moves, sides, scores, RNG, configuration.
//!
//! Nothing in this module knows which move beats which. That lives in
//! `rules`.

pub mod moves;
pub mod side;
pub mod rng;
pub mod config;

pub use moves::{Move, Weapon};
pub use side::{Score, Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::{MatchConfig, DEFAULT_ROUNDS_TO_WIN};
