//! Bingo combination engine. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod combinations;
pub mod config;
pub mod deck;
pub mod error;
pub mod events;
pub mod ranking;
pub mod rng;
pub mod session;
pub mod simulation;

pub use cards::*;
pub use combinations::*;
pub use config::*;
pub use deck::*;
pub use error::*;
pub use events::*;
pub use ranking::*;
pub use rng::*;
pub use session::*;
pub use simulation::*;
