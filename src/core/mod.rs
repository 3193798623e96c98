//! Core model types: players, positions, pawns, tiles, the board, rules,
//! match state, and RNG.
//!
//! These are the fundamental building blocks the selection and modifier
//! systems operate on. Games configure them via `Rules` rather than
//! modifying the core.

pub mod board;
pub mod pawn;
pub mod player;
pub mod position;
pub mod rng;
pub mod rules;
pub mod state;
pub mod tile;

pub use board::Board;
pub use pawn::{Pawn, PawnId};
pub use player::PlayerId;
pub use position::{Offset, Position};
pub use rng::GameRng;
pub use rules::Rules;
pub use state::Game;
pub use tile::Tile;
