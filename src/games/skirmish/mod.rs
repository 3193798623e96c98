//! Minimal skirmish game wiring the whole crate together.
//!
//! The reference flow the core was built for:
//! - `setup` grants every seat its pawn allotment
//! - each seat deploys pawns one per turn (pick a pawn, pick a square)
//! - cards grant movement (pick a placed pawn, pick a reachable square)
//!
//! Selection trees come from this module; the caller drives them with
//! `toggle`, converts the finished tree back into a modifier, gates it
//! with `can_play` where the move is player-initiated, and applies it.

mod game;

pub use game::{
    deployment_modifier, deployment_selector, movement_modifier, movement_selector, setup,
};
