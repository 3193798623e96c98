//! Match rules configuration.
//!
//! Games configure a match at startup by providing a `Rules` value. The core
//! never hardcodes board dimensions or pawn allotments; everything legality
//! checks consult lives here.

use serde::{Deserialize, Serialize};

/// Parameters of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Board width in squares.
    pub board_width: u8,

    /// Board height in squares.
    pub board_height: u8,

    /// Number of seats (1-255).
    pub player_count: u8,

    /// How many pawns each seat may be granted.
    pub max_pawns_per_player: usize,
}

impl Rules {
    /// Create rules for `player_count` seats with the standard board.
    #[must_use]
    pub fn new(player_count: u8) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");

        Self {
            board_width: 8,
            board_height: 8,
            player_count,
            max_pawns_per_player: 4,
        }
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_board(mut self, width: u8, height: u8) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    /// Set the per-seat pawn allotment.
    #[must_use]
    pub fn with_max_pawns_per_player(mut self, max: usize) -> Self {
        self.max_pawns_per_player = max;
        self
    }
}

impl Default for Rules {
    /// The standard two-seat match: 8x8 board, four pawns per seat.
    fn default() -> Self {
        Self::new(2)
    }
}
