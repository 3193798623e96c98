//! A seat-scoped view of a match.
//!
//! Selection runs on behalf of one seat (the local player in a client, or
//! whichever seat an agent is driving). Candidacy filters receive the
//! session so they can combine global state with "who is asking".

use serde::{Deserialize, Serialize};

use crate::core::{Game, PlayerId};

/// A match as seen from one seat.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    /// The match state.
    pub game: Game,

    /// The seat this session acts for.
    pub player: PlayerId,
}

impl GameSession {
    /// Create a session for `player`.
    #[must_use]
    pub fn new(game: Game, player: PlayerId) -> Self {
        Self { game, player }
    }

    /// Whether the session's seat is the one currently to act.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.game.is_current_player(self.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;

    #[test]
    fn test_session_currentness() {
        let session = GameSession::new(Game::new(Rules::default()), PlayerId::new(0));
        assert!(session.is_current());

        let mut other = GameSession::new(Game::new(Rules::default()), PlayerId::new(1));
        assert!(!other.is_current());

        other.game.advance_turn();
        assert!(other.is_current());
    }
}
