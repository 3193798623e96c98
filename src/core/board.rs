//! The board grid.
//!
//! A rectangular, row-major grid of [`Tile`]s. Lookups take [`Position`]s and
//! return `None` off the board; writes replace the tile at the written tile's
//! own position and ignore off-board writes.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::tile::Tile;

/// A rectangular grid of tiles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    width: u8,
    height: u8,
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a board with every square empty.
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "Board dimensions must be non-zero");

        let tiles = (0..height)
            .flat_map(|y| (0..width).map(move |x| Tile::empty(Position::new(x as i8, y as i8))))
            .collect();

        Self {
            width,
            height,
            tiles,
        }
    }

    /// Board width in squares.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Board height in squares.
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Whether `position` lies on the board.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u8) < self.width
            && (position.y as u8) < self.height
    }

    /// The tile at `position`, or `None` off the board.
    #[must_use]
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        if self.contains(position) {
            Some(&self.tiles[self.index(position)])
        } else {
            None
        }
    }

    /// Replace the tile at `tile.position()`. Off-board writes are ignored.
    pub fn put(&mut self, tile: Tile) {
        let position = tile.position();
        if self.contains(position) {
            let index = self.index(position);
            self.tiles[index] = tile;
        }
    }

    /// Iterate over all tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    const fn index(&self, position: Position) -> usize {
        position.y as usize * self.width as usize + position.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PawnId;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4, 3);
        assert_eq!(board.tiles().count(), 12);
        assert!(board.tiles().all(Tile::is_empty));
        assert_eq!(
            board.tile(Position::new(3, 2)).unwrap().position(),
            Position::new(3, 2)
        );
    }

    #[test]
    fn test_out_of_bounds_lookup() {
        let board = Board::new(4, 4);
        assert!(board.tile(Position::new(-1, 0)).is_none());
        assert!(board.tile(Position::new(0, -1)).is_none());
        assert!(board.tile(Position::new(4, 0)).is_none());
        assert!(board.tile(Position::new(0, 4)).is_none());
    }

    #[test]
    fn test_put_replaces_tile() {
        let mut board = Board::new(4, 4);
        let position = Position::new(2, 1);

        board.put(Tile::occupied(position, PawnId::new(5)));
        assert_eq!(board.tile(position).unwrap().pawn(), Some(PawnId::new(5)));

        board.put(Tile::empty(position));
        assert!(board.tile(position).unwrap().is_empty());
    }

    #[test]
    fn test_put_off_board_is_ignored() {
        let mut board = Board::new(2, 2);
        board.put(Tile::occupied(Position::new(5, 5), PawnId::new(0)));
        assert!(board.tiles().all(Tile::is_empty));
    }

    #[test]
    #[should_panic(expected = "Board dimensions must be non-zero")]
    fn test_zero_dimension_panics() {
        let _ = Board::new(0, 4);
    }
}
