//! Tile codes and their classification.
//!
//! A map cell holds the character code of its display symbol. [`Tile`] wraps
//! that code; [`TileKind`] is the closed classification derived from it.
//! Only walls are impassable; unrecognized codes count as passable ground.

use std::fmt;

/// A map tile, wrapping the `i32` character code of its symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile(pub i32);

/// Closed classification of a tile code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    /// Impassable obstacle (`|`, `-` or `}`).
    Wall,
    /// Plain floor (`.`).
    Floor,
    /// Stairs down (`>`). Passable unless a move policy avoids them.
    Stairs,
    /// An item pile (`%`).
    Item,
    /// The player marker (`@`).
    Player,
    /// Any other code; treated as passable ground.
    Other,
}

impl Tile {
    /// Create a tile from a raw code.
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// The raw tile code.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// The tile for a display symbol.
    pub const fn from_symbol(c: char) -> Self {
        Self(c as i32)
    }

    /// The display symbol for this code, if it is a valid character.
    pub fn symbol(self) -> Option<char> {
        u32::try_from(self.0).ok().and_then(char::from_u32)
    }

    /// Classify the tile code.
    pub fn kind(self) -> TileKind {
        match self.symbol() {
            Some('|' | '-' | '}') => TileKind::Wall,
            Some('.') => TileKind::Floor,
            Some('>') => TileKind::Stairs,
            Some('%') => TileKind::Item,
            Some('@') => TileKind::Player,
            _ => TileKind::Other,
        }
    }

    /// Whether the tile is an impassable obstacle.
    pub fn is_wall(self) -> bool {
        self.kind() == TileKind::Wall
    }

    /// Whether the tile is plain floor.
    pub fn is_floor(self) -> bool {
        self.kind() == TileKind::Floor
    }

    /// Whether the tile is the stairs marker.
    pub fn is_stairs(self) -> bool {
        self.kind() == TileKind::Stairs
    }

    /// Whether the tile is the player marker.
    pub fn is_player(self) -> bool {
        self.kind() == TileKind::Player
    }

    /// Whether the tile is an item pile.
    pub fn is_item(self) -> bool {
        self.kind() == TileKind::Item
    }

    /// Whether the tile can be stepped on. Everything but walls is passable.
    pub fn passable(self) -> bool {
        !self.is_wall()
    }
}

impl From<i32> for Tile {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl From<Tile> for i32 {
    fn from(t: Tile) -> Self {
        t.0
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol().unwrap_or('\u{fffd}'))
    }
}
