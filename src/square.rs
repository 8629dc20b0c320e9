use crate::matcher::{Matcher, SquareFilter};
use crate::pieces::Piece;
use crate::point::Point;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A single board cell: a stable identity, a fixed position and an
/// optional occupying piece. Set operations compare squares by `id`, never
/// by coordinates; the position is fixed at construction and only the
/// piece changes over a square's lifetime.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Square {
    pub id: u64,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub piece: Option<Piece>,
}

impl Square {
    pub fn new(id: u64, x: i32, y: i32, piece: Option<Piece>) -> Self {
        Self { id, x, y, piece }
    }

    /// The square's position as a [`Point`].
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn occupied(&self) -> bool {
        self.piece.is_some()
    }

    pub fn unoccupied(&self) -> bool {
        self.piece.is_none()
    }

    /// Whether the occupying piece, if any, belongs to the given player.
    pub fn occupied_by_player(&self, player_number: u8) -> bool {
        self.piece
            .as_ref()
            .map_or(false, |p| p.player_number == player_number)
    }

    /// Whether the occupying piece, if any, belongs to the given player's
    /// opponent.
    pub fn occupied_by_opponent_of(&self, player_number: u8) -> bool {
        self.piece
            .as_ref()
            .map_or(false, |p| p.player_number != player_number)
    }

    /// The standard "can player n land here" test: empty squares and
    /// capturable enemy pieces pass, the player's own pieces do not.
    pub fn unoccupied_or_occupied_by_opponent_of(&self, player_number: u8) -> bool {
        self.unoccupied() || self.occupied_by_opponent_of(player_number)
    }

    /// Whether the occupying piece's type matches.
    pub fn occupied_by_piece(&self, piece_type: &Matcher<String>) -> bool {
        self.piece
            .as_ref()
            .map_or(false, |p| piece_type.matches(&p.piece_type))
    }

    /// Whether the square holds a piece of some other type. An unoccupied
    /// square fails this test as well: both type predicates require a
    /// piece to be present.
    pub fn not_occupied_by_piece(&self, piece_type: &Matcher<String>) -> bool {
        self.piece
            .as_ref()
            .map_or(false, |p| !piece_type.matches(&p.piece_type))
    }

    /// Check the square against every constraint of the filter.
    pub fn matches(&self, filter: &SquareFilter) -> bool {
        filter.matches(self)
    }

    /// Select the occupying piece. Returns `false` (no-op) when the square
    /// is unoccupied.
    pub fn select(&mut self) -> bool {
        match self.piece.as_mut() {
            Some(piece) => piece.select(),
            None => false,
        }
    }

    /// Deselect the occupying piece. Returns `false` (no-op) when the
    /// square is unoccupied.
    pub fn deselect(&mut self) -> bool {
        match self.piece.as_mut() {
            Some(piece) => piece.deselect(),
            None => false,
        }
    }

    /// Place the given piece on the square, replacing any occupant. There
    /// is no occupancy check at this layer; callers that care check
    /// [`Square::unoccupied`] first.
    pub fn add_piece(&mut self, piece: Piece) -> bool {
        self.piece = Some(piece);
        true
    }

    /// Take the occupying piece off the square. Returns `false` when there
    /// was nothing to remove.
    pub fn remove_piece(&mut self) -> bool {
        self.piece.take().is_some()
    }

    /// A deep copy of the square and its piece.
    pub fn dup(&self) -> Self {
        self.clone()
    }

    /// The square serialized as a JSON value. An unoccupied square carries
    /// an explicit `null` piece.
    pub fn as_json(&self) -> Value {
        json!({
            "id": self.id,
            "x": self.x,
            "y": self.y,
            "piece": self.piece.as_ref().map(Piece::as_json),
        })
    }
}
