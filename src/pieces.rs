use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A game token occupying at most one square. The type is a free-form
/// string ("pawn", "king", etc) so the model stays game-agnostic; the
/// selection flag is the only state that changes after construction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub id: u64,
    pub player_number: u8,
    #[serde(rename = "type")]
    pub piece_type: String,
    #[serde(default)]
    pub selected: bool,
}

impl Piece {
    pub fn new(id: u64, player_number: u8, piece_type: &str) -> Self {
        Self {
            id,
            player_number,
            piece_type: piece_type.to_string(),
            selected: false,
        }
    }

    /// Mark the piece as selected. Idempotent; always returns `true`.
    pub fn select(&mut self) -> bool {
        self.selected = true;
        true
    }

    /// Clear the selection flag. Idempotent; always returns `true`.
    pub fn deselect(&mut self) -> bool {
        self.selected = false;
        true
    }

    /// The piece serialized as a JSON value.
    pub fn as_json(&self) -> Value {
        json!({
            "id": self.id,
            "player_number": self.player_number,
            "type": self.piece_type,
            "selected": self.selected,
        })
    }
}
