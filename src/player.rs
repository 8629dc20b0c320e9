use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One of the participants in a match. Fields are fixed at construction;
/// a resignation arrives from the outside as part of the record.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_number: u8,
    pub name: String,
    #[serde(default)]
    pub resigned: bool,
}

impl Player {
    pub fn new(player_number: u8, name: &str, resigned: bool) -> Self {
        Self {
            player_number,
            name: name.to_string(),
            resigned,
        }
    }

    /// The player serialized as a JSON value.
    pub fn as_json(&self) -> Value {
        json!({
            "player_number": self.player_number,
            "name": self.name,
            "resigned": self.resigned,
        })
    }
}

/// Build a roster from a JSON array of player records.
pub fn players_from_json_str(s: &str) -> Result<Vec<Player>, ParseError> {
    Ok(serde_json::from_str(s)?)
}
