use crate::player::Player;
use serde_json::{json, Value};

/// The game-specific state a match wraps. The match never inspects it
/// beyond these three questions; everything else about the game lives
/// with the implementor.
pub trait GameState {
    /// The number of the player whose turn it is.
    fn current_player_number(&self) -> u8;

    /// The winning player's number, if the game has been decided on the
    /// board.
    fn winner(&self) -> Option<u8>;

    /// The state serialized as a JSON value.
    fn as_json(&self) -> Value;
}

/// A match between two players: an opaque game state plus bookkeeping.
/// The winner is always derived, never stored; the notification starts
/// out as a derived turn or winner message and is free-form afterwards.
#[derive(Clone, Debug)]
pub struct Match<G: GameState> {
    pub id: u64,
    pub game_state: G,
    pub players: Vec<Player>,
    pub last_action: Option<Value>,
    pub notification: String,
}

impl<G: GameState> Match<G> {
    /// Create a match. When no notification is supplied, a default one is
    /// derived from the players and the game state.
    pub fn new(
        id: u64,
        game_state: G,
        players: Vec<Player>,
        last_action: Option<Value>,
        notification: Option<String>,
    ) -> Self {
        let mut new_match = Self {
            id,
            game_state,
            players,
            last_action,
            notification: String::new(),
        };
        let notification = notification.unwrap_or_else(|| new_match.default_notification());
        new_match.notification = notification;
        new_match
    }

    /// The winning player's number. A resignation decides the match
    /// regardless of the board: the first player still standing wins.
    /// Otherwise the game state decides.
    pub fn winner(&self) -> Option<u8> {
        if self.players.iter().any(|p| p.resigned) {
            self.players
                .iter()
                .find(|p| !p.resigned)
                .map(|p| p.player_number)
        } else {
            self.game_state.winner()
        }
    }

    fn find_player(&self, player_number: u8) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.player_number == player_number)
    }

    fn turn_message(&self) -> Option<String> {
        self.find_player(self.game_state.current_player_number())
            .map(|p| format!("{} to move", p.name))
    }

    fn winner_message(&self) -> Option<String> {
        self.winner()
            .and_then(|n| self.find_player(n))
            .map(|p| format!("{} wins", p.name))
    }

    /// The message shown when no explicit notification was supplied: the
    /// winner announcement if the match is decided, the turn prompt
    /// otherwise. A failed player lookup yields an empty message rather
    /// than a panic.
    fn default_notification(&self) -> String {
        let message = if self.winner().is_some() {
            self.winner_message()
        } else {
            self.turn_message()
        };
        message.unwrap_or_default()
    }

    /// Replace the notification with the given message.
    pub fn notify(&mut self, message: &str) {
        self.notification = message.to_string();
    }

    /// Forget the last recorded action.
    pub fn clear_last_action(&mut self) {
        self.last_action = None;
    }

    /// The match serialized as a JSON value. The game state contributes
    /// its own projection.
    pub fn as_json(&self) -> Value {
        json!({
            "id": self.id,
            "game_state": self.game_state.as_json(),
            "players": self.players.iter().map(Player::as_json).collect::<Vec<_>>(),
            "last_action": self.last_action,
            "notification": self.notification,
        })
    }
}
