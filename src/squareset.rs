use crate::error::ParseError;
use crate::matcher::{Matcher, SquareFilter};
use crate::square::Square;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashSet;

/// An ordered collection of squares supporting set algebra, geometric
/// queries and occupancy filters. Transformations never mutate the
/// receiver: each one returns a new set (scalar queries return plain
/// values), insertion order is preserved throughout, and deduplication and
/// membership go by [`Square::id`]. An empty set is a valid terminal state
/// for a query chain, not an error.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SquareSet {
    pub squares: Vec<Square>,
}

impl SquareSet {
    pub fn new(squares: Vec<Square>) -> Self {
        Self { squares }
    }

    /// Return an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from JSON text: either `{"squares": [...]}` or a bare
    /// array of square records.
    pub fn from_json_str(s: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(s)?;
        match value {
            Value::Array(_) => Ok(Self {
                squares: serde_json::from_value(value)?,
            }),
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(ParseError::BadShape(format!(
                "expected an array or object, got {other}"
            ))),
        }
    }

    /// Return the number of squares in the set.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Whether the set holds at least one square.
    pub fn some(&self) -> bool {
        !self.squares.is_empty()
    }

    /// Whether the set holds more than one square.
    pub fn many(&self) -> bool {
        self.squares.len() > 1
    }

    /// Whether the set holds no squares.
    pub fn none(&self) -> bool {
        self.squares.is_empty()
    }

    /// Whether at least one square satisfies the predicate.
    pub fn some_where(&self, pred: impl Fn(&Square) -> bool) -> bool {
        self.squares.iter().any(|s| pred(s))
    }

    /// Whether more than one square satisfies the predicate.
    pub fn many_where(&self, pred: impl Fn(&Square) -> bool) -> bool {
        self.squares.iter().filter(|s| pred(s)).count() > 1
    }

    /// Whether no square satisfies the predicate.
    pub fn none_where(&self, pred: impl Fn(&Square) -> bool) -> bool {
        !self.squares.iter().any(|s| pred(s))
    }

    /// Whether every square satisfies the predicate. Vacuously true on an
    /// empty set.
    pub fn every(&self, pred: impl Fn(&Square) -> bool) -> bool {
        self.squares.iter().all(|s| pred(s))
    }

    /// Project each square through `f`, escaping the set type.
    pub fn map<T>(&self, f: impl Fn(&Square) -> T) -> Vec<T> {
        self.squares.iter().map(|s| f(s)).collect()
    }

    /// Return the squares satisfying the predicate, in order.
    pub fn filter(&self, pred: impl Fn(&Square) -> bool) -> Self {
        Self {
            squares: self
                .squares
                .iter()
                .filter(|s| pred(s))
                .cloned()
                .collect(),
        }
    }

    /// Return a copy of the set with the square appended. `None` appends
    /// nothing.
    pub fn push(&self, square: Option<Square>) -> Self {
        let mut squares = self.squares.clone();
        if let Some(square) = square {
            squares.push(square);
        }
        Self { squares }
    }

    /// Concatenate two sets, keeping order and duplicates.
    pub fn concat(&self, other: &Self) -> Self {
        let mut squares = self.squares.clone();
        squares.extend(other.squares.iter().cloned());
        Self { squares }
    }

    /// Return all squares of both sets, deduplicated by id, in
    /// first-occurrence order.
    pub fn union(&self, other: &Self) -> Self {
        self.concat(other).uniq()
    }

    /// Return the squares of this set whose ids do not appear in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let ids: HashSet<u64> = other.squares.iter().map(|s| s.id).collect();
        self.filter(|s| !ids.contains(&s.id))
    }

    /// Return the squares of this set whose ids appear in `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        let ids: HashSet<u64> = other.squares.iter().map(|s| s.id).collect();
        self.filter(|s| ids.contains(&s.id))
    }

    /// Deduplicate by id, keeping the first occurrence of each.
    pub fn uniq(&self) -> Self {
        let mut seen = HashSet::new();
        let mut squares = Vec::new();
        for square in &self.squares {
            if seen.insert(square.id) {
                squares.push(square.clone());
            }
        }
        Self { squares }
    }

    /// Return the squares satisfying every constraint of the filter.
    pub fn matching(&self, filter: &SquareFilter) -> Self {
        self.filter(|s| s.matches(filter))
    }

    /// Whether a square with the same id is in the set. `None` is never
    /// included.
    pub fn includes(&self, square: Option<&Square>) -> bool {
        match square {
            Some(square) => self.squares.iter().any(|s| s.id == square.id),
            None => false,
        }
    }

    /// Whether no square with the same id is in the set. `None` is always
    /// excluded.
    pub fn excludes(&self, square: Option<&Square>) -> bool {
        !self.includes(square)
    }

    /// Return the first square of the set.
    pub fn first(&self) -> Option<&Square> {
        self.squares.first()
    }

    /// Return the last square of the set.
    pub fn last(&self) -> Option<&Square> {
        self.squares.last()
    }

    /// Return the first square whose piece is selected.
    pub fn selected(&self) -> Option<&Square> {
        self.squares
            .iter()
            .find(|s| s.piece.as_ref().map_or(false, |p| p.selected))
    }

    /// Find a square by id.
    pub fn find_by_id(&self, id: u64) -> Option<&Square> {
        self.squares.iter().find(|s| s.id == id)
    }

    /// Return the squares with the given ids, in the order the ids are
    /// given. Ids matching nothing are dropped silently.
    pub fn find_by_ids(&self, ids: &[u64]) -> Self {
        Self {
            squares: ids
                .iter()
                .filter_map(|id| self.find_by_id(*id))
                .cloned()
                .collect(),
        }
    }

    /// Find a square by position.
    pub fn find_by_coordinate(&self, x: i32, y: i32) -> Option<&Square> {
        self.squares.iter().find(|s| s.x == x && s.y == y)
    }

    /// Find the square occupied by the piece with the given id.
    pub fn find_by_piece_id(&self, piece_id: u64) -> Option<&Square> {
        self.squares
            .iter()
            .find(|s| s.piece.as_ref().map_or(false, |p| p.id == piece_id))
    }

    /// Mutable access to the square with the given id, for piece placement
    /// and selection.
    pub fn find_by_id_mut(&mut self, id: u64) -> Option<&mut Square> {
        self.squares.iter_mut().find(|s| s.id == id)
    }

    /// Return the squares in the given column.
    pub fn where_x(&self, x: i32) -> Self {
        self.filter(|s| s.x == x)
    }

    /// Return the squares in the given row.
    pub fn where_y(&self, y: i32) -> Self {
        self.filter(|s| s.y == y)
    }

    /// Return the squares exactly `number` king moves away from `from`.
    pub fn squares_away_from(&self, number: i32, from: &Square) -> Self {
        self.filter(|s| Vector::new(from.point(), s.point()).magnitude() == number)
    }

    /// Return the squares two king moves away from `from`.
    pub fn two_squares_away_from(&self, from: &Square) -> Self {
        self.squares_away_from(2, from)
    }

    /// Return the squares adjacent to `from`.
    pub fn one_square_away_from(&self, from: &Square) -> Self {
        self.squares_away_from(1, from)
    }

    /// Return the squares within `distance` king moves of the origin. The
    /// origin itself is included, being at distance zero.
    pub fn in_range(&self, origin: &Square, distance: i32) -> Self {
        self.filter(|s| Vector::new(origin.point(), s.point()).magnitude() <= distance)
    }

    /// Return the squares exactly `distance` king moves from the origin.
    pub fn at_range(&self, origin: &Square, distance: i32) -> Self {
        self.filter(|s| Vector::new(origin.point(), s.point()).magnitude() == distance)
    }

    /// Return the squares `distance` rows away from the origin, on either
    /// side.
    pub fn ranks_away(&self, origin: &Square, distance: i32) -> Self {
        self.filter(|s| Vector::new(origin.point(), s.point()).abs_dy() == distance)
    }

    /// Return the squares `distance` columns away from the origin, on
    /// either side.
    pub fn files_away(&self, origin: &Square, distance: i32) -> Self {
        self.filter(|s| Vector::new(origin.point(), s.point()).abs_dx() == distance)
    }

    /// Return the squares in the origin's row, the origin included.
    pub fn same_rank(&self, origin: &Square) -> Self {
        self.filter(|s| s.y == origin.y)
    }

    /// Return the squares in the origin's column, the origin included.
    pub fn same_file(&self, origin: &Square) -> Self {
        self.filter(|s| s.x == origin.x)
    }

    /// Return the squares ahead of the origin from the given player's
    /// seat. Player 1 moves towards decreasing y, player 2 towards
    /// increasing y.
    pub fn in_direction(&self, origin: &Square, player_number: u8) -> Self {
        let direction_y = if player_number == 1 { -1 } else { 1 };
        self.filter(|s| Vector::new(origin.point(), s.point()).direction_y() == direction_y)
    }

    /// Return the squares sharing a row or column with the origin.
    pub fn orthogonal(&self, origin: &Square) -> Self {
        self.filter(|s| Vector::new(origin.point(), s.point()).orthogonal())
    }

    /// Return the squares on a common diagonal with the origin.
    pub fn diagonal(&self, origin: &Square) -> Self {
        self.filter(|s| Vector::new(origin.point(), s.point()).diagonal())
    }

    /// Return the squares in the origin's row. Sideways movement belongs
    /// to neither player's forward direction.
    pub fn sideways(&self, origin: &Square) -> Self {
        self.filter(|s| s.y == origin.y)
    }

    /// Return the squares on a straight line through the origin.
    pub fn orthogonal_or_diagonal(&self, origin: &Square) -> Self {
        self.filter(|s| Vector::new(origin.point(), s.point()).orthogonal_or_diagonal())
    }

    /// Return the squares at knight-like offsets from the origin.
    pub fn not_orthogonal_or_diagonal(&self, origin: &Square) -> Self {
        self.filter(|s| Vector::new(origin.point(), s.point()).not_orthogonal_or_diagonal())
    }

    /// Return the squares holding any piece.
    pub fn occupied(&self) -> Self {
        self.filter(Square::occupied)
    }

    /// Return the squares holding no piece.
    pub fn unoccupied(&self) -> Self {
        self.filter(Square::unoccupied)
    }

    /// Return the squares holding a piece of the given player.
    pub fn occupied_by_player(&self, player_number: u8) -> Self {
        self.filter(|s| s.occupied_by_player(player_number))
    }

    /// Return the squares holding a piece of the given player's opponent.
    pub fn occupied_by_opponent_of(&self, player_number: u8) -> Self {
        self.filter(|s| s.occupied_by_opponent_of(player_number))
    }

    /// Return the squares the given player could land on: empty or holding
    /// an opposing piece.
    pub fn unoccupied_or_occupied_by_opponent_of(&self, player_number: u8) -> Self {
        self.filter(|s| s.unoccupied_or_occupied_by_opponent_of(player_number))
    }

    /// Return the squares holding a piece whose type matches.
    pub fn occupied_by_piece(&self, piece_type: impl Into<Matcher<String>>) -> Self {
        let piece_type = piece_type.into();
        self.filter(|s| s.occupied_by_piece(&piece_type))
    }

    /// Return the occupied squares whose piece type does not match.
    /// Unoccupied squares are excluded here too.
    pub fn excluding_piece(&self, piece_type: impl Into<Matcher<String>>) -> Self {
        let piece_type = piece_type.into();
        self.filter(|s| s.not_occupied_by_piece(&piece_type))
    }

    /// Return the destinations reachable from `origin` with nothing in the
    /// way: every square of `board.between(origin, destination)` must be
    /// unoccupied. `board` supplies the occupancy context; `self` supplies
    /// only the candidate destinations. The origin itself always passes,
    /// its between-interval being empty.
    pub fn unblocked(&self, origin: &Square, board: &SquareSet) -> Self {
        self.filter(|destination| board.between(origin, destination).every(Square::unoccupied))
    }

    /// Return the squares strictly between `a` and `b` along a straight
    /// line, in walking order. Pairs joined by no orthogonal or diagonal
    /// line have nothing between them. Stepped coordinates with no square
    /// in the set are skipped, so a sparse set jumps gaps rather than
    /// stopping short.
    pub fn between(&self, a: &Square, b: &Square) -> Self {
        let vector = Vector::new(a.point(), b.point());
        let mut squares = Vec::new();

        if vector.orthogonal_or_diagonal() {
            let direction = vector.direction();
            let destination = b.point();
            let mut walk = a.point();

            // Each step closes in on the destination along a fixed unit
            // direction, so the walk always terminates.
            while walk != destination {
                walk = walk + direction;
                if let Some(square) = self.find_by_coordinate(walk.x, walk.y) {
                    if square.point() != destination {
                        squares.push(square.clone());
                    }
                }
            }
        }
        Self { squares }
    }

    /// The set serialized as a JSON value: `{"squares": [...]}`.
    pub fn squares_as_json(&self) -> Value {
        json!({
            "squares": self.squares.iter().map(Square::as_json).collect::<Vec<_>>(),
        })
    }

    /// A deep copy of the set: every square and piece is duplicated, so
    /// the copy can be mutated without touching the canonical board.
    pub fn dup(&self) -> Self {
        Self {
            squares: self.squares.iter().map(Square::dup).collect(),
        }
    }

    /// Iterate over the squares in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.squares.iter()
    }
}

impl From<Vec<Square>> for SquareSet {
    fn from(squares: Vec<Square>) -> Self {
        Self { squares }
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        Self {
            squares: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = std::vec::IntoIter<Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.into_iter()
    }
}

impl<'a> IntoIterator for &'a SquareSet {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}

/// Creates a [`SquareSet`] containing the arguments, similar to [`vec!`].
#[macro_export]
macro_rules! squareset {
    ($( $x: expr ),* $(,)?) => {
        {
            let mut tmp: Vec<$crate::square::Square> = Vec::new();
            $(
                tmp.push($x);
            )*
            $crate::squareset::SquareSet::new(tmp)
        }
    };
}
