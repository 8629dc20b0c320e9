use crate::pieces::Piece;
use crate::square::Square;

/// A single attribute constraint: equality against one value, membership
/// in a collection, or an arbitrary predicate. Resolving the constraint
/// kind at the call site keeps query code free of runtime type sniffing.
pub enum Matcher<T> {
    Eq(T),
    In(Vec<T>),
    Pred(Box<dyn Fn(&T) -> bool>),
}

impl<T: PartialEq> Matcher<T> {
    /// Build a predicate matcher from a closure.
    pub fn pred(f: impl Fn(&T) -> bool + 'static) -> Self {
        Self::Pred(Box::new(f))
    }

    /// Check the value against the constraint.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::Eq(expected) => value == expected,
            Self::In(expected) => expected.contains(value),
            Self::Pred(f) => f(value),
        }
    }
}

/// Implement the scalar and collection conversions into [Matcher] for the
/// given attribute type, so call sites can pass a bare value or a `Vec` of
/// candidates directly.
macro_rules! impl_matcher_from {
    ($($t:ty),*) => {$(
        impl From<$t> for Matcher<$t> {
            fn from(value: $t) -> Self {
                Self::Eq(value)
            }
        }

        impl From<Vec<$t>> for Matcher<$t> {
            fn from(values: Vec<$t>) -> Self {
                Self::In(values)
            }
        }

        impl<'a> From<&'a [$t]> for Matcher<$t> {
            fn from(values: &'a [$t]) -> Self {
                Self::In(values.to_vec())
            }
        }
    )*};
}

impl_matcher_from!(u8, u64, i32, bool, String);

impl<'a> From<&'a str> for Matcher<String> {
    fn from(value: &'a str) -> Self {
        Self::Eq(value.to_string())
    }
}

impl<'a> From<Vec<&'a str>> for Matcher<String> {
    fn from(values: Vec<&'a str>) -> Self {
        Self::In(values.into_iter().map(str::to_string).collect())
    }
}

impl<'a, 'b> From<&'a [&'b str]> for Matcher<String> {
    fn from(values: &'a [&'b str]) -> Self {
        Self::In(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Constraints over the piece occupying a square. Every present constraint
/// must hold for the piece to match.
#[derive(Default)]
pub struct PieceFilter {
    pub id: Option<Matcher<u64>>,
    pub player_number: Option<Matcher<u8>>,
    pub piece_type: Option<Matcher<String>>,
    pub selected: Option<Matcher<bool>>,
}

impl PieceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, matcher: impl Into<Matcher<u64>>) -> Self {
        self.id = Some(matcher.into());
        self
    }

    pub fn player_number(mut self, matcher: impl Into<Matcher<u8>>) -> Self {
        self.player_number = Some(matcher.into());
        self
    }

    pub fn piece_type(mut self, matcher: impl Into<Matcher<String>>) -> Self {
        self.piece_type = Some(matcher.into());
        self
    }

    pub fn selected(mut self, matcher: impl Into<Matcher<bool>>) -> Self {
        self.selected = Some(matcher.into());
        self
    }

    pub fn matches(&self, piece: &Piece) -> bool {
        self.id.as_ref().map_or(true, |m| m.matches(&piece.id))
            && self
                .player_number
                .as_ref()
                .map_or(true, |m| m.matches(&piece.player_number))
            && self
                .piece_type
                .as_ref()
                .map_or(true, |m| m.matches(&piece.piece_type))
            && self
                .selected
                .as_ref()
                .map_or(true, |m| m.matches(&piece.selected))
    }
}

/// Constraints over a square's own attributes and, optionally, its piece.
/// All present constraints AND together. A filter that constrains the
/// piece rejects unoccupied squares.
#[derive(Default)]
pub struct SquareFilter {
    pub id: Option<Matcher<u64>>,
    pub x: Option<Matcher<i32>>,
    pub y: Option<Matcher<i32>>,
    pub piece: Option<PieceFilter>,
}

impl SquareFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, matcher: impl Into<Matcher<u64>>) -> Self {
        self.id = Some(matcher.into());
        self
    }

    pub fn x(mut self, matcher: impl Into<Matcher<i32>>) -> Self {
        self.x = Some(matcher.into());
        self
    }

    pub fn y(mut self, matcher: impl Into<Matcher<i32>>) -> Self {
        self.y = Some(matcher.into());
        self
    }

    pub fn piece(mut self, filter: PieceFilter) -> Self {
        self.piece = Some(filter);
        self
    }

    pub fn matches(&self, square: &Square) -> bool {
        self.id.as_ref().map_or(true, |m| m.matches(&square.id))
            && self.x.as_ref().map_or(true, |m| m.matches(&square.x))
            && self.y.as_ref().map_or(true, |m| m.matches(&square.y))
            && self.piece.as_ref().map_or(true, |f| {
                square.piece.as_ref().map_or(false, |p| f.matches(p))
            })
    }
}
