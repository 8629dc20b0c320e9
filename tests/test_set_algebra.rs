use gridboard::{squareset, Piece, Square, SquareSet};

fn sq(id: u64, x: i32, y: i32) -> Square {
    Square::new(id, x, y, None)
}

fn sq_with(id: u64, x: i32, y: i32, player_number: u8) -> Square {
    Square::new(id, x, y, Some(Piece::new(id + 100, player_number, "pawn")))
}

fn ids(set: &SquareSet) -> Vec<u64> {
    set.map(|s| s.id)
}

fn sorted_ids(set: &SquareSet) -> Vec<u64> {
    let mut result = ids(set);
    result.sort_unstable();
    result
}

fn set_a() -> SquareSet {
    squareset![
        sq_with(1, 1, 1, 1),
        sq(2, 2, 1),
        sq(2, 2, 1),
        sq_with(3, 3, 1, 2),
    ]
}

fn set_b() -> SquareSet {
    squareset![sq(2, 2, 1), sq(4, 4, 1), sq_with(5, 5, 1, 2)]
}

#[test]
fn uniq_is_idempotent() {
    let once = set_a().uniq();
    let twice = once.uniq();
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn union_is_commutative_as_sets() {
    let ab = set_a().union(&set_b());
    let ba = set_b().union(&set_a());
    assert_eq!(sorted_ids(&ab), sorted_ids(&ba));
    // order itself is first occurrence in concatenation order
    assert_eq!(ids(&ab), vec![1, 2, 3, 4, 5]);
    assert_eq!(ids(&ba), vec![2, 4, 5, 1, 3]);
}

#[test]
fn difference_with_self_is_empty() {
    let a = set_a();
    assert!(a.difference(&a).is_empty());
}

#[test]
fn intersection_with_self_equals_uniq() {
    // on a duplicate-free set; intersection itself retains duplicates,
    // like every other order-preserving filter
    let a = set_a().uniq();
    assert_eq!(ids(&a.intersection(&a)), ids(&a));

    let b = set_b();
    assert_eq!(ids(&b.intersection(&b)), ids(&b.uniq()));
}

#[test]
fn difference_then_intersection_is_empty() {
    let a = set_a();
    let b = set_b();
    assert!(a.difference(&b).intersection(&b).is_empty());
}

#[test]
fn filter_true_preserves_length() {
    let a = set_a();
    assert_eq!(a.filter(|_| true).len(), a.len());
}

#[test]
fn json_round_trip_preserves_squares() {
    let board = squareset![
        sq_with(1, 1, 1, 1),
        sq(2, 2, 1),
        sq_with(3, 3, 1, 2),
    ];

    let text = board.squares_as_json().to_string();
    let rebuilt = SquareSet::from_json_str(&text).expect("round trip failed to parse");

    assert_eq!(rebuilt.len(), board.len());
    for (original, copy) in board.iter().zip(rebuilt.iter()) {
        assert_eq!(original.id, copy.id);
        assert_eq!(original.x, copy.x);
        assert_eq!(original.y, copy.y);
        assert_eq!(original.occupied(), copy.occupied());
    }
}

#[test]
fn between_walks_the_open_diagonal_interval() {
    let board = squareset![
        sq(1, 1, 1),
        sq(2, 2, 2),
        sq(3, 3, 3),
        sq(4, 4, 4),
        sq(5, 3, 4),
    ];

    let result = board.between(&sq(1, 1, 1), &sq(4, 4, 4));
    assert_eq!(ids(&result), vec![2, 3]);

    let non_aligned = board.between(&sq(1, 1, 1), &sq(5, 3, 4));
    assert!(non_aligned.is_empty());
}

#[test]
fn unblocked_stops_at_the_first_occupied_square() {
    let board = squareset![
        sq_with(1, 7, 7, 1),
        sq(2, 7, 6),
        sq_with(3, 7, 5, 1),
        sq(4, 7, 4),
    ];
    let origin = sq_with(1, 7, 7, 1);

    let result = board.unblocked(&origin, &board);
    assert_eq!(ids(&result), vec![1, 2, 3]);
}

#[test]
fn query_chains_compose() {
    // a small two-player skirmish: player 1 pieces at (4,4) and (2,2),
    // player 2 piece at (6,6), everything else empty
    let board = squareset![
        sq_with(1, 4, 4, 1),
        sq_with(2, 2, 2, 1),
        sq_with(3, 6, 6, 2),
        sq(4, 5, 5),
        sq(5, 3, 3),
        sq(6, 4, 5),
        sq(7, 6, 4),
    ];
    let origin = sq_with(1, 4, 4, 1);

    let landing_spots = board
        .diagonal(&origin)
        .unoccupied_or_occupied_by_opponent_of(1)
        .unblocked(&origin, &board);

    // the opposing piece is a reachable capture target, the empty diagonal
    // squares are plain moves; the origin and own pieces are filtered out
    assert_eq!(ids(&landing_spots), vec![3, 4, 5]);

    let capture_targets = board
        .occupied_by_opponent_of(1)
        .in_range(&origin, 2);
    assert_eq!(ids(&capture_targets), vec![3]);
}
