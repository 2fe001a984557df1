use broadside::{CellState, Coord, Fleet, SinkResolver, TrackingBoard};

fn coord(s: &str) -> Coord {
    s.parse().unwrap()
}

#[test]
fn test_trusted_sink_resolves_exact_run() {
    let mut board = TrackingBoard::new();
    let mut fleet = Fleet::new();
    let mut resolver = SinkResolver::new();

    board.apply_hit(coord("D5"));
    board.apply_hit(coord("E5"));
    resolver.accept_report(&mut board, &mut fleet, coord("F5"), 3);

    // origin is sunk immediately, the run on the next resolve
    assert_eq!(board.get(5, 4), CellState::Sunk);
    assert!(fleet.is_sunk(1));
    assert_eq!(resolver.outstanding().len(), 1);

    resolver.resolve(&mut board);
    assert_eq!(board.get(3, 4), CellState::Sunk);
    assert_eq!(board.get(4, 4), CellState::Sunk);
    assert!(resolver.outstanding().is_empty());
}

#[test]
fn test_length_four_run_at_board_edge() {
    let mut board = TrackingBoard::new();
    let mut fleet = Fleet::new();
    let mut resolver = SinkResolver::new();

    // run G5-H5-I5 ending at the J edge, plus an unrelated hit so the
    // count-matching shortcut stays out of the way
    board.apply_hit(coord("G5"));
    board.apply_hit(coord("H5"));
    board.apply_hit(coord("I5"));
    board.apply_hit(coord("A1"));
    resolver.accept_report(&mut board, &mut fleet, coord("J5"), 4);

    resolver.resolve(&mut board);

    for x in 6..=9 {
        assert_eq!(board.get(x, 4), CellState::Sunk, "column {} of the run", x);
    }
    assert_eq!(board.get(0, 0), CellState::Hit, "unrelated hit untouched");
    assert!(resolver.outstanding().is_empty());
}

#[test]
fn test_global_shortcut_clears_all_reports() {
    let mut board = TrackingBoard::new();
    let mut fleet = Fleet::new();
    let mut resolver = SinkResolver::new();

    // trusted length-3 sink at C3 over the run C1-C2
    board.apply_hit(coord("C1"));
    board.apply_hit(coord("C2"));
    resolver.accept_report(&mut board, &mut fleet, coord("C3"), 3);

    // length-4 sink at H8 whose run is too scattered to resolve locally
    board.apply_hit(coord("G8"));
    board.apply_hit(coord("I8"));
    board.apply_hit(coord("F1"));
    resolver.accept_report(&mut board, &mut fleet, coord("H8"), 4);
    assert_eq!(resolver.outstanding().len(), 2);

    // 5 hits on the board == (3-1) + (4-1) owed: everything resolves at once
    resolver.resolve(&mut board);
    for s in ["C1", "C2", "C3", "G8", "H8", "I8", "F1"] {
        let c = coord(s);
        assert_eq!(board.get(c.x(), c.y()), CellState::Sunk, "{}", s);
    }
    assert!(resolver.outstanding().is_empty());
}

#[test]
fn test_ambiguous_report_waits_for_more_evidence() {
    let mut board = TrackingBoard::new();
    let mut fleet = Fleet::new();
    let mut resolver = SinkResolver::new();

    // hits on both sides of the origin, not enough on either axis, plus
    // stray hits keeping the shortcut quiet
    board.apply_hit(coord("D5"));
    board.apply_hit(coord("F5"));
    board.apply_hit(coord("A1"));
    board.apply_hit(coord("A3"));
    resolver.accept_report(&mut board, &mut fleet, coord("E5"), 4);

    resolver.resolve(&mut board);
    assert_eq!(resolver.outstanding().len(), 1, "report retried next turn");
    assert_eq!(board.get(3, 4), CellState::Hit);
    assert_eq!(board.get(5, 4), CellState::Hit);

    // the missing hit arrives; now the run is exactly the ship
    board.apply_hit(coord("G5"));
    resolver.resolve(&mut board);
    assert!(resolver.outstanding().is_empty());
    for x in 3..=6 {
        assert_eq!(board.get(x, 4), CellState::Sunk);
    }
}

#[test]
fn test_untrusted_sunk3_reports_take_bypass_path() {
    let mut board = TrackingBoard::new();
    let mut fleet = Fleet::new();
    let mut resolver = SinkResolver::new();

    // two isolated length-3 sunk reports with no connected hits: the
    // defective signal cannot be verified on either
    resolver.accept_report(&mut board, &mut fleet, coord("C3"), 3);
    resolver.accept_report(&mut board, &mut fleet, coord("G7"), 3);

    assert_eq!(board.get(2, 2), CellState::Hit, "origin reverted to hit");
    assert_eq!(board.get(6, 6), CellState::Hit, "origin reverted to hit");
    // exactly one slot confirmed; the second bypass is a double
    // confirmation and is ignored
    assert!(fleet.is_sunk(1));
    assert!(!fleet.is_sunk(2));
    assert!(resolver.outstanding().is_empty());
    assert_eq!(resolver.ambiguous_origins().len(), 2);
}

#[test]
fn test_rollback_reverts_cells_and_flags() {
    let mut board = TrackingBoard::new();
    let mut fleet = Fleet::new();
    let mut resolver = SinkResolver::new();

    // a genuine length-2 sinking at A5-B5
    board.apply_hit(coord("B5"));
    resolver.accept_report(&mut board, &mut fleet, coord("A5"), 2);
    resolver.resolve(&mut board);
    assert_eq!(board.get(0, 4), CellState::Sunk);
    assert_eq!(board.get(1, 4), CellState::Sunk);

    // an untrusted length-3 report right next to it
    resolver.accept_report(&mut board, &mut fleet, coord("C5"), 3);
    assert!(fleet.is_sunk(1));
    assert_eq!(resolver.ambiguous_origins().len(), 1);

    assert!(resolver.rollback(&mut board, &mut fleet));

    // both length-3 flags cleared, the length-2 confirmation kept
    assert!(!fleet.is_sunk(1));
    assert!(!fleet.is_sunk(2));
    assert!(fleet.is_sunk(0));
    // sunk cells within two steps of the origin dropped back to hits
    assert_eq!(board.get(0, 4), CellState::Hit);
    assert_eq!(board.get(1, 4), CellState::Hit);
    assert_eq!(board.get(2, 4), CellState::Hit);
    assert!(resolver.ambiguous_origins().is_empty());

    // nothing left to roll back
    assert!(!resolver.rollback(&mut board, &mut fleet));
}
