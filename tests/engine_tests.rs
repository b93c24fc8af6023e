//! End-to-end search behavior through `Search::run`.

use std::time::Duration;

use chess_core::{parse_fen, ManualStopper, Search, TimeBudgetStopper};

#[test]
fn depth_limited_search_returns_a_move_from_startpos() {
    let pos = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let mut search = Search::new(1);
    let stopper = ManualStopper::new();
    let report = search.run(pos, 1, &stopper);
    assert!(report.best_move.is_some());
    assert_eq!(report.depth_completed, 1);
}

#[test]
fn time_limited_search_returns_promptly_and_finds_a_move() {
    let pos = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let mut search = Search::new(1);
    let stopper = TimeBudgetStopper::new(50);
    let start = std::time::Instant::now();
    let report = search.run(pos, 32, &stopper);
    let elapsed = start.elapsed();

    assert!(report.best_move.is_some());
    // Polling is throttled, so allow comfortable slack over the raw budget.
    assert!(elapsed < Duration::from_secs(2), "search ran long past its time budget: {elapsed:?}");
}
