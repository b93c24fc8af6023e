//! Search correctness across a range of positions.

use std::time::Instant;

use chess_core::{parse_fen, to_uci, Evaluator, GameController, GameResult, ManualStopper, MoveGenerator, Search};

fn best_uci(fen: &str, depth: u32) -> String {
    let pos = parse_fen(fen).unwrap();
    let mut search = Search::new(8);
    let stopper = ManualStopper::new();
    let report = search.run(pos, depth, &stopper);
    to_uci(report.best_move.expect("search should find a move"))
}

#[test]
fn finds_mate_in_one_back_rank() {
    assert_eq!(best_uci("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1", 4), "e1e8");
}

#[test]
fn finds_mate_in_one_queen() {
    assert_eq!(
        best_uci("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4", 4),
        "h5f7"
    );
}

#[test]
fn captures_free_piece() {
    let pos = parse_fen("rnbqk1nr/pppp1ppp/2b5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 4").unwrap();
    let mut search = Search::new(8);
    let stopper = ManualStopper::new();
    let report = search.run(pos.clone(), 4, &stopper);
    let mv = report.best_move.expect("should find a move");
    // Either the bishop on c6 is captured, or a stronger tactic is found.
    let is_capture = pos.board().piece_at(mv.to()).is_some();
    assert!(is_capture || to_uci(mv) == "c4f7", "should capture material or threaten the king");
}

#[test]
fn iterative_deepening_moves_stay_legal() {
    let pos = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let mut search = Search::new(8);
    let stopper = ManualStopper::new();

    let shallow = search.run(pos.clone(), 2, &stopper);
    let deeper = search.run(pos.clone(), 4, &stopper);
    assert!(shallow.best_move.is_some());
    assert!(deeper.best_move.is_some());

    let mut check_pos = pos.clone();
    let legal = MoveGenerator::legal(&mut check_pos);
    assert!(legal.as_slice().contains(&shallow.best_move.unwrap()));
    assert!(legal.as_slice().contains(&deeper.best_move.unwrap()));
}

#[test]
fn single_legal_move_is_forced() {
    let pos = parse_fen("7k/8/8/8/8/2p5/8/K6r w - - 0 1").unwrap();
    let mut search = Search::new(8);
    let stopper = ManualStopper::new();
    let report = search.run(pos, 4, &stopper);
    assert_eq!(to_uci(report.best_move.expect("should find a move")), "a1a2");
}

#[test]
fn returns_no_move_in_checkmate() {
    let pos = parse_fen("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1").unwrap();
    let mut game = GameController::new(pos, 8);
    assert_eq!(game.game_result(), Some(GameResult::Checkmate));

    let mut search = Search::new(8);
    let stopper = ManualStopper::new();
    let report = search.run(game.position().clone(), 4, &stopper);
    assert!(report.best_move.is_none());
}

#[test]
fn draw_by_repetition_is_detected() {
    let pos = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let mut game = GameController::new(pos, 1);
    let moves = ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8"];
    for uci in moves {
        let mv = chess_core::parse_uci(game.position(), uci).unwrap();
        game.make_human_move(mv);
    }
    assert_eq!(game.game_result(), Some(GameResult::ThreefoldRepetition));
}

#[test]
fn evaluation_symmetry() {
    let pos = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(Evaluator::evaluate(&pos, 0), 0);
}

#[test]
fn evaluation_material_advantage() {
    let white_up = parse_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let black_up = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1").unwrap();
    assert!(Evaluator::evaluate(&white_up, 0) > 800);
    assert!(Evaluator::evaluate(&black_up, 0) < -800);
}

#[test]
fn search_completes_at_depth_5_in_reasonable_time() {
    let pos = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let mut search = Search::new(16);
    let stopper = ManualStopper::new();
    let start = Instant::now();
    let report = search.run(pos, 5, &stopper);
    assert!(report.best_move.is_some());
    assert!(start.elapsed().as_secs() < 60, "search at depth 5 took too long: {:?}", start.elapsed());
}

#[test]
fn identifies_stalemate() {
    let pos = parse_fen("k7/8/1QK5/8/8/8/8/8 b - - 0 1").unwrap();
    let mut game = GameController::new(pos, 1);
    assert_eq!(game.game_result(), Some(GameResult::Stalemate));
}

#[test]
fn fifty_move_rule_triggers_draw() {
    let pos = parse_fen("8/8/8/8/8/8/8/K1k5 w - - 100 1").unwrap();
    let mut game = GameController::new(pos, 1);
    assert_eq!(game.game_result(), Some(GameResult::FiftyMoveRule));
}
