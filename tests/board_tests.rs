//! Conformance checks for move generation and the transposition table.

use chess_core::{parse_fen, perft, Bound, TranspositionTable};

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(u32, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902), (4, 197_281)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039), (3, 97_862)],
    },
    TestPosition {
        name: "Endgame rook vs pawns",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812), (6, 11_030_083)],
    },
];

#[test]
fn perft_matches_known_node_counts() {
    for position in TEST_POSITIONS {
        let mut pos = parse_fen(position.fen).unwrap();
        for &(depth, expected) in position.depths {
            let nodes = perft(&mut pos, depth);
            assert_eq!(nodes, expected, "perft mismatch for {} at depth {depth}", position.name);
        }
    }
}

#[test]
fn transposition_table_depth_preferred_replacement() {
    let mut tt = TranspositionTable::new(1);
    let hash = 0xdead_beef_u64;

    tt.store(hash, 1, -1000, 1000, 1, None);
    let entry = tt.probe(hash, 1).expect("entry missing");
    assert_eq!(entry.depth, 1);
    assert_eq!(entry.bound, Bound::Exact);

    // A shallower store of the *same* hash still replaces (it's a fresher
    // result for the same position, not a collision).
    tt.store(hash, 0, -1000, 1000, 0, None);
    let entry2 = tt.probe(hash, 0).expect("entry missing after same-hash store");
    assert_eq!(entry2.eval, 0);

    tt.store(hash, 5, -1000, 1000, 5, None);
    let entry3 = tt.probe(hash, 5).expect("entry missing after deeper store");
    assert_eq!(entry3.depth, 5);
}
