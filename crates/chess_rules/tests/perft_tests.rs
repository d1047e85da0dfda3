use rayon::prelude::*;

use chess_rules::{CastleSide, CastlingRights, Color, Position, perft};

mod common;
use common::setup;

const FULL_PERFT_ENV: &str = "FULL_PERFT";

struct Case {
    name: &'static str,
    position: Position,
    depths: Vec<(u8, u64)>,
    slow_depths: Vec<(u8, u64)>,
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "startpos",
            position: Position::startpos(),
            depths: vec![(1, 20), (2, 400), (3, 8_902)],
            slow_depths: vec![(4, 197_281)],
        },
        Case {
            name: "kiwipete",
            position: setup(
                [
                    "r...k..r", //
                    "p.ppqpb.", //
                    "bn..pnp.", //
                    "...PN...", //
                    ".p..P...", //
                    "..N..Q.p", //
                    "PPPBBPPP", //
                    "R...K..R",
                ],
                Color::White,
                CastlingRights::all(),
            ),
            depths: vec![(1, 48), (2, 2_039)],
            slow_depths: vec![(3, 97_862)],
        },
        Case {
            name: "rook endgame with en passant",
            position: setup(
                [
                    "........", //
                    "..p.....", //
                    "...p....", //
                    "KP.....r", //
                    ".R...p.k", //
                    "........", //
                    "....P.P.", //
                    "........",
                ],
                Color::White,
                CastlingRights::none(),
            ),
            depths: vec![(1, 14), (2, 191), (3, 2_812)],
            slow_depths: vec![(4, 43_238)],
        },
        Case {
            name: "promotions",
            position: setup(
                [
                    "r...k..r", //
                    "Pppp.ppp", //
                    ".b...nbN", //
                    "nP......", //
                    "BBP.P...", //
                    "q....N..", //
                    "Pp.P..PP", //
                    "R..Q.RK.",
                ],
                Color::White,
                CastlingRights::none()
                    .with(Color::Black, CastleSide::KingSide)
                    .with(Color::Black, CastleSide::QueenSide),
            ),
            depths: vec![(1, 6), (2, 264), (3, 9_467)],
            slow_depths: vec![],
        },
        Case {
            name: "discovered checks",
            position: setup(
                [
                    "rnbq.k.r", //
                    "pp.Pbppp", //
                    "..p.....", //
                    "........", //
                    "..B.....", //
                    "........", //
                    "PPP.NnPP", //
                    "RNBQK..R",
                ],
                Color::White,
                CastlingRights::none()
                    .with(Color::White, CastleSide::KingSide)
                    .with(Color::White, CastleSide::QueenSide),
            ),
            depths: vec![(1, 44), (2, 1_486)],
            slow_depths: vec![(3, 62_379)],
        },
    ]
}

#[test]
fn perft_known_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    cases().par_iter().for_each(|case| {
        let slow: &[(u8, u64)] = if full { &case.slow_depths } else { &[] };
        for &(depth, expected) in case.depths.iter().chain(slow) {
            let nodes = perft(&case.position, depth);
            assert_eq!(
                nodes, expected,
                "perft mismatch for {} at depth {}",
                case.name, depth
            );
        }
    });
}
