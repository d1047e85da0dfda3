use crate::{
    board::Position,
    execute::execute,
    status::legal_moves,
    types::{PieceKind, Promotion},
};

const PROMOTIONS: [Promotion; 4] = [
    Promotion::Queen,
    Promotion::Rook,
    Promotion::Bishop,
    Promotion::Knight,
];

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, with each
/// promotion choice counted as its own move.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mover = pos.side_to_move;
    let mut nodes = 0u64;
    for mv in legal_moves(pos, mover) {
        let promotes = pos
            .board
            .get(mv.from)
            .is_some_and(|pc| pc.kind == PieceKind::Pawn && mv.to.row() == mover.promotion_row());
        let choices: &[Promotion] = if promotes {
            &PROMOTIONS
        } else {
            &PROMOTIONS[..1]
        };
        for &promo in choices {
            let mut next = pos.clone();
            if execute(&mut next, mv.from, mv.to, promo).is_ok() {
                nodes += perft(&next, depth - 1);
            }
        }
    }
    nodes
}
