//! Static material evaluation (C8). A standalone utility — the mate search
//! in [`crate::engine`] never calls this; it scores depth cutoffs as a flat
//! zero, since it is only looking for forced mate, not general strength.

use crate::board::Board;
use crate::piece::Color;

/// Material balance in pawns, from White's perspective: positive favors
/// White, negative favors Black. Standard values (P=1, N=B=3, R=5, Q=9);
/// the king's nominal weight cancels out since both sides always have one.
pub fn score_board(board: &Board) -> i32 {
    let white: i32 = board.piece_squares(Color::White).map(|(_, p)| p.kind.value()).sum();
    let black: i32 = board.piece_squares(Color::Black).map(|(_, p)| p.kind.value()).sum();
    white - black
}
