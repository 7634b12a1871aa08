//! FEN placement-field parsing.
//!
//! Only the piece-placement field is consumed (digits are empty runs, `/`
//! ends a rank, anything after the first space is ignored) — castling
//! rights, en-passant target, and the move counters in a full FEN string
//! are out of scope for this core.

use crate::piece::{Cell, Piece};
use crate::square::BOARD_SIZE;

/// Failures parsing a FEN placement string. Distinct from [`crate::error::ChessError`]
/// because this is a parse failure over arbitrary caller-supplied text, not
/// a rules violation over an already-valid board.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum FenError {
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength { rank_index: usize, length: usize },
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },
}

/// Parse the placement field of a FEN string into a full 120-cell mailbox
/// (guard rows/columns already filled in).
pub fn fen_to_cells(fen: &str) -> Result<Vec<Cell>, FenError> {
    let placement = fen.split_whitespace().next().unwrap_or("");
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(8);
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let mut row = Vec::with_capacity(8);
        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                for _ in 0..digit {
                    row.push(Cell::Empty);
                }
            } else {
                let piece =
                    Piece::from_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                row.push(Cell::Occupied(piece));
            }
        }
        if row.len() != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: row.len(),
            });
        }
        rows.push(row);
    }

    let mut cells = vec![Cell::Guard; BOARD_SIZE];
    for (row_index, row) in rows.into_iter().enumerate() {
        let base = (row_index + 2) * 10 + 1;
        for (col, cell) in row.into_iter().enumerate() {
            cells[base + col] = cell;
        }
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Color, PieceKind};
    use crate::square::sq_to_index;

    #[test]
    fn starting_fen_places_white_king_on_e1() {
        let cells = fen_to_cells("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .unwrap();
        assert_eq!(
            cells[sq_to_index("e1")],
            Cell::Occupied(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            cells[sq_to_index("e8")],
            Cell::Occupied(Piece::new(Color::Black, PieceKind::King))
        );
    }

    #[test]
    fn bad_rank_length_is_an_error_not_a_panic() {
        let err = fen_to_cells("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPP/RNBQKBNR w - - 0 1").unwrap_err();
        assert!(matches!(err, FenError::BadRankLength { .. }));
    }

    #[test]
    fn wrong_rank_count_is_an_error() {
        let err = fen_to_cells("8/8/8/8/8/8/8 w - - 0 1").unwrap_err();
        assert_eq!(err, FenError::WrongRankCount { found: 7 });
    }

    #[test]
    fn invalid_piece_char_is_an_error() {
        let err = fen_to_cells("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBZR w - - 0 1")
            .unwrap_err();
        assert_eq!(err, FenError::InvalidPieceChar { character: 'Z' });
    }
}
