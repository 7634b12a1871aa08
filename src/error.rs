//! Typed failure surface for rules violations on an already-valid board.
//!
//! `FenError` (parsing failures over arbitrary caller-supplied text) lives
//! in [`crate::fen`] — a malformed FEN string is a different kind of
//! problem from an illegal move on a well-formed board, so the two get
//! separate error types rather than one do-everything enum.

/// Rules-level failures surfaced from the public `Board` API.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ChessError {
    /// `Board::apply` was asked to make a move the legality filter rejects.
    /// Board state is unchanged.
    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: String, to: String },
}

pub type ChessResult<T> = Result<T, ChessError>;
