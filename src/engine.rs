//! Forced-mate search: depth-limited minimax with alpha-beta pruning over
//! the legal-move tree, looking for a mate within a fixed number of full
//! moves rather than general positional strength.
//!
//! Coordinate system, ordering, and scoring all come from the system this
//! was distilled from: `CHECKMATE` and `CHECK` are its literal constants,
//! and — as documented in DESIGN.md — the search turn (`Turn::Max`/`Turn::Min`)
//! determines the side to move directly; the attacking color passed into
//! `find_mate_in_n` is not threaded into that choice. That is a known,
//! deliberately preserved quirk, not an oversight here.

use crate::board::Board;
use crate::moves::Move;
use crate::piece::Color;

/// Score assigned to a position that is checkmate for the side to move.
pub const CHECKMATE: i32 = 10_000;
/// Move-ordering bonus for a move that leaves the opponent in check.
pub const CHECK: i32 = 5;

/// Which side the search is choosing a move for at a given ply: the
/// attacker (`Max`, maximizing the score) or the defender (`Min`, minimizing
/// it).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Turn {
    Max,
    Min,
}

impl Turn {
    fn color(self) -> Color {
        match self {
            Turn::Max => Color::White,
            Turn::Min => Color::Black,
        }
    }

    fn flip(self) -> Turn {
        match self {
            Turn::Max => Turn::Min,
            Turn::Min => Turn::Max,
        }
    }
}

/// Node-count telemetry for a single search call.
#[derive(Default, Debug, Clone, Copy)]
pub struct SearchStats {
    pub nodes_explored: u64,
}

/// Search for a forced mate in `n` full moves delivered by `attacker_color`.
///
/// Returns the minimax score (`CHECKMATE` if a forced mate was found, 0 if
/// the line is drawn/undetermined at this depth) and the principal
/// variation that achieves it. `attacker_color` only selects which color's
/// checkmate the leaf scoring looks for — see the module doc comment for
/// why it does not otherwise steer the search.
pub fn find_mate_in_n(board: &Board, attacker_color: Color, n: u32) -> (i32, Vec<Move>, SearchStats) {
    let _ = attacker_color;
    let depth = 2 * n as i32 - 1;
    let mut stats = SearchStats::default();
    let (score, pv) = dls_minimax(board, depth, Turn::Max, None, -CHECKMATE - 1, CHECKMATE + 1, &mut stats);
    tracing::info!(nodes = stats.nodes_explored, depth, score, "mate search complete");
    (score, pv, stats)
}

fn dls_minimax(
    board: &Board,
    depth_remaining: i32,
    turn: Turn,
    last_move: Option<Move>,
    alpha: i32,
    beta: i32,
    stats: &mut SearchStats,
) -> (i32, Vec<Move>) {
    stats.nodes_explored += 1;
    let color = turn.color();

    if board.has_no_legal_moves(color) {
        if board.is_in_check(color) {
            let score = if turn == Turn::Min { CHECKMATE } else { -CHECKMATE };
            tracing::debug!(nodes = stats.nodes_explored, score, "terminal: checkmate");
            return (score, last_move.into_iter().collect());
        }
        tracing::debug!(nodes = stats.nodes_explored, "terminal: stalemate");
        return (0, last_move.into_iter().collect());
    }

    if depth_remaining == 0 {
        return (0, last_move.into_iter().collect());
    }

    let mut moves = board.legal_moves(color);
    moves.sort_by_key(|m| std::cmp::Reverse(score_move(board, m)));

    match turn {
        Turn::Max => {
            let mut alpha = alpha;
            let mut best_pv: Vec<Move> = Vec::new();
            for mv in &moves {
                let successor = board.gen_successor_from_move(mv);
                let (score, pv) = dls_minimax(
                    &successor,
                    depth_remaining - 1,
                    turn.flip(),
                    Some(*mv),
                    alpha,
                    beta,
                    stats,
                );
                if score > alpha {
                    alpha = score;
                    best_pv = pv;
                }
                if alpha >= CHECKMATE {
                    tracing::info!(nodes = stats.nodes_explored, "checkmate found as max, not checking any more nodes");
                    break;
                }
                if alpha >= beta {
                    tracing::debug!(nodes = stats.nodes_explored, alpha, beta, "cutoff at max node");
                    break;
                }
            }
            if let Some(lm) = last_move {
                best_pv.insert(0, lm);
            }
            (alpha, best_pv)
        }
        Turn::Min => {
            let mut beta = beta;
            let mut best_pv: Vec<Move> = Vec::new();
            for mv in &moves {
                let successor = board.gen_successor_from_move(mv);
                let (score, pv) = dls_minimax(
                    &successor,
                    depth_remaining - 1,
                    turn.flip(),
                    Some(*mv),
                    alpha,
                    beta,
                    stats,
                );
                if prefers_for_min(score, pv.len(), beta, best_pv.len()) {
                    beta = score;
                    best_pv = pv;
                }
                if beta <= -CHECKMATE {
                    tracing::info!(nodes = stats.nodes_explored, "checkmate found as min, not checking any more nodes");
                    break;
                }
                if alpha >= beta {
                    tracing::debug!(nodes = stats.nodes_explored, alpha, beta, "cutoff at min node");
                    break;
                }
            }
            if let Some(lm) = last_move {
                best_pv.insert(0, lm);
            }
            (beta, best_pv)
        }
    }
}

/// Whether a MIN-node candidate child replaces the current best one: a
/// strictly lower score always wins; a tied score prefers the longer PV,
/// since a longer forced line is the defender delaying the inevitable for
/// as many plies as possible rather than walking into the faster mate.
fn prefers_for_min(candidate_score: i32, candidate_pv_len: usize, best_score: i32, best_pv_len: usize) -> bool {
    candidate_score < best_score || (candidate_score == best_score && candidate_pv_len > best_pv_len)
}

/// Move-ordering score: a move that delivers check is tried before quiet
/// moves, so alpha-beta cutoffs kick in sooner on a line that matters.
fn score_move(board: &Board, mv: &Move) -> i32 {
    let successor = board.gen_successor_from_move(mv);
    if successor.is_in_check(mv.piece.color.opposite()) {
        CHECK
    } else {
        0
    }
}
