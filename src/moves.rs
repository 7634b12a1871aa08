//! The `Move` value and its notations.

use crate::board::Board;
use crate::piece::{Piece, PieceKind};
use crate::square::index_to_sq;
#[cfg(test)]
use crate::square::sq_to_index;

/// A single fully-resolved move: which piece, where from, where to, and the
/// flags that distinguish it from a plain relocation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move {
    pub piece: Piece,
    pub src: usize,
    pub dest: usize,
    pub promotion: Option<PieceKind>,
    pub is_castle: bool,
    pub is_en_passant: bool,
    pub is_capture: bool,
}

impl Move {
    /// Render this move in the project's own notation (not algebraic/SAN):
    /// `<KindLetter><from><sep><to>`, `O-O`/`O-O-O` for castling, `<from>x<to> (ep)`
    /// for en passant, and `<from>-<to>=<PromoLetter>` for promotion.
    ///
    /// `board` is accepted for symmetry with the rest of the public surface;
    /// every branch here is already fully determined by the move's own flags.
    pub fn show(&self, _board: &Board) -> String {
        if self.is_castle {
            return if self.dest > self.src {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }

        let sep = if self.is_capture { "x" } else { "-" };
        let from = index_to_sq(self.src);
        let to = index_to_sq(self.dest);

        if self.is_en_passant {
            return format!("{from}x{to} (ep)");
        }

        if let Some(promo) = self.promotion {
            let letter = self.letter_for(promo.letter());
            return format!("{from}{sep}{to}={letter}");
        }

        let piece_letter = if self.piece.kind == PieceKind::Pawn {
            String::new()
        } else {
            self.letter_for(self.piece.kind.letter()).to_string()
        };
        format!("{piece_letter}{from}{sep}{to}")
    }

    fn letter_for(&self, upper: char) -> char {
        match self.piece.color {
            crate::piece::Color::White => upper,
            crate::piece::Color::Black => upper.to_ascii_lowercase(),
        }
    }

    /// Encode as a UCI-style move string: `<from><to>` plus a lower-case
    /// promotion letter when present, e.g. `"e7e8q"`.
    pub fn to_uci(&self) -> String {
        let mut s = format!("{}{}", index_to_sq(self.src), index_to_sq(self.dest));
        if let Some(promo) = self.promotion {
            s.push(promo.letter().to_ascii_lowercase());
        }
        s
    }
}

/// Decode a UCI-style move string into the `(from, to, promotion)` triple
/// that `Board::apply` accepts. Does not consult a board, so it cannot fill
/// in `Move`'s other fields (capture/castle/en-passant are board-dependent) —
/// callers feed the triple back through `Board::apply` to get a real `Move`.
pub fn parse_uci(s: &str) -> Option<(String, String, Option<PieceKind>)> {
    let bytes = s.as_bytes();
    if s.len() != 4 && s.len() != 5 {
        return None;
    }
    let from = std::str::from_utf8(&bytes[0..2]).ok()?;
    let to = std::str::from_utf8(&bytes[2..4]).ok()?;
    let promotion = if s.len() == 5 {
        Some(PieceKind::from_letter(bytes[4] as char)?)
    } else {
        None
    };
    Some((from.to_string(), to.to_string(), promotion))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Color;

    fn mv(piece: Piece, src: &str, dest: &str) -> Move {
        Move {
            piece,
            src: sq_to_index(src),
            dest: sq_to_index(dest),
            promotion: None,
            is_castle: false,
            is_en_passant: false,
            is_capture: false,
        }
    }

    #[test]
    fn quiet_knight_move_omits_capture_separator() {
        let piece = Piece::new(Color::White, PieceKind::Knight);
        let m = mv(piece, "g1", "f3");
        assert_eq!(m.show(&Board::new()), "Ng1-f3");
    }

    #[test]
    fn pawn_capture_has_no_kind_letter() {
        let piece = Piece::new(Color::White, PieceKind::Pawn);
        let mut m = mv(piece, "e4", "d5");
        m.is_capture = true;
        assert_eq!(m.show(&Board::new()), "e4xd5");
    }

    #[test]
    fn promotion_uses_color_cased_letter() {
        let piece = Piece::new(Color::Black, PieceKind::Pawn);
        let mut m = mv(piece, "e2", "e1");
        m.promotion = Some(PieceKind::Queen);
        assert_eq!(m.show(&Board::new()), "e2-e1=q");
    }

    #[test]
    fn promotion_capture_keeps_the_capture_separator() {
        let piece = Piece::new(Color::White, PieceKind::Pawn);
        let mut m = mv(piece, "e7", "d8");
        m.is_capture = true;
        m.promotion = Some(PieceKind::Rook);
        assert_eq!(m.show(&Board::new()), "e7xd8=R");
    }

    #[test]
    fn en_passant_notation_marks_ep() {
        let piece = Piece::new(Color::White, PieceKind::Pawn);
        let mut m = mv(piece, "e5", "d6");
        m.is_en_passant = true;
        m.is_capture = true;
        assert_eq!(m.show(&Board::new()), "e5xd6 (ep)");
    }

    #[test]
    fn castle_notation_ignores_board() {
        let piece = Piece::new(Color::White, PieceKind::King);
        let mut m = mv(piece, "e1", "g1");
        m.is_castle = true;
        assert_eq!(m.show(&Board::new()), "O-O");
        m.dest = sq_to_index("c1");
        assert_eq!(m.show(&Board::new()), "O-O-O");
    }

    #[test]
    fn uci_round_trip_preserves_promotion() {
        let piece = Piece::new(Color::White, PieceKind::Pawn);
        let mut m = mv(piece, "e7", "e8");
        m.promotion = Some(PieceKind::Queen);
        let encoded = m.to_uci();
        assert_eq!(encoded, "e7e8q");
        let (from, to, promo) = parse_uci(&encoded).unwrap();
        assert_eq!(from, "e7");
        assert_eq!(to, "e8");
        assert_eq!(promo, Some(PieceKind::Queen));
    }

    #[test]
    fn uci_round_trip_covers_every_promotion_letter() {
        let piece = Piece::new(Color::Black, PieceKind::Pawn);
        for kind in [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight] {
            let mut m = mv(piece, "e2", "e1");
            m.promotion = Some(kind);
            let encoded = m.to_uci();
            let (from, to, promo) = parse_uci(&encoded).unwrap();
            assert_eq!(from, "e2");
            assert_eq!(to, "e1");
            assert_eq!(promo, Some(kind));
        }
    }

    #[test]
    fn uci_without_promotion_round_trips() {
        let (from, to, promo) = parse_uci("g1f3").unwrap();
        assert_eq!((from.as_str(), to.as_str(), promo), ("g1", "f3", None));
    }
}
