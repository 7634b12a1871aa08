//! Color and piece-kind primitives shared by every other module.

/// The two sides. Total `opposite` operator, no character constants at
/// module boundaries.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// The six piece kinds. Ordering here is arbitrary; nothing relies on the
/// discriminant values.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case letter for this kind, independent of color (`kind_of`).
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse an upper-case piece letter. Used by FEN and promotion parsing.
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Standard material value in pawns (K is never traded, but carries a
    /// large nominal value so it always dominates a material comparison).
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 1000,
        }
    }
}

/// A piece sitting on a square: color plus kind.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// The conventional letter encoding: uppercase for White, lowercase for
    /// Black (`P/N/B/R/Q/K` vs `p/n/b/r/q/k`).
    pub fn to_char(self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }
}

/// One cell of the mailbox board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    /// Off-board sentinel; never mutated once the board is built.
    Guard,
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Occupied(p) => Some(p.color),
            _ => None,
        }
    }

    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_guard(self) -> bool {
        matches!(self, Cell::Guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involutive() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite().opposite(), Color::Black);
    }

    #[test]
    fn piece_char_round_trips() {
        for kind in [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ] {
            for color in [Color::White, Color::Black] {
                let piece = Piece::new(color, kind);
                let parsed = Piece::from_char(piece.to_char()).unwrap();
                assert_eq!(parsed, piece);
            }
        }
    }

    #[test]
    fn white_letters_are_uppercase() {
        assert_eq!(Piece::new(Color::White, PieceKind::Knight).to_char(), 'N');
        assert_eq!(Piece::new(Color::Black, PieceKind::Knight).to_char(), 'n');
    }
}
