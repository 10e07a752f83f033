use super::{Board, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    side: Side,
    kind: PieceKind,
}

impl Piece {
    pub fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    pub fn side(self) -> Side {
        self.side
    }

    /// Upper case is black, lower case is white, space is an empty square.
    fn from_letter(letter: char) -> Option<Self> {
        let side = if letter.is_ascii_uppercase() {
            Side::Black
        } else {
            Side::White
        };
        let kind = match letter.to_ascii_lowercase() {
            ' ' => return None,
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => unreachable!(),
        };
        Some(Self::new(side, kind))
    }

    pub fn glyph(self) -> &'static str {
        match (self.side, self.kind) {
            (Side::White, PieceKind::King) => "\u{2654}",
            (Side::White, PieceKind::Queen) => "\u{2655}",
            (Side::White, PieceKind::Rook) => "\u{2656}",
            (Side::White, PieceKind::Bishop) => "\u{2657}",
            (Side::White, PieceKind::Knight) => "\u{2658}",
            (Side::White, PieceKind::Pawn) => "\u{2659}",
            (Side::Black, PieceKind::King) => "\u{265A}",
            (Side::Black, PieceKind::Queen) => "\u{265B}",
            (Side::Black, PieceKind::Rook) => "\u{265C}",
            (Side::Black, PieceKind::Bishop) => "\u{265D}",
            (Side::Black, PieceKind::Knight) => "\u{265E}",
            (Side::Black, PieceKind::Pawn) => "\u{265F}",
        }
    }
}

const STARTING_POSITION: [&str; ROWS] = [
    "RNBQKBNR", //
    "PPPPPPPP", //
    "        ", //
    "        ", //
    "        ", //
    "        ", //
    "pppppppp", //
    "rnbqkbnr", //
];

pub fn build_initial_board() -> Board {
    for row in &STARTING_POSITION {
        debug_assert_eq!(row.len(), COLS);
    }
    Board::from_fn(|row, col| Piece::from_letter(char::from(STARTING_POSITION[row].as_bytes()[col])))
}
