//! Move generation.
//!
//! Pseudo-move generation per piece kind, plus attack detection built on
//! top of it. "Pseudo" means the piece's movement rule is respected but
//! the mover's own king may be left in check; [`Game`](crate::Game)
//! filters those out.

use crate::Board;
use chess_core::{Color, PieceKind, Square};

/// Orthogonal ray directions as (row delta, col delta).
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions.
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Returns every destination the piece on `from` can reach by its movement
/// rule. An empty square yields no destinations.
pub fn generate_pseudo_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    let us = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, us, &mut moves),
        PieceKind::Knight => generate_step_moves(board, from, us, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::Bishop => generate_ray_moves(board, from, us, &BISHOP_DIRECTIONS, &mut moves),
        PieceKind::Rook => generate_ray_moves(board, from, us, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Queen => {
            generate_ray_moves(board, from, us, &ROOK_DIRECTIONS, &mut moves);
            generate_ray_moves(board, from, us, &BISHOP_DIRECTIONS, &mut moves);
        }
        PieceKind::King => generate_step_moves(board, from, us, &KING_OFFSETS, &mut moves),
    }
    moves
}

/// Pawn pushes and diagonal captures. No en passant.
fn generate_pawn_moves(board: &Board, from: Square, us: Color, moves: &mut Vec<Square>) {
    let dir = us.pawn_direction();

    // Single push, then double push from the start row through an empty square
    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            moves.push(one);

            if from.row() == us.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        moves.push(two);
                    }
                }
            }
        }
    }

    // Captures only onto enemy pieces
    for d_col in [-1, 1] {
        if let Some(to) = from.offset(dir, d_col) {
            if board.piece_at(to).is_some_and(|target| target.color != us) {
                moves.push(to);
            }
        }
    }
}

/// Knight and king moves: fixed offsets onto empty or enemy squares.
fn generate_step_moves(
    board: &Board,
    from: Square,
    us: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            match board.piece_at(to) {
                Some(target) if target.color == us => {}
                _ => moves.push(to),
            }
        }
    }
}

/// Sliding moves: each ray runs until the edge or the first occupied
/// square, which is included only when it holds an enemy piece.
fn generate_ray_moves(
    board: &Board,
    from: Square,
    us: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match board.piece_at(to) {
                None => moves.push(to),
                Some(target) => {
                    if target.color != us {
                        moves.push(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Returns true if any piece of color `by` can move to `sq`.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, _)| generate_pseudo_moves(board, from).contains(&sq))
}

/// Returns true if the king of `color` is attacked by the other side.
///
/// # Panics
///
/// Panics if `color` has no king. Every position a [`Game`](crate::Game)
/// can reach keeps both kings, so this only fires on a broken invariant.
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    let king = board
        .king_square(color)
        .unwrap_or_else(|| panic!("{} king missing from board {:?}", color, board));
    is_square_attacked(board, king, color.opposite())
}
