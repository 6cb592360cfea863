use crate::{Axis, Board, Position, QWIRKLE_LEN, QWIRKLE_POINTS};

/// # Returns
///
/// The points earned by a line of `len` [tiles](crate::Tile): `0` for a lone [tile](crate::Tile),
/// [QWIRKLE_POINTS] for a complete line of [QWIRKLE_LEN], and `len` otherwise.
#[inline]
pub fn line_points(len: usize) -> usize {
    match len {
        0 | 1 => 0,
        QWIRKLE_LEN => QWIRKLE_POINTS,
        _ => len,
    }
}

/// Sums the points of every line containing a [tile](crate::Tile) placed this turn. `placements`
/// must already be on `board` and form one continuous line.
///
/// When every placement shares a row, each placement's column line is counted and the shared
/// row line is counted once. Otherwise the axes are swapped. A [tile](crate::Tile) belonging to
/// both a row line and a column line is therefore counted twice.
///
/// # Returns
///
/// The points earned by the turn, or `0` if nothing was placed.
///
/// # See Also
///
/// * [line_points]
/// * [GameState::end_turn](crate::GameState::end_turn)
pub fn score_turn(board: &Board, placements: &[Position]) -> usize {
    let Some(&(first_row, _)) = placements.first() else {
        return 0;
    };
    let (main, cross) = if placements.iter().all(|&(row, _)| row == first_row) {
        (Axis::Row, Axis::Column)
    } else {
        (Axis::Column, Axis::Row)
    };

    placements
        .iter()
        .map(|&position| line_points(board.line_len(position, cross)))
        .sum::<usize>()
        + line_points(board.line_len(placements[0], main))
}
