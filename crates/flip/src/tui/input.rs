//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use flip_core::{GridSize, Position};

/// Moves the cursor one tile for arrow keys and `hjkl`, staying on the grid.
pub fn move_cursor(cursor: Position, key: KeyCode, grid: GridSize) -> Position {
    let last = grid.side() - 1;
    let Position { row, col } = cursor;

    match key {
        KeyCode::Up | KeyCode::Char('k') => Position::new(row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => Position::new((row + 1).min(last), col),
        KeyCode::Left | KeyCode::Char('h') => Position::new(row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Position::new(row, (col + 1).min(last)),
        _ => cursor,
    }
}

/// Returns true for keys that move the cursor.
pub fn is_movement(key: KeyCode) -> bool {
    matches!(
        key,
        KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h' | 'j' | 'k' | 'l')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSize {
        GridSize::new(4).unwrap()
    }

    #[test]
    fn test_moves_one_step() {
        let start = Position::new(1, 1);
        assert_eq!(move_cursor(start, KeyCode::Up, grid()), Position::new(0, 1));
        assert_eq!(move_cursor(start, KeyCode::Down, grid()), Position::new(2, 1));
        assert_eq!(move_cursor(start, KeyCode::Left, grid()), Position::new(1, 0));
        assert_eq!(move_cursor(start, KeyCode::Right, grid()), Position::new(1, 2));
    }

    #[test]
    fn test_vim_keys() {
        let start = Position::new(2, 2);
        assert_eq!(move_cursor(start, KeyCode::Char('k'), grid()), Position::new(1, 2));
        assert_eq!(move_cursor(start, KeyCode::Char('j'), grid()), Position::new(3, 2));
        assert_eq!(move_cursor(start, KeyCode::Char('h'), grid()), Position::new(2, 1));
        assert_eq!(move_cursor(start, KeyCode::Char('l'), grid()), Position::new(2, 3));
    }

    #[test]
    fn test_stays_on_grid() {
        let origin = Position::new(0, 0);
        assert_eq!(move_cursor(origin, KeyCode::Up, grid()), origin);
        assert_eq!(move_cursor(origin, KeyCode::Left, grid()), origin);

        let corner = Position::new(3, 3);
        assert_eq!(move_cursor(corner, KeyCode::Down, grid()), corner);
        assert_eq!(move_cursor(corner, KeyCode::Right, grid()), corner);
    }

    #[test]
    fn test_other_keys_ignored() {
        let start = Position::new(1, 2);
        assert_eq!(move_cursor(start, KeyCode::Enter, grid()), start);
        assert!(!is_movement(KeyCode::Char('r')));
        assert!(is_movement(KeyCode::Char('j')));
    }
}
