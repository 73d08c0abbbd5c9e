//! Stateless UI rendering for the memory board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use flip_core::{EngineState, GameStatus, Position, Reveal, TileView};

const CELL_WIDTH: u16 = 6;
const CELL_HEIGHT: u16 = 3;

/// Renders the board with cursor highlight.
pub fn draw(frame: &mut Frame, state: &EngineState, cursor: Position, status: &str) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Tries
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Memory Game - Match identical numbers!")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    frame.render_widget(tries_line(state), chunks[1]);

    draw_board(frame, chunks[2], state, cursor);

    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[3]);

    let help = Paragraph::new("arrows/hjkl move · Enter/Space flip · r restart · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn tries_line(state: &EngineState) -> Paragraph<'static> {
    let style = match state.status {
        GameStatus::InProgress => Style::default(),
        GameStatus::Won => Style::default().fg(Color::Green),
        GameStatus::LostByExhaustedTries => Style::default().fg(Color::Red),
    };
    let text = format!(
        "Tries: {}/{}   Pairs: {}/{}   {}",
        state.tries_remaining, state.max_tries, state.pairs_found, state.total_pairs, state.status
    );
    Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
}

/// Width and height of the board in cells, saturating at `u16::MAX`.
fn board_extent(side: usize) -> (u16, u16) {
    let side = u16::try_from(side).unwrap_or(u16::MAX);
    (
        side.saturating_mul(CELL_WIDTH),
        side.saturating_mul(CELL_HEIGHT),
    )
}

fn draw_board(frame: &mut Frame, area: Rect, state: &EngineState, cursor: Position) {
    let side = state.grid.side();
    let (width, height) = board_extent(side);
    let board_area = center_rect(area, width, height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CELL_HEIGHT); side])
        .split(board_area);

    for (tiles, row_area) in state.rows().zip(rows.iter()) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CELL_WIDTH); side])
            .split(*row_area);

        for (tile, cell_area) in tiles.iter().zip(cols.iter()) {
            draw_cell(frame, *cell_area, tile, cursor);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, tile: &TileView, cursor: Position) {
    let symbol = match tile.face {
        Some(face) => face.to_string(),
        None => "?".to_string(),
    };

    let base_style = match (tile.reveal, tile.enabled) {
        (Reveal::Hidden, true) => Style::default().fg(Color::Gray),
        (Reveal::Hidden, false) => Style::default().fg(Color::DarkGray),
        (Reveal::Shown, _) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        (Reveal::Matched, _) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    };

    let style = if tile.position == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use flip_core::{Engine, GridSize, Layout as BoardLayout};
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(state: &EngineState) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw(frame, state, Position::new(0, 0), "status"))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_board_extent_saturates() {
        assert_eq!(board_extent(4), (24, 12));
        assert_eq!(board_extent(10_924), (u16::MAX, 32_772));
        assert_eq!(board_extent(usize::MAX), (u16::MAX, u16::MAX));
    }

    #[test]
    fn test_hidden_faces_not_drawn() {
        let grid = GridSize::new(2).unwrap();
        let layout = BoardLayout::from_faces(grid, [1, 2, 1, 2]).unwrap();
        let mut engine = Engine::from_layout(layout);
        engine.select_tile(Position::new(0, 1));

        let screen = rendered(&engine.state());
        assert!(screen.contains("Tries: 3/3"));
        assert!(screen.contains('2'));
        assert_eq!(screen.matches('?').count(), 3);
    }
}
