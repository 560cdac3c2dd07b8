//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use greedy_toe_core::{Board, Player, Position, Square, check_winner, winning_line};

use super::app::App;

/// What the mode line reports about the session.
#[derive(Debug, Clone, Copy)]
pub struct ModeInfo {
    /// Whether the opponent is automated.
    pub automated_opponent: bool,
    /// Mark the automated opponent plays.
    pub opponent_mark: Player,
}

/// Renders the whole screen from the frontend state.
pub fn draw(frame: &mut Frame, app: &App, mode: ModeInfo) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(2), // Mode + keys
        ])
        .split(area);

    let title = Paragraph::new("Greedy Toe - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let highlight = check_winner(app.board()).and_then(|p| winning_line(app.board(), p));
    draw_board(frame, chunks[1], app.board(), app.cursor(), highlight);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let opponent = if mode.automated_opponent {
        format!("vs AI ({})", mode.opponent_mark)
    } else {
        "two players".to_string()
    };
    let help = Paragraph::new(vec![
        Line::from(format!("Mode: {opponent}")),
        Line::from("arrows/1-9 move, Enter claim, r reset, a toggle AI, q quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    if let Some(popup) = app.popup() {
        draw_popup(frame, area, &popup.message);
    }
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    highlight: Option<[Position; 3]>,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [0usize, 2, 4].into_iter().enumerate() {
        let positions = [row * 3, row * 3 + 1, row * 3 + 2].map(|i| Position::ALL[i]);
        draw_row(frame, rows[chunk], board, cursor, highlight, positions);
        if chunk < 4 {
            draw_separator(frame, rows[chunk + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    highlight: Option<[Position; 3]>,
    positions: [Position; 3],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, pos) in positions.into_iter().enumerate() {
        let lit = highlight.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, cols[i * 2], board, cursor, pos, lit);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    pos: Position,
    lit: bool,
) {
    let hint = format!(" {} ", pos.to_index() + 1);
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (hint, Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if lit {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    // Vertically center the symbol in the 3-line cell.
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_popup(frame: &mut Frame, area: Rect, message: &str) {
    let popup_area = center_rect(area, 30, 5);
    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(vec![Line::default(), Line::from(message)])
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));
    frame.render_widget(popup, popup_area);
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
