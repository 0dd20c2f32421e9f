use crate::config::PlayersConfig;
use crate::game::{Board, Cell, GameState, GameStatus, Player, Run, HEIGHT, WIDTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    players: &PlayersConfig,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Header
            Constraint::Min(HEIGHT as u16 + 4), // Board
            Constraint::Length(3),              // Message
            Constraint::Length(3),              // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, players, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Blue,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, players: &PlayersConfig, area: Rect) {
    let (status, color) = match game_state.status() {
        GameStatus::InProgress => {
            let player = game_state.current_player();
            (
                format!("Current Player: {}", players.name(player)),
                player_color(player),
            )
        }
        GameStatus::Won(player) => (
            format!("Game Over  |  {} won", players.name(player)),
            player_color(player),
        ),
        GameStatus::Draw => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let board: &Board = game_state.board();
    let winning_run: Option<Run> = game_state.winning_run();
    let mut lines = Vec::new();

    // Column tops: numbers, with a hover piece over the selected column
    let hover = if game_state.is_terminal() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(player_color(game_state.current_player()))
            .add_modifier(Modifier::BOLD)
    };
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..WIDTH {
        if col == selected_column {
            col_line.push(Span::styled(" \u{25cf} ", hover));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "\u{2550}".repeat(WIDTH * 3 + 1);
    lines.push(Line::from(format!("  \u{2554}{rule}\u{2557}")));

    for row in 0..HEIGHT {
        let mut row_spans = vec![Span::raw("  \u{2551}")];

        for col in 0..WIDTH {
            let (symbol, mut style) = match board.get(row, col) {
                Cell::Empty => (" . ", Style::default().fg(Color::DarkGray)),
                Cell::One => (" \u{25cf} ", Style::default().fg(player_color(Player::One))),
                Cell::Two => (" \u{25cf} ", Style::default().fg(player_color(Player::Two))),
            };
            if winning_run.is_some_and(|run| run.contains(&(row, col))) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" \u{2551}"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  \u{255a}{rule}\u{255d}")));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(format!(
        "\u{2190}/\u{2192}: Move  |  Enter or 1-{WIDTH}: Drop  |  R: Play again  |  Q: Quit"
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
