use crate::config::AppConfig;
use crate::game::{DropOutcome, GameState, GameStatus, IgnoredDrop, MoveError, WIDTH};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

pub struct App {
    config: AppConfig,
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            game_state: GameState::initial(),
            selected_column: config.ui.start_column,
            should_quit: false,
            message: None,
            config,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = Duration::from_millis(self.config.ui.poll_interval_ms);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < WIDTH {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = (c as u8 - b'1') as usize;
                if column < WIDTH {
                    self.selected_column = column;
                }
                self.drop_piece(column);
            }
            KeyCode::Char('r') => {
                self.play_again();
            }
            _ => {}
        }
    }

    /// Throw the finished (or abandoned) game away and start over
    fn play_again(&mut self) {
        self.game_state = GameState::initial();
        self.selected_column = self.config.ui.start_column;
        self.message = Some("New game started!".to_string());
        info!("new game started");
    }

    /// Drop a piece for the current player
    fn drop_piece(&mut self, column: usize) {
        match self.game_state.drop_piece_mut(column) {
            Ok(DropOutcome::Placed { .. }) => {
                // Check if game just ended
                self.message = match self.game_state.status() {
                    GameStatus::Won(player) => {
                        Some(format!("{} wins!", self.config.players.name(player)))
                    }
                    GameStatus::Draw => Some("It's a tie!".to_string()),
                    GameStatus::InProgress => None,
                };
            }
            Ok(DropOutcome::Ignored(IgnoredDrop::ColumnFull)) => {
                self.message = Some("Column is full!".to_string());
            }
            Ok(DropOutcome::Ignored(IgnoredDrop::GameOver)) => {
                self.message = Some("Game over! Press 'r' to play again.".to_string());
            }
            Err(err @ MoveError::InvalidColumn { .. }) => {
                warn!(%err, "rejected drop");
                self.message = Some("Invalid column!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &self.config.players,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player, HEIGHT};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_selector_stays_on_board() {
        let mut app = App::default();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, WIDTH - 1);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_enter_drops_into_selected_column() {
        let mut app = App::default();
        press(&mut app, KeyCode::Left);
        let column = app.selected_column;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state.board().get(HEIGHT - 1, column), Cell::One);
        assert_eq!(app.game_state.current_player(), Player::Two);
    }

    #[test]
    fn test_number_keys_pick_column() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selected_column, 0);
        assert_eq!(app.game_state.board().get(HEIGHT - 1, 0), Cell::One);
    }

    #[test]
    fn test_number_key_past_last_column_is_rejected() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.message.as_deref(), Some("Invalid column!"));
        assert_eq!(app.game_state, GameState::initial());
    }

    #[test]
    fn test_win_message_and_play_again() {
        let mut app = App::default();
        for key in ['1', '2', '1', '2', '1', '2', '1'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.message.as_deref(), Some("Red wins!"));

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'r' to play again.")
        );

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state, GameState::initial());
        assert_eq!(app.selected_column, app.config.ui.start_column);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::default();
        for _ in 0..HEIGHT {
            press(&mut app, KeyCode::Char('4'));
        }
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
        assert_eq!(app.game_state.board().occupied_count(), HEIGHT);
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
