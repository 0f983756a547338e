//! Application state and key handling.

use crate::config::AppConfig;
use crate::games::tictactoe::{GameHistory, MoveList, MoveOutcome, Position, SortOrder};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::{debug, info, instrument, warn};

use super::input::move_cursor;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select a move-list entry.
    MoveList,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::MoveList,
            Focus::MoveList => Focus::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    history: GameHistory,
    sort_order: SortOrder,
    cursor: Position,
    focus: Focus,
    selected_row: usize,
    message: Option<String>,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            history: GameHistory::new(),
            sort_order: *config.sort_order(),
            cursor: Position::Center,
            focus: Focus::default(),
            selected_row: 0,
            message: None,
            show_cell_numbers: *config.show_cell_numbers(),
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Move-list display order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The move list as currently laid out.
    pub fn move_list(&self) -> MoveList {
        MoveList::from_history(&self.history, self.sort_order)
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected display row in the move list.
    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Transient message from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether empty squares show their key hints.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key event.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.sync_selection();
            }
            KeyCode::Char('s') => {
                self.toggle_sort_order();
            }
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('[') => {
                self.history.step_back();
                self.message = None;
                self.sync_selection();
            }
            KeyCode::Char(']') => {
                self.history.step_forward();
                self.message = None;
                self.sync_selection();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = Position::from_key(c) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::MoveList => self.handle_list_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        let rows = self.history.snapshot_count();
        match code {
            KeyCode::Up => self.selected_row = self.selected_row.saturating_sub(1),
            KeyCode::Down => self.selected_row = (self.selected_row + 1).min(rows - 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to_selected(),
            _ => {}
        }
    }

    /// Places a mark for the player on turn. Ignored moves leave no message.
    #[instrument(skip(self))]
    fn place(&mut self, pos: Position) {
        match self.history.play(pos.to_index()) {
            Ok(MoveOutcome::Applied(action)) => {
                self.message = Some(format!("{} played {}", action.player, action.position));
            }
            Ok(MoveOutcome::Ignored(reason)) => {
                debug!(%reason, "Click ignored");
                self.message = None;
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.message = Some(e.to_string());
            }
        }
        self.sync_selection();
    }

    /// Flips the move-list order. The game itself is untouched.
    #[instrument(skip(self))]
    fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = %self.sort_order, "Toggled move list order");
        self.message = Some(format!(
            "Move list sorted {}",
            self.sort_order.to_string().to_lowercase()
        ));
        self.sync_selection();
    }

    fn jump_to_selected(&mut self) {
        let list = self.move_list();
        let Some(entry) = list.entries().get(self.selected_row) else {
            return;
        };
        if *entry.is_current() {
            return;
        }
        match self.history.jump_to(*entry.move_number()) {
            Ok(n) => self.message = Some(format!("Viewing move #{}", n)),
            Err(e) => self.message = Some(e.to_string()),
        }
        self.sync_selection();
    }

    fn new_game(&mut self) {
        info!("Starting new game");
        self.history = GameHistory::new();
        self.cursor = Position::Center;
        self.message = Some("New game".to_string());
        self.sync_selection();
    }

    /// Points the list selection at the viewed move.
    fn sync_selection(&mut self) {
        self.selected_row = self.move_list().current_row().unwrap_or(0);
    }
}
