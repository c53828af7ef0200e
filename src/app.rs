//! Core application state for the maze editor.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    animate::Player,
    boards, events,
    grid::{Board, Pos},
    types::{MainMenuItem, Screen},
    ui, Cli,
};

/// Application state container for the maze editor and visualizer.
///
/// This structure holds the state Ratatui renders from and the Crossterm event handlers write to:
/// the board being edited, the board list for the selection menu, the paint cursor, and the
/// animation player for search replays.
pub struct App {
    /// Application exit flag, set when the user quits.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// The board currently loaded in the editor.
    pub(crate) board: Board,
    /// Collection of boards offered by the selection menu.
    pub(crate) boards: Vec<Board>,
    /// Board currently under the cursor in the selection menu viewport.
    pub(crate) viewport_board: Option<Board>,
    /// Scrolling offset of the sliding window into [`boards`](App::boards).
    pub(crate) viewport_offset: usize,
    /// Height of the board list rendering area during the last redraw, in terminal cells.
    pub(crate) viewport_height: usize,
    /// Paint cursor position on the editor screen.
    pub(crate) cursor: Pos,
    /// Replay state for the most recent search run.
    pub(crate) player: Player,
    /// One-line feedback shown in the editor status line, replacing the key hints.
    pub(crate) status: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new instance with a blank board and no animation loaded.
    pub fn new() -> Self {
        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::EditBoard),
            board: Board::blank(),
            boards: Vec::new(),
            viewport_board: None,
            viewport_offset: 0,
            viewport_height: 0,
            cursor: (0, 0),
            player: Player::default(),
            status: None,
        }
    }

    /// Creates an instance configured from the command line.
    ///
    /// When a board file was given it is loaded and the application starts on the editor screen
    /// instead of the main menu.
    ///
    /// # Errors
    ///
    /// Fails when the given board file cannot be read or does not validate.
    pub fn with_options(cli: &Cli) -> Result<Self> {
        let mut app = Self::new();
        app.player.set_delay(Duration::from_millis(cli.delay));

        if let Some(path) = &cli.board {
            app.board = boards::load_board(path)?;
            app.screen = Screen::Editor;
        }

        Ok(app)
    }

    /// Runs the main loop of the application.
    ///
    /// Handles user input and redraws until the exit flag is set, after which the function
    /// returns to the call site and ratatui restores the terminal.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal
                .try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
