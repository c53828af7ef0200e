//! Event handling functions for user input and application state updates.

use std::{path::Path, time::Duration};

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::{
    boards,
    grid::Board,
    search::{self, Algorithm},
    types::{MainMenuItem, Screen},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events with a timeout to avoid blocking the UI, dispatches
/// them to the handler for the current screen, and advances the animation replay while the
/// editor is on screen.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(50))? {
        if let Event::Key(key) = event::read()? {
            if matches!(app.screen, Screen::Editor) {
                handle_editor_key(app, key.code)?;
            } else {
                match key.code {
                    KeyCode::Char('q') => app.exit = true,
                    KeyCode::Char('j') => handle_j_events(app)?,
                    KeyCode::Char('k') => handle_k_events(app)?,
                    KeyCode::Char('l') => handle_l_events(app)?,
                    KeyCode::Char('h') => handle_h_events(app),
                    _ => {}
                }
            }
        }
    }

    if matches!(app.screen, Screen::Editor) {
        app.player.update();
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation in the menus.
pub(crate) fn handle_j_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::EditBoard) => {
            app.screen = Screen::MainMenu(MainMenuItem::LoadBoard);
        }
        Screen::MainMenu(MainMenuItem::LoadBoard) => {
            app.screen = Screen::MainMenu(MainMenuItem::Quit);
        }
        Screen::BoardMenu => {
            let viewport_board = app
                .viewport_board
                .clone()
                .ok_or_eyre("failed to retrieve cursor-selected board")?;

            if viewport_board
                == app
                    .boards
                    .iter()
                    .skip(app.viewport_offset)
                    .take(app.viewport_height)
                    .next_back()
                    .ok_or_eyre("no last element in viewport boards")?
                    .clone()
                && viewport_board
                    != app
                        .boards
                        .last()
                        .ok_or_eyre("failed to retrieve last board")?
                        .clone()
            {
                app.viewport_offset += 1;
            }

            let mut index = 0;
            for (idx, board) in app.boards.iter().enumerate() {
                if viewport_board == *board {
                    index = idx;
                    break;
                }
            }
            if let Some(element) = app.boards.get(index + 1) {
                app.viewport_board = Some(element.clone());
            }
        }
        _ => {}
    }

    Ok(())
}

/// Handles 'k' key press events for upward navigation in the menus.
pub(crate) fn handle_k_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.screen = Screen::MainMenu(MainMenuItem::LoadBoard);
        }
        Screen::MainMenu(MainMenuItem::LoadBoard) => {
            app.screen = Screen::MainMenu(MainMenuItem::EditBoard);
        }
        Screen::BoardMenu => {
            let viewport_board = app
                .viewport_board
                .clone()
                .ok_or_eyre("failed to retrieve cursor-selected board")?;

            if viewport_board
                == app
                    .boards
                    .iter()
                    .skip(app.viewport_offset)
                    .take(app.viewport_height)
                    .cloned()
                    .collect::<Vec<Board>>()
                    .first()
                    .ok_or_eyre("no first element in viewport boards")?
                    .clone()
                && viewport_board
                    != app
                        .boards
                        .first()
                        .ok_or_eyre("failed to retrieve first board")?
                        .clone()
            {
                app.viewport_offset -= 1;
            }

            let mut index = 0;
            for (idx, board) in app.boards.iter().enumerate() {
                if viewport_board == *board {
                    index = idx;
                    break;
                }
            }
            if let Some(element) = app.boards.get(index.saturating_sub(1)) {
                app.viewport_board = Some(element.clone());
            }
        }
        _ => {}
    }

    Ok(())
}

/// Handles 'l' key press events for selection and forward navigation in the menus.
pub(crate) fn handle_l_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::EditBoard) => {
            app.screen = Screen::Editor;
        }
        Screen::MainMenu(MainMenuItem::LoadBoard) => {
            app.screen = Screen::BoardMenu;

            let first = Board::blank();
            app.boards.clear();
            app.boards.push(first.clone());
            boards::fetch_boards(Path::new("."), &mut app.boards)?;
            app.viewport_board = Some(first);
            app.viewport_offset = 0;
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::BoardMenu => {
            app.board = app
                .viewport_board
                .clone()
                .ok_or_eyre("failed to retrieve cursor-selected board")?;
            app.cursor = (0, 0);
            app.player.clear();
            app.status = None;
            app.screen = Screen::Editor;
        }
        _ => {}
    }

    Ok(())
}

/// Handles 'h' key press events for backward navigation in the menus.
pub(crate) fn handle_h_events(app: &mut App) {
    if matches!(app.screen, Screen::BoardMenu) {
        app.screen = Screen::MainMenu(MainMenuItem::LoadBoard);
    }
}

/// Handles every key on the editor screen: cursor movement, painting, searches, and replay
/// control.
pub(crate) fn handle_editor_key(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('h') => {
            app.player.clear();
            app.status = None;
            app.screen = Screen::MainMenu(MainMenuItem::EditBoard);
        }
        KeyCode::Left => app.cursor.0 = app.cursor.0.saturating_sub(1),
        KeyCode::Right => {
            if app.cursor.0 + 1 < app.board.grid.width() {
                app.cursor.0 += 1;
            }
        }
        KeyCode::Up => app.cursor.1 = app.cursor.1.saturating_sub(1),
        KeyCode::Down => {
            if app.cursor.1 + 1 < app.board.grid.height() {
                app.cursor.1 += 1;
            }
        }
        KeyCode::Char(' ') => {
            app.player.clear();
            app.board.grid.toggle_wall(app.cursor);
        }
        KeyCode::Char('s') => {
            app.player.clear();
            app.board.grid.set_start(app.cursor);
        }
        KeyCode::Char('e') => {
            app.player.clear();
            app.board.grid.set_end(app.cursor);
        }
        KeyCode::Char('c') => {
            app.player.clear();
            app.board.grid.clear_cell(app.cursor);
        }
        KeyCode::Char('n') => {
            app.player.clear();
            app.board.grid.reset();
            app.status = Some("board cleared".to_owned());
        }
        KeyCode::Char('x') => {
            app.player.clear();
            app.status = None;
        }
        KeyCode::Char('d') => run_search(app, Algorithm::Dfs)?,
        KeyCode::Char('b') => run_search(app, Algorithm::Bfs)?,
        KeyCode::Char('a') => run_search(app, Algorithm::AStar)?,
        KeyCode::Char('[') => {
            app.player.faster();
            app.status = Some(format!("frame delay {} ms", app.player.delay_ms()));
        }
        KeyCode::Char(']') => {
            app.player.slower();
            app.status = Some(format!("frame delay {} ms", app.player.delay_ms()));
        }
        KeyCode::Char('f') => app.player.fast_forward(),
        KeyCode::Char('o') => match boards::save_board(&app.board, Path::new(".")) {
            Ok(path) => app.status = Some(format!("saved to {}", path.display())),
            Err(err) => app.status = Some(format!("save failed: {err}")),
        },
        _ => {}
    }

    Ok(())
}

/// Runs a search over the active board and hands the recording to the animation player.
///
/// Refuses to run until both endpoints are placed, leaving a hint in the status line instead.
fn run_search(app: &mut App, algorithm: Algorithm) -> Result<()> {
    if !app.board.grid.is_ready() {
        app.status = Some("place a start (s) and an end (e) first".to_owned());
        return Ok(());
    }

    let outcome = search::run(&app.board.grid, algorithm)?;
    app.status = Some(if outcome.path.is_empty() {
        format!(
            "{}: no path, {} cells explored",
            algorithm.label(),
            outcome.visited
        )
    } else {
        format!(
            "{}: path of {} cells, {} explored",
            algorithm.label(),
            outcome.path.len(),
            outcome.visited
        )
    });
    app.player.load(outcome);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    /// An app placed directly on the editor screen with a small board.
    fn editor_app() -> App {
        let mut app = App::new();
        app.screen = Screen::Editor;
        app.board = Board {
            key: "test".to_owned(),
            grid: crate::grid::Grid::new(5, 4),
        };
        app
    }

    #[test]
    fn test_main_menu_cycle() {
        let mut app = App::new();

        handle_j_events(&mut app).expect("navigation should succeed");
        assert_eq!(
            app.screen,
            Screen::MainMenu(MainMenuItem::LoadBoard),
            "j moves down the main menu"
        );

        handle_j_events(&mut app).expect("navigation should succeed");
        handle_j_events(&mut app).expect("navigation should succeed");
        assert_eq!(
            app.screen,
            Screen::MainMenu(MainMenuItem::Quit),
            "the menu stops at the last item"
        );

        handle_k_events(&mut app).expect("navigation should succeed");
        assert_eq!(
            app.screen,
            Screen::MainMenu(MainMenuItem::LoadBoard),
            "k moves back up"
        );
    }

    #[test]
    fn test_select_edit_board_opens_editor() {
        let mut app = App::new();

        handle_l_events(&mut app).expect("selection should succeed");

        assert_eq!(app.screen, Screen::Editor, "edit board opens the editor");
    }

    #[test]
    fn test_select_quit_sets_exit() {
        let mut app = App::new();
        app.screen = Screen::MainMenu(MainMenuItem::Quit);

        handle_l_events(&mut app).expect("selection should succeed");

        assert!(app.exit, "selecting quit exits the application");
    }

    #[test]
    fn test_cursor_movement_clamps_to_board() {
        let mut app = editor_app();

        handle_editor_key(&mut app, KeyCode::Left).expect("key should be handled");
        handle_editor_key(&mut app, KeyCode::Up).expect("key should be handled");
        assert_eq!(app.cursor, (0, 0), "cursor cannot leave the top-left corner");

        for _ in 0..10 {
            handle_editor_key(&mut app, KeyCode::Right).expect("key should be handled");
            handle_editor_key(&mut app, KeyCode::Down).expect("key should be handled");
        }
        assert_eq!(
            app.cursor,
            (4, 3),
            "cursor cannot leave the bottom-right corner"
        );
    }

    #[test]
    fn test_painting_keys() {
        let mut app = editor_app();
        app.cursor = (2, 2);

        handle_editor_key(&mut app, KeyCode::Char(' ')).expect("key should be handled");
        assert_eq!(
            app.board.grid.cell((2, 2)),
            Some(Cell::Wall),
            "space paints a wall under the cursor"
        );

        handle_editor_key(&mut app, KeyCode::Char('s')).expect("key should be handled");
        assert_eq!(
            app.board.grid.start(),
            Some((2, 2)),
            "s places the start under the cursor"
        );

        app.cursor = (4, 3);
        handle_editor_key(&mut app, KeyCode::Char('e')).expect("key should be handled");
        assert_eq!(
            app.board.grid.end(),
            Some((4, 3)),
            "e places the end under the cursor"
        );
    }

    #[test]
    fn test_search_without_endpoints_leaves_hint() {
        let mut app = editor_app();

        handle_editor_key(&mut app, KeyCode::Char('b')).expect("key should be handled");

        assert!(app.player.is_idle(), "no animation is loaded");
        assert!(
            app.status
                .as_deref()
                .is_some_and(|status| status.contains("start")),
            "the status line asks for endpoints"
        );
    }

    #[test]
    fn test_search_loads_animation() {
        let mut app = editor_app();
        app.board.grid.set_start((0, 0));
        app.board.grid.set_end((4, 3));

        handle_editor_key(&mut app, KeyCode::Char('a')).expect("key should be handled");

        assert!(!app.player.is_idle(), "a recording is loaded for replay");
        assert!(
            app.status
                .as_deref()
                .is_some_and(|status| status.contains("path of")),
            "the status line summarizes the run"
        );
    }

    #[test]
    fn test_new_board_resets_everything() {
        let mut app = editor_app();
        app.board.grid.set_start((0, 0));
        app.board.grid.set_end((4, 3));
        handle_editor_key(&mut app, KeyCode::Char('d')).expect("key should be handled");

        handle_editor_key(&mut app, KeyCode::Char('n')).expect("key should be handled");

        assert!(!app.board.grid.is_ready(), "endpoints are gone");
        assert!(app.player.is_idle(), "the animation is discarded");
    }

    #[test]
    fn test_editing_discards_stale_animation() {
        let mut app = editor_app();
        app.board.grid.set_start((0, 0));
        app.board.grid.set_end((4, 3));
        handle_editor_key(&mut app, KeyCode::Char('b')).expect("key should be handled");

        handle_editor_key(&mut app, KeyCode::Char(' ')).expect("key should be handled");

        assert!(
            app.player.is_idle(),
            "painting invalidates the recorded animation"
        );
    }

    #[test]
    fn test_return_to_menu() {
        let mut app = editor_app();

        handle_editor_key(&mut app, KeyCode::Char('h')).expect("key should be handled");

        assert_eq!(
            app.screen,
            Screen::MainMenu(MainMenuItem::EditBoard),
            "h returns to the main menu"
        );
    }
}
