//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::{Marker, DOT},
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    grid::{Board, Cell, Pos},
    types::{MainMenuItem, Screen},
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &mut App, frame: &mut Frame) -> Result<()> {
    match &app.screen {
        Screen::MainMenu(item) => main_menu(frame, *item),
        Screen::Editor => editor(app, frame)?,
        Screen::BoardMenu => board_menu(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for a centered menu.
///
/// This function creates the centered block with the given title and returns one single-row
/// layout slot per menu entry; the caller fills the slots in.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, title: &str, rows: u8) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(rows + 2))])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(title.to_owned())
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); usize::from(rows)]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, "Maze Forge", 3);

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let mut opt1 = Line::raw("Edit Board").centered();
    let mut opt2 = Line::raw("Load Board").centered();
    let mut opt3 = Line::raw("Quit").centered();
    match item {
        MainMenuItem::EditBoard => {
            opt1 = opt1.style(active_content_style);
            opt2 = opt2.style(content_style);
            opt3 = opt3.style(content_style);
        }
        MainMenuItem::LoadBoard => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(active_content_style);
            opt3 = opt3.style(content_style);
        }
        MainMenuItem::Quit => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(content_style);
            opt3 = opt3.style(active_content_style);
        }
    }

    frame.render_widget(opt1, inner_layout[0]);
    frame.render_widget(opt2, inner_layout[1]);
    frame.render_widget(opt3, inner_layout[2]);
}

/// Renders the board selection menu with a scrollable list of available boards.
///
/// This function displays a viewport containing the built-in blank board and every loadable
/// `.maze` file from the current directory. It provides scrolling and visual indicators for the
/// cursor-selected board and the board that is actively loaded in the editor.
///
/// # Errors
///
/// This function may return errors if the viewport board cannot be retrieved.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn board_menu(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Fill(1),
        Constraint::Percentage(30),
    ])
    .split(frame.area())[1];
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Fill(1),
        Constraint::Percentage(40),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Min(1)]).split(space)[0];
    let block = Block::bordered()
        .title_top("Board list")
        .title_bottom("(j) down / (k) up / (l) select / (h) return")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    app.viewport_height = inner_space.height.into();

    let inner_layout = Layout::horizontal([Constraint::Percentage(5), Constraint::Percentage(100)])
        .split(inner_space);
    let inner_selector = Layout::vertical(vec![Constraint::Max(1); inner_space.height.into()])
        .split(inner_layout[0]);
    let inner_list = Layout::vertical(vec![Constraint::Max(1); inner_space.height.into()])
        .split(inner_layout[1]);

    let mut viewport_boards: Vec<&Board> = app.boards.iter().skip(app.viewport_offset).collect();
    viewport_boards.truncate(inner_space.height.into());

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (idx, board) in viewport_boards.into_iter().enumerate() {
        let viewport_board = app
            .viewport_board
            .clone()
            .ok_or_eyre("failed to retrieve cursor-selected board")?;

        let (selector, entry) = if *board == viewport_board {
            (
                {
                    if *board == app.board {
                        Line::styled(DOT, active_content_style).centered()
                    } else {
                        Line::styled(" ", active_content_style).centered()
                    }
                },
                Line::styled(board.key.clone(), active_content_style),
            )
        } else {
            (
                {
                    if *board == app.board {
                        Line::styled(DOT, content_style).centered()
                    } else {
                        Line::styled(" ", content_style).centered()
                    }
                },
                Line::styled(board.key.clone(), content_style),
            )
        };

        frame.render_widget(selector, inner_selector[idx]);
        frame.render_widget(entry, inner_list[idx]);
    }

    Ok(())
}

/// Transforms board coordinates to canvas coordinates.
///
/// Rows map as `coordinate = (n - 1) / 2 - row` (the canvas y axis points up) and columns as
/// `coordinate = col - (n - 1) / 2`, centering the board on the canvas origin.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn board_to_canvas_coords(
    positions: &[Pos],
    columns: usize,
    rows: usize,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(rows)?);
    let cols_n = f64::from(u16::try_from(columns)?);

    positions
        .iter()
        .map(|&(col, row)| {
            let canvas_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(row)?);
            let canvas_x = f64::from(u16::try_from(col)?) - (cols_n - 1.) / 2.;

            Ok((canvas_x, canvas_y))
        })
        .collect()
}

/// Renders the editor screen: the board, the search overlay, the paint cursor, a status line,
/// and the key tooltip.
///
/// The board and the replay overlay are drawn as layered [`Canvas`] widgets over the same
/// centered area, one dot per cell.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
#[expect(
    clippy::too_many_lines,
    reason = "UI rendering function requires many lines for layout and drawing operations."
)]
pub(crate) fn editor(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let board_rows = app.board.grid.height();
    let board_columns = app.board.grid.width();

    // Overall layout: board area, one status line, tooltip block at the bottom.
    let overall_layout = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .split(frame.area());

    let board_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get board content area from layout")?;
    let status_area = *overall_layout
        .get(1)
        .ok_or_eyre("failed to get status area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    // Center the board within the content area.
    let space = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(board_rows)?),
        Constraint::Min(1),
    ])
    .split(board_content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get board area from vertical layout")?;
    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(board_columns)?),
        Constraint::Min(1),
    ])
    .split(space)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get board area from horizontal layout")?;

    // Pre-compute canvas coordinates per color group to handle errors before the paint closures.
    let mut wall_cells = Vec::new();
    for row in 0..board_rows {
        for col in 0..board_columns {
            if app.board.grid.cell((col, row)) == Some(Cell::Wall) {
                wall_cells.push((col, row));
            }
        }
    }
    let walls = board_to_canvas_coords(&wall_cells, board_columns, board_rows)?;
    let start = board_to_canvas_coords(
        &app.board.grid.start().into_iter().collect::<Vec<Pos>>(),
        board_columns,
        board_rows,
    )?;
    let end = board_to_canvas_coords(
        &app.board.grid.end().into_iter().collect::<Vec<Pos>>(),
        board_columns,
        board_rows,
    )?;
    let visited = board_to_canvas_coords(&app.player.visited, board_columns, board_rows)?;
    let trail = board_to_canvas_coords(&app.player.trail, board_columns, board_rows)?;
    let visiting = board_to_canvas_coords(
        &app.player.visiting.into_iter().collect::<Vec<Pos>>(),
        board_columns,
        board_rows,
    )?;
    let goal = board_to_canvas_coords(
        &app.player.goal.into_iter().collect::<Vec<Pos>>(),
        board_columns,
        board_rows,
    )?;
    let cursor = board_to_canvas_coords(&[app.cursor], board_columns, board_rows)?;

    let x_bounds = [
        (-rounded_div::i32(space.width.into(), 2)).into(),
        (rounded_div::i32(space.width.into(), 2)).into(),
    ];
    let y_bounds = [
        (-rounded_div::i32(space.height.into(), 2)).into(),
        (rounded_div::i32(space.height.into(), 2)).into(),
    ];

    let board_canvas = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &walls,
                color: Color::White,
            });
            ctx.draw(&Points {
                coords: &start,
                color: Color::Green,
            });
            ctx.draw(&Points {
                coords: &end,
                color: Color::Red,
            });
        });
    let overlay_canvas = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &visited,
                color: Color::Blue,
            });
            ctx.draw(&Points {
                coords: &trail,
                color: Color::Yellow,
            });
            ctx.draw(&Points {
                coords: &visiting,
                color: Color::Yellow,
            });
            ctx.draw(&Points {
                coords: &goal,
                color: Color::Magenta,
            });
        });
    let cursor_canvas = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &cursor,
                color: Color::Cyan,
            });
        });

    frame.render_widget(board_canvas, space);
    frame.render_widget(overlay_canvas, space);
    frame.render_widget(cursor_canvas, space);

    // Status line: user feedback when present, otherwise a standing hint.
    let status = app.status.clone().unwrap_or_else(|| {
        format!(
            "cursor {}:{} / frame delay {} ms",
            app.cursor.0,
            app.cursor.1,
            app.player.delay_ms()
        )
    });
    frame.render_widget(
        Line::styled(status, Style::default().fg(Color::Green)).centered(),
        status_area,
    );

    // Tooltip as a block at the bottom with a top border, listing the editor keys.
    let tooltip_block = Block::bordered()
        .title("(space) wall / (s)(e) start,end / (c) clear / (d)(b)(a) search / (x) results / (o) save / (h) menu")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::grid::Grid;

    /// Creates a minimal test app for UI testing.
    fn create_test_app() -> App {
        App::new()
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 30);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Creates a small test board with endpoints and a wall.
    fn create_test_board() -> Board {
        Board {
            key: "test_board".to_owned(),
            grid: Grid::decode("20003\n01110\n00000\n").expect("test board should decode"),
        }
    }

    #[test]
    fn test_draw_main_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::MainMenu(MainMenuItem::EditBoard);

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing main menu should succeed");
    }

    #[test]
    fn test_draw_board_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::BoardMenu;
        app.boards = vec![Board::blank(), create_test_board()];
        app.viewport_board = app.boards.first().cloned();

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing board menu should succeed");
    }

    #[test]
    fn test_draw_editor() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::Editor;
        app.board = create_test_board();

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing the editor should succeed");
    }

    #[test]
    fn test_draw_editor_with_animation() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::Editor;
        app.board = create_test_board();
        let outcome = crate::search::run(&app.board.grid, crate::search::Algorithm::Bfs)
            .expect("search should run");
        app.player.load(outcome);
        app.player.fast_forward();

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing a finished replay should succeed");
    }

    #[test]
    fn test_board_menu_empty_viewport_board_error() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.boards = vec![create_test_board()];
        app.viewport_board = None;

        let result = terminal.draw(|frame| {
            let menu_result = board_menu(&mut app, frame);
            assert!(
                menu_result.is_err(),
                "board menu should fail with an empty viewport board"
            );
        });

        assert!(
            result.is_ok(),
            "terminal drawing should succeed even if board_menu fails"
        );
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_init_menu_slots() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            let layout = init_menu(frame, "Maze Forge", 3);
            assert_eq!(layout.len(), 3, "the menu should expose one slot per row");
        });

        assert!(result.is_ok(), "initializing the menu should succeed");
    }

    #[test]
    fn test_board_to_canvas_coords_centers_the_board() {
        let coords = board_to_canvas_coords(&[(0, 0), (4, 2)], 5, 3)
            .expect("coordinates should convert");

        assert_eq!(
            coords,
            vec![(-2.0, 1.0), (2.0, -1.0)],
            "corners map symmetrically around the canvas origin"
        );
    }
}
