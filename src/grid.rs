//! Board model and editor operations.
//!
//! This module contains the [`Grid`] type the editor paints on and the searches traverse, the
//! [`Cell`] states a grid position can take, and the character-matrix codec used by `.maze` files.

use std::ffi::OsString;

use color_eyre::eyre::{bail, OptionExt as _, Result};

/// Grid position as `(column, row)` coordinates.
pub(crate) type Pos = (usize, usize);

/// Default board width in cells.
pub(crate) const BOARD_WIDTH: usize = 47;

/// Default board height in cells.
pub(crate) const BOARD_HEIGHT: usize = 25;

/// State of a single cell on the board.
///
/// Search progress (visiting, visited, path) is deliberately not part of this enumeration; it
/// lives in the animation overlay so that clearing search results or saving a board never has to
/// scrub exploration marks out of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    /// A paintable, walkable cell.
    Open,
    /// An impassable cell painted by the user.
    Wall,
    /// The cell searches start from. At most one per board.
    Start,
    /// The cell searches look for. At most one per board.
    End,
}

impl Cell {
    /// Returns whether a search may step onto this cell.
    pub(crate) const fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Returns the character this cell is stored as in a `.maze` file.
    const fn to_char(self) -> char {
        match self {
            Self::Open => '0',
            Self::Wall => '1',
            Self::Start => '2',
            Self::End => '3',
        }
    }

    /// Parses a `.maze` file character into a cell, if it is one of the four valid ones.
    const fn from_char(source: char) -> Option<Self> {
        match source {
            '0' => Some(Self::Open),
            '1' => Some(Self::Wall),
            '2' => Some(Self::Start),
            '3' => Some(Self::End),
            _ => None,
        }
    }
}

/// Rectangular maze board.
///
/// Cells are stored row-major; the start and end positions are cached alongside so the editor can
/// displace the previous marker when a new one is placed and the searches can look the endpoints
/// up without scanning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    /// Board width in cells.
    width: usize,
    /// Board height in cells.
    height: usize,
    /// Row-major cell storage, `width * height` entries.
    cells: Vec<Cell>,
    /// Cached position of the start cell, if one is placed.
    start: Option<Pos>,
    /// Cached position of the end cell, if one is placed.
    end: Option<Pos>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

impl Grid {
    /// Creates an all-open board of the given dimensions.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Open; width * height],
            start: None,
            end: None,
        }
    }

    /// Returns the board width in cells.
    pub(crate) const fn width(&self) -> usize {
        self.width
    }

    /// Returns the board height in cells.
    pub(crate) const fn height(&self) -> usize {
        self.height
    }

    /// Returns the cached start position, if a start cell is placed.
    pub(crate) const fn start(&self) -> Option<Pos> {
        self.start
    }

    /// Returns the cached end position, if an end cell is placed.
    pub(crate) const fn end(&self) -> Option<Pos> {
        self.end
    }

    /// Returns whether both endpoints are placed, which the searches require.
    pub(crate) const fn is_ready(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Converts a position into a storage index, or `None` when out of bounds.
    const fn index(&self, pos: Pos) -> Option<usize> {
        if pos.0 < self.width && pos.1 < self.height {
            Some(pos.1 * self.width + pos.0)
        } else {
            None
        }
    }

    /// Bounds-checked cell lookup.
    pub(crate) fn cell(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).and_then(|index| self.cells.get(index).copied())
    }

    /// Writes a cell without touching the endpoint caches.
    fn write(&mut self, pos: Pos, cell: Cell) {
        if let Some(index) = self.index(pos) {
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = cell;
            }
        }
    }

    /// Places a cell, keeping the endpoint caches consistent.
    ///
    /// Placing a start or end displaces the previous marker of the same kind back to open, and
    /// painting over a marker drops it from the cache. Out-of-bounds positions are ignored.
    fn put(&mut self, pos: Pos, cell: Cell) {
        if self.index(pos).is_none() {
            return;
        }

        if matches!(cell, Cell::Start) {
            if let Some(old) = self.start.take() {
                self.write(old, Cell::Open);
            }
        }
        if matches!(cell, Cell::End) {
            if let Some(old) = self.end.take() {
                self.write(old, Cell::Open);
            }
        }

        if self.start == Some(pos) {
            self.start = None;
        }
        if self.end == Some(pos) {
            self.end = None;
        }

        self.write(pos, cell);

        match cell {
            Cell::Start => self.start = Some(pos),
            Cell::End => self.end = Some(pos),
            Cell::Open | Cell::Wall => {}
        }
    }

    /// Toggles a wall at the cursor: open cells become walls, walls become open again.
    ///
    /// Painting over a start or end cell replaces the marker with the wall.
    pub(crate) fn toggle_wall(&mut self, pos: Pos) {
        match self.cell(pos) {
            Some(Cell::Wall) => self.put(pos, Cell::Open),
            Some(_) => self.put(pos, Cell::Wall),
            None => {}
        }
    }

    /// Places the start cell, displacing any previous start.
    pub(crate) fn set_start(&mut self, pos: Pos) {
        self.put(pos, Cell::Start);
    }

    /// Places the end cell, displacing any previous end.
    pub(crate) fn set_end(&mut self, pos: Pos) {
        self.put(pos, Cell::End);
    }

    /// Clears a cell back to open.
    pub(crate) fn clear_cell(&mut self, pos: Pos) {
        self.put(pos, Cell::Open);
    }

    /// Clears the whole board back to open cells with no endpoints.
    pub(crate) fn reset(&mut self) {
        self.cells.fill(Cell::Open);
        self.start = None;
        self.end = None;
    }

    /// Returns the walkable cardinal neighbors of a position.
    ///
    /// The order is left, down, right, up; depth-first search pushes neighbors in this order, so
    /// it determines the exploration texture of the animation.
    pub(crate) fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        let (col, row) = pos;
        let mut out = Vec::with_capacity(4);

        if let Some(left) = col.checked_sub(1) {
            out.push((left, row));
        }
        if row + 1 < self.height {
            out.push((col, row + 1));
        }
        if col + 1 < self.width {
            out.push((col + 1, row));
        }
        if let Some(above) = row.checked_sub(1) {
            out.push((col, above));
        }

        out.retain(|&candidate| self.cell(candidate).is_some_and(Cell::is_walkable));
        out
    }

    /// Encodes the board as the `.maze` character matrix, one text line per grid row.
    pub(crate) fn encode(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                if let Some(cell) = self.cell((col, row)) {
                    out.push(cell.to_char());
                }
            }
            out.push('\n');
        }
        out
    }

    /// Decodes a `.maze` character matrix into a board.
    ///
    /// # Errors
    ///
    /// Fails when the input is empty, the rows are not all the same width, a character outside
    /// `0`-`3` appears, or more than one start or end cell is present.
    pub(crate) fn decode(input: &str) -> Result<Self> {
        let lines: Vec<&str> = input.lines().collect();
        let Some(first) = lines.first() else {
            bail!("board file is empty");
        };
        let width = first.len();
        if width == 0 {
            bail!("board file starts with an empty row");
        }

        let mut grid = Self::new(width, lines.len());
        for (row, line) in lines.iter().enumerate() {
            if line.len() != width {
                bail!(
                    "row {row} is {} cells wide, expected {width}",
                    line.len()
                );
            }
            for (col, source) in line.chars().enumerate() {
                let Some(cell) = Cell::from_char(source) else {
                    bail!("invalid cell character {source:?} at {col}:{row}");
                };
                match cell {
                    Cell::Start if grid.start.is_some() => {
                        bail!("board has more than one start cell");
                    }
                    Cell::End if grid.end.is_some() => {
                        bail!("board has more than one end cell");
                    }
                    _ => {}
                }
                grid.put((col, row), cell);
            }
        }

        Ok(grid)
    }
}

/// A named board, as listed in the board menu.
///
/// The key is the file name without the `.maze` extension, extracted straight from the
/// filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Board {
    /// Display name of the board.
    pub key: String,
    /// The board contents.
    pub grid: Grid,
}

impl Default for Board {
    fn default() -> Self {
        Self::blank()
    }
}

impl Board {
    /// Returns the built-in blank board at the default dimensions.
    pub(crate) fn blank() -> Self {
        Self {
            key: "Blank".to_owned(),
            grid: Grid::default(),
        }
    }

    /// Builds a board from a file name and the file contents.
    ///
    /// # Errors
    ///
    /// Fails when the file name is not valid UTF-8 or lacks the `.maze` extension, or when the
    /// contents do not decode as a board.
    pub(crate) fn new(key: OsString, contents: &str) -> Result<Self> {
        let mut file_name = key
            .to_str()
            .ok_or_eyre("failed to convert osstring to string slice")?
            .to_owned();
        file_name.truncate(
            file_name
                .rfind(".maze")
                .ok_or_eyre("failed to find extension in file name")?,
        );

        Ok(Self {
            key: file_name,
            grid: Grid::decode(contents)?,
        })
    }
}
