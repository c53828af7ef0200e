//! Loading and saving `.maze` board files.
//!
//! Boards are plain text, one character per cell (`0` open, `1` wall, `2` start, `3` end), one
//! line per row. The board menu lists every valid `.maze` file found in the working directory;
//! files that fail validation are skipped rather than reported.

use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{OptionExt as _, Result};

use crate::grid::Board;

/// Scans a directory for `.maze` files and appends every valid one to the collection.
///
/// # Errors
///
/// Fails when the directory cannot be read; individual unreadable or invalid files are skipped.
pub(crate) fn fetch_boards(dir: &Path, boards: &mut Vec<Board>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        match entry {
            Ok(entry)
                if !entry.file_type()?.is_dir()
                    && entry
                        .file_name()
                        .to_str()
                        .ok_or_eyre("failed to convert osstring to string slice")?
                        .ends_with(".maze") =>
            {
                let contents = fs::read_to_string(entry.path())?;

                if let Ok(board) = Board::new(entry.file_name(), &contents) {
                    boards.push(board);
                }
            }
            Err(err) => return Err(err.into()),
            _ => {}
        }
    }

    Ok(())
}

/// Loads a single board file, for the command-line startup path.
///
/// # Errors
///
/// Fails when the file cannot be read, is not named `*.maze`, or does not decode as a board.
pub(crate) fn load_board(path: &Path) -> Result<Board> {
    let contents = fs::read_to_string(path)?;
    let name = path
        .file_name()
        .ok_or_eyre("board path has no file name")?
        .to_owned();

    Board::new(name, &contents)
}

/// Writes a board to `<key>.maze` inside the given directory, returning the path written.
///
/// # Errors
///
/// Fails when the file cannot be written.
pub(crate) fn save_board(board: &Board, dir: &Path) -> Result<PathBuf> {
    let target = dir.join(format!("{}.maze", board.key));
    fs::write(&target, board.grid.encode())?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;
    use crate::grid::Grid;

    /// Creates a scratch directory under the system temp dir, unique per test.
    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("mazeforge-test-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("scratch dir should be creatable");
        dir
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = scratch_dir("round-trip");
        let board = Board {
            key: "corridor".to_owned(),
            grid: Grid::decode("000\n203\n000").expect("test board should decode"),
        };

        let written = save_board(&board, &dir).expect("board should save");
        let loaded = load_board(&written).expect("board should load back");

        assert_eq!(loaded, board, "a saved board loads back identically");

        fs::remove_dir_all(&dir).expect("scratch dir should be removable");
    }

    #[test]
    fn test_fetch_skips_invalid_files() {
        let dir = scratch_dir("fetch");
        fs::write(dir.join("good.maze"), "000\n203\n000").expect("file should write");
        fs::write(dir.join("bad.maze"), "0x0\n!!!").expect("file should write");
        fs::write(dir.join("ignored.txt"), "000").expect("file should write");

        let mut boards = Vec::new();
        fetch_boards(&dir, &mut boards).expect("directory scan should succeed");

        assert_eq!(boards.len(), 1, "only the valid .maze file is picked up");
        assert_eq!(
            boards.first().map(|board| board.key.as_str()),
            Some("good"),
            "the board key comes from the file name"
        );

        fs::remove_dir_all(&dir).expect("scratch dir should be removable");
    }

    #[test]
    fn test_load_rejects_wrong_extension() {
        let dir = scratch_dir("extension");
        let path = dir.join("board.txt");
        fs::write(&path, "000\n203\n000").expect("file should write");

        assert!(
            load_board(&path).is_err(),
            "files without the .maze extension should be rejected"
        );

        fs::remove_dir_all(&dir).expect("scratch dir should be removable");
    }
}
