//! Type definitions for application screens and menu navigation.

/// Enumeration of available application screens.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen, with the currently highlighted item.
    MainMenu(MainMenuItem),
    /// The editor screen where the board is painted, searched, and animated.
    Editor,
    /// Board selection screen, listing the `.maze` files found on disk.
    BoardMenu,
}

/// Main menu navigation options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// Open the editor on the active board.
    EditBoard,
    /// Open the board selection menu.
    LoadBoard,
    /// Exit the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_variants() {
        let main_menu = Screen::MainMenu(MainMenuItem::EditBoard);
        let editor = Screen::Editor;
        let board_menu = Screen::BoardMenu;

        assert_eq!(
            main_menu,
            Screen::MainMenu(MainMenuItem::EditBoard),
            "main menu compares by highlighted item"
        );
        assert_ne!(editor, board_menu, "screens are distinct");
        assert_ne!(main_menu, editor, "screens are distinct");
    }

    #[test]
    fn test_main_menu_item_variants() {
        let edit = MainMenuItem::EditBoard;
        let load = MainMenuItem::LoadBoard;
        let quit = MainMenuItem::Quit;

        assert_ne!(edit, load, "items are distinct");
        assert_ne!(load, quit, "items are distinct");
        assert_ne!(edit, quit, "items are distinct");
    }
}
