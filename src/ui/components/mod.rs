pub mod language_picker;
pub mod list_menu;
pub mod quiz_board;
