pub mod canvas;
pub mod dialogs;
pub mod theme;
pub mod toolbar;
