mod command;
mod editor;

pub(crate) use self::command::{unescape, Command};

pub use self::editor::Editor;
