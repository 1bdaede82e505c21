// Adapters layer: concrete implementations of the store and prompt ports.

pub mod sqlite;
pub mod terminal;

pub use sqlite::SqliteStore;
pub use terminal::TerminalPrompter;
