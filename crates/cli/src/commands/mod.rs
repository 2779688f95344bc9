//! CLI Commands

pub mod add;
pub mod find;
pub mod list;

pub use add::AddCommand;
pub use find::FindCommand;
pub use list::ListCommand;
