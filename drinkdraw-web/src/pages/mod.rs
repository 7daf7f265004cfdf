pub mod entry;
pub mod results;
pub mod setup;
