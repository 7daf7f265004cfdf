pub mod button;
pub mod edit_dialog;
pub mod error_list;
pub mod header;
pub mod modal;
