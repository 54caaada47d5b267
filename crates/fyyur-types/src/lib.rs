pub mod choices;
pub mod config;
pub mod form;

pub use choices::{is_valid_genre, is_valid_state};
