//! Random letter grids searched for dictionary words in all eight
//! straight-line directions.

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod models;
pub mod report;
pub mod search;
pub mod utils;

pub use dictionary::Dictionary;
pub use error::WordSearchError;
pub use models::Grid;
pub use search::WordSearch;
