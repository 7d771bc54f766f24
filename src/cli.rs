use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::error::{Result, WordSearchError};

/// Search a randomly generated grid of letters for dictionary words.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// X-axis size (grid width). Defaults to WORD_SEARCH_XSIZE or 15.
    #[arg(long, value_parser = parse_xsize)]
    pub xsize: Option<usize>,

    /// Y-axis size (grid height). Defaults to WORD_SEARCH_YSIZE or 15.
    #[arg(long, value_parser = parse_ysize)]
    pub ysize: Option<usize>,

    /// Dictionary file, one word per line. Defaults to WORD_SEARCH_DICTIONARY or words.txt.
    #[arg(long, value_parser = parse_dictionary)]
    pub dictionary: Option<PathBuf>,

    /// Seed for the grid generator, for repeatable grids.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the grid before the found words.
    #[arg(long, default_value_t = false)]
    pub show_grid: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parse a grid axis size, which must be an integer > 0
pub fn parse_axis(axis: &'static str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(WordSearchError::InvalidDimension {
            axis,
            value: value.to_string(),
        }),
    }
}

fn parse_xsize(value: &str) -> Result<usize> {
    parse_axis("x", value)
}

fn parse_ysize(value: &str) -> Result<usize> {
    parse_axis("y", value)
}

fn parse_dictionary(value: &str) -> Result<PathBuf> {
    let path = PathBuf::from(value);
    check_file(&path)?;
    Ok(path)
}

/// Check that `path` names an existing regular file
pub fn check_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(WordSearchError::MissingFile {
            path: path.to_path_buf(),
        })
    }
}
