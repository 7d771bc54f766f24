use anyhow::{Context, Result};
use std::{env, path::PathBuf};

use crate::cli::{check_file, parse_axis, Cli};

#[derive(Debug, Clone)]
pub struct Config {
    pub grid: GridConfig,
    pub dictionary: DictionaryConfig,
}

#[derive(Debug, Clone)]
pub struct GridConfig {
    pub xsize: usize,
    pub ysize: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    pub path: PathBuf,
}

impl Config {
    /// Resolve settings with command line flags taking precedence over the
    /// environment. An env var is only read, and validated, when the
    /// matching flag is absent.
    pub fn from_env(cli: &Cli) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(cli, |key| env::var(key).ok())
    }

    fn from_lookup(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let grid = GridConfig {
            xsize: match cli.xsize {
                Some(xsize) => xsize,
                None => parse_axis(
                    "x",
                    &lookup("WORD_SEARCH_XSIZE").unwrap_or_else(|| "15".to_string()),
                )
                .context("WORD_SEARCH_XSIZE must be a positive integer")?,
            },
            ysize: match cli.ysize {
                Some(ysize) => ysize,
                None => parse_axis(
                    "y",
                    &lookup("WORD_SEARCH_YSIZE").unwrap_or_else(|| "15".to_string()),
                )
                .context("WORD_SEARCH_YSIZE must be a positive integer")?,
            },
            seed: match cli.seed {
                Some(seed) => Some(seed),
                None => lookup("WORD_SEARCH_SEED")
                    .map(|seed| seed.parse())
                    .transpose()
                    .context("WORD_SEARCH_SEED must be a number")?,
            },
        };

        let dictionary = DictionaryConfig {
            path: match &cli.dictionary {
                Some(path) => path.clone(),
                None => lookup("WORD_SEARCH_DICTIONARY")
                    .unwrap_or_else(|| "words.txt".to_string())
                    .into(),
            },
        };

        Ok(Config { grid, dictionary })
    }

    /// Check the dictionary path before any work starts
    pub fn validate(&self) -> Result<()> {
        check_file(&self.dictionary.path)?;
        Ok(())
    }
}
