//! Command-line options and the files they point to.

use std::io;
use std::path::PathBuf;

use hangman::{MatchConfig, WordList, WordSourceError};

pub const USAGE: &str = "\
usage: terminal-hangman [--words FILE] [--config FILE]

  --words FILE    word list, one word per line (default: built-in list)
  --config FILE   JSON match config, e.g. {\"max_mistakes\": 8}
  -h, --help      show this message

Set RUST_LOG (e.g. RUST_LOG=debug) to see engine logs on stderr.";

const BUILTIN_WORDS: &str = include_str!("../assets/words.txt");

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("cannot read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub words: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub help: bool,
}

impl Options {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => options.help = true,
                "--words" => {
                    let value = args.next().ok_or(OptionsError::MissingValue(arg))?;
                    options.words = Some(value.into());
                }
                "--config" => {
                    let value = args.next().ok_or(OptionsError::MissingValue(arg))?;
                    options.config = Some(value.into());
                }
                _ => return Err(OptionsError::UnknownArgument(arg)),
            }
        }
        Ok(options)
    }

    /// Reads the JSON config, or returns the default config if none was
    /// given. Missing fields fall back to their defaults.
    pub async fn load_config(&self) -> Result<MatchConfig, OptionsError> {
        let Some(path) = &self.config else {
            return Ok(MatchConfig::default());
        };
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| OptionsError::ReadConfig {
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&text).map_err(|source| OptionsError::ParseConfig {
            path: path.clone(),
            source,
        })
    }

    /// Reads the word file in the background, or parses the built-in list.
    pub async fn load_words(&self) -> Result<WordList, WordSourceError> {
        match &self.words {
            Some(path) => WordList::load_async(path).await,
            None => Ok(WordList::parse(BUILTIN_WORDS)),
        }
    }
}
