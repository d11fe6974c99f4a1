//! Terminal Hangman: play against the computer, or against a friend on the
//! same keyboard.
//!
//! ```text
//! terminal-hangman [--words FILE] [--config FILE]
//! ```
//!
//! Engine logs go to stderr, filtered by `RUST_LOG` (default `warn`, so they
//! stay out of the way of the game).

mod app;
mod gallows;
mod options;
mod screen;

use std::io;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::app::App;
use crate::options::{Options, USAGE};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    hangman::logging::init_with_default("warn");

    let options = Options::parse(std::env::args().skip(1))?;
    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = options.load_config().await?;
    let words = options.load_words().await?;
    tracing::info!(
        words = words.len(),
        max_mistakes = config.max_mistakes,
        "starting terminal hangman"
    );

    // The game reads stdin line by line, so it runs on a blocking thread.
    let words = words.with_rng(StdRng::from_os_rng());
    tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        App::new(stdin.lock(), io::stdout(), words, config).run()
    })
    .await??;

    Ok(())
}
