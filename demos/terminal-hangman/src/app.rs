//! The line-oriented front-end: one handler per [`Screen`].
//!
//! Handlers read from any `BufRead` and write to any `Write`, so the whole
//! app can be driven by a script in tests. Each handler returns a [`Nav`]
//! telling the [`Router`] where to go next.

use std::io::{self, BufRead, Write};

use hangman::prelude::*;
use hangman::{MatchError, ScoreLedger};

use crate::gallows;
use crate::screen::{Nav, Router, Screen};

/// Blank lines printed after a PvP word is entered, to push it off screen.
const SCROLL_LINES: usize = 40;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] HangmanError),
}

impl From<MatchError> for AppError {
    fn from(err: MatchError) -> Self {
        Self::Game(err.into())
    }
}

/// How a round left the guess loop.
enum RoundExit {
    Finished(RoundOutcome),
    Menu,
    FinishMatch,
    Quit,
}

pub struct App<R, W, S> {
    input: R,
    output: W,
    words: S,
    config: MatchConfig,
    router: Router,
    player_name: String,
    session: Option<MatchController>,
}

/// Reads a line, or leaves the app on end of input.
macro_rules! read_or_quit {
    ($app:expr, $label:expr) => {
        match $app.prompt($label)? {
            Some(line) => line,
            None => return Ok(Nav::Quit),
        }
    };
}

impl<R: BufRead, W: Write, S: WordSource> App<R, W, S> {
    pub fn new(input: R, output: W, words: S, config: MatchConfig) -> Self {
        Self {
            input,
            output,
            words,
            config,
            router: Router::new(Screen::NameEntry),
            player_name: String::new(),
            session: None,
        }
    }

    /// Runs screens until the user quits or input ends.
    pub fn run(&mut self) -> Result<(), AppError> {
        while let Some(screen) = self.router.current() {
            tracing::debug!(%screen, depth = self.router.depth(), "showing screen");
            let nav = self.show(screen)?;
            self.router.navigate(nav);
        }
        self.output.flush()?;
        Ok(())
    }

    fn show(&mut self, screen: Screen) -> Result<Nav, AppError> {
        match screen {
            Screen::NameEntry => self.name_entry(),
            Screen::MainMenu => self.main_menu(),
            Screen::PvcGame => self.pvc_game(),
            Screen::PvpSetup => self.pvp_setup(),
            Screen::PvpWordSetup => self.pvp_word_setup(),
            Screen::PvpGame => self.pvp_game(),
            Screen::Instructions => self.instructions(),
            Screen::ExitConfirmation => self.exit_confirmation(),
            Screen::Summary => self.summary(),
        }
    }

    // =====================================================================
    // Menus
    // =====================================================================

    fn name_entry(&mut self) -> Result<Nav, AppError> {
        writeln!(self.output, "Enter your name")?;
        loop {
            let name = read_or_quit!(self, "name");
            if name.is_empty() {
                writeln!(self.output, "Please enter a name to continue.")?;
                continue;
            }
            self.player_name = name;
            return Ok(Nav::Replace(Screen::MainMenu));
        }
    }

    fn main_menu(&mut self) -> Result<Nav, AppError> {
        writeln!(self.output)?;
        writeln!(self.output, "Welcome, {}, to the Hangman game!", self.player_name)?;
        writeln!(self.output, "Please choose game mode")?;
        writeln!(self.output, "  1) Player vs Computer")?;
        writeln!(self.output, "  2) Player vs Player")?;
        writeln!(self.output, "  3) Instructions")?;
        writeln!(self.output, "  4) Exit")?;
        loop {
            let choice = read_or_quit!(self, "menu");
            match choice.as_str() {
                "1" => {
                    let roster = Roster::new(self.player_name.clone(), "Computer");
                    self.begin_match(MatchMode::PvC, roster)?;
                    return Ok(Nav::Push(Screen::PvcGame));
                }
                "2" => return Ok(Nav::Push(Screen::PvpSetup)),
                "3" => return Ok(Nav::Push(Screen::Instructions)),
                "4" => return Ok(Nav::Push(Screen::ExitConfirmation)),
                _ => writeln!(self.output, "Choose 1, 2, 3 or 4.")?,
            }
        }
    }

    fn instructions(&mut self) -> Result<Nav, AppError> {
        let rules = self.config.scoring;
        let attempts = self.config.validated().max_mistakes;
        writeln!(self.output)?;
        writeln!(self.output, "How to play")?;
        writeln!(self.output)?;
        writeln!(self.output, "Player vs Computer")?;
        writeln!(
            self.output,
            "  The computer picks a word. You have {attempts} wrong guesses before the \
             hangman is complete. Solve it to gain {} points; the computer loses {}. \
             Fail and the computer gains {} points while you lose {}.",
            rules.win_award, rules.loss_penalty, rules.win_award, rules.loss_penalty
        )?;
        writeln!(self.output)?;
        writeln!(self.output, "Player vs Player")?;
        writeln!(
            self.output,
            "  Take turns choosing a word for each other, {attempts} wrong guesses each \
             round. A solved word gives the guesser {} points and costs the word setter {}. \
             An unsolved word gives the setter {} points and costs the guesser {}.",
            rules.win_award, rules.loss_penalty, rules.win_award, rules.loss_penalty
        )?;
        writeln!(self.output)?;
        writeln!(self.output, "Scores never drop below zero.")?;
        writeln!(
            self.output,
            "Type a single letter to guess, 'finish' to end the match and see who won, \
             or 'menu' to leave without a result."
        )?;
        writeln!(self.output, "Good luck and enjoy the game!")?;
        read_or_quit!(self, "press enter");
        Ok(Nav::Back)
    }

    fn exit_confirmation(&mut self) -> Result<Nav, AppError> {
        writeln!(self.output, "Do you really want to exit? (y/n)")?;
        loop {
            let answer = read_or_quit!(self, "exit");
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Nav::Quit),
                "n" | "no" => return Ok(Nav::Back),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    // =====================================================================
    // Matches
    // =====================================================================

    fn begin_match(&mut self, mode: MatchMode, roster: Roster) -> Result<(), AppError> {
        let mut ctl = MatchController::new(self.config).with_roster(roster);
        ctl.start_match(mode)?;
        self.session = Some(ctl);
        Ok(())
    }

    fn controller(&mut self) -> Result<&mut MatchController, AppError> {
        self.session
            .as_mut()
            .ok_or_else(|| MatchError::InvalidState("no match in progress".into()).into())
    }

    fn pvc_game(&mut self) -> Result<Nav, AppError> {
        let Some(ctl) = self.session.as_mut() else {
            return Ok(Nav::Home);
        };
        let started = ctl.start_round_from(&mut self.words).map(|_| ());
        match started {
            Ok(()) => {}
            Err(MatchError::Words(err)) => {
                tracing::warn!(%err, "word source exhausted");
                writeln!(self.output, "No words available: {err}")?;
                self.session = None;
                return Ok(Nav::Home);
            }
            Err(err) => return Err(err.into()),
        }
        self.play()
    }

    fn pvp_setup(&mut self) -> Result<Nav, AppError> {
        writeln!(self.output, "Enter opponent's name")?;
        loop {
            let opponent = read_or_quit!(self, "opponent");
            if opponent.is_empty() {
                writeln!(self.output, "Please enter a name to continue.")?;
                continue;
            }
            let roster = Roster::new(self.player_name.clone(), opponent);
            self.begin_match(MatchMode::PvP, roster)?;
            return Ok(Nav::Replace(Screen::PvpWordSetup));
        }
    }

    fn pvp_word_setup(&mut self) -> Result<Nav, AppError> {
        let (setter, guesser) = {
            let ctl = self.controller()?;
            let roster = ctl.roster().cloned().unwrap_or_else(|| Roster::for_mode(MatchMode::PvP));
            (
                roster.name(ctl.word_setter()).to_string(),
                roster.name(ctl.guesser()).to_string(),
            )
        };
        writeln!(self.output)?;
        writeln!(self.output, "It's {setter}'s turn to choose a word. {guesser}, look away!")?;
        loop {
            let word = read_or_quit!(self, "secret word");
            if word.is_empty() {
                writeln!(self.output, "Please enter a word to continue.")?;
                continue;
            }
            let ctl = self.controller()?;
            let guesser_seat = ctl.guesser();
            let started = ctl.start_round(&word, guesser_seat).map(|_| ());
            match started {
                Ok(()) => break,
                Err(MatchError::Round(err)) => {
                    tracing::debug!(%err, "secret word rejected");
                    writeln!(self.output, "{err}. Try another word.")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
        write!(self.output, "{}", "\n".repeat(SCROLL_LINES))?;
        Ok(Nav::Replace(Screen::PvpGame))
    }

    fn pvp_game(&mut self) -> Result<Nav, AppError> {
        if self.controller()?.round().is_none() {
            return Ok(Nav::Replace(Screen::PvpWordSetup));
        }
        self.play()
    }

    /// Plays the active round to the end, then asks what to do next.
    fn play(&mut self) -> Result<Nav, AppError> {
        match self.guess_loop()? {
            RoundExit::Finished(outcome) => {
                self.announce(outcome)?;
                self.after_round()
            }
            RoundExit::FinishMatch => {
                self.controller()?.end_match()?;
                Ok(Nav::Replace(Screen::Summary))
            }
            RoundExit::Menu => {
                self.session = None;
                Ok(Nav::Home)
            }
            RoundExit::Quit => Ok(Nav::Quit),
        }
    }

    fn guess_loop(&mut self) -> Result<RoundExit, AppError> {
        loop {
            self.render_round()?;
            let Some(input) = self.prompt("guess")? else {
                return Ok(RoundExit::Quit);
            };
            match input.to_ascii_lowercase().as_str() {
                "" => continue,
                "menu" => return Ok(RoundExit::Menu),
                "finish" => return Ok(RoundExit::FinishMatch),
                _ => {}
            }

            let letter = match input.parse::<Letter>() {
                Ok(letter) => letter,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };
            let report = self.controller()?.guess(letter)?;
            match report.kind {
                GuessKind::Hit { occurrences } => {
                    writeln!(self.output, "Yes! {letter} appears {occurrences} time(s).")?
                }
                GuessKind::Miss => writeln!(self.output, "No {letter} in this word.")?,
                GuessKind::Repeated => writeln!(self.output, "You already tried {letter}.")?,
            }
            if report.outcome.is_finished() {
                self.render_round()?;
                return Ok(RoundExit::Finished(report.outcome));
            }
        }
    }

    fn render_round(&mut self) -> Result<(), AppError> {
        let Some(ctl) = &self.session else {
            return Ok(());
        };
        let Some(round) = ctl.round() else {
            return Ok(());
        };
        let view = round.view();

        writeln!(self.output)?;
        writeln!(
            self.output,
            "{}",
            gallows::render(gallows::stage_for(view.progress, view.max_mistakes))
        )?;
        writeln!(self.output, "Word:   {}", view.masked())?;
        if !view.missed.is_empty() {
            let missed: Vec<String> = view.missed.iter().map(Letter::to_string).collect();
            writeln!(self.output, "Missed: {}", missed.join(" "))?;
        }
        writeln!(self.output, "Wrong guesses left: {}", round.remaining_attempts())?;
        if let Some(roster) = ctl.roster() {
            write_scores(&mut self.output, roster, ctl.scores())?;
        }
        Ok(())
    }

    fn announce(&mut self, outcome: RoundOutcome) -> Result<(), AppError> {
        let ctl = self.controller()?;
        let word = ctl.round().map(RoundEngine::secret_word).unwrap_or_default();
        let mode = ctl.mode();
        let guesser = ctl
            .roster()
            .map(|r| r.name(ctl.guesser()).to_string())
            .unwrap_or_default();
        let delta = ctl.settle_round()?;
        let scores = ctl.scores();
        let roster = ctl.roster().cloned();

        match (outcome, mode) {
            (RoundOutcome::Won, Some(MatchMode::PvC)) => {
                writeln!(self.output, "You WIN, my congratulations!!!")?
            }
            (RoundOutcome::Won, _) => writeln!(self.output, "{guesser} guessed {word}!")?,
            _ => {
                writeln!(self.output, "The hidden word was: {word}")?;
                if mode == Some(MatchMode::PvC) {
                    writeln!(self.output, "You LOSE, please try again.")?;
                } else {
                    writeln!(self.output, "{guesser} is hanged.")?;
                }
            }
        }
        writeln!(
            self.output,
            "Points this round: {:+} / {:+}",
            delta.get(Seat::Primary),
            delta.get(Seat::Secondary)
        )?;
        if let Some(roster) = roster {
            write_scores(&mut self.output, &roster, scores)?;
        }
        Ok(())
    }

    fn after_round(&mut self) -> Result<Nav, AppError> {
        writeln!(self.output, "  n) Next round   f) Finish the game   m) Back to main menu")?;
        loop {
            let choice = read_or_quit!(self, "next");
            match choice.to_ascii_lowercase().as_str() {
                "n" => {
                    let ctl = self.controller()?;
                    ctl.next_round()?;
                    return Ok(match ctl.mode() {
                        Some(MatchMode::PvP) => Nav::Replace(Screen::PvpWordSetup),
                        _ => Nav::Stay,
                    });
                }
                "f" => {
                    self.controller()?.end_match()?;
                    return Ok(Nav::Replace(Screen::Summary));
                }
                "m" => {
                    self.session = None;
                    return Ok(Nav::Home);
                }
                _ => writeln!(self.output, "Choose n, f or m.")?,
            }
        }
    }

    fn summary(&mut self) -> Result<Nav, AppError> {
        let Some(ctl) = self.session.take() else {
            return Ok(Nav::Home);
        };
        let scores = ctl.scores();
        let result = ctl
            .result()
            .unwrap_or_else(|| MatchResult::from_scores(scores.primary, scores.secondary));
        let roster = ctl
            .roster()
            .cloned()
            .unwrap_or_else(|| Roster::new(self.player_name.clone(), "Opponent"));

        writeln!(self.output)?;
        match (result.winner(), ctl.mode()) {
            (None, _) => writeln!(self.output, "Draw, friendship wins")?,
            (Some(Seat::Secondary), Some(MatchMode::PvC)) => {
                writeln!(self.output, "The computer won the game")?
            }
            (Some(seat), _) => {
                writeln!(self.output, "The player {} won the game", roster.name(seat))?
            }
        }
        writeln!(self.output, "Rounds played: {}", ctl.rounds_played())?;
        write_scores(&mut self.output, &roster, scores)?;
        read_or_quit!(self, "press enter");
        Ok(Nav::Home)
    }

    // =====================================================================
    // Input
    // =====================================================================

    /// Prints `label> ` and reads one trimmed line. `None` on end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{label}> ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn write_scores(out: &mut impl Write, roster: &Roster, scores: ScoreLedger) -> io::Result<()> {
    writeln!(
        out,
        "{}'s score: {}   {}'s score: {}",
        roster.primary, scores.primary, roster.secondary, scores.secondary
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs the app over `script` and returns everything it printed.
    fn run_script(script: &str, words: &[&str]) -> String {
        run_with_config(script, words, MatchConfig::default())
    }

    fn run_with_config(script: &str, words: &[&str], config: MatchConfig) -> String {
        let mut out = Vec::new();
        let source = WordQueue::new(words.iter().copied());
        App::new(script.as_bytes(), &mut out, source, config)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    // =====================================================================
    // Navigation
    // =====================================================================

    #[test]
    fn test_run_name_then_exit() {
        let out = run_script("Ilze\n4\ny\n", &[]);
        assert!(out.contains("Welcome, Ilze, to the Hangman game!"));
        assert!(out.contains("Do you really want to exit?"));
    }

    #[test]
    fn test_run_blank_name_is_rejected() {
        let out = run_script("\nIlze\n4\ny\n", &[]);
        assert!(out.contains("Please enter a name to continue."));
        assert!(out.contains("Welcome, Ilze"));
    }

    #[test]
    fn test_run_exit_declined_returns_to_menu() {
        let out = run_script("Ilze\n4\nn\n4\ny\n", &[]);
        assert_eq!(out.matches("Please choose game mode").count(), 2);
    }

    #[test]
    fn test_run_instructions_show_scoring() {
        let out = run_script("Ilze\n3\n\n4\ny\n", &[]);
        assert!(out.contains("gain 100 points"));
        assert!(out.contains("Scores never drop below zero."));
    }

    #[test]
    fn test_run_end_of_input_quits_cleanly() {
        let out = run_script("Ilze\n1\nc\n", &["CAT"]);
        assert!(out.contains("Word:   C _ _"));
    }

    // =====================================================================
    // Player vs computer
    // =====================================================================

    #[test]
    fn test_run_pvc_win_then_finish() {
        let out = run_script("Ilze\n1\nc\na\nt\nf\n\n4\ny\n", &["CAT"]);
        assert!(out.contains("You WIN, my congratulations!!!"));
        assert!(out.contains("Ilze's score: 100   Computer's score: 0"));
        assert!(out.contains("The player Ilze won the game"));
    }

    #[test]
    fn test_run_pvc_loss_reveals_word() {
        let out = run_script("Ilze\n1\nx\ny\nz\nq\nw\ne\nr\nt\nu\ni\nf\n\n4\ny\n", &["DOG"]);
        assert!(out.contains("The hidden word was: DOG"));
        assert!(out.contains("You LOSE, please try again."));
        assert!(out.contains("The computer won the game"));
    }

    #[test]
    fn test_run_pvc_next_round_draws_new_word() {
        let out = run_script("Ilze\n1\na\nn\nb\nf\n\n4\ny\n", &["A", "B"]);
        assert!(out.contains("Ilze's score: 200   Computer's score: 0"));
        assert!(out.contains("Rounds played: 2"));
    }

    #[test]
    fn test_run_invalid_and_repeated_guesses_are_reported() {
        let out = run_script("Ilze\n1\n7\nab\nc\nc\nmenu\n4\ny\n", &["CAT"]);
        assert!(out.contains("invalid guess"));
        assert!(out.contains("You already tried C."));
        assert!(out.contains("Please choose game mode"));
    }

    #[test]
    fn test_run_pvc_empty_word_source_returns_to_menu() {
        let out = run_script("Ilze\n1\n4\ny\n", &[]);
        assert!(out.contains("No words available"));
    }

    #[test]
    fn test_run_finish_mid_round_is_a_draw() {
        let out = run_script("Ilze\n1\nc\nfinish\n\n4\ny\n", &["CAT"]);
        assert!(out.contains("Draw, friendship wins"));
        assert!(out.contains("Rounds played: 0"));
    }

    #[test]
    fn test_run_uses_configured_mistake_limit() {
        let config = MatchConfig {
            max_mistakes: 2,
            ..MatchConfig::default()
        };
        let out = run_with_config("Ilze\n1\nx\ny\nf\n\n4\ny\n", &["DOG"], config);
        assert!(out.contains("Wrong guesses left: 2"));
        assert!(out.contains("The hidden word was: DOG"));
    }

    // =====================================================================
    // Player vs player
    // =====================================================================

    #[test]
    fn test_run_pvp_roles_swap_and_scores_add_up() {
        let script = "Anna\n2\nBerta\ncat\nc\na\nt\nn\ndog\n\
                      x\ny\nz\nq\nw\ne\nr\nt\nu\ni\nf\n\n4\ny\n";
        let out = run_script(script, &[]);
        assert!(out.contains("It's Berta's turn to choose a word. Anna, look away!"));
        assert!(out.contains("It's Anna's turn to choose a word. Berta, look away!"));
        assert!(out.contains("Anna guessed CAT!"));
        assert!(out.contains("Berta is hanged."));
        assert!(out.contains("Anna's score: 200   Berta's score: 0"));
        assert!(out.contains("The player Anna won the game"));
    }

    #[test]
    fn test_run_pvp_bad_secret_word_reprompts() {
        let out = run_script("Anna\n2\nBerta\nc4t\n\ncat\nmenu\n4\ny\n", &[]);
        assert!(out.contains("Try another word."));
        assert!(out.contains("Please enter a word to continue."));
        assert!(out.contains("Word:   _ _ _"));
    }
}
