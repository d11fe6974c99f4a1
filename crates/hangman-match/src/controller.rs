//! The match controller: the sole owner of scores and roles.
//!
//! ## Lifecycle
//!
//! ```text
//! new() ──→ start_match() ──→ start_round() ──→ guess()* ──→ apply_outcome()
//!                                  ↑                               │
//!                                  └──────── next_round() ←────────┘
//!
//! end_match() is accepted at any point while the match is InProgress.
//! ```
//!
//! Each round is scored exactly once. A round that is still running, or
//! finished but not yet scored, blocks `start_round` and `next_round` so a
//! result can't be lost by moving on too early.

use hangman_round::{GuessReport, Letter, RoundEngine, RoundOutcome, RoundView};
use hangman_words::WordSource;
use serde::{Deserialize, Serialize};

use crate::{
    MatchConfig, MatchError, MatchMode, MatchResult, MatchState, Roster, ScoreDelta,
    ScoreLedger, Seat,
};

/// The round currently owned by the controller.
#[derive(Debug)]
struct ActiveRound {
    engine: RoundEngine,
    guesser: Seat,
    /// `true` once the outcome has been applied to the ledger.
    settled: bool,
}

/// Serializable snapshot of the whole match, for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub state: MatchState,
    pub mode: Option<MatchMode>,
    pub roster: Option<Roster>,
    pub scores: ScoreLedger,
    /// Seat that guesses in the current (or next) round.
    pub guesser: Seat,
    pub round: Option<RoundView>,
    pub round_settled: bool,
    pub rounds_played: u32,
    pub result: Option<MatchResult>,
}

/// Drives a sequence of rounds between two seats.
///
/// # Example
///
/// ```rust
/// use hangman_match::{MatchConfig, MatchController, MatchMode, MatchResult, Seat};
///
/// let mut ctl = MatchController::new(MatchConfig::default());
/// ctl.start_match(MatchMode::PvP).unwrap();
///
/// ctl.start_round("CAT", Seat::Primary).unwrap();
/// for c in ['C', 'A', 'T'] {
///     ctl.guess_char(c).unwrap();
/// }
/// let delta = ctl.settle_round().unwrap();
/// assert_eq!(delta.primary, 100);
///
/// assert_eq!(ctl.next_round().unwrap(), Seat::Secondary);
/// assert_eq!(ctl.end_match().unwrap(), MatchResult::PrimaryWins);
/// ```
#[derive(Debug)]
pub struct MatchController {
    config: MatchConfig,
    state: MatchState,
    mode: Option<MatchMode>,
    /// Names requested before the match started, if any.
    requested_roster: Option<Roster>,
    roster: Option<Roster>,
    scores: ScoreLedger,
    guesser: Seat,
    round: Option<ActiveRound>,
    rounds_played: u32,
    result: Option<MatchResult>,
}

impl MatchController {
    /// Creates a controller in the `NotStarted` state with zero scores.
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config: config.validated(),
            state: MatchState::NotStarted,
            mode: None,
            requested_roster: None,
            roster: None,
            scores: ScoreLedger::default(),
            guesser: Seat::Primary,
            round: None,
            rounds_played: 0,
            result: None,
        }
    }

    /// Sets display names. Without this, [`Roster::for_mode`] is used.
    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.requested_roster = Some(roster);
        self
    }

    // =====================================================================
    // Lifecycle
    // =====================================================================

    /// Starts the match: scores are reset to zero and the primary seat
    /// guesses first.
    ///
    /// # Errors
    /// [`MatchError::InvalidState`] unless the match is `NotStarted`.
    pub fn start_match(&mut self, mode: MatchMode) -> Result<(), MatchError> {
        self.transition(MatchState::InProgress)?;

        let roster = self
            .requested_roster
            .clone()
            .unwrap_or_else(|| Roster::for_mode(mode));
        self.mode = Some(mode);
        self.scores.reset();
        self.guesser = Seat::Primary;
        self.round = None;
        self.rounds_played = 0;

        tracing::info!(
            %mode,
            primary = %roster.primary,
            secondary = %roster.secondary,
            max_mistakes = self.config.max_mistakes,
            "match started"
        );
        self.roster = Some(roster);
        Ok(())
    }

    /// Ends the match and fixes the result by comparing scores.
    ///
    /// Allowed mid-round; an unscored round is discarded.
    ///
    /// # Errors
    /// [`MatchError::InvalidState`] unless the match is `InProgress`.
    pub fn end_match(&mut self) -> Result<MatchResult, MatchError> {
        self.transition(MatchState::Finished)?;

        if let Some(round) = self.round.take() {
            if !round.settled {
                tracing::debug!(outcome = %round.engine.outcome(), "discarding unscored round");
            }
        }

        let result = MatchResult::from_scores(self.scores.primary, self.scores.secondary);
        self.result = Some(result);
        tracing::info!(
            ?result,
            primary = self.scores.primary,
            secondary = self.scores.secondary,
            rounds = self.rounds_played,
            "match finished"
        );
        Ok(result)
    }

    // =====================================================================
    // Rounds
    // =====================================================================

    /// Starts a round with `secret_word`, guessed by `guesser`. The other
    /// seat is the word-setter.
    ///
    /// # Errors
    /// - [`MatchError::InvalidState`] if the match is not `InProgress`
    /// - [`MatchError::InvalidRole`] if the computer would guess (PvC)
    /// - [`MatchError::RoundInProgress`] / [`MatchError::OutcomeNotApplied`]
    ///   if the previous round isn't finished and scored
    /// - [`MatchError::Round`] if the word is invalid
    pub fn start_round(
        &mut self,
        secret_word: &str,
        guesser: Seat,
    ) -> Result<&RoundEngine, MatchError> {
        self.check_can_start_round(guesser)?;

        let engine = RoundEngine::with_config(secret_word, &self.config.round_config())?;
        self.guesser = guesser;
        tracing::info!(
            round = self.rounds_played + 1,
            %guesser,
            word_len = secret_word.len(),
            "round started"
        );

        let round = self.round.insert(ActiveRound {
            engine,
            guesser,
            settled: false,
        });
        Ok(&round.engine)
    }

    /// Draws a word from `source` and starts a round with the current role
    /// assignment.
    ///
    /// No word is consumed if the round could not be started anyway.
    ///
    /// # Errors
    /// Same as [`start_round`](Self::start_round), plus
    /// [`MatchError::Words`] if the source is empty.
    pub fn start_round_from<S>(&mut self, source: &mut S) -> Result<&RoundEngine, MatchError>
    where
        S: WordSource + ?Sized,
    {
        let guesser = self.guesser;
        self.check_can_start_round(guesser)?;
        let word = source.select_random_word()?;
        self.start_round(&word, guesser)
    }

    /// Forwards a guess to the active round.
    ///
    /// # Errors
    /// [`MatchError::NoActiveRound`] if there is no round, or
    /// [`MatchError::Round`] if the round rejects the guess.
    pub fn guess(&mut self, letter: Letter) -> Result<GuessReport, MatchError> {
        self.ensure_active()?;
        let round = self.round.as_mut().ok_or(MatchError::NoActiveRound)?;
        Ok(round.engine.guess(letter)?)
    }

    /// Validates `c` and forwards it as a guess.
    pub fn guess_char(&mut self, c: char) -> Result<GuessReport, MatchError> {
        self.guess(Letter::new(c)?)
    }

    /// Scores the active round.
    ///
    /// - Guesser won: guesser gains `win_award`, word-setter loses
    ///   `loss_penalty`.
    /// - Guesser lost: word-setter gains `win_award`, guesser loses
    ///   `loss_penalty`.
    ///
    /// Deductions stop at zero. Returns the changes actually applied.
    ///
    /// # Errors
    /// - [`MatchError::NoActiveRound`] if there is no round
    /// - [`MatchError::OutcomeAlreadyApplied`] on a second call for the
    ///   same round (scores are untouched)
    /// - [`MatchError::RoundInProgress`] if the round hasn't ended
    /// - [`MatchError::OutcomeMismatch`] if `outcome` isn't how the round
    ///   actually ended
    pub fn apply_outcome(&mut self, outcome: RoundOutcome) -> Result<ScoreDelta, MatchError> {
        self.ensure_active()?;
        let round = self.round.as_mut().ok_or(MatchError::NoActiveRound)?;
        if round.settled {
            return Err(MatchError::OutcomeAlreadyApplied);
        }
        let actual = round.engine.outcome();
        if !actual.is_finished() {
            return Err(MatchError::RoundInProgress);
        }
        if outcome != actual {
            return Err(MatchError::OutcomeMismatch {
                expected: actual,
                got: outcome,
            });
        }

        let (winner, loser) = match outcome {
            RoundOutcome::Won => (round.guesser, round.guesser.other()),
            _ => (round.guesser.other(), round.guesser),
        };
        let rules = self.config.scoring;
        let mut delta = ScoreDelta::default();
        delta.set(winner, self.scores.award(winner, rules.win_award));
        delta.set(loser, self.scores.deduct(loser, rules.loss_penalty));

        round.settled = true;
        self.rounds_played += 1;

        tracing::info!(
            round = self.rounds_played,
            %outcome,
            guesser = %round.guesser,
            primary_delta = delta.primary,
            secondary_delta = delta.secondary,
            primary = self.scores.primary,
            secondary = self.scores.secondary,
            "round scored"
        );
        Ok(delta)
    }

    /// Scores the active round using its own outcome.
    pub fn settle_round(&mut self) -> Result<ScoreDelta, MatchError> {
        let outcome = self
            .round
            .as_ref()
            .ok_or(MatchError::NoActiveRound)?
            .engine
            .outcome();
        self.apply_outcome(outcome)
    }

    /// Clears the scored round and prepares roles for the next one.
    ///
    /// In PvP the guesser and word-setter swap. In PvC the player always
    /// guesses, so roles stay as they are. Returns the next guesser.
    ///
    /// # Errors
    /// [`MatchError::RoundInProgress`] / [`MatchError::OutcomeNotApplied`]
    /// if the active round isn't finished and scored.
    pub fn next_round(&mut self) -> Result<Seat, MatchError> {
        self.ensure_active()?;
        self.ensure_round_closed()?;

        self.round = None;
        if self.mode == Some(MatchMode::PvP) {
            self.guesser = self.guesser.other();
        }
        tracing::debug!(guesser = %self.guesser, "next round prepared");
        Ok(self.guesser)
    }

    // =====================================================================
    // Accessors
    // =====================================================================

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn mode(&self) -> Option<MatchMode> {
        self.mode
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Display names. `None` until the match has started.
    pub fn roster(&self) -> Option<&Roster> {
        self.roster.as_ref()
    }

    pub fn scores(&self) -> ScoreLedger {
        self.scores
    }

    pub fn score(&self, seat: Seat) -> u32 {
        self.scores.get(seat)
    }

    /// Seat that guesses in the current round, or in the next one if no
    /// round is active.
    pub fn guesser(&self) -> Seat {
        self.guesser
    }

    pub fn word_setter(&self) -> Seat {
        self.guesser.other()
    }

    pub fn round(&self) -> Option<&RoundEngine> {
        self.round.as_ref().map(|r| &r.engine)
    }

    /// `true` if the active round has been scored.
    pub fn is_round_settled(&self) -> bool {
        self.round.as_ref().is_some_and(|r| r.settled)
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// The final result, once the match has ended.
    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            state: self.state,
            mode: self.mode,
            roster: self.roster.clone(),
            scores: self.scores,
            guesser: self.guesser,
            round: self.round.as_ref().map(|r| r.engine.view()),
            round_settled: self.is_round_settled(),
            rounds_played: self.rounds_played,
            result: self.result,
        }
    }

    // =====================================================================
    // Internals
    // =====================================================================

    fn transition(&mut self, target: MatchState) -> Result<(), MatchError> {
        if !self.state.can_transition_to(target) {
            return Err(MatchError::InvalidState(format!(
                "cannot move match from {} to {}",
                self.state, target
            )));
        }
        self.state = target;
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), MatchError> {
        if self.state.is_active() {
            Ok(())
        } else {
            Err(MatchError::InvalidState(format!(
                "match is {}, expected InProgress",
                self.state
            )))
        }
    }

    /// Succeeds if there is no round, or the round is finished and scored.
    fn ensure_round_closed(&self) -> Result<(), MatchError> {
        match &self.round {
            None => Ok(()),
            Some(r) if !r.engine.outcome().is_finished() => Err(MatchError::RoundInProgress),
            Some(r) if !r.settled => Err(MatchError::OutcomeNotApplied),
            Some(_) => Ok(()),
        }
    }

    fn check_can_start_round(&self, guesser: Seat) -> Result<(), MatchError> {
        self.ensure_active()?;
        if self.mode == Some(MatchMode::PvC) && guesser == Seat::Secondary {
            return Err(MatchError::InvalidRole(
                "the computer sets the word in PvC and cannot guess".into(),
            ));
        }
        self.ensure_round_closed()
    }
}
