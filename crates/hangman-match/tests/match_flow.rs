//! Integration tests for full matches: role rotation, scoring and the
//! match lifecycle.

use hangman_match::{
    MatchConfig, MatchController, MatchError, MatchMode, MatchResult, MatchState, Roster,
    ScoreDelta, ScoreLedger, ScoringRules, Seat,
};
use hangman_round::RoundOutcome;
use hangman_words::{WordQueue, WordSource};

// =========================================================================
// Helpers
// =========================================================================

/// Guesses each distinct letter of `word` so the round is won.
fn solve(ctl: &mut MatchController, word: &str) {
    let mut seen = Vec::new();
    for c in word.chars() {
        if !seen.contains(&c) {
            seen.push(c);
            ctl.guess_char(c).unwrap();
        }
    }
}

/// Burns every attempt with letters absent from "QQQ".
fn fail(ctl: &mut MatchController) {
    let limit = usize::from(ctl.config().max_mistakes);
    for c in "ABCDEFGHIJKLMNOPRSTUVWXYZ".chars().take(limit) {
        ctl.guess_char(c).unwrap();
    }
}

fn pvp() -> MatchController {
    let mut ctl = MatchController::new(MatchConfig::default());
    ctl.start_match(MatchMode::PvP).unwrap();
    ctl
}

// =========================================================================
// Scoring scenarios
// =========================================================================

#[test]
fn test_pvp_guesser_wins_from_zero() {
    let mut ctl = pvp();
    ctl.start_round("CAT", Seat::Primary).unwrap();
    solve(&mut ctl, "CAT");

    let delta = ctl.apply_outcome(RoundOutcome::Won).unwrap();

    assert_eq!(ctl.score(Seat::Primary), 100);
    assert_eq!(ctl.score(Seat::Secondary), 0);
    assert_eq!(delta, ScoreDelta { primary: 100, secondary: 0 });
}

#[test]
fn test_pvp_guesser_loss_with_custom_award_pays_setter() {
    // A 5-point award; the setter earns it again when the guesser loses.
    let config = MatchConfig {
        scoring: ScoringRules { win_award: 5, loss_penalty: 10 },
        ..MatchConfig::default()
    };
    let mut ctl = MatchController::new(config);
    ctl.start_match(MatchMode::PvP).unwrap();

    ctl.start_round("DOG", Seat::Secondary).unwrap();
    solve(&mut ctl, "DOG");
    ctl.settle_round().unwrap();
    assert_eq!(ctl.scores(), ScoreLedger { primary: 0, secondary: 5 });

    // Secondary now sets the word; primary guesses and loses.
    ctl.next_round().unwrap();
    ctl.start_round("QQQ", Seat::Primary).unwrap();
    fail(&mut ctl);
    let delta = ctl.apply_outcome(RoundOutcome::Lost).unwrap();

    assert_eq!(ctl.score(Seat::Secondary), 10);
    assert_eq!(ctl.score(Seat::Primary), 0);
    assert_eq!(delta, ScoreDelta { primary: 0, secondary: 5 });
}

#[test]
fn test_pvp_setter_gains_hundred_on_guesser_loss() {
    let mut ctl = pvp();
    // Setter (primary) reaches 100 by winning the first round as guesser.
    ctl.start_round("CAT", Seat::Primary).unwrap();
    solve(&mut ctl, "CAT");
    ctl.settle_round().unwrap();
    ctl.next_round().unwrap();

    let guesser_before = ctl.score(Seat::Secondary);
    ctl.start_round("QQQ", Seat::Secondary).unwrap();
    fail(&mut ctl);
    ctl.settle_round().unwrap();

    assert_eq!(ctl.score(Seat::Primary), 200);
    assert_eq!(ctl.score(Seat::Secondary), guesser_before.saturating_sub(10));
}

#[test]
fn test_scores_never_negative_over_many_losses() {
    let mut ctl = pvp();
    for _ in 0..6 {
        let guesser = ctl.guesser();
        ctl.start_round("QQQ", guesser).unwrap();
        fail(&mut ctl);
        ctl.settle_round().unwrap();
        ctl.next_round().unwrap();
    }
    // Primary's first penalty hits zero and is absorbed by the floor.
    assert_eq!(ctl.scores(), ScoreLedger { primary: 280, secondary: 270 });
    assert_eq!(ctl.rounds_played(), 6);
}

#[test]
fn test_pvp_first_round_loss_floors_guesser_at_zero() {
    let mut ctl = pvp();
    ctl.start_round("QQQ", Seat::Primary).unwrap();
    fail(&mut ctl);

    let delta = ctl.settle_round().unwrap();

    assert_eq!(ctl.scores(), ScoreLedger { primary: 0, secondary: 100 });
    assert_eq!(delta.get(Seat::Primary), 0);
}

// =========================================================================
// Roles
// =========================================================================

#[test]
fn test_pvp_roles_alternate_every_round() {
    let mut ctl = pvp();
    let mut words = WordQueue::new(["CAT", "DOG", "EMU", "YAK"]);
    let mut guessers = Vec::new();

    for _ in 0..4 {
        guessers.push(ctl.guesser());
        let word = ctl.start_round_from(&mut words).unwrap().secret_word();
        solve(&mut ctl, &word);
        ctl.settle_round().unwrap();
        ctl.next_round().unwrap();
    }

    assert_eq!(
        guessers,
        vec![Seat::Primary, Seat::Secondary, Seat::Primary, Seat::Secondary]
    );
    assert_eq!(ctl.scores(), ScoreLedger { primary: 180, secondary: 190 });
}

#[test]
fn test_pvc_player_always_guesses() {
    let mut ctl = MatchController::new(MatchConfig::default());
    ctl.start_match(MatchMode::PvC).unwrap();
    let mut words = WordQueue::new(["CAT", "DOG", "EMU"]);

    for _ in 0..3 {
        assert_eq!(ctl.guesser(), Seat::Primary);
        assert_eq!(ctl.word_setter(), Seat::Secondary);
        let word = ctl.start_round_from(&mut words).unwrap().secret_word();
        solve(&mut ctl, &word);
        ctl.settle_round().unwrap();
        ctl.next_round().unwrap();
    }

    assert_eq!(ctl.scores(), ScoreLedger { primary: 300, secondary: 0 });
    assert!(matches!(
        ctl.start_round("CAT", Seat::Secondary),
        Err(MatchError::InvalidRole(_))
    ));
}

#[test]
fn test_word_source_is_drawn_once_per_round() {
    let mut ctl = MatchController::new(MatchConfig::default());
    ctl.start_match(MatchMode::PvC).unwrap();
    let mut words = WordQueue::new(["CAT"]);

    ctl.start_round_from(&mut words).unwrap();
    assert!(words.is_empty());
    assert!(words.select_random_word().is_err());
}

// =========================================================================
// Lifecycle
// =========================================================================

#[test]
fn test_full_match_ends_with_winner() {
    let mut ctl = MatchController::new(MatchConfig::default())
        .with_roster(Roster::new("Liga", "Maris"));
    ctl.start_match(MatchMode::PvP).unwrap();

    ctl.start_round("RUST", Seat::Primary).unwrap();
    solve(&mut ctl, "RUST");
    ctl.settle_round().unwrap();
    ctl.next_round().unwrap();

    ctl.start_round("QQQ", Seat::Secondary).unwrap();
    fail(&mut ctl);
    ctl.settle_round().unwrap();

    let result = ctl.end_match().unwrap();

    assert_eq!(result, MatchResult::PrimaryWins);
    let winner = result.winner().unwrap();
    assert_eq!(ctl.roster().unwrap().name(winner), "Liga");
    assert_eq!(ctl.state(), MatchState::Finished);
}

#[test]
fn test_double_apply_leaves_scores_unchanged() {
    let mut ctl = pvp();
    ctl.start_round("CAT", Seat::Primary).unwrap();
    solve(&mut ctl, "CAT");
    ctl.apply_outcome(RoundOutcome::Won).unwrap();

    let err = ctl.apply_outcome(RoundOutcome::Won).unwrap_err();

    assert!(matches!(err, MatchError::OutcomeAlreadyApplied));
    assert_eq!(ctl.scores(), ScoreLedger { primary: 100, secondary: 0 });
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut ctl = pvp();
    ctl.start_round("CAT", Seat::Primary).unwrap();
    ctl.guess_char('C').unwrap();

    let json = serde_json::to_value(ctl.snapshot()).unwrap();

    assert_eq!(json["state"], "InProgress");
    assert_eq!(json["mode"], "PvP");
    assert_eq!(json["guesser"], "Primary");
    assert_eq!(json["scores"]["primary"], 0);
    assert_eq!(json["round"]["outcome"], "InProgress");
}

#[test]
fn test_config_mistake_limit_applies_to_rounds() {
    let mut ctl = MatchController::new(MatchConfig {
        max_mistakes: 3,
        ..MatchConfig::default()
    });
    ctl.start_match(MatchMode::PvC).unwrap();
    ctl.start_round("QQQ", Seat::Primary).unwrap();
    fail(&mut ctl);

    assert_eq!(ctl.round().unwrap().outcome(), RoundOutcome::Lost);
    assert_eq!(ctl.round().unwrap().progress_indicator(), 3);
}
