//! End-to-end game and match tests.
//!
//! Games are driven by scripted sources, or by the console over in-memory
//! input, so every round is known in advance.

use std::io::Cursor;

use rpsls::console::Console;
use rpsls::core::{MatchConfig, Move::{self, *}, Score, Side};
use rpsls::engine::{
    play_game, run_match, GameResult, HumanChoice, MatchObserver, MatchSession, MatchTally,
    RandomOpponent, RoundOutcome, RoundRecord, ScriptedComputer, ScriptedHuman,
    ScriptedPlayAgain, SplitFrontend,
};
use rpsls::error::{GameError, Result};
use rpsls::rules::RuleTable;

/// Observer that keeps every event it sees.
#[derive(Default)]
struct Recorder {
    games_started: usize,
    rounds: Vec<(RoundOutcome, Score)>,
    withdrawals: Vec<Score>,
    finished: Vec<(Side, MatchTally)>,
}

impl MatchObserver<Move> for Recorder {
    fn game_started(&mut self, _config: &MatchConfig) -> Result<()> {
        self.games_started += 1;
        Ok(())
    }

    fn round_played(&mut self, record: &RoundRecord<Move>, score: &Score) -> Result<()> {
        self.rounds.push((record.outcome, *score));
        Ok(())
    }

    fn game_withdrawn(&mut self, score: &Score) -> Result<()> {
        self.withdrawals.push(*score);
        Ok(())
    }

    fn game_finished(&mut self, result: &GameResult<Move>, tally: &MatchTally) -> Result<()> {
        self.finished.push((result.winner, *tally));
        Ok(())
    }
}

fn frontend(
    choices: impl IntoIterator<Item = HumanChoice<Move>>,
    again: &[bool],
) -> SplitFrontend<ScriptedHuman<Move>, ScriptedPlayAgain, Recorder> {
    SplitFrontend::new(ScriptedHuman::new(choices), ScriptedPlayAgain::new(again.iter().copied()))
        .with_observer(Recorder::default())
}

fn play(choices: Vec<HumanChoice<Move>>, computer: &[Move]) -> GameResult<Move> {
    let table = RuleTable::canonical().unwrap();
    let mut human = frontend(choices, &[]);
    let mut computer = ScriptedComputer::new(computer.iter().copied());
    play_game(&table, &MatchConfig::new(), &mut human, &mut computer).unwrap()
}

#[test]
fn test_two_nil_stops_immediately() {
    let table = RuleTable::canonical().unwrap();
    let mut human = frontend([Rock, Rock, Rock].map(HumanChoice::Play), &[]);
    let mut computer = ScriptedComputer::new([Scissors]);

    let result = play_game(&table, &MatchConfig::new(), &mut human, &mut computer).unwrap();

    assert_eq!(result.winner, Side::Human);
    assert_eq!(result.score, Score::new(2, 0));
    // The third move is never asked for.
    assert_eq!(human.human.remaining(), 1);
    assert_eq!(computer.drawn(), 2);
}

#[test]
fn test_two_one_either_side() {
    let human_wins = play(
        [Rock, Rock, Rock].map(HumanChoice::Play).to_vec(),
        &[Lizard, Paper, Scissors],
    );
    assert_eq!(human_wins.winner, Side::Human);
    assert_eq!(human_wins.score, Score::new(2, 1));

    let computer_wins = play(
        [Paper, Paper, Paper].map(HumanChoice::Play).to_vec(),
        &[Lizard, Rock, Scissors],
    );
    assert_eq!(computer_wins.winner, Side::Computer);
    assert_eq!(computer_wins.score, Score::new(1, 2));
}

#[test]
fn test_draws_are_reported_but_not_scored() {
    let table = RuleTable::canonical().unwrap();
    let mut human = frontend([Spock, Spock, Spock, Spock].map(HumanChoice::Play), &[]);
    let mut computer = ScriptedComputer::new([Spock, Spock, Rock, Rock]);

    let result = play_game(&table, &MatchConfig::new(), &mut human, &mut computer).unwrap();

    assert_eq!(result.rounds.len(), 4);
    assert_eq!(result.score, Score::new(2, 0));
    let outcomes: Vec<_> = human.observer.rounds.iter().map(|(o, _)| *o).collect();
    assert_eq!(
        outcomes,
        vec![
            RoundOutcome::Draw,
            RoundOutcome::Draw,
            RoundOutcome::HumanWins,
            RoundOutcome::HumanWins,
        ]
    );
    assert_eq!(human.observer.rounds[1].1, Score::default());
}

#[test]
fn test_withdraw_while_leading_goes_to_computer() {
    let table = RuleTable::canonical().unwrap();
    let mut human = frontend([HumanChoice::Play(Rock), HumanChoice::Withdraw], &[]);
    let mut computer = ScriptedComputer::new([Lizard]);

    let result = play_game(&table, &MatchConfig::new(), &mut human, &mut computer).unwrap();

    assert!(result.abandoned);
    assert_eq!(result.winner, Side::Computer);
    assert_eq!(result.score, Score::new(1, 0));
    assert_eq!(human.observer.withdrawals, vec![Score::new(1, 0)]);
}

#[test]
fn test_withdraw_before_any_round() {
    let result = play(vec![HumanChoice::Withdraw], &[Rock]);
    assert!(result.abandoned);
    assert_eq!(result.winner, Side::Computer);
    assert!(result.rounds.is_empty());
}

#[test]
fn test_tally_across_games() {
    let table = RuleTable::canonical().unwrap();
    // Human beats Scissors with Rock, loses with Paper.
    let choices = [Rock, Rock, Paper, Paper, Rock, Rock].map(HumanChoice::Play);
    let mut human = frontend(choices, &[true, true, false]);
    let mut computer = ScriptedComputer::new([Scissors]);

    let summary = run_match(&table, MatchConfig::new(), &mut human, &mut computer).unwrap();

    assert_eq!(summary.human_games_won, 2);
    assert_eq!(summary.computer_games_won, 1);
    assert_eq!(summary.games_played, 3);

    let winners: Vec<_> = human.observer.finished.iter().map(|(w, _)| *w).collect();
    assert_eq!(winners, vec![Side::Human, Side::Computer, Side::Human]);
    assert_eq!(human.observer.games_started, 3);
}

#[test]
fn test_abandoned_game_counts_for_computer() {
    let table = RuleTable::canonical().unwrap();
    let choices = [HumanChoice::Play(Rock), HumanChoice::Withdraw];
    let mut human = frontend(choices, &[false]);
    let mut computer = ScriptedComputer::new([Scissors]);

    let summary = run_match(&table, MatchConfig::new(), &mut human, &mut computer).unwrap();

    assert_eq!(summary.human_games_won, 0);
    assert_eq!(summary.computer_games_won, 1);
}

#[test]
fn test_caller_can_stop_between_games() {
    let table = RuleTable::canonical().unwrap();
    let mut session = MatchSession::new(&table, MatchConfig::new()).unwrap();
    let mut human = frontend([Rock, Rock].map(HumanChoice::Play), &[]);
    let mut computer = ScriptedComputer::new([Lizard]);

    session.play_game(&mut human, &mut computer).unwrap();

    let summary = session.summary();
    assert_eq!(summary.games_played, 1);
    assert_eq!(summary.human_games_won, 1);
}

#[test]
fn test_best_of_five() {
    let table = RuleTable::canonical().unwrap();
    let config = MatchConfig::new().with_best_of(5).unwrap();
    let mut human = frontend([Rock; 5].map(HumanChoice::Play), &[]);
    let mut computer = ScriptedComputer::new([Scissors, Paper]);

    let result = play_game(&table, &config, &mut human, &mut computer).unwrap();

    assert_eq!(result.winner, Side::Human);
    assert_eq!(result.score, Score::new(3, 2));
}

#[test]
fn test_seeded_match_is_reproducible() {
    let table = RuleTable::canonical().unwrap();
    let run = |seed| {
        let choices = [Rock, Paper, Scissors, Lizard, Spock].repeat(4);
        let mut human = frontend(choices.into_iter().map(HumanChoice::Play), &[false]);
        let mut computer: RandomOpponent<Move> = RandomOpponent::seeded(seed);
        play_game(&table, &MatchConfig::new(), &mut human, &mut computer).unwrap()
    };

    assert_eq!(run(2024), run(2024));
}

#[test]
fn test_console_transcript() {
    let table = RuleTable::canonical().unwrap();
    // Invalid key, then Rock twice; empty answer plays again; then quit and decline.
    let input = "x\n1\n1\n\nq\nn\n";
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut computer = ScriptedComputer::new([Scissors]);

    let summary = run_match(&table, MatchConfig::new(), &mut console, &mut computer).unwrap();

    assert_eq!(summary.human_games_won, 1);
    assert_eq!(summary.computer_games_won, 1);
    assert_eq!(summary.games_played, 2);

    let out = String::from_utf8(console.into_parts().1).unwrap();
    assert!(out.contains("Ready to play Rock, Paper, Scissors, Lizard, Spock?"));
    assert!(out.contains("Best of 3.... Go!"));
    assert!(out.contains("Invalid move x"));
    assert!(out.contains("  HUMAN beats Computer (Rock beats Scissors)"));
    assert!(out.contains(
        " **** Human wins Best-Of-Three (Human=2, Computer=0 - game total is Human=1 Computer=0)"
    ));
    assert!(out.contains("Human quits Best-of-3..."));
    assert!(out.contains(
        " **** Computer wins Best-Of-Three (Human=0, Computer=0 - game total is Human=1 Computer=1)"
    ));
    assert!(out.contains("Thank you for playing. The final game score was Human=1 and Computer=1"));
}

#[test]
fn test_console_eof_ends_match() {
    let table = RuleTable::canonical().unwrap();
    let mut console = Console::new(Cursor::new(b"2\n".to_vec()), Vec::new());
    let mut computer = ScriptedComputer::new([Rock]);

    let summary = run_match(&table, MatchConfig::new(), &mut console, &mut computer).unwrap();

    // One round won, then input ran out: withdrawal and no second game.
    assert_eq!(summary.games_played, 1);
    assert_eq!(summary.computer_games_won, 1);
}

#[test]
fn test_console_survives_non_utf8_input() {
    let table = RuleTable::canonical().unwrap();
    let input = b"\xe9\n1\n1\nn\n".to_vec();
    let mut console = Console::new(Cursor::new(input), Vec::new());
    let mut computer = ScriptedComputer::new([Scissors]);

    let summary = run_match(&table, MatchConfig::new(), &mut console, &mut computer).unwrap();

    assert_eq!(summary.human_games_won, 1);
    assert_eq!(summary.games_played, 1);
    let out = String::from_utf8(console.into_parts().1).unwrap();
    assert!(out.contains("Invalid move \u{FFFD}"));
}

#[test]
fn test_broken_rules_stop_before_any_prompt() {
    let mut console = Console::new(Cursor::new(b"1\n".to_vec()), Vec::new());
    let mut computer = ScriptedComputer::new([Rock]);

    // Spock has no rule, and Rock beats itself.
    let result = RuleTable::builder()
        .rule(Rock, &[Rock, Scissors, Lizard])
        .rule(Paper, &[Rock, Spock])
        .rule(Scissors, &[Paper, Lizard])
        .rule(Lizard, &[Spock, Paper])
        .build()
        .and_then(|table| run_match(&table, MatchConfig::new(), &mut console, &mut computer));

    assert!(matches!(result, Err(GameError::RuleTableInvariant { .. })));
    let (input, output) = console.into_parts();
    assert!(output.is_empty());
    assert_eq!(input.position(), 0);
}
