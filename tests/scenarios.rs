use serde::Deserialize;

use czech_draughts::board::{BoardBuilder, GameResult, MoveError};
use czech_draughts::cli::parse_move;
use czech_draughts::engine::TurnStatus;
use czech_draughts::{Board, Color, Game, Square};

#[derive(Deserialize)]
struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    #[serde(default)]
    start: bool,
    #[serde(default)]
    white_men: Vec<String>,
    #[serde(default)]
    black_men: Vec<String>,
    #[serde(default)]
    white_kings: Vec<String>,
    #[serde(default)]
    black_kings: Vec<String>,
    to_move: String,
    moves: Vec<Step>,
    white: usize,
    black: usize,
    side_to_move: String,
    result: String,
}

#[derive(Deserialize)]
struct Step {
    play: String,
    expect: String,
    #[serde(default)]
    promoted: bool,
}

fn color(name: &str) -> Color {
    match name {
        "white" => Color::White,
        "black" => Color::Black,
        other => panic!("unknown color {other}"),
    }
}

fn square(name: &str) -> Square {
    name.parse().unwrap_or_else(|e| panic!("bad square {name}: {e}"))
}

fn position(scenario: &Scenario) -> Board {
    if scenario.start {
        return Board::new();
    }
    let mut builder = BoardBuilder::new();
    for sq in &scenario.white_men {
        builder = builder.man(square(sq), Color::White);
    }
    for sq in &scenario.black_men {
        builder = builder.man(square(sq), Color::Black);
    }
    for sq in &scenario.white_kings {
        builder = builder.king(square(sq), Color::White);
    }
    for sq in &scenario.black_kings {
        builder = builder.king(square(sq), Color::Black);
    }
    builder.build()
}

fn label(result: &Result<czech_draughts::engine::PlayOutcome, MoveError>) -> &'static str {
    match result {
        Ok(outcome) => match outcome.status {
            TurnStatus::Passed { .. } => "passed",
            TurnStatus::MustContinue { .. } => "continue",
            TurnStatus::GameOver { .. } => "game_over",
        },
        Err(MoveError::Illegal { .. }) => "illegal",
        Err(MoveError::ForcedCaptureSkipped { .. }) => "penalty",
        Err(MoveError::ContinuationRequired { .. }) => "continuation_required",
        Err(MoveError::GameFinished { .. }) => "finished",
    }
}

#[test]
fn scenario_suite() {
    let data = include_str!("data/scenarios.json");
    let set: ScenarioSet = serde_json::from_str(data).expect("invalid scenarios.json");
    assert!(!set.scenarios.is_empty());

    for scenario in &set.scenarios {
        let mut game = Game::from_board(position(scenario), color(&scenario.to_move));

        for step in &scenario.moves {
            let mv = parse_move(&step.play)
                .unwrap_or_else(|e| panic!("{}: bad move {}: {e}", scenario.name, step.play));
            let result = game.play(mv);
            assert_eq!(
                label(&result),
                step.expect,
                "{}: {} gave {:?}",
                scenario.name,
                step.play,
                result
            );
            if let Ok(outcome) = &result {
                assert_eq!(outcome.promoted, step.promoted, "{}: {}", scenario.name, step.play);
            }
        }

        let board = game.board();
        assert_eq!(board.count(Color::White), scenario.white, "{}", scenario.name);
        assert_eq!(board.count(Color::Black), scenario.black, "{}", scenario.name);
        assert_eq!(
            game.side_to_move(),
            color(&scenario.side_to_move),
            "{}",
            scenario.name
        );

        let expected = match scenario.result.as_str() {
            "in_progress" => GameResult::InProgress,
            winner => GameResult::Win(color(winner)),
        };
        assert_eq!(game.result(), expected, "{}", scenario.name);
    }
}
