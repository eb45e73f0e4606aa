//! Game controller implementation.

use crate::board::{
    AppliedMove, Board, Color, GameResult, Move, MoveError, MoveList, NextTurn, Square,
};

/// Where the game stands between moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The side to move may play any move
    AwaitingMove,
    /// The side to move is mid multi-jump and must play one of `jumps`
    Continuing { from: Square, jumps: MoveList },
    /// The game has been won
    Finished(Color),
}

/// What a successful [`Game::play`] call led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    /// The turn is over and `next` is to move
    Passed { next: Color },
    /// The same side must jump again from `from`
    MustContinue { from: Square, jumps: MoveList },
    /// The completed turn ended the game
    GameOver { winner: Color },
}

/// Report of a move that was played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    pub mv: Move,
    pub captured: Option<Square>,
    pub promoted: bool,
    pub status: TurnStatus,
}

/// A single game: the board, whose turn it is, and any jump chain in
/// progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    phase: Phase,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    /// A game continuing from an arbitrary position.
    ///
    /// The position is checked for a decided result straight away.
    #[must_use]
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let phase = match board.outcome() {
            GameResult::Win(winner) => Phase::Finished(winner),
            GameResult::InProgress => Phase::AwaitingMove,
        };
        Game {
            board,
            side_to_move,
            phase,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        match self.phase {
            Phase::Finished(winner) => GameResult::Win(winner),
            _ => GameResult::InProgress,
        }
    }

    /// Moves the side to move can play right now without penalty.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        match &self.phase {
            Phase::AwaitingMove => self.board.legal_moves(self.side_to_move),
            Phase::Continuing { jumps, .. } => jumps.clone(),
            Phase::Finished(_) => MoveList::new(),
        }
    }

    /// Play a move for the side to move.
    ///
    /// Mid-chain, only the listed continuations are accepted and anything
    /// else is rejected without touching the board. A skipped capture is
    /// rejected too, but costs the side the piece that should have jumped;
    /// if that leaves it unable to play the game ends.
    pub fn play(&mut self, mv: Move) -> Result<PlayOutcome, MoveError> {
        let side = self.side_to_move;
        match &self.phase {
            Phase::Finished(winner) => {
                return Err(MoveError::GameFinished { winner: *winner });
            }
            Phase::Continuing { from, jumps } => {
                if !jumps.contains(&mv) {
                    return Err(MoveError::ContinuationRequired {
                        from: *from,
                        options: jumps.clone(),
                    });
                }
            }
            Phase::AwaitingMove => {
                if let Err(err) = self.board.validate(mv, side) {
                    if matches!(err, MoveError::ForcedCaptureSkipped { .. }) {
                        if let GameResult::Win(winner) = self.board.outcome() {
                            log::info!("{winner} won after the forced-capture penalty");
                            self.phase = Phase::Finished(winner);
                        }
                    }
                    return Err(err);
                }
            }
        }

        let applied = self.board.apply(mv, side);
        Ok(self.finish_move(applied))
    }

    fn finish_move(&mut self, applied: AppliedMove) -> PlayOutcome {
        let status = match applied.next {
            NextTurn::Continue { from, jumps, .. } => {
                self.phase = Phase::Continuing {
                    from,
                    jumps: jumps.clone(),
                };
                TurnStatus::MustContinue { from, jumps }
            }
            NextTurn::Pass(next) => {
                self.side_to_move = next;
                match self.board.outcome() {
                    GameResult::Win(winner) => {
                        log::info!("{winner} won");
                        self.phase = Phase::Finished(winner);
                        TurnStatus::GameOver { winner }
                    }
                    GameResult::InProgress => {
                        log::info!("switched player to {next}");
                        self.phase = Phase::AwaitingMove;
                        TurnStatus::Passed { next }
                    }
                }
            }
        };

        PlayOutcome {
            mv: applied.mv,
            captured: applied.captured,
            promoted: applied.promoted,
            status,
        }
    }
}
