use super::mv;
use crate::board::{
    Board, BoardBuilder, Cell, Color, IllegalMoveReason, MoveError, MoveKind, Square,
};

fn reason(result: Result<MoveKind, MoveError>) -> IllegalMoveReason {
    match result {
        Err(MoveError::Illegal { reason, .. }) => reason,
        other => panic!("expected an illegal move, got {other:?}"),
    }
}

#[test]
fn test_opening_step_accepted() {
    let mut board = Board::new();
    assert_eq!(
        board.validate(mv((2, 0), (3, 1)), Color::White),
        Ok(MoveKind::Step)
    );
    assert_eq!(board, Board::new(), "validation must not move pieces");
}

#[test]
fn test_cannot_move_opponent_or_empty_square() {
    let mut board = Board::new();
    assert_eq!(
        reason(board.validate(mv((5, 1), (4, 0)), Color::White)),
        IllegalMoveReason::NotOwnPiece
    );
    assert_eq!(
        reason(board.validate(mv((3, 1), (4, 2)), Color::White)),
        IllegalMoveReason::NotOwnPiece
    );
}

#[test]
fn test_destination_must_be_empty() {
    let mut board = Board::new();
    assert_eq!(
        reason(board.validate(mv((1, 1), (2, 2)), Color::White)),
        IllegalMoveReason::DestinationOccupied
    );
}

#[test]
fn test_move_must_be_diagonal() {
    let mut board = Board::new();
    assert_eq!(
        reason(board.validate(mv((2, 0), (3, 0)), Color::White)),
        IllegalMoveReason::NotDiagonal
    );
}

#[test]
fn test_man_steps_one_square_forward() {
    let mut board = BoardBuilder::new()
        .man(Square(3, 3), Color::White)
        .man(Square(6, 6), Color::Black)
        .build();
    assert_eq!(
        reason(board.validate(mv((3, 3), (5, 5)), Color::White)),
        IllegalMoveReason::ManMustStepOne
    );
    assert_eq!(
        reason(board.validate(mv((3, 3), (2, 2)), Color::White)),
        IllegalMoveReason::ManMustMoveForward
    );
    assert_eq!(
        board.validate(mv((6, 6), (5, 5)), Color::Black),
        Ok(MoveKind::Step)
    );
    assert_eq!(
        reason(board.validate(mv((6, 6), (7, 7)), Color::Black)),
        IllegalMoveReason::ManMustMoveForward
    );
}

#[test]
fn test_king_moves_any_distance() {
    let mut board = BoardBuilder::new()
        .king(Square(0, 0), Color::White)
        .man(Square(3, 3), Color::White)
        .man(Square(7, 1), Color::Black)
        .build();
    // No path check: the king passes over its own man.
    assert_eq!(
        board.validate(mv((0, 0), (6, 6)), Color::White),
        Ok(MoveKind::Step)
    );
    assert_eq!(
        board.validate(mv((0, 0), (1, 1)), Color::White),
        Ok(MoveKind::Step)
    );
}

#[test]
fn test_capture_accepted_first() {
    let mut board = BoardBuilder::new()
        .man(Square(2, 5), Color::White)
        .man(Square(3, 4), Color::Black)
        .build();
    assert_eq!(
        board.validate(mv((2, 5), (4, 3)), Color::White),
        Ok(MoveKind::Capture {
            captured: Square(3, 4)
        })
    );
}

#[test]
fn test_skipped_capture_removes_first_jumper() {
    let mut board = BoardBuilder::new()
        .man(Square(1, 2), Color::White)
        .man(Square(2, 1), Color::Black)
        .man(Square(4, 5), Color::White)
        .man(Square(5, 6), Color::Black)
        .man(Square(0, 6), Color::White)
        .build();

    let result = board.validate(mv((0, 6), (1, 7)), Color::White);
    assert_eq!(
        result,
        Err(MoveError::ForcedCaptureSkipped {
            removed: Square(1, 2),
            required: mv((1, 2), (3, 0)),
        })
    );
    assert!(board.get(Square(1, 2)).is_empty());
    assert_eq!(board.get(Square(4, 5)), Cell::Man(Color::White));
    assert_eq!(board.get(Square(0, 6)), Cell::Man(Color::White));
    assert_eq!(board.count(Color::White), 2);
}

#[test]
fn test_playing_the_second_jump_is_still_a_capture() {
    let mut board = BoardBuilder::new()
        .man(Square(1, 2), Color::White)
        .man(Square(2, 1), Color::Black)
        .man(Square(4, 5), Color::White)
        .man(Square(5, 6), Color::Black)
        .build();

    assert_eq!(
        board.validate(mv((4, 5), (6, 7)), Color::White),
        Ok(MoveKind::Capture {
            captured: Square(5, 6)
        })
    );
    assert_eq!(board.count(Color::White), 2);
}

#[test]
fn test_penalty_precedes_ownership_check() {
    let mut board = BoardBuilder::new()
        .man(Square(2, 1), Color::White)
        .man(Square(3, 2), Color::Black)
        .build();

    // Even nonsense input costs the piece when a capture was due.
    let result = board.validate(mv((6, 6), (6, 7)), Color::White);
    assert!(matches!(
        result,
        Err(MoveError::ForcedCaptureSkipped { removed, .. }) if removed == Square(2, 1)
    ));
    assert_eq!(board.count(Color::White), 0);
}

#[test]
fn test_backward_man_hop_is_a_capture() {
    let mut board = BoardBuilder::new()
        .man(Square(4, 4), Color::White)
        .man(Square(3, 3), Color::Black)
        .build();
    assert_eq!(
        board.validate(mv((4, 4), (2, 2)), Color::White),
        Ok(MoveKind::Capture {
            captured: Square(3, 3)
        })
    );
    assert_eq!(board.count(Color::Black), 1);
}

#[test]
fn test_backward_capture_is_not_a_skipped_jump() {
    // White also has a forward jump elsewhere; the backward capture still
    // counts as capturing and costs nothing.
    let mut board = BoardBuilder::new()
        .man(Square(1, 2), Color::White)
        .man(Square(2, 1), Color::Black)
        .man(Square(4, 4), Color::White)
        .man(Square(3, 3), Color::Black)
        .build();
    let before = board.clone();

    assert_eq!(
        board.validate(mv((4, 4), (2, 2)), Color::White),
        Ok(MoveKind::Capture {
            captured: Square(3, 3)
        })
    );
    assert_eq!(board, before);
}

#[test]
fn test_hop_over_own_piece_is_not_a_capture() {
    let mut board = BoardBuilder::new()
        .man(Square(4, 4), Color::White)
        .man(Square(3, 3), Color::White)
        .build();
    assert_eq!(
        reason(board.validate(mv((4, 4), (2, 2)), Color::White)),
        IllegalMoveReason::ManMustStepOne
    );
}
