use crate::board::{col_to_index, row_to_index, Move, MoveParseError, Square};

/// A line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    /// Offer the opponent a draw
    Draw,
    /// List the moves available right now
    Moves,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, MoveParseError> {
    let trimmed = line.trim();
    let cmd = match trimmed.to_ascii_lowercase().as_str() {
        "" => return Err(MoveParseError::Empty),
        "draw" => Command::Draw,
        "moves" => Command::Moves,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Move(parse_move(trimmed)?),
    };
    Ok(cmd)
}

/// Parse `"<col><row>,<col><row>"`, e.g. `"a3,b4"`.
pub fn parse_move(input: &str) -> Result<Move, MoveParseError> {
    let tokens: Vec<&str> = input.split(',').map(str::trim).collect();
    let &[from, to] = &tokens[..] else {
        return Err(MoveParseError::WrongTokenCount {
            found: tokens.len(),
        });
    };
    Ok(Move::new(parse_square(from)?, parse_square(to)?))
}

fn parse_square(token: &str) -> Result<Square, MoveParseError> {
    let mut chars = token.chars();
    let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(MoveParseError::InvalidLength {
            token: token.to_string(),
        });
    };

    let col = col_to_index(col).ok_or(MoveParseError::InvalidColumn { char: col })?;
    let row = row_to_index(row).ok_or(MoveParseError::InvalidRow { char: row })?;
    Ok(Square(row, col))
}
