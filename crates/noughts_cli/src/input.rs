//! Text-to-move parsing for the prompt loop.

use noughts_core::Move;

/// Parses a line of user input into a move.
///
/// The accepted shape is a row digit `1`-`3` followed by a column letter
/// `a`-`c`, case-insensitive, with surrounding whitespace ignored: `2b`
/// targets row 2, column b. Anything else returns `None` and the caller
/// re-prompts.
pub fn parse_move(input: &str) -> Option<Move> {
    let input = input.trim().to_lowercase();
    let mut chars = input.chars();
    let row = match chars.next()? {
        '1' => 0,
        '2' => 1,
        '3' => 2,
        _ => return None,
    };
    let col = match chars.next()? {
        'a' => 0,
        'b' => 1,
        'c' => 2,
        _ => return None,
    };
    if chars.next().is_some() {
        return None;
    }
    Some(Move::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_input() {
        assert_eq!(parse_move("1a"), Some(Move::new(0, 0)));
        assert_eq!(parse_move("2b"), Some(Move::new(1, 1)));
        assert_eq!(parse_move("3c"), Some(Move::new(2, 2)));
    }

    #[test]
    fn ignores_case_and_surrounding_whitespace() {
        assert_eq!(parse_move("2B"), Some(Move::new(1, 1)));
        assert_eq!(parse_move("  3A  "), Some(Move::new(2, 0)));
        assert_eq!(parse_move("1c\n"), Some(Move::new(0, 2)));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert_eq!(parse_move("4a"), None);
        assert_eq!(parse_move("0a"), None);
        assert_eq!(parse_move("2d"), None);
    }

    #[test]
    fn rejects_malformed_shapes() {
        assert_eq!(parse_move(""), None);
        assert_eq!(parse_move("x"), None);
        assert_eq!(parse_move("xx"), None);
        assert_eq!(parse_move("b2"), None);
        assert_eq!(parse_move("2"), None);
        assert_eq!(parse_move("2bb"), None);
        assert_eq!(parse_move("2 b"), None);
    }
}
