//! Approximate move counting for PGN movetext.
//!
//! The count is only ever compared against other counts from the same
//! dataset, so it does not parse SAN or check legality.

/// Game result markers that never count as moves
pub const RESULT_MARKERS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Count the moves in a movetext string
///
/// Splits on whitespace and counts every token that is neither a move-number
/// marker (`12.` or `12...`) nor a game result marker.
///
/// ```
/// use ecotree_core::count_moves;
///
/// assert_eq!(count_moves("1. e4 e5 2. Nf3 Nc6 3. Bb5"), 5);
/// assert_eq!(count_moves("1. d4 d5 1-0"), 2);
/// assert_eq!(count_moves(""), 0);
/// ```
pub fn count_moves(pgn: &str) -> usize {
    pgn.split_whitespace()
        .filter(|token| !is_move_number(token) && !RESULT_MARKERS.contains(token))
        .count()
}

/// `12.` for white's move, `12...` when black's move is written alone
fn is_move_number(token: &str) -> bool {
    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    if digits_end == 0 {
        return false;
    }
    matches!(&token[digits_end..], "." | "...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_numbers_are_skipped() {
        assert_eq!(count_moves("1. e4"), 1);
        assert_eq!(count_moves("1. e4 e5 2. Nf3"), 3);
        assert_eq!(count_moves("12... Qxd5 13. O-O"), 2);
    }

    #[test]
    fn test_result_markers_are_skipped() {
        for marker in RESULT_MARKERS {
            let with_marker = format!("1. e4 e5 {}", marker);
            assert_eq!(count_moves(&with_marker), 2, "marker {}", marker);
        }
    }

    #[test]
    fn test_is_move_number() {
        assert!(is_move_number("1."));
        assert!(is_move_number("104."));
        assert!(is_move_number("7..."));
        assert!(!is_move_number("."));
        assert!(!is_move_number("..."));
        assert!(!is_move_number("7.."));
        assert!(!is_move_number("1.e4"));
        assert!(!is_move_number("e4"));
        assert!(!is_move_number("1-0"));
    }

    #[test]
    fn test_glued_move_number_counts_as_move() {
        // Not a marker on its own, so it counts once.
        assert_eq!(count_moves("1.e4 e5"), 2);
    }

    #[test]
    fn test_only_one_or_three_dots_mark_a_move_number() {
        assert_eq!(count_moves("12. e4"), 1);
        assert_eq!(count_moves("12... e5"), 1);
        assert_eq!(count_moves("12.. e5"), 2);
        assert_eq!(count_moves("12.... e5"), 2);
        assert!(!is_move_number("12...."));
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(count_moves("   \t\n "), 0);
    }
}
