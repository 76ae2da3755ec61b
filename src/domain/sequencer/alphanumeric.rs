//! Mixed-radix odometer over letters and digits.
//!
//! Every position counts independently over its own alphabet: `0..=9` if it
//! holds a digit, `A..=Z` if it holds a letter. Stepping a position past the
//! end of its alphabet resets it and carries into the position on its left.

use super::Direction;

/// Lexical successor of `code`, or `None` if every position is at its maximum.
pub fn successor(code: &str) -> Option<String> {
    step(code, Direction::Successor)
}

/// Lexical predecessor of `code`, or `None` if every position is at its minimum.
pub fn predecessor(code: &str) -> Option<String> {
    step(code, Direction::Predecessor)
}

fn step(code: &str, direction: Direction) -> Option<String> {
    if !code.is_ascii() {
        return None;
    }

    let mut symbols = code.as_bytes().to_vec();

    for position in (0..symbols.len()).rev() {
        let symbol = symbols[position];
        match wrap(symbol, direction) {
            // Exhausted: reset and carry into the next position on the left.
            Some(reset) => symbols[position] = reset,
            None => {
                symbols[position] = match direction {
                    Direction::Successor => symbol + 1,
                    Direction::Predecessor => symbol - 1,
                };
                return String::from_utf8(symbols).ok();
            }
        }
    }

    None
}

/// The symbol an exhausted position resets to, `None` if it can still move.
fn wrap(symbol: u8, direction: Direction) -> Option<u8> {
    match (direction, symbol) {
        (Direction::Successor, b'9') => Some(b'0'),
        (Direction::Successor, b'Z') => Some(b'A'),
        (Direction::Predecessor, b'0') => Some(b'9'),
        (Direction::Predecessor, b'A') => Some(b'Z'),
        _ => None,
    }
}
