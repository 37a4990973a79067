//! The pure allocation step: render the current alias, advance the counter.

use crate::domain::alphabet;
use crate::domain::cursor::Cursor;

/// Alias capacity is spent: every code up to the maximum configured length
/// has been issued.
///
/// This is a write-path condition only. Lookups of previously issued aliases
/// are unaffected, and every further allocation attempt fails the same way
/// without touching the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("alias capacity exhausted: all codes up to length {max_length} are spent")]
pub struct Exhausted {
    pub max_length: usize,
}

/// One successful allocation step.
///
/// `alias` is the code to hand out; `next` is the cursor state that must be
/// committed before the alias is used anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub alias: String,
    pub next: Cursor,
}

/// Renders the alias at `cursor` and computes the follow-up state.
///
/// The digit sequence behaves like an odometer: the least significant digit
/// is incremented and overflow carries leftward. When every digit overflows,
/// the current length is fully enumerated and the counter grows by one
/// digit, restarting from all zeros; the call that triggers growth still
/// returns the final alias of the old length.
///
/// Growth beyond `max_length` is refused: the call returns [`Exhausted`],
/// issues nothing, and leaves the caller's cursor as-is, so repeated calls
/// at the terminal state fail identically. A cursor already longer than
/// `max_length` (the configured maximum was lowered between runs) is
/// treated the same way.
pub fn advance(cursor: &Cursor, max_length: usize) -> Result<Allocation, Exhausted> {
    if cursor.length() > max_length {
        return Err(Exhausted { max_length });
    }

    let mut digits = cursor.digits().to_vec();
    for position in (0..digits.len()).rev() {
        digits[position] += 1;
        if (digits[position] as usize) < alphabet::SIZE {
            return Ok(Allocation {
                alias: render(cursor),
                next: Cursor::from_advanced(digits),
            });
        }
        digits[position] = 0;
    }

    // The carry ran past the most significant digit: every code of the
    // current length is now spent.
    if cursor.length() + 1 > max_length {
        return Err(Exhausted { max_length });
    }

    Ok(Allocation {
        alias: render(cursor),
        next: Cursor::zeroed(cursor.length() + 1),
    })
}

/// Maps each cursor digit through the alphabet, most significant first.
fn render(cursor: &Cursor) -> String {
    cursor
        .digits()
        .iter()
        .map(|&d| alphabet::symbol_at(d as usize))
        .collect()
}
