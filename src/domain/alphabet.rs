//! The fixed symbol set used to render counter digits as alias characters.

/// Ordered base-62 alphabet: digits, then uppercase, then lowercase letters.
///
/// The mapping from digit value to symbol is positional, so reordering or
/// replacing symbols changes the meaning of every previously issued alias.
const SYMBOLS: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Number of symbols in the alphabet, and therefore the radix of the
/// allocation counter.
pub const SIZE: usize = SYMBOLS.len();

/// Returns the symbol at `index`.
///
/// # Panics
///
/// Panics if `index >= SIZE`. Digit values are range-checked when a cursor
/// is constructed, so callers rendering cursor digits never hit this.
pub fn symbol_at(index: usize) -> char {
    SYMBOLS[index] as char
}
