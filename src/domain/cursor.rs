//! The persisted progress state of the alias allocator.

use crate::domain::alphabet;

/// Error raised when stored cursor state violates the counter invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    #[error("cursor must hold at least one digit")]
    Empty,

    #[error("digit {value} at position {position} is outside the alphabet")]
    DigitOutOfRange { position: usize, value: u8 },
}

/// A mixed-radix counter position over the code alphabet.
///
/// Digits are ordered most significant first and every value is below
/// [`alphabet::SIZE`]. The sequence always holds at least one entry, and the
/// current code length is exactly the number of digits, so the state cannot
/// drift into a length/digit mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    digits: Vec<u8>,
}

impl Cursor {
    /// The state allocation starts from: a single zero digit.
    pub fn initial() -> Self {
        Self { digits: vec![0] }
    }

    /// Builds a cursor from stored digit values, validating the invariant.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::Empty`] for an empty sequence and
    /// [`CursorError::DigitOutOfRange`] for any value outside the alphabet.
    pub fn from_digits(digits: Vec<u8>) -> Result<Self, CursorError> {
        if digits.is_empty() {
            return Err(CursorError::Empty);
        }
        for (position, &value) in digits.iter().enumerate() {
            if value as usize >= alphabet::SIZE {
                return Err(CursorError::DigitOutOfRange { position, value });
            }
        }
        Ok(Self { digits })
    }

    /// The all-zero cursor of the given length; the first state after the
    /// counter grows.
    pub(crate) fn zeroed(length: usize) -> Self {
        debug_assert!(length > 0);
        Self {
            digits: vec![0; length],
        }
    }

    /// Wraps digits the allocator has already advanced.
    ///
    /// The allocator only ever produces in-range values, so this skips the
    /// range check; the debug assertions hold the line in tests.
    pub(crate) fn from_advanced(digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|&d| (d as usize) < alphabet::SIZE));
        Self { digits }
    }

    /// Current code length.
    pub fn length(&self) -> usize {
        self.digits.len()
    }

    /// Digit values, most significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_is_single_zero() {
        let cursor = Cursor::initial();
        assert_eq!(cursor.length(), 1);
        assert_eq!(cursor.digits(), &[0]);
    }

    #[test]
    fn test_from_digits_accepts_valid_sequence() {
        let cursor = Cursor::from_digits(vec![5, 61, 0]).unwrap();
        assert_eq!(cursor.length(), 3);
        assert_eq!(cursor.digits(), &[5, 61, 0]);
    }

    #[test]
    fn test_from_digits_rejects_empty_sequence() {
        assert_eq!(Cursor::from_digits(vec![]), Err(CursorError::Empty));
    }

    #[test]
    fn test_from_digits_rejects_out_of_range_value() {
        assert_eq!(
            Cursor::from_digits(vec![0, 62]),
            Err(CursorError::DigitOutOfRange {
                position: 1,
                value: 62
            })
        );
    }

    #[test]
    fn test_zeroed_has_requested_length() {
        let cursor = Cursor::zeroed(3);
        assert_eq!(cursor.digits(), &[0, 0, 0]);
    }
}
