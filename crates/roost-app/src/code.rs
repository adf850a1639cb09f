//! Fixed-length code buffer.
//!
//! A [`Code`] is the ordered sequence of cells the user types into. Its
//! length is fixed for the lifetime of one verification attempt and every
//! slot holds either nothing or exactly one character.

use std::fmt;

use crate::IncompleteError;

/// Ordered fixed-length sequence of single-character slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    slots: Vec<Option<char>>,
}

impl Code {
    /// Create an empty code with `length` slots.
    pub fn new(length: usize) -> Self {
        Self { slots: vec![None; length] }
    }

    /// Number of slots.
    pub fn length(&self) -> usize {
        self.slots.len()
    }

    /// Character in slot `index`. `None` if empty or out of range.
    pub fn get(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Slot `index` holds a character.
    pub fn is_filled(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Every slot holds a character.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of slots holding a character.
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// All slots in order.
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// Write `value` into slot `index`.
    ///
    /// Returns `false` (and leaves the code untouched) if `index` is out of
    /// range.
    pub fn set(&mut self, index: usize, value: Option<char>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            },
            None => false,
        }
    }

    /// Concatenate all slots in order.
    ///
    /// Fails with [`IncompleteError`] if any slot is empty. Never mutates the
    /// code.
    pub fn assemble(&self) -> Result<CompleteCode, IncompleteError> {
        self.slots
            .iter()
            .copied()
            .collect::<Option<String>>()
            .map(CompleteCode)
            .ok_or(IncompleteError { required: self.length() })
    }
}

/// A fully populated code, assembled in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompleteCode(String);

impl CompleteCode {
    /// Code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CompleteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
