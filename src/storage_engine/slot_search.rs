//! Backward slot scan used by index code to locate fixed-width records by
//! predicate instead of by offset.

use crate::storage_engine::RecordFile;
use crate::storage_engine::error::Result;

/// A fixed-width region of the file, as seen by a backward scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Start of the slot in the file.
    pub offset: u64,

    /// Decoded slot contents.
    pub bytes: Vec<u8>,
}

impl Slot {
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

/// Outcome of [`RecordFile::find`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOutcome<T> {
    /// The most recently written slot accepted by the search.
    Matched(Slot),

    /// No slot matched; carries whatever the miss handler returned.
    Missed(T),
}

impl<T> FindOutcome<T> {
    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// The matched slot, if any.
    pub fn matched(self) -> Option<Slot> {
        match self {
            Self::Matched(slot) => Some(slot),
            Self::Missed(_) => None,
        }
    }

    /// The miss handler's value, if the scan was exhausted.
    pub fn missed(self) -> Option<T> {
        match self {
            Self::Matched(_) => None,
            Self::Missed(value) => Some(value),
        }
    }
}

/// Caller strategy for [`RecordFile::find`].
///
/// Any state the search needs (the "seed") lives in the implementor and is
/// threaded through both callbacks.
pub trait SlotSearch {
    type Output;

    /// Called once per slot, newest first. Returning `true` stops the scan.
    fn matches(&mut self, file: &RecordFile, slot: &Slot) -> bool;

    /// Called exactly once when the scan reaches the start of the file
    /// without a match.
    ///
    /// `last` is the final slot examined (the one nearest offset 0), or `None`
    /// if the file was too short to hold a single slot. The handler gets
    /// mutable access to the file, e.g. to append a fresh slot.
    fn on_miss(self, file: &mut RecordFile, last: Option<Slot>) -> Result<Self::Output>;
}

/// Adapts a predicate closure and a miss closure into a [`SlotSearch`].
pub struct FnSearch<P, M> {
    predicate: P,
    miss: M,
}

impl<P, M> FnSearch<P, M> {
    pub fn new(predicate: P, miss: M) -> Self {
        Self { predicate, miss }
    }
}

impl<P, M, T> SlotSearch for FnSearch<P, M>
where
    P: FnMut(&Slot) -> bool,
    M: FnOnce(&mut RecordFile, Option<Slot>) -> Result<T>,
{
    type Output = T;

    #[inline]
    fn matches(&mut self, _file: &RecordFile, slot: &Slot) -> bool {
        (self.predicate)(slot)
    }

    fn on_miss(self, file: &mut RecordFile, last: Option<Slot>) -> Result<T> {
        (self.miss)(file, last)
    }
}
