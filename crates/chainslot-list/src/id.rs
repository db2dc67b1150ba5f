//! Typed physical positions.
//!
//! A [`SlotId`] names one slot of an [`ArenaList`](crate::ArenaList)'s
//! backing array. Index 0 is the list's sentinel and is never handed out,
//! so the id wraps a `NonZeroUsize` and `Option<SlotId>` stands in for the
//! "no position" value without a reserved integer.

use std::fmt;
use std::num::NonZeroUsize;

/// Physical position of a slot inside an [`ArenaList`](crate::ArenaList).
///
/// Ids stay valid until the slot is deleted or the list is sorted or
/// cleared. Growth only appends capacity, so live ids survive it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(NonZeroUsize);

impl SlotId {
    /// Wrap a raw physical index. Returns `None` for the sentinel index 0.
    pub fn new(index: usize) -> Option<Self> {
        NonZeroUsize::new(index).map(Self)
    }

    /// The raw physical index.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Id of a slot the list knows to be live.
    pub(crate) fn live(index: usize) -> Self {
        Self::new(index).expect("the sentinel is never a live slot")
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SlotId> for usize {
    fn from(id: SlotId) -> Self {
        id.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_index_has_no_id() {
        assert!(SlotId::new(0).is_none());
    }

    #[test]
    fn id_round_trips_index() {
        let id = SlotId::new(17).unwrap();
        assert_eq!(id.get(), 17);
        assert_eq!(usize::from(id), 17);
        assert_eq!(id.to_string(), "17");
    }

    #[test]
    fn optional_id_is_pointer_sized() {
        assert_eq!(
            std::mem::size_of::<Option<SlotId>>(),
            std::mem::size_of::<usize>()
        );
    }
}
