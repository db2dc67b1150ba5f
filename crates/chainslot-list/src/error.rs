//! List-specific error types.

use std::error::Error;
use std::fmt;

/// Errors reported by [`ArenaList`](crate::ArenaList) operations.
///
/// Every operation that returns one of these leaves the list untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// The physical position does not name a live slot.
    InvalidPosition {
        /// The rejected physical index.
        position: usize,
        /// Slot capacity of the list at the time of the call.
        capacity: usize,
    },
    /// A boundary deletion was requested on an empty list.
    Empty,
    /// Growing the slot array would overflow `usize`.
    CapacityOverflow {
        /// Capacity before the failed growth.
        capacity: usize,
        /// The configured growth factor.
        factor: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition { position, capacity } => {
                write!(
                    f,
                    "position {position} is not a live slot (capacity {capacity})"
                )
            }
            Self::Empty => write!(f, "list is empty"),
            Self::CapacityOverflow { capacity, factor } => {
                write!(
                    f,
                    "cannot grow capacity {capacity} by a factor of {factor} without overflow"
                )
            }
        }
    }
}

impl Error for ListError {}

/// Errors detected by [`ListConfig::validate()`](crate::ListConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The initial capacity is zero, so growth could never make room.
    ZeroCapacity,
    /// The growth factor must be at least 2.
    GrowthFactorTooSmall {
        /// The configured factor.
        configured: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "initial capacity must be at least 1"),
            Self::GrowthFactorTooSmall { configured } => {
                write!(f, "growth factor must be at least 2, got {configured}")
            }
        }
    }
}

impl Error for ConfigError {}

/// A broken structural invariant found by
/// [`ArenaList::validate()`](crate::ArenaList::validate).
///
/// These indicate a bug in the list itself, never a caller mistake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// More live nodes than slots.
    SizeExceedsCapacity {
        /// Live node count.
        size: usize,
        /// Slot capacity.
        capacity: usize,
    },
    /// The backing vector does not hold `capacity + 1` slots.
    StorageLength {
        /// Expected vector length.
        expected: usize,
        /// Actual vector length.
        actual: usize,
    },
    /// The sentinel slot carries a payload or links.
    SentinelTouched,
    /// A link points past the end of the slot array.
    LinkOutOfRange {
        /// Slot holding the link (0 for the list header).
        slot: usize,
        /// The offending link value.
        link: usize,
    },
    /// The free list does not contain exactly `capacity - size` slots.
    FreeListLength {
        /// Expected free slot count.
        expected: usize,
        /// Slots walked before the chain ended (or overran).
        walked: usize,
    },
    /// A free slot has a `prev` link or still holds a payload.
    FreeSlotLinked {
        /// The offending slot.
        slot: usize,
    },
    /// The same slot was reached twice, or through both chains.
    SharedSlot {
        /// The offending slot.
        slot: usize,
    },
    /// An empty list has non-null ends.
    EmptyListEnds {
        /// Head position.
        head: usize,
        /// Tail position.
        tail: usize,
    },
    /// A slot outside both chains is still linked or holds a payload.
    StraySlot {
        /// The offending slot.
        slot: usize,
    },
    /// A non-empty list has a null end, or an end with an outward link.
    DanglingEnds {
        /// Head position.
        head: usize,
        /// Tail position.
        tail: usize,
    },
    /// The walk from the tail along `next` did not cover exactly `size` slots.
    ForwardWalk {
        /// Expected live node count.
        expected: usize,
        /// Slots visited.
        walked: usize,
    },
    /// The walk from the head along `prev` did not cover exactly `size` slots.
    BackwardWalk {
        /// Expected live node count.
        expected: usize,
        /// Slots visited.
        walked: usize,
    },
    /// A live slot is missing its payload, its self index, or a mirrored link.
    LiveSlotBroken {
        /// The offending slot.
        slot: usize,
    },
    /// The sorted flag is set but a node is not at `tail + rank - 1`.
    UnsortedRun {
        /// 1-based logical rank of the node.
        rank: usize,
        /// Physical index where it was found.
        slot: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeExceedsCapacity { size, capacity } => {
                write!(f, "size {size} exceeds capacity {capacity}")
            }
            Self::StorageLength { expected, actual } => {
                write!(f, "slot storage holds {actual} slots, expected {expected}")
            }
            Self::SentinelTouched => write!(f, "sentinel slot 0 is in use"),
            Self::LinkOutOfRange { slot, link } => {
                write!(f, "slot {slot} links to out-of-range index {link}")
            }
            Self::FreeListLength { expected, walked } => {
                write!(f, "free list walked {walked} slots, expected {expected}")
            }
            Self::FreeSlotLinked { slot } => {
                write!(f, "free slot {slot} has a prev link or a payload")
            }
            Self::SharedSlot { slot } => write!(f, "slot {slot} reached twice"),
            Self::EmptyListEnds { head, tail } => {
                write!(f, "empty list has head {head} and tail {tail}")
            }
            Self::StraySlot { slot } => write!(f, "slot {slot} is in neither chain"),
            Self::DanglingEnds { head, tail } => {
                write!(f, "list ends are broken: head {head}, tail {tail}")
            }
            Self::ForwardWalk { expected, walked } => {
                write!(f, "forward walk visited {walked} nodes, expected {expected}")
            }
            Self::BackwardWalk { expected, walked } => {
                write!(f, "backward walk visited {walked} nodes, expected {expected}")
            }
            Self::LiveSlotBroken { slot } => write!(f, "live slot {slot} is malformed"),
            Self::UnsortedRun { rank, slot } => {
                write!(f, "sorted list has rank {rank} at physical slot {slot}")
            }
        }
    }
}

impl Error for InvariantViolation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_position_message_names_position() {
        let err = ListError::InvalidPosition {
            position: 7,
            capacity: 4,
        };
        assert_eq!(err.to_string(), "position 7 is not a live slot (capacity 4)");
    }

    #[test]
    fn growth_factor_message_names_value() {
        let err = ConfigError::GrowthFactorTooSmall { configured: 1 };
        assert!(err.to_string().contains("got 1"));
    }
}
