//! Structural invariant checking.
//!
//! [`ArenaList::validate`] walks both chains and reports the first broken
//! invariant. With `validate_on_mutation` set, every mutating call runs it
//! on entry and exit and panics on failure: a violation is a bug in the
//! list, never something a caller can recover from.

use crate::error::InvariantViolation;
use crate::list::ArenaList;
use crate::slot::NIL;

impl<T> ArenaList<T> {
    /// Check every structural invariant.
    ///
    /// Runs in O(capacity) time and allocates one bitmap of `capacity + 1`
    /// flags.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let capacity = self.capacity;
        let size = self.size;

        if size > capacity {
            return Err(InvariantViolation::SizeExceedsCapacity { size, capacity });
        }
        if self.slots.len() != capacity + 1 {
            return Err(InvariantViolation::StorageLength {
                expected: capacity + 1,
                actual: self.slots.len(),
            });
        }
        let sentinel = &self.slots[NIL];
        if sentinel.value.is_some() || sentinel.next != NIL || sentinel.prev != NIL {
            return Err(InvariantViolation::SentinelTouched);
        }

        let mut seen = vec![false; capacity + 1];
        self.check_free_chain(&mut seen)?;

        if size == 0 {
            if self.head != NIL || self.tail != NIL {
                return Err(InvariantViolation::EmptyListEnds {
                    head: self.head,
                    tail: self.tail,
                });
            }
            return match (1..=capacity).find(|&index| self.slots[index].prev != NIL) {
                Some(slot) => Err(InvariantViolation::StraySlot { slot }),
                None => Ok(()),
            };
        }

        self.check_live_chain(&mut seen)
    }

    /// Whether [`validate()`](Self::validate) passes.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Panic with a graph dump if validation is enabled and fails.
    #[inline]
    pub(crate) fn audit(&self, op: &'static str) {
        if !self.validate_on_mutation {
            return;
        }
        if let Err(violation) = self.validate() {
            log::error!("arena list invariant violated around {op}: {violation}");
            panic!(
                "arena list invariant violated around {op}: {violation}\n{}",
                self.to_dot(&format!("invalid list ({op})"))
            );
        }
    }

    fn check_link(&self, slot: usize, link: usize) -> Result<(), InvariantViolation> {
        if link > self.capacity {
            return Err(InvariantViolation::LinkOutOfRange { slot, link });
        }
        Ok(())
    }

    fn check_free_chain(&self, seen: &mut [bool]) -> Result<(), InvariantViolation> {
        let expected = self.capacity - self.size;
        let mut walked = 0;
        let mut from = NIL;
        let mut index = self.free_head;

        while index != NIL {
            self.check_link(from, index)?;
            if walked == expected {
                return Err(InvariantViolation::FreeListLength {
                    expected,
                    walked: walked + 1,
                });
            }
            if seen[index] {
                return Err(InvariantViolation::SharedSlot { slot: index });
            }
            seen[index] = true;

            let slot = &self.slots[index];
            if slot.prev != NIL || slot.value.is_some() {
                return Err(InvariantViolation::FreeSlotLinked { slot: index });
            }
            walked += 1;
            from = index;
            index = slot.next;
        }

        if walked != expected {
            return Err(InvariantViolation::FreeListLength { expected, walked });
        }
        Ok(())
    }

    fn check_live_chain(&self, seen: &mut [bool]) -> Result<(), InvariantViolation> {
        let (head, tail, size) = (self.head, self.tail, self.size);
        self.check_link(NIL, head)?;
        self.check_link(NIL, tail)?;
        if head == NIL
            || tail == NIL
            || self.slots[tail].prev != NIL
            || self.slots[head].next != NIL
        {
            return Err(InvariantViolation::DanglingEnds { head, tail });
        }

        // Forward: tail → head along `next`.
        let mut index = tail;
        let mut last = NIL;
        for rank in 1..=size {
            if index == NIL {
                return Err(InvariantViolation::ForwardWalk {
                    expected: size,
                    walked: rank - 1,
                });
            }
            if seen[index] {
                return Err(InvariantViolation::SharedSlot { slot: index });
            }
            seen[index] = true;

            let slot = &self.slots[index];
            if slot.value.is_none() || slot.this != index || (slot.prev == NIL) != (index == tail)
            {
                return Err(InvariantViolation::LiveSlotBroken { slot: index });
            }
            self.check_link(index, slot.next)?;
            self.check_link(index, slot.prev)?;
            if slot.next != NIL && self.slots[slot.next].prev != index {
                return Err(InvariantViolation::LiveSlotBroken { slot: index });
            }
            if self.sorted && index != tail + rank - 1 {
                return Err(InvariantViolation::UnsortedRun { rank, slot: index });
            }
            last = index;
            index = slot.next;
        }
        if index != NIL {
            return Err(InvariantViolation::ForwardWalk {
                expected: size,
                walked: size + 1,
            });
        }
        if last != head {
            return Err(InvariantViolation::DanglingEnds { head, tail });
        }

        // Backward: head → tail along `prev`.
        let mut index = head;
        let mut walked = 0;
        while index != NIL && walked <= size {
            walked += 1;
            index = self.slots[index].prev;
        }
        if walked != size || index != NIL {
            return Err(InvariantViolation::BackwardWalk {
                expected: size,
                walked,
            });
        }
        Ok(())
    }
}
