//! The array element shared by live nodes and free-list entries.

/// Link value meaning "no slot". Also the index of the sentinel slot.
pub(crate) const NIL: usize = 0;

/// One element of the backing array.
///
/// Live slots hold `Some(value)`, record their own index in `this`, and are
/// chained through `next` (towards the head) and `prev` (towards the tail).
/// Free slots hold `None`, keep `prev == NIL`, and reuse `next` as the
/// free-list link.
#[derive(Clone, Debug)]
pub(crate) struct Slot<T> {
    pub(crate) value: Option<T>,
    pub(crate) next: usize,
    pub(crate) prev: usize,
    pub(crate) this: usize,
}

impl<T> Slot<T> {
    pub(crate) fn vacant() -> Self {
        Self {
            value: None,
            next: NIL,
            prev: NIL,
            this: NIL,
        }
    }
}
