// A cell of the backing array.
//
// A deleted slot keeps its element. Probes must continue past it, and an
// equal element inserted later revives the slot in place.
#[derive(Clone)]
pub enum Slot<T> {
    // Never written since the last allocation or clear.
    Empty,
    // Holds a live element counted in the table length.
    Active(T),
    // Holds a removed element. Not counted, but still part of probe chains.
    Deleted(T),
}

impl<T> Slot<T> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, Slot::Active(_))
    }

    // The element stored in this slot, live or deleted.
    #[inline]
    pub fn element(&self) -> Option<&T> {
        match self {
            Slot::Empty => None,
            Slot::Active(x) | Slot::Deleted(x) => Some(x),
        }
    }

    // The element stored in this slot, if it is live.
    #[inline]
    pub fn active(&self) -> Option<&T> {
        match self {
            Slot::Active(x) => Some(x),
            _ => None,
        }
    }

    // Takes the live element out of this slot, leaving it empty.
    #[inline]
    pub fn take_active(&mut self) -> Option<T> {
        match std::mem::replace(self, Slot::Empty) {
            Slot::Active(x) => Some(x),
            _ => None,
        }
    }

    // Turns a live slot into a tombstone. Returns `false` if the slot was not live.
    #[inline]
    pub fn deactivate(&mut self) -> bool {
        match std::mem::replace(self, Slot::Empty) {
            Slot::Active(x) => {
                *self = Slot::Deleted(x);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }
}
