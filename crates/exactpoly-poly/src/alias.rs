//! Slot-addressed polynomial storage with aliasing-safe operations.
//!
//! A [`Workspace`] owns a set of polynomials, each named by a copyable
//! [`Slot`]. Operations take their outputs and inputs as slots, so a caller
//! may pass the same slot as both an output and an input (for example
//! `ws.mul(a, a, a)` squares `a` in place).
//!
//! Before touching any output, every operation compares the output slots
//! with the input slots. An output that is also an input is computed into
//! a scratch value and committed only once all inputs have been consumed,
//! so the result is the same as with distinct slots. An output that is not
//! read by the operation hands its old value to the operation; writers
//! built on `_into` routines (such as pseudo-division) reuse its
//! coefficient storage, the others replace it.

use std::fmt;

/// A handle to a polynomial stored in a [`Workspace`].
///
/// Two operands alias exactly when their slots are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(u32);

impl Slot {
    /// Returns the raw index of this slot.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Returns true if `out` names the same storage as any of `inputs`.
#[must_use]
pub fn aliases(out: Slot, inputs: &[Slot]) -> bool {
    inputs.contains(&out)
}

/// Owned storage for polynomials addressed by [`Slot`].
///
/// Storage is released when the workspace is dropped; individual slots can
/// be released early with [`Workspace::release`].
#[derive(Clone, Debug, Default)]
pub struct Workspace<P> {
    polys: Vec<P>,
}

impl<P: Default> Workspace<P> {
    /// Creates an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self { polys: Vec::new() }
    }

    /// Creates a workspace with room for `capacity` slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            polys: Vec::with_capacity(capacity),
        }
    }

    /// Allocates a slot holding the zero value.
    pub fn alloc(&mut self) -> Slot {
        self.insert(P::default())
    }

    /// Stores `poly` in a new slot.
    ///
    /// # Panics
    ///
    /// Panics if the workspace already holds `u32::MAX` slots.
    pub fn insert(&mut self, poly: P) -> Slot {
        let index = u32::try_from(self.polys.len()).expect("workspace capacity exceeded");
        self.polys.push(poly);
        Slot(index)
    }

    /// Returns the polynomial in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if the slot was not allocated by this workspace.
    #[must_use]
    pub fn get(&self, slot: Slot) -> &P {
        &self.polys[self.position(slot)]
    }

    /// Returns mutable access to the polynomial in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if the slot was not allocated by this workspace.
    pub fn get_mut(&mut self, slot: Slot) -> &mut P {
        let i = self.position(slot);
        &mut self.polys[i]
    }

    /// Stores `poly` in `slot`, returning the previous value.
    pub fn replace(&mut self, slot: Slot, poly: P) -> P {
        std::mem::replace(self.get_mut(slot), poly)
    }

    /// Moves the value out of `slot`, leaving the zero value.
    pub fn take(&mut self, slot: Slot) -> P {
        std::mem::take(self.get_mut(slot))
    }

    /// Resets `slot` to the zero value and frees its storage.
    pub fn release(&mut self, slot: Slot) {
        drop(self.take(slot));
    }

    /// Returns the number of allocated slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Returns true if no slot has been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    fn position(&self, slot: Slot) -> usize {
        let i = slot.0 as usize;
        assert!(i < self.polys.len(), "slot {slot} does not belong to this workspace");
        i
    }

    /// Runs `f` to produce the value of `out` from `inputs`.
    ///
    /// `f` receives the destination and the workspace for reading inputs.
    /// The destination holds the old value of `out` when `out` is not an
    /// input, and a fresh scratch value otherwise. `f` may reuse or
    /// overwrite it.
    pub(crate) fn write_one<F>(&mut self, out: Slot, inputs: &[Slot], f: F)
    where
        F: FnOnce(&mut P, &Self),
    {
        let i = self.position(out);
        let mut dst = if aliases(out, inputs) {
            P::default()
        } else {
            std::mem::take(&mut self.polys[i])
        };
        f(&mut dst, self);
        self.polys[i] = dst;
    }

    /// Runs `f` to produce the values of two distinct outputs from `inputs`.
    ///
    /// # Panics
    ///
    /// Panics if `first == second`.
    pub(crate) fn write_two<F>(&mut self, first: Slot, second: Slot, inputs: &[Slot], f: F)
    where
        F: FnOnce(&mut P, &mut P, &Self),
    {
        assert!(first != second, "output slots must be distinct");
        let i = self.position(first);
        let j = self.position(second);

        let fresh = |slot: Slot, index: usize, polys: &mut Vec<P>| {
            if aliases(slot, inputs) {
                P::default()
            } else {
                std::mem::take(&mut polys[index])
            }
        };
        let mut dst_first = fresh(first, i, &mut self.polys);
        let mut dst_second = fresh(second, j, &mut self.polys);

        f(&mut dst_first, &mut dst_second, self);
        self.polys[i] = dst_first;
        self.polys[j] = dst_second;
    }
}
