//! Per-cycle dispatch.

use core::marker::PhantomData;

use super::MAX_CYCLES;

/// A component with one operation per cycle position.
///
/// `A` carries whatever extra state the caller threads through every call;
/// use `()` when there is none.
pub trait Sequencer<A: ?Sized = ()> {
    /// Number of cycle positions. Valid indices are `0..MAX`.
    const MAX: usize;

    /// Perform the work belonging to cycle `n`.
    fn perform(&mut self, n: usize, args: &mut A);
}

/// Calls [`Sequencer::perform`] for every index of a requested range.
///
/// Stateless; all work happens in [`RangeDispatcher::dispatch`].
pub struct RangeDispatcher<S>(PhantomData<S>);

impl<S> RangeDispatcher<S> {
    /// Perform `target.perform(n, args)` for each `n` in `begin..end`, in
    /// increasing order.
    ///
    /// Requires `begin <= end <= S::MAX`.
    pub fn dispatch<A: ?Sized>(target: &mut S, begin: usize, end: usize, args: &mut A)
    where
        S: Sequencer<A>,
    {
        const { assert!(<S as Sequencer<A>>::MAX < MAX_CYCLES) };
        debug_assert!(
            begin <= end && end <= <S as Sequencer<A>>::MAX,
            "dispatch range {begin}..{end} outside 0..{}",
            <S as Sequencer<A>>::MAX
        );

        // Decide once whether the end of the range needs watching at all.
        if end < <S as Sequencer<A>>::MAX {
            Self::dispatch_bounded(target, begin, end, args);
        } else {
            Self::dispatch_to_max(target, begin, args);
        }
    }

    /// Stops at `end`.
    pub(crate) fn dispatch_bounded<A: ?Sized>(
        target: &mut S,
        begin: usize,
        end: usize,
        args: &mut A,
    ) where
        S: Sequencer<A>,
    {
        for n in begin..end {
            target.perform(n, args);
        }
    }

    /// Runs through to the sequencer's constant bound.
    pub(crate) fn dispatch_to_max<A: ?Sized>(target: &mut S, begin: usize, args: &mut A)
    where
        S: Sequencer<A>,
    {
        for n in begin..<S as Sequencer<A>>::MAX {
            target.perform(n, args);
        }
    }
}
