//! Region-granular dispatch.

use core::fmt::Debug;

use super::MAX_CYCLES;

/// Splits a cycle domain into tagged regions.
///
/// `region` must be a pure function of `n`: the same input always yields the
/// same tag.
pub trait Classifier {
    /// Region tag.
    type Region: Copy + Eq + Debug;

    /// Number of cycle positions. Valid indices are `0..MAX`.
    const MAX: usize;

    /// Region that cycle `n` belongs to.
    fn region(n: usize) -> Self::Region;
}

/// Receives region boundaries and elapsed lengths from a [`SubrangeDispatcher`].
pub trait SubrangeTarget<R, A: ?Sized = ()> {
    /// A run of `region` begins at cycle `position`.
    fn begin(&mut self, region: R, position: usize);

    /// `length` cycles of `region` have elapsed.
    fn advance(&mut self, region: R, length: usize, args: &mut A);

    /// A run of `region` ends; `position` is one past its last cycle.
    fn end(&mut self, region: R, position: usize);
}

/// A maximal span `start..end` of cycles sharing one region tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<R> {
    /// Tag the classifier gives every cycle of the run.
    pub region: R,
    /// First cycle of the run.
    pub start: usize,
    /// One past the last cycle.
    pub end: usize,
}

impl<R> Run<R> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Converts a cycle range into region begin/advance/end calls.
///
/// The runs of the classifier are tabulated once at construction, along with
/// a cycle-to-run index, so each dispatch jumps directly to the run holding
/// `begin` and then walks forward run by run.
///
/// For each run that intersects `[begin, end)`:
///
/// 1. `begin(region, run.start)` if the run's true start lies in the range;
///    a range that opens mid-run is assumed to follow an earlier call that
///    already announced the run.
/// 2. `advance(region, overlap)` exactly once.
/// 3. `end(region, run.end)` if the range reaches the run's true end.
///
/// Nothing further is emitted once the next run starts at or after `end`.
pub struct SubrangeDispatcher<C: Classifier> {
    runs: Vec<Run<C::Region>>,
    run_at: Vec<u16>,
}

impl<C: Classifier> SubrangeDispatcher<C> {
    #[must_use]
    pub fn new() -> Self {
        const { assert!(C::MAX < MAX_CYCLES) };

        let mut runs: Vec<Run<C::Region>> = Vec::new();
        let mut run_at = Vec::with_capacity(C::MAX);
        for n in 0..C::MAX {
            let region = C::region(n);
            match runs.last_mut() {
                Some(run) if run.region == region => run.end = n + 1,
                _ => runs.push(Run {
                    region,
                    start: n,
                    end: n + 1,
                }),
            }
            // MAX_CYCLES keeps run indices well inside u16.
            run_at.push((runs.len() - 1) as u16);
        }

        Self { runs, run_at }
    }

    /// Runs partitioning `0..C::MAX`, in order.
    #[must_use]
    pub fn runs(&self) -> &[Run<C::Region>] {
        &self.runs
    }

    /// The run containing cycle `n`.
    #[must_use]
    pub fn run_containing(&self, n: usize) -> Option<&Run<C::Region>> {
        let index = *self.run_at.get(n)?;
        self.runs.get(usize::from(index))
    }

    /// Issue region calls for the cycles `begin..end`.
    ///
    /// Requires `begin <= end <= C::MAX`. An empty range emits nothing.
    pub fn dispatch<T, A>(&self, target: &mut T, begin: usize, end: usize, args: &mut A)
    where
        T: SubrangeTarget<C::Region, A>,
        A: ?Sized,
    {
        debug_assert!(
            begin <= end && end <= C::MAX,
            "dispatch range {begin}..{end} outside 0..{}",
            C::MAX
        );
        if begin >= end {
            return;
        }

        let first = usize::from(self.run_at[begin]);
        for run in &self.runs[first..] {
            if run.start >= end {
                return;
            }

            if run.start >= begin {
                target.begin(run.region, run.start);
            }

            let clipped_begin = begin.max(run.start);
            let clipped_end = end.min(run.end);
            target.advance(run.region, clipped_end - clipped_begin, args);

            if clipped_end == run.end {
                target.end(run.region, run.end);
            }
        }
    }
}

impl<C: Classifier> Default for SubrangeDispatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}
