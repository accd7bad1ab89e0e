// In-place MSD radix sort on single bits, see
// https://en.wikipedia.org/wiki/Radix_sort#In-place_MSD_radix_sort_implementations
// Recursion is replaced by an explicit stack. The smaller side of every split is handled
// right away and only the larger side is deferred, which keeps the stack at O(log n) tasks.

use crate::{insertion_sort, RadixKey, DEFAULT_CUTOFF};
use log::{debug, trace};

/// Counters collected while sorting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of ranges split on a bit.
    pub partition_passes: usize,
    /// Sum of the lengths of all partitioned ranges.
    pub elements_partitioned: usize,
    pub swaps: usize,
    /// Number of ranges finished with insertion sort.
    pub insertion_sorts: usize,
    /// Tasks pushed to the work stack, not counting the initial one.
    pub tasks_deferred: usize,
    /// Largest number of tasks live on the work stack at once.
    pub max_stack_depth: usize,
}

/// A deferred range `start..end` that still has to be split on `bit` and below.
#[derive(Clone, Copy, Debug)]
struct Task {
    start: usize,
    end: usize,
    bit: u32,
}

/// Upper bound for the number of live tasks when sorting `len` values.
///
/// Every task pushed while working on a range is at most as large as that range, and the range
/// kept in the inner loop at least halves with each push.
#[inline]
fn max_stack_depth(len: usize) -> usize {
    (len | 1).ilog2() as usize + 1
}

/// Index of the highest bit that can differ between two of the `values`.
///
/// Returns `None` when the slice is empty or all values are zero, bits above the returned
/// index are zero for every value.
pub fn initial_bit_index<T: RadixKey>(values: &[T]) -> Option<u32> {
    values.iter().max().and_then(|max| max.highest_set_bit())
}

/// Partition `values` so that all values with `bit` clear come before all values with `bit` set.
///
/// Returns the number of values with `bit` clear, which is also the index of the first value
/// with `bit` set. The relative order inside each group is not preserved.
pub fn partition_by_bit<T: RadixKey>(values: &mut [T], bit: u32) -> usize {
    partition_counting_swaps(values, bit).0
}

#[inline]
fn partition_counting_swaps<T: RadixKey>(values: &mut [T], bit: u32) -> (usize, usize) {
    let mut l = 0;
    let mut r = values.len();
    let mut swaps = 0;

    loop {
        while l < r && !values[l].bit(bit) {
            l += 1;
        }
        while l < r && values[r - 1].bit(bit) {
            r -= 1;
        }
        if l >= r {
            break;
        }
        // values[l] has the bit set and values[r - 1] has it clear, so they are distinct
        values.swap(l, r - 1);
        swaps += 1;
        l += 1;
        r -= 1;
    }

    debug_assert_eq!(l, r, "partition pointers must meet");
    debug_assert!(values[..l].iter().all(|v| !v.bit(bit)));
    debug_assert!(values[r..].iter().all(|v| v.bit(bit)));

    (l, swaps)
}

/// Hybrid iterative radix sorter for unsigned integers.
///
/// Ranges are split on one bit at a time starting from the highest bit in use, ranges smaller
/// than the cutoff are finished with insertion sort. The sort is in place and allocates only a
/// work stack of O(log n) tasks.
///
/// The sort is **not stable**: values that compare equal may be reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RadixSorter {
    cutoff: usize,
}

impl Default for RadixSorter {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixSorter {
    /// Sorter using [`DEFAULT_CUTOFF`].
    pub const fn new() -> Self {
        Self { cutoff: DEFAULT_CUTOFF }
    }

    /// Use insertion sort for ranges with fewer than `cutoff` values.
    ///
    /// Any value works, `0` and `1` partition all the way down to single values.
    pub const fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub const fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Sort `values` in place and return the same slice.
    ///
    /// Not stable, see [`RadixSorter`].
    pub fn sort<'a, T: RadixKey>(&self, values: &'a mut [T]) -> &'a mut [T] {
        self.sort_with_stats(values);
        values
    }

    /// Sort `values` in place and report what the sort did.
    #[inline(never)]
    pub fn sort_with_stats<T: RadixKey>(&self, values: &mut [T]) -> SortStats {
        let mut stats = SortStats::default();
        let len = values.len();

        if len <= 1 {
            return stats;
        }

        if len < self.cutoff {
            debug!("{} values below cutoff {}, using insertion sort", len, self.cutoff);
            insertion_sort(values);
            stats.insertion_sorts = 1;
            return stats;
        }

        let Some(top_bit) = initial_bit_index(values) else {
            debug!("all {} values are zero", len);
            return stats;
        };
        debug!("sorting {} values starting at bit {}", len, top_bit);

        let depth_limit = max_stack_depth(len);
        let mut stack = Vec::with_capacity(depth_limit + 1);
        stack.push(Task {
            start: 0,
            end: len,
            bit: top_bit,
        });
        stats.max_stack_depth = 1;

        while let Some(task) = stack.pop() {
            let (mut start, mut end) = (task.start, task.end);
            let mut bit = Some(task.bit);

            while let Some(b) = bit {
                if start >= end {
                    break;
                }

                let size = end - start;
                if size < self.cutoff {
                    insertion_sort(&mut values[start..end]);
                    stats.insertion_sorts += 1;
                    break;
                }

                let (zeros, swaps) = partition_counting_swaps(&mut values[start..end], b);
                stats.partition_passes += 1;
                stats.elements_partitioned += size;
                stats.swaps += swaps;

                let mid = start + zeros;
                let next = b.checked_sub(1);

                // ties keep the zero group
                let (keep, defer) = if zeros <= size - zeros {
                    ((start, mid), (mid, end))
                } else {
                    ((mid, end), (start, mid))
                };

                let (defer_start, defer_end) = defer;
                let defer_size = defer_end - defer_start;
                if defer_size == 0 {
                    // nothing to do
                } else if defer_size < self.cutoff {
                    insertion_sort(&mut values[defer_start..defer_end]);
                    stats.insertion_sorts += 1;
                } else if let Some(next_bit) = next {
                    stack.push(Task {
                        start: defer_start,
                        end: defer_end,
                        bit: next_bit,
                    });
                    stats.tasks_deferred += 1;
                    stats.max_stack_depth = stats.max_stack_depth.max(stack.len());
                    debug_assert!(stack.len() <= depth_limit, "work stack exceeded {}", depth_limit);
                } else {
                    // every bit was used to get here, so the group holds one repeated value
                    debug_assert!(all_equal(&values[defer_start..defer_end]));
                }

                (start, end) = keep;
                bit = next;
            }

            if bit.is_none() {
                debug_assert!(all_equal(&values[start..end]));
            }
        }

        trace!("radix sort of {} values finished: {:?}", len, stats);

        stats
    }
}

fn all_equal<T: RadixKey>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Sort `values` in place with [`DEFAULT_CUTOFF`] and return the same slice.
///
/// The sort is not stable.
pub fn sort_radix<T: RadixKey>(values: &mut [T]) -> &mut [T] {
    RadixSorter::new().sort(values)
}
