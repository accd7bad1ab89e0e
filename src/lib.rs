mod radix_key;
mod small_sort;
mod sort;

pub use radix_key::*;
pub use small_sort::*;
pub use sort::*;

// Below this many elements a range is finished with insertion sort.
// 16 keeps small ranges within a couple of cache lines for u32/u64 keys,
// larger values trade more comparisons for fewer partition passes.
pub const DEFAULT_CUTOFF: usize = 16;
