//! Random-array check for the hybrid radix sort.
//!
//! Sorts random `u32` arrays with values below 2^30 and verifies the result against
//! `sort_unstable`. Array sizes are taken from the command line:
//!
//! ```text
//! cargo run --release --features harness --bin radix_check -- 100000 1000000
//! ```

use std::process;
use std::time::Instant;

use bit_radix_sort::{is_sorted, RadixSorter};
use rand::Rng;

const DEFAULT_SIZES: [usize; 2] = [100_000, 1_000_000];
const MAX_VALUE: u32 = (1 << 30) - 1;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let sizes: Vec<usize> = if args.is_empty() {
        DEFAULT_SIZES.to_vec()
    } else {
        args.iter().filter_map(|arg| arg.parse().ok()).collect()
    };

    let sorter = RadixSorter::new();
    let mut rng = rand::thread_rng();
    let mut failures = 0;

    println!("Hybrid radix sort check (cutoff {})", sorter.cutoff());

    for size in sizes {
        let data: Vec<u32> = (0..size).map(|_| rng.gen_range(0..=MAX_VALUE)).collect();

        let mut expected = data.clone();
        let std_start = Instant::now();
        expected.sort_unstable();
        let std_duration = std_start.elapsed();

        let mut values = data;
        let radix_start = Instant::now();
        let stats = sorter.sort_with_stats(&mut values);
        let radix_duration = radix_start.elapsed();

        let ok = is_sorted(&values) && values == expected;
        println!(
            "\n{} elements: radix {:.3} ms, sort_unstable {:.3} ms",
            size,
            radix_duration.as_secs_f64() * 1000.0,
            std_duration.as_secs_f64() * 1000.0
        );
        println!(
            "  passes {}, partitioned {}, swaps {}, insertion sorts {}, max stack depth {}",
            stats.partition_passes,
            stats.elements_partitioned,
            stats.swaps,
            stats.insertion_sorts,
            stats.max_stack_depth
        );

        if ok {
            println!("  verified: OK");
        } else {
            println!("  ERROR: output is not sorted");
            failures += 1;
        }
    }

    if failures > 0 {
        process::exit(1);
    }
}
