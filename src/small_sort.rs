/// Sort `values` in non-decreasing order with insertion sort.
///
/// Quadratic in the worst case and linear on already sorted input. Used as the base case for
/// ranges below the cutoff, where the small constant beats another partition pass.
#[inline(never)]
pub fn insertion_sort<T: Ord + Copy>(values: &mut [T]) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        while j > 0 && values[j - 1] > key {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = key;
    }
}

/// Check if a slice is sorted in non-decreasing order.
#[inline]
pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_sort_reverse() {
        let mut values: Vec<u32> = (0..15).rev().collect();
        insertion_sort(&mut values);
        assert_eq!(values, (0..15).collect::<Vec<u32>>());
    }

    #[test]
    fn test_insertion_sort_duplicates() {
        let mut values = vec![5_u64, 2, 8, 2, 5, 1, 8, 3];
        insertion_sort(&mut values);
        assert_eq!(values, vec![1, 2, 2, 3, 5, 5, 8, 8]);
    }

    #[test]
    fn test_insertion_sort_subrange_only() {
        let mut values = vec![9_u16, 4, 3, 2, 1, 0];
        insertion_sort(&mut values[1..5]);
        assert_eq!(values, vec![9, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_insertion_sort_trivial() {
        let mut empty: Vec<u8> = vec![];
        insertion_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![7_u8];
        insertion_sort(&mut single);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[1, 2, 3, 4, 5]));
        assert!(is_sorted(&[1, 1, 1, 1]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted::<u32>(&[]));
        assert!(!is_sorted(&[5, 4, 3, 2, 1]));
        assert!(!is_sorted(&[1, 3, 2]));
    }
}
