// Integer slice helpers

/// Total of the slice, or `None` if it does not fit in an i64
pub fn sum(values: &[i64]) -> Option<i64> {
    values.iter().try_fold(0i64, |acc, &v| acc.checked_add(v))
}

/// Arithmetic mean; 0.0 for an empty slice
pub fn average(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let total: i128 = values.iter().map(|&v| i128::from(v)).sum();
    total as f64 / values.len() as f64
}

pub fn max(values: &[i64]) -> Option<i64> {
    values.iter().copied().max()
}

pub fn min(values: &[i64]) -> Option<i64> {
    values.iter().copied().min()
}

/// In-place bubble sort, stopping early once a pass makes no swaps
pub fn bubble_sort(values: &mut [i64]) {
    let len = values.len();
    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Index of `target` in an ascending slice
pub fn binary_search(values: &[i64], target: i64) -> Option<usize> {
    let (mut left, mut right) = (0usize, values.len());
    while left < right {
        let mid = left + (right - left) / 2;
        match values[mid].cmp(&target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => left = mid + 1,
            std::cmp::Ordering::Greater => right = mid,
        }
    }
    None
}

pub fn reverse(values: &mut [i64]) {
    values.reverse();
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [i64; 9] = [15, 3, 9, 21, 7, 12, 6, 18, 4];

    #[test]
    fn test_statistics() {
        assert_eq!(sum(&SAMPLE), Some(95));
        assert!((average(&SAMPLE) - 95.0 / 9.0).abs() < f64::EPSILON);
        assert_eq!(max(&SAMPLE), Some(21));
        assert_eq!(min(&SAMPLE), Some(3));
    }

    #[test]
    fn test_empty_slice() {
        assert_eq!(sum(&[]), Some(0));
        assert_eq!(average(&[]), 0.0);
        assert_eq!(max(&[]), None);
        assert_eq!(min(&[]), None);
        assert_eq!(binary_search(&[], 1), None);
    }

    #[test]
    fn test_sum_overflow() {
        assert_eq!(sum(&[i64::MAX, 1]), None);
        assert_eq!(sum(&[i64::MIN, -1]), None);
        assert_eq!(sum(&[i64::MAX, 1, -1]), None);
        assert_eq!(sum(&[i64::MAX, -1, 1]), Some(i64::MAX));
    }

    #[test]
    fn test_average_does_not_overflow() {
        let avg = average(&[i64::MAX, 1]);
        assert!((avg - (i64::MAX as f64 + 1.0) / 2.0).abs() < 1.0e3);
        assert_eq!(average(&[i64::MIN, i64::MIN]), i64::MIN as f64);
    }

    #[test]
    fn test_bubble_sort() {
        let mut values = SAMPLE;
        bubble_sort(&mut values);
        assert_eq!(values, [3, 4, 6, 7, 9, 12, 15, 18, 21]);

        let mut single = [1];
        bubble_sort(&mut single);
        assert_eq!(single, [1]);
    }

    #[test]
    fn test_binary_search() {
        let mut values = SAMPLE;
        bubble_sort(&mut values);
        assert_eq!(binary_search(&values, 12), Some(5));
        assert_eq!(binary_search(&values, 3), Some(0));
        assert_eq!(binary_search(&values, 21), Some(8));
        assert_eq!(binary_search(&values, 10), None);
    }

    #[test]
    fn test_reverse() {
        let mut values = [1, 2, 3];
        reverse(&mut values);
        assert_eq!(values, [3, 2, 1]);
    }
}
