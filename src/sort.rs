use log::trace;

/// Sorts `data` ascending in place with Lomuto-partition quicksort.
///
/// Not stable. Recurses into the shorter partition and loops over the longer
/// one, so stack depth stays logarithmic even on sorted input.
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    trace!("quick_sort over {} elements", data.len());
    sort_range(data);
}

fn sort_range<T: Ord>(mut data: &mut [T]) {
    while data.len() > 1 {
        let pivot = partition(data);
        let (left, rest) = data.split_at_mut(pivot);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            sort_range(left);
            data = right;
        } else {
            sort_range(right);
            data = left;
        }
    }
}

/// Partitions around the last element and returns the pivot's final index.
/// Everything before it is `<=` the pivot, everything after is `>`.
fn partition<T: Ord>(data: &mut [T]) -> usize {
    let high = data.len() - 1;
    let mut boundary = 0;
    for j in 0..high {
        if data[j] <= data[high] {
            data.swap(boundary, j);
            boundary += 1;
        }
    }
    data.swap(boundary, high);
    boundary
}
