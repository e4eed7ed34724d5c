use std::ops::ControlFlow;

use tinyvec::ArrayVec;

/// Largest subset or fish size searched.
pub(crate) const MAX_SIZE: usize = 4;

/// Visits every `k`-combination of `0..len` in lexicographic order until the
/// visitor breaks.
///
/// # Panics
///
/// Panics if `k` is zero or larger than [`MAX_SIZE`].
pub(crate) fn try_combinations<B, F>(len: usize, k: usize, mut visit: F) -> Option<B>
where
    F: FnMut(&[usize]) -> ControlFlow<B>,
{
    assert!(
        (1..=MAX_SIZE).contains(&k),
        "combination size {k} is outside 1..={MAX_SIZE}"
    );
    if k > len {
        return None;
    }

    let mut indices: ArrayVec<[usize; MAX_SIZE]> = (0..k).collect();
    loop {
        if let ControlFlow::Break(value) = visit(&indices) {
            return Some(value);
        }

        let mut i = k;
        loop {
            if i == 0 {
                return None;
            }
            i -= 1;
            if indices[i] < len - k + i {
                break;
            }
        }
        indices[i] += 1;
        for j in i + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}
