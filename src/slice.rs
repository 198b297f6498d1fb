use crate::error::Error;
use crate::sources::{range_step, Range};

/// Iterator that yields only the elements at selected source positions.
///
/// The selected positions come from pairing the source with a target-index
/// `Range`; elements at non-selected positions are still pulled (so
/// upstream side effects and ordering are preserved) but discarded. Once
/// the last target index has been matched, the source is not pulled again.
pub struct Slice<I> {
    iter: I,
    targets: Range,
    next_target: Option<i64>,
    pos: i64,
}

/// Yields the elements of `iterable` at positions `[start, stop)`.
pub fn slice<I>(iterable: I, start: usize, stop: usize) -> Slice<I::IntoIter>
where
    I: IntoIterator,
{
    // Step 1 can never fail validation.
    slice_step(iterable, start, stop, 1).expect("slice with step 1 is always valid")
}

/// Yields the elements of `iterable` at positions `start`, `start + step`,
/// ... below `stop`.
///
/// The step must be positive: targets are positions in a forward-moving
/// source. Zero and negative steps are rejected before any pulling.
pub fn slice_step<I>(iterable: I, start: usize, stop: usize, step: i64) -> Result<Slice<I::IntoIter>, Error>
where
    I: IntoIterator,
{
    if step == 0 {
        return Err(Error::ZeroStep);
    }
    if step < 0 {
        return Err(Error::NegativeSliceStep(step));
    }
    let mut targets = range_step(start as i64, stop as i64, step)?;
    let next_target = targets.next();
    Ok(Slice {
        iter: iterable.into_iter(),
        targets,
        next_target,
        pos: 0,
    })
}

/// Yields the first `n` elements of `iterable`: the `(stop)` form of
/// `slice`.
pub fn take<I>(iterable: I, n: usize) -> Slice<I::IntoIter>
where
    I: IntoIterator,
{
    slice(iterable, 0, n)
}

impl<I> Iterator for Slice<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let target = self.next_target?;
        loop {
            let x = self.iter.next()?;
            let pos = self.pos;
            self.pos += 1;
            if pos == target {
                self.next_target = self.targets.next();
                return Some(x);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{count, range};

    #[test]
    fn test_slice_window() {
        let mut it = slice(range(10), 2, 4);
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_slice_with_step() {
        let collected: Vec<i64> = slice_step(range(10), 1, 8, 3).unwrap().collect();
        assert_eq!(collected, vec![1, 4, 7]);
    }

    #[test]
    fn test_slice_empty_window() {
        assert_eq!(slice(range(10), 4, 4).count(), 0);
        assert_eq!(slice(range(10), 6, 2).count(), 0);
    }

    #[test]
    fn test_slice_empty_window_pulls_nothing() {
        let mut pulled = 0;
        let counting = range(10).inspect(|_| pulled += 1);
        let n = slice(counting, 3, 3).count();
        assert_eq!(n, 0);
        assert_eq!(pulled, 0);
    }

    #[test]
    fn test_slice_stop_past_end() {
        let collected: Vec<i64> = slice(range(3), 1, 100).collect();
        assert_eq!(collected, vec![1, 2]);
    }

    #[test]
    fn test_slice_rejects_zero_step() {
        assert_eq!(
            slice_step(range(10), 0, 5, 0).map(|_| ()).unwrap_err(),
            Error::ZeroStep
        );
    }

    #[test]
    fn test_slice_rejects_negative_step() {
        assert_eq!(
            slice_step(range(10), 0, 5, -2).map(|_| ()).unwrap_err(),
            Error::NegativeSliceStep(-2)
        );
    }

    #[test]
    fn test_slice_discards_but_still_pulls() {
        let mut pulled = Vec::new();
        let observed = range(10).inspect(|&x| pulled.push(x));
        let collected: Vec<i64> = slice_step(observed, 0, 6, 2).unwrap().collect();
        assert_eq!(collected, vec![0, 2, 4]);
        // Non-selected positions 1 and 3 were pulled and discarded; after
        // the final target nothing more was pulled.
        assert_eq!(pulled, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_take_bounds_unbounded_source() {
        let collected: Vec<i64> = take(count(0, 1), 3).collect();
        assert_eq!(collected, vec![0, 1, 2]);
    }
}
