use crate::error::Error;

/// Unbounded arithmetic sequence: `start`, `start + step`, `start + 2*step`, ...
///
/// Never exhausts; bound it with `take` or `slice` before materializing.
#[derive(Debug, Clone)]
pub struct Count {
    next: i64,
    step: i64,
}

/// Returns consecutive integers starting at `start`, advancing by `step`.
pub fn count(start: i64, step: i64) -> Count {
    Count { next: start, step }
}

impl Iterator for Count {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.next;
        self.next += self.step;
        Some(current)
    }
}

/// Half-open integer range `[start, stop)` with a signed step.
///
/// Exhausts once the cursor reaches or passes `stop` in the step's
/// direction. A range whose bounds are already crossed at construction is
/// empty, not an error.
#[derive(Debug, Clone)]
pub struct Range {
    next: i64,
    stop: i64,
    step: i64,
}

/// Returns the range `[0, stop)` with step 1.
pub fn range(stop: i64) -> Range {
    range_from(0, stop)
}

/// Returns the range `[start, stop)` with step 1.
pub fn range_from(start: i64, stop: i64) -> Range {
    Range {
        next: start,
        stop,
        step: 1,
    }
}

/// Returns the range `[start, stop)` advancing by `step`.
///
/// A negative step counts down toward `stop`. A zero step is rejected
/// before any element is produced.
pub fn range_step(start: i64, stop: i64, step: i64) -> Result<Range, Error> {
    if step == 0 {
        return Err(Error::ZeroStep);
    }
    Ok(Range {
        next: start,
        stop,
        step,
    })
}

impl Iterator for Range {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.step > 0 && self.next >= self.stop {
            return None;
        }
        if self.step < 0 && self.next <= self.stop {
            return None;
        }
        let current = self.next;
        self.next += self.step;
        Some(current)
    }
}

/// Repeats a single value, forever or a fixed number of times.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    remaining: Option<usize>,
}

/// Repeats `value` indefinitely.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat {
        value,
        remaining: None,
    }
}

/// Repeats `value` exactly `n` times.
pub fn repeat_n<T: Clone>(value: T, n: usize) -> Repeat<T> {
    Repeat {
        value,
        remaining: Some(n),
    }
}

impl<T: Clone> Iterator for Repeat<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.remaining {
            Some(0) => None,
            Some(ref mut n) => {
                *n -= 1;
                Some(self.value.clone())
            }
            None => Some(self.value.clone()),
        }
    }
}
