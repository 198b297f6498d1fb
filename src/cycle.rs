/// Iterator that replays its source forever.
///
/// While the source is still active every pulled element is saved into an
/// internal cache; once the source exhausts, the cache is replayed from the
/// beginning indefinitely. The cache holds one clone of every source
/// element, so the source must be finite for the replay phase to ever be
/// reached. Cycling an unbounded source is a misuse, not a supported mode.
pub struct Cycle<I>
where
    I: Iterator,
{
    source: Option<I>,
    saved: Vec<I::Item>,
    pos: usize,
}

/// Repeats the elements of `iterable` endlessly, in order.
///
/// An empty source yields an empty cycle rather than spinning.
pub fn cycle<I>(iterable: I) -> Cycle<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Cycle {
        source: Some(iterable.into_iter()),
        saved: Vec::new(),
        pos: 0,
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(source) = &mut self.source {
            match source.next() {
                Some(x) => {
                    self.saved.push(x.clone());
                    return Some(x);
                }
                None => self.source = None,
            }
        }

        // Replay phase.
        if self.saved.is_empty() {
            return None;
        }
        let x = self.saved[self.pos].clone();
        self.pos = (self.pos + 1) % self.saved.len();
        Some(x)
    }
}
