use std::collections::VecDeque;

/// Iterator that concatenates a sequence of inner iterables.
///
/// Advances to the next inner iterable exactly when the current one
/// signals exhaustion; the whole chain exhausts only after the last inner
/// iterable does.
pub struct Chain<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    outer: O,
    inner: Option<<O::Item as IntoIterator>::IntoIter>,
}

/// Concatenates the iterables produced by `iterables` into one sequence.
pub fn chain<I>(iterables: I) -> Chain<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    Chain {
        outer: iterables.into_iter(),
        inner: None,
    }
}

/// Flattens one level of nesting: each element of `iterables` is itself
/// iterated in order.
///
/// Same machinery as `chain`; the two names reflect the caller's intent
/// (many sequences as one, versus a sequence of sequences).
pub fn flatten<I>(iterables: I) -> Chain<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    chain(iterables)
}

impl<O> Iterator for Chain<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    type Item = <O::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(x) = inner.next() {
                    return Some(x);
                }
                self.inner = None;
            }
            match self.outer.next() {
                Some(iterable) => self.inner = Some(iterable.into_iter()),
                None => return None,
            }
        }
    }
}

/// Iterator that pairs elements drawn from two upstreams in lockstep.
pub struct Zip<A, B> {
    a: A,
    b: B,
}

/// Pairs elements of `a` and `b`, stopping at the shorter input.
///
/// On the losing step one element has already been pulled from the longer
/// side; it is discarded. That asymmetry is part of the contract, not a
/// defect: the pull that discovers exhaustion cannot be undone.
pub fn zip<A, B>(a: A, b: B) -> Zip<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    Zip {
        a: a.into_iter(),
        b: b.into_iter(),
    }
}

impl<A, B> Iterator for Zip<A, B>
where
    A: Iterator,
    B: Iterator,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<(A::Item, B::Item)> {
        let x = self.a.next()?;
        let y = self.b.next()?;
        Some((x, y))
    }
}

/// Iterator that interleaves several upstreams round-robin.
pub struct Weave<I> {
    iters: VecDeque<I>,
}

/// Yields one element from each iterable in turn, cycling until every
/// input is exhausted. Inputs that run out drop out of the rotation.
pub fn weave<I>(iterables: I) -> Weave<<I::Item as IntoIterator>::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    Weave {
        iters: iterables.into_iter().map(IntoIterator::into_iter).collect(),
    }
}

impl<I> Iterator for Weave<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while let Some(mut iter) = self.iters.pop_front() {
            if let Some(x) = iter.next() {
                self.iters.push_back(iter);
                return Some(x);
            }
            // Exhausted input leaves the rotation.
        }
        None
    }
}
