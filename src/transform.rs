/// Iterator that applies a function to each upstream element.
pub struct Map<I, F> {
    iter: I,
    f: F,
}

/// Applies `f` to every element of `iterable`.
pub fn map<I, F, R>(iterable: I, f: F) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
{
    Map {
        iter: iterable.into_iter(),
        f,
    }
}

impl<I, F, R> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.iter.next().map(&mut self.f)
    }
}

/// Iterator that applies a binary function to an upstream of pairs.
pub struct StarMap<I, F> {
    iter: I,
    f: F,
}

/// Applies `f(a, b)` to every `(a, b)` pair of `iterable`.
///
/// The unpacking counterpart of `map`, typically fed from `zip` or
/// `enumerate`.
pub fn starmap<I, A, B, F, R>(iterable: I, f: F) -> StarMap<I::IntoIter, F>
where
    I: IntoIterator<Item = (A, B)>,
    F: FnMut(A, B) -> R,
{
    StarMap {
        iter: iterable.into_iter(),
        f,
    }
}

impl<I, A, B, F, R> Iterator for StarMap<I, F>
where
    I: Iterator<Item = (A, B)>,
    F: FnMut(A, B) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let (a, b) = self.iter.next()?;
        Some((self.f)(a, b))
    }
}

/// Iterator that keeps only elements satisfying a predicate.
pub struct Filter<I, P> {
    iter: I,
    pred: P,
}

/// Keeps the elements of `iterable` for which `pred` returns true.
pub fn filter<I, P>(iterable: I, pred: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter {
        iter: iterable.into_iter(),
        pred,
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let x = self.iter.next()?;
            if (self.pred)(&x) {
                return Some(x);
            }
        }
    }
}

/// Iterator that keeps only elements failing a predicate.
pub struct FilterFalse<I, P> {
    iter: I,
    pred: P,
}

/// Keeps the elements of `iterable` for which `pred` returns false.
pub fn filterfalse<I, P>(iterable: I, pred: P) -> FilterFalse<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    FilterFalse {
        iter: iterable.into_iter(),
        pred,
    }
}

impl<I, P> Iterator for FilterFalse<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let x = self.iter.next()?;
            if !(self.pred)(&x) {
                return Some(x);
            }
        }
    }
}

/// Iterator that skips a leading run of elements satisfying a predicate.
pub struct DropWhile<I, P> {
    iter: I,
    pred: P,
    dropping: bool,
}

/// Drops elements while `pred` is true, then yields everything that
/// follows, starting with the element that first made `pred` false.
///
/// The predicate is evaluated once per candidate and never again after the
/// first false.
pub fn dropwhile<I, P>(iterable: I, pred: P) -> DropWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    DropWhile {
        iter: iterable.into_iter(),
        pred,
        dropping: true,
    }
}

impl<I, P> Iterator for DropWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if !self.dropping {
            return self.iter.next();
        }
        loop {
            let x = self.iter.next()?;
            if !(self.pred)(&x) {
                self.dropping = false;
                return Some(x);
            }
        }
    }
}

/// Iterator that yields a leading run of elements satisfying a predicate.
pub struct TakeWhile<I, P> {
    iter: I,
    pred: P,
    done: bool,
}

/// Yields elements while `pred` is true and stops permanently at the
/// first false, even if later elements would satisfy it again.
pub fn takewhile<I, P>(iterable: I, pred: P) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    TakeWhile {
        iter: iterable.into_iter(),
        pred,
        done: false,
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        let x = self.iter.next()?;
        if (self.pred)(&x) {
            Some(x)
        } else {
            self.done = true;
            None
        }
    }
}

/// Iterator that pairs each element with its position.
pub struct Enumerate<I> {
    iter: I,
    pos: usize,
}

/// Pairs every element of `iterable` with its zero-based index.
pub fn enumerate<I>(iterable: I) -> Enumerate<I::IntoIter>
where
    I: IntoIterator,
{
    Enumerate {
        iter: iterable.into_iter(),
        pos: 0,
    }
}

impl<I> Iterator for Enumerate<I>
where
    I: Iterator,
{
    type Item = (usize, I::Item);

    fn next(&mut self) -> Option<(usize, I::Item)> {
        let x = self.iter.next()?;
        let i = self.pos;
        self.pos += 1;
        Some((i, x))
    }
}
