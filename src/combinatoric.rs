//! Combinatorial generators: permutations, combinations, combinations with
//! replacement, and cartesian product.
//!
//! Every generator materializes its (finite) input into an indexable pool
//! up front, then enumerates lazily by index arithmetic; no result is
//! computed before it is pulled. Exact output counts:
//!
//! - `permutations(pool, r)`: n! / (n-r)!
//! - `combinations(pool, r)`: C(n, r)
//! - `combinations_with_replacement(pool, r)`: C(n + r - 1, r)
//! - `product(pools)`: the product of the pool sizes
//!
//! `r > n` is not an error: it yields an empty sequence, consistent with
//! the counts above.

use smallvec::SmallVec;

/// Index arrays for small `r` live on the stack.
type IndexVec = SmallVec<[usize; 8]>;

/// Iterator over the r-length permutations of a pool.
///
/// `indices` is always a permutation of `0..n` whose first `r` entries
/// select the current output; `cycles[i]` counts down the rotations left
/// at position `i`.
pub struct Permutations<T> {
    pool: Vec<T>,
    indices: Vec<usize>,
    cycles: IndexVec,
    r: usize,
    started: bool,
    done: bool,
}

/// Yields all r-length permutations of `iterable`'s elements, in the
/// order that varies trailing positions fastest.
///
/// Emits n!/(n-r)! tuples; `r > n` yields nothing.
pub fn permutations<I>(iterable: I, r: usize) -> Permutations<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let pool: Vec<I::Item> = iterable.into_iter().collect();
    let n = pool.len();
    Permutations {
        done: r > n,
        indices: (0..n).collect(),
        // Meaningless (and underflowing) when r > n; the done flag makes
        // the state unreachable, so leave it empty.
        cycles: if r > n {
            IndexVec::new()
        } else {
            (0..r).map(|i| n - i).collect()
        },
        pool,
        r,
        started: false,
    }
}

/// Yields all full-length permutations of `iterable`'s elements: the
/// `r = n` form of `permutations`.
pub fn permutations_full<I>(iterable: I) -> Permutations<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let pool: Vec<I::Item> = iterable.into_iter().collect();
    let r = pool.len();
    permutations(pool, r)
}

impl<T: Clone> Permutations<T> {
    fn emit(&self) -> Vec<T> {
        self.indices[..self.r]
            .iter()
            .map(|&i| self.pool[i].clone())
            .collect()
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.emit());
        }

        let n = self.pool.len();
        // Scan from the last selected position toward the front. Each
        // position either swaps in its next candidate (emit) or has run
        // out of candidates (rotate, reset, carry on leftward).
        for i in (0..self.r).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = n - self.cycles[i];
                self.indices.swap(i, j);
                return Some(self.emit());
            }
        }

        // Every position carried: enumeration complete.
        self.done = true;
        None
    }
}

/// Iterator over the r-length combinations of a pool.
///
/// `indices` is strictly increasing; advancement is lexicographic over
/// index tuples.
pub struct Combinations<T> {
    pool: Vec<T>,
    indices: IndexVec,
    r: usize,
    started: bool,
    done: bool,
}

/// Yields all r-length combinations of `iterable`'s elements in
/// lexicographic order over pool indices.
///
/// Emits C(n, r) tuples; `r > n` yields nothing.
pub fn combinations<I>(iterable: I, r: usize) -> Combinations<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let pool: Vec<I::Item> = iterable.into_iter().collect();
    Combinations {
        done: r > pool.len(),
        indices: (0..r).collect(),
        pool,
        r,
        started: false,
    }
}

impl<T: Clone> Combinations<T> {
    fn emit(&self) -> Vec<T> {
        self.indices.iter().map(|&i| self.pool[i].clone()).collect()
    }
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.emit());
        }

        let n = self.pool.len();
        // Rightmost position that has not yet reached its ceiling.
        let mut i = self.r;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + n - self.r {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..self.r {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.emit())
    }
}

/// Iterator over the r-length combinations with repetition of a pool.
///
/// `indices` is non-decreasing; advancement is lexicographic.
pub struct CombinationsWithReplacement<T> {
    pool: Vec<T>,
    indices: IndexVec,
    r: usize,
    started: bool,
    done: bool,
}

/// Yields all r-length combinations of `iterable`'s elements where each
/// element may be chosen more than once.
///
/// Emits C(n + r - 1, r) tuples; an empty pool with `r > 0` yields
/// nothing.
pub fn combinations_with_replacement<I>(iterable: I, r: usize) -> CombinationsWithReplacement<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let pool: Vec<I::Item> = iterable.into_iter().collect();
    CombinationsWithReplacement {
        done: pool.is_empty() && r > 0,
        indices: (0..r).map(|_| 0).collect(),
        pool,
        r,
        started: false,
    }
}

impl<T: Clone> CombinationsWithReplacement<T> {
    fn emit(&self) -> Vec<T> {
        self.indices.iter().map(|&i| self.pool[i].clone()).collect()
    }
}

impl<T: Clone> Iterator for CombinationsWithReplacement<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.emit());
        }

        let n = self.pool.len();
        // Rightmost position below the last pool index; everything from
        // it rightward restarts at its new value.
        let mut i = self.r;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != n - 1 {
                break;
            }
        }
        let next = self.indices[i] + 1;
        for j in i..self.r {
            self.indices[j] = next;
        }
        Some(self.emit())
    }
}

/// Iterator over the cartesian product of several pools.
///
/// One independent index per pool; the rightmost index varies fastest,
/// matching nested-loop order with the leftmost pool outermost.
pub struct Product<T> {
    pools: Vec<Vec<T>>,
    indices: IndexVec,
    started: bool,
    done: bool,
}

/// Yields the cartesian product of the given pools.
///
/// The output count is the product of the pool sizes: any empty pool
/// empties the whole product, and zero pools yield a single empty tuple.
pub fn product<I>(pools: I) -> Product<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::Item: Clone,
{
    let pools: Vec<Vec<_>> = pools
        .into_iter()
        .map(|pool| pool.into_iter().collect())
        .collect();
    Product {
        done: pools.iter().any(Vec::is_empty),
        indices: (0..pools.len()).map(|_| 0).collect(),
        pools,
        started: false,
    }
}

impl<T: Clone> Product<T> {
    fn emit(&self) -> Vec<T> {
        self.pools
            .iter()
            .zip(self.indices.iter())
            .map(|(pool, &i)| pool[i].clone())
            .collect()
    }
}

impl<T: Clone> Iterator for Product<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.emit());
        }

        // Odometer advance from the rightmost pool.
        let mut i = self.pools.len();
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            self.indices[i] += 1;
            if self.indices[i] < self.pools[i].len() {
                break;
            }
            self.indices[i] = 0;
        }
        Some(self.emit())
    }
}
