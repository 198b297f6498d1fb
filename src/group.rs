//! Run grouping over a single shared cursor, plus its `compress` and
//! `pack` derivatives.

use std::cell::RefCell;
use std::rc::Rc;

/// The one cursor shared between a `GroupBy` parent and its current
/// subgroup.
///
/// `current_value` is the element most recently pulled from the source and
/// not yet handed out; `current_key` is its computed key, or `None` once
/// the source is exhausted. `generation` counts emitted subgroups and is
/// how a subgroup proves it is still the current one.
struct GroupCursor<I, F, K>
where
    I: Iterator,
{
    source: I,
    key_fn: F,
    current_key: Option<K>,
    current_value: Option<I::Item>,
    generation: u64,
}

impl<I, F, K> GroupCursor<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
{
    /// Pulls the source once, refreshing the current key/value pair, or
    /// clears both on exhaustion.
    fn advance(&mut self) {
        match self.source.next() {
            Some(x) => {
                self.current_key = Some((self.key_fn)(&x));
                self.current_value = Some(x);
            }
            None => {
                self.current_key = None;
                self.current_value = None;
            }
        }
    }
}

/// Iterator over `(key, subgroup)` pairs, one per run of equal keys.
///
/// The parent and the emitted subgroup advance the *same* cursor: elements
/// of a run that are still undrained when the next pair is requested are
/// pulled and discarded, permanently. A subgroup retained across that
/// boundary is stale and panics when pulled (see [`Group`]).
pub struct GroupBy<I, F, K>
where
    I: Iterator,
{
    cursor: Rc<RefCell<GroupCursor<I, F, K>>>,
    target_key: Option<K>,
}

/// Groups consecutive elements of `iterable` whose `key_fn` values are
/// equal, yielding each run as a `(key, subgroup)` pair.
///
/// Only adjacent elements are grouped: a key that reappears after a
/// different run starts a fresh group.
pub fn group_by<I, F, K>(iterable: I, key_fn: F) -> GroupBy<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Clone + PartialEq,
{
    GroupBy {
        cursor: Rc::new(RefCell::new(GroupCursor {
            source: iterable.into_iter(),
            key_fn,
            current_key: None,
            current_value: None,
            generation: 0,
        })),
        target_key: None,
    }
}

impl<I, F, K> Iterator for GroupBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Clone + PartialEq,
{
    type Item = (K, Group<I, F, K>);

    fn next(&mut self) -> Option<(K, Group<I, F, K>)> {
        let mut cursor = self.cursor.borrow_mut();

        // Pull (and discard) whatever remains of the current run. On the
        // very first call both keys are None, which also lands here and
        // primes the cursor.
        while cursor.current_key == self.target_key {
            cursor.advance();
            if cursor.current_value.is_none() {
                return None;
            }
        }

        let key = match cursor.current_key.clone() {
            Some(key) => key,
            // Source exhausted on an earlier call.
            None => return None,
        };
        self.target_key = Some(key.clone());
        cursor.generation += 1;
        let generation = cursor.generation;
        drop(cursor);

        Some((
            key.clone(),
            Group {
                cursor: Rc::clone(&self.cursor),
                key,
                generation,
            },
        ))
    }
}

/// One subgroup emitted by [`GroupBy`]: the values of a single run.
///
/// A subgroup is only valid while it is the parent's *current* group. It
/// holds the shared cursor plus the generation at which it was emitted;
/// once the parent advances, the generation no longer matches and the
/// subgroup is stale.
///
/// # Panics
///
/// Pulling a stale subgroup panics. Silently serving such a pull could
/// hand out elements of a later run that happens to share the key, so the
/// misuse is reported at the offending call instead, in the same spirit as
/// `RefCell`'s borrow-rule panics.
pub struct Group<I, F, K>
where
    I: Iterator,
{
    cursor: Rc<RefCell<GroupCursor<I, F, K>>>,
    key: K,
    generation: u64,
}

impl<I, F, K> Iterator for Group<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Clone + PartialEq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let mut cursor = self.cursor.borrow_mut();
        assert!(
            cursor.generation == self.generation,
            "stale group: the parent group_by has advanced past this subgroup"
        );
        if cursor.current_key.as_ref() != Some(&self.key) {
            // Run over (key changed) or source exhausted.
            return None;
        }
        let x = cursor
            .current_value
            .take()
            .expect("cursor holds a value whenever a key is current");
        cursor.advance();
        Some(x)
    }
}

/// Identity key used by `compress` and `pack`: each element is its own
/// key.
type IdentityKey<T> = fn(&T) -> T;

fn clone_key<T: Clone>(x: &T) -> T {
    x.clone()
}

/// Iterator over the distinct keys of consecutive runs.
pub struct Compress<I>
where
    I: Iterator,
{
    groups: GroupBy<I, IdentityKey<I::Item>, I::Item>,
}

/// Collapses consecutive duplicates of `iterable`, yielding one element
/// per run in order.
pub fn compress<I>(iterable: I) -> Compress<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone + PartialEq,
{
    Compress {
        groups: group_by(iterable, clone_key as IdentityKey<I::Item>),
    }
}

impl<I> Iterator for Compress<I>
where
    I: Iterator,
    I::Item: Clone + PartialEq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        // The subgroup is dropped undrained; the parent discards the rest
        // of the run when it advances.
        self.groups.next().map(|(key, _)| key)
    }
}

/// Iterator over materialized runs of equal elements.
pub struct Pack<I>
where
    I: Iterator,
{
    groups: GroupBy<I, IdentityKey<I::Item>, I::Item>,
}

/// Breaks `iterable` into its consecutive runs, each yielded as a fully
/// materialized `Vec`.
pub fn pack<I>(iterable: I) -> Pack<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone + PartialEq,
{
    Pack {
        groups: group_by(iterable, clone_key as IdentityKey<I::Item>),
    }
}

impl<I> Iterator for Pack<I>
where
    I: Iterator,
    I::Item: Clone + PartialEq,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        // Each subgroup is drained in full before the parent advances, so
        // no element of the run is lost.
        let (_, group) = self.groups.next()?;
        Some(group.collect())
    }
}
