//! # lazyseq - Composable Lazy Sequence Transformations
//!
//! A library of pull-based sequence combinators: stateless transforms
//! (map, filter, chain, zip, ...), stateful buffering combinators (cycle,
//! tee, group_by), and combinatorial generators (permutations,
//! combinations, cartesian product).
//!
//! Every combinator is a free function taking its input first and
//! returning a named iterator struct; no element is computed before it is
//! pulled. Exhaustion is `None` from `Iterator::next`, never an error.
//!
//! ## Example
//!
//! ```
//! use lazyseq::{filter, pack, range, take, to_vec};
//!
//! let evens = filter(range(10), |i| i % 2 == 0);
//! assert_eq!(to_vec(take(evens, 3)), vec![0, 2, 4]);
//!
//! let runs = to_vec(pack("aabbb".chars()));
//! assert_eq!(runs, vec![vec!['a', 'a'], vec!['b', 'b', 'b']]);
//! ```
//!
//! ## Sharing rules
//!
//! Two combinators deliberately share state and carry rules for it:
//! `tee`'s buffer is jointly owned by all branches and grows with the gap
//! between the fastest and slowest one, and `group_by`'s subgroups ride
//! the parent's cursor, so a subgroup retained after the parent advances
//! is stale and panics when pulled. Everything else owns its upstream
//! outright.

mod chain;
mod combinatoric;
mod cycle;
mod error;
mod group;
mod materialize;
mod slice;
mod sources;
mod tee;
mod transform;

#[cfg(test)]
mod tests;

pub use chain::{chain, flatten, weave, zip, Chain, Weave, Zip};
pub use combinatoric::{
    combinations, combinations_with_replacement, permutations, permutations_full, product,
    Combinations, CombinationsWithReplacement, Permutations, Product,
};
pub use cycle::{cycle, Cycle};
pub use error::Error;
pub use group::{compress, group_by, pack, Compress, Group, GroupBy, Pack};
pub use materialize::{first, join, last, take_nth, to_vec};
pub use slice::{slice, slice_step, take, Slice};
pub use sources::{count, range, range_from, range_step, repeat, repeat_n, Count, Range, Repeat};
pub use tee::{tee, Tee};
pub use transform::{
    dropwhile, enumerate, filter, filterfalse, map, starmap, takewhile, DropWhile, Enumerate,
    Filter, FilterFalse, Map, StarMap, TakeWhile,
};
