use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Shared state behind all branches of one `tee` call: the upstream plus
/// one FIFO queue per branch.
///
/// The upstream is pulled at most once per logical element; each pulled
/// value is pushed into every branch's queue, so a queue holds exactly the
/// elements some branch has consumed that this branch has not. The gap
/// between the fastest and slowest branch bounds the memory held; a
/// branch that is never drained grows its queue without bound, which is
/// the caller's responsibility to avoid.
struct TeeBuffer<I>
where
    I: Iterator,
{
    source: I,
    queues: Vec<VecDeque<I::Item>>,
}

/// One branch of a `tee` fan-out.
///
/// Branches are independently consumable in any interleaving, on a single
/// thread only. Each yields the same values in the same order as pulling
/// the original source directly.
pub struct Tee<I>
where
    I: Iterator,
{
    buffer: Rc<RefCell<TeeBuffer<I>>>,
    branch: usize,
}

/// Splits `iterable` into `n` independent branches over one shared buffer.
///
/// The buffer lives as long as the longest-lived branch.
pub fn tee<I>(iterable: I, n: usize) -> Vec<Tee<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let buffer = Rc::new(RefCell::new(TeeBuffer {
        source: iterable.into_iter(),
        queues: (0..n).map(|_| VecDeque::new()).collect(),
    }));

    (0..n)
        .map(|branch| Tee {
            buffer: Rc::clone(&buffer),
            branch,
        })
        .collect()
}

impl<I> Iterator for Tee<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let mut buffer = self.buffer.borrow_mut();
        if buffer.queues[self.branch].is_empty() {
            // Pull the shared upstream once and fan the value out to
            // every queue, including our own.
            let x = buffer.source.next()?;
            for queue in &mut buffer.queues {
                queue.push_back(x.clone());
            }
        }
        buffer.queues[self.branch].pop_front()
    }
}
