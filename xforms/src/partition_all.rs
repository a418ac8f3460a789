//! [`PartitionAll`] and related items.

use std::mem;

use crate::{Reducer, Step, Transducer};

/// Groups consecutive inputs into [`Vec`] chunks of `n` and forwards each
/// chunk once full.
///
/// A partial chunk left over when the reduction finishes is forwarded
/// before the wrapped reducer's own finish runs. Forwarded chunks are
/// owned by the wrapped reducer; later inputs go into a fresh buffer.
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct PartitionAll {
    n: usize,
}

/// Creates a [`PartitionAll`] transducer that forwards chunks of `n` inputs.
///
/// # Panics
/// Panics if `n` is zero.
pub fn partition_all(n: usize) -> PartitionAll {
    assert!(n != 0, "`partition_all` requires a nonzero chunk size.");
    PartitionAll { n }
}

impl<In> Transducer<In> for PartitionAll {
    type Item = Vec<In>;

    type Output<Next: Reducer<Vec<In>>> = PartitionAllReducer<Next, In>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<Vec<In>>,
    {
        PartitionAllReducer {
            next,
            n: self.n,
            part: Vec::with_capacity(self.n),
        }
    }
}

/// [`Reducer`] for [`PartitionAll`].
pub struct PartitionAllReducer<Next, In> {
    next: Next,
    n: usize,
    part: Vec<In>,
}

impl<Next, In> Reducer<In> for PartitionAllReducer<Next, In>
where
    Next: Reducer<Vec<In>>,
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        self.part.push(input);
        if self.part.len() < self.n {
            return Step::Continue(accum);
        }
        let part = mem::replace(&mut self.part, Vec::with_capacity(self.n));
        self.next.step(accum, part)
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        let accum = if self.part.is_empty() {
            accum
        } else {
            // The flush is an ordinary step; its termination marker is
            // meaningless this late and must not leak into finish.
            self.next.step(accum, mem::take(&mut self.part)).into_inner()
        };
        self.next.finish(accum)
    }
}
