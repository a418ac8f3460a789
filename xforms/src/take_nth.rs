//! [`TakeNth`] and related items.

use core::marker::PhantomData;

use crate::{Reducer, Step, Transducer};

/// A [`Transducer`] that forwards every n-th input. See [`take_nth`].
///
/// The count is 1-indexed: the n-th, 2n-th, ... inputs are forwarded, so the
/// first input is forwarded only when `n` is 1. Never ends the reduction
/// early.
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct TakeNth {
    n: usize,
}

/// Creates a [`TakeNth`] transducer that forwards every n-th input.
///
/// # Panics
/// Panics if `n` is zero.
pub fn take_nth(n: usize) -> TakeNth {
    assert!(n != 0, "`take_nth` requires a nonzero stride.");
    TakeNth { n }
}

impl<In> Transducer<In> for TakeNth {
    type Item = In;

    type Output<Next: Reducer<In>> = TakeNthReducer<Next, In>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<In>,
    {
        TakeNthReducer {
            next,
            n: self.n,
            count: 0,
            _marker: PhantomData,
        }
    }
}

/// [`Reducer`] for [`TakeNth`].
pub struct TakeNthReducer<Next, In> {
    next: Next,
    n: usize,
    count: usize,
    _marker: PhantomData<fn(In)>,
}

impl<Next, In> Reducer<In> for TakeNthReducer<Next, In>
where
    Next: Reducer<In>,
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        self.count += 1;
        if self.count % self.n == 0 {
            self.next.step(accum, input)
        } else {
            Step::Continue(accum)
        }
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}
