//! [`Take`] and related items.

use core::marker::PhantomData;

use crate::{Reducer, Step, Transducer};

/// Same as [`core::iter::Take`] but as a [`Transducer`].
///
/// Forwards the first `n` inputs, then ends the reduction. Termination is
/// signaled on the step that consumes the n-th input, not one later, and
/// exactly once even when the wrapped reducer terminates on that same step.
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct Take {
    n: usize,
}

/// Creates a [`Take`] transducer that forwards the first `n` inputs.
///
/// `take(0)` forwards nothing and ends the reduction on the first input.
pub fn take(n: usize) -> Take {
    Take { n }
}

impl<In> Transducer<In> for Take {
    type Item = In;

    type Output<Next: Reducer<In>> = TakeReducer<Next, In>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<In>,
    {
        TakeReducer {
            next,
            remaining: self.n,
            _marker: PhantomData,
        }
    }
}

/// [`Reducer`] for [`Take`].
pub struct TakeReducer<Next, In> {
    next: Next,
    remaining: usize,
    _marker: PhantomData<fn(In)>,
}

impl<Next, In> Reducer<In> for TakeReducer<Next, In>
where
    Next: Reducer<In>,
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        if self.remaining == 0 {
            return Step::Reduced(accum);
        }
        self.remaining -= 1;
        let stepped = self.next.step(accum, input);
        if self.remaining == 0 {
            stepped.ensure_reduced()
        } else {
            stepped
        }
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}
