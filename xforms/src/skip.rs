//! [`Skip`] and related items.

use core::marker::PhantomData;

use crate::{Reducer, Step, Transducer};

/// Same as [`core::iter::Skip`] but as a [`Transducer`].
///
/// Drops the first `n` inputs and forwards the rest.
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct Skip {
    n: usize,
}

/// Creates a [`Skip`] transducer that drops the first `n` inputs.
pub fn skip(n: usize) -> Skip {
    Skip { n }
}

impl<In> Transducer<In> for Skip {
    type Item = In;

    type Output<Next: Reducer<In>> = SkipReducer<Next, In>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<In>,
    {
        SkipReducer {
            next,
            n: self.n,
            skipped: 0,
            _marker: PhantomData,
        }
    }
}

/// [`Reducer`] for [`Skip`].
pub struct SkipReducer<Next, In> {
    next: Next,
    n: usize,
    skipped: usize,
    _marker: PhantomData<fn(In)>,
}

impl<Next, In> Reducer<In> for SkipReducer<Next, In>
where
    Next: Reducer<In>,
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        if self.skipped < self.n {
            self.skipped += 1;
            Step::Continue(accum)
        } else {
            self.next.step(accum, input)
        }
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}
