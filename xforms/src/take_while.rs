//! [`TakeWhile`] and related items.

use crate::{Reducer, Step, Transducer};

/// Same as [`core::iter::TakeWhile`] but as a [`Transducer`].
///
/// Forwards inputs while the predicate holds; the first failing input ends
/// the reduction without being forwarded.
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct TakeWhile<Pred> {
    pred: Pred,
}

/// Creates a [`TakeWhile`] transducer that forwards inputs until `pred`
/// first fails.
pub fn take_while<Pred, In>(pred: Pred) -> TakeWhile<Pred>
where
    Pred: FnMut(&In) -> bool,
{
    TakeWhile { pred }
}

impl<Pred, In> Transducer<In> for TakeWhile<Pred>
where
    Pred: FnMut(&In) -> bool,
{
    type Item = In;

    type Output<Next: Reducer<In>> = TakeWhileReducer<Next, Pred>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<In>,
    {
        TakeWhileReducer {
            next,
            pred: self.pred,
        }
    }
}

/// [`Reducer`] for [`TakeWhile`].
pub struct TakeWhileReducer<Next, Pred> {
    next: Next,
    pred: Pred,
}

impl<Next, Pred, In> Reducer<In> for TakeWhileReducer<Next, Pred>
where
    Next: Reducer<In>,
    Pred: FnMut(&In) -> bool,
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        if (self.pred)(&input) {
            self.next.step(accum, input)
        } else {
            Step::Reduced(accum)
        }
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}
