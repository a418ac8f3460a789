//! [`SkipWhile`] and related items.

use crate::{Reducer, Step, Transducer};

/// Same as [`core::iter::SkipWhile`] but as a [`Transducer`].
///
/// Drops inputs while the predicate holds; the first failure permanently
/// ends the skipping, even if a later input would satisfy the predicate
/// again.
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct SkipWhile<Pred> {
    pred: Pred,
}

/// Creates a [`SkipWhile`] transducer that drops inputs until `pred` first
/// fails.
pub fn skip_while<Pred, In>(pred: Pred) -> SkipWhile<Pred>
where
    Pred: FnMut(&In) -> bool,
{
    SkipWhile { pred }
}

impl<Pred, In> Transducer<In> for SkipWhile<Pred>
where
    Pred: FnMut(&In) -> bool,
{
    type Item = In;

    type Output<Next: Reducer<In>> = SkipWhileReducer<Next, Pred>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<In>,
    {
        SkipWhileReducer {
            next,
            pred: self.pred,
            skipping: true,
        }
    }
}

/// [`Reducer`] for [`SkipWhile`].
pub struct SkipWhileReducer<Next, Pred> {
    next: Next,
    pred: Pred,
    skipping: bool,
}

impl<Next, Pred, In> Reducer<In> for SkipWhileReducer<Next, Pred>
where
    Next: Reducer<In>,
    Pred: FnMut(&In) -> bool,
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        if self.skipping {
            if (self.pred)(&input) {
                return Step::Continue(accum);
            }
            self.skipping = false;
        }
        self.next.step(accum, input)
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}
