//! [`Filter`] and [`Remove`] and related items.

use crate::{Reducer, Step, Transducer};

/// Same as [`core::iter::Filter`] but as a [`Transducer`].
///
/// Forwards only the inputs the predicate accepts.
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct Filter<Pred> {
    pred: Pred,
}

/// Creates a [`Filter`] transducer that forwards inputs satisfying `pred`.
pub fn filter<Pred, In>(pred: Pred) -> Filter<Pred>
where
    Pred: FnMut(&In) -> bool,
{
    Filter { pred }
}

impl<Pred, In> Transducer<In> for Filter<Pred>
where
    Pred: FnMut(&In) -> bool,
{
    type Item = In;

    type Output<Next: Reducer<In>> = FilterReducer<Next, Pred>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<In>,
    {
        FilterReducer {
            next,
            pred: self.pred,
        }
    }
}

/// [`Reducer`] for [`Filter`].
pub struct FilterReducer<Next, Pred> {
    next: Next,
    pred: Pred,
}

impl<Next, Pred, In> Reducer<In> for FilterReducer<Next, Pred>
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
            Step::Continue(accum)
        }
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}

/// The complement of [`Filter`]: forwards only the inputs the predicate
/// rejects. See [`remove`].
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct Remove<Pred> {
    pred: Pred,
}

/// Creates a [`Remove`] transducer that drops inputs satisfying `pred`.
pub fn remove<Pred, In>(pred: Pred) -> Remove<Pred>
where
    Pred: FnMut(&In) -> bool,
{
    Remove { pred }
}

impl<Pred, In> Transducer<In> for Remove<Pred>
where
    Pred: FnMut(&In) -> bool,
{
    type Item = In;

    type Output<Next: Reducer<In>> = RemoveReducer<Next, Pred>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<In>,
    {
        RemoveReducer {
            next,
            pred: self.pred,
        }
    }
}

/// [`Reducer`] for [`Remove`].
pub struct RemoveReducer<Next, Pred> {
    next: Next,
    pred: Pred,
}

impl<Next, Pred, In> Reducer<In> for RemoveReducer<Next, Pred>
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
            Step::Continue(accum)
        } else {
            self.next.step(accum, input)
        }
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}
