//! [`Dedupe`] and related items.

use crate::{Reducer, Step, Transducer};

/// A [`Transducer`] that drops consecutive duplicate inputs. See [`dedupe`].
///
/// Only adjacent repeats are dropped; a value seen again after a different
/// value is forwarded again. Equality is the element's `PartialEq`.
#[derive(Clone, Copy, Debug, Default)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct Dedupe;

/// Creates a [`Dedupe`] transducer that drops consecutive duplicates.
pub fn dedupe() -> Dedupe {
    Dedupe
}

impl<In> Transducer<In> for Dedupe
where
    In: PartialEq + Clone,
{
    type Item = In;

    type Output<Next: Reducer<In>> = DedupeReducer<Next, In>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<In>,
    {
        DedupeReducer { next, prior: None }
    }
}

/// [`Reducer`] for [`Dedupe`].
pub struct DedupeReducer<Next, In> {
    next: Next,
    // `None` until the first input; no real input compares equal to it.
    prior: Option<In>,
}

impl<Next, In> Reducer<In> for DedupeReducer<Next, In>
where
    Next: Reducer<In>,
    In: PartialEq + Clone,
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        if self.prior.as_ref() == Some(&input) {
            self.prior = Some(input);
            Step::Continue(accum)
        } else {
            self.prior = Some(input.clone());
            self.next.step(accum, input)
        }
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}
