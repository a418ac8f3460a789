//! [`Interpose`] and related items.

use crate::{Reducer, Step, Transducer};

/// Forwards a separator before every input except the first.
///
/// Each separator is a clone of `sep` and takes its own step through the
/// wrapped reducer. If that step ends the reduction the pending input is
/// dropped and the termination propagates.
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct Interpose<In> {
    sep: In,
}

/// Creates an [`Interpose`] transducer that forwards `sep` between
/// consecutive inputs.
pub fn interpose<In>(sep: In) -> Interpose<In> {
    Interpose { sep }
}

impl<In> Transducer<In> for Interpose<In>
where
    In: Clone,
{
    type Item = In;

    type Output<Next: Reducer<In>> = InterposeReducer<Next, In>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<In>,
    {
        InterposeReducer {
            next,
            sep: self.sep,
            started: false,
        }
    }
}

/// [`Reducer`] for [`Interpose`].
pub struct InterposeReducer<Next, In> {
    next: Next,
    sep: In,
    started: bool,
}

impl<Next, In> Reducer<In> for InterposeReducer<Next, In>
where
    Next: Reducer<In>,
    In: Clone,
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        if !self.started {
            self.started = true;
            return self.next.step(accum, input);
        }
        match self.next.step(accum, self.sep.clone()) {
            Step::Continue(accum) => self.next.step(accum, input),
            reduced => reduced,
        }
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}
