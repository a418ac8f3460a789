//! [`Keep`] and related items.

use crate::{Reducer, Step, Transducer};

/// Same as [`core::iter::FilterMap`] but as a [`Transducer`].
///
/// Maps and filters in one pass: forwards the payload of `Some` results and
/// drops inputs mapped to `None`. A mapper that always returns `Some`
/// defeats the filtering.
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct Keep<Func> {
    func: Func,
}

/// Creates a [`Keep`] transducer that forwards the `Some` results of `func`.
pub fn keep<Func, In, Out>(func: Func) -> Keep<Func>
where
    Func: FnMut(In) -> Option<Out>,
{
    Keep { func }
}

impl<Func, In, Out> Transducer<In> for Keep<Func>
where
    Func: FnMut(In) -> Option<Out>,
{
    type Item = Out;

    type Output<Next: Reducer<Out>> = KeepReducer<Next, Func>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<Out>,
    {
        KeepReducer {
            next,
            func: self.func,
        }
    }
}

/// [`Reducer`] for [`Keep`].
pub struct KeepReducer<Next, Func> {
    next: Next,
    func: Func,
}

impl<Next, Func, In, Out> Reducer<In> for KeepReducer<Next, Func>
where
    Next: Reducer<Out>,
    Func: FnMut(In) -> Option<Out>,
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        match (self.func)(input) {
            Some(item) => self.next.step(accum, item),
            None => Step::Continue(accum),
        }
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}
