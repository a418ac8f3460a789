//! [`Inspect`] and related items.

use crate::{Reducer, Step, Transducer};

/// Same as [`core::iter::Inspect`] but as a [`Transducer`].
///
/// Observes each input by reference, then forwards it unchanged.
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct Inspect<Func> {
    func: Func,
}

/// Creates an [`Inspect`] transducer that calls `func` on a reference to
/// each input before forwarding it.
pub fn inspect<Func, In>(func: Func) -> Inspect<Func>
where
    Func: FnMut(&In),
{
    Inspect { func }
}

impl<Func, In> Transducer<In> for Inspect<Func>
where
    Func: FnMut(&In),
{
    type Item = In;

    type Output<Next: Reducer<In>> = InspectReducer<Next, Func>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<In>,
    {
        InspectReducer {
            next,
            func: self.func,
        }
    }
}

/// [`Reducer`] for [`Inspect`].
pub struct InspectReducer<Next, Func> {
    next: Next,
    func: Func,
}

impl<Next, Func, In> Reducer<In> for InspectReducer<Next, Func>
where
    Next: Reducer<In>,
    Func: FnMut(&In),
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        (self.func)(&input);
        self.next.step(accum, input)
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}
