//! [`KeepIndexed`] and related items.

use crate::{Reducer, Step, Transducer};

/// [`Keep`](crate::Keep) with the input's 0-based position passed to the
/// mapper. See [`keep_indexed`].
///
/// The index counts every input, forwarded or not.
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct KeepIndexed<Func> {
    func: Func,
}

/// Creates a [`KeepIndexed`] transducer that forwards the `Some` results of
/// `func(index, input)`.
pub fn keep_indexed<Func, In, Out>(func: Func) -> KeepIndexed<Func>
where
    Func: FnMut(usize, In) -> Option<Out>,
{
    KeepIndexed { func }
}

impl<Func, In, Out> Transducer<In> for KeepIndexed<Func>
where
    Func: FnMut(usize, In) -> Option<Out>,
{
    type Item = Out;

    type Output<Next: Reducer<Out>> = KeepIndexedReducer<Next, Func>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<Out>,
    {
        KeepIndexedReducer {
            next,
            func: self.func,
            index: 0,
        }
    }
}

/// [`Reducer`] for [`KeepIndexed`].
pub struct KeepIndexedReducer<Next, Func> {
    next: Next,
    func: Func,
    index: usize,
}

impl<Next, Func, In, Out> Reducer<In> for KeepIndexedReducer<Next, Func>
where
    Next: Reducer<Out>,
    Func: FnMut(usize, In) -> Option<Out>,
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        let index = self.index;
        self.index += 1;
        match (self.func)(index, input) {
            Some(item) => self.next.step(accum, item),
            None => Step::Continue(accum),
        }
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}
