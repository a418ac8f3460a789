//! [`Map`] and related items.

use crate::{Reducer, Step, Transducer};

/// Same as [`core::iter::Map`] but as a [`Transducer`].
///
/// Transforms each input with a function and forwards the result.
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct Map<Func> {
    func: Func,
}

/// Creates a [`Map`] transducer that applies `func` to each input.
pub fn map<Func, In, Out>(func: Func) -> Map<Func>
where
    Func: FnMut(In) -> Out,
{
    Map { func }
}

impl<Func, In, Out> Transducer<In> for Map<Func>
where
    Func: FnMut(In) -> Out,
{
    type Item = Out;

    type Output<Next: Reducer<Out>> = MapReducer<Next, Func>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<Out>,
    {
        MapReducer {
            next,
            func: self.func,
        }
    }
}

/// [`Reducer`] for [`Map`].
pub struct MapReducer<Next, Func> {
    next: Next,
    func: Func,
}

impl<Next, Func, In, Out> Reducer<In> for MapReducer<Next, Func>
where
    Next: Reducer<Out>,
    Func: FnMut(In) -> Out,
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        let item = (self.func)(input);
        self.next.step(accum, item)
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}
