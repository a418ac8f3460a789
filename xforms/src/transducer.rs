//! [`Transducer`], composition, and the identity transformation.

use core::marker::PhantomData;

use either::Either;

use crate::Reducer;

/// A reducing-function transformer.
///
/// Applying a transducer to a [`Reducer`] yields a new reducer that feeds
/// `In` inputs through this transducer's step logic and forwards zero or
/// more `Item` values to the wrapped reducer. The accumulator type passes
/// through untouched, so a driver only ever sees the innermost sink's
/// accumulator.
///
/// A transducer value is a blueprint: [`apply`](Self::apply) consumes it and
/// allocates any per-application state. Apply a `Clone` blueprint to as many
/// reducers as needed; each application owns its state exclusively and is
/// discarded with the reduction it served.
pub trait Transducer<In> {
    /// The item type forwarded to the wrapped reducer.
    type Item;

    /// The reducer type produced by wrapping `Next`.
    type Output<Next: Reducer<Self::Item>>: Reducer<In, Accum = Next::Accum>;

    /// Wraps `next` in this transducer's step logic.
    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<Self::Item>;

    /// Composes with `inner`; data visits `self` first, then `inner`.
    ///
    /// `a.compose(b).apply(sink)` is `a.apply(b.apply(sink))`: the leftmost
    /// transducer is the outermost wrapper, matching left-to-right pipeline
    /// reading order. For more than two stages see [`compose!`](crate::compose).
    fn compose<T>(self, inner: T) -> Compose<Self, T, In>
    where
        Self: Sized,
        T: Transducer<Self::Item>,
    {
        Compose {
            outer: self,
            inner,
            _marker: PhantomData,
        }
    }
}

/// The identity [`Transducer`]: forwards every input unchanged. See
/// [`identity`].
#[derive(Clone, Copy, Debug, Default)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct Identity;

/// Creates the identity [`Transducer`], the unit of composition.
pub fn identity() -> Identity {
    Identity
}

impl<In> Transducer<In> for Identity {
    type Item = In;

    type Output<Next: Reducer<In>> = Next;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<In>,
    {
        next
    }
}

/// Pairwise composition of two [`Transducer`]s. See [`Transducer::compose`].
///
/// `In` is the element type the composition consumes. Naming it in the type
/// ties every stage to the inputs the composition is eventually driven with,
/// even when no single stage names an element type of its own.
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct Compose<A, B, In> {
    outer: A,
    inner: B,
    _marker: PhantomData<fn(In)>,
}

impl<In, A, B> Transducer<In> for Compose<A, B, In>
where
    A: Transducer<In>,
    B: Transducer<A::Item>,
{
    type Item = B::Item;

    type Output<Next: Reducer<B::Item>> = A::Output<B::Output<Next>>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<B::Item>,
    {
        self.outer.apply(self.inner.apply(next))
    }
}

/// Dispatches to whichever arm is present. Both arms must agree on the item
/// type, so a pipeline stage can be chosen at run time without boxing.
impl<In, L, R> Transducer<In> for Either<L, R>
where
    L: Transducer<In>,
    R: Transducer<In, Item = L::Item>,
{
    type Item = L::Item;

    type Output<Next: Reducer<L::Item>> = Either<L::Output<Next>, R::Output<Next>>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<L::Item>,
    {
        match self {
            Self::Left(left) => Either::Left(left.apply(next)),
            Self::Right(right) => Either::Right(right.apply(next)),
        }
    }
}

/// Variadic composition of transducers, leftmost first.
///
/// `compose!()` is [`identity()`], `compose!(a)` is `a`, and more arguments
/// chain [`Transducer::compose`]: `compose!(a, b, c)` is
/// `a.compose(b.compose(c))`. Composition is associative, so the grouping
/// does not matter; the leftmost transducer always sees data first.
#[macro_export]
macro_rules! compose {
    () => {
        $crate::identity()
    };
    ($xform:expr $(,)?) => {
        $xform
    };
    ($xform:expr, $($rest:expr),+ $(,)?) => {
        $crate::Transducer::compose($xform, $crate::compose!($($rest),+))
    };
}
