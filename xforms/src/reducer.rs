//! [`Reducer`] and reducer constructors.

use core::marker::PhantomData;

use either::Either;

use crate::Step;

/// A reducing function: the seat a transducer pipeline folds into.
///
/// `init` produces a seed accumulator when the driver does not supply one,
/// `step` folds in one input, and `finish` post-processes the accumulator
/// exactly once after the last `step` (flushing any buffered state). A
/// reducer may carry mutable state; each value owns its state exclusively.
///
/// `step` hands the accumulator back through [`Step`]: `Continue` to keep
/// going, `Reduced` to end the reduction. After a `Reduced` outcome no
/// further `step` calls may be made, but `finish` is still called exactly
/// once, on the unwrapped accumulator.
///
/// `finish` is only defined for accumulators produced by this reducer's own
/// `init`/`step` chain. Reducer identity is not structural: two separately
/// constructed reducers with identical behavior are distinct values.
pub trait Reducer<In> {
    /// The accumulator type.
    type Accum;

    /// Produces a fresh seed accumulator.
    fn init(&mut self) -> Self::Accum;

    /// Folds `input` into `accum`.
    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum>;

    /// Post-processes the final accumulator.
    fn finish(&mut self, accum: Self::Accum) -> Self::Accum;
}

/// A [`Reducer`] assembled from three closures. See [`reducer`].
pub struct FnReducer<FInit, FStep, FFinish> {
    init: FInit,
    step: FStep,
    finish: FFinish,
}

/// Creates a [`Reducer`] from an `init`, a `step`, and a `finish` closure.
pub fn reducer<R, In, FInit, FStep, FFinish>(
    init: FInit,
    step: FStep,
    finish: FFinish,
) -> FnReducer<FInit, FStep, FFinish>
where
    FInit: FnMut() -> R,
    FStep: FnMut(R, In) -> Step<R>,
    FFinish: FnMut(R) -> R,
{
    FnReducer { init, step, finish }
}

impl<R, In, FInit, FStep, FFinish> Reducer<In> for FnReducer<FInit, FStep, FFinish>
where
    FInit: FnMut() -> R,
    FStep: FnMut(R, In) -> Step<R>,
    FFinish: FnMut(R) -> R,
{
    type Accum = R;

    fn init(&mut self) -> R {
        (self.init)()
    }

    fn step(&mut self, accum: R, input: In) -> Step<R> {
        (self.step)(accum, input)
    }

    fn finish(&mut self, accum: R) -> R {
        (self.finish)(accum)
    }
}

/// A terminal [`Reducer`] built from a step closure alone. See [`completing`].
pub struct Completing<FStep, R> {
    step: FStep,
    // Must constrain `R` for the reducer impl.
    _marker: PhantomData<fn() -> R>,
}

/// Creates a terminal [`Reducer`] from a step closure: `init` seeds with
/// `R::default()` and `finish` is the identity.
pub fn completing<R, In, FStep>(step: FStep) -> Completing<FStep, R>
where
    R: Default,
    FStep: FnMut(R, In) -> Step<R>,
{
    Completing {
        step,
        _marker: PhantomData,
    }
}

impl<R, In, FStep> Reducer<In> for Completing<FStep, R>
where
    R: Default,
    FStep: FnMut(R, In) -> Step<R>,
{
    type Accum = R;

    fn init(&mut self) -> R {
        R::default()
    }

    fn step(&mut self, accum: R, input: In) -> Step<R> {
        (self.step)(accum, input)
    }

    fn finish(&mut self, accum: R) -> R {
        accum
    }
}

/// A [`Reducer`] whose step stage is overridden in front of `Next`, with
/// `init` and `finish` forwarded unchanged. See [`reducing`].
pub struct Reducing<Next, FStep, NextIn> {
    next: Next,
    step: FStep,
    _marker: PhantomData<fn(NextIn)>,
}

/// Overrides the step of `next` with `step`, forwarding `init` and `finish`.
///
/// The step closure receives the wrapped reducer by `&mut` so it can forward
/// selectively, any number of times. This is the ad-hoc building block at a
/// sink boundary; a reusable transformation belongs in a
/// [`Transducer`](crate::Transducer).
pub fn reducing<NextIn, In, Next, FStep>(step: FStep, next: Next) -> Reducing<Next, FStep, NextIn>
where
    Next: Reducer<NextIn>,
    FStep: FnMut(&mut Next, Next::Accum, In) -> Step<Next::Accum>,
{
    Reducing {
        next,
        step,
        _marker: PhantomData,
    }
}

impl<NextIn, In, Next, FStep> Reducer<In> for Reducing<Next, FStep, NextIn>
where
    Next: Reducer<NextIn>,
    FStep: FnMut(&mut Next, Next::Accum, In) -> Step<Next::Accum>,
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        (self.step)(&mut self.next, accum, input)
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}

/// A terminal [`Reducer`] that appends each input to a `Vec`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Append;

impl<In> Reducer<In> for Append {
    type Accum = Vec<In>;

    fn init(&mut self) -> Vec<In> {
        Vec::new()
    }

    fn step(&mut self, mut accum: Vec<In>, input: In) -> Step<Vec<In>> {
        accum.push(input);
        Step::Continue(accum)
    }

    fn finish(&mut self, accum: Vec<In>) -> Vec<In> {
        accum
    }
}

/// A terminal [`Reducer`] that consumes each input with a function. See
/// [`for_each`].
pub struct ForEach<Func> {
    func: Func,
}

/// Creates a terminal [`Reducer`] that calls `func` on each input. Never
/// terminates early; the accumulator is `()`.
pub fn for_each<Func, In>(func: Func) -> ForEach<Func>
where
    Func: FnMut(In),
{
    ForEach { func }
}

impl<Func, In> Reducer<In> for ForEach<Func>
where
    Func: FnMut(In),
{
    type Accum = ();

    fn init(&mut self) {}

    fn step(&mut self, _accum: (), input: In) -> Step<()> {
        (self.func)(input);
        Step::Continue(())
    }

    fn finish(&mut self, _accum: ()) {}
}

/// Dispatches to whichever arm is present. Both arms must agree on the
/// accumulator type, so a pipeline can choose between two sinks at run time
/// without boxing.
impl<In, L, R> Reducer<In> for Either<L, R>
where
    L: Reducer<In>,
    R: Reducer<In, Accum = L::Accum>,
{
    type Accum = L::Accum;

    fn init(&mut self) -> Self::Accum {
        match self {
            Self::Left(left) => left.init(),
            Self::Right(right) => right.init(),
        }
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        match self {
            Self::Left(left) => left.step(accum, input),
            Self::Right(right) => right.step(accum, input),
        }
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        match self {
            Self::Left(left) => left.finish(accum),
            Self::Right(right) => right.finish(accum),
        }
    }
}
