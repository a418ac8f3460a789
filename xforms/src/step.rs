//! [`Step`] and the early-termination protocol.

/// Outcome of feeding one input to a [`Reducer`](crate::Reducer).
///
/// `Reduced` is the termination signal: the reduction is complete and no
/// further inputs may be stepped. Both variants carry the accumulator; the
/// variant only records whether the reducer asked to stop.
///
/// Nesting is part of the protocol. A traversal running inside another
/// reduction folds with accumulator type `Step<R>`, so its own outcomes have
/// type `Step<Step<R>>`: the outer level belongs to the traversal and the
/// inner level to the reduction it is embedded in. See
/// [`preserving_reduced`].
#[must_use = "a step outcome carries the accumulator and must be checked for termination"]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<R> {
    /// The reduction continues; more inputs may be fed.
    Continue(R),
    /// The reduction is complete; no further inputs may be fed.
    Reduced(R),
}

impl<R> Step<R> {
    /// Returns true iff this outcome signals termination.
    pub fn is_reduced(&self) -> bool {
        matches!(self, Self::Reduced(_))
    }

    /// Unwraps the accumulator, discarding the termination marker if present.
    pub fn into_inner(self) -> R {
        match self {
            Self::Continue(accum) | Self::Reduced(accum) => accum,
        }
    }

    /// Marks this outcome as terminated. Idempotent: an already-`Reduced`
    /// outcome is returned unchanged, never nested.
    pub fn ensure_reduced(self) -> Self {
        match self {
            Self::Continue(accum) => Self::Reduced(accum),
            reduced => reduced,
        }
    }

    /// Applies `func` to the carried accumulator, preserving the marker.
    pub fn map<T>(self, func: impl FnOnce(R) -> T) -> Step<T> {
        match self {
            Self::Continue(accum) => Step::Continue(func(accum)),
            Self::Reduced(accum) => Step::Reduced(func(accum)),
        }
    }
}

/// Lifts a step outcome into a nested traversal's accumulator, keeping the
/// termination signal intact across the traversal's own unwrap.
///
/// A nested traversal (see [`Cat`](crate::Cat)) folds with accumulator type
/// `Step<R>` and unwraps exactly one level when it stops early. Termination
/// signaled by the inner reduction must survive that unwrap, so it is wrapped
/// one level deeper: `Reduced(r)` becomes `Reduced(Reduced(r))`. Unlike
/// [`Step::ensure_reduced`] this always adds a level.
pub fn preserving_reduced<R>(step: Step<R>) -> Step<Step<R>> {
    match step {
        Step::Continue(accum) => Step::Continue(Step::Continue(accum)),
        Step::Reduced(accum) => Step::Reduced(Step::Reduced(accum)),
    }
}
