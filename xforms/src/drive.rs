//! Drivers that feed an iterator source through a [`Reducer`].

use crate::{Append, Reducer, Step, Transducer};

/// Reduces `source` with `sink`, seeding the accumulator from the sink's
/// own [`init`](Reducer::init).
pub fn reduce<R, In, Source>(mut sink: R, source: Source) -> R::Accum
where
    R: Reducer<In>,
    Source: IntoIterator<Item = In>,
{
    let accum = sink.init();
    reduce_with(sink, accum, source)
}

/// Reduces `source` with `sink` from an explicit seed accumulator.
///
/// Stops pulling from `source` at the first [`Step::Reduced`] outcome and
/// runs [`finish`](Reducer::finish) exactly once either way.
pub fn reduce_with<R, In, Source>(mut sink: R, mut accum: R::Accum, source: Source) -> R::Accum
where
    R: Reducer<In>,
    Source: IntoIterator<Item = In>,
{
    for input in source {
        match sink.step(accum, input) {
            Step::Continue(threaded) => accum = threaded,
            Step::Reduced(threaded) => {
                accum = threaded;
                break;
            }
        }
    }
    sink.finish(accum)
}

/// Applies `xform` to `sink` and reduces `source` with the result.
pub fn transduce<T, R, In, Source>(xform: T, sink: R, source: Source) -> R::Accum
where
    T: Transducer<In>,
    R: Reducer<T::Item>,
    Source: IntoIterator<Item = In>,
{
    reduce(xform.apply(sink), source)
}

/// Applies `xform` to `sink` and reduces `source` from an explicit seed.
pub fn transduce_with<T, R, In, Source>(
    xform: T,
    sink: R,
    accum: R::Accum,
    source: Source,
) -> R::Accum
where
    T: Transducer<In>,
    R: Reducer<T::Item>,
    Source: IntoIterator<Item = In>,
{
    reduce_with(xform.apply(sink), accum, source)
}

/// Transforms `source` through `xform` and collects the outputs in order.
pub fn into_vec<T, In, Source>(xform: T, source: Source) -> Vec<T::Item>
where
    T: Transducer<In>,
    Source: IntoIterator<Item = In>,
{
    transduce(xform, Append, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{map, reducer, take};

    fn summing() -> impl Reducer<i32, Accum = i32> {
        reducer(
            || 0,
            |accum, input: i32| Step::Continue(accum + input),
            |accum| accum,
        )
    }

    #[test]
    fn test_reduce() {
        assert_eq!(55, reduce(summing(), 1..=10));
    }

    #[test]
    fn test_reduce_with_explicit_seed() {
        assert_eq!(155, reduce_with(summing(), 100, 1..=10));
    }

    #[test]
    fn test_transduce() {
        assert_eq!(110, transduce(map(|n: i32| n * 2), summing(), 1..=10));
    }

    #[test]
    fn test_transduce_with_seeds_the_accumulator() {
        assert_eq!(
            vec![100, 2, 4, 6],
            transduce_with(map(|n: i32| n * 2), Append, vec![100], 1..=3)
        );
    }

    #[test]
    fn test_termination_stops_the_pull() {
        let mut pulled = 0;
        let collected = transduce(take(3), Append, (1..=100).inspect(|_| pulled += 1));
        assert_eq!(vec![1, 2, 3], collected);
        assert_eq!(3, pulled);
    }

    #[test]
    fn test_unbounded_source_terminates() {
        assert_eq!(vec![1, 2, 3, 4, 5], into_vec(take(5), 1..));
    }

    #[test]
    fn test_finish_runs_exactly_once_on_early_termination() {
        let mut finishes = 0;
        let collected = transduce(
            take(2),
            reducer(
                Vec::new,
                |mut accum: Vec<i32>, input| {
                    accum.push(input);
                    Step::Continue(accum)
                },
                |accum| {
                    finishes += 1;
                    accum
                },
            ),
            1..,
        );
        assert_eq!(vec![1, 2], collected);
        assert_eq!(1, finishes);
    }
}
