//! [`Cat`], [`Traverse`], and related items.

use core::marker::PhantomData;

use crate::{Compose, Map, Reducer, Step, Transducer, map, preserving_reduced};

/// Walks a collection, feeding each element to a step function.
///
/// [`Cat`] is generic over the traversal so inputs that are not
/// [`IntoIterator`] (trees, custom containers) can still be flattened.
/// The walk must stop at the first [`Step::Reduced`] outcome and return
/// its payload.
pub trait Traverse<Coll> {
    /// The element type produced by the traversal.
    type Item;

    /// Feeds each element of `coll` to `step` in order, threading the
    /// accumulator through. Returns the threaded accumulator, or the
    /// payload of the first [`Step::Reduced`] outcome.
    fn traverse<A, F>(&mut self, accum: A, coll: Coll, step: F) -> A
    where
        F: FnMut(A, Self::Item) -> Step<A>;
}

/// [`Traverse`] over any [`IntoIterator`].
#[derive(Clone, Copy, Debug, Default)]
pub struct IterTraverse;

impl<Coll> Traverse<Coll> for IterTraverse
where
    Coll: IntoIterator,
{
    type Item = Coll::Item;

    fn traverse<A, F>(&mut self, mut accum: A, coll: Coll, mut step: F) -> A
    where
        F: FnMut(A, Self::Item) -> Step<A>,
    {
        for item in coll {
            match step(accum, item) {
                Step::Continue(threaded) => accum = threaded,
                Step::Reduced(threaded) => return threaded,
            }
        }
        accum
    }
}

/// Flattens one level of nesting. See [`cat`].
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct Cat<T> {
    traverse: T,
}

/// Creates a [`Cat`] transducer that feeds every element of each input
/// collection to the wrapped reducer, one level deep.
///
/// `cat(IterTraverse)` flattens anything iterable. A sub-step that ends the
/// reduction stops the traversal mid-collection, and the termination
/// reaches the driver exactly once however deeply `cat`s nest.
pub fn cat<T>(traverse: T) -> Cat<T> {
    Cat { traverse }
}

/// Creates a transducer that maps each input to a collection and flattens
/// the results, as [`map`] composed with [`cat`].
pub fn mapcat<T, Func, In, Coll>(traverse: T, func: Func) -> Compose<Map<Func>, Cat<T>, In>
where
    T: Traverse<Coll>,
    Func: FnMut(In) -> Coll,
{
    map(func).compose(cat(traverse))
}

impl<T, Coll> Transducer<Coll> for Cat<T>
where
    T: Traverse<Coll>,
{
    type Item = T::Item;

    type Output<Next: Reducer<T::Item>> = CatReducer<Next, T, Coll>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<T::Item>,
    {
        CatReducer {
            next,
            traverse: self.traverse,
            _marker: PhantomData,
        }
    }
}

/// [`Reducer`] for [`Cat`].
pub struct CatReducer<Next, T, Coll> {
    next: Next,
    traverse: T,
    _marker: PhantomData<fn(Coll)>,
}

impl<Next, T, Coll> Reducer<Coll> for CatReducer<Next, T, Coll>
where
    Next: Reducer<T::Item>,
    T: Traverse<Coll>,
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, coll: Coll) -> Step<Self::Accum> {
        // The traversal threads `Step<Accum>` so a terminating sub-step
        // can halt it; `preserving_reduced` keeps the inner marker intact
        // while the traversal peels its own layer off.
        let next = &mut self.next;
        self.traverse
            .traverse(Step::Continue(accum), coll, |outcome, item| match outcome {
                Step::Continue(accum) => preserving_reduced(next.step(accum, item)),
                reduced => Step::Reduced(reduced),
            })
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        self.next.finish(accum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compose, into_vec, take};

    #[test]
    fn test_cat_flattens_one_level() {
        assert_eq!(
            vec![1, 2, 3],
            into_vec(cat(IterTraverse), vec![vec![1, 2], vec![], vec![3]])
        );
    }

    #[test]
    fn test_cat_stops_mid_collection() {
        assert_eq!(
            vec![1, 2, 3, 4],
            into_vec(cat(IterTraverse).compose(take(4)), vec![
                vec![1, 2, 3],
                vec![4, 5, 6],
                vec![7]
            ])
        );
    }

    #[test]
    fn test_cat_of_cat_signals_termination_once() {
        let nested = vec![vec![vec![1], vec![2, 3]], vec![vec![4, 5]]];
        assert_eq!(
            vec![1, 2, 3],
            into_vec(compose!(cat(IterTraverse), cat(IterTraverse), take(3)), nested)
        );
    }

    #[test]
    fn test_mapcat() {
        assert_eq!(
            vec![0, 0, 1, 0, 1, 2],
            into_vec(mapcat(IterTraverse, |n: i32| 0..n), [1, 2, 3])
        );
    }

    #[test]
    fn test_iter_traverse_stops_at_the_first_reduced_outcome() {
        let mut seen = Vec::new();
        let total = IterTraverse.traverse(0, 1..=10, |accum: i32, item| {
            seen.push(item);
            if item == 3 {
                Step::Reduced(accum + item)
            } else {
                Step::Continue(accum + item)
            }
        });
        assert_eq!(6, total);
        assert_eq!(vec![1, 2, 3], seen);
    }

    #[test]
    fn test_cat_over_a_custom_traversal() {
        struct Pair<T>(T, T);

        struct PairTraverse;
        impl<T> Traverse<Pair<T>> for PairTraverse {
            type Item = T;

            fn traverse<A, F>(&mut self, accum: A, pair: Pair<T>, mut step: F) -> A
            where
                F: FnMut(A, T) -> Step<A>,
            {
                let accum = match step(accum, pair.0) {
                    Step::Continue(accum) => accum,
                    Step::Reduced(accum) => return accum,
                };
                step(accum, pair.1).into_inner()
            }
        }

        assert_eq!(
            vec![1, 2, 3, 4],
            into_vec(cat(PairTraverse), [Pair(1, 2), Pair(3, 4)])
        );
    }
}
