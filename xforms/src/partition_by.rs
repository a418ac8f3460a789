//! [`PartitionBy`] and related items.

use std::mem;

use crate::{Reducer, Step, Transducer};

/// Groups consecutive inputs into [`Vec`] runs delimited by a change of key.
///
/// Each input's key is compared to the previous input's; a change flushes
/// the buffered run and starts a new one. The remembered key is updated on
/// every input, including one dropped because the flush ended the reduction.
#[derive(Clone, Copy, Debug)]
#[must_use = "transducers do nothing unless applied to a reducer"]
pub struct PartitionBy<Func> {
    keyf: Func,
}

/// Creates a [`PartitionBy`] transducer that forwards each maximal run of
/// inputs sharing a `keyf` value as one [`Vec`].
pub fn partition_by<Func, In, Key>(keyf: Func) -> PartitionBy<Func>
where
    Func: FnMut(&In) -> Key,
    Key: PartialEq,
{
    PartitionBy { keyf }
}

impl<Func, In, Key> Transducer<In> for PartitionBy<Func>
where
    Func: FnMut(&In) -> Key,
    Key: PartialEq,
{
    type Item = Vec<In>;

    type Output<Next: Reducer<Vec<In>>> = PartitionByReducer<Next, Func, In, Key>;

    fn apply<Next>(self, next: Next) -> Self::Output<Next>
    where
        Next: Reducer<Vec<In>>,
    {
        PartitionByReducer {
            next,
            keyf: self.keyf,
            part: Vec::new(),
            prior: None,
        }
    }
}

/// [`Reducer`] for [`PartitionBy`].
pub struct PartitionByReducer<Next, Func, In, Key> {
    next: Next,
    keyf: Func,
    part: Vec<In>,
    prior: Option<Key>,
}

impl<Next, Func, In, Key> Reducer<In> for PartitionByReducer<Next, Func, In, Key>
where
    Next: Reducer<Vec<In>>,
    Func: FnMut(&In) -> Key,
    Key: PartialEq,
{
    type Accum = Next::Accum;

    fn init(&mut self) -> Self::Accum {
        self.next.init()
    }

    fn step(&mut self, accum: Self::Accum, input: In) -> Step<Self::Accum> {
        let key = (self.keyf)(&input);
        let same_run = self.part.is_empty() || self.prior.as_ref() == Some(&key);
        self.prior = Some(key);
        if same_run {
            self.part.push(input);
            return Step::Continue(accum);
        }
        let part = mem::take(&mut self.part);
        match self.next.step(accum, part) {
            Step::Continue(accum) => {
                self.part.push(input);
                Step::Continue(accum)
            }
            reduced => reduced,
        }
    }

    fn finish(&mut self, accum: Self::Accum) -> Self::Accum {
        let accum = if self.part.is_empty() {
            accum
        } else {
            self.next.step(accum, mem::take(&mut self.part)).into_inner()
        };
        self.next.finish(accum)
    }
}
