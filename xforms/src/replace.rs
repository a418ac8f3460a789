//! [`Lookup`] tables and the replacement transformation.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::{Map, map};

/// A "find by key" table for [`replace`].
///
/// Open to user impls: anything that can answer "is this input a key, and if
/// so, what value stands in for it" works as a replacement table.
pub trait Lookup<In> {
    /// Returns the replacement for `input`, or `None` to keep it unchanged.
    fn lookup(&self, input: &In) -> Option<In>;
}

impl<In> Lookup<In> for HashMap<In, In>
where
    In: Eq + Hash + Clone,
{
    fn lookup(&self, input: &In) -> Option<In> {
        self.get(input).cloned()
    }
}

impl<In> Lookup<In> for BTreeMap<In, In>
where
    In: Ord + Clone,
{
    fn lookup(&self, input: &In) -> Option<In> {
        self.get(input).cloned()
    }
}

/// Creates a [`Map`] transducer that substitutes inputs found in `table` and
/// forwards everything else unchanged.
pub fn replace<In, Table>(table: Table) -> Map<impl FnMut(In) -> In>
where
    Table: Lookup<In>,
{
    map(move |input: In| table.lookup(&input).unwrap_or(input))
}
