#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub use either::Either;

pub mod cat;
pub mod dedupe;
pub mod drive;
pub mod filter;
pub mod inspect;
pub mod interpose;
pub mod keep;
pub mod keep_indexed;
pub mod map;
pub mod partition_all;
pub mod partition_by;
pub mod random_sample;
pub mod reducer;
pub mod replace;
pub mod skip;
pub mod skip_while;
pub mod step;
pub mod take;
pub mod take_nth;
pub mod take_while;
pub mod transducer;

pub use cat::{Cat, CatReducer, IterTraverse, Traverse, cat, mapcat};
pub use dedupe::{Dedupe, DedupeReducer, dedupe};
pub use drive::{into_vec, reduce, reduce_with, transduce, transduce_with};
pub use filter::{Filter, FilterReducer, Remove, RemoveReducer, filter, remove};
pub use inspect::{Inspect, InspectReducer, inspect};
pub use interpose::{Interpose, InterposeReducer, interpose};
pub use keep::{Keep, KeepReducer, keep};
pub use keep_indexed::{KeepIndexed, KeepIndexedReducer, keep_indexed};
pub use map::{Map, MapReducer, map};
pub use partition_all::{PartitionAll, PartitionAllReducer, partition_all};
pub use partition_by::{PartitionBy, PartitionByReducer, partition_by};
pub use random_sample::{random_sample, random_sample_with};
pub use reducer::{
    Append, Completing, FnReducer, ForEach, Reducer, Reducing, completing, for_each, reducer,
    reducing,
};
pub use replace::{Lookup, replace};
pub use skip::{Skip, SkipReducer, skip};
pub use skip_while::{SkipWhile, SkipWhileReducer, skip_while};
pub use step::{Step, preserving_reduced};
pub use take::{Take, TakeReducer, take};
pub use take_nth::{TakeNth, TakeNthReducer, take_nth};
pub use take_while::{TakeWhile, TakeWhileReducer, take_while};
pub use transducer::{Compose, Identity, Transducer, identity};
