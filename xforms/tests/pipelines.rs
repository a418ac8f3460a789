//! End-to-end pipeline tests across the operation catalog.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use xforms::*;

/// Helper function to create a recording sink using Vec
fn recording_sink<T: 'static>() -> (impl Reducer<T, Accum = ()>, Rc<RefCell<Vec<T>>>) {
    let recorded = Rc::new(RefCell::new(Vec::new()));
    let recorded_clone = recorded.clone();

    let sink = for_each(move |item: T| {
        recorded_clone.borrow_mut().push(item);
    });

    (sink, recorded)
}

#[test]
fn test_skip_then_take() {
    assert_eq!(vec![4, 5], into_vec(compose!(skip(3), take(2)), 1..=10));
}

#[test]
fn test_skip_while_then_take_while() {
    let xf = compose!(
        skip_while(|&n: &i32| n < 3),
        take_while(|&n: &i32| n < 7),
    );
    assert_eq!(vec![3, 5, 6], into_vec(xf, [1, 2, 3, 5, 6, 8, 2]));
}

#[test]
fn test_full_catalog_stack() {
    let xf = compose!(
        remove(|&n: &i32| n < 0),
        map(|n: i32| n * 2),
        keep(|n: i32| (n < 20).then_some(n + 100)),
        take(3),
    );
    // -1 removed, 1 -> 2 -> 102, 2 -> 4 -> 104, 3 -> 6 -> 106, then take(3)
    // ends the reduction before 15 and 5 are pulled.
    assert_eq!(vec![102, 104, 106], into_vec(xf, [-1, 1, 2, 3, 15, 5]));
}

#[test]
fn test_partitions_feed_downstream_stages() {
    let xf = compose!(partition_all(3), map(|part: Vec<i32>| part.iter().sum::<i32>()));
    assert_eq!(vec![6, 15, 24, 10], into_vec(xf, 1..=10));
}

#[test]
fn test_cat_mid_pipeline() {
    let xf = compose!(map(|n: i32| vec![n; n as usize]), cat(IterTraverse), take(4));
    assert_eq!(vec![1, 2, 2, 3], into_vec(xf, 1..=4));
}

#[test]
fn test_take_nth_then_dedupe() {
    let xf = compose!(take_nth(2), dedupe());
    assert_eq!(vec![1, 2, 3], into_vec(xf, [1, 1, 2, 2, 2, 3, 3, 3]));
}

#[test]
fn test_replace_then_interpose() {
    let table = HashMap::from([("midnight", "00:00")]);
    let xf = compose!(replace(table), interpose(", "));
    assert_eq!(
        vec!["00:00", ", ", "noon"],
        into_vec(xf, ["midnight", "noon"])
    );
}

#[test]
fn test_pipeline_into_a_for_each_sink() {
    let (sink, recorded) = recording_sink();

    let xf = compose!(
        filter(|&n: &i32| n % 2 == 0),
        map(|n: i32| n * 3),
        keep(|n: i32| (n < 20).then_some(n + 1)),
    );
    transduce(xf, sink, 1..=8); // 2 -> 6 -> 7, 4 -> 12 -> 13, 6 -> 18 -> 19

    assert_eq!(&[7, 13, 19], &**recorded.borrow());
}

#[test]
fn test_finish_post_processing_runs_after_the_last_step() {
    let reversed = transduce(
        take(3),
        reducer(
            Vec::new,
            |mut accum: Vec<i32>, input| {
                accum.push(input);
                Step::Continue(accum)
            },
            |mut accum| {
                accum.reverse();
                accum
            },
        ),
        1..,
    );
    assert_eq!(vec![3, 2, 1], reversed);
}

#[test]
fn test_run_time_stage_selection() {
    for shout in [true, false] {
        let stage: Either<_, _> = if shout {
            Either::Left(map(str::to_uppercase))
        } else {
            Either::Right(map(str::to_owned))
        };
        let expected: Vec<String> = if shout {
            vec!["A".to_owned(), "B".to_owned()]
        } else {
            vec!["a".to_owned(), "b".to_owned()]
        };
        assert_eq!(expected, into_vec(stage, ["a", "b"]));
    }
}
