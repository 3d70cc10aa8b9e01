use ::either::Either;

use crate::*;

#[test]
fn into_seq_yields_in_order() {
    let all: Vec<i32> = [1, 2, 3].into_seq().collect();
    assert_eq!(all, vec![1, 2, 3]);
}

#[test]
fn each_stops_the_producer_on_false() {
    let mut seen = Vec::new();
    [1, 2, 3, 4].into_seq().each(|x| {
        seen.push(x);
        x < 2
    });
    assert_eq!(seen, vec![1, 2]);
}

#[test]
fn from_fn_drives_the_consumer() {
    let seq = from_fn(|consumer: &mut dyn FnMut(i32) -> bool| {
        for x in [10, 20, 30] {
            if !consumer(x) {
                return;
            }
        }
    });
    let all: Vec<i32> = seq.collect();
    assert_eq!(all, vec![10, 20, 30]);
}

#[test]
fn map_transforms_each_element() {
    let doubled: Vec<i32> = [1, 2, 3].into_seq().map(|x| x * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[test]
fn filter_false_keeps_nonmatching_elements() {
    let odd: Vec<i32> = [1, 2, 3, 4, 5]
        .into_seq()
        .filter_false(|x| x % 2 == 0)
        .collect();
    assert_eq!(odd, vec![1, 3, 5]);
}

#[test]
fn take_while_stops_at_the_first_failure() {
    let prefix: Vec<i32> = [1, 2, 5, 1].into_seq().take_while(|&x| x < 3).collect();
    assert_eq!(prefix, vec![1, 2]);
}

#[test]
fn drop_while_skips_only_the_prefix() {
    let suffix: Vec<i32> = [1, 2, 5, 1].into_seq().drop_while(|&x| x < 3).collect();
    assert_eq!(suffix, vec![5, 1]);
}

#[test]
fn accumulate_yields_running_totals() {
    let sums: Vec<i32> = [1, 2, 3, 4]
        .into_seq()
        .accumulate(|total, x| total + x, 0)
        .collect();
    assert_eq!(sums, vec![1, 3, 6, 10]);
}

#[test]
fn batched_emits_full_then_short_batches() {
    let batches: Vec<Vec<i32>> = [1, 2, 3, 4, 5].into_seq().batched(2).collect();
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
}

#[test]
fn batched_omits_an_empty_tail() {
    let batches: Vec<Vec<i32>> = [1, 2, 3, 4].into_seq().batched(2).collect();
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4]]);
}

#[test]
#[should_panic]
fn batched_rejects_a_zero_size() {
    let _ = [1].into_seq().batched(0);
}

#[test]
fn compress_selects_by_mask() {
    let kept: Vec<char> = ['a', 'b', 'c', 'd']
        .into_seq()
        .compress([true, false, true, true])
        .collect();
    assert_eq!(kept, vec!['a', 'c', 'd']);
}

#[test]
fn compress_stops_when_selectors_run_out() {
    // the source is infinite; termination proves the stop
    let kept: Vec<usize> = count().compress([true, false, true]).collect();
    assert_eq!(kept, vec![0, 2]);
}

#[test]
fn slice_yields_the_window() {
    let window: Vec<usize> = count().slice(2..5).collect();
    assert_eq!(window, vec![2, 3, 4]);
}

#[test]
fn slice_with_an_open_end_runs_to_exhaustion() {
    let tail: Vec<i32> = [9, 8, 7].into_seq().slice(1..).collect();
    assert_eq!(tail, vec![8, 7]);
}

#[test]
fn slice_accepts_inclusive_ranges() {
    let window: Vec<usize> = count().slice(0..=2).collect();
    assert_eq!(window, vec![0, 1, 2]);
}

#[test]
fn enumerate_pairs_positions_with_elements() {
    let indexed: Vec<(usize, char)> = ['a', 'b'].into_seq().enumerate().collect();
    assert_eq!(indexed, vec![(0, 'a'), (1, 'b')]);
}

#[test]
fn chain_concatenates() {
    let all: Vec<i32> = [1, 2].into_seq().chain([3].into_seq()).collect();
    assert_eq!(all, vec![1, 2, 3]);
}

#[test]
fn chain_stop_in_the_front_never_starts_the_back() {
    let mut back_started = false;
    let back = from_fn(|_consumer: &mut dyn FnMut(i32) -> bool| {
        back_started = true;
    });
    let mut seen = Vec::new();
    [1, 2, 3].into_seq().chain(back).each(|x| {
        seen.push(x);
        x < 2
    });
    assert_eq!(seen, vec![1, 2]);
    assert!(!back_started);
}

#[test]
fn cycle_replays_the_source() {
    let mut seen = Vec::new();
    [1, 2].into_seq().cycle().each(|x| {
        seen.push(x);
        seen.len() < 5
    });
    assert_eq!(seen, vec![1, 2, 1, 2, 1]);
}

#[test]
fn cycle_of_an_empty_source_yields_nothing() {
    let mut seen = Vec::new();
    Vec::<i32>::new().into_seq().cycle().each(|x| {
        seen.push(x);
        true
    });
    assert!(seen.is_empty());
}

#[test]
fn repeat_yields_clones_forever() {
    let mut emitted = 0;
    repeat('x').each(|_| {
        emitted += 1;
        emitted < 10
    });
    assert_eq!(emitted, 10);
}

#[test]
fn repeat_n_is_bounded() {
    let echoes: Vec<&str> = repeat_n("hey", 3).collect();
    assert_eq!(echoes, vec!["hey", "hey", "hey"]);
}

#[test]
fn count_counts_from_zero() {
    let mut seen = Vec::new();
    count().each(|i| {
        seen.push(i);
        i < 3
    });
    assert_eq!(seen, vec![0, 1, 2, 3]);
}

#[test]
fn tee_produces_two_identical_passes() {
    let (a, b) = [1, 2, 3].into_seq().tee();
    let left: Vec<i32> = a.collect();
    let right: Vec<i32> = b.collect();
    assert_eq!(left, right);
}

#[test]
fn either_works_as_a_sequence_on_both_sides() {
    fn pick(flip: bool) -> impl Seq<i32> {
        if flip {
            Either::Left([1, 2].into_seq())
        } else {
            Either::Right(repeat_n(7, 1))
        }
    }
    let left: Vec<i32> = pick(true).collect();
    let right: Vec<i32> = pick(false).collect();
    assert_eq!(left, vec![1, 2]);
    assert_eq!(right, vec![7]);
}

#[test]
fn combinations_of_three_choose_two() {
    let pairs: Vec<Vec<char>> = combinations(vec!['a', 'b', 'c'], 2).collect();
    assert_eq!(pairs, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
}

#[test]
fn combinations_choose_zero_emits_one_empty_tuple() {
    let tuples: Vec<Vec<i32>> = combinations(vec![1, 2, 3], 0).collect();
    assert_eq!(tuples, vec![Vec::<i32>::new()]);
}

#[test]
fn combinations_wider_than_the_pool_emit_nothing() {
    let tuples: Vec<Vec<i32>> = combinations(vec![1, 2], 3).collect();
    assert!(tuples.is_empty());
}

#[test]
fn combinations_full_width_emits_the_pool_itself() {
    let tuples: Vec<Vec<i32>> = combinations(vec![1, 2, 3], 3).collect();
    assert_eq!(tuples, vec![vec![1, 2, 3]]);
}

#[test]
fn combinations_stop_when_the_consumer_declines() {
    let mut emitted = 0;
    combinations(vec![1, 2, 3, 4], 2).each(|_| {
        emitted += 1;
        false
    });
    assert_eq!(emitted, 1);
}

#[test]
fn combinations_with_replacement_of_two_choose_two() {
    let pairs: Vec<Vec<u8>> = combinations_with_replacement(vec![0, 1], 2).collect();
    assert_eq!(pairs, vec![vec![0, 0], vec![0, 1], vec![1, 1]]);
}

#[test]
fn combinations_with_replacement_over_an_empty_pool_emit_nothing() {
    let none: Vec<Vec<i32>> = combinations_with_replacement(Vec::new(), 0).collect();
    assert!(none.is_empty());
    let none: Vec<Vec<i32>> = combinations_with_replacement(Vec::new(), 2).collect();
    assert!(none.is_empty());
}

#[test]
fn combinations_with_replacement_choose_zero_emits_one_empty_tuple() {
    let tuples: Vec<Vec<i32>> = combinations_with_replacement(vec![1, 2], 0).collect();
    assert_eq!(tuples, vec![Vec::<i32>::new()]);
}

#[test]
fn permutations_of_three_take_two() {
    let arrangements: Vec<Vec<i32>> = permutations(vec![1, 2, 3], 2).collect();
    assert_eq!(
        arrangements,
        vec![
            vec![1, 2],
            vec![1, 3],
            vec![2, 1],
            vec![2, 3],
            vec![3, 1],
            vec![3, 2],
        ],
    );
}

#[test]
fn permutations_full_length_in_lexicographic_order() {
    let arrangements: Vec<Vec<i32>> = permutations(vec![1, 2, 3], 3).collect();
    assert_eq!(
        arrangements,
        vec![
            vec![1, 2, 3],
            vec![1, 3, 2],
            vec![2, 1, 3],
            vec![2, 3, 1],
            vec![3, 1, 2],
            vec![3, 2, 1],
        ],
    );
}

#[test]
fn permutations_take_zero_emits_one_empty_tuple() {
    let tuples: Vec<Vec<i32>> = permutations(vec![1, 2], 0).collect();
    assert_eq!(tuples, vec![Vec::<i32>::new()]);
    let tuples: Vec<Vec<i32>> = permutations(Vec::new(), 0).collect();
    assert_eq!(tuples, vec![Vec::<i32>::new()]);
}

#[test]
fn permutations_wider_than_the_pool_emit_nothing() {
    let tuples: Vec<Vec<i32>> = permutations(vec![1, 2], 3).collect();
    assert!(tuples.is_empty());
}

#[test]
fn product_crosses_two_pools() {
    let cross: Vec<Vec<char>> = product(vec![vec!['1', '2'], vec!['a', 'b']]).collect();
    assert_eq!(
        cross,
        vec![
            vec!['1', 'a'],
            vec!['1', 'b'],
            vec!['2', 'a'],
            vec!['2', 'b'],
        ],
    );
}

#[test]
fn product_of_no_pools_emits_one_empty_tuple() {
    let tuples: Vec<Vec<i32>> = product(Vec::new()).collect();
    assert_eq!(tuples, vec![Vec::<i32>::new()]);
}

#[test]
fn product_with_a_zero_length_pool_emits_nothing() {
    let tuples: Vec<Vec<i32>> = product(vec![vec![1, 2], vec![]]).collect();
    assert!(tuples.is_empty());
}

#[test]
fn product_repeat_runs_the_odometer() {
    let tuples: Vec<Vec<u8>> = product_repeat(vec![0, 1], 3).collect();
    assert_eq!(tuples.len(), 8);
    assert_eq!(tuples.first(), Some(&vec![0, 0, 0]));
    assert_eq!(tuples.get(1), Some(&vec![0, 0, 1]));
    assert_eq!(tuples.last(), Some(&vec![1, 1, 1]));
}
