// Host-side tests for the sample history buffer.

use fsr_core::RingBuffer;

#[test]
fn scenario_capacity_three_keeps_last_three_samples() {
    let mut rb = RingBuffer::with_capacity(3);
    for i in 1..=4 {
        rb.push(vec![i as f32, 0.0, 0.0, 0.0]);
    }
    let ordered: Vec<Vec<f32>> = rb.iter().cloned().collect();
    assert_eq!(
        ordered,
        vec![
            vec![2.0, 0.0, 0.0, 0.0],
            vec![3.0, 0.0, 0.0, 0.0],
            vec![4.0, 0.0, 0.0, 0.0],
        ]
    );
}

#[test]
fn wraparound_keeps_most_recent_in_order_for_many_k() {
    let capacity = 5;
    for k in 0..17 {
        let mut rb = RingBuffer::with_capacity(capacity);
        let total = capacity + k;
        for i in 0..total {
            rb.push(i);
        }
        let got: Vec<usize> = rb.iter().copied().collect();
        let expected: Vec<usize> = (total - capacity..total).collect();
        assert_eq!(got, expected, "k = {k}");
        assert_eq!(rb.len(), capacity);
        assert!(rb.is_full());
    }
}

#[test]
fn partial_fill_reads_in_push_order() {
    let mut rb = RingBuffer::with_capacity(10);
    rb.push('a');
    rb.push('b');
    assert_eq!(rb.to_vec(), vec!['a', 'b']);
    assert!(!rb.is_full());
    assert_eq!(rb.latest(), Some(&'b'));
}

#[test]
fn iteration_is_restartable_and_exact_sized() {
    let mut rb = RingBuffer::with_capacity(3);
    for i in 0..7 {
        rb.push(i);
    }
    let first: Vec<i32> = rb.iter().copied().collect();
    let second: Vec<i32> = (&rb).into_iter().copied().collect();
    assert_eq!(first, second);
    assert_eq!(rb.iter().len(), 3);
    assert_eq!(rb.iter().rev().copied().collect::<Vec<_>>(), vec![6, 5, 4]);
}

#[test]
fn latest_tracks_newest_after_wrap() {
    let mut rb = RingBuffer::with_capacity(3);
    assert_eq!(rb.latest(), None);
    for i in 0..5 {
        rb.push(i);
        assert_eq!(rb.latest(), Some(&i));
    }
}

#[test]
fn clear_empties_without_shrinking() {
    let mut rb = RingBuffer::with_capacity(4);
    for i in 0..6 {
        rb.push(i);
    }
    rb.clear();
    assert!(rb.is_empty());
    assert_eq!(rb.capacity(), 4);
    assert_eq!(rb.iter().count(), 0);
    rb.push(9);
    assert_eq!(rb.to_vec(), vec![9]);
}

#[test]
fn reset_capacity_changes_bound() {
    let mut rb = RingBuffer::with_capacity(2);
    rb.push(1);
    rb.push(2);
    rb.reset_capacity(4);
    assert!(rb.is_empty());
    for i in 0..6 {
        rb.push(i);
    }
    assert_eq!(rb.to_vec(), vec![2, 3, 4, 5]);
}

#[test]
fn zero_capacity_is_bumped_to_one() {
    let mut rb = RingBuffer::with_capacity(0);
    assert_eq!(rb.capacity(), 1);
    rb.push(1);
    rb.push(2);
    assert_eq!(rb.to_vec(), vec![2]);
}
