use proptest_derive::Arbitrary;

use crate::BlockDeque;
use proptest::prelude::*;
use std::collections::VecDeque;

// simple enum to allow structural mutations in any order
#[derive(Debug, Clone, Arbitrary)]
enum DequeOp<T> {
    PushFront(T),
    PopFront,
    PushBack(T),
    PopBack,
    Insert(usize, T),
    RemoveAt(usize),
}

fn apply<T: Clone + PartialEq + std::fmt::Debug>(
    deque: &mut BlockDeque<T>,
    model: &mut VecDeque<T>,
    op: &DequeOp<T>,
) {
    match op {
        DequeOp::PushFront(item) => {
            deque.push_front(item.clone());
            model.push_front(item.clone());
        }
        DequeOp::PopFront => assert_eq!(deque.pop_front(), model.pop_front()),
        DequeOp::PushBack(item) => {
            deque.push_back(item.clone());
            model.push_back(item.clone());
        }
        DequeOp::PopBack => assert_eq!(deque.pop_back(), model.pop_back()),
        DequeOp::Insert(seed, item) => {
            let index = seed % (deque.len() + 1);
            deque.insert(index, item.clone());
            model.insert(index, item.clone());
        }
        DequeOp::RemoveAt(seed) => {
            if !deque.is_empty() {
                let index = seed % deque.len();
                assert_eq!(Some(deque.remove(index)), model.remove(index));
            }
        }
    }
}

proptest! {
    // Any op sequence over any block size must leave the deque holding exactly what a VecDeque
    // holds after the same ops.
    #[test]
    fn matches_model_deque(
        block_size in 1usize..9,
        ref ops in proptest::collection::vec(any::<DequeOp<i32>>(), 0..100),
    ) {
        let mut deque = BlockDeque::with_block_size(block_size);
        let mut model = VecDeque::new();
        for op in ops.iter() {
            apply(&mut deque, &mut model, op);
            prop_assert_eq!(deque.len(), model.len());
        }
        let contents: Vec<i32> = deque.iter().copied().collect();
        let model_contents: Vec<i32> = model.iter().copied().collect();
        prop_assert_eq!(contents, model_contents);
    }

    // Same as above with a non-Copy element type, so slot hygiene bugs show up as double drops
    // or lost strings.
    #[test]
    fn matches_model_deque_string(
        block_size in 1usize..9,
        ref ops in proptest::collection::vec(any::<DequeOp<String>>(), 0..100),
    ) {
        let mut deque = BlockDeque::with_block_size(block_size);
        let mut model = VecDeque::new();
        for op in ops.iter() {
            apply(&mut deque, &mut model, op);
        }
        let contents: Vec<String> = deque.iter().cloned().collect();
        let model_contents: Vec<String> = model.iter().cloned().collect();
        prop_assert_eq!(contents, model_contents);
    }

    // Inserting at any position and removing the same position restores the sequence exactly.
    #[test]
    fn insert_then_remove_is_identity(
        block_size in 1usize..9,
        ref items in proptest::collection::vec(any::<i32>(), 0..64),
        seed in any::<usize>(),
        item in any::<i32>(),
    ) {
        let mut deque = BlockDeque::with_block_size(block_size);
        for &x in items.iter() {
            deque.push_back(x);
        }
        let before: Vec<i32> = deque.iter().copied().collect();
        let index = seed % (deque.len() + 1);
        deque.insert(index, item);
        prop_assert_eq!(deque.len(), items.len() + 1);
        prop_assert_eq!(deque[index], item);
        prop_assert_eq!(deque.remove(index), item);
        let after: Vec<i32> = deque.iter().copied().collect();
        prop_assert_eq!(before, after);
    }

    // index_of must report the lowest matching logical index, duplicates and all.
    #[test]
    fn index_of_agrees_with_position(
        block_size in 1usize..9,
        ref items in proptest::collection::vec(0i32..8, 0..40),
        needle in 0i32..8,
    ) {
        let mut deque = BlockDeque::with_block_size(block_size);
        for &x in items.iter() {
            deque.push_back(x);
        }
        prop_assert_eq!(deque.index_of(&needle), items.iter().position(|&x| x == needle));
    }

    // Building entirely from the front reverses the call order.
    #[test]
    fn push_front_reverses(
        block_size in 1usize..9,
        ref items in proptest::collection::vec(any::<i32>(), 0..40),
    ) {
        let mut deque = BlockDeque::with_block_size(block_size);
        for &x in items.iter() {
            deque.push_front(x);
        }
        let contents: Vec<i32> = deque.iter().copied().collect();
        let reversed: Vec<i32> = items.iter().rev().copied().collect();
        prop_assert_eq!(contents, reversed);
    }
}
