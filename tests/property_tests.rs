//! Property-based tests comparing the queue against a naive model.
//!
//! A `HashMap<usize, i64>` plays the naive model: every queue operation is
//! mirrored onto the map, the observable state (length, peek, per-index
//! lookup) must agree after each step, and the error contract must fire
//! exactly when the model says the operation is illegal.

use std::collections::HashMap;

use proptest::prelude::*;

use indexed_priority_queue::{Error, IndexedPriorityQueue, OrderMode};

const CAPACITY: usize = 16;

#[derive(Debug, Clone)]
enum Op {
    Insert(usize, i64),
    Pop,
    IncreaseKey(usize, i64),
    DecreaseKey(usize, i64),
    UpdateKey(usize, i64),
}

/// Indices deliberately overshoot the capacity so the bounds contract is
/// exercised alongside the legal traffic.
fn op_strategy() -> impl Strategy<Value = Op> {
    let index = 0..CAPACITY + 2;
    let key = -100i64..100;
    prop_oneof![
        (index.clone(), key.clone()).prop_map(|(i, k)| Op::Insert(i, k)),
        Just(Op::Pop),
        (index.clone(), key.clone()).prop_map(|(i, k)| Op::IncreaseKey(i, k)),
        (index.clone(), key.clone()).prop_map(|(i, k)| Op::DecreaseKey(i, k)),
        (index, key).prop_map(|(i, k)| Op::UpdateKey(i, k)),
    ]
}

/// The key the model expects a pop to surface under `mode`.
fn model_extreme(mode: OrderMode, model: &HashMap<usize, i64>) -> Option<i64> {
    match mode {
        OrderMode::Max => model.values().copied().max(),
        OrderMode::Min => model.values().copied().min(),
    }
}

fn test_against_model(mode: OrderMode, ops: &[Op]) -> Result<(), TestCaseError> {
    let mut queue = IndexedPriorityQueue::new(CAPACITY, mode);
    let mut model: HashMap<usize, i64> = HashMap::new();

    for op in ops {
        match *op {
            Op::Insert(index, key) => {
                let result = queue.insert(index, key);
                if index >= CAPACITY {
                    prop_assert_eq!(
                        result,
                        Err(Error::OutOfRange {
                            index,
                            capacity: CAPACITY
                        })
                    );
                } else if model.contains_key(&index) {
                    prop_assert_eq!(result, Err(Error::AlreadyPresent { index }));
                } else {
                    prop_assert_eq!(result, Ok(()));
                    model.insert(index, key);
                }
            }
            Op::Pop => match queue.pop() {
                Ok((index, key)) => {
                    prop_assert_eq!(Some(key), model_extreme(mode, &model));
                    prop_assert_eq!(model.remove(&index), Some(key));
                }
                Err(error) => {
                    prop_assert!(model.is_empty());
                    prop_assert_eq!(error, Error::EmptyQueue);
                }
            },
            Op::IncreaseKey(index, key) => {
                let result = queue.increase_key(index, key);
                if index >= CAPACITY {
                    prop_assert_eq!(
                        result,
                        Err(Error::OutOfRange {
                            index,
                            capacity: CAPACITY
                        })
                    );
                } else {
                    match model.get(&index) {
                        None => prop_assert_eq!(result, Err(Error::NotPresent { index })),
                        Some(&current) if key <= current => {
                            prop_assert_eq!(result, Err(Error::InvalidUpdate { index }));
                        }
                        Some(_) => {
                            prop_assert_eq!(result, Ok(()));
                            model.insert(index, key);
                        }
                    }
                }
            }
            Op::DecreaseKey(index, key) => {
                let result = queue.decrease_key(index, key);
                if index >= CAPACITY {
                    prop_assert_eq!(
                        result,
                        Err(Error::OutOfRange {
                            index,
                            capacity: CAPACITY
                        })
                    );
                } else {
                    match model.get(&index) {
                        None => prop_assert_eq!(result, Err(Error::NotPresent { index })),
                        Some(&current) if key >= current => {
                            prop_assert_eq!(result, Err(Error::InvalidUpdate { index }));
                        }
                        Some(_) => {
                            prop_assert_eq!(result, Ok(()));
                            model.insert(index, key);
                        }
                    }
                }
            }
            Op::UpdateKey(index, key) => {
                let result = queue.update_key(index, key);
                if index >= CAPACITY {
                    prop_assert_eq!(
                        result,
                        Err(Error::OutOfRange {
                            index,
                            capacity: CAPACITY
                        })
                    );
                } else if !model.contains_key(&index) {
                    prop_assert_eq!(result, Err(Error::NotPresent { index }));
                } else {
                    prop_assert_eq!(result, Ok(()));
                    model.insert(index, key);
                }
            }
        }

        prop_assert_eq!(queue.len(), model.len());
        prop_assert_eq!(queue.is_empty(), model.is_empty());
        if let Some((_, &key)) = queue.peek() {
            prop_assert_eq!(Some(key), model_extreme(mode, &model));
        } else {
            prop_assert!(model.is_empty());
        }
        for index in 0..CAPACITY {
            prop_assert_eq!(queue.get(index), model.get(&index));
        }
    }

    // Whatever the op sequence left behind must drain in monotone key order
    // and account for exactly the model's remaining entries.
    let mut drained = Vec::new();
    while let Ok((index, key)) = queue.pop() {
        prop_assert_eq!(model.remove(&index), Some(key));
        drained.push(key);
    }
    prop_assert!(model.is_empty());
    for pair in drained.windows(2) {
        match mode {
            OrderMode::Max => prop_assert!(pair[0] >= pair[1]),
            OrderMode::Min => prop_assert!(pair[0] <= pair[1]),
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_max_queue_matches_the_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        test_against_model(OrderMode::Max, &ops)?;
    }

    #[test]
    fn test_min_queue_matches_the_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        test_against_model(OrderMode::Min, &ops)?;
    }

    #[test]
    fn test_filled_min_queue_drains_ascending(
        entries in prop::collection::hash_map(0..CAPACITY, -1000i64..1000, 0..CAPACITY)
    ) {
        let mut queue = IndexedPriorityQueue::new(CAPACITY, OrderMode::Min);
        for (&index, &key) in &entries {
            queue.insert(index, key).unwrap();
        }

        let mut drained = Vec::new();
        while let Ok((_, key)) = queue.pop() {
            drained.push(key);
        }

        let mut expected: Vec<i64> = entries.values().copied().collect();
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn test_filled_max_queue_drains_descending(
        entries in prop::collection::hash_map(0..CAPACITY, -1000i64..1000, 0..CAPACITY)
    ) {
        let mut queue = IndexedPriorityQueue::new(CAPACITY, OrderMode::Max);
        for (&index, &key) in &entries {
            queue.insert(index, key).unwrap();
        }

        let mut drained = Vec::new();
        while let Ok((_, key)) = queue.pop() {
            drained.push(key);
        }

        let mut expected: Vec<i64> = entries.values().copied().collect();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(drained, expected);
    }
}
