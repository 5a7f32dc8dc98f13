//! Tests for the backing store

use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::ArrayList;
use crate::error::ListError;
use crate::options::{ListOptions, MAX_ARRAY_LENGTH};

fn list_of(items: &[i32]) -> ArrayList<i32> {
    ArrayList::from(items.to_vec())
}

// ============================================================================
// Growth
// ============================================================================

#[test]
fn test_new_list_is_unallocated() {
    let list = ArrayList::<i32>::new();
    assert_eq!(list.len(), 0);
    assert_eq!(list.capacity(), 0);
    assert_eq!(list.version(), 0);
}

#[test]
fn test_add_doubles_capacity() {
    let mut list = ArrayList::new();
    let mut seen = Vec::new();
    for i in 0..17 {
        let before = list.capacity();
        assert_eq!(list.add(i), Ok(i as usize));
        if list.capacity() != before {
            seen.push(list.capacity());
            // growth only happens when the buffer was full
            assert_eq!(list.len(), before + 1);
        }
        assert!(list.len() <= list.capacity());
    }
    assert_eq!(seen, vec![4, 8, 16, 32]);
}

#[test]
fn test_full_only_right_after_growth() {
    let mut list = ArrayList::new();
    for i in 0..16 {
        list.add(i).unwrap();
        if list.len() == list.capacity() {
            assert!(matches!(list.len(), 4 | 8 | 16));
        }
    }
}

#[test]
fn test_insert_range_jumps_to_required_capacity() {
    let mut list = list_of(&[1, 2]);
    list.insert_range(1, 0..10).unwrap();
    // doubling 2 -> 4 is not enough, so capacity jumps straight to 12
    assert_eq!(list.capacity(), 12);
    assert_eq!(list.len(), 12);
}

#[test]
fn test_growth_respects_max_capacity() {
    let options = ListOptions {
        default_capacity: 2,
        max_capacity: 3,
    };
    let mut list = ArrayList::with_options(options);
    list.add(1).unwrap();
    list.add(2).unwrap();
    assert_eq!(list.capacity(), 2);
    list.add(3).unwrap();
    assert_eq!(list.capacity(), 3);
    let version = list.version();
    assert_eq!(
        list.add(4),
        Err(ListError::CapacityOverflow { requested: 4 })
    );
    assert_eq!(list.version(), version);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

// ============================================================================
// Capacity
// ============================================================================

#[test]
fn test_capacity_changes_do_not_bump_version() {
    let mut list = list_of(&[1, 2, 3]);
    let version = list.version();

    list.set_capacity(10).unwrap();
    assert_eq!(list.capacity(), 10);
    list.trim_to_size();
    assert_eq!(list.capacity(), 3);

    assert_eq!(list.version(), version);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_capacity_too_small() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(
        list.set_capacity(2),
        Err(ListError::CapacityTooSmall {
            requested: 2,
            len: 3
        })
    );
    assert_eq!(list.capacity(), 3);
}

#[test]
fn test_capacity_zero_resets_to_default() {
    let mut list = ArrayList::<i32>::with_capacity(10);
    list.set_capacity(0).unwrap();
    assert_eq!(list.capacity(), 4);

    let mut empty = ArrayList::<i32>::new();
    empty.trim_to_size();
    assert_eq!(empty.capacity(), 4);
}

#[test]
fn test_capacity_overflow() {
    let mut list = ArrayList::<i32>::new();
    assert_eq!(
        list.set_capacity(MAX_ARRAY_LENGTH + 1),
        Err(ListError::CapacityOverflow {
            requested: MAX_ARRAY_LENGTH + 1
        })
    );
}

#[test]
fn test_try_with_capacity_rejects_oversized_request() {
    assert_eq!(
        ArrayList::<u64>::try_with_capacity(usize::MAX).err(),
        Some(ListError::CapacityOverflow {
            requested: usize::MAX
        })
    );
    assert_eq!(
        ArrayList::<u64>::try_with_capacity(MAX_ARRAY_LENGTH + 1).err(),
        Some(ListError::CapacityOverflow {
            requested: MAX_ARRAY_LENGTH + 1
        })
    );
    let list = ArrayList::<u64>::try_with_capacity(8).unwrap();
    assert_eq!(list.capacity(), 8);
}

#[test]
#[should_panic(expected = "exceeds MAX_ARRAY_LENGTH")]
fn test_with_capacity_panics_before_allocating() {
    let _ = ArrayList::<u64>::with_capacity(usize::MAX);
}

// ============================================================================
// Element access
// ============================================================================

#[test]
fn test_get_set() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(list.get(1), Ok(&2));
    assert_eq!(list.get(3), Err(ListError::OutOfRange { index: 3, len: 3 }));

    let version = list.version();
    assert_eq!(list.set(1, 20), Ok(2));
    assert_eq!(list.version(), version + 1);
    assert_eq!(list.set(3, 0), Err(ListError::OutOfRange { index: 3, len: 3 }));
    assert_eq!(list.version(), version + 1);
}

#[test]
fn test_insert_bounds() {
    let mut list = list_of(&[1, 2]);
    list.insert(2, 3).unwrap();
    list.insert(0, 0).unwrap();
    assert_eq!(list.to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(
        list.insert(5, 9),
        Err(ListError::OutOfRange { index: 5, len: 4 })
    );
}

#[test]
fn test_insert_range_and_set_range() {
    let mut list = list_of(&[0, 4]);
    list.insert_range(1, vec![1, 2, 3]).unwrap();
    assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);

    list.set_range(3, vec![30, 40]).unwrap();
    assert_eq!(list.to_vec(), vec![0, 1, 2, 30, 40]);
    assert_eq!(
        list.set_range(4, vec![1, 2]),
        Err(ListError::OutOfRange { index: 6, len: 5 })
    );
}

#[test]
fn test_empty_insert_range_is_not_a_modification() {
    let mut list = list_of(&[1]);
    let version = list.version();
    list.insert_range(0, Vec::new()).unwrap();
    list.remove_range(0, 0).unwrap();
    assert_eq!(list.version(), version);
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn test_remove_at_clears_slot() {
    let a = Arc::new("a");
    let mut list = ArrayList::new();
    list.add(Arc::clone(&a)).unwrap();
    list.add(Arc::new("b")).unwrap();
    assert_eq!(Arc::strong_count(&a), 2);

    let removed = list.remove_at(0).unwrap();
    drop(removed);

    assert_eq!(Arc::strong_count(&a), 1);
    assert_eq!(list.len(), 1);
    assert!(list.is_slot_cleared(1));
}

#[test]
fn test_remove_range_clears_trailing_slots() {
    let mut list = list_of(&[0, 1, 2, 3, 4, 5]);
    list.remove_range(1, 3).unwrap();
    assert_eq!(list.to_vec(), vec![0, 4, 5]);
    for index in 3..6 {
        assert!(list.is_slot_cleared(index));
    }
    assert_eq!(
        list.remove_range(2, 2),
        Err(ListError::OutOfRange { index: 4, len: 3 })
    );
}

#[test]
fn test_remove_by_value() {
    let mut list = list_of(&[1, 2, 1]);
    assert!(list.remove(&1));
    assert_eq!(list.to_vec(), vec![2, 1]);
    let version = list.version();
    assert!(!list.remove(&7));
    assert_eq!(list.version(), version);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut list = list_of(&[1, 2, 3]);
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.capacity(), 3);
    assert!(list.is_slot_cleared(0));
}

// ============================================================================
// Search, sort and reverse
// ============================================================================

#[test]
fn test_binary_search() {
    let list = list_of(&[1, 3, 5, 7, 9]);
    assert_eq!(list.binary_search(&5), 2);
    assert_eq!(list.binary_search(&4), !2);
    assert_eq!(list.binary_search(&0), !0);
    assert_eq!(list.binary_search(&10), !5);
}

#[test]
fn test_binary_search_in_subrange() {
    let list = list_of(&[9, 1, 3, 5, 0]);
    assert_eq!(list.binary_search_in(1, 3, |x| x.cmp(&3)), Ok(2));
    assert_eq!(list.binary_search_in(1, 3, |x| x.cmp(&4)), Ok(!3));
    assert_eq!(
        list.binary_search_in(3, 3, |x| x.cmp(&4)),
        Err(ListError::OutOfRange { index: 6, len: 5 })
    );
}

#[test]
fn test_sort_bumps_version_once() {
    let mut list = list_of(&[5, 4, 3, 2, 1]);
    let version = list.version();
    list.sort_by(1, 3, |a, b| a.cmp(b)).unwrap();
    assert_eq!(list.to_vec(), vec![5, 2, 3, 4, 1]);
    assert_eq!(list.version(), version + 1);

    list.sort();
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(list.version(), version + 2);
}

#[test]
fn test_reverse() {
    let mut list = list_of(&[1, 2, 3, 4]);
    list.reverse(1, 2).unwrap();
    assert_eq!(list.to_vec(), vec![1, 3, 2, 4]);
    list.reverse(0, 4).unwrap();
    assert_eq!(list.to_vec(), vec![4, 2, 3, 1]);
}

#[test]
fn test_index_of_and_positions() {
    let list = list_of(&[1, 2, 3, 2, 1]);
    assert_eq!(list.index_of(&2), Some(1));
    assert_eq!(list.last_index_of(&2), Some(3));
    assert_eq!(list.index_of(&9), None);
    assert!(list.contains(&3));
    assert_eq!(list.position_in(2, 3, |x| *x == 2), Ok(Some(3)));
    assert_eq!(list.rposition_in(0, 3, |x| *x == 1), Ok(Some(0)));
    assert_eq!(list.position_in(2, 1, |x| *x == 1), Ok(None));
}

// ============================================================================
// Copying
// ============================================================================

#[test]
fn test_clone_is_shallow_and_independent() {
    let shared = Arc::new(10);
    let mut list = ArrayList::new();
    list.add(Arc::clone(&shared)).unwrap();

    let mut copy = list.clone();
    assert!(Arc::ptr_eq(copy.get(0).unwrap(), &shared));

    copy.add(Arc::new(11)).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(copy.len(), 2);
    assert_ne!(list.version(), copy.version());
}

#[test]
fn test_to_vec_round_trip() {
    let list = list_of(&[3, 1, 4, 1, 5]);
    let rebuilt = ArrayList::from(list.to_vec());
    assert_eq!(rebuilt.len(), list.len());
    for index in 0..list.len() {
        assert_eq!(rebuilt.get(index), list.get(index));
    }
}

#[test]
fn test_copy_to() {
    let list = list_of(&[1, 2, 3, 4]);
    let mut target = [0; 5];
    list.copy_to(1, &mut target, 2, 3).unwrap();
    assert_eq!(target, [0, 0, 2, 3, 4]);
    assert_eq!(
        list.copy_to(0, &mut target, 3, 3),
        Err(ListError::InvalidArgument(
            "target slice is too short for the copied range"
        ))
    );
}

#[test]
fn test_repeat() {
    let list = ArrayList::repeat("x", 3).unwrap();
    assert_eq!(list.to_vec(), vec!["x", "x", "x"]);
    assert_eq!(list.capacity(), 3);
    assert!(ArrayList::repeat(0u8, 0).unwrap().is_empty());
    assert_eq!(
        ArrayList::repeat(0u8, MAX_ARRAY_LENGTH + 1).err(),
        Some(ListError::CapacityOverflow {
            requested: MAX_ARRAY_LENGTH + 1
        })
    );
}
