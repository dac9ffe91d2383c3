use crate::{ErrorKind, SimpleVector, reserve, simple_vector};

#[test]
fn test_default_is_empty_and_unallocated() {
    let v = SimpleVector::<i32>::new();
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 0);
    assert!(v.is_empty());
    assert!(v.as_ptr().is_null());
    assert_eq!(v, SimpleVector::default());
}

#[test]
fn test_with_size() {
    let v = SimpleVector::<i32>::with_size(5);
    assert_eq!(v.len(), 5);
    assert_eq!(v.capacity(), 5);
    assert!(v.iter().all(|&x| x == 0));

    let v = SimpleVector::<i32>::with_size(0);
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 0);
}

#[test]
fn test_from_elem() {
    let v = SimpleVector::from_elem(3, 42);
    assert_eq!(v, [42, 42, 42]);
    assert_eq!(v.capacity(), 3);

    let v = simple_vector![String::from("x"); 2];
    assert_eq!(v, [String::from("x"), String::from("x")]);
}

#[test]
fn test_from_literal_list() {
    let v = simple_vector![1, 2, 3];
    assert_eq!(v.len(), 3);
    assert_eq!(v.capacity(), 3);
    assert_eq!(v[0], 1);
    assert_eq!(v[2], 3);

    let empty: SimpleVector<i32> = simple_vector![];
    assert!(empty.is_empty());
}

#[test]
fn test_reserve_constructor_allocates_capacity() {
    let mut v = SimpleVector::<i32>::from(reserve(5));
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 5);
    assert!(!v.as_ptr().is_null());

    let ptr = v.as_ptr();
    for i in 0..5 {
        v.push_back(i);
    }
    assert_eq!(v.capacity(), 5);
    assert_eq!(v.as_ptr(), ptr);
}

#[test]
fn test_at_matches_index() {
    let mut v = simple_vector![10, 20, 30];
    v.push_back(40);
    v.insert(1, 15);
    v.erase(3);
    for i in 0..v.len() {
        assert_eq!(*v.at(i).unwrap(), v[i]);
        assert_eq!(unsafe { *v.get_unchecked(i) }, v[i]);
    }
}

#[test]
fn test_at_out_of_range() {
    let empty = SimpleVector::<i32>::new();
    let err = empty.at(0).unwrap_err();
    assert_eq!(*err.kind(), ErrorKind::OutOfRange { index: 0, len: 0 });

    let mut v = SimpleVector::<i32>::from(reserve(10));
    v.push_back(1);
    assert!(v.at(1).unwrap_err().is_out_of_range());
    assert!(v.at(usize::MAX).is_err());
    assert!(v.at_mut(1).is_err());

    *v.at_mut(0).unwrap() = 7;
    assert_eq!(v[0], 7);
}

#[test]
#[should_panic]
fn test_index_past_len_panics_within_capacity() {
    let mut v = SimpleVector::<i32>::with_capacity(4);
    v.push_back(1);
    let _ = v[1];
}

#[test]
fn test_push_back_doubles_capacity() {
    let mut v = SimpleVector::new();
    let mut capacities = Vec::new();
    for i in 0..9 {
        v.push_back(i);
        capacities.push(v.capacity());
    }
    assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(v.len(), 9);
    assert_eq!(v, (0..9).collect::<Vec<_>>());
}

#[test]
fn test_clear_keeps_capacity() {
    let mut v = simple_vector![1, 2, 3];
    let ptr = v.as_ptr();
    v.clear();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 3);
    v.push_back(9);
    assert_eq!(v, [9]);
    assert_eq!(v.as_ptr(), ptr);
}

#[test]
fn test_resize_shrink_then_grow_within_capacity() {
    let mut v = SimpleVector::<i32>::new();
    v.resize(5);
    assert_eq!(v.len(), 5);
    assert_eq!(v.capacity(), 5);
    for x in v.iter_mut() {
        *x = 1;
    }

    v.resize(2);
    assert_eq!(v.len(), 2);
    assert_eq!(v.capacity(), 5);
    assert_eq!(v, [1, 1]);

    v.resize(5);
    assert_eq!(v.capacity(), 5);
    assert_eq!(v, [1, 1, 0, 0, 0]);
}

#[test]
fn test_resize_past_capacity() {
    let mut v = simple_vector![1, 2, 3];
    v.resize(4);
    assert_eq!(v.capacity(), 6);
    assert_eq!(v, [1, 2, 3, 0]);

    v.resize(20);
    assert_eq!(v.capacity(), 20);
    assert_eq!(v.len(), 20);
    assert_eq!(&v[..4], &[1, 2, 3, 0]);
    assert!(v[4..].iter().all(|&x| x == 0));
}

#[test]
fn test_range_indexing_covers_only_elements() {
    let mut v = SimpleVector::<i32>::with_capacity(8);
    v.extend([1, 2, 3, 4]);
    assert_eq!(&v[1..3], &[2, 3]);
    assert_eq!(&v[..], &[1, 2, 3, 4]);
    assert_eq!(v[2..].len(), 2);

    v[..2].copy_from_slice(&[10, 20]);
    for x in &mut v[2..] {
        *x += 100;
    }
    assert_eq!(v, [10, 20, 103, 104]);
}

#[test]
#[should_panic]
fn test_range_past_len_panics_within_capacity() {
    let mut v = SimpleVector::<i32>::with_capacity(8);
    v.push_back(1);
    let _ = &v[..2];
}

#[test]
fn test_insert_in_middle_when_full_doubles() {
    let mut v = SimpleVector::<i32>::with_capacity(0);
    v.insert(0, 2);
    assert_eq!(v.capacity(), 1);
    v.extend([4, 5, 6]);
    assert_eq!(v.capacity(), 4);
    v.insert(1, 3);
    assert_eq!(v, [2, 3, 4, 5, 6]);
    assert_eq!(v.capacity(), 8);
}

#[test]
fn test_reserve() {
    let mut v = simple_vector![1, 2];
    v.reserve(1);
    assert_eq!(v.capacity(), 2);
    v.reserve(10);
    assert_eq!(v.capacity(), 10);
    assert_eq!(v, [1, 2]);
    v.reserve(5);
    assert_eq!(v.capacity(), 10);
}

#[test]
fn test_insert_at_front() {
    let mut v = simple_vector![2, 3, 4];
    let pos = v.insert(0, 1);
    assert_eq!(pos, 0);
    assert_eq!(v, [1, 2, 3, 4]);
    assert_eq!(v.capacity(), 6);

    let pos = v.insert(2, 10);
    assert_eq!(pos, 2);
    assert_eq!(v, [1, 2, 10, 3, 4]);
    assert_eq!(v.capacity(), 6);
}

#[test]
fn test_insert_within_capacity_does_not_reallocate() {
    let mut v = SimpleVector::with_capacity(4);
    v.push_back(1);
    v.push_back(3);
    let ptr = v.as_ptr();
    v.insert(1, 2);
    v.insert(3, 4);
    assert_eq!(v, [1, 2, 3, 4]);
    assert_eq!(v.as_ptr(), ptr);
}

#[test]
fn test_insert_at_end_and_into_empty() {
    let mut v = SimpleVector::new();
    assert_eq!(v.insert(0, 5), 0);
    assert_eq!(v.capacity(), 1);
    assert_eq!(v.insert(1, 6), 1);
    assert_eq!(v, [5, 6]);
    assert_eq!(v.capacity(), 2);
}

#[test]
#[should_panic(expected = "insert position 4 out of range for length 3")]
fn test_insert_past_end_panics() {
    let mut v = simple_vector![1, 2, 3];
    v.insert(4, 0);
}

#[test]
fn test_erase() {
    let mut v = simple_vector![1, 2, 3];
    let next = v.erase(0);
    assert_eq!(next, 0);
    assert_eq!(v, [2, 3]);
    assert_eq!(v.capacity(), 3);

    let next = v.erase(1);
    assert_eq!(next, v.len());
    assert_eq!(v, [2]);
}

#[test]
#[should_panic(expected = "erase position 3 out of range")]
fn test_erase_at_end_panics() {
    let mut v = simple_vector![1, 2, 3];
    v.erase(3);
}

#[test]
fn test_pop_back() {
    let mut v = simple_vector![1, 2];
    v.pop_back();
    assert_eq!(v, [1]);
    v.pop_back();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 2);
}

#[test]
#[should_panic(expected = "pop_back on an empty SimpleVector")]
fn test_pop_back_empty_panics() {
    let mut v = SimpleVector::<i32>::new();
    v.pop_back();
}

#[test]
fn test_clone_is_deep() {
    let mut src = SimpleVector::with_capacity(10);
    src.extend_from_slice(&[1, 2, 3]);
    let mut copy = src.clone();
    assert_eq!(copy, src);
    assert_eq!(copy.capacity(), 3);
    assert_ne!(copy.as_ptr(), src.as_ptr());

    copy[0] = 100;
    copy.push_back(4);
    assert_eq!(src, [1, 2, 3]);
    assert_eq!(copy, [100, 2, 3, 4]);
}

#[test]
fn test_clone_from() {
    let src = simple_vector![String::from("a"), String::from("b")];
    let mut dst = simple_vector![String::from("z"); 5];
    dst.clone_from(&src);
    assert_eq!(dst, src);
    assert_eq!(dst.capacity(), 2);
}

#[test]
fn test_take_leaves_source_empty() {
    let mut src = simple_vector![1, 2, 3];
    let ptr = src.as_ptr();
    let dst = src.take();
    assert_eq!(dst, [1, 2, 3]);
    assert_eq!(dst.as_ptr(), ptr);
    assert_eq!(src.len(), 0);
    assert_eq!(src.capacity(), 0);

    let mut target = simple_vector![9];
    assert_eq!(target, [9]);
    let mut other = dst;
    target = other.take();
    assert_eq!(target, [1, 2, 3]);
    assert!(other.is_empty());
}

#[test]
fn test_swap() {
    let mut a = simple_vector![1, 2, 3];
    let mut b = SimpleVector::with_capacity(10);
    b.push_back(7);
    let (a_ptr, b_ptr) = (a.as_ptr(), b.as_ptr());
    a.swap(&mut b);
    assert_eq!(a, [7]);
    assert_eq!(a.capacity(), 10);
    assert_eq!(b, [1, 2, 3]);
    assert_eq!(b.capacity(), 3);
    assert_eq!(a.as_ptr(), b_ptr);
    assert_eq!(b.as_ptr(), a_ptr);
}

#[test]
fn test_equality_and_ordering() {
    assert_eq!(simple_vector![1, 2, 3], simple_vector![1, 2, 3]);
    assert_ne!(simple_vector![1, 2], simple_vector![1, 2, 3]);
    assert_ne!(simple_vector![1, 2, 3], simple_vector![1, 2]);
    assert!(simple_vector![1, 2] < simple_vector![1, 2, 3]);
    assert!(simple_vector![1, 2, 3] > simple_vector![1, 2]);
    assert!(simple_vector![1, 3] > simple_vector![1, 2, 3]);
    assert!(simple_vector![1, 2, 3] <= simple_vector![1, 2, 3]);
    assert!(simple_vector![1, 2, 3] >= simple_vector![1, 2, 3]);
    assert!(SimpleVector::<i32>::new() < simple_vector![0]);
}

#[test]
fn test_equality_ignores_spare_slots() {
    let mut a = simple_vector![1, 2, 3, 4];
    a.pop_back();
    let mut b = SimpleVector::<i32>::with_capacity(16);
    b.extend([1, 2, 3]);
    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);

    use std::hash::{BuildHasher, RandomState};
    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(&b));
}

#[test]
fn test_iteration() {
    let mut v = simple_vector![1, 2, 3];
    let sum: i32 = v.iter().sum();
    assert_eq!(sum, 6);

    for x in &mut v {
        *x *= 10;
    }
    let collected: Vec<_> = (&v).into_iter().copied().collect();
    assert_eq!(collected, [10, 20, 30]);

    let range = v.as_ptr_range();
    assert_eq!(unsafe { range.end.offset_from(range.start) }, 3);

    v.pop_back();
    let owned: Vec<i32> = v.into_iter().collect();
    assert_eq!(owned, [10, 20]);
}

#[test]
fn test_conversions() {
    let v: SimpleVector<_> = (1..=4).collect();
    assert_eq!(v, vec![1, 2, 3, 4]);
    assert_eq!(v.capacity(), 4);

    let v = SimpleVector::from(&[5, 6][..]);
    assert_eq!(v, &[5, 6][..]);

    let mut v = simple_vector![1, 2, 3];
    v.pop_back();
    let vec: Vec<i32> = v.into();
    assert_eq!(vec, [1, 2]);

    assert!(SimpleVector::<u8>::new().into_vec().is_empty());
}

#[test]
fn test_extend() {
    let mut v = SimpleVector::<i32>::new();
    v.extend([1, 2, 3]);
    v.extend(&[4, 5]);
    v.extend_from_slice(&[6]);
    assert_eq!(v, [1, 2, 3, 4, 5, 6]);
    assert_eq!(v.capacity(), 8);
}

#[test]
fn test_slice_access_through_deref() {
    let mut v = simple_vector![3, 1, 2];
    v.sort();
    assert_eq!(v.first(), Some(&1));
    assert_eq!(v.last(), Some(&3));
    assert!(v.contains(&2));
    assert_eq!(v.get(3), None);
}

#[test]
fn test_debug_prints_elements_only() {
    let mut v = simple_vector![1, 2, 3];
    v.pop_back();
    assert_eq!(format!("{v:?}"), "[1, 2]");
}
