//! Randomized operation sequences checked against `std::vec::Vec`.

use contig::{SimpleVector, reserve};

fn check(v: &SimpleVector<u32>, model: &[u32]) {
    assert!(v.size() <= v.capacity());
    assert_eq!(v.size(), model.len());
    assert_eq!(v.as_slice(), model);
    assert!(v.at(model.len()).unwrap_err().is_out_of_range());
}

fn run(seed: u64, steps: usize) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut v = SimpleVector::<u32>::new();
    let mut model = Vec::<u32>::new();

    for _ in 0..steps {
        match rng.u32(0..100) {
            0..30 => {
                let x = rng.u32(..);
                v.push_back(x);
                model.push(x);
            }
            30..45 => {
                let index = rng.usize(0..=model.len());
                let x = rng.u32(..);
                assert_eq!(*v.insert(index, x).unwrap(), x);
                model.insert(index, x);
            }
            45..50 => {
                let index = model.len() + 1 + rng.usize(0..4);
                assert!(v.insert(index, 0).unwrap_err().is_out_of_range());
            }
            50..62 => {
                if !model.is_empty() {
                    let index = rng.usize(0..model.len());
                    assert_eq!(v.erase(index), index);
                    model.remove(index);
                }
            }
            62..72 => {
                if !model.is_empty() {
                    v.pop_back();
                    model.pop();
                }
            }
            72..80 => {
                let new_size = rng.usize(0..=model.len() * 2 + 4);
                v.resize(new_size);
                model.resize(new_size, 0);
            }
            80..86 => {
                let capacity = v.capacity();
                let new_capacity = rng.usize(0..=capacity * 2 + 4);
                v.reserve(new_capacity);
                assert_eq!(v.capacity(), capacity.max(new_capacity));
            }
            86..90 => {
                if !model.is_empty() {
                    let index = rng.usize(0..model.len());
                    let x = rng.u32(..);
                    *v.at_mut(index).unwrap() = x;
                    model[index] = x;
                }
            }
            90..94 => {
                let copy = v.clone();
                assert_eq!(copy, v);
                assert_eq!(copy.capacity(), copy.size());
                v = copy;
            }
            94..97 => {
                let mut other = SimpleVector::from(model.as_slice());
                v.swap(&mut other);
                assert_eq!(other.as_slice(), model.as_slice());
            }
            _ => {
                v.clear();
                model.clear();
            }
        }
        check(&v, &model);
    }
}

#[test]
fn test_random_operations_match_vec() {
    for seed in 0..16 {
        run(seed, 2000);
    }
}

#[test]
fn test_random_comparisons_match_slices() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..500 {
        let a: Vec<u8> = (0..rng.usize(0..5)).map(|_| rng.u8(0..3)).collect();
        let b: Vec<u8> = (0..rng.usize(0..5)).map(|_| rng.u8(0..3)).collect();
        let va = SimpleVector::from(a.clone());
        let vb = SimpleVector::from(b.clone());
        assert_eq!(va == vb, a == b);
        assert_eq!(va < vb, a < b);
        assert_eq!(va <= vb, a <= b);
        assert_eq!(va > vb, a > b);
        assert_eq!(va >= vb, a >= b);
        assert_eq!(va.cmp(&vb), a.cmp(&b));
    }
}

#[test]
fn test_reserve_then_fill() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..50 {
        let n = rng.usize(1..200);
        let mut v = SimpleVector::<u32>::from(reserve(n));
        let begin = v.as_ptr_range().start;
        for i in 0..n as u32 {
            v.push_back(i);
        }
        assert_eq!(v.capacity(), n);
        assert_eq!(v.as_ptr_range().start, begin);
        assert!(v.iter().copied().eq(0..n as u32));
    }
}
