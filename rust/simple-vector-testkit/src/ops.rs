//! Random operation scripts for differential testing of sequence containers.
//!
//! A script is generated against a shadow length, so every operation in it is
//! valid at the point where it is applied (no pop on empty, no out-of-range
//! erase). Replaying the same script against the container under test and
//! against [`apply_to_vec`] must produce identical contents.

/// A single mutation of a sequence container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op<T> {
    PushBack(T),
    PopBack,
    Insert(usize, T),
    Erase(usize),
    Set(usize, T),
    Resize(usize),
    Reserve(usize),
    Clear,
}

/// Options controlling the shape of generated scripts.
#[derive(Clone, Debug)]
pub struct ScriptOptions {
    /// Number of operations to generate.
    pub op_count: usize,
    /// Upper bound for `Resize` and `Reserve` targets.
    pub max_len: usize,
    /// Weight of `Clear` relative to the other operations (out of 100).
    pub clear_weight: u32,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        ScriptOptions {
            op_count: 1000,
            max_len: 64,
            clear_weight: 1,
        }
    }
}

/// Generates a reproducible operation script over `i64` values.
pub fn generate_script(seed: u64, options: &ScriptOptions) -> Vec<Op<i64>> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut len = 0usize;
    let mut script = Vec::with_capacity(options.op_count);
    let max_len = options.max_len.max(1);
    while script.len() < options.op_count {
        let roll = rng.u32(0..100);
        let op = if roll < options.clear_weight {
            len = 0;
            Op::Clear
        } else if roll < 40 {
            len += 1;
            Op::PushBack(rng.i64(-1000..1000))
        } else if roll < 55 {
            let pos = rng.usize(0..=len);
            len += 1;
            Op::Insert(pos, rng.i64(-1000..1000))
        } else if roll < 65 {
            if len == 0 {
                continue;
            }
            len -= 1;
            Op::PopBack
        } else if roll < 75 {
            if len == 0 {
                continue;
            }
            let pos = rng.usize(0..len);
            len -= 1;
            Op::Erase(pos)
        } else if roll < 85 {
            if len == 0 {
                continue;
            }
            Op::Set(rng.usize(0..len), rng.i64(-1000..1000))
        } else if roll < 93 {
            len = rng.usize(0..=max_len);
            Op::Resize(len)
        } else {
            Op::Reserve(rng.usize(0..=max_len * 2))
        };
        script.push(op);
    }
    script
}

/// Applies `op` to a `Vec`, the reference model for the container under test.
///
/// `Reserve` has no observable effect on the contents and is ignored.
pub fn apply_to_vec<T: Clone + Default>(vec: &mut Vec<T>, op: &Op<T>) {
    match op {
        Op::PushBack(value) => vec.push(value.clone()),
        Op::PopBack => {
            vec.pop().expect("pop on empty model");
        }
        Op::Insert(pos, value) => vec.insert(*pos, value.clone()),
        Op::Erase(pos) => {
            vec.remove(*pos);
        }
        Op::Set(pos, value) => vec[*pos] = value.clone(),
        Op::Resize(len) => vec.resize_with(*len, T::default),
        Op::Reserve(_) => (),
        Op::Clear => vec.clear(),
    }
}
