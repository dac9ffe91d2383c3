/// Creates a [`SimpleVector`](crate::SimpleVector) from a list of values, or
/// from a value and a count.
///
/// - `simple_vector![a, b, c]` holds the given values in order, with
///   `capacity == len`.
/// - `simple_vector![value; n]` holds `n` clones of `value`.
///
/// ```
/// use simple_vector::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
///
/// let w = simple_vector![0u8; 4];
/// assert_eq!(w, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($value:expr; $n:expr) => {
        $crate::SimpleVector::from_elem($n, $value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($value),+])
    };
}
