//! Numeric helpers shared by the z-plane analysis crates.
use az::CastFrom;
use num_traits::Float;
use numeric_literals::replace_float_literals;

pub mod polynomial;

/// Returns a new vector holding the elements of `items` in reverse order.
///
/// The input slice is left untouched; an empty slice yields an empty vector.
///
/// # Example
/// ```rust
/// let flipped = zplane_math::reversed(&[1.0, 2.0, 3.0]);
/// assert_eq!(flipped, vec![3.0, 2.0, 1.0]);
/// ```
pub fn reversed<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().rev().cloned().collect()
}

#[replace_float_literals(T::cast_from(literal))]
pub fn db_to_linear<T: Float + CastFrom<f64>>(db: T) -> T {
    10.0_f64.powf(db / 20.0)
}

#[replace_float_literals(T::cast_from(literal))]
pub fn linear_to_db<T: Float + CastFrom<f64>>(linear: T) -> T {
    20.0 * linear.log10()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reversed_empty() {
        let empty: Vec<f64> = vec![];
        assert_eq!(reversed(&empty), empty);
    }

    #[test]
    fn test_reversed_leaves_input_untouched() {
        let items = vec![1.0, 0.5, -0.25];
        let flipped = reversed(&items);
        assert_eq!(flipped, vec![-0.25, 0.5, 1.0]);
        assert_eq!(items, vec![1.0, 0.5, -0.25]);
    }

    #[test]
    fn test_db_round_trip() {
        for db in [-60.0, -6.0, 0.0, 6.0, 20.0] {
            let linear: f64 = db_to_linear(db);
            assert!(approx::relative_eq!(linear_to_db(linear), db, epsilon = 1e-12));
        }
    }

    proptest! {
        #[test]
        fn test_reversed_is_involutive(items in proptest::collection::vec(-1e6..1e6f64, 0..64)) {
            prop_assert_eq!(reversed(&reversed(&items)), items);
        }

        #[test]
        fn test_reversed_preserves_length(items in proptest::collection::vec(any::<f64>(), 0..64)) {
            prop_assert_eq!(reversed(&items).len(), items.len());
        }
    }
}
