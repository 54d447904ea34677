/// The floating-point type used for every physical quantity (coordinates,
/// angles, energies).
///
/// Double precision by default; the `single-precision` feature switches it to
/// `f32` without changes anywhere else.
#[cfg(not(feature = "single-precision"))]
pub type Scalar = f64;

/// The floating-point type used for every physical quantity (coordinates,
/// angles, energies).
#[cfg(feature = "single-precision")]
pub type Scalar = f32;

/// The unsigned type used for container indices, counts and offsets.
pub type Index = usize;

/// Sentinel meaning "no such index". Never a valid container position.
pub const MAX_INDEX: Index = Index::MAX;

pub type Vector2 = nalgebra::Vector2<Scalar>;
pub type Vector3 = nalgebra::Vector3<Scalar>;
pub type Point3 = nalgebra::Point3<Scalar>;
pub type Matrix3 = nalgebra::Matrix3<Scalar>;

/// Collapses an optional index into the sentinel convention.
pub const fn index_from_option(index: Option<Index>) -> Index {
    match index {
        Some(i) => i,
        None => MAX_INDEX,
    }
}

/// Expands a sentinel-convention index into an `Option`.
pub const fn index_to_option(index: Index) -> Option<Index> {
    if index == MAX_INDEX { None } else { Some(index) }
}

pub const fn is_valid_index(index: Index) -> bool {
    index != MAX_INDEX
}

/// Returns the position of the first item matching `predicate`, or
/// [`MAX_INDEX`] when nothing matches.
pub fn find_index<T, F>(items: &[T], predicate: F) -> Index
where
    F: FnMut(&T) -> bool,
{
    index_from_option(items.iter().position(predicate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_index_is_the_largest_representable_index() {
        assert_eq!(MAX_INDEX, usize::MAX);
        assert_eq!(MAX_INDEX, Index::MAX);
    }

    #[test]
    fn max_index_never_collides_with_a_real_position() {
        let items = [10u8, 20, 30, 40];
        for i in 0..items.len() {
            assert_ne!(i, MAX_INDEX);
            assert!(is_valid_index(i));
        }
        assert!(!is_valid_index(MAX_INDEX));
    }

    #[test]
    fn find_index_returns_position_of_first_match() {
        let names = ["N", "CA", "C", "CA"];
        assert_eq!(find_index(&names, |n| *n == "CA"), 1);
        assert_eq!(find_index(&names, |n| *n == "N"), 0);
    }

    #[test]
    fn find_index_returns_sentinel_when_nothing_matches() {
        let names = ["N", "CA", "C"];
        assert_eq!(find_index(&names, |n| *n == "CB"), MAX_INDEX);

        let empty: [u32; 0] = [];
        assert_eq!(find_index(&empty, |_| true), MAX_INDEX);
    }

    #[test]
    fn option_bridging_maps_none_to_sentinel_and_back() {
        assert_eq!(index_from_option(None), MAX_INDEX);
        assert_eq!(index_from_option(Some(7)), 7);
        assert_eq!(index_to_option(MAX_INDEX), None);
        assert_eq!(index_to_option(0), Some(0));
        assert_eq!(index_to_option(MAX_INDEX - 1), Some(MAX_INDEX - 1));
    }

    #[test]
    fn geometry_aliases_use_scalar_precision() {
        let v = Vector3::new(1.0, 2.0, 2.0);
        let norm: Scalar = v.norm();
        assert!((norm - 3.0).abs() < 1e-6);

        let p = Point3::origin() + v;
        assert_eq!(p.coords, v);
        assert_eq!(Matrix3::identity() * v, v);
        assert_eq!(Vector2::new(3.0, 4.0).norm(), 5.0);
    }

    #[cfg(not(feature = "single-precision"))]
    #[test]
    fn scalar_is_double_precision_by_default() {
        assert_eq!(std::mem::size_of::<Scalar>(), 8);
    }

    #[cfg(feature = "single-precision")]
    #[test]
    fn scalar_is_single_precision_when_requested() {
        assert_eq!(std::mem::size_of::<Scalar>(), 4);
    }
}
