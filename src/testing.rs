// This module contains strategies for:
//  * points with fixed-precision, arbitrary-precision and float coordinates
//  * point sets with many duplicates and colinear triples
// A Strategy is a way to generate a shrinkable value.
use crate::data::Point;
use crate::HullScalar;

use num_bigint::BigInt;
use ordered_float::NotNan;
use proptest::array::uniform2;
use proptest::prelude::*;

// Small enough that `Point::cross` and `signed_area_2x` never overflow an i64.
const I64_RANGE: std::ops::RangeInclusive<i64> = -1_000_000..=1_000_000;

pub fn any_64() -> impl Strategy<Value = [i64; 2]> {
  uniform2(I64_RANGE)
}

pub fn any_8() -> impl Strategy<Value = Point<i8>> {
  uniform2(any::<i8>()).prop_map(Point::new)
}

pub fn point_64() -> impl Strategy<Value = Point<i64>> {
  any_64().prop_map(Point::new)
}

// A tiny grid so that duplicates and colinear points are common.
pub fn grid_point() -> impl Strategy<Value = Point<i64>> {
  uniform2(-4_i64..=4).prop_map(Point::new)
}

pub fn any_r() -> impl Strategy<Value = Point<BigInt>> {
  any::<[i64; 2]>().prop_map(|arr| Point::<BigInt>::from(Point::new(arr)))
}

pub fn any_nn() -> impl Strategy<Value = Point<NotNan<f64>>> {
  uniform2(-1e6..1e6).prop_map(|[x, y]: [f64; 2]| {
    Point::new([NotNan::new(x).unwrap(), NotNan::new(y).unwrap()])
  })
}

/// True if no three points in the set span a triangle with non-zero area.
pub fn all_colinear<T: HullScalar>(pts: &[Point<T>]) -> bool {
  let Some(first) = pts.first() else {
    return true;
  };
  match pts.iter().find(|pt| *pt != first) {
    None => true,
    Some(second) => pts
      .iter()
      .all(|pt| first.orientation(second, pt).is_colinear()),
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  #[test]
  fn colinear_sets() {
    assert!(all_colinear::<i64>(&[]));
    assert!(all_colinear(&[Point::new([1, 1]), Point::new([1, 1])]));
    assert!(all_colinear(&[
      Point::new([0, 0]),
      Point::new([1, 1]),
      Point::new([3, 3])
    ]));
    assert!(!all_colinear(&[
      Point::new([0, 0]),
      Point::new([1, 1]),
      Point::new([3, 2])
    ]));
  }
}
