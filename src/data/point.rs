use num_bigint::BigInt;
use num_rational::BigRational;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;

use crate::orientation::cross_product;
use crate::{Error, HullScalar, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Named fields on the wire: `{"x": .., "y": ..}` in JSON, an `x,y` header in CSV.
impl<T: Serialize> Serialize for Point<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("Point", 2)?;
    state.serialize_field("x", &self.array[0])?;
    state.serialize_field("y", &self.array[1])?;
    state.end()
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Point<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Point<T>, D::Error> {
    #[derive(Deserialize)]
    struct XY<T> {
      x: T,
      y: T,
    }
    let XY { x, y } = XY::deserialize(deserializer)?;
    Ok(Point { array: [x, y] })
  }
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  /// Signed area of the parallelogram spanned by `self→q` and `self→r`.
  ///
  /// Positive if `r` lies strictly to the left of the directed line from
  /// `self` to `q`, zero if the three points are colinear, and negative if
  /// `r` lies to the right.
  ///
  /// Warning: May cause arithmetic overflow.
  ///
  /// ```rust
  /// # use giftwrap::data::Point;
  /// let origin = Point::new([0, 0]);
  /// assert_eq!(origin.cross(&Point::new([4, 0]), &Point::new([4, 4])), 16);
  /// assert_eq!(origin.cross(&Point::new([4, 0]), &Point::new([2, 0])), 0);
  /// ```
  pub fn cross(&self, q: &Point<T>, r: &Point<T>) -> T
  where
    T: HullScalar,
  {
    cross_product(&self.array, &q.array, &r.array)
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: HullScalar,
  {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  // Warning: May cause arithmetic overflow.
  pub fn squared_euclidean_distance(&self, rhs: &Point<T>) -> T
  where
    T: HullScalar,
  {
    let [x1, y1] = self.array.clone();
    let [x2, y2] = rhs.array.clone();
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx.clone() * dx + dy.clone() * dy
  }

  /// Compare the distances from `self` to `p` and from `self` to `q`.
  ///
  /// Computed by [`HullScalar::cmp_dist`]: fixed-precision integers never
  /// overflow and incomparable (NaN) distances compare as `Equal`.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering
  where
    T: HullScalar,
  {
    T::cmp_dist(&self.array, &p.array, &q.array)
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    let [x, y] = self.array.clone();
    Point { array: [f(x), f(y)] }
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.array[0], self.array[1])
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl From<Point<i64>> for Point<BigInt> {
  fn from(point: Point<i64>) -> Point<BigInt> {
    point.cast(BigInt::from)
  }
}

// Lossless: every finite f64 is a dyadic rational.
impl TryFrom<&Point<f64>> for Point<BigRational> {
  type Error = Error;
  fn try_from(point: &Point<f64>) -> Result<Point<BigRational>, Error> {
    let exact = |v: f64| BigRational::from_float(v).ok_or(Error::NonFiniteCoordinate);
    Ok(Point {
      array: [exact(point.array[0])?, exact(point.array[1])?],
    })
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
pub mod tests {
  use super::*;
  use crate::testing::*;
  use crate::Orientation::*;

  use claims::{assert_err, assert_ok_eq};
  use num_traits::Zero;
  use ordered_float::NotNan;
  use proptest::prelude::*;
  use rand::Rng;
  use rand::SeedableRng;
  use test_strategy::proptest;

  #[proptest]
  fn squared_euclidean_distance_fuzz(
    #[strategy(any_nn())] pt1: Point<NotNan<f64>>,
    #[strategy(any_nn())] pt2: Point<NotNan<f64>>,
  ) {
    prop_assert!(*pt1.squared_euclidean_distance(&pt2) >= 0.0);
  }

  #[proptest]
  fn squared_euclidean_distance_symmetric(
    #[strategy(any_r())] pt1: Point<BigInt>,
    #[strategy(any_r())] pt2: Point<BigInt>,
  ) {
    prop_assert_eq!(
      pt1.squared_euclidean_distance(&pt2),
      pt2.squared_euclidean_distance(&pt1)
    );
  }

  #[proptest]
  fn bigint_colinear(
    #[strategy(any_r())] pt1: Point<BigInt>,
    #[strategy(any_r())] pt2: Point<BigInt>,
  ) {
    let pt3 = Point::new([
      &pt2.array[0] * 2 - &pt1.array[0],
      &pt2.array[1] * 2 - &pt1.array[1],
    ]);
    prop_assert!(pt1.orientation(&pt2, &pt3).is_colinear());
    prop_assert!(pt1.cross(&pt2, &pt3).is_zero());
  }

  #[proptest]
  fn bigint_not_colinear(
    #[strategy(any_r())] pt1: Point<BigInt>,
    #[strategy(any_r())] pt2: Point<BigInt>,
  ) {
    prop_assume!(pt1 != pt2);
    // Rotate pt2 by 90 degrees around pt1.
    let dx = &pt2.array[0] - &pt1.array[0];
    let dy = &pt2.array[1] - &pt1.array[1];
    let pt3 = Point::new([&pt1.array[0] - dy, &pt1.array[1] + dx]);
    prop_assert_eq!(pt1.orientation(&pt2, &pt3), CounterClockWise);
    prop_assert_eq!(pt1.orientation(&pt3, &pt2), ClockWise);
  }

  #[proptest]
  fn exact_conversion_roundtrip(#[strategy(any_nn())] pt: Point<NotNan<f64>>) {
    let pt = pt.cast(NotNan::into_inner);
    let exact = Point::<BigRational>::try_from(&pt).unwrap();
    prop_assert_eq!(num_traits::ToPrimitive::to_f64(exact.x_coord()), Some(pt.array[0]));
    prop_assert_eq!(num_traits::ToPrimitive::to_f64(exact.y_coord()), Some(pt.array[1]));
  }

  #[test]
  fn test_turns() {
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([1, 1]), &Point::new([2, 2])),
      CoLinear
    );
    assert_eq!(
      Point::new([0.0, 0.0]).orientation(&Point::new([1.0, 1.0]), &Point::new([2.0, 2.0])),
      CoLinear
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([2, 2])),
      ClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([-2, 2])),
      CounterClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 0]), &Point::new([0, 0])),
      CoLinear
    );
  }

  #[test]
  fn unit_1() {
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([1, 0]), &Point::new([1, 0])),
      CoLinear
    );
    assert_eq!(
      Point::new([1, 0]).orientation(&Point::new([2, 0]), &Point::new([0, 0])),
      CoLinear
    );
    assert_eq!(
      Point::new([1, 0]).orientation(&Point::new([0, 6]), &Point::new([0, 8])),
      ClockWise
    );
  }

  #[test]
  fn cmp_distance() {
    let origin = Point::new([0, 0]);
    assert_eq!(
      origin.cmp_distance_to(&Point::new([2, 0]), &Point::new([4, 0])),
      Ordering::Less
    );
    assert_eq!(
      origin.cmp_distance_to(&Point::new([0, 3]), &Point::new([3, 0])),
      Ordering::Equal
    );
    assert_eq!(
      Point::new([0.0, 0.0]).cmp_distance_to(&Point::new([f64::NAN, 0.0]), &Point::new([1.0, 0.0])),
      Ordering::Equal
    );
  }

  #[test]
  fn cmp_distance_extreme_i64() {
    let origin = Point::new([i64::MIN, i64::MIN]);
    let far = Point::new([i64::MAX, i64::MAX]);
    let near = Point::new([i64::MAX, i64::MIN]);
    assert_eq!(origin.cmp_distance_to(&far, &near), Ordering::Greater);
    assert_eq!(origin.cmp_distance_to(&near, &far), Ordering::Less);
    assert_eq!(origin.cmp_distance_to(&far, &far), Ordering::Equal);
    assert_eq!(
      Point::new([0_i8, 0]).cmp_distance_to(&Point::new([i8::MIN, 0]), &Point::new([i8::MAX, 0])),
      Ordering::Greater
    );
  }

  #[test]
  fn exact_rejects_non_finite() {
    assert_err!(Point::<BigRational>::try_from(&Point::new([f64::NAN, 0.0])));
    assert_err!(Point::<BigRational>::try_from(&Point::new([0.0, f64::INFINITY])));
    assert_ok_eq!(
      Point::<BigRational>::try_from(&Point::new([0.5, -2.0])),
      Point::new([
        BigRational::new(1.into(), 2.into()),
        BigRational::from_integer((-2).into())
      ])
    );
  }

  #[test]
  fn serde_named_fields() {
    let pt = Point::new([1.5, -2.0]);
    let json = serde_json::to_string(&pt).unwrap();
    assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
    let back: Point<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pt);
  }

  #[test]
  fn display() {
    assert_eq!(Point::new([3, -1]).to_string(), "(3, -1)");
  }

  #[test]
  fn random_sampling() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
    let pts: Vec<Point<f64>> = (0..100).map(|_| rng.gen()).collect();
    assert!(pts
      .iter()
      .all(|pt| (0.0..1.0).contains(pt.x_coord()) && (0.0..1.0).contains(pt.y_coord())));
  }
}
