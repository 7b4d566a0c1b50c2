use std::cmp::Ordering;

use crate::HullScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The turn is read off the sign of the cross product, computed by
  /// [`HullScalar::cmp_slope`]: positive is a counter-clockwise turn, zero is
  /// colinear, negative is clockwise. The zero test is exact and NaN counts
  /// as colinear.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use giftwrap::data::Point;
  /// # use giftwrap::Orientation;
  /// let p1 = Point::new([ 0, 0 ]);
  /// let p2 = Point::new([ 0, 1 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0, 2 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1, 2 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1, 2 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: HullScalar,
  {
    match T::cmp_slope(p1, p2, p3) {
      Ordering::Greater => CounterClockWise,
      Ordering::Less => ClockWise,
      Ordering::Equal => CoLinear,
    }
  }

  pub fn is_colinear(self) -> bool {
    self == CoLinear
  }

  pub fn is_ccw(self) -> bool {
    self == CounterClockWise
  }

  pub fn is_cw(self) -> bool {
    self == ClockWise
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}

/// Z-component of the cross product `(p2 - p1) × (p3 - p1)`.
///
/// Warning: May cause arithmetic overflow for fixed-precision types. Use
/// [`Orientation::new`] when only the sign is needed.
pub fn cross_product<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> T
where
  T: HullScalar,
{
  let [x1, y1] = p1.clone();
  let [x2, y2] = p2.clone();
  let [x3, y3] = p3.clone();
  (x2 - x1.clone()) * (y3 - y1.clone()) - (y2 - y1) * (x3 - x1)
}
