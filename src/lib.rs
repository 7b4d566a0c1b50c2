#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls of planar point sets by [gift wrapping][wiki].
//!
//! The core is [`algorithms::convex_hull`]: a pure function from an ordered
//! slice of [points](data::Point) to the [hull](data::Hull) vertices in
//! counter-clockwise order, starting at the leftmost point. The [`io`] and
//! [`render`] modules are thin adapters for reading points from CSV files and
//! drawing the result on a text canvas.
//!
//! ```rust
//! # use giftwrap::algorithms::convex_hull;
//! # use giftwrap::data::Point;
//! let pts = vec![
//!   Point::new([0, 0]),
//!   Point::new([4, 0]),
//!   Point::new([4, 4]),
//!   Point::new([0, 4]),
//!   Point::new([2, 2]),
//! ];
//! let hull = convex_hull(&pts);
//! assert_eq!(
//!   hull.vertices(),
//!   &[
//!     Point::new([0, 0]),
//!     Point::new([4, 0]),
//!     Point::new([4, 4]),
//!     Point::new([0, 4]),
//!   ]
//! );
//! ```
//!
//! [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
use num_traits::{NumOps, Zero};
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::orientation::cross_product;

pub mod algorithms;
pub mod data;
pub mod io;
mod orientation;
pub mod render;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("Insufficient vertices")]
  InsufficientVertices,
  /// Two consecutive edges are either colinear or oriented clockwise.
  #[error("Convex violation")]
  ConvexViolation,
  #[error("Clockwise violation")]
  ClockWiseViolation,
  #[error("Coordinate is NaN or infinite")]
  NonFiniteCoordinate,
}

/// Coordinate types the hull algorithms work over.
///
/// Orientation and distance tests go through [`HullScalar::cmp_slope`] and
/// [`HullScalar::cmp_dist`]. Fixed-precision integers compute them in a
/// wider unsigned type and never overflow. Floating point coordinates use
/// plain arithmetic with exact zero tests and no epsilon, so they inherit the
/// usual rounding caveats for nearly colinear points. Use `BigInt` or
/// `BigRational` when that matters.
pub trait HullScalar: Clone + Debug + PartialOrd + NumOps + Zero {
  /// Sign of the cross product `(q - p) × (r - p)`. `Greater` means that `r`
  /// lies to the left of the directed line from `p` to `q`.
  ///
  /// Incomparable results (NaN) are reported as `Equal`.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
    cross_product(p, q, r)
      .partial_cmp(&Self::zero())
      .unwrap_or(Ordering::Equal)
  }

  /// Compare the distance from `p` to `q` with the distance from `p` to `r`.
  ///
  /// Incomparable results (NaN) are reported as `Equal`.
  fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
    let dist = |a: &[Self; 2]| {
      let dx = a[0].clone() - p[0].clone();
      let dy = a[1].clone() - p[1].clone();
      dx.clone() * dx + dy.clone() * dy
    };
    dist(q).partial_cmp(&dist(r)).unwrap_or(Ordering::Equal)
  }
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $ulong:ty ) => {
    impl HullScalar for $ty {
      fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        // Absolute difference along with its sign.
        // diff(0, 10) => (10, true)
        // diff(10, 0) => (10, false)
        // diff(i8::MIN, i8::MAX) => (255_u16, true)
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        let (ux, ux_neg) = diff(q[0], p[0]);
        let (vy, vy_neg) = diff(r[1], p[1]);
        let ux_vy_neg = (ux_neg ^ vy_neg) && ux != 0 && vy != 0;
        let (uy, uy_neg) = diff(q[1], p[1]);
        let (vx, vx_neg) = diff(r[0], p[0]);
        let uy_vx_neg = (uy_neg ^ vx_neg) && uy != 0 && vx != 0;
        match (ux_vy_neg, uy_vx_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (uy * vx).cmp(&(ux * vy)),
          (false, false) => (ux * vy).cmp(&(uy * vx)),
        }
      }

      fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        fn diff(a: $ty, b: $ty) -> $ulong {
          if b > a {
            b.wrapping_sub(a) as $uty as $ulong
          } else {
            a.wrapping_sub(b) as $uty as $ulong
          }
        }
        let pq_x = diff(p[0], q[0]);
        let pq_y = diff(p[1], q[1]);
        let (pq_dist_squared, pq_overflow) = (pq_x * pq_x).overflowing_add(pq_y * pq_y);
        let pr_x = diff(p[0], r[0]);
        let pr_y = diff(p[1], r[1]);
        let (pr_dist_squared, pr_overflow) = (pr_x * pr_x).overflowing_add(pr_y * pr_y);
        match (pq_overflow, pr_overflow) {
          (true, false) => Ordering::Greater,
          (false, true) => Ordering::Less,
          _ => pq_dist_squared.cmp(&pr_dist_squared),
        }
      }
    }
  };
}

fixed_precision!(i8, u8, u16);
fixed_precision!(i16, u16, u32);
fixed_precision!(i32, u32, u64);
fixed_precision!(i64, u64, u128);
fixed_precision!(isize, usize, u128);

impl HullScalar for num_bigint::BigInt {}
impl HullScalar for num_rational::BigRational {}
impl HullScalar for ordered_float::OrderedFloat<f32> {}
impl HullScalar for ordered_float::OrderedFloat<f64> {}
impl HullScalar for ordered_float::NotNan<f32> {}
impl HullScalar for ordered_float::NotNan<f64> {}
impl HullScalar for f32 {}
impl HullScalar for f64 {}

#[cfg(test)]
pub mod testing;
