use serde::Serialize;
use std::ops::Index;
use std::slice;

use crate::data::{Point, PointLocation};
use crate::{Error, HullScalar, Orientation};

/// Vertices of a convex hull in counter-clockwise order.
///
/// The first vertex is the leftmost input point (lowest on ties) and the
/// polygon is not explicitly closed: the last vertex connects back to the
/// first. Use [`Hull::closed`] to get a vertex sequence suitable for drawing.
///
/// Hulls of fewer than three input points, of duplicates of a single point,
/// or of colinear points are degenerate and hold fewer than three vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Hull<T> {
  vertices: Vec<Point<T>>,
}

impl<T> Hull<T> {
  /// $O(1)$ Assume that the vertices form a convex hull.
  ///
  /// No checks are performed. Use [`Hull::validate`] to verify the result.
  pub fn new_unchecked(vertices: Vec<Point<T>>) -> Hull<T> {
    Hull { vertices }
  }

  pub fn vertices(&self) -> &[Point<T>] {
    &self.vertices
  }

  pub fn into_vec(self) -> Vec<Point<T>> {
    self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn iter(&self) -> slice::Iter<'_, Point<T>> {
    self.vertices.iter()
  }

  /// The leftmost vertex the wrap started from.
  pub fn start(&self) -> Option<&Point<T>> {
    self.vertices.first()
  }

  /// Vertices followed by the first vertex again.
  ///
  /// ```rust
  /// # use giftwrap::algorithms::convex_hull;
  /// # use giftwrap::data::Point;
  /// let hull = convex_hull(&[Point::new([0, 0]), Point::new([2, 0]), Point::new([0, 2])]);
  /// let closed: Vec<_> = hull.closed().cloned().collect();
  /// assert_eq!(closed.first(), closed.last());
  /// assert_eq!(closed.len(), 4);
  /// ```
  pub fn closed(&self) -> impl Iterator<Item = &Point<T>> + '_ {
    self.vertices.iter().chain(self.vertices.first())
  }

  /// Boundary edges `(src, dst)` in counter-clockwise order. Empty for hulls with
  /// fewer than two vertices.
  pub fn edges(&self) -> impl Iterator<Item = (&Point<T>, &Point<T>)> + '_ {
    let n = if self.vertices.len() < 2 {
      0
    } else {
      self.vertices.len()
    };
    self
      .vertices
      .iter()
      .zip(self.vertices.iter().cycle().skip(1))
      .take(n)
  }
}

impl<T> Hull<T>
where
  T: HullScalar,
{
  /// $O(n)$ Locate a point relative to the hull polygon.
  ///
  /// Degenerate hulls are treated as the point or line segment they span.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    match self.vertices.as_slice() {
      [] => PointLocation::Outside,
      [a] => {
        if a == pt {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      [a, b] => {
        if a.orientation(b, pt).is_colinear()
          && between(a.x_coord(), b.x_coord(), pt.x_coord())
          && between(a.y_coord(), b.y_coord(), pt.y_coord())
        {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      _ => {
        let mut on_boundary = false;
        for (src, dst) in self.edges() {
          match src.orientation(dst, pt) {
            Orientation::ClockWise => return PointLocation::Outside,
            Orientation::CoLinear => on_boundary = true,
            Orientation::CounterClockWise => {}
          }
        }
        if on_boundary {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }

  /// $O(n^2)$ Check that the vertices form a strictly convex, counter-clockwise
  /// polygon: at least three vertices and every vertex strictly to the left of
  /// every edge it is not an endpoint of.
  ///
  /// Only orientation tests are used, so fixed-precision coordinates never
  /// overflow.
  pub fn validate(&self) -> Result<(), Error> {
    let [a, b, c, ..] = self.vertices.as_slice() else {
      return Err(Error::InsufficientVertices);
    };
    if a.orientation(b, c).is_cw() {
      return Err(Error::ClockWiseViolation);
    }
    let n = self.vertices.len();
    for i in 0..n {
      let src = &self.vertices[i];
      let dst = &self.vertices[(i + 1) % n];
      for (j, pt) in self.vertices.iter().enumerate() {
        if j == i || j == (i + 1) % n {
          continue;
        }
        if !src.orientation(dst, pt).is_ccw() {
          return Err(Error::ConvexViolation);
        }
      }
    }
    Ok(())
  }

  /// Twice the signed area of the hull polygon. Positive for counter-clockwise
  /// vertex order, zero for degenerate hulls.
  ///
  /// Warning: May cause arithmetic overflow.
  pub fn signed_area_2x(&self) -> T {
    self.edges().fold(T::zero(), |acc, (p, q)| {
      acc + p.x_coord().clone() * q.y_coord().clone() - q.x_coord().clone() * p.y_coord().clone()
    })
  }
}

fn between<T: PartialOrd>(a: &T, b: &T, v: &T) -> bool {
  (a <= v && v <= b) || (b <= v && v <= a)
}

impl<T> Index<usize> for Hull<T> {
  type Output = Point<T>;
  fn index(&self, key: usize) -> &Point<T> {
    self.vertices.index(key)
  }
}

impl<T> AsRef<[Point<T>]> for Hull<T> {
  fn as_ref(&self) -> &[Point<T>] {
    &self.vertices
  }
}

impl<T> From<Hull<T>> for Vec<Point<T>> {
  fn from(hull: Hull<T>) -> Vec<Point<T>> {
    hull.vertices
  }
}

impl<'a, T> IntoIterator for &'a Hull<T> {
  type Item = &'a Point<T>;
  type IntoIter = slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.iter()
  }
}

impl<T> IntoIterator for Hull<T> {
  type Item = Point<T>;
  type IntoIter = std::vec::IntoIter<Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.into_iter()
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_ok};

  fn square() -> Hull<i64> {
    Hull::new_unchecked(vec![
      Point::new([0, 0]),
      Point::new([4, 0]),
      Point::new([4, 4]),
      Point::new([0, 4]),
    ])
  }

  #[test]
  fn square_is_valid() {
    assert_ok!(square().validate());
    assert_eq!(square().signed_area_2x(), 32);
  }

  #[test]
  fn clockwise_is_invalid() {
    let mut vertices = square().into_vec();
    vertices.reverse();
    assert_err_eq!(
      Hull::new_unchecked(vertices).validate(),
      Error::ClockWiseViolation
    );
  }

  #[test]
  fn colinear_vertex_is_invalid() {
    let hull = Hull::new_unchecked(vec![
      Point::new([0, 0]),
      Point::new([2, 0]),
      Point::new([4, 0]),
      Point::new([4, 4]),
      Point::new([0, 4]),
    ]);
    assert_err_eq!(hull.validate(), Error::ConvexViolation);
  }

  #[test]
  fn reflex_vertex_is_invalid() {
    let hull = Hull::new_unchecked(vec![
      Point::new([0, 0]),
      Point::new([4, 0]),
      Point::new([2, 1]),
      Point::new([4, 4]),
      Point::new([0, 4]),
    ]);
    assert_err_eq!(hull.validate(), Error::ConvexViolation);
  }

  #[test]
  fn degenerate_is_insufficient() {
    let hull = Hull::new_unchecked(vec![Point::new([0, 0]), Point::new([1, 1])]);
    assert_err_eq!(hull.validate(), Error::InsufficientVertices);
  }

  #[test]
  fn locate_square() {
    let hull = square();
    assert_eq!(hull.locate(&Point::new([2, 2])), PointLocation::Inside);
    assert_eq!(hull.locate(&Point::new([2, 0])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([4, 4])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([5, 0])), PointLocation::Outside);
    assert_eq!(hull.locate(&Point::new([-1, 2])), PointLocation::Outside);
  }

  #[test]
  fn locate_degenerate() {
    let empty: Hull<i64> = Hull::new_unchecked(vec![]);
    assert_eq!(empty.locate(&Point::new([0, 0])), PointLocation::Outside);

    let single = Hull::new_unchecked(vec![Point::new([1, 1])]);
    assert_eq!(single.locate(&Point::new([1, 1])), PointLocation::OnBoundary);
    assert_eq!(single.locate(&Point::new([1, 2])), PointLocation::Outside);

    let segment = Hull::new_unchecked(vec![Point::new([0, 0]), Point::new([4, 2])]);
    assert_eq!(segment.locate(&Point::new([2, 1])), PointLocation::OnBoundary);
    assert_eq!(segment.locate(&Point::new([6, 3])), PointLocation::Outside);
    assert_eq!(segment.locate(&Point::new([2, 2])), PointLocation::Outside);
  }

  #[test]
  fn closed_repeats_start() {
    let hull = square();
    let closed: Vec<_> = hull.closed().collect();
    assert_eq!(closed.len(), 5);
    assert_eq!(closed[0], closed[4]);

    let empty: Hull<i64> = Hull::new_unchecked(vec![]);
    assert_eq!(empty.closed().count(), 0);
  }

  #[test]
  fn edges_wrap_around() {
    let hull = square();
    let edges: Vec<_> = hull.edges().collect();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[3], (&Point::new([0, 4]), &Point::new([0, 0])));

    let single = Hull::new_unchecked(vec![Point::new([1, 1])]);
    assert_eq!(single.edges().count(), 0);
  }

  #[test]
  fn serialize_as_sequence() {
    let hull = Hull::new_unchecked(vec![Point::new([0, 0]), Point::new([1, 2])]);
    assert_eq!(
      serde_json::to_string(&hull).unwrap(),
      r#"[{"x":0,"y":0},{"x":1,"y":2}]"#
    );
  }
}
