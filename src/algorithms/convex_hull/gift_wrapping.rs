use num_rational::BigRational;
use std::cmp::Ordering;
use std::convert::TryFrom;

use crate::data::{Hull, Point};
use crate::{Error, HullScalar, Orientation};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    Inputs with fewer than three points are returned as-is.
//    No points are outside the resulting hull.
/// $O(nh)$ Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. The hull starts at the leftmost point (the
/// lowest one if several share the smallest x-coordinate) and runs
/// counter-clockwise. Of several colinear points along an edge only the
/// farthest one becomes a vertex.
///
/// Inputs with fewer than three points are returned unchanged, in their
/// original order. Duplicates of a single point collapse to one vertex and
/// colinear inputs to the two extreme points.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * Permuting an input of three or more points does not change the hull.
///
/// # Time complexity
/// $O(nh)$ where h is the number of vertices on the convex hull.
///
/// # Examples
///
/// ```rust
/// # use giftwrap::algorithms::convex_hull;
/// # use giftwrap::data::Point;
/// let pts = vec![Point::new([0, 0]), Point::new([0, 5]), Point::new([3, 2])];
/// assert_eq!(
///   convex_hull(&pts).vertices(),
///   &[Point::new([0, 0]), Point::new([3, 2]), Point::new([0, 5])]
/// );
/// ```
///
/// ```rust
/// # use giftwrap::algorithms::convex_hull;
/// # use giftwrap::data::Point;
/// let pair = vec![Point::new([1, 1]), Point::new([0, 0])];
/// assert_eq!(convex_hull(&pair).into_vec(), pair);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(pts: &[Point<T>]) -> Hull<T>
where
  T: HullScalar,
{
  let vertices = convex_hull_indices(pts)
    .into_iter()
    .map(|idx| pts[idx].clone())
    .collect();
  Hull::new_unchecked(vertices)
}

/// Like [`convex_hull`] but returns the positions of the hull vertices in the
/// input slice.
pub fn convex_hull_indices<T>(pts: &[Point<T>]) -> Vec<usize>
where
  T: HullScalar,
{
  let n = pts.len();
  if n < 3 {
    return (0..n).collect();
  }
  let Some(leftmost) = leftmost_point_index(pts) else {
    return Vec::new();
  };

  let mut hull: Vec<usize> = Vec::new();
  let mut p = leftmost;

  loop {
    hull.push(p);
    p = next_vertex(pts, p);

    // Duplicates of the starting point are interchangeable with it.
    if p == leftmost || pts[p] == pts[leftmost] {
      break;
    }
    // Only reachable when floating point orientation tests contradict each other.
    if hull.len() == n {
      tracing::warn!(
        points = n,
        "gift wrapping did not return to its starting point, truncating hull"
      );
      break;
    }
  }

  tracing::debug!(points = n, vertices = hull.len(), "computed convex hull");
  hull
}

/// $O(n)$ Index of the leftmost point, the lowest one if several share the
/// smallest x-coordinate, the first one if several are identical.
///
/// Returns `None` iff the input is empty.
///
/// ```rust
/// # use giftwrap::algorithms::convex_hull::gift_wrapping::leftmost_point_index;
/// # use giftwrap::data::Point;
/// let pts = vec![Point::new([0, 5]), Point::new([3, 2]), Point::new([0, 0])];
/// assert_eq!(leftmost_point_index(&pts), Some(2));
/// ```
pub fn leftmost_point_index<T>(pts: &[Point<T>]) -> Option<usize>
where
  T: HullScalar,
{
  if pts.is_empty() {
    return None;
  }
  Some((1..pts.len()).fold(0, |best, idx| {
    let (x, y) = (pts[idx].x_coord(), pts[idx].y_coord());
    let (best_x, best_y) = (pts[best].x_coord(), pts[best].y_coord());
    if x < best_x || (x == best_x && y < best_y) {
      idx
    } else {
      best
    }
  }))
}

// O(n)
fn next_vertex<T>(pts: &[Point<T>], p: usize) -> usize
where
  T: HullScalar,
{
  let n = pts.len();
  let origin = &pts[p];
  let mut q = (p + 1) % n;
  for r in 0..n {
    if r == p {
      continue;
    }
    // Every point must end up left of p->q. On ties, take the farthest point so
    // that colinear points along an edge are skipped.
    match origin.orientation(&pts[q], &pts[r]) {
      Orientation::ClockWise => q = r,
      Orientation::CoLinear => {
        if origin.cmp_distance_to(&pts[r], &pts[q]) == Ordering::Greater {
          q = r;
        }
      }
      Orientation::CounterClockWise => {}
    }
  }
  q
}

/// Convex hull of floating point coordinates using exact arithmetic.
///
/// Every coordinate is converted losslessly to a [`BigRational`] so that
/// orientation and distance tests never round. The returned vertices are the
/// original `f64` points.
///
/// # Errors
/// Will return [`Error::NonFiniteCoordinate`] if any coordinate is NaN or
/// infinite.
///
/// ```rust
/// # use giftwrap::algorithms::convex_hull::gift_wrapping::convex_hull_exact;
/// # use giftwrap::data::Point;
/// # use giftwrap::Error;
/// let pts = vec![Point::new([0.0, 0.0]), Point::new([1.0, f64::NAN]), Point::new([1.0, 1.0])];
/// assert_eq!(convex_hull_exact(&pts).err(), Some(Error::NonFiniteCoordinate));
/// ```
pub fn convex_hull_exact(pts: &[Point<f64>]) -> Result<Hull<f64>, Error> {
  let exact = pts
    .iter()
    .map(|pt| Point::<BigRational>::try_from(pt))
    .collect::<Result<Vec<_>, Error>>()?;
  let vertices = convex_hull_indices(&exact)
    .into_iter()
    .map(|idx| pts[idx])
    .collect();
  Ok(Hull::new_unchecked(vertices))
}
