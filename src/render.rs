//! Text canvas for point sets and their hulls.
//!
//! Braille characters (U+2800 to U+28FF) encode 2×4 dot patterns, so every
//! character cell holds eight pixels. The canvas is scaled to the bounding
//! box of the input, with `y` growing upwards.
//!
//! # Braille Dot Numbering
//!
//! ```text
//! 1  4
//! 2  5
//! 3  6
//! 7  8
//! ```
use num_traits::ToPrimitive;
use std::fmt;

use crate::data::{Hull, Point};

// Bit for the dot at (column, row) within a cell.
const DOTS: [[u8; 2]; 4] = [
  [0b0000_0001, 0b0000_1000],
  [0b0000_0010, 0b0001_0000],
  [0b0000_0100, 0b0010_0000],
  [0b0100_0000, 0b1000_0000],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
  /// Canvas width in characters.
  pub width: usize,
  /// Canvas height in lines.
  pub height: usize,
}

impl Default for RenderOptions {
  fn default() -> Self {
    RenderOptions {
      width: 40,
      height: 20,
    }
  }
}

/// Draws the input points and the closed hull polygon.
///
/// ```
/// use giftwrap::algorithms::convex_hull;
/// use giftwrap::data::Point;
/// use giftwrap::render::{Plot, RenderOptions};
///
/// let pts = vec![Point::new([0, 0]), Point::new([4, 0]), Point::new([2, 3])];
/// let hull = convex_hull(&pts);
/// let plot = Plot::new(&pts, &hull).with_options(RenderOptions { width: 3, height: 1 });
/// assert_eq!(plot.to_string().lines().count(), 1);
/// ```
pub struct Plot<'a, T> {
  points: &'a [Point<T>],
  hull: &'a Hull<T>,
  options: RenderOptions,
}

impl<'a, T> Plot<'a, T>
where
  T: ToPrimitive,
{
  pub fn new(points: &'a [Point<T>], hull: &'a Hull<T>) -> Self {
    Plot {
      points,
      hull,
      options: RenderOptions::default(),
    }
  }

  pub fn with_options(mut self, options: RenderOptions) -> Self {
    self.options = options;
    self
  }

  fn render(&self) -> String {
    let width = self.options.width.max(1) * 2;
    let height = self.options.height.max(1) * 4;
    let mut grid = vec![vec![false; width]; height];

    // Non-finite coordinates cannot be placed on the canvas and are skipped.
    let coords = |pt: &Point<T>| -> Option<(f64, f64)> {
      let (x, y) = (pt.x_coord().to_f64()?, pt.y_coord().to_f64()?);
      (x.is_finite() && y.is_finite()).then_some((x, y))
    };
    let all: Vec<(f64, f64)> = self
      .points
      .iter()
      .chain(self.hull.iter())
      .filter_map(coords)
      .collect();

    if let Some(viewport) = Viewport::fit(&all, width, height) {
      let closed: Vec<(i64, i64)> = self
        .hull
        .closed()
        .filter_map(coords)
        .map(|(x, y)| viewport.pixel(x, y))
        .collect();
      for edge in closed.windows(2) {
        let ((x0, y0), (x1, y1)) = (edge[0], edge[1]);
        bresenham_line(x0, y0, x1, y1, |x, y| set_pixel(&mut grid, x, y));
      }
      for &(x, y) in &all {
        let (px, py) = viewport.pixel(x, y);
        set_pixel(&mut grid, px, py);
      }
    }

    grid_to_braille(&grid)
  }
}

impl<T: ToPrimitive> fmt::Display for Plot<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.render())
  }
}

// Maps world coordinates onto the pixel grid. Axes are scaled independently and
// pixel rows grow downwards.
struct Viewport {
  min_x: f64,
  max_y: f64,
  scale_x: f64,
  scale_y: f64,
  offset_x: f64,
  offset_y: f64,
}

impl Viewport {
  fn fit(coords: &[(f64, f64)], width: usize, height: usize) -> Option<Viewport> {
    let (&(x0, y0), rest) = coords.split_first()?;
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (x0, x0, y0, y0);
    for &(x, y) in rest {
      min_x = min_x.min(x);
      max_x = max_x.max(x);
      min_y = min_y.min(y);
      max_y = max_y.max(y);
    }
    let axis = |min: f64, max: f64, pixels: usize| -> (f64, f64) {
      let last = (pixels - 1) as f64;
      if max > min {
        (last / (max - min), 0.0)
      } else {
        // Everything on one line: center it.
        (0.0, (last / 2.0).floor())
      }
    };
    let (scale_x, offset_x) = axis(min_x, max_x, width);
    let (scale_y, offset_y) = axis(min_y, max_y, height);
    Some(Viewport {
      min_x,
      max_y,
      scale_x,
      scale_y,
      offset_x,
      offset_y,
    })
  }

  fn pixel(&self, x: f64, y: f64) -> (i64, i64) {
    let px = ((x - self.min_x) * self.scale_x + self.offset_x).round();
    let py = ((self.max_y - y) * self.scale_y + self.offset_y).round();
    (px as i64, py as i64)
  }
}

fn set_pixel(grid: &mut [Vec<bool>], x: i64, y: i64) {
  if x < 0 || y < 0 {
    return;
  }
  if let Some(cell) = grid
    .get_mut(y as usize)
    .and_then(|row| row.get_mut(x as usize))
  {
    *cell = true;
  }
}

fn grid_to_braille(grid: &[Vec<bool>]) -> String {
  let height = grid.len();
  let width = grid.first().map_or(0, Vec::len);
  let pixel = |x: usize, y: usize| grid.get(y).and_then(|row| row.get(x)).copied() == Some(true);

  let mut result = String::new();
  for row in (0..height).step_by(4) {
    for col in (0..width).step_by(2) {
      let mut dots = 0u8;
      for (dy, bits) in DOTS.iter().enumerate() {
        for (dx, bit) in bits.iter().enumerate() {
          if pixel(col + dx, row + dy) {
            dots |= bit;
          }
        }
      }
      result.push(char::from_u32(0x2800 + u32::from(dots)).unwrap_or('?'));
    }
    result.push('\n');
  }
  result
}

/// Bresenham's line drawing algorithm.
///
/// Calls the provided closure for each point along the line from (x0, y0) to (x1, y1).
fn bresenham_line<F>(x0: i64, y0: i64, x1: i64, y1: i64, mut plot: F)
where
  F: FnMut(i64, i64),
{
  let dx = (x1 - x0).abs();
  let dy = -(y1 - y0).abs();
  let sx = if x0 < x1 { 1 } else { -1 };
  let sy = if y0 < y1 { 1 } else { -1 };
  let mut error = dx + dy;
  let (mut x, mut y) = (x0, y0);

  loop {
    plot(x, y);
    if x == x1 && y == y1 {
      break;
    }
    let e2 = 2 * error;
    if e2 >= dy {
      error += dy;
      x += sx;
    }
    if e2 <= dx {
      error += dx;
      y += sy;
    }
  }
}
