//! Reading and writing point sets as CSV.
//!
//! Input files carry a header row naming the columns. By default the
//! coordinates are read from the columns `x` and `y`; any other columns are
//! ignored.
//!
//! ```rust
//! # use giftwrap::io::PointReader;
//! # use giftwrap::data::Point;
//! let data = "id,x,y\na,0,0\nb,1.5,2\n";
//! let pts = PointReader::new().read(data.as_bytes()).unwrap();
//! assert_eq!(pts, vec![Point::new([0.0, 0.0]), Point::new([1.5, 2.0])]);
//! ```
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::data::Point;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
  #[error("cannot open {path}: {source}")]
  Open {
    path: String,
    #[source]
    source: std::io::Error,
  },
  #[error(transparent)]
  Csv(#[from] csv::Error),
  #[error("missing column {0:?}")]
  MissingColumn(String),
  #[error("line {line}: column {column:?} is not a number: {value:?}")]
  InvalidNumber {
    line: u64,
    column: String,
    value: String,
  },
  #[error("line {line}: column {column:?} is not finite: {value:?}")]
  NonFinite {
    line: u64,
    column: String,
    value: String,
  },
}

/// CSV point reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointReader {
  x_column: String,
  y_column: String,
  delimiter: u8,
}

impl Default for PointReader {
  fn default() -> Self {
    PointReader {
      x_column: "x".to_string(),
      y_column: "y".to_string(),
      delimiter: b',',
    }
  }
}

impl PointReader {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn x_column(mut self, name: impl Into<String>) -> Self {
    self.x_column = name.into();
    self
  }

  pub fn y_column(mut self, name: impl Into<String>) -> Self {
    self.y_column = name.into();
    self
  }

  pub fn delimiter(mut self, delimiter: u8) -> Self {
    self.delimiter = delimiter;
    self
  }

  /// Read every record, in file order.
  ///
  /// # Errors
  /// Fails on malformed CSV, on a missing coordinate column, and on coordinates
  /// that are not finite numbers. Nothing is returned for a partially valid file.
  /// Rows may carry more fields than the header; rows too short to hold both
  /// coordinates are rejected.
  pub fn read<R: std::io::Read>(&self, rdr: R) -> Result<Vec<Point<f64>>, ReadError> {
    let mut rdr = csv::ReaderBuilder::new()
      .delimiter(self.delimiter)
      .flexible(true)
      .trim(csv::Trim::All)
      .from_reader(rdr);

    let headers = rdr.headers()?;
    let x_idx = column_index(headers, &self.x_column)?;
    let y_idx = column_index(headers, &self.y_column)?;

    let mut pts = Vec::new();
    for record in rdr.records() {
      let record = record?;
      let line = record.position().map_or(0, |pos| pos.line());
      let x = parse_coordinate(&record, x_idx, &self.x_column, line)?;
      let y = parse_coordinate(&record, y_idx, &self.y_column, line)?;
      pts.push(Point::new([x, y]));
    }
    Ok(pts)
  }

  pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Point<f64>>, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Open {
      path: path.display().to_string(),
      source,
    })?;
    let pts = self.read(file)?;
    tracing::debug!(path = %path.display(), points = pts.len(), "read points");
    Ok(pts)
  }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, ReadError> {
  headers
    .iter()
    .position(|header| header == name)
    .ok_or_else(|| ReadError::MissingColumn(name.to_string()))
}

fn parse_coordinate(
  record: &csv::StringRecord,
  idx: usize,
  column: &str,
  line: u64,
) -> Result<f64, ReadError> {
  let value = record.get(idx).unwrap_or("");
  let parsed: f64 = value.parse().map_err(|_| ReadError::InvalidNumber {
    line,
    column: column.to_string(),
    value: value.to_string(),
  })?;
  if !parsed.is_finite() {
    return Err(ReadError::NonFinite {
      line,
      column: column.to_string(),
      value: value.to_string(),
    });
  }
  Ok(parsed)
}

/// Write points as CSV with an `x,y` header, one point per row.
///
/// The header is written even if there are no points.
pub fn write_points<'a, W, T, I>(wtr: W, pts: I) -> Result<(), csv::Error>
where
  W: std::io::Write,
  T: Serialize + 'a,
  I: IntoIterator<Item = &'a Point<T>>,
{
  let mut wtr = csv::WriterBuilder::new()
    .has_headers(false)
    .from_writer(wtr);
  wtr.write_record(["x", "y"])?;
  for pt in pts {
    wtr.serialize(pt)?;
  }
  wtr.flush()?;
  Ok(())
}
