use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use giftwrap::algorithms::convex_hull;
use giftwrap::algorithms::convex_hull::gift_wrapping::convex_hull_exact;
use giftwrap::data::{Hull, Point};
use giftwrap::io::{write_points, PointReader};
use giftwrap::render::{Plot, RenderOptions};

#[derive(Parser)]
#[command(name = "giftwrap", version)]
#[command(about = "Compute the convex hull of the points in a CSV file")]
struct Cmd {
  /// CSV file with a header row
  input: PathBuf,

  /// Output format for the hull vertices
  #[arg(long, value_enum, default_value_t = Format::Text)]
  format: Format,

  /// Write the hull to this file instead of stdout
  #[arg(long, short)]
  output: Option<PathBuf>,

  /// Use exact rational arithmetic for orientation and distance tests
  #[arg(long)]
  exact: bool,

  /// Draw the points and the hull on stdout
  #[arg(long)]
  plot: bool,

  /// Plot width in characters
  #[arg(long, default_value_t = 60)]
  width: usize,

  /// Plot height in lines
  #[arg(long, default_value_t = 20)]
  height: usize,

  /// Column holding the x-coordinates
  #[arg(long, default_value = "x")]
  x_column: String,

  /// Column holding the y-coordinates
  #[arg(long, default_value = "y")]
  y_column: String,

  /// Field delimiter
  #[arg(long, default_value_t = ',')]
  delimiter: char,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
  /// One `x y` pair per line
  Text,
  /// `x,y` CSV with a header row
  Csv,
  /// A JSON array of `{"x": .., "y": ..}` objects
  Json,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
  let cmd = Cmd::parse();
  run(&cmd)
}

fn run(cmd: &Cmd) -> Result<()> {
  let delimiter = u8::try_from(cmd.delimiter)
    .ok()
    .filter(u8::is_ascii)
    .with_context(|| format!("delimiter {:?} is not a single ASCII character", cmd.delimiter))?;
  let reader = PointReader::new()
    .x_column(cmd.x_column.as_str())
    .y_column(cmd.y_column.as_str())
    .delimiter(delimiter);
  let pts = reader
    .read_path(&cmd.input)
    .with_context(|| format!("failed to read points from {}", cmd.input.display()))?;
  tracing::info!(input = %cmd.input.display(), points = pts.len(), exact = cmd.exact, "computing hull");

  let hull = if cmd.exact {
    convex_hull_exact(&pts)?
  } else {
    convex_hull(&pts)
  };
  tracing::info!(vertices = hull.len(), "hull done");

  match &cmd.output {
    Some(path) => {
      let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
      write_hull(std::io::BufWriter::new(file), &hull, cmd.format)?;
    }
    None => write_hull(std::io::stdout().lock(), &hull, cmd.format)?,
  }

  if cmd.plot {
    let options = RenderOptions {
      width: cmd.width,
      height: cmd.height,
    };
    print!("{}", Plot::new(&pts, &hull).with_options(options));
  }
  Ok(())
}

fn write_hull<W: Write>(mut out: W, hull: &Hull<f64>, format: Format) -> Result<()> {
  match format {
    Format::Text => {
      for Point { array: [x, y] } in hull {
        writeln!(out, "{x} {y}")?;
      }
    }
    Format::Csv => write_points(&mut out, hull)?,
    Format::Json => {
      serde_json::to_writer_pretty(&mut out, hull)?;
      writeln!(out)?;
    }
  }
  out.flush()?;
  Ok(())
}
