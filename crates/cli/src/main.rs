//! stormgrid CLI - storm-polygon geometry conversions
//!
//! Thin JSON-in/JSON-out driver around the stormgrid libraries. Vertex
//! payloads always use the explicit-rings form; the NaN-separated flat
//! form never crosses the serialization boundary.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use stormgrid_algorithms::polygons::{
    boundary_of_grid_points, buffer_simple_polygon, simple_polygon_to_grid_points, BufferParams,
};
use stormgrid_core::{GridPointSet, RadarGrid, VertexRings};

#[derive(Parser)]
#[command(name = "stormgrid")]
#[command(author, version, about = "Storm-polygon geometry conversions", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace the cell-edge boundary of a set of member cells
    Boundary {
        /// JSON file: {"rows": [...], "cols": [...]}
        input: PathBuf,
    },
    /// List the cells covered by a polygon boundary
    Rasterize {
        /// JSON file: {"vertex_rows": [...], "vertex_cols": [...]}
        input: PathBuf,
    },
    /// Buffer a simple polygon
    Buffer {
        /// JSON file: {"vertex_x": [...], "vertex_y": [...]}
        input: PathBuf,
        /// Outer buffer distance
        #[arg(long)]
        max_dist: f64,
        /// Inner buffer distance; produces an annulus with a hole
        #[arg(long)]
        min_dist: Option<f64>,
        /// Round corners instead of mitering them
        #[arg(long)]
        rounded: bool,
    },
    /// Convert row/column indices to latitude/longitude
    ToLatlng {
        /// JSON file: {"rows": [...], "cols": [...]} (fractional allowed)
        input: PathBuf,
        #[command(flatten)]
        grid: GridArgs,
    },
    /// Convert latitude/longitude to row/column indices
    ToRowcol {
        /// JSON file: {"lats": [...], "lngs": [...]}
        input: PathBuf,
        #[command(flatten)]
        grid: GridArgs,
    },
}

#[derive(clap::Args)]
struct GridArgs {
    /// Latitude (deg N) of the northwesternmost grid point
    #[arg(long)]
    nw_lat: f64,
    /// Longitude (deg E) of the northwesternmost grid point
    #[arg(long)]
    nw_lng: f64,
    /// Spacing (deg) between adjacent rows
    #[arg(long)]
    lat_spacing: f64,
    /// Spacing (deg) between adjacent columns
    #[arg(long)]
    lng_spacing: f64,
    #[arg(long, default_value_t = 3501)]
    num_rows: usize,
    #[arg(long, default_value_t = 7001)]
    num_cols: usize,
}

impl GridArgs {
    fn build(&self) -> Result<RadarGrid> {
        RadarGrid::new(
            self.nw_lat,
            self.nw_lng,
            self.lat_spacing,
            self.lng_spacing,
            self.num_rows,
            self.num_cols,
        )
        .context("invalid grid parameters")
    }
}

#[derive(Deserialize)]
struct CellsPayload {
    rows: Vec<i64>,
    cols: Vec<i64>,
}

#[derive(Serialize, Deserialize)]
struct BoundaryPayload {
    vertex_rows: Vec<f64>,
    vertex_cols: Vec<f64>,
}

#[derive(Deserialize)]
struct RingPayload {
    vertex_x: Vec<f64>,
    vertex_y: Vec<f64>,
}

#[derive(Deserialize)]
struct LatlngPayload {
    lats: Vec<f64>,
    lngs: Vec<f64>,
}

#[derive(Serialize, Deserialize)]
struct IndexPayload {
    rows: Vec<f64>,
    cols: Vec<f64>,
}

#[derive(Serialize)]
struct LatlngOutput {
    lats: Vec<f64>,
    lngs: Vec<f64>,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("cannot parse {}", path.display()))
}

fn write_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Boundary { input } => {
            let payload: CellsPayload = read_json(&input)?;
            let points = GridPointSet::new(payload.rows, payload.cols)?;
            info!(cells = points.len(), "tracing boundary");
            let (vertex_rows, vertex_cols) = boundary_of_grid_points(&points)?;
            write_json(&BoundaryPayload {
                vertex_rows,
                vertex_cols,
            })
        }
        Commands::Rasterize { input } => {
            let payload: BoundaryPayload = read_json(&input)?;
            let points =
                simple_polygon_to_grid_points(&payload.vertex_rows, &payload.vertex_cols)?;
            info!(cells = points.len(), "rasterized polygon");
            write_json(&serde_json::json!({
                "rows": points.rows(),
                "cols": points.cols(),
            }))
        }
        Commands::Buffer {
            input,
            max_dist,
            min_dist,
            rounded,
        } => {
            let payload: RingPayload = read_json(&input)?;
            let params = BufferParams {
                min_distance: min_dist,
                max_distance: max_dist,
                preserve_angles: !rounded,
            };
            let rings: VertexRings =
                buffer_simple_polygon(&payload.vertex_x, &payload.vertex_y, &params)?;
            info!(holes = rings.num_holes(), "buffered polygon");
            write_json(&rings)
        }
        Commands::ToLatlng { input, grid } => {
            let payload: IndexPayload = read_json(&input)?;
            let grid = grid.build()?;
            let (lats, lngs) = grid.rowcol_to_latlng(&payload.rows, &payload.cols)?;
            write_json(&LatlngOutput { lats, lngs })
        }
        Commands::ToRowcol { input, grid } => {
            let payload: LatlngPayload = read_json(&input)?;
            let grid = grid.build()?;
            let (rows, cols) = grid.latlng_to_rowcol(&payload.lats, &payload.lngs)?;
            write_json(&IndexPayload { rows, cols })
        }
    }
}
