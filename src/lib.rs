//! Quadcrop: quadrilateral crop-region solver.
//!
//! Given four corner points selected on an image, quadcrop computes the
//! minimal axis-aligned rectangle — or, with a directional bias, the
//! minimal square — that those points imply, rounded to integer pixel
//! bounds that never overshoot the selected region. The interactive
//! point picking itself is someone else's job: this crate consumes a
//! finite list of (x, y) positions and produces pixel bounds.
//!
//! # Modules
//!
//! - [`geometry`]: core types (Point, Rect, Bias, ConvexHull)
//! - [`solver`]: convexity validation and crop solving
//! - [`io_points`]: JSON interfaces for points in and crop regions out
//! - [`error`]: error types for quadcrop operations
//!
//! # Example
//!
//! ```
//! use quadcrop::{compute_crop, Point};
//!
//! let corners = [
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 5.0),
//!     Point::new(0.0, 5.0),
//! ];
//! let rect = compute_crop(&corners, "tl", true).unwrap();
//! assert_eq!(rect.width(), rect.height());
//! ```

pub mod error;
pub mod geometry;
pub mod io_points;
pub mod solver;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::QuadcropError;
pub use geometry::{Bias, ConvexHull, Horizontal, Point, Rect, Vertical};
pub use solver::{compute_crop, compute_crop_with, validate_corners};

/// The quadcrop CLI application.
#[derive(Parser)]
#[command(name = "quadcrop")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Solve the crop region implied by four corner points.
    Solve(SolveArgs),
    /// Check that corner points form a convex quadrilateral.
    Validate(ValidateArgs),
}

/// Arguments for the solve subcommand.
#[derive(clap::Args)]
struct SolveArgs {
    /// JSON file containing an array of [x, y] corner points.
    input: PathBuf,

    /// Edges to keep when squaring: one of 't'/'b' plus one of 'l'/'r'.
    #[arg(long, default_value = "tl")]
    bias: String,

    /// Crop the rectangle further down to a square.
    #[arg(long)]
    square: bool,

    /// Output format for the crop region ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// JSON file containing an array of [x, y] corner points.
    input: PathBuf,
}

/// Run the quadcrop CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), QuadcropError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Solve(args)) => run_solve(args),
        Some(Commands::Validate(args)) => run_validate(args),
        None => {
            // No subcommand: just print a usage hint and exit successfully
            println!("quadcrop {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Quadrilateral crop-region solver.");
            println!();
            println!("Run 'quadcrop --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the solve subcommand.
fn run_solve(args: SolveArgs) -> Result<(), QuadcropError> {
    let points = io_points::read_points(&args.input)?;
    let rect = solver::compute_crop(&points, &args.bias, args.square)?;
    let report = io_points::CropReport::new(&rect);

    match args.output.as_str() {
        "json" => {
            println!("{}", io_points::report_to_json_string(&report)?);
        }
        _ => {
            // Default text output
            let [tl, tr, br, bl] = report.corners;
            println!("Crop region (clockwise from top-left):");
            println!("  top-left:     {tl}");
            println!("  top-right:    {tr}");
            println!("  bottom-right: {br}");
            println!("  bottom-left:  {bl}");
            println!("Size: {} x {} pixels", report.width, report.height);
        }
    }

    Ok(())
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), QuadcropError> {
    let points = io_points::read_points(&args.input)?;
    solver::validate_corners(&points)?;
    println!("Corner points form a convex quadrilateral");
    Ok(())
}
