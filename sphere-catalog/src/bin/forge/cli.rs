//! CLI argument definitions for forge

use clap::{Args, Parser, Subcommand};
use sphere_catalog::fetch::{DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT};
use sphere_catalog::ingest::colour_table::PROCESSED_FILE;
use sphere_catalog::ingest::hipparcos::FILTERED_FILE;
use sphere_catalog::ingest::iau::IAU_BOUNDARY_BASE_URL;
use sphere_catalog::ingest::stars::MERGED_FILE;
use sphere_catalog::lines::curves::DEFAULT_STEP_DEG;
use sphere_catalog::lines::precess::DEFAULT_SUBDIVISION_STEP_DEG;
use sphere_core::utils::{jd_to_centuries, year_to_centuries};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Sky sphere data preparation: boundaries, reference lines, star tables")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert bound_in_20 into vertex and closed border CSVs
    Vertices(VerticesArgs),

    /// Download the IAU boundary file of every constellation
    FetchBoundaries(FetchBoundariesArgs),

    /// Pair vertex groups with rows of a constellation names table
    JoinConstellations(JoinArgs),

    /// Subdivide border lines and carry them to another epoch
    PrecessBorders(PrecessArgs),

    /// Generate the ecliptic line
    Ecliptic(CurveArgs),

    /// Generate the galactic equator line
    GalacticEquator(CurveArgs),

    /// Generate the RA/Dec grid line files
    Grid(GridArgs),

    /// Append the last column of a refreshed star table to the existing one
    MergeStars(MergeStarsArgs),

    /// Select and rename columns of a VizieR Hipparcos export
    FilterHipparcos(FilterHipparcosArgs),

    /// Turn a black-body colour table into Color32 literals
    ColourTable(ColourTableArgs),
}

#[derive(Parser)]
pub struct VerticesArgs {
    /// bound_in_20 text file
    #[arg(long)]
    pub input: PathBuf,

    /// Directory for output_vertices.csv and output_borders.csv
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct FetchBoundariesArgs {
    /// Vertex CSV to write (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Base URL of the per-constellation text files
    #[arg(long, default_value = IAU_BOUNDARY_BASE_URL)]
    pub base_url: String,

    /// Only these codes, comma separated (default: all 88)
    #[arg(long, value_delimiter = ',')]
    pub codes: Vec<String>,

    /// Maximum concurrent downloads
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Retry failed downloads up to N times
    #[arg(long, default_value = "0")]
    pub retries: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Write whatever was fetched even if some codes failed
    #[arg(long)]
    pub allow_partial: bool,
}

#[derive(Parser)]
pub struct JoinArgs {
    /// Vertex CSV (ra,dec,constellation)
    #[arg(long)]
    pub vertices: PathBuf,

    /// Constellation names CSV, one row per constellation in vertex order
    #[arg(long)]
    pub names: PathBuf,

    /// The names file has no header row
    #[arg(long)]
    pub no_names_header: bool,

    /// Output file (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct EpochArgs {
    /// Julian centuries since J2000.0
    #[arg(long, allow_hyphen_values = true)]
    pub centuries: Option<f64>,

    /// Target epoch as a Julian year, e.g. 2025.5
    #[arg(long)]
    pub year: Option<f64>,

    /// Target epoch as a Julian Date, e.g. 2460676.5
    #[arg(long)]
    pub jd: Option<f64>,
}

impl EpochArgs {
    pub fn centuries(&self) -> f64 {
        match (self.centuries, self.year, self.jd) {
            (Some(t), _, _) => t,
            (None, Some(year), _) => year_to_centuries(year),
            (None, None, Some(jd)) => jd_to_centuries(jd, 0.0),
            (None, None, None) => 0.0,
        }
    }
}

#[derive(Parser)]
pub struct PrecessArgs {
    /// Border CSV (ra_start,dec_start,ra_end,dec_end,colour,width[,constellation])
    #[arg(long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub epoch: EpochArgs,

    /// Maximum piece length in degrees before conversion
    #[arg(long, default_value_t = DEFAULT_SUBDIVISION_STEP_DEG)]
    pub step: f64,

    /// Keep source colours instead of the precessed boundary style
    #[arg(long)]
    pub keep_style: bool,

    /// Output file (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CurveArgs {
    /// RA step between samples in degrees
    #[arg(long, default_value_t = DEFAULT_STEP_DEG)]
    pub step: f64,

    /// Output file (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct GridArgs {
    /// Directory for the four grid files (stdout, one section per file, if omitted)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MergeStarsArgs {
    /// Existing star table
    #[arg(long, default_value = "stars.csv")]
    pub original: PathBuf,

    /// Refreshed star table whose last column is appended
    #[arg(long, default_value = "stars-new.csv")]
    pub updated: PathBuf,

    #[arg(long, default_value = MERGED_FILE)]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct FilterHipparcosArgs {
    /// VizieR I/239 CSV export
    #[arg(long, default_value = "hipparcos_catalogue.csv")]
    pub input: PathBuf,

    #[arg(long, default_value = FILTERED_FILE)]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct ColourTableArgs {
    /// Black-body colour table, two rows per temperature
    #[arg(long, default_value = "raw.txt")]
    pub input: PathBuf,

    #[arg(long, default_value = PROCESSED_FILE)]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_epoch_from_year() {
        let cli = Cli::parse_from(["forge", "precess-borders", "--input", "b.csv", "--year", "2050"]);
        let Commands::PrecessBorders(args) = cli.command else {
            panic!("wrong subcommand");
        };
        assert!((args.epoch.centuries() - 0.5).abs() < 1e-12);
        assert_eq!(args.step, 10.0);
    }

    #[test]
    fn test_epoch_from_julian_date() {
        let cli = Cli::parse_from(["forge", "precess-borders", "--input", "b.csv", "--jd", "2469807.5"]);
        let Commands::PrecessBorders(args) = cli.command else {
            panic!("wrong subcommand");
        };
        assert!((args.epoch.centuries() - 0.5).abs() < 1e-12);

        let result = Cli::try_parse_from([
            "forge", "precess-borders", "--input", "b.csv", "--jd", "2451545.0", "--year", "2000",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_defaults() {
        let cli = Cli::parse_from(["forge", "merge-stars"]);
        let Commands::MergeStars(args) = cli.command else {
            panic!("wrong subcommand");
        };
        assert_eq!(args.output, PathBuf::from(MERGED_FILE));

        let cli = Cli::parse_from(["forge", "colour-table"]);
        let Commands::ColourTable(args) = cli.command else {
            panic!("wrong subcommand");
        };
        assert_eq!(args.output, PathBuf::from(PROCESSED_FILE));
    }

    #[test]
    fn test_epoch_is_exclusive() {
        let result = Cli::try_parse_from([
            "forge", "precess-borders", "--input", "b.csv", "--year", "2050", "--centuries", "0.5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_fetch_codes_list() {
        let cli = Cli::parse_from(["forge", "-v", "fetch-boundaries", "--codes", "And,Ori", "--retries", "2"]);
        assert!(cli.verbose);
        let Commands::FetchBoundaries(args) = cli.command else {
            panic!("wrong subcommand");
        };
        assert_eq!(args.codes, ["And", "Ori"]);
        assert_eq!(args.retries, 2);
        assert_eq!(args.concurrency, 4);
        assert_eq!(args.timeout_secs, 60);
        assert!(!args.allow_partial);
    }
}
