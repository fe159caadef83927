//! Altimetry command-line tool.
//!
//! Thin wrapper over the toolkit: GPS time conversion, file discovery,
//! reprojection, track classification, grid interpolation and file reading.

mod commands;
mod input;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use toolkit::{ArrayFormat, PixelRegistration, Toolkit, ToolkitConfig};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "altimetry")]
#[command(about = "Satellite altimetry helpers: time, tracks, grids, projections and file readers")]
struct Args {
    /// YAML configuration file
    #[arg(short, long, global = true, env = "ALTIMETRY_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (overrides the configuration; RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert GPS seconds to decimal years
    Gps2dyr {
        /// GPS times in seconds since 1980-01-06
        #[arg(required = true, allow_negative_numbers = true)]
        times: Vec<f64>,
    },

    /// Recursively list files with a name suffix
    ListFiles {
        dir: PathBuf,

        /// File-name suffix (default from configuration, ".h5")
        #[arg(long)]
        suffix: Option<String>,
    },

    /// Transform coordinates between EPSG codes
    Transform {
        #[arg(long)]
        from: u32,

        #[arg(long)]
        to: u32,

        /// Comma-separated x (or longitude) values
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        x: Vec<f64>,

        /// Comma-separated y (or latitude) values
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        y: Vec<f64>,
    },

    /// Label a pass ascending/descending from {"time": [...], "lat": [...]}
    TrackType {
        #[arg(long)]
        input: PathBuf,

        /// Gap threshold (default from configuration)
        #[arg(long)]
        tmax: Option<f64>,
    },

    /// Interpolate a grid {"xd": [...], "yd": [...], "z": [[...]]} at points
    Interp {
        #[arg(long)]
        grid: PathBuf,

        /// Query x: one value or a comma-separated list
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        x: Vec<f64>,

        /// Query y: one value or a comma-separated list
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        y: Vec<f64>,
    },

    /// Read variables from an HDF5 or NetCDF file and print their shapes
    Read {
        /// h5 or nc (default: from the file extension)
        #[arg(long)]
        format: Option<ArrayFormat>,

        file: PathBuf,

        #[arg(required = true)]
        variables: Vec<String>,
    },

    /// Read band 1 of a GeoTIFF and print its georeferencing
    Tifread {
        file: PathBuf,

        /// Pixel registration: A (area) or P (point)
        #[arg(long, default_value = "A")]
        registration: PixelRegistration,
    },

    /// List the capabilities available in this build
    Capabilities,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ToolkitConfig::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => ToolkitConfig::default(),
    }
    .with_env_overrides();
    config.validate().context("Invalid configuration")?;

    init_tracing(&args, &config);
    debug!(?config, "Loaded configuration");

    let toolkit = Toolkit::with_default_capabilities(config);
    let output = run(&toolkit, args.command)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

fn init_tracing(args: &Args, config: &ToolkitConfig) {
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if args.json_logs || config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(toolkit: &Toolkit, command: Command) -> Result<String> {
    match command {
        Command::Gps2dyr { times } => commands::gps2dyr(toolkit, &times),
        Command::ListFiles { dir, suffix } => {
            commands::list_files(toolkit, &dir, suffix.as_deref())
        }
        Command::Transform { from, to, x, y } => commands::transform(toolkit, from, to, &x, &y),
        Command::TrackType { input, tmax } => commands::track_type(toolkit, &input, tmax),
        Command::Interp { grid, x, y } => commands::interp(toolkit, &grid, x, y),
        Command::Read {
            format,
            file,
            variables,
        } => {
            let format = match format {
                Some(format) => format,
                None => ArrayFormat::from_path(&file).with_context(|| {
                    format!("Cannot infer format of {}; pass --format", file.display())
                })?,
            };
            commands::read(toolkit, format, &file, &variables)
        }
        Command::Tifread { file, registration } => commands::tifread(toolkit, &file, registration),
        Command::Capabilities => Ok(commands::capabilities(toolkit)),
    }
}
