use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use taxrange::{Collection, Pixelation, RangeFile, RangeType};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Inspect taxon range files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the taxa of range files (standard input if no file is given)
    List {
        /// Range files to read
        files: Vec<PathBuf>,

        /// Print the range type and number of pixels of each taxon
        #[arg(long)]
        count: bool,

        /// Print one JSON object per taxon
        #[arg(long)]
        json: bool,
    },
    /// Show the pixelation of a range file
    Info {
        /// Range file to read
        file: PathBuf,
    },
    /// Print the pixel id of a geographic point
    Pixel {
        /// Latitude, in degrees
        #[arg(allow_hyphen_values = true)]
        lat: f64,

        /// Longitude, in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,

        /// Pixels at the equator
        #[arg(long, default_value_t = 360)]
        equator: usize,
    },
}

#[derive(Serialize)]
struct TaxonSummary<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    range_type: RangeType,
    age: i64,
    pixels: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::List { files, count, json } => {
            if files.is_empty() {
                let coll = Collection::read_tsv(io::stdin().lock())?;
                list(&coll, *count, *json)?;
            }
            for path in files {
                let coll: Collection = RangeFile::open(path)?;
                list(&coll, *count, *json)?;
            }
        }
        Commands::Info { file } => {
            let coll: Collection = RangeFile::open(file)?;
            let pix = coll.pixelation();
            println!("equator: {}", pix.equator());
            println!("rings: {}", pix.rings());
            println!("pixels: {}", pix.pixel_count());
            println!("taxa: {}", coll.len());
        }
        Commands::Pixel { lat, lon, equator } => {
            let pix = taxrange::Isolatitude::new(*equator)?;
            println!("{}", pix.pixel(*lat, *lon));
        }
    }

    Ok(())
}

fn list(coll: &Collection, count: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    for taxon in coll.iter() {
        if json {
            let summary = TaxonSummary {
                name: taxon.name(),
                range_type: taxon.range_type(),
                age: taxon.age(),
                pixels: taxon.len(),
            };
            println!("{}", serde_json::to_string(&summary)?);
        } else if count {
            println!("{}\t{}\t{}", taxon.name(), taxon.range_type(), taxon.len());
        } else {
            println!("{}", taxon.name());
        }
    }
    Ok(())
}
