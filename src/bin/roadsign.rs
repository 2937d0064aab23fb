//! roadsign — command-line front end
//!
//! Uploads price-tag photos for digit recognition and exercises the
//! formatting and selection rules without the app UI.

use clap::{Parser, Subcommand};
use roadsign::config::Config;
use roadsign::{ConfidenceVector, UploadClient, format_currency, select};

/// Roadsign CLI
#[derive(Parser)]
#[command(name = "roadsign")]
#[command(version)]
#[command(about = "Road-sign and price-tag recognition tools")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long, env = "ROADSIGN_CONFIG")]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload a price-tag photo and print the recognized price
    Price {
        /// Image file to upload
        image: std::path::PathBuf,
        /// Recognition endpoint (overrides the config file)
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Format digits as a price
    Format {
        /// Digits in reading order
        #[arg(allow_negative_numbers = true)]
        digits: Vec<i64>,
    },

    /// Select a road sign from four model confidences
    Select {
        /// Confidences for Crosswalk, Speed limit, Stop sign, Traffic light
        #[arg(num_args = 4, required = true, allow_negative_numbers = true)]
        confidences: Vec<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Price { image, endpoint } => {
            let config = Config::load(args.config.as_deref())?;
            let endpoint = endpoint.unwrap_or(config.recognizer.endpoint);

            let image = image::open(&image)?;
            let digits = UploadClient::with_endpoint(endpoint)
                .upload_image(&image)
                .await?;

            println!("Detected Price: {}", digits.to_currency());
            println!("Recognized Digits: {digits}");
        }
        Command::Format { digits } => {
            println!("{}", format_currency(&digits));
        }
        Command::Select { confidences } => {
            let values: [f64; 4] = confidences
                .try_into()
                .map_err(|_| "exactly four confidences are required")?;
            let detection = select(&ConfidenceVector::new(values));

            println!("Sign Type: {}", detection.label());
            if let Some(percent) = detection.confidence_percent() {
                println!("Confidence: {percent}");
            }
        }
    }

    Ok(())
}
