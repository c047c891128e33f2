use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use meter_readings::{
    Error, format_long_date, get_local_offset,
    client::{ClientConfig, HttpReadingsApi, ReadingInputs, ReadingsClient, Submission},
    pagination::PaginationConfig,
};

/// Record meter readings and manage stored calculations through the readings API.
///
/// The API is found through the `READINGS_BASE_URL` environment variable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The canonical timezone used to display dates, e.g. "Pacific/Auckland".
    #[arg(long, env = "TIMEZONE", default_value = "Etc/UTC", global = true)]
    timezone: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bill the difference between two readings and store the result.
    Calculate {
        /// The meter reading taken in the morning.
        #[arg(long, allow_hyphen_values = true)]
        morning: String,

        /// The meter reading taken in the evening.
        #[arg(long, allow_hyphen_values = true)]
        evening: String,

        /// The price per unit.
        #[arg(long, allow_hyphen_values = true)]
        price: String,
    },
    /// Show a page of the stored calculations.
    List {
        /// The 1-based page to show.
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Delete a stored calculation.
    Delete {
        /// The ID of the calculation to delete.
        id: i64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let config = ClientConfig::from_env()?;
    let local_offset = get_local_offset(&args.timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(args.timezone.clone()))?;

    let mut client = ReadingsClient::new(
        HttpReadingsApi::new(&config),
        PaginationConfig::default().page_size,
    );
    // Errors are logged by the client; an empty list is used instead.
    let _ = client.load().await;

    match args.command {
        Command::Calculate {
            morning,
            evening,
            price,
        } => {
            client.set_inputs(ReadingInputs {
                morning,
                evening,
                price,
            });
            let result = client.calculate().await?;

            println!("Morning Reading: {}", result.morning_reading);
            println!("Evening Reading: {}", result.evening_reading);
            println!("Price: {}", result.price);
            println!("Total Cost: {:.2}", result.result);
            match &result.submission {
                Submission::Saved(id) => println!("Saved as calculation {id}."),
                Submission::Failed(reason) => println!("This result could not be saved: {reason}"),
                Submission::Pending => println!("Saving..."),
            }
        }
        Command::List { page } => {
            client.show_data();
            client.go_to_page(page);
            let page = client.page();

            if page.items.is_empty() {
                println!("No calculations yet.");
                return Ok(());
            }

            println!(
                "{:<6} {:<6} {:>12} {:>12} {:>10} {:>12}  Date",
                "Serial", "ID", "Morning", "Evening", "Price", "Result"
            );
            for (offset, calculation) in page.items.iter().enumerate() {
                println!(
                    "{:<6} {:<6} {:>12} {:>12} {:>10} {:>12.2}  {}",
                    page.first_serial + offset,
                    calculation.id,
                    calculation.morning_reading,
                    calculation.evening_reading,
                    calculation.price,
                    calculation.result,
                    format_long_date(calculation.timestamp, local_offset)
                );
            }
            println!("Page {} of {}", page.number, page.page_count);
        }
        Command::Delete { id } => {
            let deleted = client.delete(id).await?;
            println!("Deleted calculation {}.", deleted.id);
        }
    }

    Ok(())
}
