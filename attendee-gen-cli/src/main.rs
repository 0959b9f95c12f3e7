use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use attendee_gen::config::{self, GeneratorConfig};
use attendee_gen::error::GenError;
use attendee_gen::names::{self, CsvFileSource, NameSource, RandomUserSource};
use attendee_gen::roster::generate_roster;
use attendee_gen::ticket::TicketRecord;
use attendee_gen::writer::write_roster_to_path;

#[derive(Parser)]
#[clap(author, version, about = "Generates a fake attendee roster as CSV", long_about = None)]
struct Cli {
    /// Where the roster is written
    #[clap(short, long, default_value = "attendees.csv")]
    output: PathBuf,

    /// How many attendees get a named ticket
    #[clap(long, default_value_t = config::DEFAULT_NUM_ATTENDEES)]
    attendees: usize,

    /// Size of the ticket pool
    #[clap(long, default_value_t = config::DEFAULT_TOTAL_TICKETS)]
    total_tickets: u32,

    /// How many vendors to sell through
    #[clap(long, default_value_t = config::DEFAULT_NUM_VENDORS)]
    vendors: usize,

    /// Ticket type of tickets numbered below 1000
    #[clap(long, default_value_t = config::DEFAULT_TICKET_TYPE)]
    ticket_type: u32,

    /// Tag written in the resp_vendor column
    #[clap(long, default_value = config::DEFAULT_RESP_VENDOR)]
    resp_vendor: String,

    /// Seed of the local random generator
    #[clap(long, default_value_t = config::DEFAULT_SEED)]
    seed: u64,

    /// Seed passed to the name service for vendors
    #[clap(long, default_value = names::DEFAULT_VENDOR_SEED)]
    vendor_seed: String,

    /// Seed passed to the name service for attendees
    #[clap(long, default_value = names::DEFAULT_ATTENDEE_SEED)]
    attendee_seed: String,

    /// Comma separated nationalities to draw names from
    #[clap(long, default_value = "nl,es,de")]
    nationalities: String,

    /// Name service endpoint
    #[clap(long, default_value = names::DEFAULT_API_URL)]
    api_url: String,

    /// Read vendor names from a local CSV file instead of the name service
    #[clap(long)]
    vendors_file: Option<PathBuf>,

    /// Read attendee names from a local CSV file instead of the name service
    #[clap(long)]
    attendees_file: Option<PathBuf>,

    /// Check-in time stamped on entered tickets
    #[clap(long, default_value = config::DEFAULT_ENTERED_AT)]
    entered_at: NaiveDateTime,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            num_attendees: self.attendees,
            total_tickets: self.total_tickets,
            num_vendors: self.vendors,
            ticket_type: self.ticket_type,
            resp_vendor: self.resp_vendor.clone(),
            seed: self.seed,
            ..GeneratorConfig::default()
        }
    }

    fn nationalities(&self) -> Vec<String> {
        self.nationalities
            .split(',')
            .map(str::trim)
            .filter(|nat| !nat.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    fn source(&self, file: Option<&PathBuf>, seed: &str) -> Box<dyn NameSource> {
        match file {
            Some(path) => Box::new(CsvFileSource::new(path)),
            None => Box::new(
                RandomUserSource::new(seed)
                    .with_base_url(self.api_url.as_str())
                    .with_nationalities(self.nationalities()),
            ),
        }
    }

    fn roster(&self) -> Result<Vec<TicketRecord>, GenError> {
        let config = self.config();
        let vendor_source = self.source(self.vendors_file.as_ref(), &self.vendor_seed);
        let attendee_source = self.source(self.attendees_file.as_ref(), &self.attendee_seed);

        let mut rng = StdRng::seed_from_u64(config.seed);
        generate_roster(
            &config,
            vendor_source.as_ref(),
            attendee_source.as_ref(),
            &mut rng,
            self.entered_at,
        )
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let tickets = cli.roster()?;
    write_roster_to_path(&tickets, &cli.output)?;
    info!("Done");

    Ok(())
}
