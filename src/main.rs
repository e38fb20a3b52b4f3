use std::process::ExitCode;

use anyhow::{Context, Result};
use cafe_reservation::prelude::*;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const RETRY_ALERT: &str = "예약 처리 중 오류가 발생했습니다. 다시 시도해주세요.";
const SUCCESS_NOTICE: &str = "예약 신청이 완료되었습니다.";

/// Reserve a table or space at the office cafe.
#[derive(Debug, Parser)]
#[command(name = "cafe-reservation", version)]
struct Cli {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    department: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    /// meeting, party or other
    #[arg(long, default_value = "")]
    space_type: String,
    #[arg(long = "guests", default_value = "")]
    guest_count: String,
    /// YYYY-MM-DD
    #[arg(long = "date", default_value = "")]
    reservation_date: String,
    #[arg(long = "time", default_value = "")]
    reservation_time: String,
    #[arg(long, default_value = "")]
    duration: String,
    #[arg(long)]
    purpose: Option<String>,
    #[arg(long)]
    requests: Option<String>,

    /// Reservation endpoint; overrides CAFE_RESERVATION_ENDPOINT
    #[arg(long)]
    endpoint: Option<String>,
    /// Do not inspect the endpoint's response status
    #[arg(long)]
    fire_and_forget: bool,
    /// Print the bookable date window and exit
    #[arg(long)]
    show_window: bool,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn form(&self) -> ReservationForm {
        ReservationForm {
            name: self.name.clone(),
            department: self.department.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            space_type: self.space_type.clone(),
            guest_count: self.guest_count.clone(),
            reservation_date: self.reservation_date.clone(),
            reservation_time: self.reservation_time.clone(),
            duration: self.duration.clone(),
            purpose: self.purpose.clone(),
            requests: self.requests.clone(),
        }
    }

    fn config(&self) -> ReservationConfig {
        let mut config = ReservationConfig::from_env();
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint.as_str());
        }
        if self.fire_and_forget {
            config = config.with_transport_mode(TransportMode::FireAndForget);
        }
        config
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<bool> {
    let config = cli.config();

    if cli.show_window {
        let (min, max) = selectable_dates(&config.validator.date_policy).as_input_bounds();
        if cli.json {
            print_json(&serde_json::json!({ "min": min, "max": max }))?;
        } else {
            println!("{} ~ {}", min, max);
        }
        return Ok(true);
    }

    // Date picker guard: the page rejects weekends the moment they are picked
    if !cli.reservation_date.trim().is_empty() {
        if let Err(e) = check_reservation_date(&cli.reservation_date, &config.validator.date_policy)
        {
            if cli.json {
                print_json(&ReservationFlow::Rejected(ValidationResult::invalid(&e)))?;
            } else {
                eprintln!("{}", e.to_korean());
            }
            return Ok(false);
        }
    }

    let validator = Validator::new(config.validator);
    let submitter =
        Submitter::new(config.submitter.clone()).context("failed to set up submission")?;

    if !config.submitter.destination.is_configured() {
        tracing::info!("no endpoint configured, running in demo mode");
    }

    let flow = process_reservation(&cli.form(), &validator, &submitter).await?;
    if cli.json {
        print_json(&flow)?;
    }

    match flow {
        ReservationFlow::Rejected(result) => {
            if !cli.json {
                let field = result.failed_field.map(|f| f.to_string()).unwrap_or_default();
                eprintln!("{}: {}", field, result.message.unwrap_or_default());
                if result.failed_field == Some(Field::GuestCount) {
                    if let Some(hint) = cli.form().guest_placeholder() {
                        eprintln!("  ({})", hint);
                    }
                }
            }
            Ok(false)
        }
        ReservationFlow::Submitted(outcome) if outcome.succeeded => {
            if !cli.json {
                println!("{}", SUCCESS_NOTICE);
            }
            Ok(true)
        }
        ReservationFlow::Submitted(_) => {
            if !cli.json {
                eprintln!("{}", RETRY_ALERT);
            }
            Ok(false)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
