use bed_finder::config::cli::{Command, LogFormat};
use bed_finder::core::{HospitalDirectory, Listing, ListingSource, SubmissionSink};
use bed_finder::utils::validation::{validate_range, Validate};
use bed_finder::utils::{error::FinderError, logger};
use bed_finder::{
    build_listing, CliConfig, ContactForm, ContactSubmission, FormStatus, RestHospitalDirectory,
    RestSubmissionSink, StaticDirectory, TomlConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(&e, 1),
    };

    match cli.command {
        Command::List {
            radius_km,
            speed_kmh,
            json,
        } => {
            let (speed, radius) = match listing_args(&config, speed_kmh, radius_km) {
                Ok(args) => args,
                Err(e) => exit_with(&e, 1),
            };

            let directory: Box<dyn HospitalDirectory> = match &config.backend {
                Some(backend) => Box::new(RestHospitalDirectory::new(backend.clone())?),
                None => {
                    tracing::info!("No backend configured, showing the built-in hospital list");
                    Box::new(StaticDirectory)
                }
            };

            let listing = build_listing(
                &*directory,
                config.reference_point(),
                speed,
                radius,
            )
            .await;

            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                print_listing(&listing);
            }
        }
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let Some(backend) = config.backend.clone() else {
                exit_with(
                    &FinderError::MissingConfigError {
                        field: "backend (needed to store contact submissions)".to_string(),
                    },
                    1,
                );
            };
            let sink = RestSubmissionSink::new(backend)?;

            let mut form = ContactForm::new(ContactSubmission {
                name,
                email,
                subject,
                message,
            });
            let code = submit_contact(&mut form, &sink).await;
            if code != 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> bed_finder::Result<TomlConfig> {
    let config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Resolves speed and radius from flags over config, range-checking both.
fn listing_args(
    config: &TomlConfig,
    speed_kmh: Option<f64>,
    radius_km: Option<f64>,
) -> bed_finder::Result<(f64, Option<f64>)> {
    let speed = speed_kmh.unwrap_or_else(|| config.speed_kmh());
    validate_range("--speed-kmh", speed, 0.1, 300.0)?;

    let radius = radius_km.or_else(|| config.radius_km());
    if let Some(radius) = radius {
        validate_range("--radius-km", radius, 0.0, 20_100.0)?;
    }

    Ok((speed, radius))
}

/// Exit code 1 for input the form rejects, 2 when the sink fails.
async fn submit_contact<S: SubmissionSink + ?Sized>(form: &mut ContactForm, sink: &S) -> i32 {
    if let Err(e) = form.validate() {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        return 1;
    }

    match form.submit(sink).await {
        FormStatus::Success(msg) => {
            println!("✅ {}", msg);
            0
        }
        FormStatus::Error(msg) => {
            eprintln!("❌ {}", msg);
            2
        }
        FormStatus::Idle | FormStatus::Loading => 2,
    }
}

fn exit_with(e: &FinderError, code: i32) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(code)
}

fn print_listing(listing: &Listing) {
    if listing.source == ListingSource::Fallback {
        println!("(live directory unavailable, showing cached hospitals)");
    }
    if listing.rows.is_empty() {
        println!("No hospitals found.");
        return;
    }

    for row in &listing.rows {
        println!(
            "{:<28} {:>4} beds  {:<9} {:>6} km  {:>3} mins  ★ {:.1}",
            row.hospital.name,
            row.hospital.available_beds,
            row.status.label(),
            row.distance.display_km(),
            row.distance.eta_minutes,
            row.hospital.rating,
        );
    }
}
