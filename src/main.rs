//! Command-line entry point of the separation analysis batch.

use std::fs::File;
use std::io::BufWriter;
use std::process::Command;

use camino::Utf8PathBuf;
use clap::Parser;
use log::{error, info, warn};

use minsep::analysis::analyze_departures;
use minsep::geodesy::GeodeticPosition;
use minsep::minsep_errors::MinsepError;
use minsep::projection::ProjectionFrame;
use minsep::radar::SiteCatalog;
use minsep::tables::{all_sids, read_aircraft_classes, read_flight_plans, read_sid_groups};
use minsep::tracks::{read_tracks, retain_callsigns};

/// Minimum-separation analysis between consecutive radar-tracked departures.
#[derive(Debug, Parser)]
#[command(name = "minsep", version, about)]
struct Cli {
    /// Flight-plan departure table (semicolon CSV)
    #[arg(long)]
    flight_plans: Utf8PathBuf,

    /// Decoded surveillance tracks (semicolon CSV)
    #[arg(long)]
    tracks: Utf8PathBuf,

    /// Aircraft classification table (semicolon CSV)
    #[arg(long)]
    classes: Utf8PathBuf,

    /// SID-group table (semicolon CSV)
    #[arg(long)]
    sid_groups: Utf8PathBuf,

    /// Output JSON report
    #[arg(long, default_value = "results.json")]
    output: Utf8PathBuf,

    /// System Area Code of the radar site
    #[arg(long, default_value_t = 0x14)]
    sac: u8,

    /// System Identification Code of the radar site
    #[arg(long, default_value_t = 0x81)]
    sic: u8,

    /// Projection center as "lat,lon,alt" (defaults to the radar site location)
    #[arg(long)]
    center: Option<String>,

    /// Python plotting script to invoke on the report once written
    #[arg(long)]
    plot_script: Option<Utf8PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), MinsepError> {
    let site = SiteCatalog::default().resolve(cli.sac, cli.sic)?;
    let center = match &cli.center {
        Some(raw) => parse_center(raw)?,
        None => *site.location(),
    };
    let frame = ProjectionFrame::new(center);

    let sid_groups = read_sid_groups(&cli.sid_groups)?;
    let classes = read_aircraft_classes(&cli.classes)?;
    let flight_plans = read_flight_plans(&cli.flight_plans, &all_sids(&sid_groups))?;
    info!("{} departures in the flight-plan table", flight_plans.len());

    let mut tracks = read_tracks(&cli.tracks)?;
    retain_callsigns(&mut tracks, |callsign| {
        flight_plans.iter().any(|plan| plan.callsign == callsign)
    });
    info!("{} departing aircraft with recorded tracks", tracks.len());

    let report = analyze_departures(&frame, &flight_plans, &tracks, &classes, &sid_groups)?;

    let writer = BufWriter::new(File::create(&cli.output)?);
    serde_json::to_writer_pretty(writer, &report)?;
    info!(
        "wrote {} pair records to {}",
        report.results.len(),
        cli.output
    );

    if let Some(script) = &cli.plot_script {
        let status = Command::new("python3")
            .arg(script)
            .arg(&cli.output)
            .status()?;
        if !status.success() {
            warn!("plotting script exited with {status}");
        }
    }

    Ok(())
}

/// Parse a "lat,lon,alt" projection-center override.
fn parse_center(raw: &str) -> Result<GeodeticPosition, MinsepError> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [lat, lon, alt] = parts.as_slice() else {
        return Err(MinsepError::InvalidRecord(format!(
            "center must be \"lat,lon,alt\", got: {raw}"
        )));
    };

    let parse = |field: &str| {
        field.parse::<f64>().map_err(|_| {
            MinsepError::InvalidRecord(format!("bad center coordinate: {field}"))
        })
    };

    Ok(GeodeticPosition::new(parse(lat)?, parse(lon)?, parse(alt)?))
}
