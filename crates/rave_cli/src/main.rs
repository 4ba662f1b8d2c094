use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rave_chart::{ChartReport, chart_for, solve_design_moment};
use rave_ephem::positions;
use rave_mandala::{ChannelState, gate_from_longitude};
use rave_time::Moment;

#[derive(Parser)]
#[command(name = "rave", about = "Rave chart calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full chart for a birth moment
    Chart {
        /// Birth timestamp, ISO-8601 with explicit UTC offset
        #[arg(long)]
        time: String,
        /// Observer latitude in degrees [-90, 90]
        #[arg(long)]
        lat: f64,
        /// Observer longitude in degrees [-180, 180]
        #[arg(long)]
        lon: f64,
        /// Emit the chart report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Map an ecliptic longitude to its gate and line
    Gate {
        /// Ecliptic longitude in degrees
        longitude: f64,
    },
    /// Solve the design instant for a birth moment
    Design {
        /// Birth timestamp, ISO-8601 with explicit UTC offset
        #[arg(long)]
        time: String,
        /// Observer latitude in degrees [-90, 90]
        #[arg(long)]
        lat: f64,
        /// Observer longitude in degrees [-180, 180]
        #[arg(long)]
        lon: f64,
    },
    /// Print ecliptic positions of all chart bodies at an instant
    Positions {
        /// Timestamp, ISO-8601 with explicit UTC offset
        #[arg(long)]
        time: String,
        /// Observer latitude in degrees [-90, 90]
        #[arg(long)]
        lat: f64,
        /// Observer longitude in degrees [-180, 180]
        #[arg(long)]
        lon: f64,
    },
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Chart {
            time,
            lat,
            lon,
            json,
        } => {
            let chart = chart_for(&time, lat, lon)?;
            let report = ChartReport::from_chart(&chart);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Birth:  {}", report.birth_utc);
                println!("Design: {}", report.design_utc);
                println!();
                println!("{:<12} {:>10} {:>10}", "Body", "Birth", "Design");
                for (name, activation) in &report.personality {
                    let design = &report.design[name];
                    println!(
                        "{:<12} {:>7}.{} {:>7}.{}",
                        name, activation.gate, activation.line, design.gate, design.line
                    );
                }
                println!();
                let channels: Vec<String> = chart
                    .channel_states()
                    .filter(|(_, s)| *s == ChannelState::Complete)
                    .map(|(c, _)| format!("{}-{}", c.gates.0, c.gates.1))
                    .collect();
                println!("Channels:  {}", channels.join(", "));
                println!("Centers:   {}", report.defined_centers.join(", "));
                println!("Type:      {}", report.energy_type);
                println!("Authority: {}", report.authority);
            }
        }
        Commands::Gate { longitude } => {
            let gl = gate_from_longitude(longitude);
            println!(
                "gate {} line {} ({:.4} deg into the gate)",
                gl.gate, gl.line, gl.degrees_in_gate
            );
        }
        Commands::Design { time, lat, lon } => {
            let birth = Moment::parse(&time, lat, lon)?;
            let solution = solve_design_moment(&birth)?;
            println!("design instant: {}", solution.moment);
            println!(
                "sun longitude:  {:.6} deg (residual {:+.6}, {} iterations)",
                solution.sun_longitude_deg, solution.residual_deg, solution.iterations
            );
        }
        Commands::Positions { time, lat, lon } => {
            let moment = Moment::parse(&time, lat, lon)?;
            for p in positions(&moment).iter() {
                let gl = gate_from_longitude(p.longitude_deg);
                println!(
                    "{:<12} {:>10.4} deg  gate {:>2} line {}",
                    p.body.name(),
                    p.longitude_deg,
                    gl.gate,
                    gl.line
                );
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
