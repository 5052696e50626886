use clap::{Parser, Subcommand, ValueEnum};
use kx_sim::{SimError, run_headless};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(name = "kx-cli")]
#[command(about = "Kinetix CLI - headless physics simulation runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available models
    List,
    /// Run a model headless and export the trajectory
    Run {
        /// Model name (see `list`)
        model: String,
        /// Simulated duration in seconds
        #[arg(long)]
        duration: f64,
        /// Fixed physics step in seconds
        #[arg(long, default_value_t = 1e-3)]
        dt: f64,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::List => {
            for name in kx_models::MODEL_NAMES {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Run {
            model,
            duration,
            dt,
            format,
            output,
        } => {
            let mut sim = kx_models::build(&model)
                .ok_or(SimError::InvalidArg { what: "unknown model name" })?;

            let trajectory = run_headless(sim.as_mut(), duration, dt)?;

            let mut writer: Box<dyn Write> = match output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(io::stdout().lock()),
            };
            match format {
                Format::Csv => trajectory.write_csv(&mut writer)?,
                Format::Json => serde_json::to_writer_pretty(&mut writer, &trajectory)?,
            }
            writer.flush()?;
            Ok(())
        }
    }
}
