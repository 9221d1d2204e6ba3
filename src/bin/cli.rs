//! Stalkwire CLI Client
//!
//! Command-line interface for poking at a beanstalk server.

use std::io::Write;
use std::time::Duration;

use clap::{Parser, Subcommand};
use stalkwire::{Config, Conn, StalkError};
use tracing_subscriber::{fmt, EnvFilter};

/// Stalkwire CLI
#[derive(Parser, Debug)]
#[command(name = "stalkwire-cli")]
#[command(about = "CLI for beanstalk work queues")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:11300")]
    server: String,

    /// Tube to operate on
    #[arg(short, long, default_value = "default")]
    tube: String,

    /// Dial timeout in milliseconds
    #[arg(long, default_value = "10000")]
    dial_timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Put a job into the tube
    Put {
        /// Job body
        body: String,

        /// Priority (lower is more urgent)
        #[arg(short, long, default_value = "1024")]
        pri: u32,

        /// Seconds before the job becomes ready
        #[arg(short, long, default_value = "0")]
        delay: u64,

        /// Seconds a worker may hold the job
        #[arg(long, default_value = "60")]
        ttr: u64,
    },

    /// Print a job's body
    Peek {
        id: u64,
    },

    /// Delete a job
    Delete {
        id: u64,
    },

    /// Kick up to BOUND buried jobs in the tube
    Kick {
        bound: u64,
    },

    /// Reserve a job from the tube and print it
    Reserve {
        /// Seconds to wait for a job
        #[arg(long, default_value = "0")]
        timeout: u64,

        /// Delete the job after printing it
        #[arg(long)]
        delete: bool,
    },

    /// Server statistics
    Stats,

    /// Statistics for the tube
    StatsTube,

    /// Statistics for one job
    StatsJob {
        id: u64,
    },

    /// List all tubes
    ListTubes,

    /// Pause the tube
    Pause {
        /// Seconds to pause
        seconds: u64,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stalkwire=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), StalkError> {
    let config = Config::builder()
        .addr(&args.server)
        .dial_timeout_ms(args.dial_timeout_ms)
        .build();

    let mut conn = Conn::dial_with_config(&config)?;
    let mut out = std::io::stdout().lock();

    match args.command {
        Commands::Put {
            body,
            pri,
            delay,
            ttr,
        } => {
            let id = conn.tube(&args.tube).put(
                body.as_bytes(),
                pri,
                Duration::from_secs(delay),
                Duration::from_secs(ttr),
            )?;
            writeln!(out, "{}", id)?;
        }
        Commands::Peek { id } => {
            let body = conn.peek(id)?;
            out.write_all(&body)?;
            writeln!(out)?;
        }
        Commands::Delete { id } => {
            conn.delete(id)?;
        }
        Commands::Kick { bound } => {
            let kicked = conn.tube(&args.tube).kick(bound)?;
            writeln!(out, "{}", kicked)?;
        }
        Commands::Reserve { timeout, delete } => {
            let (id, body) = conn
                .tube_set([args.tube.as_str()])
                .reserve(Duration::from_secs(timeout))?;
            writeln!(out, "{}", id)?;
            out.write_all(&body)?;
            writeln!(out)?;
            if delete {
                conn.delete(id)?;
            }
        }
        Commands::Stats => {
            let stats = conn.stats()?;
            writeln!(out, "{:#?}", stats)?;
        }
        Commands::StatsTube => {
            let stats = conn.tube(&args.tube).stats()?;
            writeln!(out, "{:#?}", stats)?;
        }
        Commands::StatsJob { id } => {
            let stats = conn.stats_job(id)?;
            writeln!(out, "{:#?}", stats)?;
        }
        Commands::ListTubes => {
            for tube in conn.list_tubes()? {
                writeln!(out, "{}", tube)?;
            }
        }
        Commands::Pause { seconds } => {
            conn.tube(&args.tube).pause(Duration::from_secs(seconds))?;
        }
    }

    conn.close()
}
