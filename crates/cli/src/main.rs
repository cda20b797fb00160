use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod demo;
mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Runs the geometry, zoo and error-handling drills")]
struct Cmd {
    /// Log debug events as well as info/warn
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Run every section in order (default)
    Demo,
    /// Evaluate the geometry helpers for the given inputs
    Geometry {
        #[arg(long, default_value_t = 6.25, allow_negative_numbers = true)]
        value: f64,
        #[arg(long, default_value_t = 2.0)]
        radius: f64,
        #[arg(long, default_value_t = 3.0)]
        base: f64,
        #[arg(long, default_value_t = 4.0)]
        height: f64,
        #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
        a: f64,
        #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
        b: f64,
    },
    /// List the sample zoo and its cats
    Zoo,
    /// Robust sum of two loosely typed values
    Sum {
        #[arg(allow_negative_numbers = true)]
        a: String,
        #[arg(allow_negative_numbers = true)]
        b: String,
    },
    /// Safe division of two numeric strings
    Divide {
        #[arg(allow_negative_numbers = true)]
        dividend: String,
        #[arg(allow_negative_numbers = true)]
        divisor: String,
    },
    /// Validate ages, one attempt per argument
    Age {
        #[arg(required = true, allow_negative_numbers = true)]
        attempts: Vec<String>,
    },
    /// Parse a space- or comma-separated grade list and average it
    Grades { input: String },
    /// Emit a JSON summary of every drill on the demo inputs
    Report {
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(version = lessons::VERSION, "start");
    match cmd.action.unwrap_or(Action::Demo) {
        Action::Demo => {
            demo::run_all();
            Ok(())
        }
        Action::Geometry {
            value,
            radius,
            base,
            height,
            a,
            b,
        } => demo::geometry(value, radius, base, height, a, b),
        Action::Zoo => {
            demo::zoo();
            Ok(())
        }
        Action::Sum { a, b } => demo::sum(&a, &b),
        Action::Divide { dividend, divisor } => {
            demo::divide(&dividend, &divisor);
            Ok(())
        }
        Action::Age { attempts } => {
            demo::age(&attempts);
            Ok(())
        }
        Action::Grades { input } => demo::grades(&input),
        Action::Report { out } => report::run(out.as_deref()),
    }
}
