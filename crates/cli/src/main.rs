use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::f64::consts::PI;
use std::path::PathBuf;
use tangent_curve::api::{ReplayToken, SeriesCfg, SweepCfg};
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod figure;
mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Sample and plot closed curves from tangent-angle Fourier coefficients")]
struct Cmd {
    /// Optional run label; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

/// Angle grid flags shared by `sample` and `plot`.
#[derive(Args, Clone, Copy)]
struct SweepArgs {
    /// Angle step in radians
    #[arg(long, default_value_t = PI / 100.0)]
    step: f64,
    /// Stop before 2π instead of repeating the start point
    #[arg(long)]
    exclusive_end: bool,
}

impl SweepArgs {
    fn cfg(self) -> SweepCfg {
        SweepCfg {
            step: self.step,
            include_end: !self.exclusive_end,
            ..SweepCfg::default()
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Sample one period and write theta/x/y as CSV or Parquet
    Sample {
        #[arg(long, default_value = "coeff1.txt")]
        input: PathBuf,
        #[arg(long, default_value = "data/curve.csv")]
        out: PathBuf,
        #[command(flatten)]
        sweep: SweepArgs,
    },
    /// Render one or more curves into a square SVG
    Plot {
        #[arg(long = "input", default_value = "coeff1.txt")]
        inputs: Vec<PathBuf>,
        #[arg(long, default_value = "curve.svg")]
        out: PathBuf,
        /// Canvas edge length in pixels
        #[arg(long, default_value_t = 800)]
        size: u32,
        #[command(flatten)]
        sweep: SweepArgs,
    },
    /// Print the curve point at one angle as JSON
    Eval {
        #[arg(long, default_value = "coeff1.txt")]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        theta: f64,
    },
    /// Write a reproducible random coefficient file
    Random {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 8)]
        harmonics: usize,
        #[arg(long, default_value_t = 1.0)]
        fundamental: f64,
        #[arg(long, default_value_t = 0.3)]
        amplitude: f64,
        #[arg(long, default_value_t = 1.5)]
        decay: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sample { input, out, sweep } => {
            commands::sample(&input, &out, sweep.cfg(), cmd.tag)?;
        }
        Action::Plot {
            inputs,
            out,
            size,
            sweep,
        } => {
            commands::plot(&inputs, &out, size, sweep.cfg(), cmd.tag)?;
        }
        Action::Eval { input, theta } => {
            let p = commands::eval(&input, theta)?;
            println!("{}", serde_json::to_string(&p)?);
        }
        Action::Random {
            out,
            harmonics,
            fundamental,
            amplitude,
            decay,
            seed,
            index,
        } => {
            let cfg = SeriesCfg {
                harmonics,
                fundamental,
                amplitude,
                decay,
            };
            commands::random(&out, cfg, ReplayToken { seed, index }, cmd.tag)?;
        }
        Action::Report => {
            let obj = commands::report(cmd.tag.as_deref());
            println!("{}", serde_json::to_string_pretty(&obj)?);
        }
    }
    Ok(())
}
