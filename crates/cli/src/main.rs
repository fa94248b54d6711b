use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use planelab::lab::SampleKind;

mod lab;
mod provenance;
mod session;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Scene rendering, scripted capture sessions and the orientation lab")]
struct Cmd {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Square,
    Wide,
    Circle,
    Line,
}

impl From<KindArg> for SampleKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Square => SampleKind::Square,
            KindArg::Wide => SampleKind::Wide,
            KindArg::Circle => SampleKind::Circle,
            KindArg::Line => SampleKind::Line,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Classify sampled (or loaded) points against a fixed line for every tolerance
    Lab {
        #[arg(long, value_enum, default_value_t = KindArg::Square)]
        kind: KindArg,
        /// Override the sample size of the chosen distribution
        #[arg(long)]
        count: Option<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Tolerance used for the result scenes
        #[arg(long, default_value_t = 4)]
        eps_index: usize,
        /// CSV with `x` and `y` columns; replaces sampling
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value = "data/lab")]
        out: PathBuf,
    },
    /// Write one autoscaled SVG per scene of a portable scene file
    Render {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 640)]
        width: u32,
        #[arg(long, default_value_t = 480)]
        height: u32,
    },
    /// Replay a scripted event list and save the captured geometry
    Session {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        events: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Also write the final frame
        #[arg(long)]
        svg: Option<PathBuf>,
        #[arg(long, default_value_t = 0.15)]
        close_tolerance: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Lab {
            kind,
            count,
            seed,
            eps_index,
            input,
            out,
        } => {
            let summary = lab::run(&lab::LabArgs {
                kind: kind.into(),
                count,
                seed,
                eps_index,
                input,
                out,
            })?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Action::Render {
            input,
            out,
            width,
            height,
        } => {
            let written = session::render(&input, &out, width, height)?;
            for path in written {
                println!("{}", path.display());
            }
            Ok(())
        }
        Action::Session {
            input,
            events,
            out,
            svg,
            close_tolerance,
        } => {
            session::session(&session::SessionArgs {
                input,
                events,
                out,
                svg,
                close_tolerance,
            })?;
            Ok(())
        }
        Action::Report => report(),
    }
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": planelab::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
