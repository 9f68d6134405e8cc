use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tvos_image_regen::commands::regenerate::{self, ProgressEvent};
use tvos_image_regen::resample::{BuiltinResampler, Resampler, SipsResampler};
use tvos_image_regen::tasks::tvos_tasks;

#[derive(Parser)]
#[command(name = "tvos-image-regen")]
#[command(about = "Regenerate missing tvOS asset catalog images from existing variants")]
struct Cli {
    /// Path to the asset catalog root (e.g. Assets.xcassets)
    asset_catalog: PathBuf,

    /// Resampling backend
    #[arg(long, value_enum, default_value_t = Backend::Sips)]
    backend: Backend,

    /// Program used by the sips backend
    #[arg(long, default_value = "sips")]
    sips: PathBuf,

    /// Print the planned resamples without writing any image
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// External `sips` tool (macOS)
    Sips,
    /// In-process resampling with the image crate
    Builtin,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = tvos_tasks();

    if cli.dry_run {
        for planned in regenerate::plan(&cli.asset_catalog, &tasks)? {
            println!(
                "{} -> {} ({}x{})",
                planned.source.display(),
                planned.destination.display(),
                planned.width,
                planned.height
            );
        }
        return Ok(());
    }

    let resampler: Box<dyn Resampler> = match cli.backend {
        Backend::Sips => Box::new(SipsResampler::new(cli.sips)),
        Backend::Builtin => Box::new(BuiltinResampler::default()),
    };

    println!("Regenerating images in {}", cli.asset_catalog.display());

    regenerate::run(&cli.asset_catalog, &tasks, resampler.as_ref(), |event| match event {
        ProgressEvent::Processing { dir, index, total } => {
            print!("  [{}/{}] {}... ", index + 1, total, dir.display());
            let _ = io::stdout().flush();
        }
        ProgressEvent::Processed { .. } => {
            println!("ok");
        }
        ProgressEvent::Done { images_written } => {
            println!("Wrote {} images.", images_written);
        }
    })
    .inspect_err(|_| println!("FAILED"))?;

    Ok(())
}
