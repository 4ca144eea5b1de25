//! Application entry point and dispatch.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use fibdev_core::{DefaultFactory, Engine, EngineFactory, MAX_INDEX};
use fibdev_device::{FibDevice, Session};

use crate::config::AppConfig;
use crate::output::write_sweep;
use crate::verify::verify_sweep;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "fibdev", &mut io::stdout());
        return Ok(());
    }

    if let Some(ref path) = config.verify {
        return run_verify(path, config.quiet);
    }

    let factory = DefaultFactory::new();
    let engine = factory.get(&config.engine)?;

    let device = FibDevice::new();
    let mut session = device.open()?;

    let result = if config.sweep {
        run_sweep(&mut session, engine.as_ref(), config)
    } else {
        run_query(&mut session, engine.as_ref(), config)
    };

    session.close();
    result
}

fn run_query(session: &mut Session, engine: &dyn Engine, config: &AppConfig) -> Result<()> {
    let k = session.seek(config.offset, config.whence.into());
    let value = session.read_with(engine)?;

    if config.quiet {
        println!("{value}");
    } else {
        println!("F({k}) = {value}");
    }
    Ok(())
}

fn run_sweep(session: &mut Session, engine: &dyn Engine, config: &AppConfig) -> Result<()> {
    let max = if config.max > MAX_INDEX {
        warn!(requested = config.max, max = MAX_INDEX, "sweep limited to max index");
        MAX_INDEX
    } else {
        config.max
    };

    let lines = match config.output {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_sweep(session, engine, max, &mut BufWriter::new(file))?
        }
        None => write_sweep(session, engine, max, &mut io::stdout().lock())?,
    };
    info!(lines, engine = engine.name(), "sweep complete");
    Ok(())
}

fn run_verify(path: &Path, quiet: bool) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let summary = verify_sweep(&text)?;

    if !quiet {
        let mut out = io::stdout().lock();
        writeln!(
            out,
            "Verified {} values (max index {})",
            summary.checked, summary.max_index
        )?;
    }
    Ok(())
}
