mod config;
mod progress;

use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use engine_logging::{engine_error, engine_info, engine_warn};
use listings_core::StopReason;
use listings_engine::{run_harvest, ReqwestPageSource, StreamingArrayWriter};

use crate::config::Args;
use crate::progress::LogProgressSink;

fn main() -> ExitCode {
    let args = Args::parse();
    engine_logging::initialize(args.log_level, args.log_file.as_deref());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            engine_error!("Harvest failed: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let started = Local::now();
    let settings = args.harvest_settings();
    let source = ReqwestPageSource::new(&args.api, &args.fetch_settings())
        .with_context(|| format!("unusable api url {}", args.api))?;

    engine_info!(
        "Starting harvest: per_page={} concurrent={} max_pages={} retries={} api={}",
        args.per_page,
        args.concurrent,
        args.max_pages,
        args.retries,
        source.api()
    );

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let mut writer = StreamingArrayWriter::create(&args.out)
        .with_context(|| format!("failed to open {}", args.out.display()))?;
    let sink = LogProgressSink::new(settings.sweep.max_waves());

    let summary = runtime
        .block_on(run_harvest(&source, &settings, &mut writer, &sink))
        .with_context(|| format!("failed writing {}", args.out.display()))?;
    writer
        .close()
        .with_context(|| format!("failed to finalize {}", args.out.display()))?;

    if summary.stop_reason == Some(StopReason::Exhausted) && summary.final_wave_degraded > 0 {
        engine_warn!(
            "{} of {} pages in the final wave failed; the sweep may have ended early",
            summary.final_wave_degraded,
            settings.sweep.concurrent()
        );
    }

    let elapsed = Local::now() - started;
    engine_info!(
        "Harvest finished: {} listings in {} waves ({} pages dropped) in {:.1}s",
        summary.records,
        summary.waves,
        summary.degraded_pages,
        elapsed.num_milliseconds() as f64 / 1000.0
    );
    engine_info!("Listings saved to {}", args.out.display());
    Ok(())
}
