//! Syllabus CLI Application
//!
//! Command-line interface for the syllabus lesson scheduler.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use syllabus_core::SchedulerBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog,
        holidays,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);
    let with_scheduler = |renderer: TerminalRenderer| -> Result<Cli> {
        let scheduler = SchedulerBuilder::new()
            .with_catalog_path(catalog.as_ref())
            .with_holidays_path(holidays.as_ref())
            .build()
            .context("Failed to initialize scheduler")?;
        Ok(Cli::new(scheduler, renderer))
    };

    info!("syllabus started");

    match command {
        Plan(args) => with_scheduler(renderer)?.plan(args),
        Preview(args) => with_scheduler(renderer)?.preview(args),
        Rebuild(args) => with_scheduler(renderer)?.rebuild(args),
        Progress(args) => with_scheduler(renderer)?.progress(args),
        Count(args) => cli::count(&renderer, &args),
        Shift(args) => cli::shift(&renderer, &args),
        Schema(args) => cli::schema(&renderer, &args),
    }
}
