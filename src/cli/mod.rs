// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to its
// use case. Printing happens here and nowhere else.
//
//   1. `init-config` — write a NetworkConfig JSON file
//   2. `summary`     — parameter counts and shape plan
//   3. `probe`       — forward pass on seeded random input

pub mod commands;

use anyhow::{ensure, Result};
use clap::Parser;
use commands::{Commands, InitConfigArgs, ProbeArgs, SummaryArgs};

use crate::application::{probe_use_case::ProbeUseCase, summary_use_case::SummaryUseCase};
use crate::infra::{
    backend::{backend_name, default_device, CliBackend},
    config_store::ConfigStore,
};
use crate::ml::network::NetworkConfig;

#[derive(Parser, Debug)]
#[command(
    name = "gated-conv-classifier",
    version = "0.1.0",
    about = "Inspect a gated convolutional + BiLSTM binary classifier."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::InitConfig(args) => run_init_config(args),
            Commands::Summary(args)    => run_summary(args),
            Commands::Probe(args)      => run_probe(args),
        }
    }
}

fn run_init_config(args: InitConfigArgs) -> Result<()> {
    let cfg = NetworkConfig::from(&args);
    cfg.validate()?;

    let store = ConfigStore::new(&args.out);
    store.save(&cfg)?;
    println!("Wrote network config to {}", store.path().display());
    Ok(())
}

fn run_summary(args: SummaryArgs) -> Result<()> {
    ensure!(args.batch > 0, "--batch must be at least 1");
    let cfg = ConfigStore::new(&args.config).load()?;

    tracing::info!("Building network on the {} backend", backend_name());
    let summary = SummaryUseCase::new(cfg, args.batch).execute::<CliBackend>(&default_device())?;

    println!("\n{:<12} {:>12}", "component", "parameters");
    for c in &summary.components {
        println!("{:<12} {:>12}", c.name, c.params);
    }
    println!("{:<12} {:>12}", "total", summary.total_params);

    println!("\n{:<12} shape", "stage");
    for s in &summary.stages {
        println!("{:<12} {:?}", s.stage, s.dims);
    }
    Ok(())
}

fn run_probe(args: ProbeArgs) -> Result<()> {
    ensure!(args.batch > 0, "--batch must be at least 1");
    let cfg = ConfigStore::new(&args.config).load()?;

    tracing::info!("Probing on the {} backend", backend_name());
    let probs = ProbeUseCase::new(cfg, args.batch, args.seed).execute::<CliBackend>(&default_device())?;

    println!();
    for (i, p) in probs.iter().enumerate() {
        println!("example {i:>3}: {p:.6}");
    }
    Ok(())
}
