//! MIPS pipeline simulator CLI.
//!
//! This binary drives the simulator core from the command line. It performs:
//! 1. **Run:** Load a machine-code listing, run it to completion under the chosen
//!    hazard mode, and report registers, data memory, and statistics.
//! 2. **Disassemble:** Print each word of a listing as assembly.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use pipesim_core::clock::ProviderKind;
use pipesim_core::common::{LoadError, Register, SimError};
use pipesim_core::config::Config;
use pipesim_core::core::pipeline::signals::HazardMode;
use pipesim_core::sim::{ListingAssembler, RunOutcome, Simulator, load_program};

#[derive(Parser, Debug)]
#[command(
    name = "pipesim",
    author,
    version,
    about = "Cycle-accurate five-stage MIPS pipeline simulator",
    long_about = "Run or disassemble machine-code listings (one hex word per line).\n\nExamples:\n  pipesim run prog.hex\n  pipesim run prog.hex --mode stall --stats\n  pipesim run prog.hex --timed --period 2 --pipeline\n  pipesim disasm prog.hex"
)]
struct Cli {
    /// Log pipeline activity at debug level (overridden by RUST_LOG).
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a listing until it finishes, fails, or hits the cycle limit.
    Run {
        /// Listing of machine words.
        listing: PathBuf,

        /// Hazard mode: fail, stall, or stall-and-forward.
        #[arg(short, long)]
        mode: Option<HazardMode>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Cycle limit.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Drive the clock in real time from the timed provider.
        #[arg(long)]
        timed: bool,

        /// Clock period setting for --timed (half-period = period * 50 ms).
        #[arg(long)]
        period: Option<u64>,

        /// Log a pipeline snapshot every cycle.
        #[arg(long)]
        pipeline: bool,

        /// Print the non-zero data memory words.
        #[arg(long)]
        dump_memory: bool,

        /// Print the statistics report.
        #[arg(long)]
        stats: bool,

        /// Print the final state as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Disassemble a listing.
    Disasm {
        /// Listing of machine words.
        listing: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let result = match cli.command {
        Commands::Run {
            listing,
            mode,
            config,
            max_cycles,
            timed,
            period,
            pipeline,
            dump_memory,
            stats,
            json,
        } => build_config(config.as_deref(), mode, max_cycles, timed, period, pipeline)
            .and_then(|config| {
                cmd_run(
                    &listing,
                    &config,
                    &Report {
                        dump_memory,
                        stats,
                        json,
                    },
                )
            }),
        Commands::Disasm { listing } => cmd_disasm(&listing),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    }
}

fn init_tracing(trace: bool) {
    let default = if trace {
        "warn,pipesim_core=debug,pipesim=debug"
    } else {
        "warn,pipesim_core=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// What to print after a run.
struct Report {
    dump_memory: bool,
    stats: bool,
    json: bool,
}

fn build_config(
    path: Option<&Path>,
    mode: Option<HazardMode>,
    max_cycles: Option<u64>,
    timed: bool,
    period: Option<u64>,
    pipeline: bool,
) -> Result<Config, SimError> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Config::from_json(&text)?
        }
        None => Config::default(),
    };
    if let Some(mode) = mode {
        config.general.hazard_mode = mode;
    }
    if let Some(max_cycles) = max_cycles {
        config.general.max_cycles = max_cycles;
    }
    if timed {
        config.clock.provider = ProviderKind::Timed;
    }
    if let Some(period) = period {
        config.clock.period = period;
    }
    config.general.trace_pipeline |= pipeline;
    config.validate()?;
    Ok(config)
}

fn cmd_run(listing: &Path, config: &Config, report: &Report) -> Result<i32, SimError> {
    let mut sim = Simulator::new(config)?;
    sim.load(&ListingAssembler, listing)?;
    tracing::debug!(mode = %sim.processor.mode(), listing = %listing.display(), "starting run");

    let outcome = if sim.processor.clock().timed().is_some() {
        sim.run_timed()?
    } else {
        sim.run()?
    };

    if report.json {
        print_json(&sim, outcome);
    } else {
        print_text(&sim, outcome, report);
    }
    if report.stats {
        sim.processor.stats().print();
    }

    Ok(match outcome {
        RunOutcome::Finished { .. } => 0,
        RunOutcome::Failed { .. } | RunOutcome::CycleLimit { .. } => 1,
    })
}

fn print_text(sim: &Simulator, outcome: RunOutcome, report: &Report) {
    let cpu = &sim.processor;
    println!("{outcome}");
    println!("mode: {}", cpu.mode());
    println!("pc:   {:#010x}", cpu.pc());
    println!();
    cpu.datapath().registers().dump();
    if report.dump_memory {
        println!();
        println!("data memory:");
        let mut any = false;
        for (address, value) in cpu.data_memory().iter().filter(|&(_, value)| value != 0) {
            println!("  [{address:#010x}] = {value:#010x}");
            any = true;
        }
        if !any {
            println!("  (empty)");
        }
    }
}

fn print_json(sim: &Simulator, outcome: RunOutcome) {
    let cpu = &sim.processor;
    let registers: serde_json::Map<String, serde_json::Value> = Register::ALL
        .iter()
        .map(|&reg| (reg.name().to_owned(), json!(cpu.register(reg))))
        .collect();
    let memory: serde_json::Map<String, serde_json::Value> = cpu
        .data_memory()
        .iter()
        .map(|(address, value)| (format!("{address:#010x}"), json!(value)))
        .collect();
    let (status, hazards) = match outcome {
        RunOutcome::Finished { .. } => ("finished", Vec::new()),
        RunOutcome::Failed { hazards, .. } => ("failed", hazards.describe()),
        RunOutcome::CycleLimit { .. } => ("cycle_limit", Vec::new()),
    };
    let stats = cpu.stats();
    let value = json!({
        "status": status,
        "hazards": hazards,
        "mode": cpu.mode().as_str(),
        "pc": cpu.pc(),
        "cycles": stats.cycles,
        "retired": stats.instructions_retired,
        "stalls": stats.stalls_data,
        "flushes": stats.flushes,
        "registers": registers,
        "memory": memory,
    });
    println!("{value:#}");
}

fn cmd_disasm(listing: &Path) -> Result<i32, SimError> {
    let program = load_program(&ListingAssembler, listing)?;
    for (address, instruction) in program.iter() {
        println!("{address:#06x}:  {:08x}  {instruction}", instruction.raw());
    }
    Ok(0)
}
