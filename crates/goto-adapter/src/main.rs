use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use goto_adapter::selftest::{self, DEFAULT_ELEMENT_COUNT};
use goto_adapter::vector::{CapacityPreset, VectorConfig};
use log::{error, trace};

fn init() {
    use env_logger::Env;
    let env = Env::default()
        .filter_or("LOG_LEVEL", "info")
        .write_style_or("LOG_STYLE", "always");

    env_logger::init_from_env(env);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// Small initial capacity for general use
    Small,
    /// Large initial capacity for allocation-constrained runs
    Large,
}

impl From<Preset> for CapacityPreset {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Small => CapacityPreset::Small,
            Preset::Large => CapacityPreset::Large,
        }
    }
}

/// Runs the built-in container self-test
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Initial capacity preset (defaults to the build's preset)
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Number of sequential bytes to append (1..=256)
    #[arg(long, default_value_t = DEFAULT_ELEMENT_COUNT)]
    count: usize,
}

impl Cli {
    fn capacity_preset(&self) -> CapacityPreset {
        self.preset.map(CapacityPreset::from).unwrap_or_default()
    }
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> ExitCode {
    let preset = cli.capacity_preset();
    let config = VectorConfig::new(preset);
    trace!("Using {preset:?} preset ({} elements)", config.initial_capacity);

    match selftest::run_all(out, &config, cli.count) {
        Ok(()) => {
            trace!("Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("self-test failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    init();
    trace!("Starting goto-adapter");
    let cli = Cli::parse();
    run(&cli, &mut std::io::stdout().lock())
}
