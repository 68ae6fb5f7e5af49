// Headless runner: load a ROM, run it for a fixed number of CPU steps, and
// report the frame count reached. Display, audio and input all live outside
// this crate; this binary exists to exercise the core from the command line.

use nes_core::config::NesConfig;
use nes_core::Nes;
use std::env;
use std::process::ExitCode;

const CONFIG_PATH: &str = "nes-core.toml";

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(rom_path) = args.next() else {
        eprintln!("usage: nes-core <rom.nes> [steps]");
        return ExitCode::FAILURE;
    };
    let steps: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1_000_000);

    let config = match NesConfig::load_or_default(CONFIG_PATH) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load {CONFIG_PATH}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut nes = Nes::with_config(&config);
    if let Err(err) = nes.load_cartridge_file(&rom_path) {
        eprintln!("failed to load cartridge: {err}");
        return ExitCode::FAILURE;
    }

    for _ in 0..steps {
        nes.step();
    }

    println!(
        "ran {steps} steps, reached frame {}",
        nes.bus.ppu.frame_count()
    );
    ExitCode::SUCCESS
}
