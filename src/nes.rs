// The system aggregate. Owns the CPU and the bus (which in turn owns RAM,
// the PPU, and the cartridge mapper) and wires them together behind a single
// `step`/`reset` surface. Nothing outside this module holds a `&mut Cpu` and
// a `&mut Bus` at the same time.

use crate::bus::Bus;
use crate::cartridge::{create_mapper, Cartridge, CartridgeError};
use crate::config::NesConfig;
use crate::cpu::Cpu;
use crate::debug::{LogLevel, Logger};
use std::collections::HashSet;
use std::path::Path;

/// The assembled console: CPU, bus (RAM + PPU + cartridge), and the logger
/// every component reports through.
pub struct Nes {
    pub cpu: Cpu,
    pub bus: Bus,
    pub logger: Logger,
    unrecognized_opcodes: HashSet<u8>,
}

impl Nes {
    /// Power-on state with no cartridge loaded. `load_cartridge` must run
    /// before `step`/`reset` produce anything meaningful.
    pub fn new() -> Self {
        Self::with_config(&NesConfig::default())
    }

    /// Power-on state configured from `config`: initial log level, trace
    /// flags, and the PPU's post-reset write-ignore window.
    pub fn with_config(config: &NesConfig) -> Self {
        let mut bus = Bus::new();
        bus.ppu.set_ready_gate_cycles(config.ppu_ready_cycles);

        let mut logger = Logger::new();
        logger.set_log_level(config.log_level);
        if config.cpu_trace_on_startup {
            logger.enable_cpu_trace();
        }
        if config.ppu_trace_on_startup {
            logger.enable_ppu_trace();
        }

        Nes {
            cpu: Cpu::new(),
            bus,
            logger,
            unrecognized_opcodes: HashSet::new(),
        }
    }

    /// Parse an iNES image, build its mapper, and wire it onto the bus.
    /// Equivalent to inserting a cartridge and powering on: RAM starts
    /// zeroed, then `reset()` loads the CPU's PC from the reset vector.
    pub fn load_cartridge(&mut self, rom_data: &[u8]) -> Result<(), CartridgeError> {
        let cartridge = Cartridge::load(rom_data)?;
        let mapper = create_mapper(cartridge)?;
        self.bus.load_mapper(mapper);
        self.reset();
        Ok(())
    }

    /// Read an iNES file from disk and load it, surfacing
    /// `CartridgeError::NotFound` for a missing path instead of a raw I/O
    /// error.
    pub fn load_cartridge_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CartridgeError> {
        let cartridge = Cartridge::load_file(path)?;
        let mapper = create_mapper(cartridge)?;
        self.bus.load_mapper(mapper);
        self.reset();
        Ok(())
    }

    /// Reset both chips: CPU takes its 7-cycle reset sequence, PPU clears
    /// its register file and re-arms the post-power-on write-ignore gate.
    pub fn reset(&mut self) {
        self.bus.ppu.reset();
        self.cpu.reset(&mut self.bus);
    }

    /// Execute one CPU step (one pending interrupt service, or one
    /// instruction), ticking the PPU in lockstep.
    pub fn step(&mut self) {
        self.cpu.step(&mut self.bus);
    }

    /// Run until at least `scanline`/`dot` has been reached at least once,
    /// for tests that need to land on a precise PPU dot rather than count
    /// CPU steps.
    pub fn run_until_dot(&mut self, scanline: u16, dot: u16) {
        while !(self.bus.ppu.scanline() == scanline && self.bus.ppu.cycle() == dot) {
            self.step();
        }
    }

    /// The most recently completed frame, as 256x240 palette indices.
    pub fn frame(&self) -> &[u8] {
        self.bus.ppu.frame()
    }

    /// Note an opcode byte the dispatch table had to approximate (the
    /// unstable illegal opcodes), logging it only the first time it's seen.
    pub(crate) fn note_unrecognized_opcode(&mut self, opcode: u8) {
        if self.unrecognized_opcodes.insert(opcode) {
            self.logger.log_message(
                LogLevel::Warning,
                format!("encountered unstable opcode {opcode:#04X}; behavior is approximated"),
            );
        }
    }
}

impl Default for Nes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nrom_rom(prg: Vec<u8>) -> Vec<u8> {
        let mut data = vec![0u8; 16];
        data[0..4].copy_from_slice(b"NES\x1A");
        data[4] = 2;
        data[5] = 1;
        let mut prg_data = prg;
        prg_data.resize(2 * 0x4000, 0xEA);
        data.extend(prg_data);
        data.extend(vec![0u8; 0x2000]);
        data
    }

    #[test]
    fn load_cartridge_resets_the_cpu_from_the_vector() {
        let mut rom = nrom_rom(vec![]);
        let vector_offset = 16 + (0x4000 * 2 - 4);
        rom[vector_offset] = 0x00;
        rom[vector_offset + 1] = 0x90;
        let mut nes = Nes::new();
        nes.load_cartridge(&rom).unwrap();
        assert_eq!(nes.cpu.pc, 0x9000);
        assert_eq!(nes.cpu.cycles, 7);
    }

    #[test]
    fn step_runs_one_instruction() {
        let mut rom = nrom_rom(vec![0xA9, 0x42]);
        let vector_offset = 16 + (0x4000 * 2 - 4);
        rom[vector_offset] = 0x00;
        rom[vector_offset + 1] = 0x80;
        let mut nes = Nes::new();
        nes.load_cartridge(&rom).unwrap();
        nes.step();
        assert_eq!(nes.cpu.a, 0x42);
    }

    #[test]
    fn with_config_applies_the_ppu_ready_gate_override() {
        let mut config = NesConfig::default();
        config.ppu_ready_cycles = 0;
        let mut nes = Nes::with_config(&config);
        nes.load_cartridge(&nrom_rom(vec![])).unwrap();
        assert!(nes.bus.ppu.is_ready());

        let mut default_nes = Nes::new();
        default_nes.load_cartridge(&nrom_rom(vec![])).unwrap();
        assert!(!default_nes.bus.ppu.is_ready());
    }

    #[test]
    fn bad_magic_is_rejected_before_anything_is_wired_up() {
        let mut rom = nrom_rom(vec![]);
        rom[0] = b'X';
        let mut nes = Nes::new();
        assert!(nes.load_cartridge(&rom).is_err());
    }
}
