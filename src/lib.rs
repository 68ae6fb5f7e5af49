// NES Emulator Library
// Core library for the NES emulator implementation

// Public modules
pub mod bus;
pub mod cartridge;
pub mod config;
pub mod cpu;
pub mod debug;
pub mod nes;
pub mod ppu;
pub mod ram;

// Re-export main types for convenience
pub use bus::{Bus, MemoryMappedDevice};
pub use cartridge::{Cartridge, CartridgeError, Mapper, MapperError, Mirroring};
pub use config::NesConfig;
pub use cpu::Cpu;
pub use debug::{CpuTrace, LogLevel, Logger, TraceEntry};
pub use nes::Nes;
pub use ppu::Ppu;
pub use ram::Ram;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        // Test that all components can be instantiated
        let _cpu = Cpu::new();
        let _ppu = Ppu::new();
        let _bus = Bus::new();
        let _ram = Ram::new();
        let _nes = Nes::new();
        let _config = NesConfig::default();
    }
}
