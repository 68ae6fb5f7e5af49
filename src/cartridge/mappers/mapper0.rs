// Mapper 0 (NROM) - no bank switching. PRG is either 16 KiB (mirrored into
// both $8000-$BFFF and $C000-$FFFF) or 32 KiB (mapped straight through).
// CHR is a single fixed 8 KiB bank, ROM or RAM.

use super::{Cartridge, Mapper, Mirroring};

const PRG_SLOT_SIZE: usize = 0x2000;
const CHR_SLOT_SIZE: usize = 0x0400;
const PRG_DATA_UNIT_SIZE: usize = 0x4000;

pub struct Mapper0 {
    prg_rom: Vec<u8>,
    chr_rom: Vec<u8>,
    chr_is_ram: bool,
    prg_ram: Option<Vec<u8>>,
    mirroring: Mirroring,
    /// Precomputed offsets into `prg_rom` for each of the four 8 KiB CPU slots.
    prg_map: [usize; 4],
    /// Precomputed offsets into `chr_rom` for each of the eight 1 KiB PPU slots.
    chr_map: [usize; 8],
}

impl Mapper0 {
    pub fn new(cartridge: Cartridge) -> Self {
        let prg_units = cartridge.prg_units as usize;
        let prg_total = prg_units * PRG_DATA_UNIT_SIZE;

        let mut prg_map = [0usize; 4];
        for (i, slot) in prg_map.iter_mut().enumerate() {
            *slot = (PRG_SLOT_SIZE * i) % prg_total;
        }

        let mut chr_map = [0usize; 8];
        for (i, slot) in chr_map.iter_mut().enumerate() {
            *slot = CHR_SLOT_SIZE * i;
        }

        Mapper0 {
            prg_rom: cartridge.prg_rom,
            chr_rom: cartridge.chr_rom,
            chr_is_ram: cartridge.chr_is_ram,
            prg_ram: cartridge.prg_ram,
            mirroring: cartridge.mirroring,
            prg_map,
            chr_map,
        }
    }
}

impl Mapper for Mapper0 {
    fn cpu_read(&self, addr: u16) -> u8 {
        match addr {
            0x6000..=0x7FFF => self
                .prg_ram
                .as_ref()
                .map(|ram| ram[(addr - 0x6000) as usize % ram.len()])
                .unwrap_or(0),
            0x8000..=0xFFFF => {
                let slot = ((addr - 0x8000) / PRG_SLOT_SIZE as u16) as usize;
                let offset = (addr - 0x8000) as usize % PRG_SLOT_SIZE;
                self.prg_rom[self.prg_map[slot] + offset]
            }
            _ => 0,
        }
    }

    fn cpu_write(&mut self, addr: u16, data: u8) {
        if let 0x6000..=0x7FFF = addr {
            if let Some(ram) = self.prg_ram.as_mut() {
                let len = ram.len();
                ram[(addr - 0x6000) as usize % len] = data;
            }
        }
        // Writes to $8000-$FFFF have no register to decode on NROM; ignored.
    }

    fn ppu_read(&self, addr: u16) -> u8 {
        if addr >= 0x2000 {
            return 0;
        }
        let slot = (addr / CHR_SLOT_SIZE as u16) as usize;
        let offset = addr as usize % CHR_SLOT_SIZE;
        self.chr_rom[self.chr_map[slot] + offset]
    }

    fn ppu_write(&mut self, addr: u16, data: u8) {
        if !self.chr_is_ram || addr >= 0x2000 {
            return;
        }
        let slot = (addr / CHR_SLOT_SIZE as u16) as usize;
        let offset = addr as usize % CHR_SLOT_SIZE;
        let idx = self.chr_map[slot] + offset;
        self.chr_rom[idx] = data;
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}
