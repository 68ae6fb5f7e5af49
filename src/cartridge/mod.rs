// Cartridge module - iNES ROM loading and mapper dispatch
//
// A cartridge owns the raw PRG/CHR byte arrays extracted from an iNES file plus
// the header-derived configuration (mirroring, mapper id, RAM sizes). Loading
// never fails partway through: `Cartridge::load` either returns a fully formed
// cartridge or a `CartridgeError` describing why it couldn't.

pub mod mappers;

pub use mappers::{create_mapper, Mapper, MapperError};

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// 16 KiB units PRG-ROM is measured in.
pub const PRG_ROM_UNIT_SIZE: usize = 0x4000;
/// 8 KiB units CHR-ROM/RAM is measured in.
pub const CHR_ROM_UNIT_SIZE: usize = 0x2000;
/// 8 KiB units PRG-RAM is measured in.
pub const PRG_RAM_UNIT_SIZE: usize = 0x2000;
/// Size of the iNES header.
pub const HEADER_SIZE: usize = 16;

/// Nametable mirroring mode, derived from the cartridge header (or four-screen
/// VRAM, or overridden by a mapper that controls mirroring dynamically).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    SingleScreen,
    FourScreen,
}

/// Errors that can occur while loading an iNES file.
///
/// These are the only failure modes in the whole core: once a cartridge is
/// loaded, the step loop cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartridgeError {
    /// The ROM file could not be found or read.
    NotFound,
    /// The header is malformed in a way that can't be worked around (bad magic
    /// is reported as `Unsupported`; this is for internally-inconsistent data
    /// such as a declared PRG size of zero).
    Invalid(String),
    /// The cartridge is well-formed but uses a feature this core doesn't
    /// implement: bad magic, a trainer, PAL timing, or an unknown mapper.
    Unsupported(String),
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartridgeError::NotFound => write!(f, "ROM file not found"),
            CartridgeError::Invalid(msg) => write!(f, "invalid ROM: {msg}"),
            CartridgeError::Unsupported(msg) => write!(f, "unsupported ROM: {msg}"),
        }
    }
}

impl Error for CartridgeError {}

impl From<MapperError> for CartridgeError {
    fn from(err: MapperError) -> Self {
        CartridgeError::Unsupported(err.to_string())
    }
}

/// A loaded iNES cartridge: raw PRG/CHR storage plus header-derived config.
///
/// `Cartridge` itself does no address translation — that's the mapper's job.
/// It exists as the intermediate value produced by parsing the file and
/// consumed by [`create_mapper`].
#[derive(Debug, Clone)]
pub struct Cartridge {
    /// Program ROM, N * 16 KiB.
    pub prg_rom: Vec<u8>,
    /// Character ROM or RAM, M * 8 KiB (M=0 in the header means 8 KiB of CHR RAM).
    pub chr_rom: Vec<u8>,
    /// True if `chr_rom` is writable (CHR RAM rather than CHR ROM).
    pub chr_is_ram: bool,
    /// Optional PRG RAM at $6000-$7FFF, sized in 8 KiB units from flags 8.
    pub prg_ram: Option<Vec<u8>>,
    /// Nametable mirroring from flags 6 bit 0 (ignored by four-screen carts).
    pub mirroring: Mirroring,
    /// Mapper id: (flags6 >> 4) | (flags7 & 0xF0).
    pub mapper_id: u8,
    /// Flags 6 bit 1.
    pub has_battery: bool,
    /// Number of 16 KiB PRG units (kept for mapper slot-table construction).
    pub prg_units: u8,
}

impl Cartridge {
    /// Parse an iNES file's raw bytes into a `Cartridge`.
    ///
    /// Validates the magic number, header-declared sizes, and the
    /// unsupported-feature bits (trainer, PAL) per the iNES 1.0 layout.
    pub fn load(rom_data: &[u8]) -> Result<Cartridge, CartridgeError> {
        if rom_data.len() < HEADER_SIZE {
            return Err(CartridgeError::Invalid("file smaller than iNES header".into()));
        }
        if &rom_data[0..4] != b"NES\x1A" {
            return Err(CartridgeError::Unsupported("bad iNES magic".into()));
        }

        let prg_units = rom_data[4];
        if prg_units == 0 {
            return Err(CartridgeError::Invalid("PRG-ROM size is zero".into()));
        }
        let chr_units_raw = rom_data[5];
        let (chr_units, chr_is_ram) = if chr_units_raw == 0 {
            (1u8, true)
        } else {
            (chr_units_raw, false)
        };

        let flags6 = rom_data[6];
        let flags7 = rom_data.get(7).copied().unwrap_or(0);
        let has_prg_ram = flags6 & 0x02 != 0;
        let has_trainer = flags6 & 0x04 != 0;
        if has_trainer {
            return Err(CartridgeError::Unsupported("512-byte trainer present".into()));
        }
        let four_screen = flags6 & 0x08 != 0;
        let mirroring = if four_screen {
            Mirroring::FourScreen
        } else if flags6 & 0x01 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };
        let has_battery = flags6 & 0x02 != 0;
        let mapper_id = (flags6 >> 4) | (flags7 & 0xF0);

        let prg_ram_units = rom_data.get(8).copied().unwrap_or(0);
        let prg_ram_units = if prg_ram_units == 0 { 1 } else { prg_ram_units };

        if let Some(&flags9) = rom_data.get(9) {
            if flags9 != 0 {
                return Err(CartridgeError::Unsupported("PAL timing not supported".into()));
            }
        }

        let prg_size = prg_units as usize * PRG_ROM_UNIT_SIZE;
        let chr_size = chr_units as usize * CHR_ROM_UNIT_SIZE;

        let prg_start = HEADER_SIZE;
        let prg_end = prg_start + prg_size;
        if rom_data.len() < prg_end {
            return Err(CartridgeError::Invalid("file too short for declared PRG size".into()));
        }
        let prg_rom = rom_data[prg_start..prg_end].to_vec();

        let chr_rom = if chr_is_ram {
            vec![0u8; chr_size]
        } else {
            let chr_start = prg_end;
            let chr_end = chr_start + chr_size;
            if rom_data.len() < chr_end {
                return Err(CartridgeError::Invalid("file too short for declared CHR size".into()));
            }
            rom_data[chr_start..chr_end].to_vec()
        };

        let prg_ram = if has_prg_ram {
            Some(vec![0u8; prg_ram_units as usize * PRG_RAM_UNIT_SIZE])
        } else {
            None
        };

        Ok(Cartridge {
            prg_rom,
            chr_rom,
            chr_is_ram,
            prg_ram,
            mirroring,
            mapper_id,
            has_battery,
            prg_units,
        })
    }

    /// Read an iNES file from disk and parse it.
    ///
    /// Routes a missing file through `CartridgeError::NotFound` instead of
    /// the raw `io::Error` a plain `fs::read` would surface, so callers get
    /// the same error taxonomy whether the ROM failed to load because it's
    /// missing or because it's malformed.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Cartridge, CartridgeError> {
        let rom_data = fs::read(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => CartridgeError::NotFound,
            _ => CartridgeError::Invalid(err.to_string()),
        })?;
        Cartridge::load(&rom_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(prg: u8, chr: u8, flags6: u8, flags7: u8) -> Vec<u8> {
        let mut h = vec![0u8; HEADER_SIZE];
        h[0..4].copy_from_slice(b"NES\x1A");
        h[4] = prg;
        h[5] = chr;
        h[6] = flags6;
        h[7] = flags7;
        h
    }

    #[test]
    fn rejects_bad_magic() {
        let mut data = header(1, 1, 0, 0);
        data[0] = b'X';
        data.extend(vec![0u8; 0x4000 + 0x2000]);
        assert_eq!(
            Cartridge::load(&data),
            Err(CartridgeError::Unsupported("bad iNES magic".into()))
        );
    }

    #[test]
    fn rejects_zero_prg_size() {
        let mut data = header(0, 1, 0, 0);
        data.extend(vec![0u8; 0x2000]);
        assert!(matches!(Cartridge::load(&data), Err(CartridgeError::Invalid(_))));
    }

    #[test]
    fn rejects_trainer() {
        let mut data = header(1, 1, 0x04, 0);
        data.extend(vec![0u8; 0x4000 + 0x2000]);
        assert!(matches!(Cartridge::load(&data), Err(CartridgeError::Unsupported(_))));
    }

    #[test]
    fn loads_nrom_with_chr_ram() {
        let mut data = header(1, 0, 0, 0);
        data.extend(vec![0xAB; 0x4000]);
        let cart = Cartridge::load(&data).unwrap();
        assert_eq!(cart.prg_rom.len(), 0x4000);
        assert!(cart.chr_is_ram);
        assert_eq!(cart.chr_rom.len(), CHR_ROM_UNIT_SIZE);
        assert_eq!(cart.mirroring, Mirroring::Horizontal);
        assert_eq!(cart.mapper_id, 0);
    }

    #[test]
    fn vertical_mirroring_bit() {
        let mut data = header(1, 1, 0x01, 0);
        data.extend(vec![0u8; 0x4000 + 0x2000]);
        let cart = Cartridge::load(&data).unwrap();
        assert_eq!(cart.mirroring, Mirroring::Vertical);
    }

    #[test]
    fn mapper_id_from_both_nibbles() {
        let mut data = header(1, 1, 0x10, 0x20);
        data.extend(vec![0u8; 0x4000 + 0x2000]);
        let cart = Cartridge::load(&data).unwrap();
        assert_eq!(cart.mapper_id, 0x21);
    }

    #[test]
    fn load_file_maps_missing_file_to_not_found() {
        let err = Cartridge::load_file("does/not/exist.nes").unwrap_err();
        assert_eq!(err, CartridgeError::NotFound);
    }
}
