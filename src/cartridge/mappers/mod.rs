// Mapper trait and factory - bank-switching logic lives per-mapper, behind a
// uniform read/write interface shared by the CPU and PPU buses.

mod mapper0;

use super::{Cartridge, Mirroring};
use std::error::Error;
use std::fmt;

/// Errors raised while constructing a mapper from a parsed cartridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapperError {
    /// No mapper implementation exists for this id.
    UnsupportedMapper(u8),
    /// The mapper id is recognized but the cartridge's layout violates an
    /// assumption the mapper makes (e.g. a PRG size it can't slot).
    InvalidConfiguration(String),
}

impl fmt::Display for MapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapperError::UnsupportedMapper(id) => write!(f, "unsupported mapper: {id}"),
            MapperError::InvalidConfiguration(msg) => write!(f, "invalid mapper configuration: {msg}"),
        }
    }
}

impl Error for MapperError {}

/// Bank-switching and address-translation behavior for a cartridge.
///
/// Every mapper translates CPU-space ($4020-$FFFF) and PPU-space
/// ($0000-$1FFF) addresses into offsets into the cartridge's PRG/CHR arrays.
/// Mappers that don't support writes to ROM-backed regions treat them as
/// no-ops (matches real hardware, which simply ignores such writes for
/// mappers with no registers to decode there) rather than erroring.
pub trait Mapper {
    fn cpu_read(&self, addr: u16) -> u8;
    fn cpu_write(&mut self, addr: u16, data: u8);
    fn ppu_read(&self, addr: u16) -> u8;
    fn ppu_write(&mut self, addr: u16, data: u8);
    fn mirroring(&self) -> Mirroring;
}

/// Build the mapper implementation matching a cartridge's declared mapper id.
pub fn create_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, MapperError> {
    match cartridge.mapper_id {
        0 => Ok(Box::new(mapper0::Mapper0::new(cartridge))),
        id => Err(MapperError::UnsupportedMapper(id)),
    }
}
