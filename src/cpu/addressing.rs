// Addressing modes.
//
// Each mode resolves to an effective address; the instruction itself does
// the actual bus read or write. Indexed modes come in two cycle-timing
// flavors matching real 6502 behavior: the `_read` path only pays for a
// page crossing (`AbsoluteX`/`AbsoluteY`/`IndirectIndexed` used by LDA-style
// instructions), the `_write` path always pays for it (used by STA and every
// read-modify-write instruction, since the CPU can't know in advance
// whether the unmodified read will be discarded).

use super::Cpu;
use crate::bus::Bus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndexedIndirect, // (Indirect,X)
    IndirectIndexed, // (Indirect),Y
    Relative,
}

impl Cpu {
    /// Resolve an address for a read-only instruction (LDA, ADC, CMP, ...).
    /// Indexed modes only pay the page-cross tick when one actually occurs.
    pub(super) fn address_read(&mut self, bus: &mut Bus, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                addr
            }
            AddressingMode::ZeroPage => self.fetch_byte(bus) as u16,
            AddressingMode::ZeroPageX => self.zero_page_indexed(bus, self.x),
            AddressingMode::ZeroPageY => self.zero_page_indexed(bus, self.y),
            AddressingMode::Absolute => self.absolute(bus),
            AddressingMode::AbsoluteX => self.absolute_indexed(bus, self.x, false),
            AddressingMode::AbsoluteY => self.absolute_indexed(bus, self.y, false),
            AddressingMode::IndexedIndirect => self.indexed_indirect(bus),
            AddressingMode::IndirectIndexed => self.indirect_indexed(bus, false),
            _ => unreachable!("mode {:?} has no bus address", mode),
        }
    }

    /// Resolve an address for a write or read-modify-write instruction
    /// (STA, INC, ASL mem, ...). Indexed modes always pay the page-cross
    /// tick, matching the dummy read real hardware performs either way.
    pub(super) fn address_write(&mut self, bus: &mut Bus, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::ZeroPage => self.fetch_byte(bus) as u16,
            AddressingMode::ZeroPageX => self.zero_page_indexed(bus, self.x),
            AddressingMode::ZeroPageY => self.zero_page_indexed(bus, self.y),
            AddressingMode::Absolute => self.absolute(bus),
            AddressingMode::AbsoluteX => self.absolute_indexed(bus, self.x, true),
            AddressingMode::AbsoluteY => self.absolute_indexed(bus, self.y, true),
            AddressingMode::IndexedIndirect => self.indexed_indirect(bus),
            AddressingMode::IndirectIndexed => self.indirect_indexed(bus, true),
            _ => unreachable!("mode {:?} has no bus address", mode),
        }
    }

    /// Read the operand for a read-only instruction in one call.
    pub(super) fn operand(&mut self, bus: &mut Bus, mode: AddressingMode) -> u8 {
        let addr = self.address_read(bus, mode);
        self.read(bus, addr)
    }

    fn zero_page_indexed(&mut self, bus: &mut Bus, index: u8) -> u16 {
        let base = self.fetch_byte(bus) as u16;
        self.tick(bus); // dummy read of the unindexed address
        (base + index as u16) & 0x00FF
    }

    fn absolute(&mut self, bus: &mut Bus) -> u16 {
        let lo = self.fetch_byte(bus) as u16;
        let hi = self.fetch_byte(bus) as u16;
        (hi << 8) | lo
    }

    fn absolute_indexed(&mut self, bus: &mut Bus, index: u8, always_extra_tick: bool) -> u16 {
        let lo = self.fetch_byte(bus) as u16;
        let hi = self.fetch_byte(bus) as u16;
        let base = (hi << 8) | lo;
        let addr = base.wrapping_add(index as u16);
        let page_crossed = (addr & 0xFF00) != (base & 0xFF00);
        if always_extra_tick || page_crossed {
            self.tick(bus);
        }
        addr
    }

    fn indexed_indirect(&mut self, bus: &mut Bus) -> u16 {
        let zp = self.fetch_byte(bus) as u16;
        self.tick(bus); // dummy read before adding X
        let ptr = (zp + self.x as u16) & 0x00FF;
        let lo = self.read(bus, ptr) as u16;
        let hi = self.read(bus, (ptr + 1) & 0x00FF) as u16;
        (hi << 8) | lo
    }

    fn indirect_indexed(&mut self, bus: &mut Bus, always_extra_tick: bool) -> u16 {
        let zp = self.fetch_byte(bus) as u16;
        let lo = self.read(bus, zp) as u16;
        let hi = self.read(bus, (zp + 1) & 0x00FF) as u16;
        let base = (hi << 8) | lo;
        let addr = base.wrapping_add(self.y as u16);
        let page_crossed = (addr & 0xFF00) != (base & 0xFF00);
        if always_extra_tick || page_crossed {
            self.tick(bus);
        }
        addr
    }

    /// JMP (Indirect) only. Reproduces the page-wrap hardware bug: if the
    /// pointer sits at the end of a page, the high byte is fetched from the
    /// start of the *same* page instead of crossing into the next one.
    pub(super) fn indirect(&mut self, bus: &mut Bus) -> u16 {
        let ptr = self.absolute(bus);
        let lo = self.read(bus, ptr) as u16;
        let hi_addr = (ptr & 0xFF00) | ((ptr.wrapping_add(1)) & 0x00FF);
        let hi = self.read(bus, hi_addr) as u16;
        (hi << 8) | lo
    }
}
