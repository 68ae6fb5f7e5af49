// CPU module - MOS 6502 processor, cycle-accurate.
//
// The CPU never talks to the PPU or the rest of the console directly; every
// memory access goes through `Bus`, and every access ticks the bus exactly
// once so the PPU advances in lockstep with CPU cycles. This is what makes
// sprite-0 hits, VBlank timing and the rest of the NES's famous cycle races
// reproducible.

pub mod addressing;
pub mod execute;
pub mod instructions;
pub mod opcodes;

use crate::bus::Bus;
use crate::debug::CpuTrace;

pub use addressing::AddressingMode;

/// Processor Status Flags (P register)
///
/// ```text
/// 7  6  5  4  3  2  1  0
/// N  V  -  B  D  I  Z  C
/// ```
pub mod flags {
    pub const CARRY: u8 = 0b0000_0001;
    pub const ZERO: u8 = 0b0000_0010;
    pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;
    pub const DECIMAL: u8 = 0b0000_1000; // unused on the NES's 6502 variant
    pub const BREAK: u8 = 0b0001_0000;
    pub const UNUSED: u8 = 0b0010_0000; // always 1 when pushed
    pub const OVERFLOW: u8 = 0b0100_0000;
    pub const NEGATIVE: u8 = 0b1000_0000;
}

/// Interrupt vector addresses, fixed by the 6502.
pub mod vectors {
    pub const NMI: u16 = 0xFFFA;
    pub const RESET: u16 = 0xFFFC;
    pub const IRQ: u16 = 0xFFFE;
}

/// The 6502 processor core.
pub struct Cpu {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
    pub cycles: u64,

    /// Edge-triggered NMI latch: set when the PPU's NMI line rises, cleared
    /// once the interrupt has been serviced.
    nmi_latch: bool,
    /// Level-triggered IRQ line, raised/lowered by cartridge hardware
    /// (mapper IRQ counters). No mapper currently asserts it, but `step`
    /// honors it the moment one does.
    irq_line: bool,
    /// Previous cycle's NMI line state, for edge detection.
    prev_nmi_line: bool,
}

impl Cpu {
    /// Power-on state. `reset()` should be called once a bus/cartridge is
    /// attached to load the real PC from the reset vector.
    pub fn new() -> Self {
        let mut cpu = Cpu {
            a: 0,
            x: 0,
            y: 0,
            sp: 0x00,
            pc: 0,
            status: 0,
            cycles: 0,
            nmi_latch: false,
            irq_line: false,
            prev_nmi_line: false,
        };
        cpu.set_flag(flags::UNUSED);
        cpu.set_flag(flags::INTERRUPT_DISABLE);
        cpu
    }

    /// Simulate the RESET line: 7 cycles, three of them "pushes" that tick
    /// but never write, just decrement the stack pointer, then the PC is
    /// loaded from $FFFC/$FFFD.
    pub fn reset(&mut self, bus: &mut Bus) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.status = 0;
        self.set_flag(flags::UNUSED);
        self.set_interrupt_disable(true);
        self.nmi_latch = false;
        self.irq_line = false;
        self.prev_nmi_line = false;

        for _ in 0..5 {
            self.tick(bus);
        }
        self.sp = self.sp.wrapping_sub(3);

        let lo = self.read(bus, vectors::RESET) as u16;
        let hi = self.read(bus, vectors::RESET.wrapping_add(1)) as u16;
        self.pc = (hi << 8) | lo;
    }

    /// Raise the NMI line. Called by whoever drives the bus once the PPU
    /// reports it wants one; normally this happens automatically inside
    /// `tick` as the PPU is stepped alongside the CPU.
    pub fn request_nmi(&mut self) {
        self.nmi_latch = true;
    }

    /// Set the IRQ line level. Mappers with IRQ counters (not modelled by
    /// the NROM mapper currently supported) would call this.
    pub fn set_irq_line(&mut self, asserted: bool) {
        self.irq_line = asserted;
    }

    /// Run either one pending interrupt or one instruction.
    pub fn step(&mut self, bus: &mut Bus) {
        if self.nmi_latch {
            self.nmi_latch = false;
            self.service_interrupt(bus, vectors::NMI, false);
            return;
        }
        if self.irq_line && !self.get_interrupt_disable() {
            self.service_interrupt(bus, vectors::IRQ, false);
            return;
        }
        let opcode = self.fetch_byte(bus);
        self.execute_instruction(bus, opcode);
    }

    /// Capture a trace line's worth of state, taken before the next opcode
    /// fetch (matches nestest.log's convention).
    pub fn trace(&self) -> CpuTrace {
        CpuTrace {
            pc: self.pc,
            a: self.a,
            x: self.x,
            y: self.y,
            p: self.status,
            sp: self.sp,
            cycles: self.cycles,
        }
    }

    // ========================================
    // Ticking and bus access
    // ========================================

    /// Advance one CPU cycle: bump the counter and step the PPU three dots,
    /// latching NMI on the rising edge of its request line.
    fn tick(&mut self, bus: &mut Bus) {
        self.cycles = self.cycles.wrapping_add(1);
        let nmi_line = bus.tick_ppu();
        if nmi_line && !self.prev_nmi_line {
            self.nmi_latch = true;
        }
        self.prev_nmi_line = nmi_line;
    }

    fn read(&mut self, bus: &mut Bus, addr: u16) -> u8 {
        let value = bus.read(addr);
        self.tick(bus);
        value
    }

    fn write(&mut self, bus: &mut Bus, addr: u16, data: u8) {
        bus.write(addr, data);
        self.tick(bus);
        if addr == 0x4014 {
            self.stall_for_oam_dma(bus);
        }
    }

    /// $4014 freezes the CPU for 513 or 514 cycles while the bus performs
    /// the 256-byte OAM copy (which already happened synchronously inside
    /// `Bus::write`); the extra cycle shows up when DMA starts on an odd
    /// CPU cycle.
    fn stall_for_oam_dma(&mut self, bus: &mut Bus) {
        let extra = if self.cycles % 2 == 1 { 514 } else { 513 };
        for _ in 0..extra {
            self.tick(bus);
        }
    }

    fn fetch_byte(&mut self, bus: &mut Bus) -> u8 {
        let value = self.read(bus, self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn push(&mut self, bus: &mut Bus, data: u8) {
        self.write(bus, 0x0100 | self.sp as u16, data);
        self.sp = self.sp.wrapping_sub(1);
    }

    fn pull(&mut self, bus: &mut Bus) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read(bus, 0x0100 | self.sp as u16)
    }

    fn push_u16(&mut self, bus: &mut Bus, value: u16) {
        self.push(bus, (value >> 8) as u8);
        self.push(bus, value as u8);
    }

    fn pull_u16(&mut self, bus: &mut Bus) -> u16 {
        let lo = self.pull(bus) as u16;
        let hi = self.pull(bus) as u16;
        (hi << 8) | lo
    }

    /// Shared read-modify-write shape used by INC/DEC/ASL/LSR/ROL/ROR and
    /// their illegal-opcode combinations (SLO/RLA/SRE/RRA/DCP/ISC): read the
    /// old value, write it back unchanged (the hardware always does this),
    /// then write the transformed value. Accumulator-mode variants skip the
    /// bus entirely and spend a single internal cycle instead.
    pub(crate) fn read_modify_write(
        &mut self,
        bus: &mut Bus,
        mode: AddressingMode,
        op: impl FnOnce(&mut Cpu, u8) -> u8,
    ) -> u8 {
        if mode == AddressingMode::Accumulator {
            self.tick(bus);
            let value = self.a;
            let result = op(self, value);
            self.a = result;
            return result;
        }
        let addr = self.address_write(bus, mode);
        let value = self.read(bus, addr);
        self.write(bus, addr, value);
        let result = op(self, value);
        self.write(bus, addr, result);
        result
    }

    /// Shared shape for NMI, IRQ and BRK: two setup cycles (idle for
    /// NMI/IRQ, a phantom operand fetch that bumps PC for BRK), push
    /// PC and status, set I, then load PC from `vector`.
    pub(crate) fn service_interrupt(&mut self, bus: &mut Bus, vector: u16, brk: bool) {
        if brk {
            self.pc = self.pc.wrapping_add(1);
            self.tick(bus);
        } else {
            self.tick(bus);
            self.tick(bus);
        }
        self.push_u16(bus, self.pc);
        let pushed = if brk {
            self.status | flags::BREAK | flags::UNUSED
        } else {
            (self.status & !flags::BREAK) | flags::UNUSED
        };
        self.push(bus, pushed);
        self.set_interrupt_disable(true);
        let lo = self.read(bus, vector) as u16;
        let hi = self.read(bus, vector.wrapping_add(1)) as u16;
        self.pc = (hi << 8) | lo;
    }

    // ========================================
    // Status flag manipulation
    // ========================================

    #[inline]
    pub fn get_flag(&self, flag: u8) -> bool {
        (self.status & flag) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: u8) {
        self.status |= flag;
    }

    #[inline]
    pub fn clear_flag(&mut self, flag: u8) {
        self.status &= !flag;
    }

    #[inline]
    pub fn update_flag(&mut self, flag: u8, condition: bool) {
        if condition {
            self.set_flag(flag);
        } else {
            self.clear_flag(flag);
        }
    }

    #[inline]
    pub fn get_carry(&self) -> bool {
        self.get_flag(flags::CARRY)
    }
    #[inline]
    pub fn get_zero(&self) -> bool {
        self.get_flag(flags::ZERO)
    }
    #[inline]
    pub fn get_interrupt_disable(&self) -> bool {
        self.get_flag(flags::INTERRUPT_DISABLE)
    }
    #[inline]
    pub fn get_overflow(&self) -> bool {
        self.get_flag(flags::OVERFLOW)
    }
    #[inline]
    pub fn get_negative(&self) -> bool {
        self.get_flag(flags::NEGATIVE)
    }

    #[inline]
    pub fn set_carry(&mut self, value: bool) {
        self.update_flag(flags::CARRY, value);
    }
    #[inline]
    pub fn set_zero(&mut self, value: bool) {
        self.update_flag(flags::ZERO, value);
    }
    #[inline]
    pub fn set_interrupt_disable(&mut self, value: bool) {
        self.update_flag(flags::INTERRUPT_DISABLE, value);
    }
    #[inline]
    pub fn set_decimal(&mut self, value: bool) {
        self.update_flag(flags::DECIMAL, value);
    }
    #[inline]
    pub fn set_overflow(&mut self, value: bool) {
        self.update_flag(flags::OVERFLOW, value);
    }
    #[inline]
    pub fn set_negative(&mut self, value: bool) {
        self.update_flag(flags::NEGATIVE, value);
    }

    /// Z and N are set from the result on nearly every load/arithmetic op.
    #[inline]
    pub fn update_zero_and_negative_flags(&mut self, value: u8) {
        self.set_zero(value == 0);
        self.set_negative(value & 0x80 != 0);
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
