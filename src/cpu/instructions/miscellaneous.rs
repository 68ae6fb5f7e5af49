// NOP and its many illegal-opcode aliases. The undocumented forms differ
// only in which addressing mode's operand they read and discard; reading
// still has to happen so the cycle count and any page-cross penalty match
// real hardware.

use crate::bus::Bus;
use crate::cpu::{AddressingMode, Cpu};

impl Cpu {
    pub fn nop(&mut self, bus: &mut Bus) {
        self.tick(bus);
    }

    /// Illegal NOP variants that read an operand (SKB/DOP/TOP) and throw
    /// it away.
    pub fn nop_read(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let _ = self.operand(bus, mode);
    }

    /// JAM/KIL/HLT (illegal): the real 6502 locks the bus forever. We
    /// approximate the freeze by leaving the program counter pointed back
    /// at this opcode so every subsequent `step` re-executes it.
    pub fn jam(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.pc = self.pc.wrapping_sub(1);
    }
}
