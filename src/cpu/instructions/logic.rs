// AND/ORA/EOR/BIT.

use crate::bus::Bus;
use crate::cpu::{AddressingMode, Cpu};

impl Cpu {
    pub fn and(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let value = self.operand(bus, mode);
        self.a &= value;
        self.update_zero_and_negative_flags(self.a);
    }

    pub fn ora(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let value = self.operand(bus, mode);
        self.a |= value;
        self.update_zero_and_negative_flags(self.a);
    }

    pub fn eor(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let value = self.operand(bus, mode);
        self.a ^= value;
        self.update_zero_and_negative_flags(self.a);
    }

    /// BIT sets Z from `A & value`, but N and V copy bits 7 and 6 of the
    /// operand directly, not of the masked result.
    pub fn bit(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let value = self.operand(bus, mode);
        self.set_zero((self.a & value) == 0);
        self.set_negative(value & 0x80 != 0);
        self.set_overflow(value & 0x40 != 0);
    }
}
