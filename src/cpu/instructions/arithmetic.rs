// ADC/SBC and the increment/decrement family, plus the illegal ISC
// (INC-then-SBC) and AXS/SBX combined ops.

use crate::bus::Bus;
use crate::cpu::{AddressingMode, Cpu};

impl Cpu {
    pub(super) fn adc_value(&mut self, value: u8) {
        let carry_in = self.get_carry() as u16;
        let sum = self.a as u16 + value as u16 + carry_in;
        let result = sum as u8;
        self.set_carry(sum > 0xFF);
        let overflow = (!(self.a ^ value) & (self.a ^ result) & 0x80) != 0;
        self.set_overflow(overflow);
        self.a = result;
        self.update_zero_and_negative_flags(result);
    }

    /// SBC is ADC with the operand's bits flipped: the classic two's
    /// complement trick that also keeps carry/overflow semantics intact.
    pub(super) fn sbc_value(&mut self, value: u8) {
        self.adc_value(value ^ 0xFF);
    }

    pub fn adc(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let value = self.operand(bus, mode);
        self.adc_value(value);
    }

    pub fn sbc(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let value = self.operand(bus, mode);
        self.sbc_value(value);
    }

    pub fn inc(&mut self, bus: &mut Bus, mode: AddressingMode) {
        self.read_modify_write(bus, mode, |cpu, value| {
            let result = value.wrapping_add(1);
            cpu.update_zero_and_negative_flags(result);
            result
        });
    }

    pub fn dec(&mut self, bus: &mut Bus, mode: AddressingMode) {
        self.read_modify_write(bus, mode, |cpu, value| {
            let result = value.wrapping_sub(1);
            cpu.update_zero_and_negative_flags(result);
            result
        });
    }

    pub fn inx(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative_flags(self.x);
    }

    pub fn iny(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative_flags(self.y);
    }

    pub fn dex(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.x);
    }

    pub fn dey(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.y);
    }

    /// ISC (illegal): INC the operand, then SBC it from A.
    pub fn isc(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let result = self.read_modify_write(bus, mode, |_cpu, value| value.wrapping_add(1));
        self.sbc_value(result);
    }

    /// AXS/SBX (illegal): X = (A & X) - operand, no borrow-in, carry set
    /// when no borrow occurred.
    pub fn axs(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let value = self.operand(bus, mode);
        let base = self.a & self.x;
        let result = base.wrapping_sub(value);
        self.set_carry(base >= value);
        self.update_zero_and_negative_flags(result);
        self.x = result;
    }
}
