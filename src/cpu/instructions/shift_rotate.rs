// ASL/LSR/ROL/ROR, plus the illegal shift-then-ALU combinations SLO, RLA,
// SRE, RRA. All go through `Cpu::read_modify_write` for their timing.

use crate::bus::Bus;
use crate::cpu::{AddressingMode, Cpu};

fn asl_op(cpu: &mut Cpu, value: u8) -> u8 {
    let result = value << 1;
    cpu.set_carry(value & 0x80 != 0);
    cpu.update_zero_and_negative_flags(result);
    result
}

fn lsr_op(cpu: &mut Cpu, value: u8) -> u8 {
    let result = value >> 1;
    cpu.set_carry(value & 0x01 != 0);
    cpu.update_zero_and_negative_flags(result);
    result
}

fn rol_op(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = cpu.get_carry() as u8;
    let result = (value << 1) | carry_in;
    cpu.set_carry(value & 0x80 != 0);
    cpu.update_zero_and_negative_flags(result);
    result
}

fn ror_op(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = cpu.get_carry() as u8;
    let result = (value >> 1) | (carry_in << 7);
    cpu.set_carry(value & 0x01 != 0);
    cpu.update_zero_and_negative_flags(result);
    result
}

impl Cpu {
    pub fn asl(&mut self, bus: &mut Bus, mode: AddressingMode) {
        self.read_modify_write(bus, mode, asl_op);
    }

    pub fn lsr(&mut self, bus: &mut Bus, mode: AddressingMode) {
        self.read_modify_write(bus, mode, lsr_op);
    }

    pub fn rol(&mut self, bus: &mut Bus, mode: AddressingMode) {
        self.read_modify_write(bus, mode, rol_op);
    }

    pub fn ror(&mut self, bus: &mut Bus, mode: AddressingMode) {
        self.read_modify_write(bus, mode, ror_op);
    }

    /// SLO (illegal): ASL the operand, then OR it into A.
    pub fn slo(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let result = self.read_modify_write(bus, mode, asl_op);
        self.a |= result;
        self.update_zero_and_negative_flags(self.a);
    }

    /// RLA (illegal): ROL the operand, then AND it into A.
    pub fn rla(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let result = self.read_modify_write(bus, mode, rol_op);
        self.a &= result;
        self.update_zero_and_negative_flags(self.a);
    }

    /// SRE (illegal): LSR the operand, then EOR it into A.
    pub fn sre(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let result = self.read_modify_write(bus, mode, lsr_op);
        self.a ^= result;
        self.update_zero_and_negative_flags(self.a);
    }

    /// RRA (illegal): ROR the operand, then ADC it into A.
    pub fn rra(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let result = self.read_modify_write(bus, mode, ror_op);
        self.adc_value(result);
    }
}
