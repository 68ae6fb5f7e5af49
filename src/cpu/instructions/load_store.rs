// LDA/LDX/LDY/STA/STX/STY, plus the illegal LAX/SAX combined load-store ops.

use crate::bus::Bus;
use crate::cpu::{AddressingMode, Cpu};

impl Cpu {
    pub fn lda(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let value = self.operand(bus, mode);
        self.a = value;
        self.update_zero_and_negative_flags(value);
    }

    pub fn ldx(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let value = self.operand(bus, mode);
        self.x = value;
        self.update_zero_and_negative_flags(value);
    }

    pub fn ldy(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let value = self.operand(bus, mode);
        self.y = value;
        self.update_zero_and_negative_flags(value);
    }

    pub fn sta(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let addr = self.address_write(bus, mode);
        self.write(bus, addr, self.a);
    }

    pub fn stx(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let addr = self.address_write(bus, mode);
        self.write(bus, addr, self.x);
    }

    pub fn sty(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let addr = self.address_write(bus, mode);
        self.write(bus, addr, self.y);
    }

    /// LAX (illegal): load A and X from the same operand in one shot.
    pub fn lax(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let value = self.operand(bus, mode);
        self.a = value;
        self.x = value;
        self.update_zero_and_negative_flags(value);
    }

    /// SAX (illegal): store A & X, no flags touched.
    pub fn sax(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let addr = self.address_write(bus, mode);
        self.write(bus, addr, self.a & self.x);
    }
}
