// Conditional branches. All relative, all read the offset unconditionally;
// the extra cycles only show up when the branch is actually taken.

use crate::bus::Bus;
use crate::cpu::Cpu;

impl Cpu {
    fn branch(&mut self, bus: &mut Bus, condition: bool) {
        let offset = self.fetch_byte(bus) as i8;
        if condition {
            self.tick(bus);
            let old_pc = self.pc;
            self.pc = self.pc.wrapping_add(offset as i16 as u16);
            if (old_pc & 0xFF00) != (self.pc & 0xFF00) {
                self.tick(bus);
            }
        }
    }

    pub fn bpl(&mut self, bus: &mut Bus) {
        let condition = !self.get_negative();
        self.branch(bus, condition);
    }

    pub fn bmi(&mut self, bus: &mut Bus) {
        let condition = self.get_negative();
        self.branch(bus, condition);
    }

    pub fn bvc(&mut self, bus: &mut Bus) {
        let condition = !self.get_overflow();
        self.branch(bus, condition);
    }

    pub fn bvs(&mut self, bus: &mut Bus) {
        let condition = self.get_overflow();
        self.branch(bus, condition);
    }

    pub fn bcc(&mut self, bus: &mut Bus) {
        let condition = !self.get_carry();
        self.branch(bus, condition);
    }

    pub fn bcs(&mut self, bus: &mut Bus) {
        let condition = self.get_carry();
        self.branch(bus, condition);
    }

    pub fn bne(&mut self, bus: &mut Bus) {
        let condition = !self.get_zero();
        self.branch(bus, condition);
    }

    pub fn beq(&mut self, bus: &mut Bus) {
        let condition = self.get_zero();
        self.branch(bus, condition);
    }
}
