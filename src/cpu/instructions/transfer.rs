// Register-to-register transfers. All implied, all 2 cycles: the opcode
// fetch plus one internal cycle.

use crate::bus::Bus;
use crate::cpu::Cpu;

impl Cpu {
    pub fn tax(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.x = self.a;
        self.update_zero_and_negative_flags(self.x);
    }

    pub fn tay(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.y = self.a;
        self.update_zero_and_negative_flags(self.y);
    }

    pub fn txa(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.a = self.x;
        self.update_zero_and_negative_flags(self.a);
    }

    pub fn tya(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.a = self.y;
        self.update_zero_and_negative_flags(self.a);
    }

    pub fn tsx(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.x = self.sp;
        self.update_zero_and_negative_flags(self.x);
    }

    /// TXS does not touch any flags, unlike every other transfer.
    pub fn txs(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.sp = self.x;
    }
}
