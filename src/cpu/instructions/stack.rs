// PHA/PLA/PHP/PLP.

use crate::bus::Bus;
use crate::cpu::{flags, Cpu};

impl Cpu {
    pub fn pha(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.push(bus, self.a);
    }

    pub fn pla(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.tick(bus);
        let value = self.pull(bus);
        self.a = value;
        self.update_zero_and_negative_flags(value);
    }

    /// PHP always pushes with both B and the unused bit set, regardless of
    /// the CPU's actual status register.
    pub fn php(&mut self, bus: &mut Bus) {
        self.tick(bus);
        let pushed = self.status | flags::BREAK | flags::UNUSED;
        self.push(bus, pushed);
    }

    /// PLP restores every flag except B, which is never a real CPU state
    /// bit; the unused bit is forced back to 1.
    pub fn plp(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.tick(bus);
        let value = self.pull(bus);
        self.status = (value & !flags::BREAK) | flags::UNUSED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::{create_mapper, Cartridge};

    fn fresh_bus() -> Bus {
        let mut data = vec![0u8; 16];
        data[0..4].copy_from_slice(b"NES\x1A");
        data[4] = 1;
        data[5] = 1;
        data.extend(vec![0xEAu8; 0x4000]);
        data.extend(vec![0u8; 0x2000]);
        let cartridge = Cartridge::load(&data).unwrap();
        let mapper = create_mapper(cartridge).unwrap();
        let mut bus = Bus::new();
        bus.load_mapper(mapper);
        bus
    }

    #[test]
    fn pha_pla_round_trips_the_accumulator() {
        let mut bus = fresh_bus();
        let mut cpu = Cpu::new();
        cpu.sp = 0xFD;
        cpu.a = 0x5A;
        cpu.pha(&mut bus);
        cpu.a = 0x00;
        cpu.pla(&mut bus);
        assert_eq!(cpu.a, 0x5A);
    }

    #[test]
    fn php_forces_break_and_unused_bits() {
        let mut bus = fresh_bus();
        let mut cpu = Cpu::new();
        cpu.sp = 0xFD;
        cpu.status = 0x00;
        cpu.php(&mut bus);
        let pushed = bus.read(0x01FD);
        assert_eq!(pushed, flags::BREAK | flags::UNUSED);
    }

    #[test]
    fn plp_never_sets_the_live_break_bit() {
        let mut bus = fresh_bus();
        let mut cpu = Cpu::new();
        cpu.sp = 0xFC;
        bus.write(0x01FD, 0xFF);
        cpu.plp(&mut bus);
        assert_eq!(cpu.status & flags::BREAK, 0);
        assert_ne!(cpu.status & flags::UNUSED, 0);
    }
}
