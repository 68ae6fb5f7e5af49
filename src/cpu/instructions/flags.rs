// CLC/SEC/CLI/SEI/CLV/CLD/SED. Implied, 2 cycles each.

use crate::bus::Bus;
use crate::cpu::Cpu;

impl Cpu {
    pub fn clc(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.set_carry(false);
    }

    pub fn sec(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.set_carry(true);
    }

    pub fn cli(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.set_interrupt_disable(false);
    }

    pub fn sei(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.set_interrupt_disable(true);
    }

    pub fn clv(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.set_overflow(false);
    }

    pub fn cld(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.set_decimal(false);
    }

    pub fn sed(&mut self, bus: &mut Bus) {
        self.tick(bus);
        self.set_decimal(true);
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
    fn sec_and_clc_toggle_the_carry_flag() {
        let mut bus = fresh_bus();
        let mut cpu = Cpu::new();
        cpu.sec(&mut bus);
        assert!(cpu.get_carry());
        cpu.clc(&mut bus);
        assert!(!cpu.get_carry());
    }

    #[test]
    fn sei_and_cli_toggle_interrupt_disable() {
        let mut bus = fresh_bus();
        let mut cpu = Cpu::new();
        cpu.cli(&mut bus);
        assert!(!cpu.get_interrupt_disable());
        cpu.sei(&mut bus);
        assert!(cpu.get_interrupt_disable());
    }
}
