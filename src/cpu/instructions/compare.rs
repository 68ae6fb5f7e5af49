// CMP/CPX/CPY, plus the illegal DCP (decrement-then-compare).

use crate::bus::Bus;
use crate::cpu::{AddressingMode, Cpu};

impl Cpu {
    fn compare(&mut self, register: u8, value: u8) {
        let result = register.wrapping_sub(value);
        self.set_carry(register >= value);
        self.update_zero_and_negative_flags(result);
    }

    pub fn cmp(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let value = self.operand(bus, mode);
        self.compare(self.a, value);
    }

    pub fn cpx(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let value = self.operand(bus, mode);
        self.compare(self.x, value);
    }

    pub fn cpy(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let value = self.operand(bus, mode);
        self.compare(self.y, value);
    }

    /// DCP (illegal): DEC the memory operand, then CMP against A. Favored
    /// by `nestest` over separate DEC+CMP for the tighter timing.
    pub fn dcp(&mut self, bus: &mut Bus, mode: AddressingMode) {
        let result = self.read_modify_write(bus, mode, |_cpu, value| value.wrapping_sub(1));
        self.compare(self.a, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::{create_mapper, Cartridge};

    fn bus_with_prg(prg: Vec<u8>) -> Bus {
        let mut data = vec![0u8; 16];
        data[0..4].copy_from_slice(b"NES\x1A");
        data[4] = 2;
        data[5] = 1;
        let mut prg_data = prg;
        prg_data.resize(2 * 0x4000, 0xEA);
        data.extend(prg_data);
        data.extend(vec![0u8; 0x2000]);
        let cartridge = Cartridge::load(&data).unwrap();
        let mapper = create_mapper(cartridge).unwrap();
        let mut bus = Bus::new();
        bus.load_mapper(mapper);
        bus
    }

    #[test]
    fn cmp_sets_carry_when_accumulator_is_greater_or_equal() {
        let mut bus = bus_with_prg(vec![0x10]);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        cpu.a = 0x10;
        cpu.cmp(&mut bus, AddressingMode::Immediate);
        assert!(cpu.get_carry());
        assert!(cpu.get_zero());
    }

    #[test]
    fn dcp_decrements_memory_then_compares() {
        let mut bus = bus_with_prg(vec![0x10]);
        bus.write(0x0010, 0x10);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        cpu.a = 0x0F;
        cpu.dcp(&mut bus, AddressingMode::ZeroPage);
        assert_eq!(bus.read(0x0010), 0x0F);
        assert!(cpu.get_carry());
        assert!(cpu.get_zero());
    }
}
