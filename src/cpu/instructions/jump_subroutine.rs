// JMP/JSR/RTS/RTI/BRK.

use crate::bus::Bus;
use crate::cpu::{flags, vectors, AddressingMode, Cpu};

impl Cpu {
    pub fn jmp(&mut self, bus: &mut Bus, mode: AddressingMode) {
        self.pc = match mode {
            AddressingMode::Indirect => self.indirect(bus),
            _ => self.address_read(bus, mode),
        };
    }

    /// JSR: fetch the low byte, burn one internal cycle, push the return
    /// address (the address of JSR's own last byte, since RTS adds one
    /// back), then fetch the high byte.
    pub fn jsr(&mut self, bus: &mut Bus) {
        let lo = self.fetch_byte(bus) as u16;
        self.tick(bus);
        let return_addr = self.pc;
        self.push_u16(bus, return_addr);
        let hi = self.fetch_byte(bus) as u16;
        self.pc = (hi << 8) | lo;
    }

    pub fn rts(&mut self, bus: &mut Bus) {
        self.tick(bus); // discard next byte
        self.tick(bus); // increment S
        let addr = self.pull_u16(bus);
        self.pc = addr.wrapping_add(1);
        self.tick(bus); // increment PC
    }

    pub fn rti(&mut self, bus: &mut Bus) {
        self.tick(bus); // discard next byte
        self.tick(bus); // increment S
        let status = self.pull(bus);
        self.status = (status & !flags::BREAK) | flags::UNUSED;
        self.pc = self.pull_u16(bus);
    }

    pub fn brk(&mut self, bus: &mut Bus) {
        self.service_interrupt(bus, vectors::IRQ, true);
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
    fn jsr_then_rts_round_trips_through_the_stack() {
        let mut bus = bus_with_prg(vec![0x00, 0x90]);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        cpu.sp = 0xFD;
        cpu.jsr(&mut bus);
        assert_eq!(cpu.pc, 0x9000);
        cpu.rts(&mut bus);
        assert_eq!(cpu.pc, 0x8002);
        assert_eq!(cpu.sp, 0xFD);
    }

    #[test]
    fn jsr_costs_six_cycles() {
        let mut bus = bus_with_prg(vec![0x00, 0x90]);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        cpu.sp = 0xFD;
        let before = cpu.cycles;
        cpu.jsr(&mut bus);
        assert_eq!(cpu.cycles - before, 5); // opcode fetch happens in step(), not here
    }

    #[test]
    fn jmp_indirect_uses_the_hardware_page_wrap_bug() {
        let mut bus = bus_with_prg(vec![]);
        bus.write(0x8000, 0xFF);
        bus.write(0x8001, 0x02);
        bus.write(0x02FF, 0x34);
        bus.write(0x0200, 0x12);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        cpu.jmp(&mut bus, AddressingMode::Indirect);
        assert_eq!(cpu.pc, 0x1234);
    }

    #[test]
    fn brk_pushes_status_with_break_set_and_loads_irq_vector() {
        let mut bus = bus_with_prg(vec![]);
        bus.write(vectors::IRQ, 0x00);
        bus.write(vectors::IRQ + 1, 0x90);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        cpu.sp = 0xFD;
        cpu.status = 0x00;
        cpu.brk(&mut bus);
        assert_eq!(cpu.pc, 0x9000);
        assert!(cpu.get_interrupt_disable());
        let pushed_status = bus.read(0x01FD);
        assert_eq!(pushed_status, flags::BREAK | flags::UNUSED);
    }
}
