// Opcode dispatch. One big match from opcode byte to instruction call,
// mirroring `opcodes::OPCODE_TABLE`'s addressing mode assignment exactly -
// the table exists for tracing, this match is what actually runs.

use super::addressing::AddressingMode::*;
use super::Cpu;
use crate::bus::Bus;

impl Cpu {
    pub(super) fn execute_instruction(&mut self, bus: &mut Bus, opcode: u8) {
        match opcode {
            0x00 => self.brk(bus),
            0x01 => self.ora(bus, IndexedIndirect),
            0x02 | 0x12 | 0x22 | 0x32 | 0x42 | 0x52 | 0x62 | 0x72 | 0x92 | 0xB2 | 0xD2 | 0xF2 => {
                self.jam(bus)
            }
            0x03 => self.slo(bus, IndexedIndirect),
            0x04 | 0x44 | 0x64 => self.nop_read(bus, ZeroPage),
            0x05 => self.ora(bus, ZeroPage),
            0x06 => self.asl(bus, ZeroPage),
            0x07 => self.slo(bus, ZeroPage),
            0x08 => self.php(bus),
            0x09 => self.ora(bus, Immediate),
            0x0A => self.asl(bus, Accumulator),
            0x0B | 0x2B => self.nop_read(bus, Immediate), // ANC: treated as NOP-read (carry-from-AND not modelled)
            0x0C => self.nop_read(bus, Absolute),
            0x0D => self.ora(bus, Absolute),
            0x0E => self.asl(bus, Absolute),
            0x0F => self.slo(bus, Absolute),
            0x10 => self.bpl(bus),
            0x11 => self.ora(bus, IndirectIndexed),
            0x13 => self.slo(bus, IndirectIndexed),
            0x14 | 0x34 | 0x54 | 0x74 | 0xD4 | 0xF4 => self.nop_read(bus, ZeroPageX),
            0x15 => self.ora(bus, ZeroPageX),
            0x16 => self.asl(bus, ZeroPageX),
            0x17 => self.slo(bus, ZeroPageX),
            0x18 => self.clc(bus),
            0x19 => self.ora(bus, AbsoluteY),
            0x1A | 0x3A | 0x5A | 0x7A | 0xDA | 0xFA => self.nop(bus),
            0x1B => self.slo(bus, AbsoluteY),
            0x1C | 0x3C | 0x5C | 0x7C | 0xDC | 0xFC => self.nop_read(bus, AbsoluteX),
            0x1D => self.ora(bus, AbsoluteX),
            0x1E => self.asl(bus, AbsoluteX),
            0x1F => self.slo(bus, AbsoluteX),
            0x20 => self.jsr(bus),
            0x21 => self.and(bus, IndexedIndirect),
            0x23 => self.rla(bus, IndexedIndirect),
            0x24 => self.bit(bus, ZeroPage),
            0x25 => self.and(bus, ZeroPage),
            0x26 => self.rol(bus, ZeroPage),
            0x27 => self.rla(bus, ZeroPage),
            0x28 => self.plp(bus),
            0x29 => self.and(bus, Immediate),
            0x2A => self.rol(bus, Accumulator),
            0x2C => self.bit(bus, Absolute),
            0x2D => self.and(bus, Absolute),
            0x2E => self.rol(bus, Absolute),
            0x2F => self.rla(bus, Absolute),
            0x30 => self.bmi(bus),
            0x31 => self.and(bus, IndirectIndexed),
            0x33 => self.rla(bus, IndirectIndexed),
            0x35 => self.and(bus, ZeroPageX),
            0x36 => self.rol(bus, ZeroPageX),
            0x37 => self.rla(bus, ZeroPageX),
            0x38 => self.sec(bus),
            0x39 => self.and(bus, AbsoluteY),
            0x3B => self.rla(bus, AbsoluteY),
            0x3D => self.and(bus, AbsoluteX),
            0x3E => self.rol(bus, AbsoluteX),
            0x3F => self.rla(bus, AbsoluteX),
            0x40 => self.rti(bus),
            0x41 => self.eor(bus, IndexedIndirect),
            0x43 => self.sre(bus, IndexedIndirect),
            0x45 => self.eor(bus, ZeroPage),
            0x46 => self.lsr(bus, ZeroPage),
            0x47 => self.sre(bus, ZeroPage),
            0x48 => self.pha(bus),
            0x49 => self.eor(bus, Immediate),
            0x4A => self.lsr(bus, Accumulator),
            0x4B => self.nop_read(bus, Immediate), // ALR: not modelled beyond timing
            0x4C => self.jmp(bus, Absolute),
            0x4D => self.eor(bus, Absolute),
            0x4E => self.lsr(bus, Absolute),
            0x4F => self.sre(bus, Absolute),
            0x50 => self.bvc(bus),
            0x51 => self.eor(bus, IndirectIndexed),
            0x53 => self.sre(bus, IndirectIndexed),
            0x55 => self.eor(bus, ZeroPageX),
            0x56 => self.lsr(bus, ZeroPageX),
            0x57 => self.sre(bus, ZeroPageX),
            0x58 => self.cli(bus),
            0x59 => self.eor(bus, AbsoluteY),
            0x5B => self.sre(bus, AbsoluteY),
            0x5D => self.eor(bus, AbsoluteX),
            0x5E => self.lsr(bus, AbsoluteX),
            0x5F => self.sre(bus, AbsoluteX),
            0x60 => self.rts(bus),
            0x61 => self.adc(bus, IndexedIndirect),
            0x63 => self.rra(bus, IndexedIndirect),
            0x65 => self.adc(bus, ZeroPage),
            0x66 => self.ror(bus, ZeroPage),
            0x67 => self.rra(bus, ZeroPage),
            0x68 => self.pla(bus),
            0x69 => self.adc(bus, Immediate),
            0x6A => self.ror(bus, Accumulator),
            0x6B => self.nop_read(bus, Immediate), // ARR: not modelled beyond timing
            0x6C => self.jmp(bus, Indirect),
            0x6D => self.adc(bus, Absolute),
            0x6E => self.ror(bus, Absolute),
            0x6F => self.rra(bus, Absolute),
            0x70 => self.bvs(bus),
            0x71 => self.adc(bus, IndirectIndexed),
            0x73 => self.rra(bus, IndirectIndexed),
            0x75 => self.adc(bus, ZeroPageX),
            0x76 => self.ror(bus, ZeroPageX),
            0x77 => self.rra(bus, ZeroPageX),
            0x78 => self.sei(bus),
            0x79 => self.adc(bus, AbsoluteY),
            0x7B => self.rra(bus, AbsoluteY),
            0x7D => self.adc(bus, AbsoluteX),
            0x7E => self.ror(bus, AbsoluteX),
            0x7F => self.rra(bus, AbsoluteX),
            0x80 | 0x82 | 0x89 | 0xC2 | 0xE2 => self.nop_read(bus, Immediate),
            0x81 => self.sta(bus, IndexedIndirect),
            0x83 => self.sax(bus, IndexedIndirect),
            0x84 => self.sty(bus, ZeroPage),
            0x85 => self.sta(bus, ZeroPage),
            0x86 => self.stx(bus, ZeroPage),
            0x87 => self.sax(bus, ZeroPage),
            0x88 => self.dey(bus),
            0x8A => self.txa(bus),
            0x8B => self.nop_read(bus, Immediate), // XAA: highly unstable, not modelled
            0x8C => self.sty(bus, Absolute),
            0x8D => self.sta(bus, Absolute),
            0x8E => self.stx(bus, Absolute),
            0x8F => self.sax(bus, Absolute),
            0x90 => self.bcc(bus),
            0x91 => self.sta(bus, IndirectIndexed),
            0x93 => self.sta(bus, IndirectIndexed), // SHA: degrades to a plain store
            0x94 => self.sty(bus, ZeroPageX),
            0x95 => self.sta(bus, ZeroPageX),
            0x96 => self.stx(bus, ZeroPageY),
            0x97 => self.sax(bus, ZeroPageY),
            0x98 => self.tya(bus),
            0x99 => self.sta(bus, AbsoluteY),
            0x9A => self.txs(bus),
            0x9B => self.sta(bus, AbsoluteY), // TAS: degrades to a plain store
            0x9C => self.sty(bus, AbsoluteX), // SHY: degrades to a plain store
            0x9D => self.sta(bus, AbsoluteX),
            0x9E => self.stx(bus, AbsoluteY), // SHX: degrades to a plain store
            0x9F => self.sta(bus, AbsoluteY), // SHA: degrades to a plain store
            0xA0 => self.ldy(bus, Immediate),
            0xA1 => self.lda(bus, IndexedIndirect),
            0xA2 => self.ldx(bus, Immediate),
            0xA3 => self.lax(bus, IndexedIndirect),
            0xA4 => self.ldy(bus, ZeroPage),
            0xA5 => self.lda(bus, ZeroPage),
            0xA6 => self.ldx(bus, ZeroPage),
            0xA7 => self.lax(bus, ZeroPage),
            0xA8 => self.tay(bus),
            0xA9 => self.lda(bus, Immediate),
            0xAA => self.tax(bus),
            0xAB => self.lax(bus, Immediate), // LXA: approximated as LAX #imm
            0xAC => self.ldy(bus, Absolute),
            0xAD => self.lda(bus, Absolute),
            0xAE => self.ldx(bus, Absolute),
            0xAF => self.lax(bus, Absolute),
            0xB0 => self.bcs(bus),
            0xB1 => self.lda(bus, IndirectIndexed),
            0xB3 => self.lax(bus, IndirectIndexed),
            0xB4 => self.ldy(bus, ZeroPageX),
            0xB5 => self.lda(bus, ZeroPageX),
            0xB6 => self.ldx(bus, ZeroPageY),
            0xB7 => self.lax(bus, ZeroPageY),
            0xB8 => self.clv(bus),
            0xB9 => self.lda(bus, AbsoluteY),
            0xBA => self.tsx(bus),
            0xBB => self.lda(bus, AbsoluteY), // LAS: degrades to a plain load
            0xBC => self.ldy(bus, AbsoluteX),
            0xBD => self.lda(bus, AbsoluteX),
            0xBE => self.ldx(bus, AbsoluteY),
            0xBF => self.lax(bus, AbsoluteY),
            0xC0 => self.cpy(bus, Immediate),
            0xC1 => self.cmp(bus, IndexedIndirect),
            0xC3 => self.dcp(bus, IndexedIndirect),
            0xC4 => self.cpy(bus, ZeroPage),
            0xC5 => self.cmp(bus, ZeroPage),
            0xC6 => self.dec(bus, ZeroPage),
            0xC7 => self.dcp(bus, ZeroPage),
            0xC8 => self.iny(bus),
            0xC9 => self.cmp(bus, Immediate),
            0xCA => self.dex(bus),
            0xCB => self.axs(bus, Immediate),
            0xCC => self.cpy(bus, Absolute),
            0xCD => self.cmp(bus, Absolute),
            0xCE => self.dec(bus, Absolute),
            0xCF => self.dcp(bus, Absolute),
            0xD0 => self.bne(bus),
            0xD1 => self.cmp(bus, IndirectIndexed),
            0xD3 => self.dcp(bus, IndirectIndexed),
            0xD5 => self.cmp(bus, ZeroPageX),
            0xD6 => self.dec(bus, ZeroPageX),
            0xD7 => self.dcp(bus, ZeroPageX),
            0xD8 => self.cld(bus),
            0xD9 => self.cmp(bus, AbsoluteY),
            0xDB => self.dcp(bus, AbsoluteY),
            0xDD => self.cmp(bus, AbsoluteX),
            0xDE => self.dec(bus, AbsoluteX),
            0xDF => self.dcp(bus, AbsoluteX),
            0xE0 => self.cpx(bus, Immediate),
            0xE1 => self.sbc(bus, IndexedIndirect),
            0xE3 => self.isc(bus, IndexedIndirect),
            0xE4 => self.cpx(bus, ZeroPage),
            0xE5 => self.sbc(bus, ZeroPage),
            0xE6 => self.inc(bus, ZeroPage),
            0xE7 => self.isc(bus, ZeroPage),
            0xE8 => self.inx(bus),
            0xE9 | 0xEB => self.sbc(bus, Immediate),
            0xEA => self.nop(bus),
            0xEC => self.cpx(bus, Absolute),
            0xED => self.sbc(bus, Absolute),
            0xEE => self.inc(bus, Absolute),
            0xEF => self.isc(bus, Absolute),
            0xF0 => self.beq(bus),
            0xF1 => self.sbc(bus, IndirectIndexed),
            0xF3 => self.isc(bus, IndirectIndexed),
            0xF5 => self.sbc(bus, ZeroPageX),
            0xF6 => self.inc(bus, ZeroPageX),
            0xF7 => self.isc(bus, ZeroPageX),
            0xF8 => self.sed(bus),
            0xF9 => self.sbc(bus, AbsoluteY),
            0xFB => self.isc(bus, AbsoluteY),
            0xFD => self.sbc(bus, AbsoluteX),
            0xFE => self.inc(bus, AbsoluteX),
            0xFF => self.isc(bus, AbsoluteX),
        }
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
    fn lda_immediate_through_step_updates_accumulator_and_pc() {
        let mut bus = bus_with_prg(vec![0xA9, 0x42]);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        cpu.step(&mut bus);
        assert_eq!(cpu.a, 0x42);
        assert_eq!(cpu.pc, 0x8002);
        assert_eq!(cpu.cycles, 2);
    }

    #[test]
    fn jmp_absolute_through_step_takes_three_cycles() {
        let mut bus = bus_with_prg(vec![0x4C, 0x34, 0x12]);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        cpu.step(&mut bus);
        assert_eq!(cpu.pc, 0x1234);
        assert_eq!(cpu.cycles, 3);
    }

    #[test]
    fn nmi_preempts_the_next_opcode_fetch() {
        let mut bus = bus_with_prg(vec![0xA9, 0x42]);
        bus.write(0xFFFA, 0x00);
        bus.write(0xFFFB, 0x90);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        cpu.sp = 0xFD;
        cpu.request_nmi();
        cpu.step(&mut bus);
        assert_eq!(cpu.pc, 0x9000);
        assert_eq!(cpu.a, 0); // LDA never executed
    }
}
