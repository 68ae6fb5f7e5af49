// Opcode metadata: mnemonic, addressing mode and instruction length for
// every one of the 256 possible opcode bytes. Used only by the
// disassembler/tracer; actual execution timing comes from ticking the bus
// during addressing and instruction execution, not from a table.

use super::addressing::AddressingMode;

#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub bytes: u8,
    /// Undocumented opcodes are marked so the disassembler can flag them.
    pub illegal: bool,
}

use AddressingMode::*;

macro_rules! op {
    ($mnemonic:expr, $mode:expr, $bytes:expr) => {
        OpcodeInfo {
            mnemonic: $mnemonic,
            mode: $mode,
            bytes: $bytes,
            illegal: false,
        }
    };
    ($mnemonic:expr, $mode:expr, $bytes:expr, illegal) => {
        OpcodeInfo {
            mnemonic: $mnemonic,
            mode: $mode,
            bytes: $bytes,
            illegal: true,
        }
    };
}

pub static OPCODE_TABLE: [OpcodeInfo; 256] = [
    /* 0x00 */ op!("BRK", Implied, 1),
    /* 0x01 */ op!("ORA", IndexedIndirect, 2),
    /* 0x02 */ op!("JAM", Implied, 1, illegal),
    /* 0x03 */ op!("SLO", IndexedIndirect, 2, illegal),
    /* 0x04 */ op!("NOP", ZeroPage, 2, illegal),
    /* 0x05 */ op!("ORA", ZeroPage, 2),
    /* 0x06 */ op!("ASL", ZeroPage, 2),
    /* 0x07 */ op!("SLO", ZeroPage, 2, illegal),
    /* 0x08 */ op!("PHP", Implied, 1),
    /* 0x09 */ op!("ORA", Immediate, 2),
    /* 0x0A */ op!("ASL", Accumulator, 1),
    /* 0x0B */ op!("ANC", Immediate, 2, illegal),
    /* 0x0C */ op!("NOP", Absolute, 3, illegal),
    /* 0x0D */ op!("ORA", Absolute, 3),
    /* 0x0E */ op!("ASL", Absolute, 3),
    /* 0x0F */ op!("SLO", Absolute, 3, illegal),
    /* 0x10 */ op!("BPL", Relative, 2),
    /* 0x11 */ op!("ORA", IndirectIndexed, 2),
    /* 0x12 */ op!("JAM", Implied, 1, illegal),
    /* 0x13 */ op!("SLO", IndirectIndexed, 2, illegal),
    /* 0x14 */ op!("NOP", ZeroPageX, 2, illegal),
    /* 0x15 */ op!("ORA", ZeroPageX, 2),
    /* 0x16 */ op!("ASL", ZeroPageX, 2),
    /* 0x17 */ op!("SLO", ZeroPageX, 2, illegal),
    /* 0x18 */ op!("CLC", Implied, 1),
    /* 0x19 */ op!("ORA", AbsoluteY, 3),
    /* 0x1A */ op!("NOP", Implied, 1, illegal),
    /* 0x1B */ op!("SLO", AbsoluteY, 3, illegal),
    /* 0x1C */ op!("NOP", AbsoluteX, 3, illegal),
    /* 0x1D */ op!("ORA", AbsoluteX, 3),
    /* 0x1E */ op!("ASL", AbsoluteX, 3),
    /* 0x1F */ op!("SLO", AbsoluteX, 3, illegal),
    /* 0x20 */ op!("JSR", Absolute, 3),
    /* 0x21 */ op!("AND", IndexedIndirect, 2),
    /* 0x22 */ op!("JAM", Implied, 1, illegal),
    /* 0x23 */ op!("RLA", IndexedIndirect, 2, illegal),
    /* 0x24 */ op!("BIT", ZeroPage, 2),
    /* 0x25 */ op!("AND", ZeroPage, 2),
    /* 0x26 */ op!("ROL", ZeroPage, 2),
    /* 0x27 */ op!("RLA", ZeroPage, 2, illegal),
    /* 0x28 */ op!("PLP", Implied, 1),
    /* 0x29 */ op!("AND", Immediate, 2),
    /* 0x2A */ op!("ROL", Accumulator, 1),
    /* 0x2B */ op!("ANC", Immediate, 2, illegal),
    /* 0x2C */ op!("BIT", Absolute, 3),
    /* 0x2D */ op!("AND", Absolute, 3),
    /* 0x2E */ op!("ROL", Absolute, 3),
    /* 0x2F */ op!("RLA", Absolute, 3, illegal),
    /* 0x30 */ op!("BMI", Relative, 2),
    /* 0x31 */ op!("AND", IndirectIndexed, 2),
    /* 0x32 */ op!("JAM", Implied, 1, illegal),
    /* 0x33 */ op!("RLA", IndirectIndexed, 2, illegal),
    /* 0x34 */ op!("NOP", ZeroPageX, 2, illegal),
    /* 0x35 */ op!("AND", ZeroPageX, 2),
    /* 0x36 */ op!("ROL", ZeroPageX, 2),
    /* 0x37 */ op!("RLA", ZeroPageX, 2, illegal),
    /* 0x38 */ op!("SEC", Implied, 1),
    /* 0x39 */ op!("AND", AbsoluteY, 3),
    /* 0x3A */ op!("NOP", Implied, 1, illegal),
    /* 0x3B */ op!("RLA", AbsoluteY, 3, illegal),
    /* 0x3C */ op!("NOP", AbsoluteX, 3, illegal),
    /* 0x3D */ op!("AND", AbsoluteX, 3),
    /* 0x3E */ op!("ROL", AbsoluteX, 3),
    /* 0x3F */ op!("RLA", AbsoluteX, 3, illegal),
    /* 0x40 */ op!("RTI", Implied, 1),
    /* 0x41 */ op!("EOR", IndexedIndirect, 2),
    /* 0x42 */ op!("JAM", Implied, 1, illegal),
    /* 0x43 */ op!("SRE", IndexedIndirect, 2, illegal),
    /* 0x44 */ op!("NOP", ZeroPage, 2, illegal),
    /* 0x45 */ op!("EOR", ZeroPage, 2),
    /* 0x46 */ op!("LSR", ZeroPage, 2),
    /* 0x47 */ op!("SRE", ZeroPage, 2, illegal),
    /* 0x48 */ op!("PHA", Implied, 1),
    /* 0x49 */ op!("EOR", Immediate, 2),
    /* 0x4A */ op!("LSR", Accumulator, 1),
    /* 0x4B */ op!("ALR", Immediate, 2, illegal),
    /* 0x4C */ op!("JMP", Absolute, 3),
    /* 0x4D */ op!("EOR", Absolute, 3),
    /* 0x4E */ op!("LSR", Absolute, 3),
    /* 0x4F */ op!("SRE", Absolute, 3, illegal),
    /* 0x50 */ op!("BVC", Relative, 2),
    /* 0x51 */ op!("EOR", IndirectIndexed, 2),
    /* 0x52 */ op!("JAM", Implied, 1, illegal),
    /* 0x53 */ op!("SRE", IndirectIndexed, 2, illegal),
    /* 0x54 */ op!("NOP", ZeroPageX, 2, illegal),
    /* 0x55 */ op!("EOR", ZeroPageX, 2),
    /* 0x56 */ op!("LSR", ZeroPageX, 2),
    /* 0x57 */ op!("SRE", ZeroPageX, 2, illegal),
    /* 0x58 */ op!("CLI", Implied, 1),
    /* 0x59 */ op!("EOR", AbsoluteY, 3),
    /* 0x5A */ op!("NOP", Implied, 1, illegal),
    /* 0x5B */ op!("SRE", AbsoluteY, 3, illegal),
    /* 0x5C */ op!("NOP", AbsoluteX, 3, illegal),
    /* 0x5D */ op!("EOR", AbsoluteX, 3),
    /* 0x5E */ op!("LSR", AbsoluteX, 3),
    /* 0x5F */ op!("SRE", AbsoluteX, 3, illegal),
    /* 0x60 */ op!("RTS", Implied, 1),
    /* 0x61 */ op!("ADC", IndexedIndirect, 2),
    /* 0x62 */ op!("JAM", Implied, 1, illegal),
    /* 0x63 */ op!("RRA", IndexedIndirect, 2, illegal),
    /* 0x64 */ op!("NOP", ZeroPage, 2, illegal),
    /* 0x65 */ op!("ADC", ZeroPage, 2),
    /* 0x66 */ op!("ROR", ZeroPage, 2),
    /* 0x67 */ op!("RRA", ZeroPage, 2, illegal),
    /* 0x68 */ op!("PLA", Implied, 1),
    /* 0x69 */ op!("ADC", Immediate, 2),
    /* 0x6A */ op!("ROR", Accumulator, 1),
    /* 0x6B */ op!("ARR", Immediate, 2, illegal),
    /* 0x6C */ op!("JMP", Indirect, 3),
    /* 0x6D */ op!("ADC", Absolute, 3),
    /* 0x6E */ op!("ROR", Absolute, 3),
    /* 0x6F */ op!("RRA", Absolute, 3, illegal),
    /* 0x70 */ op!("BVS", Relative, 2),
    /* 0x71 */ op!("ADC", IndirectIndexed, 2),
    /* 0x72 */ op!("JAM", Implied, 1, illegal),
    /* 0x73 */ op!("RRA", IndirectIndexed, 2, illegal),
    /* 0x74 */ op!("NOP", ZeroPageX, 2, illegal),
    /* 0x75 */ op!("ADC", ZeroPageX, 2),
    /* 0x76 */ op!("ROR", ZeroPageX, 2),
    /* 0x77 */ op!("RRA", ZeroPageX, 2, illegal),
    /* 0x78 */ op!("SEI", Implied, 1),
    /* 0x79 */ op!("ADC", AbsoluteY, 3),
    /* 0x7A */ op!("NOP", Implied, 1, illegal),
    /* 0x7B */ op!("RRA", AbsoluteY, 3, illegal),
    /* 0x7C */ op!("NOP", AbsoluteX, 3, illegal),
    /* 0x7D */ op!("ADC", AbsoluteX, 3),
    /* 0x7E */ op!("ROR", AbsoluteX, 3),
    /* 0x7F */ op!("RRA", AbsoluteX, 3, illegal),
    /* 0x80 */ op!("NOP", Immediate, 2, illegal),
    /* 0x81 */ op!("STA", IndexedIndirect, 2),
    /* 0x82 */ op!("NOP", Immediate, 2, illegal),
    /* 0x83 */ op!("SAX", IndexedIndirect, 2, illegal),
    /* 0x84 */ op!("STY", ZeroPage, 2),
    /* 0x85 */ op!("STA", ZeroPage, 2),
    /* 0x86 */ op!("STX", ZeroPage, 2),
    /* 0x87 */ op!("SAX", ZeroPage, 2, illegal),
    /* 0x88 */ op!("DEY", Implied, 1),
    /* 0x89 */ op!("NOP", Immediate, 2, illegal),
    /* 0x8A */ op!("TXA", Implied, 1),
    /* 0x8B */ op!("XAA", Immediate, 2, illegal),
    /* 0x8C */ op!("STY", Absolute, 3),
    /* 0x8D */ op!("STA", Absolute, 3),
    /* 0x8E */ op!("STX", Absolute, 3),
    /* 0x8F */ op!("SAX", Absolute, 3, illegal),
    /* 0x90 */ op!("BCC", Relative, 2),
    /* 0x91 */ op!("STA", IndirectIndexed, 2),
    /* 0x92 */ op!("JAM", Implied, 1, illegal),
    /* 0x93 */ op!("SHA", IndirectIndexed, 2, illegal),
    /* 0x94 */ op!("STY", ZeroPageX, 2),
    /* 0x95 */ op!("STA", ZeroPageX, 2),
    /* 0x96 */ op!("STX", ZeroPageY, 2),
    /* 0x97 */ op!("SAX", ZeroPageY, 2, illegal),
    /* 0x98 */ op!("TYA", Implied, 1),
    /* 0x99 */ op!("STA", AbsoluteY, 3),
    /* 0x9A */ op!("TXS", Implied, 1),
    /* 0x9B */ op!("TAS", AbsoluteY, 3, illegal),
    /* 0x9C */ op!("SHY", AbsoluteX, 3, illegal),
    /* 0x9D */ op!("STA", AbsoluteX, 3),
    /* 0x9E */ op!("SHX", AbsoluteY, 3, illegal),
    /* 0x9F */ op!("SHA", AbsoluteY, 3, illegal),
    /* 0xA0 */ op!("LDY", Immediate, 2),
    /* 0xA1 */ op!("LDA", IndexedIndirect, 2),
    /* 0xA2 */ op!("LDX", Immediate, 2),
    /* 0xA3 */ op!("LAX", IndexedIndirect, 2, illegal),
    /* 0xA4 */ op!("LDY", ZeroPage, 2),
    /* 0xA5 */ op!("LDA", ZeroPage, 2),
    /* 0xA6 */ op!("LDX", ZeroPage, 2),
    /* 0xA7 */ op!("LAX", ZeroPage, 2, illegal),
    /* 0xA8 */ op!("TAY", Implied, 1),
    /* 0xA9 */ op!("LDA", Immediate, 2),
    /* 0xAA */ op!("TAX", Implied, 1),
    /* 0xAB */ op!("LXA", Immediate, 2, illegal),
    /* 0xAC */ op!("LDY", Absolute, 3),
    /* 0xAD */ op!("LDA", Absolute, 3),
    /* 0xAE */ op!("LDX", Absolute, 3),
    /* 0xAF */ op!("LAX", Absolute, 3, illegal),
    /* 0xB0 */ op!("BCS", Relative, 2),
    /* 0xB1 */ op!("LDA", IndirectIndexed, 2),
    /* 0xB2 */ op!("JAM", Implied, 1, illegal),
    /* 0xB3 */ op!("LAX", IndirectIndexed, 2, illegal),
    /* 0xB4 */ op!("LDY", ZeroPageX, 2),
    /* 0xB5 */ op!("LDA", ZeroPageX, 2),
    /* 0xB6 */ op!("LDX", ZeroPageY, 2),
    /* 0xB7 */ op!("LAX", ZeroPageY, 2, illegal),
    /* 0xB8 */ op!("CLV", Implied, 1),
    /* 0xB9 */ op!("LDA", AbsoluteY, 3),
    /* 0xBA */ op!("TSX", Implied, 1),
    /* 0xBB */ op!("LAS", AbsoluteY, 3, illegal),
    /* 0xBC */ op!("LDY", AbsoluteX, 3),
    /* 0xBD */ op!("LDA", AbsoluteX, 3),
    /* 0xBE */ op!("LDX", AbsoluteY, 3),
    /* 0xBF */ op!("LAX", AbsoluteY, 3, illegal),
    /* 0xC0 */ op!("CPY", Immediate, 2),
    /* 0xC1 */ op!("CMP", IndexedIndirect, 2),
    /* 0xC2 */ op!("NOP", Immediate, 2, illegal),
    /* 0xC3 */ op!("DCP", IndexedIndirect, 2, illegal),
    /* 0xC4 */ op!("CPY", ZeroPage, 2),
    /* 0xC5 */ op!("CMP", ZeroPage, 2),
    /* 0xC6 */ op!("DEC", ZeroPage, 2),
    /* 0xC7 */ op!("DCP", ZeroPage, 2, illegal),
    /* 0xC8 */ op!("INY", Implied, 1),
    /* 0xC9 */ op!("CMP", Immediate, 2),
    /* 0xCA */ op!("DEX", Implied, 1),
    /* 0xCB */ op!("AXS", Immediate, 2, illegal),
    /* 0xCC */ op!("CPY", Absolute, 3),
    /* 0xCD */ op!("CMP", Absolute, 3),
    /* 0xCE */ op!("DEC", Absolute, 3),
    /* 0xCF */ op!("DCP", Absolute, 3, illegal),
    /* 0xD0 */ op!("BNE", Relative, 2),
    /* 0xD1 */ op!("CMP", IndirectIndexed, 2),
    /* 0xD2 */ op!("JAM", Implied, 1, illegal),
    /* 0xD3 */ op!("DCP", IndirectIndexed, 2, illegal),
    /* 0xD4 */ op!("NOP", ZeroPageX, 2, illegal),
    /* 0xD5 */ op!("CMP", ZeroPageX, 2),
    /* 0xD6 */ op!("DEC", ZeroPageX, 2),
    /* 0xD7 */ op!("DCP", ZeroPageX, 2, illegal),
    /* 0xD8 */ op!("CLD", Implied, 1),
    /* 0xD9 */ op!("CMP", AbsoluteY, 3),
    /* 0xDA */ op!("NOP", Implied, 1, illegal),
    /* 0xDB */ op!("DCP", AbsoluteY, 3, illegal),
    /* 0xDC */ op!("NOP", AbsoluteX, 3, illegal),
    /* 0xDD */ op!("CMP", AbsoluteX, 3),
    /* 0xDE */ op!("DEC", AbsoluteX, 3),
    /* 0xDF */ op!("DCP", AbsoluteX, 3, illegal),
    /* 0xE0 */ op!("CPX", Immediate, 2),
    /* 0xE1 */ op!("SBC", IndexedIndirect, 2),
    /* 0xE2 */ op!("NOP", Immediate, 2, illegal),
    /* 0xE3 */ op!("ISC", IndexedIndirect, 2, illegal),
    /* 0xE4 */ op!("CPX", ZeroPage, 2),
    /* 0xE5 */ op!("SBC", ZeroPage, 2),
    /* 0xE6 */ op!("INC", ZeroPage, 2),
    /* 0xE7 */ op!("ISC", ZeroPage, 2, illegal),
    /* 0xE8 */ op!("INX", Implied, 1),
    /* 0xE9 */ op!("SBC", Immediate, 2),
    /* 0xEA */ op!("NOP", Implied, 1),
    /* 0xEB */ op!("SBC", Immediate, 2, illegal),
    /* 0xEC */ op!("CPX", Absolute, 3),
    /* 0xED */ op!("SBC", Absolute, 3),
    /* 0xEE */ op!("INC", Absolute, 3),
    /* 0xEF */ op!("ISC", Absolute, 3, illegal),
    /* 0xF0 */ op!("BEQ", Relative, 2),
    /* 0xF1 */ op!("SBC", IndirectIndexed, 2),
    /* 0xF2 */ op!("JAM", Implied, 1, illegal),
    /* 0xF3 */ op!("ISC", IndirectIndexed, 2, illegal),
    /* 0xF4 */ op!("NOP", ZeroPageX, 2, illegal),
    /* 0xF5 */ op!("SBC", ZeroPageX, 2),
    /* 0xF6 */ op!("INC", ZeroPageX, 2),
    /* 0xF7 */ op!("ISC", ZeroPageX, 2, illegal),
    /* 0xF8 */ op!("SED", Implied, 1),
    /* 0xF9 */ op!("SBC", AbsoluteY, 3),
    /* 0xFA */ op!("NOP", Implied, 1, illegal),
    /* 0xFB */ op!("ISC", AbsoluteY, 3, illegal),
    /* 0xFC */ op!("NOP", AbsoluteX, 3, illegal),
    /* 0xFD */ op!("SBC", AbsoluteX, 3),
    /* 0xFE */ op!("INC", AbsoluteX, 3),
    /* 0xFF */ op!("ISC", AbsoluteX, 3, illegal),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_opcode_byte() {
        assert_eq!(OPCODE_TABLE.len(), 256);
    }

    #[test]
    fn documented_opcodes_are_not_flagged_illegal() {
        assert!(!OPCODE_TABLE[0xA9].illegal); // LDA #imm
        assert!(!OPCODE_TABLE[0xEA].illegal); // NOP
    }

    #[test]
    fn known_illegal_opcodes_are_flagged() {
        for byte in [0xA3usize, 0xC3, 0xE3, 0x03, 0x23, 0x43, 0x63, 0xCB] {
            assert!(OPCODE_TABLE[byte].illegal, "{:#04X} should be illegal", byte);
        }
    }
}
