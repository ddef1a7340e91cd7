use crate::processor::{DecodedInstruction, Processor};

impl Processor {
    /// `0xC AND d, a, b`: `reg[d] := reg[a] & reg[b]`.
    pub(crate) fn instruction_and(&mut self, instruction: DecodedInstruction) {
        let a = self.register(instruction.field2 as usize);
        let b = self.register(instruction.field3 as usize);
        self.set_register(instruction.field1 as usize, a & b);
    }

    /// `0xD OR d, a, b`: `reg[d] := reg[a] | reg[b]`.
    pub(crate) fn instruction_or(&mut self, instruction: DecodedInstruction) {
        let a = self.register(instruction.field2 as usize);
        let b = self.register(instruction.field3 as usize);
        self.set_register(instruction.field1 as usize, a | b);
    }

    /// `0xE XOR d, a, b`: `reg[d] := reg[a] ^ reg[b]`.
    pub(crate) fn instruction_xor(&mut self, instruction: DecodedInstruction) {
        let a = self.register(instruction.field2 as usize);
        let b = self.register(instruction.field3 as usize);
        self.set_register(instruction.field1 as usize, a ^ b);
    }
}

#[cfg(test)]
mod tests {
    use crate::params::Params;
    use crate::processor::{DecodedInstruction, Opcode, Processor};

    fn three_register(opcode: Opcode, d: u64, a: u64, b: u64) -> DecodedInstruction {
        DecodedInstruction {
            opcode: Some(opcode),
            field1: d,
            field2: a,
            field3: b,
        }
    }

    #[test]
    fn and_masks_bits() {
        let mut p = Processor::new(Params::default());
        p.set_register(1, 0xF0);
        p.set_register(2, 0x3C);
        p.instruction_and(three_register(Opcode::And, 0, 1, 2));
        assert_eq!(p.register(0), 0x30);
    }

    #[test]
    fn xor_clears_equal_bits() {
        let mut p = Processor::new(Params::default());
        p.set_register(1, 0xAA);
        p.set_register(2, 0xAA);
        p.instruction_xor(three_register(Opcode::Xor, 0, 1, 2));
        assert_eq!(p.register(0), 0x00);
    }
}
