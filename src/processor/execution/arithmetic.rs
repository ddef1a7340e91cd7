use crate::processor::{DecodedInstruction, Processor};

impl Processor {
    /// `0x7 AddInt d, a, b`: `reg[d] := (reg[a] + reg[b]) mod 2^word_size`.
    pub(crate) fn instruction_add_int(&mut self, instruction: DecodedInstruction) {
        let a = self.register(instruction.field2 as usize);
        let b = self.register(instruction.field3 as usize);
        let result = self.truncate_word(a.wrapping_add(b));
        self.set_register(instruction.field1 as usize, result);
    }

    /// `0x8 AddConst d, c`: `reg[d] := (reg[d] + c) mod 2^word_size`.
    pub(crate) fn instruction_add_const(&mut self, instruction: DecodedInstruction) {
        let c = instruction.word(self.params.block_size);
        let d = instruction.field1 as usize;
        let result = self.truncate_word(self.register(d).wrapping_add(c));
        self.set_register(d, result);
    }

    /// `0x9 MulInt d, a, b`: `reg[d] := (reg[a] * reg[b]) mod 2^word_size`.
    pub(crate) fn instruction_mul_int(&mut self, instruction: DecodedInstruction) {
        let a = self.register(instruction.field2 as usize);
        let b = self.register(instruction.field3 as usize);
        let result = self.truncate_word(a.wrapping_mul(b));
        self.set_register(instruction.field1 as usize, result);
    }

    /// `0xA SubInt d, a, b`: `reg[d] := (reg[a] - reg[b]) mod 2^word_size`.
    pub(crate) fn instruction_sub_int(&mut self, instruction: DecodedInstruction) {
        let a = self.register(instruction.field2 as usize);
        let b = self.register(instruction.field3 as usize);
        let result = self.truncate_word(a.wrapping_sub(b));
        self.set_register(instruction.field1 as usize, result);
    }
}
