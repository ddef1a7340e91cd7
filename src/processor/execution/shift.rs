use crate::processor::{DecodedInstruction, Processor};

impl Processor {
    /// `0xB Shift d, a, b`: sign-extends `reg[b]` to `t`. If `t > 0`,
    /// arithmetic-right-shifts the sign-extended `reg[a]` by `t`; if `t <=
    /// 0`, logical-left-shifts `reg[a]` by `-t` (the "negative means left
    /// shift" convention — see spec §4.3, §9 and DESIGN.md). Result is
    /// truncated to `word_size`.
    pub(crate) fn instruction_shift(&mut self, instruction: DecodedInstruction) {
        let a = self.register(instruction.field2 as usize);
        let b = self.register(instruction.field3 as usize);
        let t = self.sign_extend(b);

        let result = if t > 0 {
            let signed_a = self.sign_extend(a);
            let shifted = signed_a >> t.min(63);
            shifted as u64
        } else {
            let shift = (-t).min(63) as u32;
            a << shift
        };

        let truncated = self.truncate_word(result);
        self.set_register(instruction.field1 as usize, truncated);
    }
}
