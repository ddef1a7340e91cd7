use crate::memory::Memory;
use crate::processor::{DecodedInstruction, Processor, Status};

impl Processor {
    /// `0x1 LoadMem d, addr`: `reg[d] := readWord(addr)`, or `BadAlignment`
    /// if `addr` is not `word_blocks`-aligned.
    pub(crate) fn instruction_load_mem(&mut self, instruction: DecodedInstruction, memory: &Memory) {
        let addr = instruction.word(self.params.block_size);
        if addr % self.params.word_blocks as u64 != 0 {
            self.set_status(Status::BadAlignment);
            return;
        }
        let value = self.read_word(memory, addr);
        self.set_register(instruction.field1 as usize, value);
    }

    /// `0x2 LoadConst d, c`: `reg[d] := c`.
    pub(crate) fn instruction_load_const(&mut self, instruction: DecodedInstruction) {
        let c = instruction.word(self.params.block_size);
        self.set_register(instruction.field1 as usize, c);
    }

    /// `0x3 LoadReg d, s`: as LoadMem with `addr = reg[s]`.
    pub(crate) fn instruction_load_reg(&mut self, instruction: DecodedInstruction, memory: &Memory) {
        let addr = self.register(instruction.field3 as usize);
        if addr % self.params.word_blocks as u64 != 0 {
            self.set_status(Status::BadAlignment);
            return;
        }
        let value = self.read_word(memory, addr);
        self.set_register(instruction.field2 as usize, value);
    }

    /// `0x4 Store s, addr`: `writeWord(addr, reg[s])`, or `BadAlignment` if
    /// `addr` is not `word_blocks`-aligned.
    pub(crate) fn instruction_store(&mut self, instruction: DecodedInstruction, memory: &mut Memory) {
        let addr = instruction.word(self.params.block_size);
        if addr % self.params.word_blocks as u64 != 0 {
            self.set_status(Status::BadAlignment);
            return;
        }
        let value = self.register(instruction.field1 as usize);
        self.write_word(memory, addr, value);
    }

    /// `0x5 StoreReg s, d`: as Store with `addr = reg[d]`.
    pub(crate) fn instruction_store_reg(&mut self, instruction: DecodedInstruction, memory: &mut Memory) {
        let addr = self.register(instruction.field3 as usize);
        if addr % self.params.word_blocks as u64 != 0 {
            self.set_status(Status::BadAlignment);
            return;
        }
        let value = self.register(instruction.field2 as usize);
        self.write_word(memory, addr, value);
    }

    /// `0x6 Move s, d`: `reg[d] := reg[s]`.
    pub(crate) fn instruction_move(&mut self, instruction: DecodedInstruction) {
        let value = self.register(instruction.field2 as usize);
        self.set_register(instruction.field3 as usize, value);
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::Memory;
    use crate::params::Params;
    use crate::processor::{DecodedInstruction, Opcode, Processor, Status};

    fn setup() -> (Processor, Memory) {
        let params = Params::default();
        (Processor::new(params), Memory::new(&params))
    }

    #[test]
    fn load_mem_reads_a_word_at_an_aligned_address() {
        let (mut p, mut m) = setup();
        m.load(2, "ab").unwrap();
        p.instruction_load_mem(
            DecodedInstruction {
                opcode: Some(Opcode::LoadMem),
                field1: 1,
                field2: 0,
                field3: 2,
            },
            &m,
        );
        assert_eq!(p.register(1), 0xab);
        assert_eq!(p.status(), Status::Success);
    }

    #[test]
    fn load_mem_reports_bad_alignment_for_an_odd_address() {
        let (mut p, m) = setup();
        p.instruction_load_mem(
            DecodedInstruction {
                opcode: Some(Opcode::LoadMem),
                field1: 1,
                field2: 0,
                field3: 1,
            },
            &m,
        );
        assert_eq!(p.status(), Status::BadAlignment);
    }

    #[test]
    fn store_then_load_mem_round_trips_a_word() {
        let (mut p, mut m) = setup();
        p.set_register(0, 0x5a);
        p.instruction_store(
            DecodedInstruction {
                opcode: Some(Opcode::Store),
                field1: 0,
                field2: 0,
                field3: 4,
            },
            &mut m,
        );
        p.instruction_load_mem(
            DecodedInstruction {
                opcode: Some(Opcode::LoadMem),
                field1: 1,
                field2: 0,
                field3: 4,
            },
            &m,
        );
        assert_eq!(p.register(1), 0x5a);
    }

    #[test]
    fn load_reg_uses_a_register_as_the_address() {
        let (mut p, mut m) = setup();
        m.load(6, "cd").unwrap();
        p.set_register(3, 6);
        p.instruction_load_reg(
            DecodedInstruction {
                opcode: Some(Opcode::LoadReg),
                field1: 0,
                field2: 1,
                field3: 3,
            },
            &m,
        );
        assert_eq!(p.register(1), 0xcd);
    }

    #[test]
    fn store_reg_uses_a_register_as_the_address() {
        let (mut p, mut m) = setup();
        p.set_register(1, 0x42);
        p.set_register(2, 8);
        p.instruction_store_reg(
            DecodedInstruction {
                opcode: Some(Opcode::StoreReg),
                field1: 0,
                field2: 1,
                field3: 2,
            },
            &mut m,
        );
        assert_eq!(m.read(8, 10), "42");
    }

    #[test]
    fn move_copies_between_registers() {
        let (mut p, _m) = setup();
        p.set_register(1, 0x77);
        p.instruction_move(DecodedInstruction {
            opcode: Some(Opcode::Move),
            field1: 0,
            field2: 1,
            field3: 2,
        });
        assert_eq!(p.register(2), 0x77);
    }
}
