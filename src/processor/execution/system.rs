use crate::processor::{Processor, Status};

impl Processor {
    /// `0x0 Halt`: sets `sr = Halt`, no other effect.
    pub(crate) fn instruction_halt(&mut self) {
        self.set_status(Status::Halt);
    }
}
