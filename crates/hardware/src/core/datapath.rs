//! Datapath.
//!
//! Owns every clocked component of the processor and applies the two clock phases
//! to them. It performs:
//! 1. **Falling Edge:** The control path (PC and the four stage registers) latches
//!    from the visible state, then commits.
//! 2. **Rising Edge:** The data path (program fetch, data memory access, register
//!    write-back) latches, then commits.
//! 3. **Views:** The control unit and ALU are computed on demand from visible state.
//!
//! All pending values of a phase are computed before any of them is stored, so no
//! component observes another component's update from the same edge.

use std::fmt;

use crate::clock::Polarity;
use crate::common::reg::Register;
use crate::core::arch::{ProgramCounter, RegisterFile};
use crate::core::pipeline::control::ControlUnit;
use crate::core::pipeline::hazards::resolve_operand;
use crate::core::pipeline::latches::{
    DecodeStageRegister, ExecuteStageRegister, FetchStageRegister, MemoryStageRegister,
};
use crate::core::pipeline::signals::{HazardMode, PcSource};
use crate::core::pipeline::stages;
use crate::core::pipeline::traits::ClockedComponent;
use crate::core::units::alu::ArithmeticLogicUnit;
use crate::isa::InstructionType;
use crate::soc::memory::{
    DataMemory, DataMemorySynchronizer, MemoryAccess, ProgramMemory, ProgramMemorySynchronizer,
};

/// Identifies a clocked component in observation events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// The program counter.
    ProgramCounter,
    /// The IF/ID register.
    FetchRegister,
    /// The ID/EX register.
    DecodeRegister,
    /// The EX/MEM register.
    ExecuteRegister,
    /// The MEM/WB register.
    MemoryRegister,
    /// The program memory synchronizer.
    ProgramSynchronizer,
    /// The data memory synchronizer.
    DataSynchronizer,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ProgramCounter => "program counter",
            Self::FetchRegister => "fetch register",
            Self::DecodeRegister => "decode register",
            Self::ExecuteRegister => "execute register",
            Self::MemoryRegister => "memory register",
            Self::ProgramSynchronizer => "program synchronizer",
            Self::DataSynchronizer => "data synchronizer",
        };
        f.write_str(name)
    }
}

/// What the control path decided on a falling edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlPathReport {
    /// The PC and fetch register held because of a data hazard.
    pub stalled: bool,
    /// The fetch register was flushed by a taken branch.
    pub flushed: bool,
    /// The PC was loaded with a jump target.
    pub jumped: bool,
    /// Class of the instruction that entered ID/EX, if it was not a bubble.
    pub issued: Option<InstructionType>,
}

/// What the data path did on a rising edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DataPathReport {
    /// The PC pointed outside the program.
    pub out_of_bounds: Option<u32>,
    /// Data memory access performed.
    pub access: Option<MemoryAccess>,
    /// Register written back.
    pub written: Option<Register>,
    /// An instruction left the pipeline through MEM/WB.
    pub retired: bool,
}

/// The clocked components of the processor.
#[derive(Debug, Default)]
pub struct Datapath {
    mode: HazardMode,
    pub(crate) pc: ProgramCounter,
    pub(crate) fetch: FetchStageRegister,
    pub(crate) decode: DecodeStageRegister,
    pub(crate) execute: ExecuteStageRegister,
    pub(crate) memory: MemoryStageRegister,
    pub(crate) registers: RegisterFile,
    pub(crate) program_sync: ProgramMemorySynchronizer,
    pub(crate) data_sync: DataMemorySynchronizer,
}

impl Datapath {
    /// Creates a powered-on datapath with no program.
    pub fn new(mode: HazardMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Active hazard policy.
    pub const fn mode(&self) -> HazardMode {
        self.mode
    }

    pub(crate) const fn set_mode(&mut self, mode: HazardMode) {
        self.mode = mode;
    }

    /// The program counter.
    pub const fn pc(&self) -> &ProgramCounter {
        &self.pc
    }

    /// The IF/ID register.
    pub const fn fetch(&self) -> &FetchStageRegister {
        &self.fetch
    }

    /// The ID/EX register.
    pub const fn decode(&self) -> &DecodeStageRegister {
        &self.decode
    }

    /// The EX/MEM register.
    pub const fn execute(&self) -> &ExecuteStageRegister {
        &self.execute
    }

    /// The MEM/WB register.
    pub const fn memory(&self) -> &MemoryStageRegister {
        &self.memory
    }

    /// The register file.
    pub const fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    /// The program synchronizer.
    pub const fn program_sync(&self) -> &ProgramMemorySynchronizer {
        &self.program_sync
    }

    /// The data synchronizer.
    pub const fn data_sync(&self) -> &DataMemorySynchronizer {
        &self.data_sync
    }

    /// The loaded program.
    pub const fn program(&self) -> Option<&ProgramMemory> {
        self.program_sync.program()
    }

    /// The data memory.
    pub const fn data_memory(&self) -> &DataMemory {
        self.data_sync.memory()
    }

    /// The control unit.
    pub const fn control(&self) -> ControlUnit<'_> {
        ControlUnit::new(self)
    }

    /// The ALU.
    pub const fn alu(&self) -> ArithmeticLogicUnit<'_> {
        ArithmeticLogicUnit::new(self)
    }

    /// Value of `rt` for the instruction in execute, forwarded when enabled.
    ///
    /// This is both the ALU right operand (without `ALUSrc`) and the store value.
    pub fn rt_value(&self) -> u32 {
        let read_value = self.decode.state().read_value_2;
        if !self.mode.forwards() {
            return read_value;
        }
        resolve_operand(
            self.control().forward_b(),
            read_value,
            self.execute.state(),
            self.memory.state(),
        )
    }

    /// Returns `true` when all four stage registers hold bubbles.
    pub fn is_drained(&self) -> bool {
        self.fetch.has_bubble()
            && self.decode.has_bubble()
            && self.execute.has_bubble()
            && self.memory.has_bubble()
    }

    pub(crate) fn replace_program(&mut self, program: ProgramMemory) -> Option<ProgramMemory> {
        self.program_sync.replace_program(program)
    }

    pub(crate) fn data_memory_mut(&mut self) -> &mut DataMemory {
        self.data_sync.memory_mut()
    }

    /// Falling pre-edge: latches the PC and all stage registers.
    pub(crate) fn latch_control_path(&mut self) -> ControlPathReport {
        let control = self.control();
        let stalled = control.stall_pc();
        let flushed = control.flush_fetch();
        let jumped = !stalled && control.pc_source() == PcSource::Jump;

        let pc = stages::next_pc(self);
        let if_id = stages::fetch_stage(self);
        let id_ex = stages::decode_stage(self);
        let ex_mem = stages::execute_stage(self);
        let mem_wb = stages::mem_stage(self);

        let issued = (id_ex.instruction_address & 3 == 0)
            .then(|| id_ex.instruction.instruction_type());
        if stalled {
            tracing::debug!(hazards = %self.control().check_hazard(), "pipeline stalled");
        }
        if flushed {
            tracing::debug!(dest = format_args!("{pc:#010x}"), "branch taken, fetch flushed");
        }

        self.pc.latch(pc);
        self.fetch.latch(if_id);
        self.decode.latch(id_ex);
        self.execute.latch(ex_mem);
        self.memory.latch(mem_wb);

        ControlPathReport {
            stalled,
            flushed,
            jumped,
            issued,
        }
    }

    /// Rising pre-edge: fetches, accesses data memory, and writes back.
    pub(crate) fn latch_data_path(&mut self) -> DataPathReport {
        let retired = !self.memory.has_bubble();
        let out_of_bounds = self.program_sync.change_state(self.pc.address());
        let access = self.data_sync.change_state(self.execute.state());
        let written = stages::wb_stage(self);
        DataPathReport {
            out_of_bounds,
            access,
            written,
            retired,
        }
    }

    fn components_mut(&mut self) -> [(Component, &mut dyn ClockedComponent); 7] {
        [
            (Component::ProgramCounter, &mut self.pc as &mut dyn ClockedComponent),
            (Component::FetchRegister, &mut self.fetch as &mut dyn ClockedComponent),
            (Component::DecodeRegister, &mut self.decode as &mut dyn ClockedComponent),
            (Component::ExecuteRegister, &mut self.execute as &mut dyn ClockedComponent),
            (Component::MemoryRegister, &mut self.memory as &mut dyn ClockedComponent),
            (Component::ProgramSynchronizer, &mut self.program_sync as &mut dyn ClockedComponent),
            (Component::DataSynchronizer, &mut self.data_sync as &mut dyn ClockedComponent),
        ]
    }

    /// Post-edge: commits every component built for `polarity`.
    ///
    /// # Returns
    ///
    /// The components whose visible value changed.
    pub(crate) fn change_outputs(&mut self, polarity: Polarity) -> Vec<Component> {
        self.components_mut()
            .into_iter()
            .filter(|(_, clocked)| clocked.polarity() == polarity)
            .filter_map(|(component, clocked)| clocked.change_outputs().then_some(component))
            .collect()
    }

    /// Returns every component to power-on state and clears data memory.
    ///
    /// The program and the hazard mode are kept.
    pub(crate) fn reset(&mut self) {
        for (_, clocked) in self.components_mut() {
            clocked.reset();
        }
        self.registers.reset();
        self.data_sync.memory_mut().clear();
    }
}
