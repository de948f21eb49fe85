//! MIPS pipeline simulator library.
//!
//! This crate implements a cycle-accurate simulator of the classic five-stage MIPS
//! pipeline with the following:
//! 1. **ISA:** A validated subset of MIPS I (`addiu`, `addu`, `subu`, `and`, `andi`, `nor`,
//!    `or`, `ori`, `xor`, `xori`, `sllv`, `srav`, `srlv`, `lw`, `sw`, `j`, `beq`) with
//!    encoders and a disassembler.
//! 2. **Clock:** A two-phase clock whose edges latch, then commit, every synchronous
//!    component, driven manually or by a timer.
//! 3. **Core:** Program counter, the IF/ID, ID/EX, EX/MEM and MEM/WB registers, the
//!    combinational control unit and ALU, and hazard handling that fails, stalls, or
//!    stalls and forwards.
//! 4. **Memory:** Program memory and sparse data memory behind clocked synchronizers.
//! 5. **Simulation:** Listing loader, configuration, run loop, and statistics.
//!
//! # Example
//!
//! ```
//! use pipesim_core::common::Register;
//! use pipesim_core::isa::{Function, Instruction, Opcode};
//! use pipesim_core::soc::ProgramMemory;
//! use pipesim_core::{Config, Simulator};
//!
//! let program: ProgramMemory = [
//!     Instruction::i_type(Opcode::Addiu, Register::T0, Register::Zero, 5),
//!     Instruction::i_type(Opcode::Addiu, Register::T1, Register::Zero, 3),
//!     Instruction::r_type(Function::Addu, Register::T2, Register::T0, Register::T1),
//! ]
//! .into_iter()
//! .collect::<Result<_, _>>()?;
//!
//! let mut sim = Simulator::new(&Config::default())?;
//! sim.processor.load_program(program);
//! let outcome = sim.run()?;
//!
//! assert_eq!(sim.processor.register(Register::T2), 8);
//! println!("{outcome}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Two-phase clock and its providers.
pub mod clock;
/// Common types and constants (registers, bubble sentinel, errors).
pub mod common;
/// Simulator configuration (defaults, JSON parsing, validation).
pub mod config;
/// Processor core (datapath, pipeline, control, ALU, lifecycle).
pub mod core;
/// Instruction set (opcodes, functions, instructions, disassembly).
pub mod isa;
/// Listing loader and run loop.
pub mod sim;
/// Program and data memories.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse JSON with `Config::from_json`.
pub use crate::config::Config;
/// The simulated processor; owns the clock and the datapath.
pub use crate::core::Processor;
/// Processor plus run loop; construct with `Simulator::new`.
pub use crate::sim::Simulator;
