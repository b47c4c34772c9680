pub mod registry_assembler;

pub use registry_assembler::assemble;
