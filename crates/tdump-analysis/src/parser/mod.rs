//! Line-level parsing: header recognition, state keywords, and the
//! order-sensitive thread assembler.

pub mod assembler;
pub mod header;
pub mod state;

pub use assembler::ThreadAssembler;
pub use header::{parse_header, HeaderFormat, ThreadStub};
