mod cursor;
mod memory_reader;
mod range_reader;
mod seek_reader;

pub use cursor::ByteCursor;
pub use memory_reader::MemoryReader;
pub use range_reader::{read_u16_be, read_u16_le, read_u32_be, read_u32_le, RangeReader};
pub use seek_reader::{ReadSeek, SeekReader};
