mod reader;
pub use reader::RecordReader;

mod writer;
pub use writer::RecordWriter;
