mod format_bytes;
pub use format_bytes::format_bytes;

mod parse_size;
pub use parse_size::parse_size;

mod verify_file_existence;
pub use verify_file_existence::verify_file_existence;
