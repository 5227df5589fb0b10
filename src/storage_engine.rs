pub mod constants;

mod buffer;

pub(crate) mod codec;

mod error;
pub use error::{RecordFileError, RecordFileErrorKind, Result};

mod file_lock;
pub use file_lock::FileLock;

pub(crate) mod padding;

mod record_file;
pub use record_file::RecordFile;

mod record_ptr;
pub use record_ptr::RecordPtr;

mod slot_search;
pub use slot_search::{FindOutcome, FnSearch, Slot, SlotSearch};

pub mod traits;
