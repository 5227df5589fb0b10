use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a record and print its offset and on-disk size
    Write {
        /// The value to store (optional; reads from stdin if not provided)
        value: Option<String>,
    },

    /// Read the record at an offset
    Read {
        /// Start offset, as printed by `write`
        offset: u64,

        /// On-disk size (`csize`), as printed by `write`
        size: u64,
    },

    /// Find the most recent fixed-width slot containing a byte string
    Find {
        /// Slot width (e.g. `64`, `1k`)
        #[arg(value_name = "SLOT_SIZE")]
        slot_size: String,

        /// Text to look for inside each slot
        needle: String,
    },

    /// Pad the file to the next alignment boundary
    Pad,

    /// Get current state of the record file
    Info,
}
