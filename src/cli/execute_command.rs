use crate::cli::{Cli, Commands};
use bplus_writer::{
    RecordFile, Result,
    storage_engine::constants::{ALIGN, WRITE_STREAM_BUFFER_SIZE},
    traits::{RecordReader, RecordWriter},
    utils::{format_bytes, parse_size},
};
use std::io::{self, IsTerminal, Read, Write};
use std::process::ExitCode;

/// Executes a parsed CLI command against the record file.
///
/// Storage failures are returned to the caller; usage problems (missing
/// value, bad slot size) and a `find` miss are reported here and mapped to
/// a failing exit code.
pub fn execute_command(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Commands::Write { value } => {
            let payload = match value {
                Some(value) => value.as_bytes().to_vec(),
                None if !io::stdin().is_terminal() && std::env::var("FORCE_NO_TTY").is_err() => {
                    let mut buffer = Vec::with_capacity(WRITE_STREAM_BUFFER_SIZE);
                    if let Err(err) = io::stdin().lock().read_to_end(&mut buffer) {
                        eprintln!("Failed to read stdin: {}", err);
                        return Ok(ExitCode::FAILURE);
                    }
                    buffer
                }
                None => {
                    eprintln!("Error: No value provided and stdin is empty.");
                    return Ok(ExitCode::FAILURE);
                }
            };

            let mut storage = RecordFile::open(&cli.storage)?;
            match storage.write(&payload)? {
                Some(ptr) => println!(
                    "offset={} size={} csize={}{}",
                    ptr.offset,
                    ptr.size,
                    ptr.csize,
                    if ptr.is_compressed() { " (compressed)" } else { "" }
                ),
                None => println!("Empty value; padded to offset {}", storage.filesize()),
            }
            storage.close()?;
        }

        Commands::Read { offset, size } => {
            let mut storage = RecordFile::open_existing(&cli.storage)?;
            let record = storage.read(*offset, *size)?;
            storage.close()?;

            print_record(&record);
        }

        Commands::Find { slot_size, needle } => {
            let slot_size = match parse_size(slot_size) {
                Ok(size) if size > 0 => size,
                Ok(_) => {
                    eprintln!("Error: Slot size must be greater than zero.");
                    return Ok(ExitCode::FAILURE);
                }
                Err(err) => {
                    eprintln!("{}", err);
                    return Ok(ExitCode::FAILURE);
                }
            };

            let needle = needle.as_bytes();
            let mut storage = RecordFile::open_existing(&cli.storage)?;
            let outcome = storage.find_with(
                slot_size,
                |slot| needle.is_empty() || slot.bytes.windows(needle.len()).any(|w| w == needle),
                |_, _| Ok(()),
            )?;
            storage.close()?;

            match outcome.matched() {
                Some(slot) => {
                    println!("offset={} size={}", slot.offset, slot.bytes.len());
                    print_record(&slot.bytes);
                }
                None => {
                    eprintln!(
                        "No {}-byte slot contains '{}'",
                        slot_size,
                        String::from_utf8_lossy(needle)
                    );
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Commands::Pad => {
            let mut storage = RecordFile::open(&cli.storage)?;
            let padding = storage.pad()?;
            println!("Padded {} bytes; file size {}", padding, storage.filesize());
            storage.close()?;
        }

        Commands::Info => {
            let storage = RecordFile::open_existing(&cli.storage)?;
            let filesize = storage.filesize();

            println!("\n{:=^50}", " RECORD FILE INFO ");
            println!("{:<25} {:?}", "RECORD FILE:", cli.storage);
            println!("{:-<50}", ""); // Separator

            println!("{:<25} {}", "TOTAL SIZE:", format_bytes(filesize));
            println!("{:<25} {} bytes", "ALIGNMENT:", ALIGN);
            println!("{:<25} {}", "ALIGNED BLOCKS:", filesize.div_ceil(ALIGN));
            println!(
                "{:<25} {}",
                "ALIGNED TAIL:",
                if filesize.is_multiple_of(ALIGN) { "yes" } else { "no" }
            );

            println!("{:=<50}", ""); // Footer
            storage.close()?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Writes a record to stdout: raw bytes when piped, lossy text plus a
/// newline on a terminal.
fn print_record(bytes: &[u8]) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let result = if stdout.is_terminal() {
        handle
            .write_all(String::from_utf8_lossy(bytes).as_bytes())
            .and_then(|_| handle.write_all(b"\n"))
    } else {
        handle.write_all(bytes)
    }
    .and_then(|_| handle.flush());

    if let Err(err) = result {
        eprintln!("Failed to write to stdout: {}", err);
    }
}
