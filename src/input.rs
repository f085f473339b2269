use crate::error::TriageError;
use std::fs::File;
use std::io::{self, BufReader, Read};

/// Upper bound on the bytes read from one input (16 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 16 * 1024 * 1024;

/// Read a log file, or stdin when `source` is `-`, into memory.
pub fn read_input(source: &str, max_bytes: u64) -> Result<String, TriageError> {
    if source == "-" {
        let stdin = io::stdin();
        let locked = stdin.lock();
        read_from(locked, max_bytes)
    } else {
        let f = File::open(source)?;
        read_from(BufReader::new(f), max_bytes)
    }
}

/// Read at most `max_bytes` from `reader` and decode it as UTF-8.
///
/// Invalid byte sequences are dropped rather than replaced, so a stray
/// Latin-1 byte in a log does not leave `\u{FFFD}` markers in messages.
pub fn read_from<R: Read>(reader: R, max_bytes: u64) -> Result<String, TriageError> {
    let mut buf = Vec::new();
    reader.take(max_bytes.saturating_add(1)).read_to_end(&mut buf)?;
    if buf.len() as u64 > max_bytes {
        return Err(TriageError::InputTooLarge { limit: max_bytes });
    }
    Ok(decode_lossy(&buf))
}

fn decode_lossy(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                // valid_up_to() marks a verified UTF-8 prefix
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match e.error_len() {
                    Some(bad) => bytes = &rest[bad..],
                    // truncated sequence at end of input
                    None => return out,
                }
            }
        }
    }
}
