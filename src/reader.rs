//! Line acquisition from the shell's input stream.

use std::io::BufRead;

/// Reads one line from `input`, stripping the trailing newline and a
/// preceding carriage return, if any.
///
/// Returns `Ok(None)` once the stream is exhausted, which is the shell's
/// signal to stop. A final line with no trailing newline is still returned
/// as a line; the `None` follows on the next call. Lines may be arbitrarily
/// long, the backing buffer grows as needed.
pub fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
