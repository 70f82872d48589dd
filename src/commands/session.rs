//! The interactive menu loop over any line-oriented reader and writer.

use super::{Command, CommandProcessor, Outcome, MENU, UNKNOWN_COMMAND};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Run the menu until "close" or end of input.
///
/// Lines are decoded lossily, so bytes that are not valid UTF-8 end up in a
/// rejected command instead of ending the session.
///
/// # Errors
///
/// Only I/O failures of `reader` or `writer` are returned.
pub fn run_session<R: BufRead, W: Write>(
    processor: &mut CommandProcessor,
    mut reader: R,
    mut writer: W,
) -> io::Result<()> {
    writeln!(writer, "{}", MENU)?;

    loop {
        let Some(key) = read_line(&mut reader, &mut writer, "Waiting for command: ")? else {
            break;
        };

        if key.trim().is_empty() {
            writeln!(writer, "{}", MENU)?;
            continue;
        }

        let Some(command) = Command::from_key(&key) else {
            writeln!(writer, "{}", UNKNOWN_COMMAND)?;
            continue;
        };

        let input = match command.prompt() {
            Some(prompt) => match read_line(&mut reader, &mut writer, prompt)? {
                Some(line) => line,
                None => break,
            },
            None => String::new(),
        };

        match processor.execute(command, &input) {
            Outcome::Reply(msg) => writeln!(writer, "{}", msg)?,
            Outcome::Exit(msg) => {
                writeln!(writer, "{}", msg)?;
                break;
            }
        }
    }

    writer.flush()
}

/// Print `prompt` and read one line without its terminator; `None` on end of input.
fn read_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&buf);
    if matches!(line, Cow::Owned(_)) {
        warn!("input line was not valid UTF-8; invalid bytes replaced");
    }
    Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
}
