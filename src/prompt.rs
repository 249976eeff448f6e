//! Interactive input for `add` without text and for `ed`.
//! Readers and writers are injected so the prompts can be driven in tests.

use std::io::{self, BufRead, Write};

/// Final values gathered for an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditInput {
    pub title: String,
    pub content: String,
}

/// Print `label` and read one line. `None` means end of input.
pub fn ask(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> io::Result<Option<String>> {
    out.write_all(label.as_bytes())?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

pub fn ask_content(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<String>> {
    ask(input, out, "Note:\n")
}

pub fn ask_edit(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<EditInput>> {
    let Some(title) = ask(input, out, "New title: ")? else {
        return Ok(None);
    };
    let Some(content) = ask_content(input, out)? else {
        return Ok(None);
    };
    Ok(Some(EditInput { title, content }))
}
