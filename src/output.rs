//! Rendering of scan results to the terminal.
//!
//! Each annotation hit becomes one line: the tag left-justified to a
//! fixed width, the file path shown `~/`-relative when it sits under
//! the user's home directory, the 1-based line number, then the text.

use crate::scan::FileMatches;
use std::io;
use std::path::Path;
use termcolor::{Color, ColorSpec, WriteColor};

/// Minimum width of the tag column.
const TAG_WIDTH: usize = 7;

/// Write every hit in `result`, one line each, to `out`.
///
/// Colors go through the `WriteColor` sink, so a `NoColor` wrapper (or
/// a non-tty `ColorChoice`) produces the plain `tag path:line: text`
/// format unchanged.
pub fn write_result<W: WriteColor>(
    out: &mut W,
    result: &FileMatches,
    home: Option<&Path>,
) -> io::Result<()> {
    let name = display_path(&result.file, home);

    for todo in &result.todos {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{:<TAG_WIDTH$}", todo.tag)?;
        out.reset()?;
        write!(out, " ")?;

        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, "{name}")?;
        out.reset()?;
        write!(out, ":")?;

        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", todo.line)?;
        out.reset()?;

        writeln!(out, ": {}", todo.text)?;
    }

    Ok(())
}

/// Render a path `~/`-relative to `home` when possible.
fn display_path(file: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home {
        if let Ok(rel) = file.strip_prefix(home) {
            return format!("~/{}", rel.display());
        }
    }
    file.display().to_string()
}
