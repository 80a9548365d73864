//! Choosing a project, either by id or from a numbered menu.
//!
//! The menu is plain text so it can be piped and scripted against:
//!
//! ```text
//! 6 maxlen
//! ================================================================================
//!  Projects available
//! ================================================================================
//! 1.  proj-a  111111111111  Project Alpha
//! 2. *proj-b  222222222222  Project Beta
//! ================================================================================
//! Choose a project number: [1-2]:
//! ```

use std::io::{BufRead, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use crate::error::{Error, Result};
use crate::project::ProjectRecord;

const RULE: &str =
    "================================================================================";

/// Marker printed in front of the active project
pub const CURRENT_MARKER: char = '*';

/// How the menu is decorated on top of its text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuStyle {
    /// Print the active project's row in color
    pub highlight_current: bool,
}

/// Finds the project whose id matches `project_id` exactly.
pub fn find_project<'a>(
    projects: &'a [ProjectRecord],
    project_id: &str,
) -> Option<&'a ProjectRecord> {
    projects.iter().find(|p| p.project_id == project_id)
}

fn max_width<F>(projects: &[ProjectRecord], field: F) -> usize
where
    F: Fn(&ProjectRecord) -> &str,
{
    projects
        .iter()
        .map(|p| field(p).chars().count())
        .max()
        .unwrap_or(0)
}

fn format_row(
    number: usize,
    project: &ProjectRecord,
    is_current: bool,
    id_width: usize,
    number_width: usize,
) -> String {
    let marker = if is_current { CURRENT_MARKER } else { ' ' };
    format!(
        "{number}. {marker}{:<id_width$} {:<number_width$} {}",
        project.project_id, project.project_number, project.name
    )
}

/// Writes the numbered project menu.
///
/// Rows are numbered from 1 in the order given. Ids and numbers are padded
/// to one more than the widest value in their column.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_menu<W: Write>(
    out: &mut W,
    projects: &[ProjectRecord],
    current: Option<&str>,
    style: MenuStyle,
) -> Result<()> {
    let id_width = max_width(projects, |p| p.project_id.as_str());
    let number_width = max_width(projects, |p| p.project_number.as_str());

    writeln!(out, "{id_width} maxlen")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, " Projects available")?;
    writeln!(out, "{RULE}")?;

    for (index, project) in projects.iter().enumerate() {
        let is_current = current == Some(project.project_id.as_str());
        let row = format_row(index + 1, project, is_current, id_width + 1, number_width + 1);

        if is_current && style.highlight_current {
            queue!(
                out,
                SetForegroundColor(Color::Green),
                Print(row),
                ResetColor,
                Print("\n")
            )?;
        } else {
            writeln!(out, "{row}")?;
        }
    }

    writeln!(out, "{RULE}")?;
    out.flush()?;
    Ok(())
}

/// Prompts until a number between 1 and `count` is entered.
///
/// Returns the 1-based choice. Anything else is answered with `Invalid input`
/// and the prompt is shown again.
///
/// # Errors
///
/// Returns [`Error::InputClosed`] if `input` reaches end of file, or an IO
/// error if reading or writing fails.
pub fn prompt_for_choice<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    count: usize,
) -> Result<usize> {
    loop {
        write!(out, "Choose a project number: [1-{count}]: ")?;
        out.flush()?;

        let mut line = Vec::new();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        match String::from_utf8_lossy(&line).trim().parse::<usize>() {
            Ok(choice) if (1..=count).contains(&choice) => return Ok(choice),
            _ => writeln!(out, "Invalid input")?,
        }
    }
}
