//! One run of the tool: list, select, activate.

use std::io::{BufRead, Write};

use log::debug;

use crate::error::{Error, Result};
use crate::execution::Runner;
use crate::project::{sort_by_id, ProjectRecord};
use crate::provider::Gcloud;
use crate::selection::{find_project, prompt_for_choice, render_menu, MenuStyle};

/// What the user asked for on the command line.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Project to select without showing the menu
    pub project_id: Option<String>,
    /// Stop before setting the project
    pub dry_run: bool,
    pub style: MenuStyle,
}

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Activated(String),
    DryRun(String),
    /// The requested project is not in the listing. It is reported to the
    /// user, nothing is changed and the run still exits successfully.
    UnknownProject(String),
}

/// Runs the whole flow against `gcloud`, reading choices from `input` and
/// writing everything the user sees to `out`.
///
/// # Errors
///
/// Returns an error if listing or setting the project fails, if the menu
/// would be empty, or if the console can't be read or written.
pub fn run<R, I, W>(
    gcloud: &Gcloud<R>,
    request: &Request,
    input: &mut I,
    out: &mut W,
) -> Result<Outcome>
where
    R: Runner,
    I: BufRead,
    W: Write,
{
    let projects = gcloud.list_projects()?;

    let project_id = match &request.project_id {
        Some(project_id) => match find_project(&projects, project_id) {
            Some(project) => project.project_id.clone(),
            None => {
                writeln!(out, "Error: {project_id} is not a valid project")?;
                return Ok(Outcome::UnknownProject(project_id.clone()));
            }
        },
        None => choose_from_menu(gcloud, projects, request.style, input, out)?,
    };

    writeln!(out, "Selecting project: {project_id}")?;

    if request.dry_run {
        writeln!(out, "Dry run is specified, not setting the project.")?;
        return Ok(Outcome::DryRun(project_id));
    }

    gcloud.set_project(&project_id)?;
    Ok(Outcome::Activated(project_id))
}

fn choose_from_menu<R, I, W>(
    gcloud: &Gcloud<R>,
    projects: Vec<ProjectRecord>,
    style: MenuStyle,
    input: &mut I,
    out: &mut W,
) -> Result<String>
where
    R: Runner,
    I: BufRead,
    W: Write,
{
    if projects.is_empty() {
        return Err(Error::NoProjects {
            program: gcloud.binary().to_string(),
        });
    }

    let mut projects = sort_by_id(projects);
    let current = gcloud.current_project();
    debug!("Current project: {:?}", current);

    render_menu(out, &projects, current.as_deref(), style)?;
    let choice = prompt_for_choice(input, out, projects.len())?;

    Ok(projects.swap_remove(choice - 1).project_id)
}
