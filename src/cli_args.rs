//! Command-line argument parsing.

use clap::Parser;

use crate::pipeline::Request;
use crate::selection::MenuStyle;

/// Choose the active gcloud project.
///
/// With no project id a numbered menu of the available projects is shown.
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// The project id to select directly, skipping the menu.
    pub project_id: Option<String>,

    /// Path to the gcloud binary.
    ///
    /// If not provided, `$GCLOUD_CHOOSE_PROJECT_BINARY` is used, then `gcloud` from `PATH`.
    #[arg(long, short = 'g')]
    pub gcloud_path: Option<String>,

    /// Perform a dry run, which selects the project but does not set it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Don't color the row of the active project.
    #[arg(long, action)]
    pub no_color: bool,
}

impl Args {
    /// Builds the run request. `is_terminal` says whether stdout is a terminal,
    /// colors are only used when it is.
    pub fn to_request(&self, is_terminal: bool) -> Request {
        Request {
            project_id: self.project_id.clone(),
            dry_run: self.dry_run,
            style: MenuStyle {
                highlight_current: is_terminal && !self.no_color,
            },
        }
    }
}
