use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Captured result of a finished sub process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external programs to completion and captures what they print.
pub trait Runner {
    /// Runs `program` with `args`, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the program could not be started or waited on.
    /// A program that runs and exits non-zero is not an error here, see
    /// [`CommandOutput::success`].
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

impl<R: Runner + ?Sized> Runner for &R {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        (**self).run(program, args)
    }
}

/// [`Runner`] backed by real sub processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        debug!("Executing `{} {}`", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| Error::sub_process(program, e))?;

        debug!("`{}` exited with {}", program, output.status);

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
