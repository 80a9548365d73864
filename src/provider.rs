//! The three conversations with the provider CLI: list, query current, set.

use log::{debug, info};

use crate::config::{CURRENT_PROJECT_ARGS, LIST_PROJECTS_ARGS, SET_PROJECT_ARGS};
use crate::error::{Error, Result};
use crate::execution::Runner;
use crate::project::{parse_project_list, ProjectRecord};

/// Provider CLI invoked through a [`Runner`].
pub struct Gcloud<R: Runner> {
    binary: String,
    runner: R,
}

impl<R: Runner> Gcloud<R> {
    pub fn new(binary: String, runner: R) -> Self {
        Self { binary, runner }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Lists the projects available to the active account.
    ///
    /// Lines that do not parse into a [`ProjectRecord`] are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListProjects`] with the captured stderr if the listing
    /// exits non-zero, or [`Error::SubProcess`] if it could not be run.
    pub fn list_projects(&self) -> Result<Vec<ProjectRecord>> {
        let output = self.runner.run(&self.binary, &LIST_PROJECTS_ARGS)?;

        if !output.success {
            return Err(Error::list_projects(&self.binary, output.stderr));
        }

        let projects = parse_project_list(&output.stdout);
        debug!("Parsed {} projects from listing", projects.len());
        Ok(projects)
    }

    /// Returns the active project, if the provider reports one.
    ///
    /// This is best effort: any failure is logged and treated as no project.
    pub fn current_project(&self) -> Option<String> {
        let output = match self.runner.run(&self.binary, &CURRENT_PROJECT_ARGS) {
            Ok(output) => output,
            Err(e) => {
                debug!("Could not query current project: {}", e);
                return None;
            }
        };

        if !output.success {
            debug!("Current project query failed: {}", output.stderr.trim());
            return None;
        }

        let current = output.stdout.trim();
        if current.is_empty() {
            None
        } else {
            Some(current.to_string())
        }
    }

    /// Makes `project_id` the active project.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SetProject`] with the captured stderr if the provider
    /// exits non-zero, or [`Error::SubProcess`] if it could not be run.
    pub fn set_project(&self, project_id: &str) -> Result<()> {
        let mut args: Vec<&str> = SET_PROJECT_ARGS.to_vec();
        args.push(project_id);

        let output = self.runner.run(&self.binary, &args)?;

        if output.success {
            info!("Active project is now `{}`", project_id);
            Ok(())
        } else {
            Err(Error::set_project(project_id, output.stderr))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::execution::CommandOutput;

    struct ScriptedRunner {
        responses: RefCell<VecDeque<Result<CommandOutput>>>,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl ScriptedRunner {
        fn new(responses: Vec<Result<CommandOutput>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                calls: RefCell::new(vec![]),
            }
        }
    }

    impl Runner for ScriptedRunner {
        fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
            let mut call = vec![program.to_string()];
            call.extend(args.iter().map(ToString::to_string));
            self.calls.borrow_mut().push(call);
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("unexpected command")
        }
    }

    fn ok(stdout: &str) -> Result<CommandOutput> {
        Ok(CommandOutput {
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        })
    }

    fn failed(stderr: &str) -> Result<CommandOutput> {
        Ok(CommandOutput {
            success: false,
            stdout: String::new(),
            stderr: stderr.to_string(),
        })
    }

    #[test]
    fn test_list_projects_parses_output() {
        let runner = ScriptedRunner::new(vec![ok(
            "PROJECT_ID NAME PROJECT_NUMBER\nproj-a Project Alpha 111111111111\n",
        )]);
        let gcloud = Gcloud::new("gcloud".to_string(), &runner);

        let projects = gcloud.list_projects().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project_id, "proj-a");
        assert_eq!(runner.calls.borrow()[0], vec!["gcloud", "projects", "list"]);
    }

    #[test]
    fn test_list_projects_failure_carries_stderr() {
        let runner = ScriptedRunner::new(vec![failed("ERROR: (gcloud) not authenticated")]);
        let gcloud = Gcloud::new("gcloud".to_string(), &runner);

        match gcloud.list_projects() {
            Err(Error::ListProjects { stderr, .. }) => {
                assert_eq!(stderr, "ERROR: (gcloud) not authenticated");
            }
            other => panic!("Expected ListProjects error, got {other:?}"),
        }
    }

    #[test]
    fn test_current_project_trims_output() {
        let runner = ScriptedRunner::new(vec![ok("proj-b\n")]);
        let gcloud = Gcloud::new("gcloud".to_string(), &runner);

        assert_eq!(gcloud.current_project(), Some("proj-b".to_string()));
        assert_eq!(
            runner.calls.borrow()[0],
            vec!["gcloud", "config", "list", "--format", "value(core.project)"]
        );
    }

    #[test]
    fn test_current_project_is_best_effort() {
        let runner = ScriptedRunner::new(vec![
            failed("boom"),
            ok("\n"),
            Err(Error::sub_process(
                "gcloud",
                std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            )),
        ]);
        let gcloud = Gcloud::new("gcloud".to_string(), &runner);

        assert_eq!(gcloud.current_project(), None);
        assert_eq!(gcloud.current_project(), None);
        assert_eq!(gcloud.current_project(), None);
    }

    #[test]
    fn test_set_project_passes_project_id() {
        let runner = ScriptedRunner::new(vec![ok("")]);
        let gcloud = Gcloud::new("/opt/gcloud".to_string(), &runner);

        gcloud.set_project("proj-a").unwrap();
        assert_eq!(
            runner.calls.borrow()[0],
            vec!["/opt/gcloud", "config", "set", "project", "proj-a"]
        );
    }

    #[test]
    fn test_set_project_failure() {
        let runner = ScriptedRunner::new(vec![failed("denied")]);
        let gcloud = Gcloud::new("gcloud".to_string(), &runner);

        match gcloud.set_project("proj-a") {
            Err(Error::SetProject { project_id, stderr }) => {
                assert_eq!(project_id, "proj-a");
                assert_eq!(stderr, "denied");
            }
            other => panic!("Expected SetProject error, got {other:?}"),
        }
    }
}
