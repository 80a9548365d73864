use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error while trying to run `{} projects list`\n{}", .program, .stderr)]
    ListProjects { program: String, stderr: String },

    #[error("Error while setting project `{}`\n{}", .project_id, .stderr)]
    SetProject { project_id: String, stderr: String },

    #[error("Error with sub process `{}`: {}", .program, .original)]
    SubProcess {
        program: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Input was closed before a project was chosen.")]
    InputClosed,

    #[error("No projects were found. Does `{} projects list` return anything?", .program)]
    NoProjects { program: String },
}

impl Error {
    pub fn list_projects(program: &str, stderr: String) -> Self {
        Self::ListProjects {
            program: program.to_string(),
            stderr,
        }
    }

    pub fn set_project(project_id: &str, stderr: String) -> Self {
        Self::SetProject {
            project_id: project_id.to_string(),
            stderr,
        }
    }

    pub fn sub_process(program: &str, original: std::io::Error) -> Self {
        Self::SubProcess {
            program: program.to_string(),
            original,
        }
    }
}
