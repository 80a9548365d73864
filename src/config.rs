//! Provider binary resolution and the provider command lines.
//!
//! Every external invocation the tool makes is spelled out here so the
//! textual contract with the provider CLI lives in one place.

/// Default provider binary, looked up on `PATH`
pub const DEFAULT_PROVIDER_BINARY: &str = "gcloud";

/// Environment variable that overrides the provider binary
pub const PROVIDER_BINARY_ENV: &str = "GCLOUD_CHOOSE_PROJECT_BINARY";

/// Arguments for listing the projects available to the account
pub const LIST_PROJECTS_ARGS: [&str; 2] = ["projects", "list"];

/// Arguments for printing the active project
pub const CURRENT_PROJECT_ARGS: [&str; 4] = ["config", "list", "--format", "value(core.project)"];

/// Arguments for setting the active project, the project id is appended
pub const SET_PROJECT_ARGS: [&str; 3] = ["config", "set", "project"];

/// Resolves the provider binary.
///
/// Uses the command line value if given, then the value of
/// [`PROVIDER_BINARY_ENV`], then [`DEFAULT_PROVIDER_BINARY`]. Shell
/// expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use gcloud_choose_project::config::get_provider_binary;
///
/// let binary = get_provider_binary(&Some("/opt/google-cloud-sdk/bin/gcloud".to_string()), None);
/// assert_eq!(binary, "/opt/google-cloud-sdk/bin/gcloud");
/// ```
pub fn get_provider_binary(binary_arg: &Option<String>, binary_env: Option<String>) -> String {
    let binary = match (binary_arg, binary_env) {
        (Some(binary), _) => binary.clone(),
        (None, Some(binary)) if !binary.is_empty() => binary,
        _ => DEFAULT_PROVIDER_BINARY.to_string(),
    };

    shellexpand::tilde(&binary).to_string()
}
