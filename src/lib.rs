//! Choose the active gcloud project.
//!
//! A thin wrapper over the gcloud CLI: it lists the projects the account can
//! see, lets the user pick one (by id on the command line, or from a numbered
//! menu) and makes it the active project.
//!
//! # Architecture
//!
//! - [`provider`]: runs `projects list`, queries and sets the active project
//! - [`project`]: parses the listing into [`project::ProjectRecord`]s
//! - [`selection`]: direct lookup, the menu and the number prompt
//! - [`pipeline`]: composes the above into one run
//! - [`execution`]: the [`execution::Runner`] seam over sub processes
//!
//! # Examples
//!
//! ```bash
//! # Interactive mode - shows the numbered menu
//! gcp-choose
//!
//! # Select a project directly
//! gcp-choose my-project-id
//!
//! # Use a gcloud outside of PATH
//! gcp-choose --gcloud-path ~/google-cloud-sdk/bin/gcloud
//! ```

pub mod cli_args;
pub mod config;
pub mod error;
pub mod execution;
pub mod pipeline;
pub mod project;
pub mod provider;
pub mod selection;
