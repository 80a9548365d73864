//! Project records parsed from the provider's project listing.
//!
//! The listing is loosely formatted text, one project per line in the shape
//! `<project id> [<name tokens>...] <project number>`. Lines that do not fit
//! that shape (the column header, blank lines, notices) are skipped.

use itertools::Itertools;

/// One project as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub project_id: String,
    pub project_number: String,
    pub name: String,
}

impl ProjectRecord {
    /// Parses one line of listing output.
    ///
    /// The first whitespace separated token is the project id, the last is the
    /// project number and everything in between, joined with single spaces, is
    /// the display name. Returns `None` when there are fewer than two tokens or
    /// the last token is not made up entirely of ASCII digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use gcloud_choose_project::project::ProjectRecord;
    ///
    /// let record = ProjectRecord::parse_line("proj-a  Project   Alpha  111111111111").unwrap();
    /// assert_eq!(record.project_id, "proj-a");
    /// assert_eq!(record.name, "Project Alpha");
    /// assert_eq!(record.project_number, "111111111111");
    ///
    /// assert!(ProjectRecord::parse_line("PROJECT_ID NAME PROJECT_NUMBER").is_none());
    /// ```
    pub fn parse_line(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (project_id, rest) = tokens.split_first()?;
        let (project_number, name_tokens) = rest.split_last()?;

        if !is_project_number(project_number) {
            return None;
        }

        Some(Self {
            project_id: (*project_id).to_string(),
            project_number: (*project_number).to_string(),
            name: name_tokens.iter().join(" "),
        })
    }
}

fn is_project_number(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// Parses the full listing output, keeping the order of the lines.
pub fn parse_project_list(output: &str) -> Vec<ProjectRecord> {
    output.lines().filter_map(ProjectRecord::parse_line).collect()
}

/// Sorts records by project id. Records with equal ids keep their order.
pub fn sort_by_id(records: Vec<ProjectRecord>) -> Vec<ProjectRecord> {
    records
        .into_iter()
        .sorted_by(|a, b| a.project_id.cmp(&b.project_id))
        .collect()
}
