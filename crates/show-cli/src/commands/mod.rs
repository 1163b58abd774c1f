//! Command handlers for the `showcase` binary.

pub mod init;
pub mod list;
pub mod refresh;
pub mod share;
pub mod show;
pub mod visit;

use show_core::Project;

/// Find a project by id, falling back to a case-insensitive name match.
pub(crate) fn find_project<'a>(projects: &'a [Project], id: &str) -> anyhow::Result<&'a Project> {
    if let Some(project) = projects.iter().find(|p| p.id == id) {
        return Ok(project);
    }
    if let Some(project) = projects
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(id) || p.id.eq_ignore_ascii_case(id))
    {
        return Ok(project);
    }

    let known: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
    anyhow::bail!("no project '{id}' (known: {})", known.join(", "))
}

#[cfg(test)]
mod tests {
    use show_core::bundled_projects;

    use super::*;

    #[test]
    fn finds_by_exact_id() {
        let projects = bundled_projects();
        let found = find_project(&projects, "ecommerce").unwrap();
        assert_eq!(found.name, "E-Commerce Platform");
    }

    #[test]
    fn finds_by_name_case_insensitively() {
        let projects = bundled_projects();
        let found = find_project(&projects, "fitness app").unwrap();
        assert_eq!(found.id, "mobile-app");
    }

    #[test]
    fn unknown_id_lists_known_ids() {
        let projects = bundled_projects();
        let error = find_project(&projects, "nope").unwrap_err();
        assert!(error.to_string().contains("agency-portfolio"));
    }
}
