//! Text rendering for project cards.

use show_core::Project;
use show_source::Resolution;

/// How many tech-stack entries and metrics a compact card shows.
const CARD_TECH_LIMIT: usize = 4;
const CARD_METRIC_LIMIT: usize = 2;

/// Render the list header: owner line, tagline, count and origin.
pub fn render_header(owner: &str, tagline: &str, resolution: &Resolution) -> String {
    format!(
        "{owner}\n{tagline}\n{} projects ({})\n",
        resolution.projects.len(),
        resolution.origin
    )
}

/// Render a compact card, the carousel view of a project.
pub fn render_card(project: &Project) -> String {
    let mut lines = vec![format!("┌ {}", project.name)];
    if !project.tagline.is_empty() {
        lines.push(format!("│ {}", project.tagline));
    }
    if !project.tech_stack.is_empty() {
        let stack: Vec<&str> = project
            .tech_stack
            .iter()
            .take(CARD_TECH_LIMIT)
            .map(String::as_str)
            .collect();
        lines.push(format!("│ {}", stack.join(" · ")));
    }
    if !project.metrics.is_empty() {
        let metrics: Vec<String> = project
            .metrics
            .iter()
            .take(CARD_METRIC_LIMIT)
            .map(|(key, value)| format!("{key} {value}"))
            .collect();
        lines.push(format!("│ {}", metrics.join(" · ")));
    }
    if project.url.is_empty() {
        lines.push(format!("└ [{}]", project.id));
    } else {
        lines.push(format!("└ [{}] {}", project.id, project.url));
    }
    lines.join("\n")
}

/// Render the full detail view of a project.
pub fn render_detail(project: &Project) -> String {
    let mut out = render_card(project);
    if !project.description.is_empty() {
        out.push_str("\n\n");
        out.push_str(&project.description);
    }
    if project.metrics.len() > CARD_METRIC_LIMIT {
        out.push('\n');
        for (key, value) in project.metrics.iter().skip(CARD_METRIC_LIMIT) {
            out.push_str(&format!("\n{key}: {value}"));
        }
    }
    if !project.tags.is_empty() {
        out.push_str(&format!("\n\ntags: {}", project.tags.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use show_core::{Metrics, bundled_projects};
    use show_source::Origin;

    use super::*;

    #[test]
    fn card_shows_name_id_and_url() {
        let project = &bundled_projects()[0];
        let card = render_card(project);
        assert!(card.contains("Agency Portfolio"));
        assert!(card.contains("[agency-portfolio]"));
        assert!(card.contains("https://cod3black.dev"));
    }

    #[test]
    fn card_limits_tech_stack_entries() {
        let mut project = bundled_projects()[0].clone();
        project.tech_stack = (0..10).map(|i| format!("tech{i}")).collect();
        let card = render_card(&project);
        assert!(card.contains("tech3"));
        assert!(!card.contains("tech4"));
    }

    #[test]
    fn card_omits_empty_sections() {
        let project = Project {
            id: "bare".to_string(),
            name: "Bare".to_string(),
            ..Project::default()
        };
        let card = render_card(&project);
        assert_eq!(card, "┌ Bare\n└ [bare]");
    }

    #[test]
    fn detail_includes_description_and_overflow_metrics() {
        let mut project = bundled_projects()[0].clone();
        project.metrics = Metrics::from([
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
            ("c".to_string(), "3".to_string()),
        ]);
        let detail = render_detail(&project);
        assert!(detail.contains("Full-stack portfolio with headless CMS"));
        assert!(detail.contains("c: 3"));
        assert!(detail.contains("tags: web, portfolio"));
    }

    #[test]
    fn header_names_the_origin() {
        let resolution = Resolution {
            origin: Origin::Bundled,
            projects: bundled_projects(),
        };
        let header = render_header("Showcase", "Building Digital Excellence", &resolution);
        assert!(header.contains("4 projects (bundled)"));
    }
}
