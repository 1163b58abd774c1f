//! Bundled default projects.
//!
//! The terminal fallback of the resolution pipeline. When the cache, the
//! remote endpoints and the local project directory all come up empty, this
//! compiled-in list keeps the UI from ever rendering an empty carousel.

use crate::project::{Metrics, Project};

fn metrics(pairs: &[(&str, &str)]) -> Metrics {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// The compiled-in project list. Always non-empty.
#[must_use]
pub fn bundled_projects() -> Vec<Project> {
    vec![
        Project {
            id: "agency-portfolio".to_string(),
            name: "Agency Portfolio".to_string(),
            tagline: "Modern creative agency site".to_string(),
            description: "Full-stack portfolio with headless CMS".to_string(),
            url: "https://cod3black.dev".to_string(),
            tech_stack: strings(&["Next.js", "Sanity", "Tailwind"]),
            metrics: metrics(&[("visitors", "12K/mo"), ("score", "98")]),
            tags: strings(&["web", "portfolio"]),
            order: 1,
        },
        Project {
            id: "ecommerce".to_string(),
            name: "E-Commerce Platform".to_string(),
            tagline: "Full-stack shop with payments".to_string(),
            description: "Complete e-commerce solution with Stripe".to_string(),
            url: "https://shop.example.com".to_string(),
            tech_stack: strings(&["React", "Node.js", "Stripe"]),
            metrics: metrics(&[("visitors", "45K/mo"), ("revenue", "$50K")]),
            tags: strings(&["web", "e-commerce"]),
            order: 2,
        },
        Project {
            id: "ai-dashboard".to_string(),
            name: "AI Analytics".to_string(),
            tagline: "ML insights visualization".to_string(),
            description: "Real-time ML model monitoring".to_string(),
            url: "https://ai-dash.example.com".to_string(),
            tech_stack: strings(&["Python", "FastAPI", "React"]),
            metrics: metrics(&[("models", "15"), ("uptime", "99.9%")]),
            tags: strings(&["ai", "dashboard"]),
            order: 3,
        },
        Project {
            id: "mobile-app".to_string(),
            name: "Fitness App".to_string(),
            tagline: "Cross-platform workout tracker".to_string(),
            description: "Mobile app for fitness tracking".to_string(),
            url: "https://fitapp.example.com".to_string(),
            tech_stack: strings(&["React Native", "Firebase"]),
            metrics: metrics(&[("downloads", "10K"), ("rating", "4.8")]),
            tags: strings(&["mobile", "health"]),
            order: 4,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_list_is_never_empty() {
        assert!(!bundled_projects().is_empty());
    }

    #[test]
    fn bundled_projects_satisfy_the_invariant() {
        for project in bundled_projects() {
            assert!(!project.id.is_empty());
            assert!(!project.name.is_empty());
            assert!(!project.tech_stack.is_empty());
            assert!(!project.metrics.is_empty());
            assert!(!project.tags.is_empty());
        }
    }

    #[test]
    fn bundled_ids_are_unique() {
        let projects = bundled_projects();
        let mut ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn bundled_projects_are_already_sorted() {
        let projects = bundled_projects();
        let orders: Vec<i64> = projects.iter().map(|p| p.order).collect();
        let mut sorted = orders.clone();
        sorted.sort_unstable();
        assert_eq!(orders, sorted);
    }
}
