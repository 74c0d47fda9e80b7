// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional reachability checks for project images.

use std::time::Duration;

use ecomap_catalog::{CategorizedProjects, Category, Project};
use hashbrown::HashMap;

/// Checks whether image URLs answer with a success status.
///
/// Results are cached per URL so each image is requested at most once.
/// Relative paths and `data:` URIs are not requested and count as reachable.
#[derive(Debug)]
pub struct ImageProbe {
    agent: ureq::Agent,
    cache: HashMap<String, bool>,
}

impl Default for ImageProbe {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

impl ImageProbe {
    /// A probe with a per-request timeout.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            agent,
            cache: HashMap::new(),
        }
    }

    /// Returns `true` if `href` can be expected to load.
    pub fn is_reachable(&mut self, href: &str) -> bool {
        if !(href.starts_with("http://") || href.starts_with("https://")) {
            return true;
        }
        if let Some(&known) = self.cache.get(href) {
            return known;
        }
        let ok = match self.agent.get(href).call() {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(%href, error = %err, "image unreachable; using placeholder");
                false
            }
        };
        self.cache.insert(href.to_owned(), ok);
        ok
    }

    /// Return a copy of `categories` where unreachable images are cleared, so
    /// renderers fall back to the placeholder.
    pub fn resolve(&mut self, categories: &CategorizedProjects) -> CategorizedProjects {
        resolve_images(categories, |href| self.is_reachable(href))
    }
}

/// Rebuild `categories`, dropping image references that `reachable` rejects.
pub fn resolve_images<F>(categories: &CategorizedProjects, mut reachable: F) -> CategorizedProjects
where
    F: FnMut(&str) -> bool,
{
    categories
        .iter()
        .map(|(key, category)| {
            let projects = category.projects.iter().map(|p| Project {
                image: p.image.clone().filter(|href| reachable(href)),
                ..p.clone()
            });
            let resolved = Category {
                projects: projects.collect(),
                ..category.clone()
            };
            (key, resolved)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_images_are_cleared() {
        let cats: CategorizedProjects = [(
            "wallets",
            Category::new("Wallets", "blue").with_projects([
                Project::new("ok").with_image("https://img/ok.png"),
                Project::new("broken").with_image("https://img/broken.png"),
                Project::new("none"),
            ]),
        )]
        .into_iter()
        .collect();

        let out = resolve_images(&cats, |href| !href.contains("broken"));
        let images: Vec<_> = out
            .get("wallets")
            .unwrap()
            .projects
            .iter()
            .map(|p| p.image.as_deref())
            .collect();
        assert_eq!(images, [Some("https://img/ok.png"), None, None]);
        // The input is untouched.
        assert!(cats.get("wallets").unwrap().projects[1].image.is_some());
    }

    #[test]
    fn local_paths_are_not_requested() {
        let mut probe = ImageProbe::default();
        assert!(probe.is_reachable("/placeholder.svg"));
        assert!(probe.is_reachable("data:image/png;base64,AAAA"));
    }
}
