//! Navigation data model
//!
//! A navigation set is an ordered, immutable list of top-level items, each
//! with at most one flat list of children. It is loaded once and only read.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// A single navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Unique key across the whole navigation tree
    pub slug: String,

    /// Display label
    pub label: String,

    /// Link target (routing itself is handled by the host)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Child entries shown in the subnav flyout
    #[serde(default, alias = "items", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn new(slug: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            label: label.into(),
            href: None,
            children: Vec::new(),
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Validated, read-only navigation data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationSet {
    items: Vec<NavItem>,
}

impl NavigationSet {
    /// Build a navigation set, rejecting duplicate slugs, empty keys and
    /// trees deeper than two levels.
    pub fn new(items: Vec<NavItem>) -> Result<Self, CoreError> {
        let total = {
            let mut seen = HashSet::new();

            for (position, item) in items.iter().enumerate() {
                Self::check_item(item, position, &mut seen)?;

                for (child_position, child) in item.children.iter().enumerate() {
                    Self::check_item(child, child_position, &mut seen)?;
                    if let Some(grandchild) = child.children.first() {
                        return Err(CoreError::NavTooDeep {
                            slug: grandchild.slug.clone(),
                        });
                    }
                }
            }
            seen.len()
        };

        debug!(top_level = items.len(), total, "Navigation set validated");
        Ok(Self { items })
    }

    fn check_item<'a>(
        item: &'a NavItem,
        position: usize,
        seen: &mut HashSet<&'a str>,
    ) -> Result<(), CoreError> {
        if item.slug.trim().is_empty() {
            return Err(CoreError::EmptySlug { position });
        }
        if item.label.trim().is_empty() {
            return Err(CoreError::EmptyLabel {
                slug: item.slug.clone(),
            });
        }
        if !seen.insert(item.slug.as_str()) {
            return Err(CoreError::DuplicateSlug {
                slug: item.slug.clone(),
            });
        }
        Ok(())
    }

    /// Parse from a JSON array of items
    pub fn from_json_str(content: &str) -> Result<Self, CoreError> {
        let items: Vec<NavItem> =
            serde_json::from_str(content).map_err(|source| CoreError::JsonParse {
                path: "<inline>".into(),
                message: source.to_string(),
                source,
            })?;
        Self::new(items)
    }

    /// Load from a `.json`, `.yaml`/`.yml` or `.toml` file.
    ///
    /// TOML has no top-level arrays, so TOML files hold `[[items]]` tables.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let items: Vec<NavItem> = match extension.as_deref() {
            Some("json") => {
                serde_json::from_str(&content).map_err(|source| CoreError::JsonParse {
                    path: path.to_path_buf(),
                    message: source.to_string(),
                    source,
                })?
            }
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|source| CoreError::YamlParse {
                    path: path.to_path_buf(),
                    message: source.to_string(),
                    source,
                })?
            }
            Some("toml") => {
                #[derive(Deserialize)]
                struct TomlNavigation {
                    #[serde(default)]
                    items: Vec<NavItem>,
                }

                toml::from_str::<TomlNavigation>(&content)
                    .map_err(|source| CoreError::TomlParse {
                        path: path.to_path_buf(),
                        message: source.message().to_string(),
                        source,
                    })?
                    .items
            }
            _ => {
                return Err(CoreError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        Self::new(items)
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find a top-level item by slug (linear scan, the set is small)
    pub fn find(&self, slug: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.slug == slug)
    }

    /// Children of the top-level item `slug`, or an empty slice when the slug
    /// is unknown.
    pub fn children_of(&self, slug: &str) -> &[NavItem] {
        self.find(slug)
            .map(|item| item.children.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn learn_build() -> Vec<NavItem> {
        vec![
            NavItem::new("learn", "Learn").with_children(vec![
                NavItem::new("learn/a", "A"),
                NavItem::new("learn/b", "B"),
            ]),
            NavItem::new("build", "Build"),
        ]
    }

    #[test]
    fn test_children_lookup() {
        let nav = NavigationSet::new(learn_build()).unwrap();
        let slugs: Vec<_> = nav.children_of("learn").iter().map(|i| &i.slug).collect();
        assert_eq!(slugs, vec!["learn/a", "learn/b"]);
        assert!(nav.children_of("build").is_empty());
    }

    #[test]
    fn test_unknown_slug_is_empty() {
        let nav = NavigationSet::new(learn_build()).unwrap();
        assert!(nav.children_of("nope").is_empty());
        assert!(nav.find("learn/a").is_none(), "lookup is top-level only");
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let items = vec![
            NavItem::new("learn", "Learn")
                .with_children(vec![NavItem::new("build", "Nested build")]),
            NavItem::new("build", "Build"),
        ];
        let err = NavigationSet::new(items).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateSlug { slug } if slug == "build"));
    }

    #[test]
    fn test_depth_limit() {
        let items = vec![NavItem::new("learn", "Learn").with_children(vec![
            NavItem::new("learn/a", "A").with_children(vec![NavItem::new("learn/a/x", "X")]),
        ])];
        let err = NavigationSet::new(items).unwrap_err();
        assert!(matches!(err, CoreError::NavTooDeep { slug } if slug == "learn/a/x"));
    }

    #[test]
    fn test_empty_fields_rejected() {
        let err = NavigationSet::new(vec![NavItem::new(" ", "Blank")]).unwrap_err();
        assert!(matches!(err, CoreError::EmptySlug { position: 0 }));

        let err = NavigationSet::new(vec![NavItem::new("x", "")]).unwrap_err();
        assert!(matches!(err, CoreError::EmptyLabel { .. }));
    }

    #[test]
    fn test_items_alias_accepted() {
        let json = r#"[
            {"slug": "learn", "label": "Learn", "items": [{"slug": "learn/a", "label": "A"}]},
            {"slug": "build", "label": "Build", "href": "/build"}
        ]"#;
        let nav = NavigationSet::from_json_str(json).unwrap();
        assert_eq!(nav.len(), 2);
        assert_eq!(nav.children_of("learn").len(), 1);
        assert_eq!(nav.find("build").unwrap().href.as_deref(), Some("/build"));
    }
}
