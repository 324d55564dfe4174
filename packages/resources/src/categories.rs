// ABOUTME: Content category reference data with a built-in fallback set
// ABOUTME: Resolves category and subcategory names for content screens

use cms_api::ApiClient;
use cms_core::{Category, ListParams, Subcategory};
use tracing::{debug, warn};

pub const NO_CATEGORY: &str = "No category";
pub const NO_SUBCATEGORY: &str = "No subcategory";

/// Public categories and their subcategories, loaded once per session
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
    is_fallback: bool,
}

impl CategoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            is_fallback: false,
        }
    }

    /// The built-in set used when the API cannot be reached
    pub fn seed() -> Self {
        Self {
            categories: seed_categories(),
            is_fallback: true,
        }
    }

    /// Load public categories, falling back to the seed set on any failure.
    ///
    /// A fallback is not reported as an error; check `is_fallback()`.
    pub async fn load(client: &ApiClient) -> Self {
        match client.get_public_categories(&ListParams::default()).await {
            Ok(categories) => {
                debug!("Loaded {} categories", categories.len());
                Self::new(categories)
            }
            Err(e) => {
                warn!("Could not load categories, using built-in set: {}", e);
                Self::seed()
            }
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn subcategory(&self, category_id: i64, subcategory_id: i64) -> Option<&Subcategory> {
        self.category(category_id)?
            .subcategories
            .iter()
            .find(|s| s.id == subcategory_id)
    }

    /// Subcategories of a category; empty when the category is unknown
    pub fn subcategories_of(&self, category_id: i64) -> &[Subcategory] {
        self.category(category_id)
            .map(|c| c.subcategories.as_slice())
            .unwrap_or_default()
    }

    pub fn category_name(&self, category_id: Option<i64>) -> &str {
        category_id
            .and_then(|id| self.category(id))
            .map_or(NO_CATEGORY, |c| c.name.as_str())
    }

    pub fn subcategory_name(&self, category_id: Option<i64>, subcategory_id: Option<i64>) -> &str {
        match (category_id, subcategory_id) {
            (Some(category_id), Some(subcategory_id)) => self
                .subcategory(category_id, subcategory_id)
                .map_or(NO_SUBCATEGORY, |s| s.name.as_str()),
            _ => NO_SUBCATEGORY,
        }
    }
}

fn seed_category(id: i64, name: &str, priority: i32, subcategories: &[(i64, &str, i32)]) -> Category {
    Category {
        id,
        name: name.to_string(),
        description: None,
        is_active: true,
        priority,
        created_at: None,
        updated_at: None,
        subcategories: subcategories
            .iter()
            .map(|(sub_id, sub_name, sub_priority)| Subcategory {
                id: *sub_id,
                name: sub_name.to_string(),
                description: None,
                is_active: true,
                priority: *sub_priority,
                category_id: id,
                category: None,
                created_at: None,
                updated_at: None,
            })
            .collect(),
    }
}

pub fn seed_categories() -> Vec<Category> {
    vec![
        seed_category(
            1,
            "Frontend Development",
            90,
            &[(1, "Frontend", 85), (2, "Backend", 80), (3, "Full Stack", 75)],
        ),
        seed_category(2, "Database", 85, &[(4, "SQL", 90), (5, "NoSQL", 70), (6, "ORM", 65)]),
        seed_category(
            3,
            "DevOps",
            80,
            &[(7, "Docker", 85), (8, "Kubernetes", 75), (9, "CI/CD", 70)],
        ),
        seed_category(
            4,
            "Security",
            95,
            &[(10, "Authentication", 90), (11, "Authorization", 85), (12, "Cryptography", 80)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_seed_catalog_shape() {
        let catalog = CategoryCatalog::seed();
        assert!(catalog.is_fallback());
        assert_eq!(catalog.categories().len(), 4);
        assert!(catalog
            .categories()
            .iter()
            .all(|c| c.subcategories.len() == 3 && c.subcategories.iter().all(|s| s.category_id == c.id)));
    }

    #[rstest]
    #[case(Some(3), "DevOps")]
    #[case(Some(99), NO_CATEGORY)]
    #[case(None, NO_CATEGORY)]
    fn test_category_name(#[case] id: Option<i64>, #[case] expected: &str) {
        assert_eq!(CategoryCatalog::seed().category_name(id), expected);
    }

    #[test]
    fn test_subcategory_lookups() {
        let catalog = CategoryCatalog::seed();
        assert_eq!(catalog.subcategory(2, 5).map(|s| s.name.as_str()), Some("NoSQL"));
        // subcategory must belong to the given category
        assert!(catalog.subcategory(1, 5).is_none());
        assert_eq!(catalog.subcategory_name(Some(3), Some(8)), "Kubernetes");
        assert_eq!(catalog.subcategory_name(Some(3), None), NO_SUBCATEGORY);
        assert_eq!(catalog.subcategories_of(4).len(), 3);
        assert!(catalog.subcategories_of(42).is_empty());
    }
}
