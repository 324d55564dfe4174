// ABOUTME: Client-side filtering and ordering of fetched collections for display
// ABOUTME: Produces ordered views over borrowed records without touching the source collection

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::types::{Content, ContentStatus, Project};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Priority,
    Title,
    CreatedAt,
    UpdatedAt,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priority" => Ok(SortKey::Priority),
            "title" => Ok(SortKey::Title),
            "createdAt" | "created" | "created_at" => Ok(SortKey::CreatedAt),
            "updatedAt" | "updated" | "updated_at" => Ok(SortKey::UpdatedAt),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Priority => "priority",
            SortKey::Title => "title",
            SortKey::CreatedAt => "createdAt",
            SortKey::UpdatedAt => "updatedAt",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Fields shared by records that can be ordered in a list view
pub trait Sortable {
    fn title(&self) -> &str;
    fn priority(&self) -> i32;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}

impl Sortable for Content {
    fn title(&self) -> &str {
        &self.title
    }
    fn priority(&self) -> i32 {
        self.priority
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Sortable for Project {
    fn title(&self) -> &str {
        &self.title
    }
    fn priority(&self) -> i32 {
        self.priority
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

fn compare<T: Sortable>(a: &T, b: &T, key: SortKey) -> Ordering {
    match key {
        SortKey::Priority => a.priority().cmp(&b.priority()),
        SortKey::Title => a.title().to_lowercase().cmp(&b.title().to_lowercase()),
        SortKey::CreatedAt => a.created_at().cmp(&b.created_at()),
        SortKey::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
    }
}

/// Order borrowed records by `key`; ties keep their original relative order
pub fn sort_records<T: Sortable>(records: &mut [&T], key: SortKey, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = compare(*a, *b, key);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentFilter {
    pub search: String,
    pub category_id: Option<i64>,
    pub status: Option<ContentStatus>,
}

impl ContentFilter {
    pub fn matches(&self, content: &Content) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || contains_ci(&content.title, &needle)
            || contains_ci(&content.description, &needle)
            || content.tags.iter().any(|tag| contains_ci(tag, &needle));
        let matches_category = self
            .category_id
            .map_or(true, |id| content.category_id == Some(id));
        let matches_status = self.status.map_or(true, |status| content.status == status);

        matches_search && matches_category && matches_status
    }

    pub fn apply<'a>(
        &self,
        content: &'a [Content],
        key: SortKey,
        direction: SortDirection,
    ) -> Vec<&'a Content> {
        let mut view: Vec<&Content> = content.iter().filter(|c| self.matches(c)).collect();
        sort_records(&mut view, key, direction);
        view
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub search: String,
    pub status_id: Option<i64>,
    pub area_id: Option<i64>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || contains_ci(&project.title, &needle)
            || contains_ci(&project.description, &needle);
        let matches_status = self.status_id.map_or(true, |id| project.status_id == id);
        let matches_area = self.area_id.map_or(true, |id| project.area_id == id);

        matches_search && matches_status && matches_area
    }

    pub fn apply<'a>(
        &self,
        projects: &'a [Project],
        key: SortKey,
        direction: SortDirection,
    ) -> Vec<&'a Project> {
        let mut view: Vec<&Project> = projects.iter().filter(|p| self.matches(p)).collect();
        sort_records(&mut view, key, direction);
        view
    }
}
