// ABOUTME: Terminal rendering of CMS records as tables and detail blocks
// ABOUTME: Tables build without printing so their content can be checked in tests

use chrono::{DateTime, Utc};
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use cms_core::{
    truncate, Category, Content, ContentHistory, ContentStatus, Project, ProjectArea,
    ProjectHistory, ProjectStatus, Role, User,
};
use cms_resources::{CategoryCatalog, ProjectLookups};

const EMPTY: &str = "—";

pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

fn format_optional_date(date: Option<&DateTime<Utc>>) -> String {
    date.map_or_else(|| EMPTY.to_string(), format_date)
}

/// Drop markup from rich-text descriptions for terminal display
pub fn plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn status_label(status: ContentStatus) -> ColoredString {
    match status {
        ContentStatus::Draft => "Draft".yellow(),
        ContentStatus::Published => "Published".green(),
        ContentStatus::Archived => "Archived".dimmed(),
    }
}

pub fn role_label(role: Role) -> ColoredString {
    match role {
        Role::Admin => "Admin".red(),
        Role::Creator => "Creator".cyan(),
    }
}

fn tags_text(tags: &[String]) -> String {
    if tags.is_empty() {
        EMPTY.to_string()
    } else {
        tags.join(", ")
    }
}

pub fn content_table(items: &[&Content], catalog: &CategoryCatalog) -> Table {
    let mut table = new_table(vec![
        "ID", "Title", "Category", "Status", "Priority", "Tags", "Updated",
    ]);
    for item in items {
        table.add_row(vec![
            item.id.to_string(),
            truncate(&item.title, 30),
            category_label(item, catalog),
            item.status.to_string(),
            item.priority.to_string(),
            truncate(&tags_text(&item.tags), 20),
            format_date(&item.updated_at),
        ]);
    }
    table
}

/// Embedded category name first, then the catalog
fn category_label(item: &Content, catalog: &CategoryCatalog) -> String {
    item.category
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| catalog.category_name(item.category_id).to_string())
}

pub fn print_content_details(item: &Content, catalog: &CategoryCatalog) {
    println!("{:<15} {}", "ID:".cyan(), item.id);
    println!("{:<15} {}", "Title:".cyan(), item.title);
    println!("{:<15} {}", "Status:".cyan(), status_label(item.status));
    println!("{:<15} {}", "Priority:".cyan(), item.priority);
    println!("{:<15} {}", "Category:".cyan(), category_label(item, catalog));
    let subcategory = item
        .subcategory
        .as_ref()
        .map(|s| s.name.clone())
        .unwrap_or_else(|| {
            catalog
                .subcategory_name(item.category_id, item.subcategory_id)
                .to_string()
        });
    println!("{:<15} {}", "Subcategory:".cyan(), subcategory);
    println!("{:<15} {}", "Tags:".cyan(), tags_text(&item.tags));
    if let Some(author) = &item.author {
        println!("{:<15} {} <{}>", "Author:".cyan(), author.name, author.email);
    }
    if let Some(editor) = &item.last_updated_by {
        println!("{:<15} {}", "Updated by:".cyan(), editor.name);
    }
    println!("{:<15} {}", "Created:".cyan(), format_date(&item.created_at));
    println!("{:<15} {}", "Updated:".cyan(), format_date(&item.updated_at));
    println!();
    println!("{}", plain_text(&item.description));
}

pub fn content_history_table(entries: &[ContentHistory]) -> Table {
    let mut table = new_table(vec!["Date", "Action", "User", "Changes", "Notes"]);
    for entry in entries {
        table.add_row(vec![
            format_date(&entry.created_at),
            entry.action.to_string(),
            entry.user.name.clone(),
            truncate(&entry.changes, 40),
            entry.notes.clone().unwrap_or_else(|| EMPTY.to_string()),
        ]);
    }
    table
}

pub fn project_table(items: &[&Project], lookups: &ProjectLookups) -> Table {
    let mut table = new_table(vec![
        "ID", "Title", "Status", "Area", "Priority", "Target", "Updated",
    ]);
    for item in items {
        table.add_row(vec![
            item.id.to_string(),
            truncate(&item.title, 30),
            lookups.status_name(item).to_string(),
            lookups.area_name(item).to_string(),
            item.priority.to_string(),
            truncate(&item.target, 25),
            format_date(&item.updated_at),
        ]);
    }
    table
}

pub fn print_project_details(item: &Project, lookups: &ProjectLookups) {
    println!("{:<15} {}", "ID:".cyan(), item.id);
    println!("{:<15} {}", "Title:".cyan(), item.title);
    println!("{:<15} {}", "Status:".cyan(), lookups.status_name(item));
    println!("{:<15} {}", "Area:".cyan(), lookups.area_name(item));
    println!("{:<15} {}", "Priority:".cyan(), item.priority);
    println!("{:<15} {}", "Target:".cyan(), item.target);
    if let Some(conclusion) = item.conclusion.as_deref().filter(|c| !c.trim().is_empty()) {
        println!("{:<15} {}", "Conclusion:".cyan(), conclusion);
    }
    if let Some(author) = &item.author {
        println!("{:<15} {} <{}>", "Author:".cyan(), author.name, author.email);
    }
    println!("{:<15} {}", "Created:".cyan(), format_date(&item.created_at));
    println!("{:<15} {}", "Updated:".cyan(), format_date(&item.updated_at));
    println!();
    println!("{}", plain_text(&item.description));
}

pub fn project_history_table(entries: &[ProjectHistory]) -> Table {
    let mut table = new_table(vec!["Date", "Action", "User", "Changes", "Notes"]);
    for entry in entries {
        table.add_row(vec![
            format_date(&entry.created_at),
            entry.action.to_string(),
            entry.user.name.clone(),
            truncate(&entry.changes, 40),
            entry.notes.clone().unwrap_or_else(|| EMPTY.to_string()),
        ]);
    }
    table
}

pub fn user_table(users: &[User]) -> Table {
    let mut table = new_table(vec!["ID", "Name", "Email", "Role", "Created"]);
    for user in users {
        table.add_row(vec![
            user.id.to_string(),
            truncate(&user.name, 25),
            user.email.clone(),
            user.role.to_string(),
            format_optional_date(user.created_at.as_ref()),
        ]);
    }
    table
}

pub fn category_table(categories: &[Category]) -> Table {
    let mut table = new_table(vec!["ID", "Category", "Priority", "Subcategories"]);
    for category in categories {
        let subcategories = category
            .subcategories
            .iter()
            .map(|s| format!("{} ({})", s.name, s.id))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            category.id.to_string(),
            category.name.clone(),
            category.priority.to_string(),
            if subcategories.is_empty() {
                EMPTY.to_string()
            } else {
                subcategories
            },
        ]);
    }
    table
}

pub fn status_table(statuses: &[ProjectStatus]) -> Table {
    let mut table = new_table(vec!["ID", "Status", "Priority", "Description"]);
    for status in statuses {
        table.add_row(vec![
            status.id.to_string(),
            status.name.clone(),
            status.priority.to_string(),
            status.description.clone().unwrap_or_else(|| EMPTY.to_string()),
        ]);
    }
    table
}

pub fn area_table(areas: &[ProjectArea]) -> Table {
    let mut table = new_table(vec!["ID", "Area", "Priority", "Description"]);
    for area in areas {
        table.add_row(vec![
            area.id.to_string(),
            area.name.clone(),
            area.priority.to_string(),
            area.description.clone().unwrap_or_else(|| EMPTY.to_string()),
        ]);
    }
    table
}
