use colored::*;

use cms_cli::output::{area_table, category_table, status_table};
use cms_cli::AppContext;
use cms_resources::{CategoryCatalog, ProjectLookups};

pub async fn show_categories(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = CategoryCatalog::load(&ctx.client).await;

    println!("{}", "🗂️  Categories".blue().bold());
    if catalog.is_fallback() {
        println!(
            "{}",
            "Categories could not be loaded from the API; showing the built-in set".yellow()
        );
    }
    println!();
    println!("{}", category_table(catalog.categories()));
    Ok(())
}

pub async fn show_statuses(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let lookups = ProjectLookups::load(&ctx.client).await?;

    println!("{}", "🏷️  Project statuses".blue().bold());
    println!();
    println!("{}", status_table(lookups.statuses()));
    Ok(())
}

pub async fn show_areas(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let lookups = ProjectLookups::load(&ctx.client).await?;

    println!("{}", "🧭 Project areas".blue().bold());
    println!();
    println!("{}", area_table(lookups.areas()));
    Ok(())
}

pub fn show_config(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let config = &ctx.config;

    println!("{}", "⚙️  API configuration".blue().bold());
    println!();
    println!("  {:<16} {}", "Base URL:".bold(), config.base_url);
    println!("  {:<16} {} ms", "Timeout:".bold(), config.timeout.as_millis());
    println!("  {:<16} {}", "Retry attempts:".bold(), config.retry_attempts);
    println!(
        "  {:<16} {}",
        "Session file:".bold(),
        config.session_path.display()
    );
    println!();
    println!(
        "{}",
        "Timeout and retry attempts are informational; requests are sent once without a deadline"
            .dimmed()
    );
    Ok(())
}
