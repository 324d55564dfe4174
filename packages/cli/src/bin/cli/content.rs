use clap::Subcommand;
use colored::*;
use inquire::{CustomType, Text};

use cms_cli::output::{content_history_table, content_table, print_content_details};
use cms_cli::prompt::{parse_tags, print_validation_errors, select_index, InquireConfirm};
use cms_cli::{AppContext, CliError};
use cms_core::{validate_content_form, ContentFilter, ContentForm, ContentStatus, SortDirection, SortKey};
use cms_resources::{CategoryCatalog, Confirm, ContentApi, ContentManager, DeleteOutcome};

#[derive(Subcommand)]
pub enum ContentCommands {
    /// List content, highest priority first by default
    List {
        /// Match title, description or tags
        #[arg(short, long)]
        search: Option<String>,
        /// Only this status (draft, published, archived)
        #[arg(long)]
        status: Option<ContentStatus>,
        /// Only this category ID
        #[arg(long)]
        category: Option<i64>,
        /// Sort by priority, title, createdAt or updatedAt
        #[arg(long, default_value = "priority")]
        sort: SortKey,
        /// Ascending order
        #[arg(long)]
        asc: bool,
    },
    /// Show one content item
    Show { id: i64 },
    /// Create content interactively
    Create,
    /// Edit content interactively
    Edit { id: i64 },
    /// Delete content
    Delete {
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the change history of one content item
    History { id: i64 },
}

pub async fn handle_content_command(
    ctx: &AppContext,
    command: ContentCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    ctx.require_login()?;

    match command {
        ContentCommands::List {
            search,
            status,
            category,
            sort,
            asc,
        } => {
            let filter = ContentFilter {
                search: search.unwrap_or_default(),
                category_id: category,
                status,
            };
            let direction = if asc { SortDirection::Asc } else { SortDirection::Desc };
            list_content(ctx, filter, sort, direction).await
        }
        ContentCommands::Show { id } => show_content(ctx, id).await,
        ContentCommands::Create => create_content(ctx).await,
        ContentCommands::Edit { id } => edit_content(ctx, id).await,
        ContentCommands::Delete { id, yes } => delete_content(ctx, id, yes).await,
        ContentCommands::History { id } => content_history(ctx, id).await,
    }
}

async fn open_manager(ctx: &AppContext) -> Result<ContentManager, Box<dyn std::error::Error>> {
    let manager = ContentManager::open(ContentApi::new(ctx.client.clone())).await;
    if let Some(error) = manager.error() {
        return Err(error.to_string().into());
    }
    Ok(manager)
}

async fn load_catalog(ctx: &AppContext) -> CategoryCatalog {
    let catalog = CategoryCatalog::load(&ctx.client).await;
    if catalog.is_fallback() {
        eprintln!("{}", "Categories unavailable, using built-in set".yellow());
    }
    catalog
}

async fn list_content(
    ctx: &AppContext,
    filter: ContentFilter,
    sort: SortKey,
    direction: SortDirection,
) -> Result<(), Box<dyn std::error::Error>> {
    let manager = open_manager(ctx).await?;
    let catalog = load_catalog(ctx).await;

    let view = filter.apply(manager.records(), sort, direction);
    if view.is_empty() {
        println!("{}", "No content found".yellow());
        println!("{}", "Use 'cms content create' to add some".dimmed());
        return Ok(());
    }

    println!("{}", "📄 Content".blue().bold());
    println!();
    println!("{}", content_table(&view, &catalog));
    println!(
        "Showing {} of {} items",
        view.len().to_string().cyan(),
        manager.records().len()
    );
    Ok(())
}

async fn show_content(ctx: &AppContext, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    let api = ContentApi::new(ctx.client.clone());
    let item = api.get(id).await?;
    let catalog = load_catalog(ctx).await;

    println!("{}", format!("📄 {}", item.title).blue().bold());
    println!();
    print_content_details(&item, &catalog);
    Ok(())
}

/// Fill `form` from prompts, using its current values as defaults
fn prompt_content_form(
    form: &mut ContentForm,
    catalog: &CategoryCatalog,
) -> Result<(), Box<dyn std::error::Error>> {
    form.title = Text::new("Title:").with_initial_value(&form.title).prompt()?;
    form.description = Text::new("Description (HTML allowed):")
        .with_initial_value(&form.description)
        .prompt()?;

    let categories = catalog.categories();
    if !categories.is_empty() {
        let names: Vec<String> = categories.iter().map(|c| c.name.clone()).collect();
        let current = form
            .category_id
            .and_then(|id| categories.iter().position(|c| c.id == id));
        let index = select_index("Category:", names, current)?;
        form.set_category(Some(categories[index].id));
    }

    if let Some(category_id) = form.category_id {
        let subcategories = catalog.subcategories_of(category_id);
        if !subcategories.is_empty() {
            let names: Vec<String> = subcategories.iter().map(|s| s.name.clone()).collect();
            let current = form
                .subcategory_id
                .and_then(|id| subcategories.iter().position(|s| s.id == id));
            let index = select_index("Subcategory:", names, current)?;
            form.subcategory_id = Some(subcategories[index].id);
        }
    }

    let tags = Text::new("Tags (comma-separated):")
        .with_initial_value(&form.tags.join(", "))
        .prompt()?;
    form.tags = parse_tags(&tags);

    let current_status = ContentStatus::ALL.iter().position(|s| *s == form.status);
    let index = select_index("Status:", ContentStatus::ALL.to_vec(), current_status)?;
    form.status = ContentStatus::ALL[index];

    let priority = CustomType::<i32>::new("Priority (1-100):")
        .with_default(form.priority.unwrap_or(50))
        .with_error_message("Please enter a whole number")
        .prompt()?;
    form.priority = Some(priority);

    Ok(())
}

fn check_content_form(form: &ContentForm) -> Result<(), Box<dyn std::error::Error>> {
    let errors = validate_content_form(form);
    if !errors.is_empty() {
        print_validation_errors(&errors);
        return Err(CliError::Validation(errors).into());
    }
    Ok(())
}

async fn create_content(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(ctx).await;
    let mut manager = ContentManager::new(ContentApi::new(ctx.client.clone()));
    manager.go_to_create();

    println!("{}", "📄 New content".blue().bold());
    let mut form = ContentForm::default();
    prompt_content_form(&mut form, &catalog)?;
    check_content_form(&form)?;

    let created = manager.create(&form.to_create_request()).await?;
    println!(
        "{}",
        format!("✅ Content '{}' created with ID {}", created.title, created.id).green()
    );
    Ok(())
}

async fn edit_content(ctx: &AppContext, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = open_manager(ctx).await?;
    let item = manager
        .find(id)
        .cloned()
        .ok_or(CliError::NotFound {
            resource: "Content",
            id,
        })?;
    let catalog = load_catalog(ctx).await;

    manager.go_to_edit(item.clone());
    println!("{}", format!("✏️  Edit content - {}", item.title).blue().bold());

    let mut form = ContentForm::from_content(&item);
    prompt_content_form(&mut form, &catalog)?;
    check_content_form(&form)?;

    let updated = manager.update(id, &form.to_update_request()).await?;
    println!(
        "{}",
        format!("✅ Content '{}' updated", updated.title).green()
    );
    Ok(())
}

async fn delete_content(
    ctx: &AppContext,
    id: i64,
    skip_confirmation: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = open_manager(ctx).await?;
    let catalog = load_catalog(ctx).await;

    if let Some(item) = manager.find(id).cloned() {
        println!("{}", format!("🗑️  Delete content - {}", item.title).red().bold());
        println!();
        print_content_details(&item, &catalog);
        println!();
        manager.go_to_detail(item);
    }

    let accept_all = |_: &str| true;
    let confirm: &dyn Confirm = if skip_confirmation {
        &accept_all
    } else {
        &InquireConfirm
    };

    match manager.delete(id, confirm).await? {
        DeleteOutcome::Deleted => println!("{}", "✅ Content deleted".green()),
        DeleteOutcome::Cancelled => println!("{}", "❌ Operation cancelled".yellow()),
    }
    Ok(())
}

async fn content_history(ctx: &AppContext, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    let api = ContentApi::new(ctx.client.clone());
    let entries = api.history(id).await?;

    if entries.is_empty() {
        println!("{}", "No history recorded".yellow());
        return Ok(());
    }

    println!("{}", format!("🕑 History for content {}", id).blue().bold());
    println!();
    println!("{}", content_history_table(&entries));
    Ok(())
}
