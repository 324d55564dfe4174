use clap::Subcommand;
use colored::*;
use inquire::{CustomType, Text};

use cms_cli::output::{print_project_details, project_history_table, project_table};
use cms_cli::prompt::{print_validation_errors, select_index, InquireConfirm};
use cms_cli::{AppContext, CliError};
use cms_core::{validate_project_form, ProjectFilter, ProjectForm, SortDirection, SortKey};
use cms_resources::{Confirm, DeleteOutcome, ProjectApi, ProjectLookups, ProjectManager};

#[derive(Subcommand)]
pub enum ProjectsCommands {
    /// List projects, highest priority first by default
    List {
        /// Match title or description
        #[arg(short, long)]
        search: Option<String>,
        /// Only this status ID
        #[arg(long)]
        status: Option<i64>,
        /// Only this area ID
        #[arg(long)]
        area: Option<i64>,
        /// Sort by priority, title, createdAt or updatedAt
        #[arg(long, default_value = "priority")]
        sort: SortKey,
        /// Ascending order
        #[arg(long)]
        asc: bool,
    },
    /// Show project details
    Show { id: i64 },
    /// Create a project interactively
    Create,
    /// Edit a project interactively
    Edit { id: i64 },
    /// Delete a project
    Delete {
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the change history of a project
    History { id: i64 },
}

pub async fn handle_projects_command(
    ctx: &AppContext,
    command: ProjectsCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    ctx.require_login()?;

    match command {
        ProjectsCommands::List {
            search,
            status,
            area,
            sort,
            asc,
        } => {
            let filter = ProjectFilter {
                search: search.unwrap_or_default(),
                status_id: status,
                area_id: area,
            };
            let direction = if asc { SortDirection::Asc } else { SortDirection::Desc };
            list_projects(ctx, filter, sort, direction).await
        }
        ProjectsCommands::Show { id } => show_project(ctx, id).await,
        ProjectsCommands::Create => create_project(ctx).await,
        ProjectsCommands::Edit { id } => edit_project(ctx, id).await,
        ProjectsCommands::Delete { id, yes } => delete_project(ctx, id, yes).await,
        ProjectsCommands::History { id } => project_history(ctx, id).await,
    }
}

async fn open_manager(ctx: &AppContext) -> Result<ProjectManager, Box<dyn std::error::Error>> {
    let manager = ProjectManager::open(ProjectApi::new(ctx.client.clone())).await;
    if let Some(error) = manager.error() {
        return Err(error.to_string().into());
    }
    Ok(manager)
}

async fn list_projects(
    ctx: &AppContext,
    filter: ProjectFilter,
    sort: SortKey,
    direction: SortDirection,
) -> Result<(), Box<dyn std::error::Error>> {
    let manager = open_manager(ctx).await?;
    let lookups = ProjectLookups::load(&ctx.client).await?;

    let view = filter.apply(manager.records(), sort, direction);
    if view.is_empty() {
        println!("{}", "No projects found".yellow());
        println!("{}", "Use 'cms projects create' to create your first project".dimmed());
        return Ok(());
    }

    println!("{}", "📂 Projects".blue().bold());
    println!();
    println!("{}", project_table(&view, &lookups));
    println!(
        "Showing {} of {} projects",
        view.len().to_string().cyan(),
        manager.records().len()
    );
    Ok(())
}

async fn show_project(ctx: &AppContext, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    let api = ProjectApi::new(ctx.client.clone());
    let project = api.get(id).await?;
    let lookups = ProjectLookups::load(&ctx.client).await?;

    println!("{}", format!("📂 Project Details - {}", project.title).blue().bold());
    println!();
    print_project_details(&project, &lookups);
    Ok(())
}

fn prompt_project_form(
    form: &mut ProjectForm,
    lookups: &ProjectLookups,
) -> Result<(), Box<dyn std::error::Error>> {
    form.title = Text::new("Title:").with_initial_value(&form.title).prompt()?;
    form.description = Text::new("Description (HTML allowed):")
        .with_initial_value(&form.description)
        .prompt()?;
    form.target = Text::new("Target:").with_initial_value(&form.target).prompt()?;

    let conclusion = Text::new("Conclusion (optional):")
        .with_initial_value(form.conclusion.as_deref().unwrap_or(""))
        .prompt()?;
    form.conclusion = Some(conclusion);

    let statuses = lookups.statuses();
    if !statuses.is_empty() {
        let names: Vec<String> = statuses.iter().map(|s| s.name.clone()).collect();
        let current = form
            .status_id
            .and_then(|id| statuses.iter().position(|s| s.id == id));
        let index = select_index("Status:", names, current)?;
        form.status_id = Some(statuses[index].id);
    }

    let areas = lookups.areas();
    if !areas.is_empty() {
        let names: Vec<String> = areas.iter().map(|a| a.name.clone()).collect();
        let current = form
            .area_id
            .and_then(|id| areas.iter().position(|a| a.id == id));
        let index = select_index("Area:", names, current)?;
        form.area_id = Some(areas[index].id);
    }

    let priority = CustomType::<i32>::new("Priority:")
        .with_default(form.priority.unwrap_or(0))
        .with_error_message("Please enter a whole number")
        .prompt()?;
    form.priority = Some(priority);

    Ok(())
}

fn check_project_form(form: &ProjectForm) -> Result<(), Box<dyn std::error::Error>> {
    let errors = validate_project_form(form);
    if !errors.is_empty() {
        print_validation_errors(&errors);
        return Err(CliError::Validation(errors).into());
    }
    Ok(())
}

async fn create_project(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let lookups = ProjectLookups::load(&ctx.client).await?;
    let mut manager = ProjectManager::new(ProjectApi::new(ctx.client.clone()));
    manager.go_to_create();

    println!("{}", "📂 New project".blue().bold());
    let mut form = ProjectForm::default();
    prompt_project_form(&mut form, &lookups)?;
    check_project_form(&form)?;

    let request = form
        .to_create_request()
        .ok_or("A status and an area are required")?;
    let created = manager.create(&request).await?;
    println!(
        "{}",
        format!("✅ Project '{}' created with ID {}", created.title, created.id).green()
    );
    Ok(())
}

async fn edit_project(ctx: &AppContext, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = open_manager(ctx).await?;
    let project = manager
        .find(id)
        .cloned()
        .ok_or(CliError::NotFound {
            resource: "Project",
            id,
        })?;
    let lookups = ProjectLookups::load(&ctx.client).await?;

    manager.go_to_edit(project.clone());
    println!("{}", format!("✏️  Edit Project - {}", project.title).blue().bold());

    let mut form = ProjectForm::from_project(&project);
    prompt_project_form(&mut form, &lookups)?;
    check_project_form(&form)?;

    let updated = manager.update(id, &form.to_update_request()).await?;
    println!(
        "{}",
        format!("✅ Project '{}' updated", updated.title).green()
    );
    Ok(())
}

async fn delete_project(
    ctx: &AppContext,
    id: i64,
    skip_confirmation: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = open_manager(ctx).await?;

    if let Some(project) = manager.find(id).cloned() {
        let lookups = ProjectLookups::load(&ctx.client).await.unwrap_or_default();
        println!("{}", format!("🗑️  Delete Project - {}", project.title).red().bold());
        println!();
        print_project_details(&project, &lookups);
        println!();
        manager.go_to_detail(project);
    }

    let accept_all = |_: &str| true;
    let confirm: &dyn Confirm = if skip_confirmation {
        &accept_all
    } else {
        &InquireConfirm
    };

    match manager.delete(id, confirm).await? {
        DeleteOutcome::Deleted => println!("{}", "✅ Project deleted".green()),
        DeleteOutcome::Cancelled => println!("{}", "❌ Operation cancelled".yellow()),
    }
    Ok(())
}

async fn project_history(ctx: &AppContext, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    let api = ProjectApi::new(ctx.client.clone());
    let entries = api.history(id).await?;

    if entries.is_empty() {
        println!("{}", "No history recorded".yellow());
        return Ok(());
    }

    println!("{}", format!("🕑 History for project {}", id).blue().bold());
    println!();
    println!("{}", project_history_table(&entries));
    Ok(())
}
