use clap::Subcommand;
use colored::*;
use inquire::{Password, PasswordDisplayMode, Text};

use cms_cli::output::user_table;
use cms_cli::prompt::{print_validation_errors, select_index, InquireConfirm};
use cms_cli::{AppContext, CliError};
use cms_core::{validate_user_form, Role, UserForm};
use cms_resources::{Confirm, DeleteOutcome, UserApi, UserManager};

const ROLES: [Role; 2] = [Role::Creator, Role::Admin];

#[derive(Subcommand)]
pub enum UsersCommands {
    /// List all users
    List,
    /// Create a user interactively
    Create,
    /// Edit a user interactively
    Edit { id: i64 },
    /// Delete a user
    Delete {
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_users_command(
    ctx: &AppContext,
    command: UsersCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    ctx.require_admin()?;

    match command {
        UsersCommands::List => list_users(ctx).await,
        UsersCommands::Create => create_user(ctx).await,
        UsersCommands::Edit { id } => edit_user(ctx, id).await,
        UsersCommands::Delete { id, yes } => delete_user(ctx, id, yes).await,
    }
}

async fn open_manager(ctx: &AppContext) -> Result<UserManager, Box<dyn std::error::Error>> {
    let manager = UserManager::open(UserApi::new(ctx.client.clone())).await;
    if let Some(error) = manager.error() {
        return Err(error.to_string().into());
    }
    Ok(manager)
}

async fn list_users(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let manager = open_manager(ctx).await?;

    if manager.records().is_empty() {
        println!("{}", "No users found".yellow());
        return Ok(());
    }

    println!("{}", "👥 Users".blue().bold());
    println!();
    println!("{}", user_table(manager.records()));
    Ok(())
}

fn prompt_user_form(form: &mut UserForm, is_editing: bool) -> Result<(), Box<dyn std::error::Error>> {
    form.name = Text::new("Name:").with_initial_value(&form.name).prompt()?;
    form.email = Text::new("Email:").with_initial_value(&form.email).prompt()?;

    let message = if is_editing {
        "New password (leave empty to keep current):"
    } else {
        "Password:"
    };
    form.password = Password::new(message)
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    let current = ROLES.iter().position(|r| *r == form.role);
    let index = select_index("Role:", ROLES.to_vec(), current)?;
    form.role = ROLES[index];
    Ok(())
}

fn check_user_form(form: &UserForm, is_editing: bool) -> Result<(), Box<dyn std::error::Error>> {
    let errors = validate_user_form(form, is_editing);
    if !errors.is_empty() {
        print_validation_errors(&errors);
        return Err(CliError::Validation(errors).into());
    }
    Ok(())
}

async fn create_user(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = UserManager::new(UserApi::new(ctx.client.clone()));
    manager.go_to_create();

    println!("{}", "👤 New user".blue().bold());
    let mut form = UserForm::default();
    prompt_user_form(&mut form, false)?;
    check_user_form(&form, false)?;

    let created = manager.create(&form.to_create_request()).await?;
    println!(
        "{}",
        format!("✅ User '{}' created with ID {}", created.name, created.id).green()
    );
    Ok(())
}

async fn edit_user(ctx: &AppContext, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = open_manager(ctx).await?;
    let user = manager
        .find(id)
        .cloned()
        .ok_or(CliError::NotFound { resource: "User", id })?;

    manager.go_to_edit(user.clone());
    println!("{}", format!("✏️  Edit User - {}", user.name).blue().bold());

    let mut form = UserForm::from_user(&user);
    prompt_user_form(&mut form, true)?;
    check_user_form(&form, true)?;

    let request = form.to_update_request(&user);
    if request.is_empty() {
        println!("{}", "Nothing to update".yellow());
        return Ok(());
    }

    let updated = manager.update(id, &request).await?;
    println!("{}", format!("✅ User '{}' updated", updated.name).green());
    Ok(())
}

async fn delete_user(
    ctx: &AppContext,
    id: i64,
    skip_confirmation: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = open_manager(ctx).await?;

    if let Some(user) = manager.find(id) {
        println!(
            "{}",
            format!("🗑️  Delete User - {} <{}>", user.name, user.email).red().bold()
        );
    }

    let accept_all = |_: &str| true;
    let confirm: &dyn Confirm = if skip_confirmation {
        &accept_all
    } else {
        &InquireConfirm
    };

    match manager.delete(id, confirm).await? {
        DeleteOutcome::Deleted => println!("{}", "✅ User deleted".green()),
        DeleteOutcome::Cancelled => println!("{}", "❌ Operation cancelled".yellow()),
    }
    Ok(())
}
