use colored::*;
use inquire::{Password, PasswordDisplayMode, Text};

use cms_cli::output::role_label;
use cms_cli::{AppContext, CliError};
use cms_core::{LoginRequest, RegisterRequest};

fn password_prompt(message: &str) -> inquire::Password<'_> {
    Password::new(message)
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
}

pub async fn handle_login(
    ctx: &AppContext,
    email: Option<String>,
    password: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let email = match email {
        Some(email) => email,
        None => Text::new("Email:").prompt()?,
    };
    let password = match password {
        Some(password) => password,
        None => password_prompt("Password:").prompt()?,
    };

    let mut manager = ctx.auth_manager();
    if !manager.login(LoginRequest { email, password }).await {
        let message = manager
            .state()
            .error
            .clone()
            .unwrap_or_else(|| "Login failed".to_string());
        return Err(CliError::Auth(message).into());
    }

    if let Some(user) = manager.user() {
        println!(
            "{}",
            format!("✅ Logged in as {} ({})", user.name, user.role).green()
        );
    }
    Ok(())
}

pub async fn handle_register(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "📝 Create account".blue().bold());
    let name = Text::new("Name:").prompt()?;
    let email = Text::new("Email:").prompt()?;
    let password = Password::new("Password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;

    let mut manager = ctx.auth_manager();
    let request = RegisterRequest {
        name,
        email,
        password,
        role: None,
    };
    if !manager.register(request).await {
        let message = manager
            .state()
            .error
            .clone()
            .unwrap_or_else(|| "Registration failed".to_string());
        return Err(CliError::Auth(message).into());
    }

    if let Some(user) = manager.user() {
        println!("{}", format!("✅ Welcome, {}!", user.name).green());
    }
    Ok(())
}

pub fn handle_logout(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = ctx.auth_manager();
    if !manager.is_authenticated() {
        println!("{}", "Not logged in".yellow());
        return Ok(());
    }
    manager.logout();
    println!("{}", "👋 Logged out".green());
    Ok(())
}

pub fn handle_whoami(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let manager = ctx.auth_manager();
    match manager.user() {
        Some(user) => {
            println!("{:<10} {}", "Name:".cyan(), user.name);
            println!("{:<10} {}", "Email:".cyan(), user.email);
            println!("{:<10} {}", "Role:".cyan(), role_label(user.role));
        }
        None => println!("{}", "Not logged in".yellow()),
    }
    Ok(())
}
