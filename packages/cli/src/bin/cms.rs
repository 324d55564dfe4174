use clap::{Parser, Subcommand};
use colored::*;
use std::process;

mod cli;

use cli::auth::{handle_login, handle_logout, handle_register, handle_whoami};
use cli::content::{handle_content_command, ContentCommands};
use cli::projects::{handle_projects_command, ProjectsCommands};
use cli::reference::{show_areas, show_categories, show_config, show_statuses};
use cli::users::{handle_users_command, UsersCommands};
use cms_cli::logging::init_logging;
use cms_cli::AppContext;

#[derive(Parser)]
#[command(name = "cms")]
#[command(about = "CMS console - manage content, projects and users")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session locally
    Login {
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create an account and sign in with it
    Register,
    /// Forget the local session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Manage content
    #[command(subcommand)]
    Content(ContentCommands),
    /// Manage projects
    #[command(subcommand)]
    Projects(ProjectsCommands),
    /// Manage users (admin only)
    #[command(subcommand)]
    Users(UsersCommands),
    /// List content categories and their subcategories
    Categories,
    /// List project statuses
    Statuses,
    /// List project areas
    Areas,
    /// Show the resolved API configuration
    Config,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    match handle_command(cli.command).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

async fn handle_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = AppContext::from_env()?;

    match command {
        Commands::Login { email, password } => handle_login(&ctx, email, password).await,
        Commands::Register => handle_register(&ctx).await,
        Commands::Logout => handle_logout(&ctx),
        Commands::Whoami => handle_whoami(&ctx),
        Commands::Content(command) => handle_content_command(&ctx, command).await,
        Commands::Projects(command) => handle_projects_command(&ctx, command).await,
        Commands::Users(command) => handle_users_command(&ctx, command).await,
        Commands::Categories => show_categories(&ctx).await,
        Commands::Statuses => show_statuses(&ctx).await,
        Commands::Areas => show_areas(&ctx).await,
        Commands::Config => show_config(&ctx),
    }
}
