use cms_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Not logged in. Run 'cms login' first")]
    NotLoggedIn,

    #[error("This command requires an admin account")]
    AdminRequired,

    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("{}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("{0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(#[from] cms_config::ConfigError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),
}

pub type CliResult<T> = Result<T, CliError>;

fn summarize(errors: &[ValidationError]) -> String {
    match errors {
        [single] => single.message.clone(),
        _ => format!("{} fields need attention", errors.len()),
    }
}
