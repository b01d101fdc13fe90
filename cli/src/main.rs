mod client;
mod payload;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use wire::{AuthScheme, ListQuery, PAGE_SIZE, Resource};

use crate::client::ApiClient;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing access token; pass --token or set MEET_ACCESS_TOKEN")]
    MissingToken,
    #[error("{0} cannot be deleted")]
    NotDeletable(Resource),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("payload must be a JSON object")]
    NotAnObject,
    #[error("invalid payload: {0}")]
    Invalid(String),
}

#[derive(Parser, Debug)]
#[command(name = "meetctl", about = "Meeting platform admin CLI")]
struct Cli {
    #[arg(long, env = "MEET_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "MEET_ACCESS_TOKEN")]
    token: Option<String>,

    #[arg(long, env = "MEET_AUTH_SCHEME", default_value = "raw", value_parser = parse_scheme)]
    auth_scheme: AuthScheme,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for an access token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// One page of a collection.
    List {
        #[arg(value_parser = parse_resource)]
        resource: Resource,
        #[arg(long, default_value_t = 1)]
        page: u64,
        #[arg(long, default_value_t = PAGE_SIZE)]
        limit: u64,
        #[arg(long, default_value = "")]
        name: String,
    },
    Get {
        #[arg(value_parser = parse_resource)]
        resource: Resource,
        id: String,
    },
    /// Create (no `id`) or update (with `id`) a record.
    Save {
        #[arg(value_parser = parse_resource)]
        resource: Resource,
        #[arg(long)]
        data: String,
        #[arg(long, default_value_t = false)]
        skip_checks: bool,
    },
    Delete {
        #[arg(value_parser = parse_resource)]
        resource: Resource,
        id: String,
    },
    Meet(MeetCommand),
}

#[derive(Args, Debug)]
struct MeetCommand {
    #[command(subcommand)]
    command: MeetSubcommand,
}

#[derive(Subcommand, Debug)]
enum MeetSubcommand {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        meeting_type: String,
    },
    Join {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        meeting_id: String,
        #[arg(long)]
        meeting_url: String,
        #[arg(long)]
        meeting_passcode: String,
    },
}

fn parse_resource(raw: &str) -> Result<Resource, String> {
    Resource::parse(raw).ok_or_else(|| format!("unknown resource `{raw}` (companies, user-groups, users)"))
}

fn parse_scheme(raw: &str) -> Result<AuthScheme, String> {
    AuthScheme::parse(raw).ok_or_else(|| format!("unknown auth scheme `{raw}` (raw, bearer)"))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(&cli.base_url, cli.token, cli.auth_scheme);
    run(&client, cli.command).await
}

async fn run(client: &ApiClient, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => {
            let request = wire::LoginRequest { email, password };
            let mut values = wire::FormValues::new();
            values.insert("email".to_owned(), request.email.clone());
            values.insert("password".to_owned(), request.password.clone());
            let errors = wire::schema::login().validate(&values);
            if let Some((field, message)) = errors.iter().next() {
                return Err(CliError::Invalid(format!("{field}: {message}")));
            }
            print_json(&client.login(&request).await?)
        }
        Command::List { resource, page, limit, name } => {
            print_json(&client.list(resource, &ListQuery::new(page, limit, name)).await?)
        }
        Command::Get { resource, id } => print_json(&client.get(resource, &id).await?),
        Command::Save { resource, data, skip_checks } => {
            let body = payload::parse_object(&data)?;
            if !skip_checks {
                payload::check(&payload::save_schema(resource, &body), &body)?;
            }
            print_json(&client.save(resource, &serde_json::Value::Object(body)).await?)
        }
        Command::Delete { resource, id } => print_json(&client.delete(resource, &id).await?),
        Command::Meet(meet) => run_meet(client, meet).await,
    }
}

async fn run_meet(client: &ApiClient, meet: MeetCommand) -> Result<(), CliError> {
    match meet.command {
        MeetSubcommand::Login { email, password } => {
            print_json(&client.meet_login(&wire::MeetLoginRequest { email, password }).await?)
        }
        MeetSubcommand::Create { email, password, meeting_type } => {
            let request = wire::MeetCreateRequest { email, password, meeting_type };
            print_json(&client.meet_create(&request).await?)
        }
        MeetSubcommand::Join { email, password, meeting_id, meeting_url, meeting_passcode } => {
            let request = wire::MeetJoinRequest { email, password, meeting_id, meeting_url, meeting_passcode };
            print_json(&client.meet_join(&request).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
