//! SynergySphere command-line client.
//!
//! Thin front end over the service façades: each subcommand makes one API
//! call and prints the result as JSON.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use synergysphere::auth::FileTokenStore;
use synergysphere::config::{load_config, load_from_env, ClientConfig};
use synergysphere::models::message::{CreateMessageInput, MessageQuery, MessageSearchQuery};
use synergysphere::models::notification::NotificationQuery;
use synergysphere::models::project::{AddMemberInput, CreateProjectInput, MemberRole, ProjectQuery};
use synergysphere::models::task::{CreateTaskInput, Priority, TaskQuery, TaskStatus};
use synergysphere::observability::logging;
use synergysphere::{ApiResponse, SynergySphere};

#[derive(Parser)]
#[command(name = "synergysphere")]
#[command(about = "Command-line client for the SynergySphere API", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API base URL, overriding config and environment.
    #[arg(short, long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and store the session token
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Show the authenticated user
    Whoami,
    /// Check API health
    Health,
    /// Manage projects
    #[command(subcommand)]
    Projects(ProjectCommand),
    /// Manage tasks
    #[command(subcommand)]
    Tasks(TaskCommand),
    /// Read and post messages
    #[command(subcommand)]
    Messages(MessageCommand),
    /// Read notifications
    #[command(subcommand)]
    Notifications(NotificationCommand),
}

#[derive(Args)]
struct Paging {
    #[arg(long)]
    page: Option<u32>,
    #[arg(long)]
    limit: Option<u32>,
}

#[derive(Subcommand)]
enum ProjectCommand {
    List {
        #[arg(long)]
        search: Option<String>,
        #[command(flatten)]
        paging: Paging,
    },
    Show {
        id: String,
    },
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        public: bool,
    },
    Delete {
        id: String,
    },
    Stats {
        id: String,
    },
    AddMember {
        id: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "MEMBER")]
        role: MemberRole,
    },
    RemoveMember {
        id: String,
        user_id: String,
    },
}

#[derive(Subcommand)]
enum TaskCommand {
    List {
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        status: Option<TaskStatus>,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long)]
        search: Option<String>,
        #[command(flatten)]
        paging: Paging,
    },
    /// Tasks assigned to you
    Mine {
        #[arg(long)]
        status: Option<TaskStatus>,
    },
    Show {
        id: String,
    },
    Create {
        #[arg(long)]
        project: String,
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<TaskStatus>,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        assignee: Option<String>,
    },
    /// Set the status of one or more tasks
    Status {
        status: TaskStatus,
        #[arg(required = true)]
        ids: Vec<String>,
    },
    Delete {
        id: String,
    },
    /// Task counters for a project
    Stats {
        project: String,
    },
}

#[derive(Subcommand)]
enum MessageCommand {
    List {
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        task: Option<String>,
        #[command(flatten)]
        paging: Paging,
    },
    Thread {
        id: String,
    },
    Post {
        content: String,
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        task: Option<String>,
        #[arg(long)]
        reply_to: Option<String>,
        #[arg(long = "mention")]
        mentions: Vec<String>,
    },
    Search {
        query: String,
        #[arg(long)]
        project: Option<String>,
    },
}

#[derive(Subcommand)]
enum NotificationCommand {
    List {
        #[arg(long)]
        unread: bool,
        #[command(flatten)]
        paging: Paging,
    },
    /// Mark notifications as read
    Read {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    ReadAll,
    Stats,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_from_env()?,
    };
    if let Some(url) = cli.url {
        config.api.base_url = url;
    }

    logging::init(&config.observability);

    let tokens = Arc::new(FileTokenStore::new(token_path(&config)));
    let api = SynergySphere::new(&config.api, tokens.clone())?;

    tracing::debug!(base_url = %config.api.base_url, token_file = ?tokens.path(), "Client ready");

    match cli.command {
        Commands::Login { email, password } => {
            let session = api.auth.login(&email, &password).await;
            store_session(&tokens, session)
        }
        Commands::Register {
            name,
            email,
            password,
        } => {
            let session = api.auth.register(&name, &email, &password).await;
            store_session(&tokens, session)
        }
        Commands::Logout => {
            tokens.clear()?;
            println!("Logged out");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Whoami => print_response(api.auth.me().await),
        Commands::Health => print_response(api.health.check().await),
        Commands::Projects(command) => run_projects(&api, command).await,
        Commands::Tasks(command) => run_tasks(&api, command).await,
        Commands::Messages(command) => run_messages(&api, command).await,
        Commands::Notifications(command) => run_notifications(&api, command).await,
    }
}

async fn run_projects(
    api: &SynergySphere,
    command: ProjectCommand,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        ProjectCommand::List { search, paging } => {
            let query = ProjectQuery {
                page: paging.page,
                limit: paging.limit,
                search,
            };
            print_response(api.projects.list(&query).await)
        }
        ProjectCommand::Show { id } => print_response(api.projects.get(&id).await),
        ProjectCommand::Create {
            name,
            description,
            public,
        } => {
            let input = CreateProjectInput {
                name,
                description,
                is_public: Some(public),
                ..Default::default()
            };
            print_response(api.projects.create(input).await)
        }
        ProjectCommand::Delete { id } => print_response(api.projects.delete(&id).await),
        ProjectCommand::Stats { id } => print_response(api.projects.stats(&id).await),
        ProjectCommand::AddMember { id, email, role } => {
            let input = AddMemberInput {
                email: Some(email),
                user_id: None,
                role,
            };
            print_response(api.projects.add_member(&id, &input).await)
        }
        ProjectCommand::RemoveMember { id, user_id } => {
            print_response(api.projects.remove_member(&id, &user_id).await)
        }
    }
}

async fn run_tasks(
    api: &SynergySphere,
    command: TaskCommand,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        TaskCommand::List {
            project,
            status,
            priority,
            search,
            paging,
        } => {
            let query = TaskQuery {
                project_id: project,
                status,
                priority,
                search,
                page: paging.page,
                limit: paging.limit,
                ..Default::default()
            };
            print_response(api.tasks.list(query).await)
        }
        TaskCommand::Mine { status } => {
            let query = TaskQuery {
                status,
                ..Default::default()
            };
            print_response(api.tasks.mine(query).await)
        }
        TaskCommand::Show { id } => print_response(api.tasks.get(&id).await),
        TaskCommand::Create {
            project,
            title,
            description,
            status,
            priority,
            due,
            assignee,
        } => {
            let input = CreateTaskInput {
                title,
                project_id: project,
                description,
                status,
                priority,
                due_date: due,
                assignee_id: assignee,
                tags: None,
            };
            print_response(api.tasks.create(input).await)
        }
        TaskCommand::Status { status, ids } => {
            print_response(api.tasks.bulk_update_status(ids, status).await)
        }
        TaskCommand::Delete { id } => print_response(api.tasks.delete(&id).await),
        TaskCommand::Stats { project } => print_response(api.tasks.project_stats(&project).await),
    }
}

async fn run_messages(
    api: &SynergySphere,
    command: MessageCommand,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        MessageCommand::List {
            project,
            task,
            paging,
        } => {
            let query = MessageQuery {
                project_id: project,
                task_id: task,
                page: paging.page,
                limit: paging.limit,
            };
            print_response(api.messages.list(&query).await)
        }
        MessageCommand::Thread { id } => print_response(api.messages.thread(&id).await),
        MessageCommand::Post {
            content,
            project,
            task,
            reply_to,
            mentions,
        } => {
            let input = CreateMessageInput {
                content,
                project_id: project,
                task_id: task,
                parent_id: reply_to,
                mentions,
            };
            print_response(api.messages.create(&input).await)
        }
        MessageCommand::Search { query, project } => {
            let query = MessageSearchQuery {
                q: query,
                project_id: project,
                limit: None,
            };
            print_response(api.messages.search(&query).await)
        }
    }
}

async fn run_notifications(
    api: &SynergySphere,
    command: NotificationCommand,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        NotificationCommand::List { unread, paging } => {
            let query = NotificationQuery {
                unread_only: unread.then_some(true),
                kind: None,
                page: paging.page,
                limit: paging.limit,
            };
            print_response(api.notifications.list(&query).await)
        }
        NotificationCommand::Read { ids } => {
            let response = if ids.len() == 1 {
                api.notifications.mark_read(&ids[0]).await
            } else {
                api.notifications.mark_many_read(ids).await
            };
            print_response(response)
        }
        NotificationCommand::ReadAll => print_response(api.notifications.mark_all_read().await),
        NotificationCommand::Stats => print_response(api.notifications.stats().await),
    }
}

fn token_path(config: &ClientConfig) -> PathBuf {
    if let Some(path) = &config.auth.token_file {
        return expand_home(path);
    }
    match std::env::var_os("HOME") {
        Some(home) => Path::new(&home).join(".synergysphere").join("token.json"),
        None => PathBuf::from(".synergysphere-token.json"),
    }
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), std::env::var_os("HOME")) {
        (Some(rest), Some(home)) => Path::new(&home).join(rest),
        _ => PathBuf::from(path),
    }
}

fn store_session(
    tokens: &FileTokenStore,
    session: ApiResponse<synergysphere::models::AuthSession>,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match session.into_result() {
        Ok(session) => {
            tokens.save(&session.token)?;
            println!("Logged in as {} <{}>", session.user.name, session.user.email);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_response<T: Serialize>(
    response: ApiResponse<T>,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match response.into_result() {
        Ok(data) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            Ok(ExitCode::FAILURE)
        }
    }
}
