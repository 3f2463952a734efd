/// Todo List - terminal client
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use todo_session::{AuthStatus, Route};
use todo_shell::{App, Flow, ShellConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Terminal client for the Todo List backend", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./todo.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overrides the configuration file
    #[arg(long, env = "TODO_API_URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Run {
        /// Page to open first: /, /login or /signup
        #[arg(short, long, default_value = "/")]
        start: Route,
    },
    /// Probe the backend for an existing session and exit
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is the screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_shell=info,todo_session=info,todo_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ShellConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.url = url;
    }
    config.validate()?;

    tracing::debug!(api_url = %config.api.url, "Configuration loaded");

    match cli.command.unwrap_or(Commands::Run { start: Route::Home }) {
        Commands::Run { start } => run(&config, start).await?,
        Commands::Check => check(&config).await?,
    }

    Ok(())
}

async fn run(config: &ShellConfig, start: Route) -> anyhow::Result<()> {
    let mut app = App::new(config, start.path())?;
    tracing::info!(api_url = %app.client().base_url(), "Starting shell");

    println!("{}", app.render());
    app.mount().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    loop {
        println!("\n{}", app.render());
        print!("\n> ");
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match app.handle_line(&line).await {
            Ok(Flow::Continue) => {
                if app.is_busy() {
                    println!("\n{}", app.render());
                    app.settle().await;
                }
            }
            Ok(Flow::Quit) => break,
            Err(e) => println!("! {}", e),
        }
    }

    tracing::info!("Shell closed");
    Ok(())
}

async fn check(config: &ShellConfig) -> anyhow::Result<()> {
    let app = App::new(config, "/")?;
    app.mount().await;

    let session = app.session();
    match session.status() {
        AuthStatus::Authenticated => {
            if let Some(user) = session.user() {
                println!("Signed in as {} <{}>", user.full_name(), user.email);
            }
        }
        AuthStatus::Unauthenticated => println!("Not signed in"),
        AuthStatus::Loading => println!("Session check did not finish"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_page_must_be_a_known_route() {
        let cli = Cli::try_parse_from(["todo", "run", "--start", "/signup"]).unwrap();
        match cli.command {
            Some(Commands::Run { start }) => assert_eq!(start, Route::Signup),
            _ => panic!("Expected run command"),
        }

        assert!(Cli::try_parse_from(["todo", "run", "--start", "/settings"]).is_err());
    }

    #[test]
    fn test_run_defaults_to_home() {
        let cli = Cli::try_parse_from(["todo", "run"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Run { start: Route::Home })));
    }
}
