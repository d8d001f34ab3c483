use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use models::{NewWord, WordId, WordPatch};
use service::words::{seed, WordService};
use service::ErrorKind;
use tracing::{error, info};
use uuid::Uuid;

/// Manage a term/translation vocabulary on the configured substrate.
#[derive(Debug, Parser)]
#[command(name = "vocab", version)]
struct Cli {
    /// Emit JSON logs instead of the compact format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a word
    Add { term: String, translation: String },
    /// List all words, newest first
    List,
    /// Change the term and/or translation of a word
    Update {
        id: String,
        #[arg(long)]
        term: Option<String>,
        #[arg(long)]
        translation: Option<String>,
    },
    /// Delete one word
    Delete { id: String },
    /// Delete every word
    Clear,
    /// Add the example words if the collection is empty
    Seed,
}

fn init_logging(json: bool) {
    // Load .env first so RUST_LOG applies
    dotenv().ok();
    if json {
        common::utils::logging::init_logging_json();
    } else {
        common::utils::logging::init_logging_default();
    }
    info!(service = "vocab", event = "logger_init", "tracing subscriber initialized");
}

async fn run(cmd: Command, svc: WordService) -> anyhow::Result<()> {
    match cmd {
        Command::Add { term, translation } => {
            let word = svc.add_word(NewWord::new(term, translation)).await?;
            println!("{}", serde_json::to_string_pretty(&word)?);
        }
        Command::List => {
            let words = svc.get_words().await?;
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
        Command::Update { id, term, translation } => {
            let word = svc.update_word(&WordId::new(id), WordPatch { term, translation }).await?;
            println!("{}", serde_json::to_string_pretty(&word)?);
        }
        Command::Delete { id } => {
            svc.delete_word(&WordId::new(id)).await?;
        }
        Command::Clear => {
            svc.delete_all_words().await?;
        }
        Command::Seed => match seed::seed_if_empty(&svc).await? {
            Some(words) => println!("seeded {} words", words.len()),
            None => println!("collection not empty; nothing seeded"),
        },
    }
    Ok(())
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    let service_id = Uuid::new_v4();
    let pid = std::process::id();

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "vocab", event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    let cfg = match configs::AppConfig::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "vocab", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "vocab", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(service = "vocab", event = "start", %service_id, pid, backend = ?cfg.storage.backend, "vocab starting");

    rt.block_on(async move {
        let svc = match service::runtime::open_service(&cfg).await {
            Ok(svc) => svc,
            Err(e) => {
                error!(service = "vocab", event = "store_open_failed", error = %e, "cannot open word store");
                return std::process::ExitCode::FAILURE;
            }
        };
        match run(cli.command, svc).await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                // Word errors are already logged by the store; report kind to the user
                match e.downcast_ref::<service::WordError>().map(|we| we.kind()) {
                    Some(ErrorKind::NotFound) => eprintln!("not found: {e}"),
                    Some(ErrorKind::Persistence) => eprintln!("storage failure: {e}"),
                    None => eprintln!("error: {e}"),
                }
                std::process::ExitCode::FAILURE
            }
        }
    })
}
