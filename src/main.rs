use clap::{Args, Parser, Subcommand};
use staffdir_core::{config::Config, seed::seed_if_empty, Store};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "staffdir", about = "Staff directory — cities, departments, employees")]
struct Cli {
    /// Config file to layer over the built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the web UI (default).
    Serve {
        /// Address to bind, e.g. 127.0.0.1:5000.
        #[arg(long)]
        bind: Option<String>,
        #[command(flatten)]
        db: DbArgs,
    },
    /// Create the schema and insert the sample directory if it is empty.
    Seed {
        #[command(flatten)]
        db: DbArgs,
    },
    /// Print every employee with department and city.
    List {
        #[command(flatten)]
        db: DbArgs,
    },
}

#[derive(Args, Default)]
struct DbArgs {
    /// SQLite database file.
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "info" })
            }),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Serve {
        bind: None,
        db: DbArgs::default(),
    }) {
        Command::Serve { bind, db } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            apply_db(&mut config, db);
            serve(config)
        }
        Command::Seed { db } => {
            apply_db(&mut config, db);
            let store = Store::open(&config.database.path)?;
            let seeded = seed_if_empty(&mut store.session()?)?;
            tracing::info!(seeded, path = %store.path().display(), "seed finished");
            Ok(())
        }
        Command::List { db } => {
            apply_db(&mut config, db);
            list(&config)
        }
    }
}

fn apply_db(config: &mut Config, db: DbArgs) {
    if let Some(path) = db.db {
        config.database.path = path;
    }
}

fn serve(config: Config) -> anyhow::Result<()> {
    let store = Store::open(&config.database.path)?;
    if config.database.seed_on_empty {
        seed_if_empty(&mut store.session()?)?;
    }
    let bind = config.server.bind;
    let state = staffdir_web::AppState::new(store, config.directory);

    tokio::runtime::Runtime::new()?.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind).await?;
        staffdir_web::serve(listener, state).await
    })
}

fn list(config: &Config) -> anyhow::Result<()> {
    let store = Store::open(&config.database.path)?;
    let employees = store.session()?.employees(&config.directory.none_label)?;

    if employees.is_empty() {
        println!("No employees in the database.");
        return Ok(());
    }

    println!("Employees:");
    for emp in employees {
        println!(
            "ID: {}, Name: {}, Position: {}, Department: {}, City: {}",
            emp.id, emp.name, emp.position, emp.department, emp.city
        );
    }
    Ok(())
}
