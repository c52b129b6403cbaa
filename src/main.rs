use anyhow::Result;
use clap::{Parser, Subcommand};
use legisgraph::db::{migrate, Db};
use legisgraph::graph::{build_graph, GraphStore, SharedGraph};
use legisgraph::http::{self, AppState};
use legisgraph::Config;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "legisgraph")]
#[command(about = "Legislative knowledge graph service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (builds the graph once on startup)
    Serve,
    /// Rebuild the graph once and print the summary
    Build,
    /// Verify database schema
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Serve) => run_server().await?,
        Some(Command::Build) => run_build().await?,
        Some(Command::Verify) | None => run_schema_verification().await?,
    }

    Ok(())
}

/// Open the database and apply pending migrations
async fn init_db(config: &Config) -> Result<Db> {
    let db = Db::new(config.db_path());
    let migrations_dir = Path::new("migrations").to_path_buf();
    db.with_connection(move |conn| migrate::run_migrations(conn, &migrations_dir))
        .await?;
    log::info!("Database initialized successfully");
    Ok(db)
}

/// Run the HTTP server
async fn run_server() -> Result<()> {
    log::info!("Starting Legisgraph v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    let db = init_db(&config).await?;

    // Initial build is best-effort: an empty or cold database is not fatal,
    // the graph can be rebuilt later via POST /api/graph/build
    let graph = SharedGraph::new(GraphStore::new());
    match build_graph(&db, &config.graph).await {
        Ok((store, summary)) => {
            graph.publish(store);
            log::info!(
                "Initial graph ready: {} nodes, {} edges",
                summary.nodes,
                summary.edges
            );
        }
        Err(e) => {
            log::warn!("Initial graph build failed, serving empty graph: {}", e);
        }
    }

    let state = AppState::new(db, graph, config);
    http::serve(state).await?;

    Ok(())
}

/// Rebuild the graph once and print the summary
async fn run_build() -> Result<()> {
    let config = Config::load()?;
    let db = init_db(&config).await?;

    let (store, summary) = build_graph(&db, &config.graph).await?;
    let stats = store.stats();

    println!("{}", serde_json::to_string_pretty(&summary)?);
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

/// Verify that all expected database objects exist
async fn run_schema_verification() -> Result<()> {
    use legisgraph::error::LegisgraphError;

    log::info!("Starting Legisgraph v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    log::info!("Database path: {}", config.db_path().display());

    let db = init_db(&config).await?;

    db.with_connection(|conn| {
        let mut stmt =
            conn.prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")?;
        let tables: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        let expected_tables = vec![
            "bills",
            "campaign_contributions",
            "committee_memberships",
            "committees",
            "cosponsors",
            "members",
            "schema_migrations",
        ];
        let mut all_tables_exist = true;

        for table in &expected_tables {
            if !tables.iter().any(|t| t == table) {
                log::error!("Missing table: {}", table);
                all_tables_exist = false;
            } else {
                log::debug!("Table exists: {}", table);
            }
        }

        if !all_tables_exist {
            return Err(LegisgraphError::Config(
                "Not all required tables exist".to_string(),
            ));
        }

        let applied = migrate::get_applied_migrations(conn)?;
        if applied.len() < 3 {
            return Err(LegisgraphError::Config(format!(
                "Expected at least 3 migrations, found {}",
                applied.len()
            )));
        }
        log::debug!("{} migrations applied", applied.len());

        let journal_mode: String = conn.query_row("PRAGMA journal_mode", [], |row| row.get(0))?;
        if journal_mode.to_uppercase() != "WAL" {
            return Err(LegisgraphError::Config(format!(
                "Journal mode is not WAL: {}",
                journal_mode
            )));
        }
        log::debug!("Journal mode: WAL");

        let integrity: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if integrity != "ok" {
            return Err(LegisgraphError::Config(format!(
                "Database integrity check failed: {}",
                integrity
            )));
        }
        log::info!("Database integrity: OK");

        Ok(())
    })
    .await?;

    log::info!("Database schema verification complete");
    Ok(())
}
