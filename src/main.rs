use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use course_api::config::Config;
use course_api::constants::DEFAULT_CONFIG_PATH;
use course_api::logging;
use course_api::seed::Seed;
use course_api::server;
use course_api::storage::{InMemoryStorage, Storage};

#[derive(Parser)]
#[command(name = "course-api")]
#[command(about = "In-memory students and courses HTTP API")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, env = "COURSE_API_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Port to listen on (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// JSON file with initial students and courses
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging; the guard flushes the file log on exit
    let _log_guard = logging::init_logging();

    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    config.apply_env();
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    let seed = match &config.seed {
        Some(path) => {
            info!("Loading seed data from {}", path.display());
            Seed::load(path)?
        }
        None => Seed::builtin(),
    };
    info!(
        students = seed.students.len(),
        courses = seed.courses.len(),
        "Store initialized"
    );

    let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::from_seed(seed));
    server::start_server(&config, storage).await
}
