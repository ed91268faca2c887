use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use hotel_ops_cli::config::Config;
use hotel_ops_cli::input::Console;
use hotel_ops_cli::{logging, menu};
use persistence::repositories::Repositories;

/// Menu-driven client for the hotel operations database.
#[derive(Parser, Debug)]
#[command(name = "hotel-ops", version)]
struct Args {
    /// Name of the database to connect to
    dbname: String,

    /// Port the database server listens on
    port: u16,

    /// Database user to connect as
    user: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::load()?;

    logging::init_logging(&config.logging);
    info!("Starting hotel-ops v{}", env!("CARGO_PKG_VERSION"));

    let db = config.database_config(&args.dbname, args.port, &args.user);

    let mut console = Console::stdio();
    console.say(menu::BANNER)?;
    console.say("Connecting to database...")?;
    let pool = match persistence::db::create_pool(&db).await {
        Ok(pool) => pool,
        Err(err) => {
            error!("unable to connect to database: {err}");
            eprintln!("Error - Unable to Connect to Database: {err}");
            println!("Make sure you started postgres on this machine");
            std::process::exit(1);
        }
    };
    console.say("Done")?;

    let repos = Repositories::new(pool.clone());
    let outcome = menu::run(&mut console, &repos).await;

    // Single cleanup path for both normal exit and a failed menu loop.
    console.say("Disconnecting from database...")?;
    pool.close().await;
    console.say("Done\n\nBye !")?;

    outcome.map_err(Into::into)
}
