use dotenvy::dotenv;
use std::process;
use tracing::error;

use activities::config::AppConfig;
use activities::database::{catalog_repo, ActivityDirectory};

fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let directory = match catalog_repo::load_catalog(config.seed_file.as_deref())
        .and_then(ActivityDirectory::from_seed)
    {
        Ok(d) => d,
        Err(e) => {
            error!("catalog check failed: {}", e);
            process::exit(1);
        }
    };

    for (name, record) in directory.snapshot().iter() {
        println!(
            "{}: {}/{} participants, {}",
            name,
            record.participants.len(),
            record.max_participants,
            record.schedule
        );
    }
    println!("{} activities", directory.len());
}
