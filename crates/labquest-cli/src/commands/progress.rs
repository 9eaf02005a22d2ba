use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use std::path::Path;
use uuid::Uuid;

use labquest_core::{compute_level, ProgressionEngine};

use super::{block_on, open_store};

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Compute the level for an XP total
    Level {
        #[arg(long)]
        xp: u32,
    },
    /// Current daily streak for a user
    Streak {
        #[arg(long)]
        user: Uuid,
        /// Override "today" (YYYY-MM-DD); defaults to the current UTC date
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Apply an XP delta and persist the recomputed level
    GrantXp {
        #[arg(long)]
        user: Uuid,
        #[arg(long)]
        xp: u32,
    },
}

pub fn run(action: ProgressAction, data_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProgressAction::Level { xp } => {
            println!("{}", compute_level(xp));
        }
        ProgressAction::Streak { user, today } => {
            let store = open_store(data_dir)?;
            let engine = ProgressionEngine::new(store);
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            let streak = block_on(engine.streak_for(user, today))?;
            println!("{streak}");
        }
        ProgressAction::GrantXp { user, xp } => {
            let store = open_store(data_dir)?;
            let engine = ProgressionEngine::new(store);
            match block_on(engine.grant_xp(user, xp))? {
                Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
                None => return Err("xp grant failed, store unavailable".into()),
            }
        }
    }
    Ok(())
}
