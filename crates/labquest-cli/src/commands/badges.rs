use clap::Subcommand;
use std::path::Path;
use uuid::Uuid;

use labquest_core::{ProgressionEngine, ProgressionStore};

use super::{block_on, open_store};

#[derive(Subcommand)]
pub enum BadgesAction {
    /// Print the badge catalog
    List,
    /// Evaluate and record newly earned badges for a user
    Evaluate {
        #[arg(long)]
        user: Uuid,
        /// Attempt id that triggered the evaluation (drives completion
        /// criteria; omit for an opportunistic profile-view run)
        #[arg(long)]
        completed: Option<Uuid>,
    },
}

pub fn run(action: BadgesAction, data_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(data_dir)?;
    match action {
        BadgesAction::List => {
            let definitions = block_on(store.badge_definitions())??;
            println!("{}", serde_json::to_string_pretty(&definitions)?);
        }
        BadgesAction::Evaluate { user, completed } => {
            let attempts = block_on(store.attempts(user))??;
            let just_completed =
                completed.and_then(|id| attempts.iter().find(|a| a.id == id).cloned());

            let engine = ProgressionEngine::new(store);
            let newly = block_on(engine.award_new_badges(user, just_completed.as_ref()))?;
            println!("{}", serde_json::to_string_pretty(&newly)?);
        }
    }
    Ok(())
}
