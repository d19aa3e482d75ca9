use skillswap::config::Settings;
use skillswap::core::{MatchList, MatchTab, Notifier, SessionBook, SwipeTracker, SwipeView};
use skillswap::models::SwipeAction;
use skillswap::services::{MockBackend, SkillSwapApi};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &Settings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

/// Walk one scripted browsing session against the mock backend
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load()?;
    init_logging(&settings);

    if std::env::args().any(|arg| arg == "--print-config") {
        println!("{}", settings.to_toml()?);
        return Ok(());
    }

    info!("Starting SkillSwap demo session...");

    let api: Arc<dyn SkillSwapApi> = Arc::new(MockBackend::new(&settings.mock));
    let notifier = Notifier::new();

    let mut tracker = SwipeTracker::new(api.clone(), notifier.clone(), settings.swipe.undo_window());
    if let Err(e) = tracker.load_profiles().await {
        error!("Could not load the swipe deck: {}", e);
    }

    let script = [SwipeAction::Pass, SwipeAction::Like, SwipeAction::Superlike];
    let mut step = 0;
    while let SwipeView::Card(profile) = tracker.view() {
        let action = script[step % script.len()];
        info!("Deciding {} on {} ({})", action, profile.name, profile.location);

        match tracker.decide(action).await {
            Ok(outcome) if outcome.celebrate => {
                if let Some(matched) = tracker.dismiss_match() {
                    info!("Matched with {}!", matched.name);
                }
            }
            Ok(_) => {}
            Err(e) => {
                error!("Swipe failed, stopping: {}", e);
                break;
            }
        }

        // Take back the very first pass once, then carry on
        if step == 0 && tracker.undo() {
            info!("Undid the first decision, cursor at {}", tracker.cursor());
            tracker.decide(SwipeAction::Like).await?;
        }
        step += 1;
    }

    info!("Deck exhausted after {} profiles", tracker.len());

    let mut matches = MatchList::new(api.clone(), notifier.clone(), settings.matches.recent_days);
    if matches.refresh().await.is_ok() {
        let unread = matches.filtered("", MatchTab::Unread, chrono::Utc::now());
        info!("{} matches, {} with unread messages", matches.all().len(), unread.len());
    }

    let mut sessions = SessionBook::new(api, notifier.clone());
    if sessions.refresh().await.is_ok() {
        let now = chrono::Utc::now();
        info!(
            "{} upcoming and {} past sessions",
            sessions.upcoming(now).len(),
            sessions.past(now).len()
        );
    }

    for notice in notifier.drain() {
        info!("[{:?}] {}: {}", notice.variant, notice.title, notice.description);
    }

    Ok(())
}
