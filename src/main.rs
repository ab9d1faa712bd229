//! Homework Relay - polls homework review statuses and notifies Telegram
//!
//! Environment:
//!   PRACTICUM_TOKEN  - OAuth token for the homework API
//!   TELEGRAM_TOKEN   - Telegram bot token
//!   TELEGRAM_CHAT_ID - chat that receives notifications
//!   RUST_LOG         - log filter (default: info)

use homework_relay::utils::constants::{APP_NAME, APP_VERSION};
use homework_relay::{init_logging, Poller, PracticumClient, RelayConfig, TelegramNotifier};

use eyre::Result;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging()?;

    info!("{} v{} starting", APP_NAME, APP_VERSION);

    // check_tokens has already logged the missing variables
    let Ok(config) = RelayConfig::from_env() else {
        return Ok(());
    };

    let api = PracticumClient::new(&config)?;
    let notifier = TelegramNotifier::new(&config)?;
    let mut poller = Poller::new(api, notifier);

    tokio::select! {
        _ = poller.run() => {}
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                error!("Failed to listen for Ctrl+C: {}", e);
            }
        }
    }

    info!("🛑 Shutting down");
    info!("📊 Final statistics | {}", poller.stats().summary());

    Ok(())
}
