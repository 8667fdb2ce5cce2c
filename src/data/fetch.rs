use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};

use super::model::{Prize, PrizeResponse};

// ---------------------------------------------------------------------------
// One-shot remote load
// ---------------------------------------------------------------------------

/// Public Nobel Prize API, v1 prize listing.
pub const PRIZE_ENDPOINT: &str = "https://api.nobelprize.org/v1/prize.json";

/// Fetch and parse the prize dataset. Issued once at startup; there is no
/// retry or timeout policy on top of the client defaults.
pub fn fetch_prizes(url: &str) -> Result<Vec<Prize>> {
    let response = reqwest::blocking::get(url)
        .context("requesting prize dataset")?
        .error_for_status()
        .context("prize endpoint returned an error status")?;

    let body = response.text().context("reading response body")?;
    let parsed: PrizeResponse =
        serde_json::from_str(&body).context("parsing prize dataset")?;

    Ok(parsed.prizes)
}

/// Run [`fetch_prizes`] on a background thread and hand the result back over
/// a channel, so the UI loop can poll without blocking a frame.
pub fn spawn_fetch(url: String) -> mpsc::Receiver<Result<Vec<Prize>>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        // The receiver may have been dropped on shutdown; nothing to do then.
        let _ = tx.send(fetch_prizes(&url));
    });
    rx
}
