use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use eframe::egui;

use crate::data::fetch::{spawn_fetch, PRIZE_ENDPOINT};
use crate::data::model::Prize;
use crate::state::AppState;
use crate::ui::{panels, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct NobelViewerApp {
    pub state: AppState,
    /// Pending result of the one-shot startup fetch; dropped once resolved.
    fetch_rx: Option<mpsc::Receiver<Result<Vec<Prize>>>>,
}

impl NobelViewerApp {
    pub fn new() -> Self {
        let mut state = AppState::default();
        state.loading = true;
        Self {
            state,
            fetch_rx: Some(spawn_fetch(PRIZE_ENDPOINT.to_string())),
        }
    }

    /// Poll the background fetch. Resolved exactly once; a failure is logged
    /// and both derived views stay empty.
    fn poll_fetch(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.fetch_rx else { return };

        match rx.try_recv() {
            Ok(Ok(prizes)) => {
                log::info!("Loaded {} prize records", prizes.len());
                self.state.set_prizes(prizes);
                self.fetch_rx = None;
            }
            Ok(Err(e)) => {
                log::error!("Error fetching prize data: {e:#}");
                self.state.loading = false;
                self.fetch_rx = None;
            }
            Err(mpsc::TryRecvError::Empty) => {
                // Still in flight; keep the loop ticking while we wait.
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                log::error!("Fetch thread exited without a result");
                self.state.loading = false;
                self.fetch_rx = None;
            }
        }
    }
}

impl Default for NobelViewerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for NobelViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch(ctx);

        // Expire the filter notice; schedule a repaint for the deadline so
        // the banner disappears without user input.
        self.state.expire_notice();
        if let Some(notice) = &self.state.notice {
            let now = std::time::Instant::now();
            ctx.request_repaint_after(notice.expires_at.saturating_duration_since(now));
        }

        // ---- Top panel: title and counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Selector panel: dropdowns, filter action, notice ----
        egui::TopBottomPanel::top("selector_bar").show(ctx, |ui| {
            panels::selector_bar(ui, &mut self.state);
        });

        // ---- Central panel: the two derived tables ----
        egui::CentralPanel::default().show(ctx, |ui| {
            tables::central_tables(ui, &self.state);
        });
    }
}
