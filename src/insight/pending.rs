//! An insight request running off the shell's thread.
//!
//! The worker never touches the lead collection. Dropping or dismissing the
//! handle means a late answer is thrown away when it arrives.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use super::{InsightProvider, FAILED_DRAFT, FAILED_INSIGHT};

pub struct PendingInsight {
    rx: Receiver<String>,
    fallback: &'static str,
}

impl PendingInsight {
    /// Run `job` on a worker thread.
    pub fn spawn<F>(job: F, fallback: &'static str) -> Self
    where
        F: FnOnce() -> String + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let worker_tx = tx.clone();
        let spawned = thread::Builder::new()
            .name("insight".to_string())
            .spawn(move || {
                let text = job();
                if worker_tx.send(text).is_err() {
                    tracing::debug!("insight arrived after dismissal; ignored");
                }
            });

        if let Err(e) = spawned {
            tracing::error!(error = %e, "failed to spawn insight worker");
            let _ = tx.send(fallback.to_string());
        }

        Self { rx, fallback }
    }

    pub fn insight(provider: Arc<dyn InsightProvider>, prompt: String) -> Self {
        Self::spawn(move || provider.generate_insight(&prompt), FAILED_INSIGHT)
    }

    pub fn email_draft(provider: Arc<dyn InsightProvider>, lead_name: String, context: String) -> Self {
        Self::spawn(
            move || provider.generate_email_draft(&lead_name, &context),
            FAILED_DRAFT,
        )
    }

    /// The answer if it has arrived. A worker that died without answering
    /// yields the fallback text.
    pub fn poll(&self) -> Option<String> {
        match self.rx.try_recv() {
            Ok(text) => Some(text),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(self.fallback.to_string()),
        }
    }

    /// Block until the answer arrives.
    pub fn wait(self) -> String {
        self.rx
            .recv()
            .unwrap_or_else(|_| self.fallback.to_string())
    }

    /// Stop waiting. The worker finishes on its own and its answer is dropped.
    pub fn dismiss(self) {
        tracing::debug!("insight request dismissed");
    }
}
