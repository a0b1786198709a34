//! Async transfer session
//!
//! Wraps a [`TransferExecutor`] with the single in-flight step timer and a
//! watch channel for progress subscribers. One session owns one transaction's
//! timer state exclusively; a retry aborts the outstanding timer task before
//! restarting, so a stale callback can never advance a restarted run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::error::TransferError;
use super::executor::{TransferExecutor, TransferProgress};
use crate::models::{RemittanceRoute, Transaction};

/// Uniform step-delay range.
#[derive(Debug, Clone, Copy)]
pub struct StepTiming {
    pub min: Duration,
    pub max: Duration,
}

impl StepTiming {
    pub fn uniform_ms(min: u64, max: u64) -> Self {
        Self {
            min: Duration::from_millis(min),
            max: Duration::from_millis(max),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let span = self.max.saturating_sub(self.min);
        self.min + span.mul_f64(rng.r#gen::<f64>())
    }
}

impl Default for StepTiming {
    /// The demo's 900-2100 ms per-step cadence.
    fn default() -> Self {
        Self::uniform_ms(900, 2100)
    }
}

/// Drives one transfer execution on randomized timers.
pub struct TransferSession {
    executor: Arc<Mutex<TransferExecutor>>,
    progress_tx: watch::Sender<TransferProgress>,
    timing: StepTiming,
    driver: Mutex<Option<JoinHandle<()>>>,
}

impl TransferSession {
    pub fn new(route: RemittanceRoute, amount: f64, timing: StepTiming) -> Self {
        let executor = TransferExecutor::new(route, amount, &mut rand::thread_rng());
        let (progress_tx, _) = watch::channel(executor.progress());
        Self {
            executor: Arc::new(Mutex::new(executor)),
            progress_tx,
            timing,
            driver: Mutex::new(None),
        }
    }

    /// Subscribe to progress snapshots. The receiver immediately holds the
    /// current state.
    pub fn subscribe(&self) -> watch::Receiver<TransferProgress> {
        self.progress_tx.subscribe()
    }

    pub fn progress(&self) -> TransferProgress {
        self.progress_tx.borrow().clone()
    }

    /// Start the run. No-op if a driver is already in flight.
    pub fn start(&self) {
        if self.driver.lock().unwrap().is_some() {
            return;
        }
        {
            let mut ex = self.executor.lock().unwrap();
            ex.start();
            self.progress_tx.send_replace(ex.progress());
        }
        self.spawn_driver();
    }

    /// Restart the whole sequence from step 0.
    ///
    /// The outstanding step timer is aborted first; only then is the cursor
    /// reset and a fresh driver spawned.
    pub fn retry(&self) {
        if let Some(old) = self.driver.lock().unwrap().take() {
            old.abort();
        }
        {
            let mut ex = self.executor.lock().unwrap();
            ex.restart();
            self.progress_tx.send_replace(ex.progress());
        }
        self.spawn_driver();
    }

    /// Abandon the run, cancelling any pending step timer. The session keeps
    /// no partial state worth resuming; callers go back to route selection.
    pub fn abandon(&self) {
        if let Some(old) = self.driver.lock().unwrap().take() {
            old.abort();
        }
    }

    /// Finalize a completed run into its transaction + proof records.
    pub fn finalize(&self) -> Result<Transaction, TransferError> {
        self.executor.lock().unwrap().finalize()
    }

    fn spawn_driver(&self) {
        let executor = Arc::clone(&self.executor);
        let tx = self.progress_tx.clone();
        let timing = self.timing;

        let handle = tokio::spawn(async move {
            let mut rng = StdRng::from_entropy();
            loop {
                let delay = timing.sample(&mut rng);
                tokio::time::sleep(delay).await;

                let progress = {
                    let mut ex = executor.lock().unwrap();
                    ex.advance(&mut rng);
                    ex.progress()
                };
                let done = progress.state.is_terminal();
                tx.send_replace(progress);
                if done {
                    break;
                }
            }
        });

        if let Some(old) = self.driver.lock().unwrap().replace(handle) {
            old.abort();
        }
    }
}

impl Drop for TransferSession {
    fn drop(&mut self) {
        self.abandon();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{AnchorDirectory, RateTable};
    use crate::routes::generate_routes;
    use crate::transfer::state::RunState;
    use rand::rngs::StdRng;
    use tokio::time::timeout;

    fn sample_route(escrow: bool) -> RemittanceRoute {
        let mut rng = StdRng::seed_from_u64(5);
        let mut route = generate_routes(
            &AnchorDirectory::builtin(),
            &RateTable::builtin(),
            "US",
            "MX",
            500.0,
            &mut rng,
        )
        .into_iter()
        .next()
        .unwrap();
        route.escrow = escrow;
        route
    }

    async fn wait_terminal(session: &TransferSession) -> RunState {
        let mut rx = session.subscribe();
        timeout(Duration::from_secs(5), async {
            loop {
                let state = rx.borrow_and_update().state;
                if state.is_terminal() {
                    return state;
                }
                rx.changed().await.expect("session dropped");
            }
        })
        .await
        .expect("run must terminate")
    }

    #[tokio::test]
    async fn test_session_reaches_terminal_state() {
        let session = TransferSession::new(sample_route(true), 500.0, StepTiming::uniform_ms(1, 3));
        session.start();
        let state = wait_terminal(&session).await;
        assert!(state.is_terminal());
    }

    #[tokio::test]
    async fn test_session_retries_until_completed_then_finalizes() {
        let session =
            TransferSession::new(sample_route(false), 500.0, StepTiming::uniform_ms(1, 3));
        session.start();

        let mut state = wait_terminal(&session).await;
        let mut retries = 0;
        while state == RunState::Failed {
            retries += 1;
            assert!(retries <= 50, "bridge fault cannot plausibly fire 50 times");
            session.retry();
            // Retry resets the visible cursor to step 0.
            assert_eq!(session.progress().step_index, 0);
            state = wait_terminal(&session).await;
        }

        assert_eq!(state, RunState::Completed);
        let tx = session.finalize().unwrap();
        assert!(tx.proof_of_payment.is_some());
    }

    #[tokio::test]
    async fn test_abandon_stops_progress() {
        let session =
            TransferSession::new(sample_route(true), 500.0, StepTiming::uniform_ms(5, 10));
        session.start();
        session.abandon();

        tokio::time::sleep(Duration::from_millis(30)).await;
        let frozen = session.progress();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(session.progress(), frozen, "no timer may fire after abandon");
    }

    #[tokio::test]
    async fn test_start_is_idempotent_while_driving() {
        let session =
            TransferSession::new(sample_route(false), 500.0, StepTiming::uniform_ms(1, 3));
        session.start();
        session.start();
        let state = wait_terminal(&session).await;
        assert!(state.is_terminal());
    }
}
