use std::sync::mpsc;
use std::sync::{atomic::AtomicBool, Arc};

use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — number of CD-1 steps over the full training batch
/// - `learning_rate` — step size passed to every `fit` call; must be positive
/// - `log_every`     — emit a `log::info!` loss line every N iterations;
///                     `0` disables periodic logging
/// - `progress_tx`   — optional channel sender; one `EpochStats` is sent per
///                     completed iteration.  If the receiver is dropped the
///                     loop terminates early (clean shutdown).
/// - `stop_flag`     — optional atomic flag; when set to `true` from another
///                     thread the loop terminates before the next iteration.
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub log_every: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with logging disabled, no progress
    /// channel, and no stop flag.
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            log_every: 0,
            progress_tx: None,
            stop_flag: None,
        }
    }
}
