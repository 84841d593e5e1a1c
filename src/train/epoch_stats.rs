/// Per-iteration training statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `EpochStats` value after every completed CD-1 step.
#[derive(Debug, Clone)]
pub struct EpochStats {
    /// 1-based iteration number.
    pub epoch: usize,
    /// Total iterations requested for this run.
    pub total_epochs: usize,
    /// Reconstruction loss reported by this iteration's `fit` call.
    pub loss: f64,
    /// Wall-clock duration of this single iteration in milliseconds.
    pub elapsed_ms: u64,
}
