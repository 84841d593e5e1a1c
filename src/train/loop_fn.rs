use std::sync::atomic::Ordering;
use std::time::Instant;

use log::info;
use ndarray::Array2;
use rand::Rng;

use crate::rbm::model::Rbm;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Trains `rbm` for `config.epochs` CD-1 steps over the full `data` batch and
/// returns the loss of the **last completed iteration**.
///
/// The caller owns the stopping policy entirely: the loop runs the configured
/// number of iterations unless terminated early through `config.stop_flag` or
/// by the `progress_tx` receiver being dropped.
///
/// # Panics
/// Panics if `data` is empty or `config.learning_rate` is not positive; a
/// batch width different from the model's `visible_dim` panics inside the
/// first `fit` call.
pub fn train_loop<R: Rng>(rbm: &mut Rbm<R>, data: &Array2<f64>, config: &TrainConfig) -> f64 {
    assert!(data.nrows() > 0, "training batch must not be empty");
    assert!(
        config.learning_rate > 0.0,
        "learning_rate must be positive"
    );

    let mut last_loss = 0.0;

    for epoch in 1..=config.epochs {
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                break;
            }
        }

        let t_start = Instant::now();
        let loss = rbm.fit(data, config.learning_rate);
        last_loss = loss;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        if config.log_every > 0 && epoch % config.log_every == 0 {
            info!("epoch {epoch}/{}: loss = {loss:.6}", config.epochs);
        }

        if let Some(ref tx) = config.progress_tx {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                loss,
                elapsed_ms,
            };
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                break;
            }
        }
    }

    last_loss
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::AtomicBool;
    use std::sync::{mpsc, Arc};

    fn toy_data() -> Array2<f64> {
        array![[1.0, 0.0, 1.0, 0.0], [0.0, 1.0, 0.0, 1.0]]
    }

    fn seeded_rbm(seed: u64) -> Rbm<StdRng> {
        Rbm::with_rng(4, 2, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn returns_loss_of_last_iteration() {
        let data = toy_data();
        let config = TrainConfig::new(50, 0.1);

        let mut looped = seeded_rbm(1);
        let loop_loss = train_loop(&mut looped, &data, &config);

        let mut manual = seeded_rbm(1);
        let mut manual_loss = f64::NAN;
        for _ in 0..50 {
            manual_loss = manual.fit(&data, 0.1);
        }

        assert_eq!(loop_loss, manual_loss);
        assert_eq!(looped.weights, manual.weights);
    }

    #[test]
    fn emits_one_stats_record_per_iteration() {
        let data = toy_data();
        let (tx, rx) = mpsc::channel();
        let mut config = TrainConfig::new(5, 0.1);
        config.progress_tx = Some(tx);

        let mut rbm = seeded_rbm(2);
        let _ = train_loop(&mut rbm, &data, &config);
        drop(config);

        let stats: Vec<EpochStats> = rx.iter().collect();
        assert_eq!(stats.len(), 5);
        assert_eq!(stats[0].epoch, 1);
        assert_eq!(stats[4].epoch, 5);
        assert!(stats.iter().all(|s| s.total_epochs == 5 && s.loss.is_finite()));
    }

    #[test]
    fn dropped_receiver_stops_the_loop() {
        let data = toy_data();
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut config = TrainConfig::new(10_000, 0.1);
        config.progress_tx = Some(tx);

        let mut looped = seeded_rbm(3);
        let loss = train_loop(&mut looped, &data, &config);

        // Only the first iteration completes before the send fails.
        let mut manual = seeded_rbm(3);
        assert_eq!(loss, manual.fit(&data, 0.1));
        assert_eq!(looped.weights, manual.weights);
    }

    #[test]
    fn pre_set_stop_flag_prevents_any_iteration() {
        let data = toy_data();
        let mut config = TrainConfig::new(10_000, 0.1);
        config.stop_flag = Some(Arc::new(AtomicBool::new(true)));

        let mut rbm = seeded_rbm(4);
        let initial_weights = rbm.weights.clone();
        let loss = train_loop(&mut rbm, &data, &config);

        assert_eq!(loss, 0.0);
        assert_eq!(rbm.weights, initial_weights);
    }

    #[test]
    #[should_panic(expected = "learning_rate must be positive")]
    fn non_positive_learning_rate_is_rejected() {
        let mut rbm = seeded_rbm(5);
        let config = TrainConfig::new(1, 0.0);
        let _ = train_loop(&mut rbm, &toy_data(), &config);
    }
}
