pub mod math;
pub mod rbm;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use math::sigmoid::sigmoid;
pub use rbm::model::Rbm;
pub use loss::mse::MseLoss;
pub use train::loop_fn::train_loop;
pub use train::train_config::TrainConfig;
pub use train::epoch_stats::EpochStats;
