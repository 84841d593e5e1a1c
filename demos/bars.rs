use env_logger::Env;
use hematite_rbm::{train_loop, Rbm, TrainConfig};
use ndarray::array;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Three overlapping 4-wide bars, two copies of each.
    let data = array![
        [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
        [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
    ];

    let mut rbm = Rbm::new(data.ncols(), 2);

    let mut config = TrainConfig::new(20_000, 5e-3);
    config.log_every = 1000;
    let final_loss = train_loop(&mut rbm, &data, &config);
    println!("final loss: {final_loss:.6}");

    println!("reconstruction:");
    println!("{}", rbm.reconstruct(&data));
    println!("features:");
    println!("{}", rbm.compute_hidden_probabilities(&data));
}
