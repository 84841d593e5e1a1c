/// Logistic sigmoid: σ(x) = 1 / (1 + e^(-x)).
///
/// Maps any finite input into the open interval (0, 1); σ(0) = 0.5.
/// Applied elementwise to pre-activations when computing the conditional
/// probabilities of both layers.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
