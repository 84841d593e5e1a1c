use ndarray::{Array1, Array2, Axis, Zip};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::loss::mse::MseLoss;
use crate::math::sigmoid::sigmoid;

/// A restricted Boltzmann machine: one layer of visible binary units, one
/// layer of hidden binary units, fully connected by `weights`, with no
/// intra-layer connections.
///
/// The model owns its random generator so that every stochastic operation
/// (parameter initialization, Bernoulli sampling) is reproducible when
/// constructed through [`Rbm::with_rng`] with a seeded generator.
#[derive(Debug)]
pub struct Rbm<R: Rng = StdRng> {
    pub visible_dim: usize,
    pub hidden_dim: usize,
    /// Pairwise interaction strengths, shape (visible_dim, hidden_dim).
    pub weights: Array2<f64>,
    /// Per-hidden-unit bias, length hidden_dim.
    pub hidden_bias: Array1<f64>,
    /// Per-visible-unit bias, length visible_dim.
    pub visible_bias: Array1<f64>,
    rng: R,
}

impl Rbm<StdRng> {
    /// Builds a model with entropy-seeded randomness.
    pub fn new(visible_dim: usize, hidden_dim: usize) -> Rbm<StdRng> {
        Rbm::with_rng(visible_dim, hidden_dim, StdRng::from_entropy())
    }
}

impl<R: Rng> Rbm<R> {
    /// Builds a model using the supplied generator for initialization and for
    /// all later sampling. Parameters are drawn from Uniform[0, 1), weights
    /// first, then hidden bias, then visible bias.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn with_rng(visible_dim: usize, hidden_dim: usize, mut rng: R) -> Rbm<R> {
        assert!(visible_dim > 0, "visible_dim must be at least 1");
        assert!(hidden_dim > 0, "hidden_dim must be at least 1");

        let uniform = Uniform::new(0.0, 1.0);
        let weights = Array2::random_using((visible_dim, hidden_dim), uniform, &mut rng);
        let hidden_bias = Array1::random_using(hidden_dim, uniform, &mut rng);
        let visible_bias = Array1::random_using(visible_dim, uniform, &mut rng);

        Rbm {
            visible_dim,
            hidden_dim,
            weights,
            hidden_bias,
            visible_bias,
            rng,
        }
    }

    /// P(h = 1 | v): `sigmoid(v · W + b)`, bias broadcast across rows.
    ///
    /// Takes a visible batch of shape (n, visible_dim) and returns a
    /// hidden-probability batch of shape (n, hidden_dim). Deterministic for
    /// fixed parameters; also the feature-extraction surface of the model.
    pub fn compute_hidden_probabilities(&self, visible: &Array2<f64>) -> Array2<f64> {
        (visible.dot(&self.weights) + &self.hidden_bias).mapv(sigmoid)
    }

    /// P(v = 1 | h): `sigmoid(h · Wᵀ + a)`, the symmetric counterpart of
    /// `compute_hidden_probabilities`.
    pub(crate) fn compute_visible_probabilities(&self, hidden: &Array2<f64>) -> Array2<f64> {
        (hidden.dot(&self.weights.t()) + &self.visible_bias).mapv(sigmoid)
    }

    /// Elementwise Bernoulli trials: each entry becomes 1.0 when its
    /// probability strictly exceeds a fresh uniform draw, else 0.0. Inputs
    /// are expected (not checked) to lie in [0, 1].
    pub(crate) fn sample_bernoulli(&mut self, probs: &Array2<f64>) -> Array2<f64> {
        let noise = Array2::random_using(probs.raw_dim(), Uniform::new(0.0, 1.0), &mut self.rng);
        Zip::from(probs)
            .and(&noise)
            .map_collect(|&p, &u| if p > u { 1.0 } else { 0.0 })
    }

    /// One step of CD-1 over a visible batch of shape (n, visible_dim),
    /// updating all three parameter tensors in place.
    ///
    /// Positive phase drives hidden probabilities from the data; the negative
    /// phase reconstructs a sampled visible batch from a sampled hidden state
    /// and re-derives hidden probabilities from it (not re-sampled).
    ///
    /// Returns the halved mean-squared error between the input and its
    /// sampled reconstruction. The loss is measured against the binary
    /// sample, not the reconstruction probability, so it is a noisy
    /// diagnostic rather than the optimized quantity.
    ///
    /// # Panics
    /// Panics (inside the tensor engine, before any parameter is touched)
    /// when the batch width differs from `visible_dim`. An empty batch is a
    /// caller error.
    pub fn fit(&mut self, visible: &Array2<f64>, learning_rate: f64) -> f64 {
        let n = visible.nrows() as f64;

        let hidden_probs = self.compute_hidden_probabilities(visible);
        let hidden_samples = self.sample_bernoulli(&hidden_probs);
        let visible_probs = self.compute_visible_probabilities(&hidden_samples);
        let neg_visible_samples = self.sample_bernoulli(&visible_probs);
        let neg_hidden_probs = self.compute_hidden_probabilities(&neg_visible_samples);

        let loss = MseLoss::loss(visible, &neg_visible_samples);

        let positive_grad = visible.t().dot(&hidden_probs);
        let negative_grad = neg_visible_samples.t().dot(&neg_hidden_probs);

        // Bias updates are learning_rate * per-unit batch means; the division
        // by n folds into the step size.
        let dw = (positive_grad - negative_grad) * (learning_rate / n);
        let db = (&hidden_probs - &neg_hidden_probs).sum_axis(Axis(0)) * (learning_rate / n);
        let da = (visible - &neg_visible_samples).sum_axis(Axis(0)) * (learning_rate / n);

        self.weights += &dw;
        self.hidden_bias += &db;
        self.visible_bias += &da;

        loss
    }

    /// Passes a visible batch up to a sampled hidden state and back down to a
    /// sampled visible reconstruction. Parameters are untouched; only the
    /// generator advances, so repeated calls may differ.
    pub fn reconstruct(&mut self, visible: &Array2<f64>) -> Array2<f64> {
        let hidden_probs = self.compute_hidden_probabilities(visible);
        let hidden_samples = self.sample_bernoulli(&hidden_probs);
        let visible_probs = self.compute_visible_probabilities(&hidden_samples);
        self.sample_bernoulli(&visible_probs)
    }
}
