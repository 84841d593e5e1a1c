use ndarray::Array2;

pub struct MseLoss;

impl MseLoss {
    /// Halved mean-squared reconstruction error:
    /// mean((reconstruction - original)² / 2) over every element of the batch.
    ///
    /// A diagnostic metric only; CD-1 does not follow its gradient.
    ///
    /// # Panics
    /// Panics if the two batches differ in shape.
    pub fn loss(original: &Array2<f64>, reconstruction: &Array2<f64>) -> f64 {
        let diff = reconstruction - original;
        diff.mapv(|d| d * d).sum() / (2.0 * diff.len() as f64)
    }
}
