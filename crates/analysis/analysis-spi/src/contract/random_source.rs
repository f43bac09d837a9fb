//! Random source trait definition.

/// Source of uniform random values used to add noise to synthetic series.
///
/// Injected into the generator so tests can supply fixed sequences.
pub trait RandomSource: Send {
    /// Next value drawn uniformly from `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Centered noise in `[-amplitude / 2, amplitude / 2)`.
    fn centered(&mut self, amplitude: f64) -> f64 {
        (self.next_unit() - 0.5) * amplitude
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
