use nalgebra as na;

/// Regression inputs for the current tracking episode: every real centroid
/// since the last reset, in arrival order. Unbounded; the gap reset is what
/// empties it.
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    xs: Vec<f32>,
    ys: Vec<f32>,
}

impl SampleSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Both columns grow together; they are never pushed separately.
    #[inline]
    pub fn push(&mut self, x: f32, y: f32) {
        self.xs.push(x);
        self.ys.push(y);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.xs.clear();
        self.ys.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Solver columns, widened to f64 for the x^4 sums in the normal
    /// equations.
    pub fn to_vectors(&self) -> (na::DVector<f64>, na::DVector<f64>) {
        let xs = na::DVector::from_iterator(self.xs.len(), self.xs.iter().map(|&v| v as f64));
        let ys = na::DVector::from_iterator(self.ys.len(), self.ys.iter().map(|&v| v as f64));

        (xs, ys)
    }
}
