use nalgebra as na;

use crate::model::Parabola;

/// Line thickness for the projected path; constant, unlike the tapered
/// trail.
pub const PATH_THICKNESS: u32 = 2;

/// Evaluates a fitted trajectory at a fixed ladder of x positions spanning
/// the frame width, producing the forward path overlay.
#[derive(Debug, Clone)]
pub struct Predictor {
    query_xs: Vec<f32>,
}

impl Predictor {
    #[inline]
    pub fn new(query_xs: Vec<f32>) -> Self {
        Self { query_xs }
    }

    /// Ladder 0, step, 2*step, ... up to and including `span`.
    pub fn with_span(span: f32, step: f32) -> Self {
        debug_assert!(step > 0.0, "query step must be positive");

        let mut query_xs = Vec::new();
        let mut x = 0.0f32;

        while x <= span {
            query_xs.push(x);
            x += step;
        }

        Self { query_xs }
    }

    #[inline]
    pub fn query_points(&self) -> &[f32] {
        &self.query_xs
    }

    /// Ordered points along the curve, one per query x.
    pub fn project(&self, parabola: &Parabola) -> Vec<na::Point2<f32>> {
        self.query_xs
            .iter()
            .map(|&x| na::Point2::new(x, parabola.eval(x)))
            .collect()
    }
}
