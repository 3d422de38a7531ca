use std::fmt;

use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

use crate::error::FitError;
use crate::math;
use crate::samples::SampleSet;

/// Minimum sample count for a degree-2 fit.
pub const MIN_SAMPLES: usize = 3;

/// Coefficients of y = a*x^2 + b*x + c in pixel coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Parabola {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl Parabola {
    #[inline(always)]
    pub fn eval(&self, x: f32) -> f32 {
        (self.a * x + self.b) * x + self.c
    }

    /// Extremum of the curve, when it has one (a != 0).
    pub fn vertex(&self) -> Option<na::Point2<f32>> {
        if self.a == 0.0 {
            return None;
        }

        let x0 = -self.b / (2.0 * self.a);

        Some(na::Point2::new(x0, self.eval(x0)))
    }
}

impl fmt::Display for Parabola {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}x^2 {:+.4}x {:+.4}", self.a, self.b, self.c)
    }
}

/// A fitted curve and its goodness-of-fit score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryFit {
    pub parabola: Parabola,
    /// Squared Pearson correlation between observed and predicted y,
    /// in [0, 1].
    pub r_squared: f32,
}

/// Least-squares degree-2 fit of the accumulated samples. Degenerate
/// inputs come back as explicit errors, never as a panic or a NaN score.
///
/// The solve runs in f64: the normal equations accumulate x^4, which at
/// pixel scale overflows f32 precision long before it overflows range.
pub fn fit_trajectory(samples: &SampleSet) -> Result<TrajectoryFit, FitError> {
    if samples.len() < MIN_SAMPLES {
        return Err(FitError::TooFewSamples(samples.len()));
    }

    let (xs, ys) = samples.to_vectors();

    if xs.variance() <= f64::EPSILON {
        return Err(FitError::DegenerateX);
    }

    if ys.variance() <= f64::EPSILON {
        return Err(FitError::DegenerateY);
    }

    let params = math::quadratic_ls(&xs, &ys).ok_or(FitError::Singular)?;

    let predicted = xs.map(|x| (params[0] * x + params[1]) * x + params[2]);
    let r = math::pearson(&ys, &predicted).ok_or(FitError::FlatPrediction)?;

    Ok(TrajectoryFit {
        parabola: Parabola {
            a: params[0] as f32,
            b: params[1] as f32,
            c: params[2] as f32,
        },
        r_squared: (r * r) as f32,
    })
}
