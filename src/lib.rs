pub mod detection;
pub mod error;
pub mod frame;
pub mod math;
pub mod model;
pub mod samples;
pub mod tracker;
pub mod trail;

mod predictor;
mod reset;

pub use detection::Detection;
pub use error::FitError;
pub use frame::Frame;
pub use model::{Parabola, TrajectoryFit};
pub use predictor::{Predictor, PATH_THICKNESS};
pub use reset::ResetClock;
pub use samples::SampleSet;
pub use tracker::{FrameResult, Tracker, TrackerConfig};
pub use trail::{Trail, TrailSegment};
