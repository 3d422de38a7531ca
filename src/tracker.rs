use nalgebra as na;
use serde_derive::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::detection::Detection;
use crate::frame::Frame;
use crate::model::{self, TrajectoryFit};
use crate::predictor::Predictor;
use crate::reset::ResetClock;
use crate::samples::SampleSet;
use crate::trail::{Trail, TrailSegment};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Trail ring capacity.
    pub trail_capacity: usize,
    /// Valid adjacent trail pairs needed before a refit is attempted.
    pub refit_pairs: usize,
    /// Minimum detection radius for the marker overlay. Smaller detections
    /// still feed the regression.
    pub min_marker_radius: f32,
    /// Seconds without a detection before accumulated state is dropped.
    pub reset_gap: f32,
    /// Largest x of the projected path.
    pub query_span: f32,
    /// Spacing between projected path points.
    pub query_step: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            trail_capacity: 64,
            refit_pairs: 5,
            min_marker_radius: 10.0,
            reset_gap: 5.0,
            query_span: 650.0,
            query_step: 50.0,
        }
    }
}

/// Render-facing snapshot for one processed frame. Everything is owned, so
/// holding on to an old result never observes later mutation.
#[derive(Debug, Clone)]
pub struct FrameResult {
    /// The centroid to circle this frame, absent when the detection was
    /// missing or too small.
    pub marker: Option<Detection>,
    /// Tapered trail segments, newest first.
    pub trail: Vec<TrailSegment>,
    /// Projected path along the fitted curve; empty while unfit.
    pub projection: Vec<na::Point2<f32>>,
    /// The model behind `projection`, when one exists.
    pub fit: Option<TrajectoryFit>,
    /// Whether the detection-gap reset fired on this frame.
    pub reset: bool,
}

/// Single-object trajectory tracker. Feed it one `Frame` per video frame;
/// it maintains the trail, refits the curve when enough of the recent
/// trail is contiguous, and drops everything after a long detection gap.
#[derive(Debug)]
pub struct Tracker {
    config: TrackerConfig,
    trail: Trail,
    samples: SampleSet,
    predictor: Predictor,
    clock: ResetClock,
    fit: Option<TrajectoryFit>,
    last_detection: Option<Detection>,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Self {
        let trail = Trail::with_capacity(config.trail_capacity);
        let predictor = Predictor::with_span(config.query_span, config.query_step);
        let clock = ResetClock::new(config.reset_gap);

        Self {
            config,
            trail,
            samples: SampleSet::new(),
            predictor,
            clock,
            fit: None,
            last_detection: None,
        }
    }

    /// Advances the tracker by one frame and returns the snapshot to
    /// render for it.
    pub fn advance(&mut self, frame: Frame) -> FrameResult {
        let Frame {
            detection,
            timestamp,
        } = frame;

        if let Some(det) = detection {
            self.samples.push(det.x, det.y);
            self.clock.touch(timestamp);
            self.last_detection = Some(det);
        }

        self.trail.push(detection.map(|d| d.point()));

        if self.trail.valid_pair_count() >= self.config.refit_pairs {
            match model::fit_trajectory(&self.samples) {
                Ok(fit) => {
                    debug!(curve = %fit.parabola, r_squared = fit.r_squared as f64, "trajectory refit");
                    self.fit = Some(fit);
                }
                Err(err) => {
                    debug!(%err, "refit refused, keeping previous model");
                }
            }
        }

        let mut projection = self.projection();

        let reset = self.clock.expired(timestamp);
        if reset {
            info!(
                gap = self.config.reset_gap as f64,
                "detection gap exceeded, dropping accumulated state"
            );

            self.trail.clear();
            self.samples.clear();
            self.clock.clear();
            self.fit = None;
            self.last_detection = None;

            projection = Vec::new();
        }

        FrameResult {
            marker: detection.filter(|d| d.radius >= self.config.min_marker_radius),
            trail: self.trail.segments().collect(),
            projection,
            fit: self.fit,
            reset,
        }
    }

    /// Predicted path for the current model; empty while unfit.
    pub fn projection(&self) -> Vec<na::Point2<f32>> {
        match &self.fit {
            Some(fit) => self.predictor.project(&fit.parabola),
            None => Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[inline]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    #[inline]
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    #[inline]
    pub fn fit(&self) -> Option<&TrajectoryFit> {
        self.fit.as_ref()
    }

    #[inline]
    pub fn last_detection(&self) -> Option<&Detection> {
        self.last_detection.as_ref()
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
