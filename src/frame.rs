use crate::detection::Detection;

/// One observation from the video stream: at most one tracked object.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub detection: Option<Detection>,
    pub timestamp: f32, // in seconds
}

impl Frame {
    #[inline]
    pub fn detected(timestamp: f32, detection: Detection) -> Self {
        Self {
            detection: Some(detection),
            timestamp,
        }
    }

    /// Frame where the detector found nothing.
    #[inline]
    pub fn missed(timestamp: f32) -> Self {
        Self {
            detection: None,
            timestamp,
        }
    }
}
