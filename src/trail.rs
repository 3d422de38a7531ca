use std::collections::VecDeque;

use nalgebra as na;

/// One renderable piece of the trail: a line between two adjacent real
/// centroids, thick for recent pairs and thinning with age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    pub from: na::Point2<f32>,
    pub to: na::Point2<f32>,
    pub thickness: u32,
}

/// Bounded most-recent-first history of per-frame centroids. Frames where
/// the detector found nothing are kept as `None` and break the rendered
/// line.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Option<na::Point2<f32>>>,
    capacity: usize,
}

impl Trail {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Inserts the newest entry at the front, evicting the oldest when the
    /// buffer is full.
    pub fn push(&mut self, point: Option<na::Point2<f32>>) {
        if self.points.len() == self.capacity {
            self.points.pop_back();
        }

        self.points.push_front(point);
    }

    /// Drops all entries; capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries, newest first.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Option<na::Point2<f32>>> {
        self.points.iter()
    }

    /// Renderable segments between adjacent real points, newest first.
    /// Pairs with a gap on either side are skipped.
    pub fn segments(&self) -> impl Iterator<Item = TrailSegment> + '_ {
        let capacity = self.capacity;

        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .enumerate()
            .filter_map(move |(idx, pair)| match pair {
                (Some(from), Some(to)) => Some(TrailSegment {
                    from: *from,
                    to: *to,
                    thickness: segment_thickness(capacity, idx + 1),
                }),
                _ => None,
            })
    }

    /// Number of adjacent pairs with a real point on both sides. Feeds the
    /// refit gate.
    #[inline]
    pub fn valid_pair_count(&self) -> usize {
        self.segments().count()
    }
}

/// Taper for the pair at position `i`, counted from the newest pair at
/// i = 1: round(2.5 * sqrt(capacity / (i + 1))).
fn segment_thickness(capacity: usize, i: usize) -> u32 {
    ((capacity as f32 / (i + 1) as f32).sqrt() * 2.5).round() as u32
}
