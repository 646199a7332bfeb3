use nalgebra::Point2;

use std::collections::VecDeque;

use crate::Float;

/// Chronological history of a body's positions, oldest first.
///
/// The default trail never forgets anything, so memory grows by one point per
/// tick. `with_capacity_limit` keeps only the newest `limit` points instead.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<Point2<Float>>,
    limit: Option<usize>,
}

impl Trail {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    #[inline]
    pub fn push(&mut self, pos: Point2<Float>) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return
            }
            while self.points.len() >= limit {
                self.points.pop_front();
            }
        }
        self.points.push_back(pos);
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
    pub fn last(&self) -> Option<&Point2<Float>> {
        self.points.back()
    }

    pub fn points(&self) -> impl Iterator<Item = &Point2<Float>> + '_ {
        self.points.iter()
    }
}
