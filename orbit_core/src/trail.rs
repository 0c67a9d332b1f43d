//! Bounded position history used to draw orbital paths

use std::collections::VecDeque;

use crate::error::{Result, SimError};
use crate::vector::Vector3;

/// Fixed-capacity FIFO of past positions, oldest first
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vector3>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SimError::InvalidParameter {
                parameter: "trail capacity",
                value: 0.0,
            });
        }

        Ok(Self {
            points: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        })
    }

    /// Appends a point, evicting the oldest one once the trail is full
    pub fn push(&mut self, point: Vector3) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Copy of the history for rendering, oldest first
    pub fn snapshot(&self) -> Vec<Vector3> {
        self.points.iter().copied().collect()
    }

    pub fn points(&self) -> impl Iterator<Item = &Vector3> + '_ {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<Vector3> {
        self.points.back().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
