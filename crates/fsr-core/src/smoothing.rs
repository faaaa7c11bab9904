//! Moving-average filters for the smoothed force readout.

use crate::constants::{FORCE_MAX, WMA_MAX_WIDTH};

/// Linearly weighted moving average: the newest value has weight `width`,
/// the oldest weight 1. Runs in O(1) per value using a running sum and a
/// running weighted sum. Starts from a window of zeros.
#[derive(Clone, Debug)]
pub struct WeightedMovingAverage {
    values: Vec<f32>,
    cursor: usize,
    sum: f32,
    weighted: f32,
}

impl WeightedMovingAverage {
    /// Width is clamped to `1..=WMA_MAX_WIDTH`.
    pub fn new(width: usize) -> Self {
        let width = width.clamp(1, WMA_MAX_WIDTH);
        Self {
            values: vec![0.0; width],
            cursor: 0,
            sum: 0.0,
            weighted: 0.0,
        }
    }

    pub fn width(&self) -> usize {
        self.values.len()
    }

    pub fn next(&mut self, value: f32) -> f32 {
        let width = self.values.len() as f32;
        let next_weighted = self.weighted + value * width - self.sum;
        self.sum += value - self.values[self.cursor];
        self.weighted = next_weighted;
        self.values[self.cursor] = value;
        self.cursor = (self.cursor + 1) % self.values.len();
        let weight_sum = width * (width + 1.0) / 2.0;
        next_weighted / weight_sum
    }

    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(|v| *v = 0.0);
        self.cursor = 0;
        self.sum = 0.0;
        self.weighted = 0.0;
    }
}

/// Hull moving average: low-lag smoothing built from three WMAs,
/// `WMA_sqrt(n)(max(2*WMA_{n/2} - WMA_n, 0))`, clamped to the sensor range.
#[derive(Clone, Debug)]
pub struct HullMovingAverage {
    half: WeightedMovingAverage,
    full: WeightedMovingAverage,
    hull: WeightedMovingAverage,
}

impl HullMovingAverage {
    pub fn new(size: usize) -> Self {
        Self {
            half: WeightedMovingAverage::new(size / 2),
            full: WeightedMovingAverage::new(size),
            hull: WeightedMovingAverage::new((size as f32).sqrt() as usize),
        }
    }

    pub fn next(&mut self, value: f32) -> f32 {
        let half = self.half.next(value);
        let full = self.full.next(value);
        let raw = (2.0 * half - full).max(0.0);
        self.hull.next(raw).clamp(0.0, FORCE_MAX)
    }

    pub fn reset(&mut self) {
        self.half.reset();
        self.full.reset();
        self.hull.reset();
    }
}
