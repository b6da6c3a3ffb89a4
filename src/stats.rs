//! Timing statistics for benchmark reports.

use std::time::Duration;

use crate::error::{Error, Result};

/// Mean and population variance of a set of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population variance, `Σ(x - mean)² / n`.
    pub variance: f64,
}

impl Summary {
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::EmptySamples);
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        Ok(Self {
            count: samples.len(),
            mean,
            variance,
        })
    }

    /// Summarizes durations in milliseconds.
    pub fn from_durations(samples: &[Duration]) -> Result<Self> {
        let millis: Vec<f64> = samples.iter().map(|d| d.as_secs_f64() * 1000.0).collect();
        Self::from_samples(&millis)
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}
