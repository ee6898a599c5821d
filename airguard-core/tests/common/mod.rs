//! Common test utilities for integration tests
//!
//! This module provides:
//! - Deterministic sensor series generators (baseline, noise, spikes)
//! - Reference implementations used as oracles
//! - Float assertion helpers

#![allow(dead_code)]

use airguard_core::{Channel, DataCorrector};

/// Tolerance for comparing averaged floats
pub const EPSILON: f32 = 1e-4;

/// Assert two floats agree within [`EPSILON`]
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Deterministic generator of raw sensor series
pub struct SeriesGenerator {
    seed: u32,
}

impl SeriesGenerator {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Linear congruential step, uniform in [0, 1)
    pub fn random_float(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        ((self.seed >> 16) & 0x7fff) as f32 / 32_768.0
    }

    /// Uniform noise in [-amplitude, amplitude)
    pub fn random_noise(&mut self, amplitude: f32) -> f32 {
        (self.random_float() * 2.0 - 1.0) * amplitude
    }

    /// Baseline with noise and an isolated spike every `spike_every` samples
    pub fn noisy_with_spikes(
        &mut self,
        baseline: f32,
        noise: f32,
        spike: f32,
        spike_every: usize,
        count: usize,
    ) -> Vec<f32> {
        (0..count)
            .map(|i| {
                let mut value = baseline + self.random_noise(noise);
                if spike_every > 0 && i % spike_every == spike_every - 1 {
                    value += spike;
                }
                value
            })
            .collect()
    }
}

/// Mean of the last `window` values, the oracle for the corrected output
pub fn reference_average(history: &[f32], window: usize) -> f32 {
    let start = history.len().saturating_sub(window);
    let tail = &history[start..];
    tail.iter().sum::<f32>() / tail.len() as f32
}

/// Median of the last `window` values
pub fn reference_median(history: &[f32], window: usize) -> f32 {
    let start = history.len().saturating_sub(window);
    let mut tail = history[start..].to_vec();
    tail.sort_by(f32::total_cmp);
    let mid = tail.len() / 2;
    if tail.len() % 2 == 0 {
        (tail[mid - 1] + tail[mid]) / 2.0
    } else {
        tail[mid]
    }
}

/// Run a whole series through one channel, collecting corrected values
pub fn run_series(corrector: &mut DataCorrector, channel: Channel, series: &[f32]) -> Vec<f32> {
    series
        .iter()
        .map(|&raw| corrector.correct(channel, raw).expect("correction failed"))
        .collect()
}
