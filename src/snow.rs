// SPDX-License-Identifier: PMPL-1.0-or-later

//! Decorative snowfall drawn behind the browser.
//!
//! The field is stepped once per frame by whichever front-end owns it and
//! shares nothing with the browser state.

use anyhow::{anyhow, Result};

pub const FLAKE_COUNT: usize = 140;
/// Height a flake restarts at after falling past the bottom edge.
pub const WRAP_Y: f32 = -5.0;
pub const MIN_RADIUS: f32 = 0.5;
pub const RADIUS_SPREAD: f32 = 2.0;
pub const MIN_SPEED: f32 = 0.4;
pub const SPEED_SPREAD: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flake {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
}

#[derive(Debug, Clone)]
pub struct SnowField {
    width: f32,
    height: f32,
    flakes: Vec<Flake>,
}

impl SnowField {
    /// Scatter [`FLAKE_COUNT`] flakes over a `width` x `height` surface.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let samples = unit_samples(FLAKE_COUNT * 4)?;
        Ok(Self::from_samples(width, height, &samples))
    }

    /// Build flakes from samples in `[0, 1)`, four per flake.
    pub fn from_samples(width: f32, height: f32, samples: &[f32]) -> Self {
        let flakes = samples
            .chunks_exact(4)
            .map(|s| Flake {
                x: s[0] * width,
                y: s[1] * height,
                radius: s[2] * RADIUS_SPREAD + MIN_RADIUS,
                speed: s[3] * SPEED_SPREAD + MIN_SPEED,
            })
            .collect();
        Self {
            width,
            height,
            flakes,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn flakes(&self) -> &[Flake] {
        &self.flakes
    }

    /// Reseed for a new surface size. No-op when the size is unchanged.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        if width == self.width && height == self.height {
            return Ok(());
        }
        *self = Self::new(width, height)?;
        Ok(())
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        for flake in &mut self.flakes {
            flake.y += flake.speed;
            if flake.y > self.height {
                flake.y = WRAP_Y;
            }
        }
    }
}

fn unit_samples(count: usize) -> Result<Vec<f32>> {
    let mut bytes = vec![0u8; count * 4];
    getrandom::getrandom(&mut bytes)
        .map_err(|err| anyhow!("failed to gather random samples: {err}"))?;
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| {
            let value = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            // 24 bits keep every value exactly representable and below 1.0.
            (value >> 8) as f32 / (1u32 << 24) as f32
        })
        .collect())
}
