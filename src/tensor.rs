// ImageTensor — owned pixel buffer in channel-first planar layout

use crate::error::{Error, Result};

/// A decoded, transformed image as a flat `f32` buffer in `[C, H, W]`
/// (channel-first, row-major) layout, ready to be handed to a framework's
/// batching machinery.
///
/// The buffer is immutable after construction. `PartialEq` compares the raw
/// values, so two tensors from the same file through the same deterministic
/// pipeline compare bit-identical.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    data: Vec<f32>,
    channels: usize,
    height: usize,
    width: usize,
}

impl ImageTensor {
    /// Build from a flat buffer. Fails if the element count does not match
    /// `channels * height * width`.
    pub fn from_parts(data: Vec<f32>, channels: usize, height: usize, width: usize) -> Result<Self> {
        let expected = channels * height * width;
        if data.len() != expected {
            return Err(Error::ElementCountMismatch {
                channels,
                height,
                width,
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            channels,
            height,
            width,
        })
    }

    /// Shape as `[channels, height, width]`.
    pub fn shape(&self) -> [usize; 3] {
        [self.channels, self.height, self.width]
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The flat planar buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consume into the flat planar buffer.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Value at (channel, row, col).
    ///
    /// # Panics
    /// Panics if any coordinate is out of range.
    pub fn get(&self, channel: usize, row: usize, col: usize) -> f32 {
        assert!(channel < self.channels && row < self.height && col < self.width);
        self.data[channel * self.height * self.width + row * self.width + col]
    }
}
