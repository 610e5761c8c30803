//! Finished sample buffers.

/// Generated audio, mono or stereo, values in [-1, 1].
#[derive(Debug, Clone, PartialEq)]
pub enum SampleBuffer {
    /// Single channel.
    Mono(Vec<f64>),
    /// Independent left and right channels of equal length.
    Stereo {
        /// Left channel.
        left: Vec<f64>,
        /// Right channel.
        right: Vec<f64>,
    },
}

impl SampleBuffer {
    /// Samples per channel.
    pub fn len(&self) -> usize {
        match self {
            SampleBuffer::Mono(samples) => samples.len(),
            SampleBuffer::Stereo { left, .. } => left.len(),
        }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true for two-channel data.
    pub fn is_stereo(&self) -> bool {
        matches!(self, SampleBuffer::Stereo { .. })
    }

    /// Channel count.
    pub fn channels(&self) -> u16 {
        if self.is_stereo() {
            2
        } else {
            1
        }
    }

    /// Borrow each channel in order.
    pub fn channel_slices(&self) -> Vec<&[f64]> {
        match self {
            SampleBuffer::Mono(samples) => vec![samples.as_slice()],
            SampleBuffer::Stereo { left, right } => vec![left.as_slice(), right.as_slice()],
        }
    }

    /// Largest absolute value over all channels.
    pub fn peak(&self) -> f64 {
        self.channel_slices()
            .into_iter()
            .map(crate::safety::peak)
            .fold(0.0_f64, f64::max)
    }

    /// Samples in frame order (L0, R0, L1, R1, ... for stereo).
    pub fn interleaved(&self) -> Vec<f64> {
        match self {
            SampleBuffer::Mono(samples) => samples.clone(),
            SampleBuffer::Stereo { left, right } => left
                .iter()
                .zip(right)
                .flat_map(|(&l, &r)| [l, r])
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleave_stereo() {
        let buffer = SampleBuffer::Stereo {
            left: vec![0.1, 0.2],
            right: vec![-0.1, -0.2],
        };
        assert_eq!(buffer.interleaved(), vec![0.1, -0.1, 0.2, -0.2]);
        assert_eq!(buffer.channels(), 2);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_peak_spans_channels() {
        let buffer = SampleBuffer::Stereo {
            left: vec![0.1, 0.2],
            right: vec![-0.7, 0.0],
        };
        assert_eq!(buffer.peak(), 0.7);
        assert_eq!(SampleBuffer::Mono(vec![]).peak(), 0.0);
    }
}
