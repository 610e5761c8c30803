//! 16-bit PCM WAV encoding.
//!
//! Output carries only the `fmt ` and `data` chunks, so identical samples
//! always give identical bytes. Samples map to PCM as
//! `round(clamp(x, -1, 1) * 32767)`.

use std::io::{self, Write};

use resona_spec::MAX_PCM_DATA_BYTES;

use crate::buffer::SampleBuffer;

/// Size of the canonical RIFF/fmt/data header in bytes.
pub const HEADER_LEN: usize = 44;

/// Channel layout and rate of a WAV stream. Always 16-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// 1 for mono, 2 for stereo.
    pub channels: u16,
    /// Frames per second.
    pub sample_rate: u32,
}

impl WavFormat {
    /// Bits per sample.
    pub const BITS_PER_SAMPLE: u16 = 16;

    /// One channel at `sample_rate`.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
        }
    }

    /// Two interleaved channels at `sample_rate`.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
        }
    }

    /// Format matching a buffer's channel layout.
    pub fn for_buffer(buffer: &SampleBuffer, sample_rate: u32) -> Self {
        if buffer.is_stereo() {
            Self::stereo(sample_rate)
        } else {
            Self::mono(sample_rate)
        }
    }

    fn block_align(&self) -> u16 {
        self.channels * (Self::BITS_PER_SAMPLE / 8)
    }

    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// The 44-byte header for `data_len` bytes of PCM.
    pub fn header(&self, data_len: u32) -> [u8; HEADER_LEN] {
        let mut header = [0u8; HEADER_LEN];
        let fields: [&[u8]; 13] = [
            b"RIFF",
            &(36 + data_len).to_le_bytes(),
            b"WAVE",
            b"fmt ",
            &16u32.to_le_bytes(),
            &1u16.to_le_bytes(),
            &self.channels.to_le_bytes(),
            &self.sample_rate.to_le_bytes(),
            &self.byte_rate().to_le_bytes(),
            &self.block_align().to_le_bytes(),
            &Self::BITS_PER_SAMPLE.to_le_bytes(),
            b"data",
            &data_len.to_le_bytes(),
        ];
        let mut pos = 0;
        for field in fields {
            header[pos..pos + field.len()].copy_from_slice(field);
            pos += field.len();
        }
        header
    }
}

/// One sample to its 16-bit PCM value.
#[inline]
pub fn to_pcm16(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16
}

/// Little-endian 16-bit PCM bytes for frame-ordered samples.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|&s| to_pcm16(s).to_le_bytes())
        .collect()
}

/// Streams a complete WAV file to `writer`.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_len = u32::try_from(pcm_data.len())
        .ok()
        .filter(|&len| u64::from(len) <= MAX_PCM_DATA_BYTES)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("PCM data exceeds {} bytes", MAX_PCM_DATA_BYTES),
            )
        })?;
    writer.write_all(&format.header(data_len))?;
    writer.write_all(pcm_data)
}

/// Complete WAV file in memory.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Encoded output of one generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Whether the output is stereo.
    pub is_stereo: bool,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Samples per channel.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a finished buffer.
    pub fn from_buffer(buffer: &SampleBuffer, sample_rate: u32) -> io::Result<Self> {
        let format = WavFormat::for_buffer(buffer, sample_rate);
        let pcm = samples_to_pcm16(&buffer.interleaved());
        let wav_data = write_wav_to_vec(&format, &pcm)?;
        Ok(Self {
            wav_data,
            pcm_hash: blake3::hash(&pcm).to_hex().to_string(),
            is_stereo: buffer.is_stereo(),
            sample_rate,
            num_samples: buffer.len(),
        })
    }

    /// Playback length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// The PCM payload after the header.
    pub fn pcm_data(&self) -> &[u8] {
        &self.wav_data[HEADER_LEN.min(self.wav_data.len())..]
    }
}
