use std::ops::Range;

use super::constants::{
    MAGNITUDE_MIDPOINT, NOISE_GATE, OPENNESS_EXPONENT, SPEECH_BAND_HIGH_HZ, SPEECH_BAND_LOW_HZ,
};

/// Shape of the analyser output the envelope is computed from.
///
/// - `sample_rate`: audio context sample rate in Hz
/// - `fft_size`: analyser FFT size; bin width is `sample_rate / fft_size`
/// - `bin_count`: length of the magnitude buffer (normally `fft_size / 2`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalysisConfig {
    pub sample_rate: f32,
    pub fft_size: u32,
    pub bin_count: usize,
}

impl AnalysisConfig {
    #[inline]
    pub fn bin_width_hz(&self) -> f32 {
        self.sample_rate / self.fft_size as f32
    }

    /// Bins covering the speech band, `[floor(300/w), min(len, floor(3000/w)))`.
    ///
    /// Empty when the configuration leaves no bins in the band.
    pub fn speech_bins(&self) -> Range<usize> {
        let w = self.bin_width_hz();
        if !(w.is_finite() && w > 0.0) {
            return 0..0;
        }
        let start = (SPEECH_BAND_LOW_HZ / w).floor() as usize;
        let end = self.bin_count.min((SPEECH_BAND_HIGH_HZ / w).floor() as usize);
        start..end.max(start)
    }
}

/// Mean magnitude over `bins`; an empty or out-of-range band is silence.
pub fn band_average(magnitudes: &[u8], bins: Range<usize>) -> f32 {
    let end = bins.end.min(magnitudes.len());
    if end <= bins.start {
        return 0.0;
    }
    let band = &magnitudes[bins.start..end];
    let sum: u32 = band.iter().map(|&m| m as u32).sum();
    sum as f32 / band.len() as f32
}

/// Scale an average byte magnitude into 0..=1 with the user's gain.
#[inline]
pub fn normalize(average: f32, sensitivity: f32) -> f32 {
    ((average / MAGNITUDE_MIDPOINT) * sensitivity).min(1.0)
}

/// Gate out the noise floor, then compress so quiet speech still moves.
#[inline]
pub fn shape(normalized: f32) -> f32 {
    if normalized > NOISE_GATE {
        normalized.powf(OPENNESS_EXPONENT)
    } else {
        0.0
    }
}

/// One openness sample from one analyser frame.
pub fn openness_from_spectrum(magnitudes: &[u8], config: &AnalysisConfig, sensitivity: f32) -> f32 {
    let avg = band_average(magnitudes, config.speech_bins());
    shape(normalize(avg, sensitivity))
}

/// Per-session analysis state: the configuration plus a reusable buffer the
/// audio backend fills once per tick.
#[derive(Clone, Debug)]
pub struct EnvelopeExtractor {
    config: AnalysisConfig,
    buffer: Vec<u8>,
    last: f32,
}

impl EnvelopeExtractor {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            buffer: vec![0; config.bin_count],
            last: 0.0,
        }
    }

    #[inline]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Buffer for the backend to write the current magnitudes into.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Compute the openness for the magnitudes currently in the buffer.
    pub fn sample(&mut self, sensitivity: f32) -> f32 {
        self.last = openness_from_spectrum(&self.buffer, &self.config, sensitivity);
        self.last
    }

    /// Most recent sample; 0 after [`reset`](Self::reset).
    #[inline]
    pub fn last(&self) -> f32 {
        self.last
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0);
        self.last = 0.0;
    }
}
