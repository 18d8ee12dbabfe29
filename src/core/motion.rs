/// Which producer drives the openness signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Manual,
    Keyboard,
    Audio,
}

/// The single active openness producer and its private state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionSource {
    /// Slider value, already clamped to 0..=1.
    Manual { value: f32 },
    /// Designated key held down.
    Keyboard { held: bool },
    /// Latest envelope sample while an audio session is active.
    Audio { active: bool, envelope: f32 },
}

impl MotionSource {
    /// Fresh producer for `mode`, at rest.
    pub fn at_rest(mode: InputMode) -> Self {
        match mode {
            InputMode::Manual => MotionSource::Manual { value: 0.0 },
            InputMode::Keyboard => MotionSource::Keyboard { held: false },
            InputMode::Audio => MotionSource::Audio {
                active: false,
                envelope: 0.0,
            },
        }
    }

    pub fn mode(&self) -> InputMode {
        match self {
            MotionSource::Manual { .. } => InputMode::Manual,
            MotionSource::Keyboard { .. } => InputMode::Keyboard,
            MotionSource::Audio { .. } => InputMode::Audio,
        }
    }
}

/// What the caller must release after a mode switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Teardown {
    pub stop_audio: bool,
}

/// Openness state machine over [`InputMode`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionDriver {
    source: MotionSource,
}

impl Default for MotionDriver {
    fn default() -> Self {
        Self {
            source: MotionSource::at_rest(InputMode::default()),
        }
    }
}

impl MotionDriver {
    #[inline]
    pub fn mode(&self) -> InputMode {
        self.source.mode()
    }

    #[inline]
    pub fn source(&self) -> MotionSource {
        self.source
    }

    /// Switch producers. The previous one is dropped and the new one starts
    /// at rest, so openness reads 0 until the new producer emits. Selecting
    /// the mode that is already active changes nothing.
    pub fn set_mode(&mut self, mode: InputMode) -> Teardown {
        if mode == self.mode() {
            return Teardown::default();
        }
        let teardown = Teardown {
            stop_audio: matches!(self.source, MotionSource::Audio { .. }),
        };
        self.source = MotionSource::at_rest(mode);
        teardown
    }

    /// Current openness in 0..=1.
    pub fn openness(&self) -> f32 {
        match self.source {
            MotionSource::Manual { value } => value,
            MotionSource::Keyboard { held } => {
                if held {
                    1.0
                } else {
                    0.0
                }
            }
            MotionSource::Audio { active, envelope } => {
                if active {
                    envelope
                } else {
                    0.0
                }
            }
        }
    }

    /// Slider input; ignored outside manual mode.
    pub fn set_manual(&mut self, value: f32) -> bool {
        if let MotionSource::Manual { value: v } = &mut self.source {
            *v = if value.is_finite() {
                value.clamp(0.0, 1.0)
            } else {
                0.0
            };
            return true;
        }
        false
    }

    /// Key edge; ignored outside keyboard mode.
    pub fn set_key_held(&mut self, held: bool) -> bool {
        if let MotionSource::Keyboard { held: h } = &mut self.source {
            *h = held;
            return true;
        }
        false
    }

    /// Mark an audio session as started; ignored outside audio mode.
    pub fn audio_started(&mut self) -> bool {
        if let MotionSource::Audio { active, envelope } = &mut self.source {
            *active = true;
            *envelope = 0.0;
            return true;
        }
        false
    }

    /// Envelope tick; dropped unless audio mode has an active session.
    pub fn push_envelope(&mut self, openness: f32) -> bool {
        if let MotionSource::Audio {
            active: true,
            envelope,
        } = &mut self.source
        {
            *envelope = openness.clamp(0.0, 1.0);
            return true;
        }
        false
    }

    /// Session stopped or reached end of stream.
    pub fn audio_stopped(&mut self) {
        if let MotionSource::Audio { active, envelope } = &mut self.source {
            *active = false;
            *envelope = 0.0;
        }
    }

    /// Leaving the dubbing stage: drop transient input but keep the mode.
    pub fn release(&mut self) -> Teardown {
        let teardown = Teardown {
            stop_audio: matches!(self.source, MotionSource::Audio { active: true, .. }),
        };
        self.source = MotionSource::at_rest(self.mode());
        teardown
    }
}
