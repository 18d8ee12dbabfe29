use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

use super::constants::{
    DEFAULT_MAX_ANGLE_DEG, DEFAULT_SENSITIVITY, MAX_ANGLE_MAX_DEG, MAX_ANGLE_MIN_DEG,
    SENSITIVITY_MAX, SENSITIVITY_MIN,
};
use super::error::StageError;
use super::geometry::{CutLine, PivotSide, Transform};
use super::motion::{InputMode, MotionDriver, Teardown};
use super::split::SplitPlan;

/// Editing stages, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Setup,
    CutLine,
    Dubbing,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Setup, Stage::CutLine, Stage::Dubbing];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Setup => "SETUP",
            Stage::CutLine => "CUT",
            Stage::Dubbing => "DUB",
        }
    }
}

/// User-tunable animation parameters. Both values stay strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationParameters {
    sensitivity: f32,
    max_angle_deg: f32,
}

impl Default for AnimationParameters {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            max_angle_deg: DEFAULT_MAX_ANGLE_DEG,
        }
    }
}

impl AnimationParameters {
    #[inline]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }
    #[inline]
    pub fn max_angle_deg(&self) -> f32 {
        self.max_angle_deg
    }

    pub fn set_sensitivity(&mut self, gain: f32) {
        if gain.is_finite() {
            self.sensitivity = gain.clamp(SENSITIVITY_MIN, SENSITIVITY_MAX);
        }
    }

    pub fn set_max_angle_deg(&mut self, deg: f32) {
        if deg.is_finite() {
            self.max_angle_deg = deg.clamp(MAX_ANGLE_MIN_DEG, MAX_ANGLE_MAX_DEG);
        }
    }
}

/// Everything one editing session owns, passed explicitly to each entry
/// point. `Copy`, so a frame can take a consistent snapshot by value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Session {
    stage: Stage,
    cut_line: CutLine,
    drawing: bool,
    character_size: Option<Vec2>,
    pub transform: Transform,
    pub pivot: PivotSide,
    pub params: AnimationParameters,
    pub motion: MotionDriver,
}

impl Session {
    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }
    #[inline]
    pub fn cut_line(&self) -> CutLine {
        self.cut_line
    }
    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
    #[inline]
    pub fn character_size(&self) -> Option<Vec2> {
        self.character_size
    }
    #[inline]
    pub fn openness(&self) -> f32 {
        self.motion.openness()
    }

    /// Record the loaded character's pixel size, or `None` when cleared.
    pub fn set_character(&mut self, size: Option<Vec2>) {
        self.character_size = size.filter(|s| s.x > 0.0 && s.y > 0.0);
    }

    pub fn can_advance(&self) -> bool {
        self.advance_check().is_ok()
    }

    fn advance_check(&self) -> Result<Stage, StageError> {
        match self.stage {
            Stage::Setup if self.character_size.is_none() => Err(StageError::NoCharacter),
            Stage::Setup => Ok(Stage::CutLine),
            Stage::CutLine if !self.cut_line.is_complete() => {
                Err(StageError::CutLineIncomplete)
            }
            Stage::CutLine => Ok(Stage::Dubbing),
            Stage::Dubbing => Err(StageError::AtLastStage),
        }
    }

    /// Move to the next stage when its precondition holds.
    pub fn advance(&mut self) -> Result<Stage, StageError> {
        let next = self.advance_check()?;
        self.drawing = false;
        self.stage = next;
        Ok(next)
    }

    /// Move to the previous stage, resetting what that stage owns. The
    /// returned teardown says whether an audio session must be stopped.
    pub fn go_back(&mut self) -> Result<Teardown, StageError> {
        match self.stage {
            Stage::Setup => Err(StageError::AtFirstStage),
            Stage::CutLine => {
                self.cut_line = CutLine::default();
                self.drawing = false;
                self.stage = Stage::Setup;
                Ok(Teardown::default())
            }
            Stage::Dubbing => {
                let teardown = self.motion.release();
                self.stage = Stage::CutLine;
                Ok(teardown)
            }
        }
    }

    /// Pointer down in the cut stage starts a new line.
    pub fn begin_cut(&mut self, p: Vec2) -> bool {
        if self.stage != Stage::CutLine {
            return false;
        }
        self.cut_line = CutLine::begin(p);
        self.drawing = true;
        true
    }

    /// Pointer move while dragging moves the free end.
    pub fn extend_cut(&mut self, p: Vec2) -> bool {
        if self.stage != Stage::CutLine || !self.drawing {
            return false;
        }
        self.cut_line = self.cut_line.extended_to(p);
        true
    }

    /// Pointer up or leave. A line with no end stays incomplete.
    pub fn end_cut(&mut self) -> bool {
        std::mem::replace(&mut self.drawing, false)
    }

    pub fn set_mode(&mut self, mode: InputMode) -> Teardown {
        self.motion.set_mode(mode)
    }

    /// The designated key is only listened to while dubbing in keyboard mode.
    #[inline]
    pub fn key_listening(&self) -> bool {
        self.stage == Stage::Dubbing && self.motion.mode() == InputMode::Keyboard
    }

    pub fn set_key_held(&mut self, held: bool) -> bool {
        self.key_listening() && self.motion.set_key_held(held)
    }

    /// Split geometry for this frame, when dubbing with a complete cut line
    /// and a loaded character.
    pub fn split_plan(&self) -> Option<SplitPlan> {
        if self.stage != Stage::Dubbing {
            return None;
        }
        SplitPlan::new(
            &self.cut_line,
            self.transform,
            self.pivot,
            self.openness(),
            self.params.max_angle_deg(),
            self.character_size?,
        )
    }
}

/// Shared handle the render loop, the analysis tick and the input handlers
/// all hold.
///
/// Readers take a [`snapshot`](Self::snapshot) by value at the start of an
/// iteration; writers go through [`update`](Self::update), which edits a copy
/// and commits it in one replace. No borrow outlives either call.
#[derive(Clone, Default)]
pub struct SharedSession(Rc<RefCell<Session>>);

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self(Rc::new(RefCell::new(session)))
    }

    #[inline]
    pub fn snapshot(&self) -> Session {
        *self.0.borrow()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut next = self.snapshot();
        let out = f(&mut next);
        *self.0.borrow_mut() = next;
        out
    }
}
