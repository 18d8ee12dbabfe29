use crate::constants::*;
use crate::core::{InputMode, PivotSide, Session, Stage};
use crate::dom;
use web_sys as web;

/// Everything the DOM controls show, derived from one session snapshot.
///
/// The frame loop rebuilds this every frame and only touches the DOM when
/// it differs from the last applied view.
#[derive(Clone, Debug, PartialEq)]
pub struct UiView {
    pub stage: Stage,
    pub can_advance: bool,
    pub has_character: bool,
    pub cut_complete: bool,
    pub pivot: PivotSide,
    pub mode: InputMode,
    pub key_held: bool,
    pub has_audio: bool,
    pub playing: bool,
    pub flap_percent: u32,
    pub manual_percent: u32,
    pub scale: f32,
    pub rotation_deg: f32,
    pub sensitivity: f32,
    pub max_angle_deg: f32,
}

impl UiView {
    pub fn new(session: &Session, has_audio: bool, playing: bool) -> Self {
        let openness = session.openness();
        Self {
            stage: session.stage(),
            can_advance: session.can_advance(),
            has_character: session.character_size().is_some(),
            cut_complete: session.cut_line().is_complete(),
            pivot: session.pivot,
            mode: session.motion.mode(),
            key_held: session.motion.mode() == InputMode::Keyboard && openness >= 1.0,
            has_audio,
            playing,
            flap_percent: (openness * 100.0).round() as u32,
            manual_percent: (openness * 100.0).round() as u32,
            scale: session.transform.scale(),
            rotation_deg: session.transform.rotation_deg(),
            sensitivity: session.params.sensitivity(),
            max_angle_deg: session.params.max_angle_deg(),
        }
    }

    pub fn apply(&self, document: &web::Document, prev: Option<&UiView>) {
        if prev == Some(self) {
            return;
        }
        if prev.map(|p| p.stage != self.stage).unwrap_or(true) {
            log::info!("[stage] {}", self.stage.label());
            self.apply_stage(document);
        }

        dom::set_visible(document, TRANSFORM_CONTROLS_ID, self.has_character);
        dom::set_visible(document, CUT_HELP_ID, self.cut_complete);
        dom::set_disabled(document, NEXT_ID, !self.can_advance);
        dom::set_visible(document, NEXT_ID, self.stage != Stage::Dubbing);
        dom::set_visible(document, BACK_ID, self.stage != Stage::Setup);
        dom::set_text(
            document,
            NEXT_ID,
            match self.stage {
                Stage::Setup => "DRAW CUT LINE →",
                _ => "START DUBBING →",
            },
        );

        let pivot_btn = |id: &str, on: bool| {
            let bg = if on { STAGE_ACTIVE_BG } else { MODE_IDLE_BG };
            dom::set_style(document, id, "background", bg);
            dom::set_style(document, id, "color", if on { "#000" } else { "#888" });
        };
        pivot_btn(PIVOT_LEFT_ID, self.pivot == PivotSide::Left);
        pivot_btn(PIVOT_RIGHT_ID, self.pivot == PivotSide::Right);

        for (id, mode) in [
            (MODE_MANUAL_ID, InputMode::Manual),
            (MODE_KEYBOARD_ID, InputMode::Keyboard),
            (MODE_AUDIO_ID, InputMode::Audio),
        ] {
            let bg = if self.mode == mode { MODE_ACTIVE_BG } else { MODE_IDLE_BG };
            dom::set_style(document, id, "background", bg);
        }
        dom::set_visible(document, MANUAL_PANEL_ID, self.mode == InputMode::Manual);
        dom::set_visible(document, KEYBOARD_PANEL_ID, self.mode == InputMode::Keyboard);
        dom::set_visible(document, AUDIO_PANEL_ID, self.mode == InputMode::Audio);

        let (key_bg, key_fg) = if self.key_held {
            (STAGE_ACTIVE_BG, "#000")
        } else {
            (STAGE_IDLE_BG, "#fff")
        };
        dom::set_style(document, FLAP_KEY_ID, "background", key_bg);
        dom::set_style(document, FLAP_KEY_ID, "color", key_fg);

        dom::set_visible(document, PLAY_ID, self.has_audio);
        dom::set_text(document, PLAY_ID, if self.playing { "⏹ STOP" } else { "▶ PLAY" });
        dom::set_style(
            document,
            PLAY_ID,
            "background",
            if self.playing { MODE_ACTIVE_BG } else { STAGE_ACTIVE_BG },
        );

        dom::set_style(document, FLAP_BAR_ID, "height", &format!("{}%", self.flap_percent));
        dom::set_text(document, FLAP_VALUE_ID, &format!("{}%", self.flap_percent));
        dom::set_text(
            document,
            MANUAL_LABEL_ID,
            &format!("Mouth Open: {}%", self.manual_percent),
        );
        // Keep the slider in step when the value is reset by a mode switch.
        if self.mode == InputMode::Manual {
            dom::set_range_value(document, MANUAL_ID, self.manual_percent as f32 / 100.0);
        }

        dom::set_text(document, SCALE_LABEL_ID, &format!("Scale: {:.1}x", self.scale));
        dom::set_text(
            document,
            ROTATION_LABEL_ID,
            &format!("Rotation: {:.0}°", self.rotation_deg),
        );
        dom::set_text(
            document,
            SENSITIVITY_LABEL_ID,
            &format!("Sensitivity: {:.1}x", self.sensitivity),
        );
        dom::set_text(
            document,
            MAX_ANGLE_LABEL_ID,
            &format!("Max Angle: {:.0}°", self.max_angle_deg),
        );
    }

    fn apply_stage(&self, document: &web::Document) {
        dom::set_visible(document, PANEL_SETUP_ID, self.stage == Stage::Setup);
        dom::set_visible(document, PANEL_CUT_ID, self.stage == Stage::CutLine);
        dom::set_visible(document, PANEL_DUB_ID, self.stage == Stage::Dubbing);
        dom::set_visible(document, FLAP_METER_ID, self.stage == Stage::Dubbing);
        for (id, stage) in STAGE_STEP_IDS.iter().zip(Stage::ALL) {
            let on = stage == self.stage;
            let bg = if on { STAGE_ACTIVE_BG } else { STAGE_IDLE_BG };
            dom::set_style(document, id, "background", bg);
            dom::set_style(document, id, "color", if on { "#000" } else { "#666" });
        }
    }
}
