/// Visual constants for the canvas renderer and element ids the shell binds.
///
/// Colours are CSS strings handed straight to the 2D context.
// Placeholder background
pub const BG_GRADIENT_TOP: &str = "#2d5a27";
pub const BG_GRADIENT_BOTTOM: &str = "#1a3d15";
pub const GROUND_COLOR: &str = "#3d2914";
pub const GROUND_HEIGHT: f64 = 80.0;

// Cut-line guide
pub const GUIDE_COLOR: &str = "#ff0066";
pub const GUIDE_WIDTH: f64 = 4.0;
pub const GUIDE_DASH: [f64; 2] = [8.0, 6.0];
pub const GUIDE_DASH_MS_PER_PX: f64 = 50.0; // marching-ants speed
pub const PIVOT_COLOR: &str = "#00ff88";
pub const FREE_END_COLOR: &str = "#ff6b6b";
pub const HANDLE_OUTLINE: &str = "#fff";
pub const HANDLE_OUTLINE_WIDTH: f64 = 2.0;
pub const HANDLE_RADIUS: f64 = 10.0;
pub const PIVOT_RING_RADIUS: f64 = 16.0;

// Stage indicator colours
pub const STAGE_ACTIVE_BG: &str = "#00ff88";
pub const STAGE_IDLE_BG: &str = "#333";
pub const MODE_ACTIVE_BG: &str = "#ff0066";
pub const MODE_IDLE_BG: &str = "#222";

// Frame-rate log cadence
pub const FPS_LOG_INTERVAL_SEC: f32 = 5.0;

// Designated key for keyboard-driven openness (KeyboardEvent.code)
pub const FLAP_KEY_CODE: &str = "Space";

// Element ids in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const BACKGROUND_INPUT_ID: &str = "background-input";
pub const CHARACTER_INPUT_ID: &str = "character-input";
pub const AUDIO_INPUT_ID: &str = "audio-input";
pub const POS_X_ID: &str = "pos-x";
pub const POS_Y_ID: &str = "pos-y";
pub const SCALE_ID: &str = "scale";
pub const ROTATION_ID: &str = "rotation";
pub const SENSITIVITY_ID: &str = "sensitivity";
pub const MAX_ANGLE_ID: &str = "max-angle";
pub const MANUAL_ID: &str = "manual-open";
pub const PIVOT_LEFT_ID: &str = "pivot-left";
pub const PIVOT_RIGHT_ID: &str = "pivot-right";
pub const MODE_MANUAL_ID: &str = "mode-manual";
pub const MODE_KEYBOARD_ID: &str = "mode-keyboard";
pub const MODE_AUDIO_ID: &str = "mode-audio";
pub const PLAY_ID: &str = "play-toggle";
pub const BACK_ID: &str = "nav-back";
pub const NEXT_ID: &str = "nav-next";
pub const FLAP_BAR_ID: &str = "flap-bar";
pub const FLAP_VALUE_ID: &str = "flap-value";
pub const FLAP_KEY_ID: &str = "flap-key";
pub const PANEL_SETUP_ID: &str = "panel-setup";
pub const PANEL_CUT_ID: &str = "panel-cut";
pub const PANEL_DUB_ID: &str = "panel-dub";
pub const TRANSFORM_CONTROLS_ID: &str = "transform-controls";
pub const CUT_HELP_ID: &str = "cut-help";
pub const FLAP_METER_ID: &str = "flap-meter";
pub const MANUAL_PANEL_ID: &str = "manual-panel";
pub const KEYBOARD_PANEL_ID: &str = "keyboard-panel";
pub const AUDIO_PANEL_ID: &str = "audio-panel";
pub const STAGE_STEP_IDS: [&str; 3] = ["stage-setup", "stage-cut", "stage-dub"];

// Slider value labels
pub const SCALE_LABEL_ID: &str = "scale-label";
pub const ROTATION_LABEL_ID: &str = "rotation-label";
pub const SENSITIVITY_LABEL_ID: &str = "sensitivity-label";
pub const MAX_ANGLE_LABEL_ID: &str = "max-angle-label";
pub const MANUAL_LABEL_ID: &str = "manual-label";
