/// Reasons a stage transition is refused.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageError {
    #[error("no character image loaded")]
    NoCharacter,

    #[error("cut line needs both a start and an end point")]
    CutLineIncomplete,

    #[error("already at the first stage")]
    AtFirstStage,

    #[error("already at the last stage")]
    AtLastStage,
}
