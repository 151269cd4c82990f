//! Turn protocol: decisions, validation, session state and turn control

pub mod decision;
pub mod session;
pub mod submissions;
pub mod turn;

pub use decision::{validate_judge, validate_play, AcceptedPlay, Decision, JudgePolicy, Judgment};
pub use session::{Session, DEFAULT_HAND_SIZE};
pub use submissions::collect_submissions;
pub use turn::TurnController;
