//! Arm2R IK Studio Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, ViewState};
pub use crate::core::{
    forward_kinematics, solve, ArmInputs, ArmPose, Camera2D, IkError, JointAngles, LinkLengths,
};
pub use shared::{RenderScene, StudioOptions};
