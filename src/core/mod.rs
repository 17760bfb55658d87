//! Domänen-Kern: Kinematik-Solver und 2D-Kamera.

pub mod camera;
pub mod kinematics;

pub use camera::Camera2D;
pub use kinematics::{
    forward_kinematics, solve, ArmInputs, ArmPose, IkError, JointAngles, LinkLengths,
};
