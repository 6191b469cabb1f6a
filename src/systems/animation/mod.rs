//! Animation Pose Engine
//!
//! - state.rs: actor view + state machine
//! - pose.rs: pure per-state target poses
//! - skeleton.rs: joint transforms chased toward a pose
//! - controller.rs: per-actor driver and drawable output

mod controller;
mod pose;
mod skeleton;
mod state;

pub use controller::AnimationController;
pub use pose::{fall, idle, jump_up, land, peak, target_pose, walk};
pub use skeleton::{JointTransform, Pose, Skeleton};
pub use state::{determine_state, ActorState, AnimState};
