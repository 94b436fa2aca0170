pub mod layout;
pub mod spring;

pub use layout::{project, spring_target, CardMotion, MotionTarget};
pub use spring::{Spring, SpringConfig};
