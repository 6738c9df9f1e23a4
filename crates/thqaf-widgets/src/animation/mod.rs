//! Time-based tweens driven by the host's animation frames.

pub mod count_up;

pub use count_up::CountUp;
