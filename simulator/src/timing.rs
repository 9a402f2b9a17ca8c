//! Timing constants for the simulator loop.

use std::time::Duration;

/// Target frame time (~30 FPS). The loop sleeps if a frame finishes early.
pub const FRAME_TIME: Duration = Duration::from_millis(33);

/// How often the demo "day" advances while auto-advance is on.
pub const DAY_TICK: Duration = Duration::from_millis(250);
