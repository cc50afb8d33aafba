//! Engine configuration

use crate::types::SPEED_MS;

/// Tuning knobs for the board engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Interval between automatic advance ticks in milliseconds
    pub tick_ms: u32,
}

impl EngineConfig {
    /// Config with the given tick interval; zero is clamped to 1ms.
    pub fn with_tick_ms(tick_ms: u32) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { tick_ms: SPEED_MS }
    }
}
