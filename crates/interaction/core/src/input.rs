//! Per-tick input sample supplied by the host.

/// State of the interact control for one tick.
///
/// `pressed_this_tick` is the edge (true only on the tick the control went
/// down); `held` is the level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputSample {
    pub pressed_this_tick: bool,
    pub held: bool,
}

impl InputSample {
    /// Control not touched.
    pub const IDLE: Self = Self {
        pressed_this_tick: false,
        held: false,
    };

    /// First tick of a press.
    pub const PRESSED: Self = Self {
        pressed_this_tick: true,
        held: true,
    };

    /// Control kept down after the first tick.
    pub const HELD: Self = Self {
        pressed_this_tick: false,
        held: true,
    };

    pub const fn new(pressed_this_tick: bool, held: bool) -> Self {
        Self {
            pressed_this_tick,
            held,
        }
    }

    /// Derives a sample from the previous and current level of the control.
    pub const fn from_levels(was_down: bool, is_down: bool) -> Self {
        Self {
            pressed_this_tick: is_down && !was_down,
            held: is_down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_only_on_rising_level() {
        assert_eq!(InputSample::from_levels(false, true), InputSample::PRESSED);
        assert_eq!(InputSample::from_levels(true, true), InputSample::HELD);
        assert_eq!(InputSample::from_levels(true, false), InputSample::IDLE);
        assert_eq!(InputSample::from_levels(false, false), InputSample::IDLE);
    }
}
