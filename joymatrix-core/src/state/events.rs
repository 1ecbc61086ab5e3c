//! Events that trigger screen transitions

/// Discrete input produced by the sampler, at most one per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Nothing happened this tick
    #[default]
    None,
    /// Stick pushed up
    Up,
    /// Stick pushed down
    Down,
    /// Stick pushed left
    Left,
    /// Stick pushed right
    Right,
    /// Button clicked
    Select,
    /// Button held (long press)
    Back,
}

impl InputEvent {
    /// Every event, `None` included
    pub const ALL: [InputEvent; 7] = [
        InputEvent::None,
        InputEvent::Up,
        InputEvent::Down,
        InputEvent::Left,
        InputEvent::Right,
        InputEvent::Select,
        InputEvent::Back,
    ];

    /// Check if this is a stick direction
    pub fn is_direction(&self) -> bool {
        matches!(
            self,
            InputEvent::Up | InputEvent::Down | InputEvent::Left | InputEvent::Right
        )
    }

    /// Check if this came from the button
    pub fn is_button(&self) -> bool {
        matches!(self, InputEvent::Select | InputEvent::Back)
    }

    /// Check if anything happened
    pub fn is_some(&self) -> bool {
        !matches!(self, InputEvent::None)
    }

    /// Vertical step as a signed delta (-1 up, +1 down, 0 otherwise)
    ///
    /// Lists grow downwards, so `Down` moves the cursor to the next row.
    pub fn row_delta(&self) -> i8 {
        match self {
            InputEvent::Up => -1,
            InputEvent::Down => 1,
            _ => 0,
        }
    }

    /// Horizontal step as a signed delta (-1 left, +1 right, 0 otherwise)
    pub fn value_delta(&self) -> i8 {
        match self {
            InputEvent::Left => -1,
            InputEvent::Right => 1,
            _ => 0,
        }
    }
}

/// Outcome of a game, reported by the hosted game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameOutcome {
    /// Player lost
    Lost,
    /// Player won
    Won,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_events() {
        assert!(InputEvent::Up.is_direction());
        assert!(InputEvent::Right.is_direction());
        assert!(!InputEvent::Select.is_direction());
        assert!(!InputEvent::None.is_direction());
    }

    #[test]
    fn test_button_events() {
        assert!(InputEvent::Select.is_button());
        assert!(InputEvent::Back.is_button());
        assert!(!InputEvent::Down.is_button());
    }

    #[test]
    fn test_deltas() {
        assert_eq!(InputEvent::Up.row_delta(), -1);
        assert_eq!(InputEvent::Down.row_delta(), 1);
        assert_eq!(InputEvent::Left.row_delta(), 0);
        assert_eq!(InputEvent::Left.value_delta(), -1);
        assert_eq!(InputEvent::Right.value_delta(), 1);
        assert_eq!(InputEvent::Select.value_delta(), 0);
    }
}
