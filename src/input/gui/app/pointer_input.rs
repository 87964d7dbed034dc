use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use crate::controllers::interactive::InputEvent;
use crate::core::data::point::PointerPosition;

/// Translates winit pointer events into toolkit-free [`InputEvent`]s.
///
/// winit reports wheel motion without a position, so the last cursor
/// position is remembered and attached to wheel events.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerInput {
    cursor: Option<PointerPosition>,
}

impl PointerInput {
    #[must_use]
    pub fn cursor(&self) -> Option<PointerPosition> {
        self.cursor
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> InputEvent {
        let position = PointerPosition::new(position.x, position.y);
        self.cursor = Some(position);

        InputEvent::PointerMove(position)
    }

    pub fn cursor_left(&mut self) -> InputEvent {
        self.cursor = None;

        InputEvent::PointerLeave
    }

    /// winit's positive `y` means the wheel rolled away from the user, which
    /// zooms in, so the sign is flipped into the negative-zooms-in convention.
    #[must_use]
    pub fn wheel(&self, delta: MouseScrollDelta) -> Option<InputEvent> {
        let position = self.cursor?;
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => -f64::from(y),
            MouseScrollDelta::PixelDelta(offset) => -offset.y,
        };

        Some(InputEvent::Wheel { delta_y, position })
    }

    #[must_use]
    pub fn mouse_button(&self, button: MouseButton, state: ElementState) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => self.cursor.map(InputEvent::PointerDown),
            ElementState::Released => Some(InputEvent::PointerUp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_at(x: f64, y: f64) -> PointerInput {
        let mut input = PointerInput::default();
        input.cursor_moved(PhysicalPosition::new(x, y));
        input
    }

    #[test]
    fn cursor_moved_records_position() {
        let mut input = PointerInput::default();

        let event = input.cursor_moved(PhysicalPosition::new(12.5, 40.0));

        assert_eq!(event, InputEvent::PointerMove(PointerPosition::new(12.5, 40.0)));
        assert_eq!(input.cursor(), Some(PointerPosition::new(12.5, 40.0)));
    }

    #[test]
    fn wheel_up_zooms_in_at_cursor() {
        let input = input_at(100.0, 50.0);

        let event = input.wheel(MouseScrollDelta::LineDelta(0.0, 1.0));

        assert_eq!(
            event,
            Some(InputEvent::Wheel {
                delta_y: -1.0,
                position: PointerPosition::new(100.0, 50.0),
            })
        );
    }

    #[test]
    fn pixel_wheel_delta_is_flipped() {
        let input = input_at(1.0, 2.0);

        let event = input.wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -30.0)));

        assert!(matches!(event, Some(InputEvent::Wheel { delta_y, .. }) if delta_y == 30.0));
    }

    #[test]
    fn wheel_without_cursor_is_ignored() {
        let input = PointerInput::default();

        assert_eq!(input.wheel(MouseScrollDelta::LineDelta(0.0, 1.0)), None);
    }

    #[test]
    fn left_button_maps_to_pointer_down_and_up() {
        let input = input_at(5.0, 6.0);

        assert_eq!(
            input.mouse_button(MouseButton::Left, ElementState::Pressed),
            Some(InputEvent::PointerDown(PointerPosition::new(5.0, 6.0)))
        );
        assert_eq!(
            input.mouse_button(MouseButton::Left, ElementState::Released),
            Some(InputEvent::PointerUp)
        );
    }

    #[test]
    fn other_buttons_are_ignored() {
        let input = input_at(5.0, 6.0);

        assert_eq!(input.mouse_button(MouseButton::Right, ElementState::Pressed), None);
    }

    #[test]
    fn cursor_left_forgets_position() {
        let mut input = input_at(5.0, 6.0);

        assert_eq!(input.cursor_left(), InputEvent::PointerLeave);
        assert_eq!(input.cursor(), None);
    }
}
