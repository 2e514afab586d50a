//! Pad input handling: egui pointer and touch events to pad touch samples.
//!
//! Real touches keep their egui touch id. The mouse is treated as one more touch
//! with a reserved id, so the pad's first-touch rule also sorts out the pointer
//! events egui synthesizes from touches.

use crate::state::PadState;
use crate::utils::pad_local;
use eframe::egui;
use rtouchpad::{Point, Release, TouchId};

/// Touch id used for the primary mouse button.
pub const MOUSE_TOUCH_ID: TouchId = u64::MAX;

/// A touch sample in pad-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PadInput {
    Start(TouchId, Point),
    Move(TouchId, Point),
    End(TouchId, Point),
    Cancel(TouchId),
}

/// Translates one egui event into a pad sample.
///
/// Touches and presses only start inside `pad_rect`; once started they are followed
/// wherever they go until released.
///
/// # Arguments
/// * `event` - The raw egui event
/// * `pad_rect` - Screen rectangle of the pad
/// * `mouse_down` - Whether the mouse currently holds a pad gesture (updated)
pub fn translate_event(event: &egui::Event, pad_rect: egui::Rect, mouse_down: &mut bool) -> Option<PadInput> {
    match event {
        egui::Event::Touch { id, phase, pos, .. } => {
            let touch = id.0;
            let at = pad_local(*pos, pad_rect);
            match phase {
                egui::TouchPhase::Start if pad_rect.contains(*pos) => Some(PadInput::Start(touch, at)),
                egui::TouchPhase::Start => None,
                egui::TouchPhase::Move => Some(PadInput::Move(touch, at)),
                egui::TouchPhase::End => Some(PadInput::End(touch, at)),
                egui::TouchPhase::Cancel => Some(PadInput::Cancel(touch)),
            }
        }
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            ..
        } => {
            let at = pad_local(*pos, pad_rect);
            if *pressed && pad_rect.contains(*pos) {
                *mouse_down = true;
                Some(PadInput::Start(MOUSE_TOUCH_ID, at))
            } else if !*pressed && *mouse_down {
                *mouse_down = false;
                Some(PadInput::End(MOUSE_TOUCH_ID, at))
            } else {
                None
            }
        }
        egui::Event::PointerMoved(pos) if *mouse_down => {
            Some(PadInput::Move(MOUSE_TOUCH_ID, pad_local(*pos, pad_rect)))
        }
        egui::Event::PointerGone if *mouse_down => {
            *mouse_down = false;
            Some(PadInput::Cancel(MOUSE_TOUCH_ID))
        }
        _ => None,
    }
}

/// Forwards this frame's input events to the pad.
///
/// Returns true if any sample reached the pad.
pub fn handle_pad_input(ctx: &egui::Context, pad_rect: egui::Rect, state: &mut PadState) -> bool {
    let events = ctx.input(|i| i.events.clone());
    let now_ms = state.now_ms();
    let mut mouse_down = state.mouse_down();
    let mut handled = false;

    for event in &events {
        let Some(input) = translate_event(event, pad_rect, &mut mouse_down) else {
            continue;
        };
        handled = true;

        let pad = state.pad_mut();
        match input {
            PadInput::Start(id, at) => {
                pad.touch_start(id, at, now_ms);
            }
            PadInput::Move(id, at) => {
                pad.touch_move(id, at, now_ms);
            }
            PadInput::End(id, at) => {
                if let Release::Pad(outcome) = pad.touch_end(id, at, now_ms) {
                    log::debug!("release resolved to {:?}", outcome);
                }
            }
            PadInput::Cancel(id) => pad.touch_cancel(id, now_ms),
        }
    }

    state.set_mouse_down(mouse_down);
    handled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(300.0, 300.0))
    }

    fn press(x: f32, y: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_mouse_press_outside_pad_is_ignored() {
        let mut down = false;
        assert_eq!(translate_event(&press(5.0, 5.0, true), rect(), &mut down), None);
        assert!(!down);
        assert_eq!(translate_event(&egui::Event::PointerMoved(egui::pos2(50.0, 50.0)), rect(), &mut down), None);
    }

    #[test]
    fn test_mouse_drag_is_followed_outside_pad() {
        let mut down = false;
        assert_eq!(
            translate_event(&press(160.0, 160.0, true), rect(), &mut down),
            Some(PadInput::Start(MOUSE_TOUCH_ID, Point::new(150.0, 150.0)))
        );
        assert_eq!(
            translate_event(&egui::Event::PointerMoved(egui::pos2(400.0, 160.0)), rect(), &mut down),
            Some(PadInput::Move(MOUSE_TOUCH_ID, Point::new(390.0, 150.0)))
        );
        assert_eq!(
            translate_event(&press(400.0, 160.0, false), rect(), &mut down),
            Some(PadInput::End(MOUSE_TOUCH_ID, Point::new(390.0, 150.0)))
        );
        assert!(!down);
    }

    #[test]
    fn test_touch_events_keep_their_id() {
        let mut down = false;
        let touch = |phase, x: f32| egui::Event::Touch {
            device_id: egui::TouchDeviceId(1),
            id: egui::TouchId(7),
            phase,
            pos: egui::pos2(x, 100.0),
            force: None,
        };

        assert_eq!(translate_event(&touch(egui::TouchPhase::Start, 0.0), rect(), &mut down), None);
        assert_eq!(
            translate_event(&touch(egui::TouchPhase::Start, 60.0), rect(), &mut down),
            Some(PadInput::Start(7, Point::new(50.0, 90.0)))
        );
        assert_eq!(
            translate_event(&touch(egui::TouchPhase::Cancel, 60.0), rect(), &mut down),
            Some(PadInput::Cancel(7))
        );
    }

    #[test]
    fn test_pointer_gone_cancels_mouse_gesture() {
        let mut down = true;
        assert_eq!(
            translate_event(&egui::Event::PointerGone, rect(), &mut down),
            Some(PadInput::Cancel(MOUSE_TOUCH_ID))
        );
        assert!(!down);
    }
}
