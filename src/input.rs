//! Maps SDL events onto what the draw loop should do next.

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    Continue,
    Quit,
    /// The framebuffer changed size; the viewport must follow.
    Resize(u32, u32),
}

pub fn action_for(event: &Event) -> FrameAction {
    match event {
        Event::Quit { .. } => FrameAction::Quit,
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => action_for_key(*keycode),
        Event::Window { win_event, .. } => action_for_window(win_event),
        _ => FrameAction::Continue,
    }
}

pub fn action_for_key(keycode: Keycode) -> FrameAction {
    if keycode == Keycode::Escape {
        FrameAction::Quit
    } else {
        FrameAction::Continue
    }
}

pub fn action_for_window(win_event: &WindowEvent) -> FrameAction {
    match *win_event {
        WindowEvent::Close => FrameAction::Quit,
        WindowEvent::Resized(width, height) | WindowEvent::SizeChanged(width, height)
            if width > 0 && height > 0 =>
        {
            FrameAction::Resize(width as u32, height as u32)
        }
        _ => FrameAction::Continue,
    }
}
