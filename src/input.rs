use std::collections::HashSet;

use camera::CameraInput;
use glutin::event::{ElementState, KeyboardInput, VirtualKeyCode};

/// The keys currently held down. Window events arrive one at a time, so this is what turns them
/// back into the "is W down right now" question the frame loop asks.
#[derive(Debug, Default)]
pub struct KeyState {
    held: HashSet<VirtualKeyCode>,
}

impl KeyState {
    pub fn handle(&mut self, input: &KeyboardInput) {
        if let Some(key) = input.virtual_keycode {
            match input.state {
                ElementState::Pressed => self.press(key),
                ElementState::Released => self.release(key),
            }
        }
    }

    pub fn press(&mut self, key: VirtualKeyCode) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: VirtualKeyCode) {
        self.held.remove(&key);
    }

    /// Forgets everything, e.g. when the window loses focus and the release events go elsewhere.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: VirtualKeyCode) -> bool {
        self.held.contains(&key)
    }

    fn shift(&self) -> bool {
        self.is_held(VirtualKeyCode::LShift) || self.is_held(VirtualKeyCode::RShift)
    }

    /// WASD moves across the ground, space rises (shift + space sinks), the arrow keys turn.
    pub fn camera_input(&self) -> CameraInput {
        let space = self.is_held(VirtualKeyCode::Space);

        CameraInput {
            move_left: self.is_held(VirtualKeyCode::A),
            move_right: self.is_held(VirtualKeyCode::D),
            move_up: space && !self.shift(),
            move_down: space && self.shift(),
            move_forward: self.is_held(VirtualKeyCode::W),
            move_back: self.is_held(VirtualKeyCode::S),
            yaw_left: self.is_held(VirtualKeyCode::Left),
            yaw_right: self.is_held(VirtualKeyCode::Right),
            pitch_up: self.is_held(VirtualKeyCode::Up),
            pitch_down: self.is_held(VirtualKeyCode::Down),
        }
    }

    pub fn wants_close(&self) -> bool {
        self.is_held(VirtualKeyCode::Escape)
    }
}
