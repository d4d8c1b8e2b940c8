/// The directional flags sampled once per frame. Every flag is a plain "is the key held" value;
/// how long it was held is supplied separately as the frame's elapsed time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CameraInput {
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub move_forward: bool,
    pub move_back: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
}

impl CameraInput {
    /// True when at least one flag is set.
    pub fn any(&self) -> bool {
        self.move_left || self.move_right
            || self.move_up || self.move_down
            || self.move_forward || self.move_back
            || self.yaw_left || self.yaw_right
            || self.pitch_up || self.pitch_down
    }
}
