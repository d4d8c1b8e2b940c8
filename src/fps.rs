/// Counts frames and works out the frame rate four times a second.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    enabled: bool,
    prev_secs: f64,
    frame_count: u32,
    fps: f64,
}

impl FpsCounter {
    pub const REFRESH_SECS: f64 = 0.25;

    pub fn new(enabled: bool, now_secs: f64) -> Self {
        Self {
            enabled,
            prev_secs: now_secs,
            frame_count: 0,
            fps: 0.0,
        }
    }

    /// The last computed rate.
    #[cfg(test)]
    pub fn fps(&self) -> f64 { self.fps }

    /// Call once per frame. Returns the new rate whenever it is recomputed.
    pub fn tick(&mut self, now_secs: f64) -> Option<f64> {
        if !self.enabled {
            return None;
        }

        let elapsed = now_secs - self.prev_secs;
        let mut updated = None;

        if elapsed > Self::REFRESH_SECS {
            self.prev_secs = now_secs;
            self.fps = self.frame_count as f64 / elapsed;
            self.frame_count = 0;
            updated = Some(self.fps);
        }
        self.frame_count += 1;

        updated
    }
}

pub fn fps_title(title: &str, fps: f64) -> String {
    format!("{} @fps: {:.2}", title, fps)
}
