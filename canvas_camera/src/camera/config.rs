/// Camera configuration

/// What `Camera::zoom` does when the requested factor would push the frame
/// size out of `[min_frame_size, max_frame_size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePolicy {
    /// Fail with `Error::InvalidArgument`, leave the camera unchanged
    #[default]
    Reject,
    /// Reduce the factor so the frame lands on the bound
    Clamp,
}

/// Camera configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Smallest frame width or height reachable by zooming in
    pub min_frame_size: f64,

    /// Largest frame width or height reachable by zooming out
    pub max_frame_size: f64,

    pub size_policy: SizePolicy,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_frame_size: 1e-6,
            max_frame_size: 1e9,
            size_policy: SizePolicy::Reject,
        }
    }
}

impl CameraConfig {
    pub fn with_size_policy(mut self, size_policy: SizePolicy) -> Self {
        self.size_policy = size_policy;
        self
    }

    pub fn with_frame_size_bounds(mut self, min_frame_size: f64, max_frame_size: f64) -> Self {
        self.min_frame_size = min_frame_size;
        self.max_frame_size = max_frame_size;
        self
    }
}
