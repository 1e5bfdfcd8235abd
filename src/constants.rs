// Play-field dimensions (logical units; all positional math uses these)
pub const FIELD_WIDTH: f64 = 400.0;
pub const FIELD_HEIGHT: f64 = 600.0;

// Bird initial pose
pub const BIRD_START_X: f64 = 50.0;
pub const BIRD_START_Y: f64 = 200.0;
pub const BIRD_WIDTH: f64 = 30.0;
pub const BIRD_HEIGHT: f64 = 30.0;

// Pipe generation
pub const PIPE_WIDTH: f64 = 50.0;
pub const PIPE_GAP: f64 = 180.0;
pub const PIPE_MIN_HEIGHT: u32 = 80;
pub const PIPE_MAX_HEIGHT: u32 = 280;
pub const PIPE_SPAWN_X: f64 = FIELD_WIDTH;

// Host frame pacing (~60 fps, display-synced)
pub const FRAME_INTERVAL_MS: u64 = 16;

// Cosmetic bird tilt, degrees per unit of vertical velocity
pub const ROTATION_DEGREES_PER_VELOCITY: f64 = 2.0;
