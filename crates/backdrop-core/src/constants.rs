use crate::surface::Rgba;

// Shared tuning constants for both backdrop renderers.

// Particle field layout
pub const PARTICLE_AREA_QUOTA: f32 = 9000.0; // one particle per this many square pixels
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 4.0; // exclusive
pub const PARTICLE_DENSITY_MIN: f32 = 1.0;
pub const PARTICLE_DENSITY_MAX: f32 = 31.0; // exclusive
pub const PARTICLE_COLOR: Rgba = Rgba::WHITE;

// Pointer interaction
pub const POINTER_RADIUS: f32 = 100.0; // repulsion reach in pixels
pub const POINTER_SENTINEL: f32 = -1000.0; // far outside any canvas until the first move
pub const RESTORE_FRACTION: f32 = 0.1; // share of the remaining offset recovered per frame
pub const COINCIDENT_EPSILON: f32 = 1e-6; // below this the pointer counts as on top of the particle

// Plasma timing
pub const PLASMA_TIME_STEP: f32 = 0.005; // per frame, not per second

// Plasma swarm
pub const SWARM_SIZE: usize = 50;
pub const SWARM_RADIUS_MIN: f32 = 2.0;
pub const SWARM_RADIUS_MAX: f32 = 5.0;
pub const SWARM_SPEED_MAX: f32 = 0.75; // per-axis velocity drawn from [-max, max)
pub const SWARM_ALPHA_MIN: f32 = 0.5;
pub const SWARM_ALPHA_MAX: f32 = 1.0;
pub const SWARM_COLOR: Rgba = Rgba::rgb(200, 230, 255);

// Swarm links
pub const LINK_DISTANCE: f32 = 150.0;
pub const LINK_MAX_ALPHA: f32 = 0.4; // opacity of a zero-length link
pub const LINK_WIDTH: f32 = 1.0;
pub const LINK_COLOR: Rgba = Rgba::rgb(100, 200, 255);

// Above this many points, link search switches from all-pairs to the grid
pub const SPATIAL_INDEX_THRESHOLD: usize = 128;

// Frame budget reporting
pub const FRAME_BUDGET_MS: f64 = 16.0; // ~60 Hz
pub const FRAME_REPORT_WINDOW: u32 = 120; // frames per log line
