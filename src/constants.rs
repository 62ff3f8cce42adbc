// Browser-side constants: which elements get a backdrop and which events feed it.

// Canvases mounted automatically at start when present in the page
pub const PARTICLE_CANVAS_ID: &str = "particle-field";
pub const PLASMA_CANVAS_ID: &str = "plasma-field";

// Global listeners
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_MOUSE_MOVE: &str = "mousemove";
pub const EVENT_TOUCH_MOVE: &str = "touchmove";

// Log labels, also used by the frame budget reports
pub const PARTICLE_LABEL: &str = "particles";
pub const PLASMA_LABEL: &str = "plasma";
