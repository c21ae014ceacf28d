// Shared tuning constants used by both the core engines and the web frontend.

// Carousel drag resolution
pub const DRAG_OFFSET_THRESHOLD_PX: f32 = 50.0; // committed swipe distance
pub const DRAG_VELOCITY_THRESHOLD_PX_S: f32 = 500.0; // committed swipe speed

// Autoplay
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: f64 = 5000.0;
pub const PORTFOLIO_AUTOPLAY_INTERVAL_MS: f64 = 6000.0; // portfolio section call site

// Animation loop
pub const FRAME_STEP_MS: f32 = 16.0; // fixed nominal step, not measured delta

// Graph effect
pub const GRAPH_POINT_COUNT: usize = 50;
pub const GRAPH_MARKER_STRIDE: usize = 5; // every 5th point gets a pulsing marker

// Circuit effect
pub const CIRCUIT_GRID_SPACING: f32 = 120.0;
pub const CIRCUIT_GRID_SPACING_MOBILE: f32 = 180.0; // sparser field on small viewports
pub const CIRCUIT_NODE_JITTER: f32 = 20.0; // each node perturbed by +/- this much
pub const CIRCUIT_LINK_DISTANCE_FACTOR: f32 = 1.5; // link candidates within spacing * factor
pub const CIRCUIT_LINK_KEEP_PROBABILITY: f32 = 0.3;

// Contact flow
pub const MAX_SUBMIT_ATTEMPTS: u32 = 3; // failures tolerated before the static affordance
pub const SERVER_FAULT_PROBABILITY: f64 = 0.1; // simulated transient server errors
