//! Physical constants for the balls, springs and gravity simulation
//!
//! Units are screen pixels and simulated seconds. The values are tuned for a
//! 700 × 700 arena rather than any real-world scale.

/// Radius of every ball
pub const BALL_RADIUS: f32 = 10.0;

/// Area density of a ball; mass is derived from it and the ball's area
pub const BALL_DENSITY: f32 = 1.0 / 50.0;

/// Natural length of a spring
pub const SPRING_REST_LENGTH: f32 = 150.0;

/// Hooke stiffness of a spring
pub const SPRING_STIFFNESS: f32 = 50.0;

/// Velocity damping along a spring's axis
pub const SPRING_DAMPING: f32 = 0.0;

/// Pairs closer than this contribute no gravity (covers self-pairs at r = 0)
pub const GRAVITY_CUTOFF: f32 = 10.0;

/// Multiplier applied to the accumulated gravity vector before it becomes an impulse
pub const GRAVITY_AMPLIFICATION: f32 = 1000.0;

/// Half-thickness of a wall segment
pub const WALL_THICKNESS: f32 = 1.0;

/// Coefficient of restitution for wall contacts (1 = perfectly elastic)
pub const WALL_ELASTICITY: f32 = 1.0;

/// Default arena width
pub const ARENA_WIDTH: f32 = 700.0;

/// Default arena height
pub const ARENA_HEIGHT: f32 = 700.0;

/// Fixed physics step in simulated seconds
pub const TIME_STEP: f32 = 1.0 / 200.0;

/// Presentation rate the frame limiter aims for
pub const TARGET_TICK_RATE: u32 = 120;

/// Mass of a disc of the given radius and area density
pub fn ball_mass(radius: f32, density: f32) -> f32 {
    density * std::f32::consts::PI * radius * radius
}
