/// Distance between neighbouring grid lattice points.
pub const STEP: i32 = 50;
/// Grid width, in steps.
pub const GRID_WIDTH: i32 = 8;
/// Grid height, in steps.
pub const GRID_HEIGHT: i32 = 8;
/// Largest accepted width or height, in steps. Keeps every frame
/// coordinate well inside the terminal's u16 range.
pub const MAX_GRID_STEPS: i32 = 200;

pub const MIN_SPEED: i32 = 1;
pub const MAX_SPEED: i32 = 10;
pub const INITIAL_SPEED: i32 = 5;

pub const TITLE: &str = "TURTLE GRID";

/// Direction vectors indexed by heading quadrant (0 = east, counter-clockwise).
/// Format: (delta_x, delta_y), y increasing upwards.
pub const HEADING_VECTORS: [(i32, i32); 4] = [
    (1, 0),  // 0 degrees: east
    (0, 1),  // 90 degrees: north
    (-1, 0), // 180 degrees: west
    (0, -1), // 270 degrees: south
];
