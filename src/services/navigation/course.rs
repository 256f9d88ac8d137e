use crate::models::constants::HEADING_VECTORS;
use crate::models::heading::Heading;

/// Unit step direction for a heading. Y increases upwards.
pub fn heading_vector(heading: Heading) -> (i32, i32) {
    HEADING_VECTORS[heading.index()]
}
