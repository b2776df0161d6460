// Point-in-circle hit testing against resources and obstacles.
use crate::model::{MapSnapshot, ObjectCategory, Point};

use super::view::ViewOffset;

/// The object currently under the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverTarget {
    pub category: ObjectCategory,
    /// Index into the category's list in the snapshot.
    pub index: usize,
    /// World position; drawn through the same offset used for the test.
    pub position: Point,
    pub radius: f64,
}

/// Categories in hit precedence order, the reverse of draw order.
const PRECEDENCE: [ObjectCategory; 2] = [ObjectCategory::Obstacle, ObjectCategory::Resource];

/// Returns the topmost object in draw order whose circle contains `screen`.
///
/// Obstacles are drawn over resources, and later entries over earlier ones, so an
/// obstacle wins over an overlapping resource and the last listed object wins within
/// a category. The boundary counts as inside (`distance <= size`).
pub fn hit_test(snapshot: &MapSnapshot, offset: ViewOffset, screen: Point) -> Option<HoverTarget> {
    let world = offset.to_world(screen);
    PRECEDENCE.into_iter().find_map(|category| {
        snapshot
            .objects(category)
            .iter()
            .enumerate()
            .rev()
            .find(|(_, o)| o.position.distance(world) <= o.size)
            .map(|(index, o)| HoverTarget {
                category,
                index,
                position: o.position,
                radius: o.size,
            })
    })
}
