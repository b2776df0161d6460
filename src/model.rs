//! Core data models for the rover map viewer.
//! A `MapSnapshot` mirrors the JSON document served at `/maps/latest.json`.

use serde::{Deserialize, Serialize};

/// A 2D coordinate. Serialized as a two element array `[x, y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectCategory {
    Resource,
    Obstacle,
}

impl ObjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            ObjectCategory::Resource => "Resource",
            ObjectCategory::Obstacle => "Obstacle",
        }
    }
}

/// A detected resource or obstacle.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MapObject {
    pub position: Point,
    /// Radius in world units; also the hit-test radius.
    pub size: f64,
    /// Free-form label, e.g. "rock".
    pub object: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MapSnapshot {
    pub rover_pos: Point,
    /// Degrees, 0 = +x, counter-clockwise.
    pub rover_angle: f64,
    /// Degrees, same convention as `rover_angle`.
    pub mast_angle: f64,
    pub path: Vec<Point>,
    pub resources: Vec<MapObject>,
    pub obstacles: Vec<MapObject>,
}

/// Aggregate figures shown in the stats panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapSummary {
    pub resources: usize,
    pub obstacles: usize,
    /// Total length of the path polyline in world units.
    pub odometer: f64,
}

impl MapSnapshot {
    pub fn objects(&self, category: ObjectCategory) -> &[MapObject] {
        match category {
            ObjectCategory::Resource => &self.resources,
            ObjectCategory::Obstacle => &self.obstacles,
        }
    }

    pub fn object(&self, category: ObjectCategory, index: usize) -> Option<&MapObject> {
        self.objects(category).get(index)
    }

    pub fn path_start(&self) -> Option<Point> {
        self.path.first().copied()
    }

    pub fn path_end(&self) -> Option<Point> {
        self.path.last().copied()
    }

    pub fn summary(&self) -> MapSummary {
        let odometer = self
            .path
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum();
        MapSummary {
            resources: self.resources.len(),
            obstacles: self.obstacles.len(),
            odometer,
        }
    }

    /// Rejects values that would poison rendering (NaN/inf, negative radii).
    pub fn validate(&self) -> Result<(), String> {
        if !self.rover_pos.is_finite() {
            return Err("rover_pos is not finite".into());
        }
        if !self.rover_angle.is_finite() || !self.mast_angle.is_finite() {
            return Err("rover_angle/mast_angle must be finite".into());
        }
        if let Some(i) = self.path.iter().position(|p| !p.is_finite()) {
            return Err(format!("path[{}] is not finite", i));
        }
        for category in [ObjectCategory::Resource, ObjectCategory::Obstacle] {
            for (i, o) in self.objects(category).iter().enumerate() {
                if !o.position.is_finite() {
                    return Err(format!("{} {} position is not finite", category.label(), i));
                }
                if !o.size.is_finite() || o.size < 0.0 {
                    return Err(format!(
                        "{} {} has invalid size {}",
                        category.label(),
                        i,
                        o.size
                    ));
                }
            }
        }
        Ok(())
    }
}
