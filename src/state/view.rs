// View state: pan offset, pointer gesture and hover/selection, owned by the map view.
use crate::model::{MapSnapshot, ObjectCategory, Point};

use super::hit::{HoverTarget, hit_test};

/// Translation from world space to screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewOffset {
    pub x: f64,
    pub y: f64,
}

impl ViewOffset {
    pub fn to_screen(self, world: Point) -> Point {
        Point::new(world.x + self.x, world.y + self.y)
    }

    pub fn to_world(self, screen: Point) -> Point {
        Point::new(screen.x - self.x, screen.y - self.y)
    }

    /// Offset that puts `world` at the center of a `width` x `height` canvas.
    pub fn centered_on(world: Point, width: f64, height: f64) -> Self {
        Self {
            x: width * 0.5 - world.x,
            y: height * 0.5 - world.y,
        }
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    #[default]
    Idle,
    Dragging {
        last: Point,
        moved: bool,
    },
}

/// Result of clicking a hover target.
#[derive(Clone, Debug, PartialEq)]
pub struct Inspection {
    pub category: ObjectCategory,
    pub position: Point,
    pub size: f64,
    pub label: String,
}

/// Temporary highlight left by selecting a list row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flash {
    pub category: ObjectCategory,
    pub index: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub offset: ViewOffset,
    pub pointer: PointerState,
    pub hovered: Option<HoverTarget>,
    pub inspected: Option<Inspection>,
    pub flash: Option<Flash>,
    /// Set once the offset has been centered on the first snapshot.
    pub initialized: bool,
    // Last pointer position over the canvas; None after the pointer leaves.
    pointer_at: Option<Point>,
    // Release of a drag that moved the view also fires a click; swallow it.
    swallow_click: bool,
}

impl ViewState {
    pub fn is_dragging(&self) -> bool {
        matches!(self.pointer, PointerState::Dragging { .. })
    }

    pub fn pointer_down(&mut self, p: Point) {
        self.pointer = PointerState::Dragging {
            last: p,
            moved: false,
        };
        self.pointer_at = Some(p);
        self.swallow_click = false;
    }

    /// Returns true when the canvas needs a redraw.
    pub fn pointer_move(&mut self, p: Point, snapshot: Option<&MapSnapshot>) -> bool {
        self.pointer_at = Some(p);
        match self.pointer {
            PointerState::Dragging { last, moved } => {
                let dx = p.x - last.x;
                let dy = p.y - last.y;
                let moved = moved || dx != 0.0 || dy != 0.0;
                self.offset.pan_by(dx, dy);
                self.pointer = PointerState::Dragging { last: p, moved };
                if moved {
                    self.flash = None;
                }
                true
            }
            PointerState::Idle => self.refresh_hover(snapshot),
        }
    }

    /// Re-runs the hit test at the last pointer position. Returns true when
    /// the hover target changed.
    pub fn refresh_hover(&mut self, snapshot: Option<&MapSnapshot>) -> bool {
        let hovered = match (snapshot, self.pointer_at) {
            (Some(s), Some(p)) => hit_test(s, self.offset, p),
            _ => None,
        };
        if hovered != self.hovered {
            self.hovered = hovered;
            true
        } else {
            false
        }
    }

    /// Mouse up and mouse leave both end a drag.
    pub fn pointer_up(&mut self) {
        if let PointerState::Dragging { moved, .. } = self.pointer {
            self.swallow_click = moved;
        }
        self.pointer = PointerState::Idle;
    }

    /// Ends any drag and drops the hover target. Returns true when a hover was cleared.
    pub fn pointer_leave(&mut self) -> bool {
        self.pointer_up();
        self.pointer_at = None;
        self.hovered.take().is_some()
    }

    pub fn click(&mut self, snapshot: Option<&MapSnapshot>) -> Option<Inspection> {
        if std::mem::take(&mut self.swallow_click) || self.is_dragging() {
            return None;
        }
        let target = self.hovered.as_ref()?;
        let obj = snapshot?.object(target.category, target.index)?;
        let inspection = Inspection {
            category: target.category,
            position: obj.position,
            size: obj.size,
            label: obj.object.clone(),
        };
        self.inspected = Some(inspection.clone());
        Some(inspection)
    }

    /// Moves the offset; hover is recomputed since the pointer now covers other world space.
    pub fn center_on(
        &mut self,
        world: Point,
        snapshot: Option<&MapSnapshot>,
        width: f64,
        height: f64,
    ) {
        self.offset = ViewOffset::centered_on(world, width, height);
        self.refresh_hover(snapshot);
    }

    /// Initial centering: path end, or the rover when there is no path.
    pub fn center_initial(&mut self, snapshot: &MapSnapshot, width: f64, height: f64) {
        let focus = snapshot.path_end().unwrap_or(snapshot.rover_pos);
        self.center_on(focus, Some(snapshot), width, height);
        self.initialized = true;
    }

    /// No-op (returns false) without a snapshot or with an empty path.
    pub fn show_start(&mut self, snapshot: Option<&MapSnapshot>, width: f64, height: f64) -> bool {
        match snapshot.and_then(MapSnapshot::path_start) {
            Some(p) => {
                self.center_on(p, snapshot, width, height);
                true
            }
            None => false,
        }
    }

    pub fn show_end(&mut self, snapshot: Option<&MapSnapshot>, width: f64, height: f64) -> bool {
        match snapshot.and_then(MapSnapshot::path_end) {
            Some(p) => {
                self.center_on(p, snapshot, width, height);
                true
            }
            None => false,
        }
    }

    pub fn center_rover(&mut self, snapshot: Option<&MapSnapshot>, width: f64, height: f64) -> bool {
        match snapshot {
            Some(s) => {
                self.center_on(s.rover_pos, snapshot, width, height);
                true
            }
            None => false,
        }
    }

    /// Centers on a listed object and flashes it.
    pub fn select(
        &mut self,
        snapshot: Option<&MapSnapshot>,
        category: ObjectCategory,
        index: usize,
        width: f64,
        height: f64,
    ) -> bool {
        let Some(obj) = snapshot.and_then(|s| s.object(category, index)) else {
            return false;
        };
        self.center_on(obj.position, snapshot, width, height);
        self.flash = Some(Flash { category, index });
        true
    }

    pub fn pan(&mut self, dx: f64, dy: f64, snapshot: Option<&MapSnapshot>) {
        self.offset.pan_by(dx, dy);
        self.refresh_hover(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MapObject;
    use crate::model::tests::scenario_snapshot;

    #[test]
    fn transform_round_trips() {
        let offsets = [
            ViewOffset { x: 0.0, y: 0.0 },
            ViewOffset { x: 100.0, y: 200.0 },
            ViewOffset { x: -37.5, y: 12.25 },
        ];
        let points = [
            Point::new(0.0, 0.0),
            Point::new(50.0, 50.0),
            Point::new(-1024.0, 3.5),
        ];
        for o in offsets {
            for p in points {
                assert_eq!(o.to_screen(o.to_world(p)), p);
                assert_eq!(o.to_world(o.to_screen(p)), p);
            }
        }
    }

    #[test]
    fn initial_center_on_path_end() {
        let snap = scenario_snapshot();
        let mut view = ViewState::default();
        view.center_initial(&snap, 400.0, 400.0);
        assert_eq!(view.offset, ViewOffset { x: 100.0, y: 200.0 });
        assert!(view.initialized);
    }

    #[test]
    fn initial_center_falls_back_to_rover() {
        let mut snap = scenario_snapshot();
        snap.path.clear();
        snap.rover_pos = Point::new(10.0, 20.0);
        let mut view = ViewState::default();
        view.center_initial(&snap, 400.0, 400.0);
        assert_eq!(view.offset, ViewOffset { x: 190.0, y: 180.0 });
    }

    #[test]
    fn drag_and_reverse_restores_offset() {
        let mut view = ViewState::default();
        view.offset = ViewOffset { x: 100.0, y: 200.0 };
        let start = view.offset;
        view.pointer_down(Point::new(10.0, 10.0));
        assert!(view.pointer_move(Point::new(35.0, -7.0), None));
        assert_eq!(view.offset, ViewOffset { x: 125.0, y: 183.0 });
        assert!(view.pointer_move(Point::new(10.0, 10.0), None));
        assert_eq!(view.offset, start);
    }

    #[test]
    fn pointer_up_and_leave_end_drag() {
        let mut view = ViewState::default();
        view.pointer_down(Point::new(0.0, 0.0));
        assert!(view.is_dragging());
        view.pointer_up();
        assert!(!view.is_dragging());
        view.pointer_up();
        assert_eq!(view.pointer, PointerState::Idle);
        let before = view.offset;
        view.pointer_move(Point::new(50.0, 50.0), None);
        assert_eq!(view.offset, before);
    }

    #[test]
    fn hover_scenario() {
        let snap = scenario_snapshot();
        let mut view = ViewState::default();
        view.center_initial(&snap, 400.0, 400.0);
        let on_rock = view.offset.to_screen(Point::new(50.0, 50.0));
        assert!(view.pointer_move(on_rock, Some(&snap)));
        let hovered = view.hovered.clone().unwrap();
        assert_eq!(hovered.category, ObjectCategory::Resource);
        assert_eq!(hovered.index, 0);
        // unchanged hover needs no redraw
        assert!(!view.pointer_move(on_rock, Some(&snap)));
        let beyond = view.offset.to_screen(Point::new(56.0, 50.0));
        assert!(view.pointer_move(beyond, Some(&snap)));
        assert!(view.hovered.is_none());
    }

    #[test]
    fn hover_follows_pan() {
        let snap = scenario_snapshot();
        let mut view = ViewState::default();
        view.pointer_down(Point::new(0.0, 0.0));
        view.pointer_move(Point::new(30.0, 0.0), Some(&snap));
        view.pointer_up();
        // world (50,50) is now drawn at screen (80,50)
        view.pointer_move(Point::new(80.0, 50.0), Some(&snap));
        assert!(view.hovered.is_some());
        view.pointer_move(Point::new(50.0, 50.0), Some(&snap));
        assert!(view.hovered.is_none());
    }

    #[test]
    fn click_inspects_hover_target() {
        let snap = scenario_snapshot();
        let mut view = ViewState::default();
        assert_eq!(view.click(Some(&snap)), None);
        view.pointer_move(Point::new(51.0, 49.0), Some(&snap));
        let inspection = view.click(Some(&snap)).unwrap();
        assert_eq!(inspection.category, ObjectCategory::Resource);
        assert_eq!(inspection.position, Point::new(50.0, 50.0));
        assert_eq!(inspection.size, 5.0);
        assert_eq!(inspection.label, "rock");
        assert_eq!(view.inspected, Some(inspection));
    }

    #[test]
    fn click_after_moving_drag_is_swallowed() {
        let snap = scenario_snapshot();
        let mut view = ViewState::default();
        view.pointer_move(Point::new(50.0, 50.0), Some(&snap));
        view.pointer_down(Point::new(50.0, 50.0));
        view.pointer_move(Point::new(52.0, 50.0), Some(&snap));
        view.pointer_up();
        assert_eq!(view.click(Some(&snap)), None);
        // a plain press/release still inspects
        view.pointer_down(Point::new(52.0, 50.0));
        view.pointer_up();
        assert!(view.click(Some(&snap)).is_some());
    }

    #[test]
    fn keyboard_pan_drops_stale_hover() {
        let snap = scenario_snapshot();
        let mut view = ViewState::default();
        view.pointer_move(Point::new(50.0, 50.0), Some(&snap));
        assert!(view.hovered.is_some());
        view.pan(40.0, 0.0, Some(&snap));
        assert!(view.hovered.is_none());
        assert_eq!(view.click(Some(&snap)), None);
        // panning back brings the rock under the pointer again
        view.pan(-40.0, 0.0, Some(&snap));
        assert_eq!(view.hovered.as_ref().map(|h| h.index), Some(0));
    }

    #[test]
    fn recentering_rehovers_under_still_pointer() {
        let snap = scenario_snapshot();
        let mut view = ViewState::default();
        view.pointer_move(Point::new(200.0, 200.0), Some(&snap));
        assert!(view.hovered.is_none());
        assert!(view.select(Some(&snap), ObjectCategory::Resource, 0, 400.0, 400.0));
        assert_eq!(
            view.hovered.as_ref().map(|h| h.category),
            Some(ObjectCategory::Resource)
        );
        assert!(view.show_end(Some(&snap), 400.0, 400.0));
        assert!(view.hovered.is_none());
        view.center_on(Point::new(50.0, 50.0), Some(&snap), 400.0, 400.0);
        assert!(view.hovered.is_some());
        assert!(view.center_rover(Some(&snap), 400.0, 400.0));
        assert!(view.hovered.is_none());
    }

    #[test]
    fn leaving_canvas_clears_hover() {
        let snap = scenario_snapshot();
        let mut view = ViewState::default();
        view.pointer_move(Point::new(50.0, 50.0), Some(&snap));
        view.pointer_down(Point::new(50.0, 50.0));
        assert!(view.pointer_leave());
        assert!(!view.is_dragging());
        assert!(view.hovered.is_none());
        assert_eq!(view.click(Some(&snap)), None);
        // no pointer to test against until it comes back
        view.pan(0.0, 0.0, Some(&snap));
        assert!(view.hovered.is_none());
        assert!(!view.pointer_leave());
    }

    #[test]
    fn show_start_end_on_empty_path_is_noop() {
        let mut snap = scenario_snapshot();
        snap.path.clear();
        let mut view = ViewState::default();
        view.offset = ViewOffset { x: 7.0, y: 9.0 };
        assert!(!view.show_start(Some(&snap), 400.0, 400.0));
        assert!(!view.show_end(Some(&snap), 400.0, 400.0));
        assert!(!view.show_end(None, 400.0, 400.0));
        assert!(!view.center_rover(None, 400.0, 400.0));
        assert_eq!(view.offset, ViewOffset { x: 7.0, y: 9.0 });
    }

    #[test]
    fn show_start_and_end_center_path() {
        let snap = scenario_snapshot();
        let mut view = ViewState::default();
        assert!(view.show_start(Some(&snap), 400.0, 400.0));
        assert_eq!(view.offset, ViewOffset { x: 200.0, y: 200.0 });
        assert!(view.show_end(Some(&snap), 400.0, 400.0));
        assert_eq!(view.offset, ViewOffset { x: 100.0, y: 200.0 });
    }

    #[test]
    fn select_centers_and_flashes_until_drag() {
        let mut snap = scenario_snapshot();
        snap.obstacles.push(MapObject {
            position: Point::new(-20.0, 40.0),
            size: 8.0,
            object: "boulder".into(),
        });
        let mut view = ViewState::default();
        assert!(view.select(Some(&snap), ObjectCategory::Obstacle, 0, 400.0, 300.0));
        assert_eq!(view.offset, ViewOffset { x: 220.0, y: 110.0 });
        assert_eq!(
            view.flash,
            Some(Flash {
                category: ObjectCategory::Obstacle,
                index: 0
            })
        );
        assert!(!view.select(Some(&snap), ObjectCategory::Obstacle, 3, 400.0, 300.0));
        view.pointer_down(Point::new(0.0, 0.0));
        view.pointer_move(Point::new(1.0, 0.0), Some(&snap));
        assert_eq!(view.flash, None);
    }
}
