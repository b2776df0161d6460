//! Full-frame rendering. `build_frame` turns the snapshot and view into an ordered
//! list of draw commands; `paint` replays them on a 2D canvas context.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::config::*;
use crate::model::{MapSnapshot, ObjectCategory, Point};
use crate::state::ViewState;
use crate::util::format_point;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear {
        width: f64,
        height: f64,
        color: &'static str,
    },
    /// Hairline grid; `phase` is the screen position of the first vertical and
    /// horizontal line.
    Grid {
        phase: Point,
        spacing: f64,
        width: f64,
        height: f64,
        color: &'static str,
    },
    Polyline {
        points: Vec<Point>,
        color: &'static str,
        width: f64,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: &'static str,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        color: &'static str,
        width: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: &'static str,
        width: f64,
    },
    StrokeRect {
        origin: Point,
        width: f64,
        height: f64,
        color: &'static str,
        line_width: f64,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCmd>,
}

pub fn hud_text(snapshot: Option<&MapSnapshot>) -> String {
    match snapshot {
        Some(s) => format!(
            "Rover Position: {} | Heading: {:.2}° | Mast: {:.2}°",
            format_point(s.rover_pos),
            s.rover_angle,
            s.mast_angle
        ),
        None => "Loading map data...".to_string(),
    }
}

/// End of a vector of `length` from `origin` at `angle_deg` (0° = +x, counter-clockwise;
/// screen y grows downwards).
pub fn vector_end(origin: Point, angle_deg: f64, length: f64) -> Point {
    let a = angle_deg.to_radians();
    Point::new(origin.x + a.cos() * length, origin.y - a.sin() * length)
}

/// Screen coordinates of grid lines along one axis of length `extent`.
pub fn grid_lines(phase: f64, spacing: f64, extent: f64) -> impl Iterator<Item = f64> {
    let count = if spacing > 0.0 {
        ((extent - phase) / spacing).floor().max(-1.0) as i64 + 1
    } else {
        0
    };
    (0..count).map(move |i| phase + i as f64 * spacing)
}

fn ring_color(category: ObjectCategory) -> &'static str {
    match category {
        ObjectCategory::Resource => RESOURCE_HOVER_COLOR,
        ObjectCategory::Obstacle => OBSTACLE_HOVER_COLOR,
    }
}

pub fn build_frame(
    snapshot: Option<&MapSnapshot>,
    view: &ViewState,
    width: f64,
    height: f64,
) -> Frame {
    let mut commands = vec![DrawCmd::Clear {
        width,
        height,
        color: BACKGROUND_COLOR,
    }];
    let Some(s) = snapshot else {
        return Frame { commands };
    };
    let off = view.offset;

    // grid lines sit at world multiples of GRID_SIZE so they move with the view
    commands.push(DrawCmd::Grid {
        phase: Point::new(off.x.rem_euclid(GRID_SIZE), off.y.rem_euclid(GRID_SIZE)),
        spacing: GRID_SIZE,
        width,
        height,
        color: GRID_COLOR,
    });
    if s.path.len() >= 2 {
        commands.push(DrawCmd::Polyline {
            points: s.path.iter().map(|&p| off.to_screen(p)).collect(),
            color: PATH_COLOR,
            width: PATH_WIDTH,
        });
    }
    for (objects, color) in [
        (&s.resources, RESOURCE_COLOR),
        (&s.obstacles, OBSTACLE_COLOR),
    ] {
        for o in objects {
            commands.push(DrawCmd::FillCircle {
                center: off.to_screen(o.position),
                radius: o.size,
                color,
            });
        }
    }
    if let Some(h) = &view.hovered {
        commands.push(DrawCmd::StrokeCircle {
            center: off.to_screen(h.position),
            radius: h.radius + HOVER_RING_PAD,
            color: ring_color(h.category),
            width: HOVER_RING_WIDTH,
        });
    }

    let rover = off.to_screen(s.rover_pos);
    commands.push(DrawCmd::FillCircle {
        center: rover,
        radius: ROVER_RADIUS,
        color: ROVER_COLOR,
    });
    commands.push(DrawCmd::Line {
        from: rover,
        to: vector_end(rover, s.rover_angle, VECTOR_LENGTH),
        color: HEADING_COLOR,
        width: VECTOR_WIDTH,
    });
    commands.push(DrawCmd::Line {
        from: rover,
        to: vector_end(rover, s.mast_angle, VECTOR_LENGTH),
        color: MAST_COLOR,
        width: VECTOR_WIDTH,
    });

    if let Some(obj) = view.flash.and_then(|f| s.object(f.category, f.index)) {
        let c = off.to_screen(obj.position);
        let half = obj.size + FLASH_PAD;
        commands.push(DrawCmd::StrokeRect {
            origin: Point::new(c.x - half, c.y - half),
            width: half * 2.0,
            height: half * 2.0,
            color: FLASH_COLOR,
            line_width: VECTOR_WIDTH,
        });
    }
    Frame { commands }
}

pub fn paint(ctx: &CanvasRenderingContext2d, frame: &Frame) {
    for cmd in &frame.commands {
        match cmd {
            DrawCmd::Clear {
                width,
                height,
                color,
            } => {
                ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
                ctx.clear_rect(0.0, 0.0, *width, *height);
                ctx.set_fill_style_str(color);
                ctx.fill_rect(0.0, 0.0, *width, *height);
            }
            DrawCmd::Grid {
                phase,
                spacing,
                width,
                height,
                color,
            } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(1.0);
                ctx.begin_path();
                for x in grid_lines(phase.x, *spacing, *width) {
                    ctx.move_to(x, 0.0);
                    ctx.line_to(x, *height);
                }
                for y in grid_lines(phase.y, *spacing, *height) {
                    ctx.move_to(0.0, y);
                    ctx.line_to(*width, y);
                }
                ctx.stroke();
            }
            DrawCmd::Polyline {
                points,
                color,
                width,
            } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*width);
                ctx.begin_path();
                for (i, p) in points.iter().enumerate() {
                    if i == 0 {
                        ctx.move_to(p.x, p.y);
                    } else {
                        ctx.line_to(p.x, p.y);
                    }
                }
                ctx.stroke();
            }
            DrawCmd::FillCircle {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                ctx.set_fill_style_str(color);
                ctx.arc(center.x, center.y, *radius, 0.0, PI * 2.0).ok();
                ctx.fill();
            }
            DrawCmd::StrokeCircle {
                center,
                radius,
                color,
                width,
            } => {
                ctx.begin_path();
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*width);
                ctx.arc(center.x, center.y, *radius, 0.0, PI * 2.0).ok();
                ctx.stroke();
            }
            DrawCmd::Line {
                from,
                to,
                color,
                width,
            } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*width);
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.stroke();
            }
            DrawCmd::StrokeRect {
                origin,
                width,
                height,
                color,
                line_width,
            } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*line_width);
                ctx.stroke_rect(origin.x, origin.y, *width, *height);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MapObject;
    use crate::model::tests::scenario_snapshot;
    use crate::state::HoverTarget;
    use crate::state::view::Flash;

    fn scenario_view() -> ViewState {
        let mut view = ViewState::default();
        view.center_initial(&scenario_snapshot(), 400.0, 400.0);
        view
    }

    fn lines(frame: &Frame) -> Vec<(Point, Point, &'static str)> {
        frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Line {
                    from, to, color, ..
                } => Some((*from, *to, *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn loading_frame_only_clears() {
        let frame = build_frame(None, &ViewState::default(), 400.0, 300.0);
        assert_eq!(
            frame.commands,
            vec![DrawCmd::Clear {
                width: 400.0,
                height: 300.0,
                color: BACKGROUND_COLOR
            }]
        );
        assert_eq!(hud_text(None), "Loading map data...");
    }

    #[test]
    fn hud_formats_two_decimals() {
        let mut snap = scenario_snapshot();
        snap.rover_pos = Point::new(1.0, -2.346);
        snap.rover_angle = 12.5;
        assert_eq!(
            hud_text(Some(&snap)),
            "Rover Position: (1.00, -2.35) | Heading: 12.50° | Mast: 90.00°"
        );
    }

    #[test]
    fn scenario_draw_order() {
        let snap = scenario_snapshot();
        let frame = build_frame(Some(&snap), &scenario_view(), 400.0, 400.0);
        let kinds: Vec<&str> = frame
            .commands
            .iter()
            .map(|c| match c {
                DrawCmd::Clear { .. } => "clear",
                DrawCmd::Grid { .. } => "grid",
                DrawCmd::Polyline { .. } => "path",
                DrawCmd::FillCircle { color, .. } if *color == RESOURCE_COLOR => "resource",
                DrawCmd::FillCircle { color, .. } if *color == OBSTACLE_COLOR => "obstacle",
                DrawCmd::FillCircle { .. } => "rover",
                DrawCmd::StrokeCircle { .. } => "hover",
                DrawCmd::Line { .. } => "vector",
                DrawCmd::StrokeRect { .. } => "flash",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["clear", "grid", "path", "resource", "rover", "vector", "vector"]
        );
        assert_eq!(
            frame.commands[2],
            DrawCmd::Polyline {
                points: vec![Point::new(100.0, 200.0), Point::new(200.0, 200.0)],
                color: PATH_COLOR,
                width: PATH_WIDTH,
            }
        );
    }

    #[test]
    fn grid_follows_view_offset() {
        let snap = scenario_snapshot();
        let mut view = ViewState::default();
        view.offset.x = -30.0;
        view.offset.y = 75.0;
        let frame = build_frame(Some(&snap), &view, 100.0, 60.0);
        assert_eq!(
            frame.commands[1],
            DrawCmd::Grid {
                phase: Point::new(10.0, 15.0),
                spacing: GRID_SIZE,
                width: 100.0,
                height: 60.0,
                color: GRID_COLOR,
            }
        );
        let xs: Vec<f64> = grid_lines(10.0, GRID_SIZE, 100.0).collect();
        assert_eq!(xs, vec![10.0, 30.0, 50.0, 70.0, 90.0]);
        let ys: Vec<f64> = grid_lines(0.0, GRID_SIZE, 60.0).collect();
        assert_eq!(ys, vec![0.0, 20.0, 40.0, 60.0]);
        assert_eq!(grid_lines(0.0, 0.0, 60.0).count(), 0);

        // one full grid step of panning draws the same lines
        view.pan(GRID_SIZE, -GRID_SIZE, Some(&snap));
        let moved = build_frame(Some(&snap), &view, 100.0, 60.0);
        assert_eq!(moved.commands[1], frame.commands[1]);
    }

    #[test]
    fn heading_horizontal_mast_vertical() {
        let snap = scenario_snapshot();
        let frame = build_frame(Some(&snap), &scenario_view(), 400.0, 400.0);
        let vectors = lines(&frame);
        assert_eq!(vectors.len(), 2);
        let (from, to, color) = vectors[0];
        assert_eq!(color, HEADING_COLOR);
        assert_eq!(from, Point::new(100.0, 200.0));
        assert!((to.x - 130.0).abs() < 1e-9 && (to.y - 200.0).abs() < 1e-9);
        let (from, to, color) = vectors[1];
        assert_eq!(color, MAST_COLOR);
        // 90° points up the screen
        assert!((to.x - from.x).abs() < 1e-9);
        assert!((to.y - (from.y - 30.0)).abs() < 1e-9);
    }

    #[test]
    fn empty_categories_draw_nothing() {
        let mut snap = scenario_snapshot();
        snap.path.truncate(1);
        snap.resources.clear();
        let frame = build_frame(Some(&snap), &ViewState::default(), 400.0, 400.0);
        assert!(!frame
            .commands
            .iter()
            .any(|c| matches!(c, DrawCmd::Polyline { .. })));
        assert_eq!(
            frame
                .commands
                .iter()
                .filter(|c| matches!(c, DrawCmd::FillCircle { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn hover_ring_uses_category_color_after_objects() {
        let mut snap = scenario_snapshot();
        snap.obstacles.push(MapObject {
            position: Point::new(0.0, 50.0),
            size: 4.0,
            object: "crater".into(),
        });
        let mut view = ViewState::default();
        view.hovered = Some(HoverTarget {
            category: ObjectCategory::Obstacle,
            index: 0,
            position: Point::new(0.0, 50.0),
            radius: 4.0,
        });
        let frame = build_frame(Some(&snap), &view, 400.0, 400.0);
        let ring = frame
            .commands
            .iter()
            .position(|c| matches!(c, DrawCmd::StrokeCircle { .. }))
            .unwrap();
        let last_obstacle = frame
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCmd::FillCircle { color, .. } if *color == OBSTACLE_COLOR))
            .unwrap();
        assert!(ring > last_obstacle);
        assert_eq!(
            frame.commands[ring],
            DrawCmd::StrokeCircle {
                center: Point::new(0.0, 50.0),
                radius: 4.0 + HOVER_RING_PAD,
                color: OBSTACLE_HOVER_COLOR,
                width: HOVER_RING_WIDTH,
            }
        );
    }

    #[test]
    fn flash_rect_surrounds_selected_object() {
        let snap = scenario_snapshot();
        let mut view = ViewState::default();
        view.select(Some(&snap), ObjectCategory::Resource, 0, 400.0, 400.0);
        assert_eq!(
            view.flash,
            Some(Flash {
                category: ObjectCategory::Resource,
                index: 0
            })
        );
        let frame = build_frame(Some(&snap), &view, 400.0, 400.0);
        let half = 5.0 + FLASH_PAD;
        assert_eq!(
            frame.commands.last(),
            Some(&DrawCmd::StrokeRect {
                origin: Point::new(200.0 - half, 200.0 - half),
                width: half * 2.0,
                height: half * 2.0,
                color: FLASH_COLOR,
                line_width: VECTOR_WIDTH,
            })
        );
    }
}
