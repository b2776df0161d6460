// Resource/obstacle list panels.
use crate::model::{MapObject, MapSnapshot, ObjectCategory};
use crate::util::format_point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    Resources,
    Obstacles,
}

impl PanelKind {
    pub fn category(self) -> ObjectCategory {
        match self {
            PanelKind::Resources => ObjectCategory::Resource,
            PanelKind::Obstacles => ObjectCategory::Obstacle,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PanelKind::Resources => "Resources",
            PanelKind::Obstacles => "Obstacles",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            PanelKind::Resources => "No resources detected.",
            PanelKind::Obstacles => "No obstacles detected.",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelState {
    pub open: bool,
    pub rows: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListPanels {
    pub resources: PanelState,
    pub obstacles: PanelState,
}

impl ListPanels {
    pub fn get(&self, kind: PanelKind) -> &PanelState {
        match kind {
            PanelKind::Resources => &self.resources,
            PanelKind::Obstacles => &self.obstacles,
        }
    }

    fn get_mut(&mut self, kind: PanelKind) -> &mut PanelState {
        match kind {
            PanelKind::Resources => &mut self.resources,
            PanelKind::Obstacles => &mut self.obstacles,
        }
    }

    /// Flips visibility; rows are rebuilt from `snapshot` whenever the panel opens.
    pub fn toggle(&mut self, kind: PanelKind, snapshot: Option<&MapSnapshot>) -> bool {
        let panel = self.get_mut(kind);
        panel.open = !panel.open;
        if panel.open {
            panel.rows = snapshot
                .map(|s| list_rows(s.objects(kind.category())))
                .unwrap_or_default();
        }
        panel.open
    }

    /// Rebuilds rows of open panels, e.g. after a new snapshot arrives.
    pub fn refresh(&mut self, snapshot: Option<&MapSnapshot>) {
        for kind in [PanelKind::Resources, PanelKind::Obstacles] {
            let panel = self.get_mut(kind);
            if panel.open {
                panel.rows = snapshot
                    .map(|s| list_rows(s.objects(kind.category())))
                    .unwrap_or_default();
            }
        }
    }
}

/// `index` is zero based; rows are numbered from 1.
pub fn row_text(index: usize, obj: &MapObject) -> String {
    format!("{}. {} at {}", index + 1, obj.object, format_point(obj.position))
}

pub fn list_rows(objects: &[MapObject]) -> Vec<String> {
    objects
        .iter()
        .enumerate()
        .map(|(i, o)| row_text(i, o))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;
    use crate::model::tests::scenario_snapshot;

    #[test]
    fn scenario_row() {
        let snap = scenario_snapshot();
        assert_eq!(list_rows(&snap.resources), vec!["1. rock at (50.00, 50.00)"]);
    }

    #[test]
    fn toggle_populates_on_open() {
        let mut snap = scenario_snapshot();
        snap.resources.push(MapObject {
            position: Point::new(-3.456, 7.0),
            size: 2.0,
            object: "ice".into(),
        });
        let mut panels = ListPanels::default();
        assert!(panels.toggle(PanelKind::Resources, Some(&snap)));
        assert_eq!(
            panels.get(PanelKind::Resources).rows,
            vec!["1. rock at (50.00, 50.00)", "2. ice at (-3.46, 7.00)"]
        );
        assert!(!panels.get(PanelKind::Obstacles).open);
        assert!(!panels.toggle(PanelKind::Resources, Some(&snap)));
        assert!(!panels.get(PanelKind::Resources).open);
    }

    #[test]
    fn empty_category_has_no_rows() {
        let snap = scenario_snapshot();
        let mut panels = ListPanels::default();
        panels.toggle(PanelKind::Obstacles, Some(&snap));
        assert!(panels.get(PanelKind::Obstacles).open);
        assert!(panels.get(PanelKind::Obstacles).rows.is_empty());
        assert_eq!(PanelKind::Obstacles.placeholder(), "No obstacles detected.");
    }

    #[test]
    fn toggle_without_snapshot() {
        let mut panels = ListPanels::default();
        assert!(panels.toggle(PanelKind::Resources, None));
        assert!(panels.resources.rows.is_empty());
    }

    #[test]
    fn refresh_only_touches_open_panels() {
        let snap = scenario_snapshot();
        let mut panels = ListPanels::default();
        panels.toggle(PanelKind::Resources, None);
        panels.refresh(Some(&snap));
        assert_eq!(panels.resources.rows.len(), 1);
        assert!(panels.obstacles.rows.is_empty());
    }
}
