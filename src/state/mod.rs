pub mod hit;
pub mod panels;
pub mod replay;
pub mod view;

pub use hit::HoverTarget;
pub use panels::{ListPanels, PanelKind};
pub use replay::{Replay, ReplayStep};
pub use view::{Inspection, ViewState};
