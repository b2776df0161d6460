// Route replay: a discrete-step cursor over the path, advanced once per animation frame.
use crate::model::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReplayStep {
    /// Not running; the frame loop should stop scheduling.
    Idle,
    /// Center the view on this path point.
    Visit(Point),
    /// The cursor passed the last point; replay is now stopped.
    Finished,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Replay {
    index: usize,
    running: bool,
}

impl Replay {
    /// Starts from the first point. Restarting while running rewinds to the start.
    pub fn start(&mut self) {
        self.index = 0;
        self.running = true;
    }

    /// Takes effect on the next tick, which reports `Idle`.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Index of the next point to visit.
    pub fn index(&self) -> usize {
        self.index
    }

    /// A path of N points yields N `Visit`s followed by `Finished`.
    pub fn tick(&mut self, path: &[Point]) -> ReplayStep {
        if !self.running {
            return ReplayStep::Idle;
        }
        match path.get(self.index) {
            Some(&p) => {
                self.index += 1;
                ReplayStep::Visit(p)
            }
            None => {
                self.running = false;
                ReplayStep::Finished
            }
        }
    }
}
