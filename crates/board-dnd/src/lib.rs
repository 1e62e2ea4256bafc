//! Board DragDrop State Machine
//!
//! Tracks a single drag gesture over a lane board from pickup to drop.
//! Pure state, no event bindings: the rendering layer feeds gestures in
//! and maps the terminal outcome back onto the store.

/// Where a draggable sits on the board: lane plus index within the lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragPoint<L> {
    pub lane: L,
    pub index: usize,
}

impl<L> DragPoint<L> {
    pub fn new(lane: L, index: usize) -> Self {
        Self { lane, index }
    }
}

/// Gesture state. At most one gesture is in flight at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragState<L> {
    Idle,
    Dragging {
        task_id: String,
        source: DragPoint<L>,
    },
}

impl<L> Default for DragState<L> {
    fn default() -> Self {
        DragState::Idle
    }
}

/// Terminal resolution of a gesture
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome<L> {
    /// Released with no valid destination (outside any lane)
    Outside,
    /// Released exactly where it was picked up
    NoOp,
    /// Dropped into a lane. Only the destination lane is honored:
    /// order within a lane is derived from the collection, not the drop index.
    Moved { task_id: String, lane: L },
}

/// Drives the `Idle -> Dragging -> terminal` gesture machine
#[derive(Clone, Debug)]
pub struct DndController<L> {
    state: DragState<L>,
}

impl<L> Default for DndController<L> {
    fn default() -> Self {
        Self {
            state: DragState::Idle,
        }
    }
}

impl<L: Copy + PartialEq> DndController<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState<L> {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Id of the task currently in flight, if any
    pub fn dragging_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { task_id, .. } => Some(task_id),
            DragState::Idle => None,
        }
    }

    /// Pick up a task. A new pickup replaces any gesture already in flight.
    pub fn begin_drag(&mut self, task_id: impl Into<String>, lane: L, index: usize) {
        self.state = DragState::Dragging {
            task_id: task_id.into(),
            source: DragPoint::new(lane, index),
        };
    }

    /// Abort the gesture without resolving a drop
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Finish the gesture. `None` means the pointer was released outside
    /// any lane. Always returns the controller to `Idle`.
    pub fn drop_at(&mut self, dest: Option<DragPoint<L>>) -> DropOutcome<L> {
        match (std::mem::take(&mut self.state), dest) {
            (DragState::Idle, _) => DropOutcome::Outside,
            (DragState::Dragging { .. }, None) => DropOutcome::Outside,
            (DragState::Dragging { task_id, source }, Some(dest)) => {
                if dest == source {
                    DropOutcome::NoOp
                } else {
                    DropOutcome::Moved {
                        task_id,
                        lane: dest.lane,
                    }
                }
            }
        }
    }
}
