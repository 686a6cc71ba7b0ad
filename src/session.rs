//! Two-gesture input session: drag out a circle, then a line segment.

use crate::error::GeometryError;
use crate::geometry::{Circle, Hit, Intersections, LineSegment, Point, Tangency, intersect};

/// What the next completed drag produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStage {
    AwaitingCircle,
    AwaitingLine,
    Complete,
}

impl InputStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AwaitingCircle => "Draw circle",
            Self::AwaitingLine => "Draw line segment",
            Self::Complete => "Complete",
        }
    }

    pub const fn instruction(self) -> &'static str {
        match self {
            Self::AwaitingCircle => "Drag from the circle center to a point on its boundary.",
            Self::AwaitingLine => "Drag from the segment start to its end.",
            Self::Complete => "Both shapes are placed.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    anchor: Point,
    live_end: Option<Point>,
}

/// Shape committed by [`InteractionSession::end_drag`].
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    Circle(Circle),
    Segment(LineSegment),
}

/// Uncommitted shape following the pointer during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview {
    Circle(Circle),
    Segment(LineSegment),
}

#[derive(Debug, Clone)]
pub struct InteractionSession {
    stage: InputStage,
    circle: Option<Circle>,
    segment: Option<LineSegment>,
    drag: Option<DragState>,
    solution: Option<Result<Intersections, GeometryError>>,
    tangency: Tangency,
}

impl Default for InteractionSession {
    fn default() -> Self {
        Self::new(Tangency::default())
    }
}

impl InteractionSession {
    pub const fn new(tangency: Tangency) -> Self {
        Self {
            stage: InputStage::AwaitingCircle,
            circle: None,
            segment: None,
            drag: None,
            solution: None,
            tangency,
        }
    }

    pub const fn stage(&self) -> InputStage {
        self.stage
    }

    pub const fn circle(&self) -> Option<&Circle> {
        self.circle.as_ref()
    }

    pub const fn segment(&self) -> Option<&LineSegment> {
        self.segment.as_ref()
    }

    pub const fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn anchor(&self) -> Option<Point> {
        self.drag.map(|drag| drag.anchor)
    }

    pub fn live_end(&self) -> Option<Point> {
        self.drag.and_then(|drag| drag.live_end)
    }

    /// Solver outcome, present once the segment has been committed.
    pub const fn solution(&self) -> Option<&Result<Intersections, GeometryError>> {
        self.solution.as_ref()
    }

    /// Intersection points; empty until solved or when the input was degenerate.
    pub fn intersections(&self) -> &[Hit] {
        match &self.solution {
            Some(Ok(found)) => found.hits(),
            _ => &[],
        }
    }

    /// Starts a drag at `point`. Ignored while a drag is already running or
    /// once both shapes exist. Returns whether the drag started.
    pub fn begin_drag(&mut self, point: Point) -> bool {
        if self.drag.is_some() || self.stage == InputStage::Complete {
            log::debug!("ignored drag start at ({}, {})", point.x, point.y);
            return false;
        }
        self.drag = Some(DragState {
            anchor: point,
            live_end: None,
        });
        true
    }

    /// Moves the live end of the running drag; no-op when not dragging.
    pub fn update_drag(&mut self, point: Point) {
        if let Some(drag) = self.drag.as_mut() {
            drag.live_end = Some(point);
        }
    }

    /// Finishes the running drag at `point` and commits the shape for the
    /// current stage. Committing the segment also runs the solver.
    pub fn end_drag(&mut self, point: Point) -> Option<Commit> {
        let Some(drag) = self.drag.take() else {
            log::debug!("ignored drag end without a running drag");
            return None;
        };

        match self.stage {
            InputStage::AwaitingCircle => {
                let circle = Circle::new(drag.anchor, point);
                log::info!(
                    "circle committed: center ({:.3}, {:.3}) radius {:.3}",
                    circle.center.x,
                    circle.center.y,
                    circle.radius()
                );
                self.circle = Some(circle);
                self.stage = InputStage::AwaitingLine;
                Some(Commit::Circle(circle))
            }
            InputStage::AwaitingLine => {
                let segment = LineSegment::new(drag.anchor, point);
                log::info!(
                    "segment committed: ({:.3}, {:.3}) ~ ({:.3}, {:.3})",
                    segment.start.x,
                    segment.start.y,
                    segment.end.x,
                    segment.end.y
                );
                self.segment = Some(segment);
                if let Some(circle) = self.circle.as_ref() {
                    let solution = intersect(circle, &segment, self.tangency);
                    match &solution {
                        Ok(found) if found.is_empty() => log::info!("no intersection"),
                        Ok(found) => log::info!("{} intersection point(s)", found.len()),
                        Err(err) => log::warn!("intersection skipped: {err}"),
                    }
                    self.solution = Some(solution);
                }
                self.stage = InputStage::Complete;
                Some(Commit::Segment(segment))
            }
            InputStage::Complete => None,
        }
    }

    /// Shape that would be committed if the running drag ended now.
    pub fn preview(&self) -> Option<Preview> {
        let drag = self.drag?;
        let end = drag.live_end?;
        match self.stage {
            InputStage::AwaitingCircle => Some(Preview::Circle(Circle::new(drag.anchor, end))),
            InputStage::AwaitingLine => {
                Some(Preview::Segment(LineSegment::new(drag.anchor, end)))
            }
            InputStage::Complete => None,
        }
    }
}
