//! Square drawing surface: pointer gestures in, shapes and overlay text out.

use super::super::SecantApp;
use crate::geometry::{Point, SurfaceMapper};
use crate::report;
use crate::session::{Commit, Preview};
use crate::util::{f64_to_f32, usize_to_f64};
use egui::{
    Align2, Color32, FontId, Painter, PointerButton, Pos2, Rect, Sense, Shape, Stroke, vec2,
};

const OVERLAY_MARGIN: f32 = 8.0;
const OVERLAY_LINE_HEIGHT: f32 = 18.0;

impl SecantApp {
    pub(crate) fn ui_canvas(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let side = self
            .config
            .canvas_side()
            .min(available.x)
            .min(available.y)
            .max(0.0);
        let (response, painter) = ui.allocate_painter(vec2(side, side), Sense::click_and_drag());
        let rect = response.rect;

        let mapper = match SurfaceMapper::new(f64::from(rect.width()), f64::from(rect.height())) {
            Ok(mapper) => mapper,
            Err(err) => {
                log::debug!("skipping canvas frame: {err}");
                return;
            }
        };
        let to_point = |pos: Pos2| {
            let local = pos - rect.min;
            mapper.to_normalized_clamped(f64::from(local.x), f64::from(local.y))
        };

        if response.drag_started_by(PointerButton::Primary) {
            // egui reports a drag only after the pointer has moved a little,
            // so anchor at the press position instead.
            let press = ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let Some(pos) = press
                && self.session.begin_drag(to_point(pos))
            {
                self.set_status(self.session.stage().instruction());
            }
        }

        if response.dragged_by(PointerButton::Primary)
            && let Some(pos) = response.interact_pointer_pos()
        {
            self.session.update_drag(to_point(pos));
        }

        if response.drag_stopped_by(PointerButton::Primary) {
            let end = response
                .interact_pointer_pos()
                .map(&to_point)
                .or_else(|| self.session.live_end())
                .or_else(|| self.session.anchor());
            if let Some(end) = end {
                let commit = self.session.end_drag(end);
                self.apply_commit(commit);
            }
        }

        self.paint_canvas(&painter, rect, &mapper);
    }

    fn apply_commit(&mut self, commit: Option<Commit>) {
        match commit {
            Some(Commit::Circle(circle)) => self.set_status(report::circle_status(&circle)),
            Some(Commit::Segment(_)) => match self.session.solution() {
                Some(Err(err)) => {
                    let msg = format!("No intersection ({err})");
                    self.set_status(msg);
                }
                _ => {
                    let msg = report::intersection_status(self.session.intersections());
                    self.set_status(msg);
                }
            },
            None => {}
        }
    }

    fn paint_canvas(&self, painter: &Painter, rect: Rect, mapper: &SurfaceMapper) {
        let to_screen = |p: Point| {
            let (x, y) = mapper.to_pixel(p);
            rect.min + vec2(f64_to_f32(x), f64_to_f32(y))
        };
        let segments = self.config.outline_segments();

        painter.rect_filled(rect, 0.0, self.config.background_color());

        let extent = self.config.axes.extent;
        painter.line_segment(
            [
                to_screen(Point::new(-extent, 0.0)),
                to_screen(Point::new(extent, 0.0)),
            ],
            self.config.axes.x_stroke(),
        );
        painter.line_segment(
            [
                to_screen(Point::new(0.0, -extent)),
                to_screen(Point::new(0.0, extent)),
            ],
            self.config.axes.y_stroke(),
        );

        let outline = |points: Vec<Point>, stroke: Stroke| {
            Shape::closed_line(points.into_iter().map(to_screen).collect(), stroke)
        };

        if let Some(segment) = self.session.segment() {
            painter.line_segment(
                [to_screen(segment.start), to_screen(segment.end)],
                self.config.segment.stroke(),
            );
        }
        if let Some(circle) = self.session.circle() {
            painter.add(outline(circle.outline(segments), self.config.circle.stroke()));
        }
        for hit in self.session.intersections() {
            painter.circle_filled(
                to_screen(hit.point),
                self.config.intersections.radius(),
                self.config.intersections.color32(),
            );
        }

        match self.session.preview() {
            Some(Preview::Circle(circle)) => {
                painter.add(outline(circle.outline(segments), self.config.preview.stroke()));
            }
            Some(Preview::Segment(segment)) => {
                painter.line_segment(
                    [to_screen(segment.start), to_screen(segment.end)],
                    self.config.preview.stroke(),
                );
            }
            None => {}
        }

        for (idx, line) in report::status_lines(&self.session).into_iter().enumerate() {
            let offset = OVERLAY_LINE_HEIGHT * f64_to_f32(usize_to_f64(idx));
            painter.text(
                rect.min + vec2(OVERLAY_MARGIN, OVERLAY_MARGIN + offset),
                Align2::LEFT_TOP,
                line,
                FontId::monospace(13.0),
                Color32::WHITE,
            );
        }
    }
}
