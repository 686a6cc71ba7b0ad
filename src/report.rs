//! Human-readable status lines and a structured session report.

use crate::geometry::{Circle, Hit, LineSegment};
use crate::session::InteractionSession;
use crate::util::fixed2;
use anyhow::Context as _;
use serde_json::{Map, Value, json};

pub fn circle_status(circle: &Circle) -> String {
    format!(
        "Circle: center ({}, {}) radius = {}",
        fixed2(circle.center.x),
        fixed2(circle.center.y),
        fixed2(circle.radius())
    )
}

pub fn segment_status(segment: &LineSegment) -> String {
    format!(
        "Line segment: ({}, {}) ~ ({}, {})",
        fixed2(segment.start.x),
        fixed2(segment.start.y),
        fixed2(segment.end.x),
        fixed2(segment.end.y)
    )
}

pub fn intersection_status(hits: &[Hit]) -> String {
    if hits.is_empty() {
        return "No intersection".to_string();
    }
    let mut text = format!("Intersection Points: {}", hits.len());
    for (idx, hit) in hits.iter().enumerate() {
        text.push_str(&format!(
            " Point {}: ({}, {})",
            idx + 1,
            fixed2(hit.point.x),
            fixed2(hit.point.y)
        ));
    }
    text
}

/// Overlay lines in display order: circle, segment, intersections.
pub fn status_lines(session: &InteractionSession) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    if let Some(circle) = session.circle() {
        lines.push(circle_status(circle));
    }
    if let Some(segment) = session.segment() {
        lines.push(segment_status(segment));
    }
    if session.solution().is_some() {
        lines.push(intersection_status(session.intersections()));
    }
    lines
}

pub fn text_report(session: &InteractionSession) -> String {
    let lines = status_lines(session);
    if lines.is_empty() {
        return "No shapes placed yet".to_string();
    }
    lines.join("\n")
}

pub fn json_report(session: &InteractionSession) -> anyhow::Result<String> {
    let mut root = Map::new();
    root.insert("stage".into(), json!(session.stage().label()));
    root.insert(
        "circle".into(),
        session.circle().map_or(Value::Null, |circle| {
            json!({
                "center": circle.center,
                "boundary": circle.boundary,
                "radius": circle.radius(),
            })
        }),
    );
    root.insert(
        "segment".into(),
        session
            .segment()
            .map_or(Value::Null, |segment| json!(segment)),
    );
    let (intersections, degenerate) = match session.solution() {
        None => (Value::Null, Value::Null),
        Some(Ok(found)) => (json!(found), Value::Null),
        Some(Err(err)) => (json!([]), json!(err.to_string())),
    };
    root.insert("intersections".into(), intersections);
    root.insert("degenerate".into(), degenerate);

    serde_json::to_string_pretty(&Value::Object(root)).context("serialize session report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn solved_session(line_y: f64) -> InteractionSession {
        let mut session = InteractionSession::default();
        session.begin_drag(Point::new(0.0, 0.0));
        session.end_drag(Point::new(1.0, 0.0));
        session.begin_drag(Point::new(-2.0, line_y));
        session.end_drag(Point::new(2.0, line_y));
        session
    }

    #[test]
    fn shape_status_formats() {
        let circle = Circle::new(Point::new(0.1234, -0.5), Point::new(0.1234, 0.25));
        assert_eq!(
            circle_status(&circle),
            "Circle: center (0.12, -0.50) radius = 0.75"
        );
        let segment = LineSegment::new(Point::new(-0.004, 0.5), Point::new(1.0, -1.0));
        assert_eq!(
            segment_status(&segment),
            "Line segment: (0.00, 0.50) ~ (1.00, -1.00)"
        );
    }

    #[test]
    fn intersection_status_by_count() {
        assert_eq!(
            text_report(&solved_session(2.0)).lines().last(),
            Some("No intersection")
        );
        assert_eq!(
            text_report(&solved_session(1.0)).lines().last(),
            Some("Intersection Points: 1 Point 1: (0.00, 1.00)")
        );
        assert_eq!(
            text_report(&solved_session(0.0)).lines().last(),
            Some("Intersection Points: 2 Point 1: (-1.00, 0.00) Point 2: (1.00, 0.00)")
        );
    }

    #[test]
    fn status_lines_grow_with_stages() {
        let mut session = InteractionSession::default();
        assert!(status_lines(&session).is_empty());
        assert_eq!(text_report(&session), "No shapes placed yet");

        session.begin_drag(Point::new(0.0, 0.0));
        session.end_drag(Point::new(0.0, 0.5));
        assert_eq!(status_lines(&session).len(), 1);

        session.begin_drag(Point::new(-1.0, 0.0));
        session.end_drag(Point::new(1.0, 0.0));
        assert_eq!(status_lines(&session).len(), 3);
    }

    #[test]
    fn json_report_lists_ordered_hits() {
        let text = json_report(&solved_session(0.0)).expect("serialize");
        let value: Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["stage"], "Complete");
        assert_eq!(value["circle"]["radius"], 1.0);
        let hits = value["intersections"].as_array().expect("hit array");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0]["point"]["x"], -1.0);
        assert_eq!(hits[1]["point"]["x"], 1.0);
        assert!(value["degenerate"].is_null());
    }

    #[test]
    fn json_report_marks_degenerate_input() {
        let mut session = InteractionSession::default();
        session.begin_drag(Point::new(0.0, 0.0));
        session.end_drag(Point::new(1.0, 0.0));
        session.begin_drag(Point::new(0.5, 0.5));
        session.end_drag(Point::new(0.5, 0.5));
        let value: Value =
            serde_json::from_str(&json_report(&session).expect("serialize")).expect("valid json");
        assert_eq!(value["degenerate"], "degenerate geometry: line segment has zero length");
        assert_eq!(value["intersections"].as_array().map(Vec::len), Some(0));
    }
}
