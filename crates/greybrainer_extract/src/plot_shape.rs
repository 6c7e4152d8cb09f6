//! Story shape block parsing.

use crate::anchors::{PLOT_SHAPE_END, PLOT_SHAPE_START};
use crate::find_delimited;
use greybrainer_core::{PlotPoint, PlotShape};
use regex::Regex;
use std::sync::LazyLock;

static SHAPE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t>*_-]*shape[ \t]+name[*_]*[ \t]*:[*_]*[ \t]*(.+?)[ \t*_]*$")
        .expect("valid shape name regex")
});

// Stops at the point list label, never crosses it
static JUSTIFICATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)justification[*_]*\s*:[*_]*\s*(.*?)\s*(?:[*_]*plot\s+points[*_]*\s*:|\z)")
        .expect("valid justification regex")
});

static PLOT_POINTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)plot\s+points[*_]*\s*:[*_]*").expect("valid plot points regex")
});

static TUPLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\(\s*([-+]?(?:\d+(?:\.\d*)?|\.\d+))\s*,\s*([-+]?(?:\d+(?:\.\d*)?|\.\d+))\s*,\s*['"](.*?)['"]\s*\)"#,
    )
    .expect("valid plot point regex")
});

/// Parse the story shape block.
///
/// Returns `None` when the block is absent, has no shape name, or yields no
/// `(time, fortune, 'description')` tuples. Points are clamped into range
/// and stably sorted by time.
#[tracing::instrument(skip_all)]
pub fn parse_plot_shape(text: &str) -> Option<PlotShape> {
    let block = find_delimited(text, PLOT_SHAPE_START, PLOT_SHAPE_END)?;
    let inner = block.inner;

    let shape_name = SHAPE_NAME_RE
        .captures(inner)
        .map(|c| c[1].trim().to_string())
        .filter(|name| !name.is_empty())?;

    let justification = JUSTIFICATION_RE
        .captures(inner)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();

    let points_text = PLOT_POINTS_RE
        .find(inner)
        .map(|m| &inner[m.end()..])
        .unwrap_or(inner);

    let mut points: Vec<PlotPoint> = TUPLE_RE
        .captures_iter(points_text)
        .filter_map(|c| {
            let time: f64 = c[1].parse().ok()?;
            let fortune: f64 = c[2].parse().ok()?;
            Some(PlotPoint {
                time: time.clamp(0.0, 1.0),
                fortune: fortune.clamp(-1.0, 1.0),
                description: c[3].trim().to_string(),
            })
        })
        .collect();

    if points.is_empty() {
        tracing::debug!(
            shape = %shape_name,
            points_len = points_text.trim().len(),
            "Story shape block has no parseable plot points"
        );
        return None;
    }

    points.sort_by(|a, b| a.time.total_cmp(&b.time));

    Some(PlotShape {
        shape_name,
        justification,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(body: &str) -> String {
        format!("Intro.\n{PLOT_SHAPE_START}\n{body}\n{PLOT_SHAPE_END}\nOutro.")
    }

    #[test]
    fn parses_well_formed_block() {
        let text = block(
            "Shape Name: Man in Hole\n\
             Justification: The hero falls into trouble\nand climbs back out.\n\
             Plot Points:\n\
             (0.0, 0.2, 'Ordinary life')\n\
             (0.45, -0.8, 'Paul's exile')\n\
             (1.0, 0.9, 'Triumph')",
        );
        let shape = parse_plot_shape(&text).unwrap();

        assert_eq!(shape.shape_name, "Man in Hole");
        assert_eq!(
            shape.justification,
            "The hero falls into trouble\nand climbs back out."
        );
        assert_eq!(shape.points.len(), 3);
        assert_eq!(shape.points[1].description, "Paul's exile");
        assert!((shape.points[1].fortune - -0.8).abs() < 1e-9);
    }

    #[test]
    fn round_trips_sorted_tuples() {
        let tuples = [(0.0, -0.1), (0.125, 0.5), (0.5, -1.0), (0.875, 0.25), (1.0, 1.0)];
        let list: Vec<String> = tuples
            .iter()
            .enumerate()
            .map(|(i, (t, f))| format!("({t}, {f}, 'beat {i}')"))
            .collect();
        let text = block(&format!(
            "Shape Name: Cinderella\nJustification: Rise, fall, rise.\nPlot Points: {}",
            list.join(", ")
        ));

        let shape = parse_plot_shape(&text).unwrap();
        assert_eq!(shape.points.len(), tuples.len());
        for (point, (t, f)) in shape.points.iter().zip(tuples) {
            assert!((point.time - t).abs() < 1e-9);
            assert!((point.fortune - f).abs() < 1e-9);
        }
    }

    #[test]
    fn unsorted_points_are_sorted_and_clamped() {
        let text = block(
            "Shape Name: Icarus\nJustification: Up then down.\nPlot Points:\n\
             (0.9, -1.5, \"fall\")\n(0.1, 0.3, \"rise\")",
        );
        let shape = parse_plot_shape(&text).unwrap();
        assert_eq!(shape.points[0].description, "rise");
        assert_eq!(shape.points[1].fortune, -1.0);
    }

    #[test]
    fn absent_block_is_none() {
        assert!(parse_plot_shape("Shape Name: Man in Hole").is_none());
    }

    #[test]
    fn block_without_tuples_is_none() {
        let text = block("Shape Name: Man in Hole\nJustification: x\nPlot Points: rises then falls");
        assert!(parse_plot_shape(&text).is_none());
    }

    #[test]
    fn unterminated_block_is_none() {
        let text = format!("{PLOT_SHAPE_START}\nShape Name: X\nPlot Points: (0, 0, 'a')");
        assert!(parse_plot_shape(&text).is_none());
    }
}
