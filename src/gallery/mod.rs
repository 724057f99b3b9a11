//! Ready-made figures published by the bundled binaries.
//!
//! Each function returns the figure together with the filename it is
//! published under.

use crate::api::PublishOptions;
use crate::core::{Annotation, ArrowStyle, Axis, AxisRef, Figure, Font, Layout, Trace};
use crate::error::ChartResult;

pub const GLOBAL_FONT_FILENAME: &str = "global-font";
pub const SIMPLE_ANNOTATION_FILENAME: &str = "simple-annotation";
pub const AXES_BOOLEANS_FILENAME: &str = "axes-booleans";

/// Options every gallery figure is published with: overwrite in place and
/// never open a local browser.
#[must_use]
pub fn publish_options(filename: &str) -> PublishOptions {
    PublishOptions::new(filename).with_auto_open(false)
}

fn x_range() -> Vec<f64> {
    (0..9).map(f64::from).collect()
}

/// One straight-line trace under a title and a monospace global font.
pub fn global_font() -> ChartResult<(Figure, &'static str)> {
    let trace = Trace::scatter(x_range(), x_range())?;
    let layout = Layout::new().with_title("Global Font").with_font(
        Font::new()
            .with_family("Courier New, monospace")
            .with_size(18.0)
            .with_color("#7f7f7f"),
    );
    Ok((Figure::new(vec![trace], layout), GLOBAL_FONT_FILENAME))
}

/// Two traces, hidden legend, and one arrowed annotation at (2, 5).
pub fn simple_annotation() -> ChartResult<(Figure, &'static str)> {
    let first = Trace::scatter(
        x_range(),
        vec![0.0, 1.0, 3.0, 2.0, 4.0, 3.0, 4.0, 6.0, 5.0],
    )?;
    let second = Trace::scatter(
        x_range(),
        vec![0.0, 4.0, 5.0, 1.0, 2.0, 2.0, 3.0, 4.0, 2.0],
    )?;
    let annotation = Annotation::new(2.0, 5.0, "Annotation Text")?
        .with_refs(AxisRef::x(), AxisRef::y())?
        .with_arrow(ArrowStyle::new(7, 0.0, -40.0))?;
    let layout = Layout::new()
        .with_showlegend(false)
        .with_annotations(vec![annotation]);
    Ok((
        Figure::new(vec![first, second], layout),
        SIMPLE_ANNOTATION_FILENAME,
    ))
}

/// Crossing descending/ascending traces with every axis decoration off.
pub fn axes_booleans() -> ChartResult<(Figure, &'static str)> {
    let descending: Vec<f64> = x_range().into_iter().rev().collect();
    let first = Trace::scatter(x_range(), descending)?;
    let second = Trace::scatter(x_range(), x_range())?;
    let layout = Layout::new()
        .with_xaxis(Axis::hidden())
        .with_yaxis(Axis::hidden());
    Ok((Figure::new(vec![first, second], layout), AXES_BOOLEANS_FILENAME))
}
