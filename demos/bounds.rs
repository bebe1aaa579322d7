//! Bounds demo: aggregates a handful of points and rectangles and prints the
//! results.
//!
//! Usage:
//! ```text
//! cargo run --example bounds
//! RUST_LOG=planform=off cargo run --example bounds   # silence library events
//! ```

use planform::math::TOLERANCE;
use planform::{Point, PlanformError, Rectangle};

fn main() -> Result<(), PlanformError> {
    // Default: WARN for everything, TRACE for planform.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("planform=trace".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let raw: [&[f64]; 4] = [&[0.0, 0.0], &[3.0, -1.5], &[-2.0, 4.0], &[1.0, 1.0]];
    let points = raw
        .into_iter()
        .map(|values| Point::try_from_array(Some(values)))
        .collect::<Result<Vec<_>, _>>()?;

    let bounds = Point::bounds(points.iter().copied());
    println!("bounds of {} points: {bounds}", points.len());
    println!("centre: {}", bounds.centre());
    println!(
        "matches (-2, -1.5, 5, 5.5): {}",
        bounds.is_equal(&Rectangle::from_xywh(-2.0, -1.5, 5.0, 5.5), TOLERANCE)
    );

    let a = Rectangle::from_xywh(0.0, 0.0, 4.0, 4.0);
    let b = Rectangle::from_xywh(2.0, 2.0, 4.0, 4.0);
    let c = Rectangle::from_xywh(10.0, 10.0, 1.0, 1.0);

    println!("union: {}", Rectangle::union_all([a, b, c]));
    println!("a ∩ b: {}", Rectangle::intersection(&a, &b));

    let disjoint = Rectangle::intersection(&a, &c);
    println!("a ∩ c is empty: {}", disjoint.is_nan());

    Ok(())
}
