use rand::Rng;
use tracing::{info, instrument};

use crate::{
    application::{error::ApplicationError, instrumentation::timed},
    domain::models::points::{Point, PointRange},
};

/// Validates the request and samples `count` points uniformly from
/// `[min, max]` on both axes.
#[instrument(level = "debug")]
pub fn generate_points(
    count: i64,
    min: f64,
    max: f64,
    max_points: usize,
) -> Result<Vec<Point>, ApplicationError> {
    let range = validate(count, min, max, max_points)?;

    info!(
        "Generating {} random data points between {} and {}",
        range.count, range.min, range.max
    );

    let (points, _) = timed("generate_points", || {
        let mut rng = rand::thread_rng();
        (0..range.count)
            .map(|_| {
                Point(
                    rng.gen_range(range.min..=range.max),
                    rng.gen_range(range.min..=range.max),
                )
            })
            .collect::<Vec<_>>()
    });

    Ok(points)
}

fn validate(count: i64, min: f64, max: f64, max_points: usize) -> Result<PointRange, ApplicationError> {
    if count < 1 {
        return Err(ApplicationError::Validation(
            "num_points must be greater than or equal to 1".to_string(),
        ));
    }
    let count = usize::try_from(count).unwrap_or(usize::MAX);
    if count > max_points {
        return Err(ApplicationError::Validation(format!(
            "num_points must be less than or equal to {}",
            max_points
        )));
    }
    if !min.is_finite() || !max.is_finite() {
        return Err(ApplicationError::Validation(
            "min_value and max_value must be finite numbers".to_string(),
        ));
    }
    if min > max {
        return Err(ApplicationError::Validation(
            "min_value must be less than or equal to max_value".to_string(),
        ));
    }
    if !(max - min).is_finite() {
        return Err(ApplicationError::Validation(
            "range between min_value and max_value is too wide".to_string(),
        ));
    }

    Ok(PointRange { count, min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = 1_000_000;

    #[test]
    fn generates_requested_number_within_bounds() {
        let points = generate_points(10, 0.0, 100.0, LIMIT).unwrap();

        assert_eq!(points.len(), 10);
        assert!(points
            .iter()
            .all(|p| (0.0..=100.0).contains(&p.0) && (0.0..=100.0).contains(&p.1)));
    }

    #[test]
    fn negative_bounds_are_supported() {
        let points = generate_points(50, -1.5, 1.5, LIMIT).unwrap();
        assert_eq!(points.len(), 50);
        assert!(points
            .iter()
            .all(|p| (-1.5..=1.5).contains(&p.0) && (-1.5..=1.5).contains(&p.1)));
    }

    #[test]
    fn equal_bounds_yield_constant_points() {
        let points = generate_points(3, 7.0, 7.0, LIMIT).unwrap();
        assert!(points.iter().all(|p| *p == Point(7.0, 7.0)));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = generate_points(10, 10.0, 5.0, LIMIT).unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }

    #[test]
    fn zero_and_negative_counts_are_rejected() {
        assert!(matches!(
            generate_points(0, 0.0, 1.0, LIMIT),
            Err(ApplicationError::Validation(_))
        ));
        assert!(matches!(
            generate_points(-5, 0.0, 1.0, LIMIT),
            Err(ApplicationError::Validation(_))
        ));
    }

    #[test]
    fn count_above_limit_is_rejected() {
        assert!(matches!(
            generate_points(11, 0.0, 1.0, 10),
            Err(ApplicationError::Validation(_))
        ));
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        assert!(matches!(
            generate_points(1, f64::NAN, 1.0, LIMIT),
            Err(ApplicationError::Validation(_))
        ));
        assert!(matches!(
            generate_points(1, 0.0, f64::INFINITY, LIMIT),
            Err(ApplicationError::Validation(_))
        ));
    }
}
