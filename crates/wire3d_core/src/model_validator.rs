//! Model validation
//!
//! Validates wireframe models for common errors before they reach a
//! renderer. The [`ModelValidator`] checks for empty models, edges that
//! reference points outside the collection, and degenerate edges.
//!
//! Validation is advisory: the projection engine independently treats a
//! bad edge as a recoverable per-edge failure at lookup time, so an
//! unvalidated model still renders everything that is well-formed.

use crate::{Edge, WireModel};

/// Validation error found in a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Model has no points
    EmptyModel,
    /// Edge references a point index outside the collection
    EdgeOutOfBounds {
        /// The offending edge
        edge: Edge,
        /// Size of the point collection it indexes into
        point_count: usize,
    },
    /// Edge connects a point to itself
    DegenerateEdge(Edge),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyModel => write!(f, "Model has no points"),
            ValidationError::EdgeOutOfBounds { edge, point_count } => {
                write!(
                    f,
                    "Edge ({}, {}) references a point outside the collection of {} points",
                    edge.a, edge.b, point_count
                )
            }
            ValidationError::DegenerateEdge(edge) => {
                write!(f, "Edge ({}, {}) connects a point to itself", edge.a, edge.b)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Model validator that checks for common errors
///
/// Performs static analysis of a [`WireModel`] to detect issues before
/// rendering: empty models, out-of-bounds edge endpoints, and degenerate
/// edges.
///
/// # Example
/// ```ignore
/// let errors = ModelValidator::validate(&model);
/// for error in &errors {
///     eprintln!("Validation error: {}", error);
/// }
/// ```
pub struct ModelValidator;

impl ModelValidator {
    /// Validate a model, returning all errors found
    ///
    /// Returns an empty vector if no validation errors are detected.
    pub fn validate(model: &WireModel) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let point_count = model.point_count();

        if point_count == 0 {
            errors.push(ValidationError::EmptyModel);
        }

        for &edge in model.edges() {
            if edge.a >= point_count || edge.b >= point_count {
                errors.push(ValidationError::EdgeOutOfBounds { edge, point_count });
            } else if edge.is_degenerate() {
                errors.push(ValidationError::DegenerateEdge(edge));
            }
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(model: &WireModel) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate(model);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire3d_math::Vec3;

    fn triangle() -> WireModel {
        WireModel::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)],
        )
    }

    #[test]
    fn test_valid_model_returns_no_errors() {
        let errors = ModelValidator::validate(&triangle());
        assert!(errors.is_empty(), "Expected no errors, got: {:?}", errors);
    }

    #[test]
    fn test_validate_or_error_ok_for_valid_model() {
        assert!(ModelValidator::validate_or_error(&triangle()).is_ok());
    }

    #[test]
    fn test_empty_model_error() {
        let model = WireModel::new(Vec::new(), Vec::new());
        let errors = ModelValidator::validate(&model);
        assert!(errors.contains(&ValidationError::EmptyModel));
    }

    #[test]
    fn test_out_of_bounds_edge_detected() {
        let model = WireModel::new(
            vec![Vec3::ZERO, Vec3::X],
            vec![Edge::new(0, 1), Edge::new(1, 5)],
        );
        let errors = ModelValidator::validate(&model);
        assert!(errors.contains(&ValidationError::EdgeOutOfBounds {
            edge: Edge::new(1, 5),
            point_count: 2,
        }));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_degenerate_edge_detected() {
        let model = WireModel::new(
            vec![Vec3::ZERO, Vec3::X],
            vec![Edge::new(1, 1)],
        );
        let errors = ModelValidator::validate(&model);
        assert!(errors.contains(&ValidationError::DegenerateEdge(Edge::new(1, 1))));
    }

    #[test]
    fn test_multiple_errors_detected() {
        let model = WireModel::new(
            Vec::new(),
            vec![Edge::new(0, 3), Edge::new(7, 7)],
        );
        let errors = ModelValidator::validate(&model);
        // Empty model plus two bad edges (both out of bounds of zero points)
        assert!(errors.len() >= 3, "Expected at least 3 errors, got {}: {:?}",
            errors.len(), errors);
        assert!(errors.contains(&ValidationError::EmptyModel));
    }

    #[test]
    fn test_validate_or_error_returns_err_for_invalid() {
        let model = WireModel::new(Vec::new(), Vec::new());
        let result = ModelValidator::validate_or_error(&model);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains(&ValidationError::EmptyModel));
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            format!("{}", ValidationError::EmptyModel),
            "Model has no points"
        );
        let msg = format!("{}", ValidationError::EdgeOutOfBounds {
            edge: Edge::new(1, 5),
            point_count: 2,
        });
        assert!(msg.contains("(1, 5)"));
        assert!(msg.contains("2 points"));
        assert!(
            format!("{}", ValidationError::DegenerateEdge(Edge::new(3, 3))).contains("(3, 3)")
        );
    }
}
