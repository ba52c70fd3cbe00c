use ripple_util::errors::{Problem, RippleError};

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = RippleError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_validation_error_counts_problems() {
    let err = RippleError::Validation {
        problems: vec![
            Problem::new("Validation", "conflicting versions of Bottles"),
            Problem::new("Validation", "conflicting versions of FubuCore"),
        ],
    };
    assert_eq!(err.to_string(), "solution validation failed with 2 problem(s)");
}

#[test]
fn test_problem_display_carries_provenance() {
    let problem = Problem::new("Validation", "conflicting versions of Bottles");
    assert_eq!(
        problem.to_string(),
        "[Validation] conflicting versions of Bottles"
    );
}

#[test]
fn test_dependency_not_found_display() {
    let err = RippleError::DependencyNotFound {
        name: "Bottles".to_string(),
    };
    assert_eq!(err.to_string(), "dependency not found: Bottles");
}

#[test]
fn test_storage_error_from_cause() {
    let err = RippleError::storage("disk full");
    assert_eq!(err.to_string(), "storage error: disk full");
}

#[test]
fn test_generic_error_display() {
    let err = RippleError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}
