//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use std::cell::Cell;

use crate::data_structures::ProbeHashTableError;
use crate::error::{ErrorContext, ErrorReporter, QuillError, TracingErrorReporter};
use crate::markov::{classify, ModelError};

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = QuillError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that component errors convert and keep their messages.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = QuillError::from(io_error);
    assert!(format!("{error}").contains("file not found"));

    let error = QuillError::from(ProbeHashTableError::KeyNotFound("ab".to_string()));
    assert_eq!(format!("{error}"), "Hash table error: Key not found: \"ab\"");

    let error = QuillError::from(ModelError::EmptySample);
    assert!(format!("{error}").starts_with("Model error: Sample text is empty"));
}

/// Test that library errors propagate into the crate-level error with `?`.
#[test]
fn test_question_mark_conversion() {
    fn run() -> crate::error::QuillResult<()> {
        classify("abc", "abc", "", 1, true)?;
        Ok(())
    }

    assert!(matches!(run(), Err(QuillError::Model(ModelError::EmptySample))));
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: Cell<usize>,
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.set(self.reported_count.get() + 1);
    }
}

/// Test that reporters receive each reported context.
#[test]
fn test_error_reporter() {
    let reporter = MockErrorReporter::default();

    reporter.report(ErrorContext::new(QuillError::Custom("one".to_string()), "a"));
    reporter.report(ErrorContext::new(QuillError::Custom("two".to_string()), "b"));

    assert_eq!(reporter.reported_count.get(), 2);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = QuillError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
