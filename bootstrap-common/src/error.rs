use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	#[from]
	#[display("{_0}")]
	LayoutMismatch(LayoutMismatch),
	#[display("Event record is {actual} bytes, expected at least {expected}")]
	InvalidEventSize {
		expected: usize,
		actual: usize,
	},
}

/// The compiled [`crate::Event`] disagrees with the expected layout.
///
/// Producer and consumer were built against different record definitions;
/// records exchanged between them would be silently misread.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum LayoutMismatch {
	#[display("Layout mismatch: expected {expected} fields, compiled record has {actual}")]
	FieldCount { expected: usize, actual: usize },
	#[display("Layout mismatch: field #{index} is '{actual}', expected '{expected}'")]
	FieldName {
		index: usize,
		expected: String,
		actual: String,
	},
	#[display("Layout mismatch: '{field}' size = {actual}, expected {expected}")]
	FieldSize {
		field: String,
		expected: usize,
		actual: usize,
	},
	#[display("Layout mismatch: '{field}' offset = {actual}, expected {expected}")]
	FieldOffset {
		field: String,
		expected: usize,
		actual: usize,
	},
	#[display("Layout mismatch: record size = {actual}, expected {expected}")]
	RecordSize { expected: usize, actual: usize },
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

impl std::error::Error for LayoutMismatch {}

// endregion: --- Error Boilerplate
