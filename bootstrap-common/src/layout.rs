//! Field-by-field description of the [`Event`] record and the check both
//! sides of the ring buffer run before exchanging records.
//!
//! Offsets are measured from the compiled struct, so a mismatch against
//! [`EXPECTED_LAYOUT`] means this build disagrees with the agreed contract.

use std::borrow::Cow;
use std::mem::{align_of, offset_of, size_of};

use crate::error::LayoutMismatch;
use crate::event::{EVENT_SIZE, Event};

pub const FIELD_COUNT: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
	pub name: Cow<'static, str>,
	pub size: usize,
	pub offset: usize,
}

impl FieldLayout {
	pub const fn new(name: &'static str, size: usize, offset: usize) -> Self {
		Self {
			name: Cow::Borrowed(name),
			size,
			offset,
		}
	}

	pub fn end(&self) -> usize {
		self.offset + self.size
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLayout {
	pub size: usize,
	pub align: usize,
	pub fields: Vec<FieldLayout>,
}

/// The agreed contract, in declaration order. Padding is not a field.
pub const EXPECTED_LAYOUT: [FieldLayout; FIELD_COUNT] = [
	FieldLayout::new("pid", 4, 0),
	FieldLayout::new("ppid", 4, 4),
	FieldLayout::new("exit_code", 4, 8),
	FieldLayout::new("duration_ns", 8, 16),
	FieldLayout::new("comm", 16, 24),
	FieldLayout::new("filename", 127, 40),
	FieldLayout::new("exit_event", 1, 167),
];

pub const EXPECTED_RECORD_SIZE: usize = EVENT_SIZE;

macro_rules! field {
	($name:ident) => {
		FieldLayout {
			name: Cow::Borrowed(stringify!($name)),
			size: size_of_field(|evt| &evt.$name),
			offset: offset_of!(Event, $name),
		}
	};
}

fn size_of_field<F>(_field: impl Fn(&Event) -> &F) -> usize {
	size_of::<F>()
}

/// Measured `(name, size, offset)` of every field, in declaration order.
pub fn describe_layout() -> [FieldLayout; FIELD_COUNT] {
	[
		field!(pid),
		field!(ppid),
		field!(exit_code),
		field!(duration_ns),
		field!(comm),
		field!(filename),
		field!(exit_event),
	]
}

pub fn record_layout() -> RecordLayout {
	RecordLayout {
		size: size_of::<Event>(),
		align: align_of::<Event>(),
		fields: describe_layout().into(),
	}
}

/// Compares the compiled layout against `expected`, field by field and in order.
///
/// Reports the first difference found. Callers treat any error as fatal.
pub fn assert_layout_matches(expected: &[FieldLayout]) -> Result<(), LayoutMismatch> {
	let actual = describe_layout();

	if expected.len() != actual.len() {
		return Err(LayoutMismatch::FieldCount {
			expected: expected.len(),
			actual: actual.len(),
		});
	}

	for (index, (exp, act)) in expected.iter().zip(actual.iter()).enumerate() {
		if exp.name != act.name {
			return Err(LayoutMismatch::FieldName {
				index,
				expected: exp.name.to_string(),
				actual: act.name.to_string(),
			});
		}
		if exp.size != act.size {
			return Err(LayoutMismatch::FieldSize {
				field: act.name.to_string(),
				expected: exp.size,
				actual: act.size,
			});
		}
		if exp.offset != act.offset {
			return Err(LayoutMismatch::FieldOffset {
				field: act.name.to_string(),
				expected: exp.offset,
				actual: act.offset,
			});
		}
	}

	Ok(())
}

pub fn assert_record_size(expected: usize) -> Result<(), LayoutMismatch> {
	let actual = size_of::<Event>();
	if expected != actual {
		return Err(LayoutMismatch::RecordSize { expected, actual });
	}
	Ok(())
}

/// Full startup check against the built-in contract.
pub fn verify() -> Result<(), LayoutMismatch> {
	assert_layout_matches(&EXPECTED_LAYOUT)?;
	assert_record_size(EXPECTED_RECORD_SIZE)?;
	Ok(())
}

// region:    --- Tests


// endregion: --- Tests
