use std::collections::HashSet;
use std::path::Path;

use bootstrap_common::layout::{self, FieldLayout, RecordLayout};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Expected record layout as exchanged between builds, e.g.
///
/// ```toml
/// size = 168
///
/// [[fields]]
/// name = "pid"
/// size = 4
/// offset = 0
/// ```
#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LayoutFile {
	#[serde(default)]
	pub size: Option<usize>,
	pub fields: Vec<FieldEntry>,
}

#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldEntry {
	pub name: String,
	pub size: usize,
	pub offset: usize,
}

impl LayoutFile {
	pub fn parse(s: &str) -> Result<Self> {
		let file: LayoutFile = toml::from_str(s)?;

		let mut seen = HashSet::new();
		for field in &file.fields {
			if !seen.insert(field.name.as_str()) {
				return Err(Error::DuplicateField(field.name.clone()));
			}
		}

		Ok(file)
	}

	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();

		if !path.exists() {
			return Err(Error::LayoutFileNotFound(path.display().to_string()));
		}

		debug!("Loading expected layout from '{}'", path.display());
		let str = std::fs::read_to_string(path)?;
		Self::parse(&str)
	}

	pub fn to_toml(&self) -> Result<String> {
		Ok(toml::to_string_pretty(self)?)
	}

	pub fn field_layouts(&self) -> Vec<FieldLayout> {
		self.fields
			.iter()
			.map(|f| FieldLayout {
				name: f.name.clone().into(),
				size: f.size,
				offset: f.offset,
			})
			.collect()
	}

	/// Fails on the first difference between the compiled record and this file.
	pub fn verify(&self) -> Result<()> {
		layout::assert_layout_matches(&self.field_layouts())?;
		if let Some(size) = self.size {
			layout::assert_record_size(size)?;
		}
		Ok(())
	}
}

impl From<&RecordLayout> for LayoutFile {
	fn from(record: &RecordLayout) -> Self {
		LayoutFile {
			size: Some(record.size),
			fields: record
				.fields
				.iter()
				.map(|f| FieldEntry {
					name: f.name.to_string(),
					size: f.size,
					offset: f.offset,
				})
				.collect(),
		}
	}
}

// region:    --- Tests


// endregion: --- Tests
