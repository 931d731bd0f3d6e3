use std::fmt::Write;

use bootstrap_common::RecordLayout;

use crate::cli::args::ReportFormat;
use crate::error::Result;
use crate::layout_file::LayoutFile;

pub fn render(record: &RecordLayout, format: ReportFormat) -> Result<String> {
	match format {
		ReportFormat::Text => Ok(render_text(record)),
		ReportFormat::Toml => LayoutFile::from(record).to_toml(),
	}
}

/// One `name: size = N, offset = M` line per field, in declaration order.
pub fn render_text(record: &RecordLayout) -> String {
	let mut out = String::new();
	for field in &record.fields {
		let _ = writeln!(out, "{}: size = {}, offset = {}", field.name, field.size, field.offset);
	}
	let _ = writeln!(out, "total: size = {}, align = {}", record.size, record.align);
	out
}

// region:    --- Tests


// endregion: --- Tests
