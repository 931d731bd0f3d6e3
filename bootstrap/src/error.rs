use bootstrap_common::LayoutMismatch;
use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	#[display("No layout file found at '{_0}'")]
	LayoutFileNotFound(String),
	#[display("Layout file has duplicate field '{_0}'")]
	DuplicateField(String),

	// -- Record
	#[from]
	#[display("{_0}")]
	Layout(LayoutMismatch),

	// -- Externals
	#[from]
	#[display("{_0}")]
	TomlDe(toml::de::Error),
	#[from]
	#[display("{_0}")]
	TomlSer(toml::ser::Error),
	#[from]
	#[display("{_0}")]
	Io(std::io::Error),
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
