use std::borrow::Cow;
use std::time::Duration;

use zerocopy::FromBytes;

use crate::error::{Error, Result};
use crate::event::{EVENT_SIZE, Event};

/// What an [`Event`] says happened, with the fields that are meaningful for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent<'a> {
	Exec { filename: Cow<'a, str> },
	Exit { exit_code: i32, duration: Duration },
}

impl Event {
	/// Copies a record out of a ring buffer sample.
	///
	/// Samples may carry trailing bytes; only the leading record is read.
	pub fn from_bytes(data: &[u8]) -> Result<Self> {
		let (evt, _rest) = Event::read_from_prefix(data).map_err(|_| Error::InvalidEventSize {
			expected: EVENT_SIZE,
			actual: data.len(),
		})?;
		Ok(evt)
	}

	pub fn comm_str(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(self.comm_bytes())
	}

	pub fn filename_str(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(self.filename_bytes())
	}

	pub fn kind(&self) -> ProcessEvent<'_> {
		if self.is_exit() {
			ProcessEvent::Exit {
				exit_code: self.exit_code,
				duration: Duration::from_nanos(self.duration_ns),
			}
		} else {
			ProcessEvent::Exec {
				filename: self.filename_str(),
			}
		}
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;
	use zerocopy::IntoBytes;

	#[test]
	fn from_bytes_reads_exec_record() -> Result<()> {
		// -- Setup & Fixtures
		let fx_evt = Event::exec(4242, 1, b"bash", b"/usr/bin/ls");

		// -- Exec
		let evt = Event::from_bytes(fx_evt.as_bytes())?;

		// -- Check
		assert_eq!(evt.pid, 4242);
		assert_eq!(evt.ppid, 1);
		assert_eq!(evt.comm_str(), "bash");
		assert_eq!(
			evt.kind(),
			ProcessEvent::Exec {
				filename: Cow::Borrowed("/usr/bin/ls"),
			}
		);

		Ok(())
	}

	#[test]
	fn from_bytes_ignores_trailing_sample_bytes() -> Result<()> {
		// -- Setup & Fixtures
		let fx_evt = Event::exit(7, 1, b"sleep", 0, 2_000_000_000);
		let mut fx_sample = fx_evt.as_bytes().to_vec();
		fx_sample.extend_from_slice(&[0xAA; 8]);

		// -- Exec
		let evt = Event::from_bytes(&fx_sample)?;

		// -- Check
		assert_eq!(evt, fx_evt);
		assert_eq!(
			evt.kind(),
			ProcessEvent::Exit {
				exit_code: 0,
				duration: Duration::from_secs(2),
			}
		);

		Ok(())
	}

	#[test]
	fn from_bytes_rejects_short_sample() -> Result<()> {
		// -- Setup & Fixtures
		let fx_evt = Event::exec(1, 0, b"init", b"/sbin/init");
		let fx_sample = &fx_evt.as_bytes()[..EVENT_SIZE - 1];

		// -- Exec
		let res = Event::from_bytes(fx_sample);

		// -- Check
		assert!(matches!(
			res,
			Err(Error::InvalidEventSize {
				expected: EVENT_SIZE,
				actual,
			}) if actual == EVENT_SIZE - 1
		));

		Ok(())
	}

	#[test]
	fn exit_fields_follow_discriminator_byte() -> Result<()> {
		// -- Setup & Fixtures
		let mut fx_sample = Event::exec(9, 1, b"make", b"/usr/bin/make").as_bytes().to_vec();
		fx_sample[EVENT_SIZE - 1] = 1;

		// -- Exec
		let evt = Event::from_bytes(&fx_sample)?;

		// -- Check
		assert!(matches!(evt.kind(), ProcessEvent::Exit { exit_code: 0, .. }));

		Ok(())
	}

	#[test]
	fn text_without_nul_is_read_within_capacity() -> Result<()> {
		// -- Setup & Fixtures
		let mut fx_sample = Event::zeroed().as_bytes().to_vec();
		fx_sample[24..40].fill(b'z');

		// -- Exec
		let evt = Event::from_bytes(&fx_sample)?;

		// -- Check
		assert_eq!(evt.comm_str(), "z".repeat(16));
		assert_eq!(evt.filename_str(), "");

		Ok(())
	}
}

// endregion: --- Tests
