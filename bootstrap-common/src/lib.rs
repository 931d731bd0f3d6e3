#![cfg_attr(not(feature = "std"), no_std)]

// region:    --- Modules
mod event;

#[cfg(feature = "std")]
mod error;
#[cfg(feature = "std")]
pub mod layout;
#[cfg(feature = "std")]
mod process;
// endregion: --- Modules

pub use event::{EVENT_ALIGN, EVENT_SIZE, Event, MAX_FILENAME_LEN, TASK_COMM_LEN};

#[cfg(feature = "std")]
pub use error::{Error, LayoutMismatch, Result};
#[cfg(feature = "std")]
pub use layout::{FieldLayout, RecordLayout, assert_layout_matches, describe_layout};
#[cfg(feature = "std")]
pub use process::ProcessEvent;
