use core::mem::{align_of, offset_of, size_of};

use zerocopy_derive::{FromBytes, Immutable, IntoBytes, KnownLayout};

pub const TASK_COMM_LEN: usize = 16;
pub const MAX_FILENAME_LEN: usize = 127;

/// Size in bytes of one [`Event`] record on the wire.
pub const EVENT_SIZE: usize = 168;
pub const EVENT_ALIGN: usize = 8;

/// One process lifecycle record, written by the probe on `sched_process_exec`
/// and `sched_process_exit` and read back by user space.
///
/// Padding is spelled out as a named field so the record has no implicit
/// padding. Integers are in the host byte order (little-endian on `bpfel`).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct Event {
	pub pid: u32,                          //   0..4
	pub ppid: u32,                         //   4..8
	pub exit_code: i32,                    //   8..12
	pub _pad0: [u8; 4],                    //  12..16
	pub duration_ns: u64,                  //  16..24
	pub comm: [u8; TASK_COMM_LEN],         //  24..40
	pub filename: [u8; MAX_FILENAME_LEN],  //  40..167
	pub exit_event: u8,                    // 167..168 | 0 => exec, otherwise exit
}

// Build-time half of the layout contract: a producer or consumer compiled
// against a drifted definition does not build.
const _: () = {
	assert!(size_of::<Event>() == EVENT_SIZE);
	assert!(align_of::<Event>() == EVENT_ALIGN);
	assert!(offset_of!(Event, pid) == 0);
	assert!(offset_of!(Event, ppid) == 4);
	assert!(offset_of!(Event, exit_code) == 8);
	assert!(offset_of!(Event, duration_ns) == 16);
	assert!(offset_of!(Event, comm) == 24);
	assert!(offset_of!(Event, filename) == 40);
	assert!(offset_of!(Event, exit_event) == 167);
};

impl Event {
	/// Record for a process that just called `exec`.
	pub fn exec(pid: u32, ppid: u32, comm: &[u8], filename: &[u8]) -> Self {
		let mut evt = Self::zeroed();
		evt.pid = pid;
		evt.ppid = ppid;
		evt.set_comm(comm);
		evt.set_filename(filename);
		evt
	}

	/// Record for a process that exited after `duration_ns`.
	pub fn exit(pid: u32, ppid: u32, comm: &[u8], exit_code: i32, duration_ns: u64) -> Self {
		let mut evt = Self::zeroed();
		evt.pid = pid;
		evt.ppid = ppid;
		evt.exit_code = exit_code;
		evt.duration_ns = duration_ns;
		evt.set_comm(comm);
		evt.exit_event = 1;
		evt
	}

	pub fn zeroed() -> Self {
		<Self as zerocopy::FromZeros>::new_zeroed()
	}

	pub fn is_exit(&self) -> bool {
		self.exit_event != 0
	}

	/// Stores at most `TASK_COMM_LEN - 1` bytes of `comm`, always NUL terminated.
	pub fn set_comm(&mut self, comm: &[u8]) {
		copy_truncated(&mut self.comm, comm);
	}

	/// Stores at most `MAX_FILENAME_LEN - 1` bytes of `filename`, always NUL terminated.
	pub fn set_filename(&mut self, filename: &[u8]) {
		copy_truncated(&mut self.filename, filename);
	}

	pub fn comm_bytes(&self) -> &[u8] {
		until_nul(&self.comm)
	}

	pub fn filename_bytes(&self) -> &[u8] {
		until_nul(&self.filename)
	}
}

fn copy_truncated<const N: usize>(dst: &mut [u8; N], src: &[u8]) {
	let len = src.len().min(N - 1);
	dst[..len].copy_from_slice(&src[..len]);
	dst[len..].fill(0);
}

// A buffer with no NUL (never written by a conforming producer) is returned whole.
fn until_nul(buf: &[u8]) -> &[u8] {
	match buf.iter().position(|&b| b == 0) {
		Some(end) => &buf[..end],
		None => buf,
	}
}

#[cfg(feature = "user")]
unsafe impl aya::Pod for Event {}

// region:    --- Tests


// endregion: --- Tests
