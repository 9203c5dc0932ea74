// Copyright (c) 2024-2025, The Alog Rust Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::types::TestInfoImpl;
use crate::{CaptureRoute, TestBuilder, TestInfo};
use alog_deps::backtrace;
use alog_err::Error;
use std::fs::{create_dir_all, remove_dir_all};
use std::io::Write;
use std::sync::{Arc, Mutex};

impl TestBuilder {
	/// Build a [`crate::TestInfo`] implementation. Usually called through the
	/// [`crate::test_info`] macro.
	pub fn build_test_info(preserve: bool) -> Result<Box<dyn TestInfo>, Error> {
		Ok(Box::new(TestInfoImpl::new(preserve)?))
	}
}

impl TestInfo for TestInfoImpl {
	fn directory(&self) -> &String {
		&self.directory
	}
}

impl TestInfoImpl {
	pub(crate) fn new(preserve: bool) -> Result<Self, Error> {
		let mut directory = String::new();
		backtrace::trace(|frame| {
			backtrace::resolve_frame(frame, |symbol| {
				// don't think symbol.name() can be none, but this is only used in
				// tests, so even if it is, it's ok.
				match symbol.name() {
					Some(name) => directory = name.to_string(),
					None => {}
				}
			});
			// wait until we get past our own frames to the actual test name.
			directory.starts_with("backtrace")
				|| directory.contains("alog_test::types::TestInfoImpl")
				|| directory.contains("alog_test::impls::")
				|| directory.contains("alog_test::public::TestBuilder")
		});

		let directory = directory.replace("::", "_");
		let directory = format!(".{}.alog", directory);
		// remove the directory if it existed from a previous failed run
		let _ = remove_dir_all(directory.clone());
		create_dir_all(directory.clone())?;

		Ok(Self {
			directory,
			preserve,
		})
	}
}

impl Drop for TestInfoImpl {
	fn drop(&mut self) {
		// if we're not preserving the directory, delete it on drop.
		if !self.preserve {
			let _ = remove_dir_all(self.directory.clone());
		}
	}
}

impl CaptureRoute {
	/// Build an empty [`crate::CaptureRoute`].
	pub fn new() -> Self {
		Self {
			data: Arc::new(Mutex::new(vec![])),
		}
	}

	/// Return everything written to this route so far as a [`std::string::String`].
	pub fn contents(&self) -> Result<String, Error> {
		let data = self.data.lock()?;
		Ok(String::from_utf8((*data).clone())?)
	}

	/// Discard everything written to this route so far.
	pub fn clear(&self) -> Result<(), Error> {
		let mut data = self.data.lock()?;
		(*data).clear();
		Ok(())
	}
}

impl Write for CaptureRoute {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		let mut data = self
			.data
			.lock()
			.map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("{}", e)))?;
		(*data).extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> std::io::Result<()> {
		Ok(())
	}
}
