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

#[cfg(test)]
mod test {
	use crate as alog_test;
	use crate::{test_info, CaptureRoute};
	use alog_err::Error;
	use std::fs::File;
	use std::io::Write;
	use std::path::PathBuf;

	#[test]
	fn test_test_info_directory() -> Result<(), Error> {
		let directory;
		{
			let test_info = test_info!()?;
			directory = test_info.directory().clone();
			assert!(PathBuf::from(&directory).exists());

			let mut path = PathBuf::from(&directory);
			path.push("file.txt");
			let mut file = File::create(path.clone())?;
			file.write_all(b"test")?;
			assert!(path.exists());
		}
		// directory is removed when test_info goes out of scope
		assert!(!PathBuf::from(&directory).exists());
		Ok(())
	}

	#[test]
	fn test_capture_route() -> Result<(), Error> {
		let capture = CaptureRoute::new();
		let mut writer = capture.clone();
		writer.write_all(b"line one\n")?;
		writer.write_all(b"line two\n")?;
		writer.flush()?;

		assert_eq!(capture.contents()?, "line one\nline two\n");

		capture.clear()?;
		assert_eq!(capture.contents()?, "");
		Ok(())
	}
}
