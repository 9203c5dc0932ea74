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

/// Macro to setup a test directory based on the function name. The directory is
/// removed when the returned value goes out of scope unless the `preserve` value
/// is specified and set to true. Specifically a [`crate::TestInfo`] is returned
/// by this macro.
/// # Input Parameters
/// * `preserve` - [`bool`] - If set to [`true`] the directory associated with the
/// returned [`crate::TestInfo`] will be preserved at the end of the test. Otherwise, it will be
/// deleted.
/// # Return
/// [`crate::TestInfo`] - a test info impl that can be used to find a unique usable directory
/// for this test.
/// # Errors
/// [`alog_err::ErrKind::IO`] - if the directory cannot be created.
/// # Also see
/// * [`crate::TestInfo`]
/// # Examples
///```
/// use alog_err::*;
/// use alog_test::*;
///
/// fn test_my_fn() -> Result<(), Error> {
///     let test_info = test_info!()?;
///
///     let directory = test_info.directory();
///
///     // use the directory to write/read files. The directory will be deleted
///     // when the test_info impl is dropped (at the end of this test function).
///
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! test_info {
	() => {{
		test_info!(false)
	}};
	($preserve:expr) => {{
		use alog_test::TestBuilder;
		TestBuilder::build_test_info($preserve)
	}};
}
