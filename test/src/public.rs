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

use std::sync::{Arc, Mutex};

/// This trait defines the data which a test can use. A test can obtain one of these by calling the
/// [`crate::test_info`] macro.
pub trait TestInfo {
	/// Return a directory that can be used by the test. It is automatically deleted when the
	/// [`crate::TestInfo`] goes out of scope.
	fn directory(&self) -> &String;
}

/// A builder that is used to construct TestInfo implementations. This is typically called through
/// the [`crate::test_info`] macro.
pub struct TestBuilder {}

/// An in-memory output destination for tests. Cloning a [`crate::CaptureRoute`] shares the
/// underlying buffer, so a clone can be handed to a logger while the test keeps a handle
/// to read back what was written.
#[derive(Clone)]
pub struct CaptureRoute {
	pub(crate) data: Arc<Mutex<Vec<u8>>>,
}
