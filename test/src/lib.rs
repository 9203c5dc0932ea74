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

//! Test utilities used by the other crates in this workspace. The
//! [`crate::test_info`] macro builds a [`crate::TestInfo`] which provides a
//! unique directory for the test that is removed when the value goes out of
//! scope. [`crate::CaptureRoute`] is an in-memory output destination used to
//! assert on emitted log lines.
//!
//! # Examples
//!
//!```
//! use alog_err::*;
//! use alog_test::*;
//!
//! fn test_my_fn() -> Result<(), Error> {
//!     let test_info = test_info!()?;
//!     let directory = test_info.directory();
//!
//!     // write/read files under `directory`. It is deleted when test_info
//!     // is dropped at the end of the test function.
//!
//!     Ok(())
//! }
//!```

mod impls;
mod macros;
mod public;
mod test;
mod types;

pub use crate::public::{CaptureRoute, TestBuilder, TestInfo};
