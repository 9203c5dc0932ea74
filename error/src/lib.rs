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

//! Error crate used by the other crates in this workspace. A single
//! [`crate::Error`] struct wraps an [`crate::ErrorKind`] so that all fallible
//! operations in the workspace share one error type. Errors are typically
//! constructed through the [`crate::err`] and [`crate::map_err`] macros.
//!
//! # Examples
//!
//!```
//! use alog_err::*;
//!
//! fn might_fail(fail: bool) -> Result<(), Error> {
//!     if fail {
//!         return Err(err!(ErrKind::Configuration, "invalid parameter"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(might_fail(true).is_err());
//! assert!(might_fail(false).is_ok());
//!```

mod error;
mod macros;
mod public;
mod test;

pub use crate::public::{ErrKind, Error, ErrorKind};
