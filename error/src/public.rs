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

use alog_deps::failure::{Context, Fail};

/// Base Error struct which is used throughout this workspace.
#[derive(Debug, Fail)]
pub struct Error {
	pub(crate) inner: Context<ErrorKind>,
}

/// Kinds of errors that can occur.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
	/// IO Error
	#[fail(display = "IO Error: {}", _0)]
	IO(String),
	/// Log Error
	#[fail(display = "Log Error: {}", _0)]
	Log(String),
	/// UTF8 Error
	#[fail(display = "UTF8 Error: {}", _0)]
	Utf8(String),
	/// Configuration Error
	#[fail(display = "Configuration Error: {}", _0)]
	Configuration(String),
	/// Poison error multiple locks
	#[fail(display = "Poison Error: {}", _0)]
	Poison(String),
	/// Format Error
	#[fail(display = "Format Error: {}", _0)]
	Format(String),
	/// IllegalArgument
	#[fail(display = "IllegalArgument: {}", _0)]
	IllegalArgument(String),
	/// Illegal State
	#[fail(display = "Illegal State Error: {}", _0)]
	IllegalState(String),
	/// Miscellaneous Error
	#[fail(display = "Miscellaneous Error: {}", _0)]
	Misc(String),
	/// system time error
	#[fail(display = "system time error: {}", _0)]
	SystemTime(String),
	/// Simulated Error used in testing
	#[fail(display = "simulated test error: {}", _0)]
	Test(String),
}

/// The kinds of errors in this crate. This enum is used to map to error
/// names using the [`crate::err`] and [`crate::map_err`] macros.
pub enum ErrKind {
	/// IO Error
	IO,
	/// Log Error
	Log,
	/// A conversion to the UTF-8 format resulted in an error
	Utf8,
	/// Configuration error
	Configuration,
	/// Attempt to obtain a lock resulted in a poison error. See [`std::sync::PoisonError`]
	/// for further details
	Poison,
	/// A runtime message formatting / interpolation error
	Format,
	/// Illegal argument was specified
	IllegalArgument,
	/// Application is in an illegal state
	IllegalState,
	/// A Miscellaneous Error occurred
	Misc,
	/// System time error
	SystemTime,
	/// A simulated error used in tests
	Test,
}
