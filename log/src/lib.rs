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

//! Channel based logging with per-channel severity thresholds, two
//! interchangeable output encodings, scope aware indentation and a
//! structured log code convention.
//!
//! Callers obtain a [`crate::Channel`] by name and log through the per-level
//! macros. Enablement is checked before any argument is stringified, so
//! expensive values passed at a disabled level cost nothing. Besides the six
//! standard severities there are four custom levels `debug1` .. `debug4`
//! below `debug`, each progressively more verbose.
//!
//! # Examples
//!
//!```
//! use alog::*;
//! use alog_err::Error;
//!
//! fn main() -> Result<(), Error> {
//!     configure(LogConfig {
//!         default_level: "info".to_string(),
//!         filters: Filters::Spec("WORKR:debug2".to_string()),
//!         ..Default::default()
//!     })?;
//!
//!     let chan = use_channel("MAIN");
//!     info!(chan, "service started on port %d", 8080)?;
//!
//!     // the first argument is extracted as a log code when it matches the
//!     // <PPPNNNNNNNNS> token grammar and further arguments follow
//!     info!(chan, "<SRV12345678I>", "request handled in %sms", 12)?;
//!     Ok(())
//! }
//!```
//!
//! Scoped logging brackets a region of execution with `BEGIN:` / `END:`
//! records and indents everything logged in between, per thread:
//!
//!```
//! use alog::*;
//! use alog_err::Error;
//!
//! fn main() -> Result<(), Error> {
//!     let logging = Logging::new();
//!     let chan = logging.use_channel("DEMO");
//!
//!     {
//!         let _scope = scoped!(chan, LogLevel::Info, "loading {}", "config");
//!         info!(chan, "this record is indented")?;
//!     }
//!     info!(chan, "back to depth zero")?;
//!     Ok(())
//! }
//!```
//!
//! The `json` formatter produces one single-line, key-sorted object per
//! record, suitable for machine consumption:
//!
//!```text
//! {"channel":"MAIN","level":"info","message":"service started on port 8080",
//!  "num_indent":0,"timestamp":"2025-01-01T00:00:00.000000"}
//!```
//!
//! Configuration is process-wide and re-appliable; see [`crate::configure`].
//! Invalid configuration values degrade to warnings, never errors, and a
//! channel that was once filtered stays managed so stale overrides cannot
//! survive a later reconfiguration.

mod constants;
mod format;
mod log;
mod macros;
mod scope;
mod types;

pub use crate::log::{configure, use_channel};
pub use crate::scope::{short_fn_name, ScopedLog, ScopedTimer};
pub use crate::types::{
	Channel, Filters, Formatter, FormatterChoice, JsonFormatter, LogConfig, LogEntry, LogLevel,
	Logging, PrettyFormatter, Route, RouteFactory, ALOG_GLOBAL_LOG,
};
