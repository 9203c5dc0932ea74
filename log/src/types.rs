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

use alog_deps::chrono::{DateTime, Utc};
use alog_deps::lazy_static::lazy_static;
use alog_deps::serde_json::{Map, Value};
use alog_err::Error;
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::sync::{Arc, Mutex, RwLock};

lazy_static! {
	#[doc(hidden)]
	pub static ref ALOG_GLOBAL_LOG: Logging = Logging::new();
}

/// Log levels, ordered from most verbose to most severe. The four custom
/// `Debug1` .. `Debug4` levels sit below [`LogLevel::Debug`] with `Debug4`
/// being the most verbose. [`LogLevel::Off`] is above every real level and is
/// not an emit level; used as a default it suppresses everything.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Debug)]
pub enum LogLevel {
	/// Most verbose custom debug level
	Debug4,
	/// Custom debug level below `Debug2`
	Debug3,
	/// Custom debug level below `Debug1`
	Debug2,
	/// Custom debug level just below `Debug`
	Debug1,
	/// Debugging information
	Debug,
	/// Very fine grained logging information that should not generally be visible except for
	/// debugging purposes
	Trace,
	/// Standard information that is usually displayed to the user under most circumstances
	Info,
	/// Warning of something that the user should be aware of, although it may not be an error
	Warning,
	/// Error that the user must be aware of
	Error,
	/// Fatal error that usually causes the application to be unusable
	Fatal,
	/// Sentinel above every real level. Not an emit level.
	Off,
}

/// A single logging event. Built per logging call and handed to the active
/// [`crate::Formatter`], then discarded.
pub struct LogEntry {
	/// Name of the channel the event was logged on.
	pub channel: String,
	/// Severity of the event.
	pub level: LogLevel,
	/// UTC time at which the event was created.
	pub timestamp: DateTime<Utc>,
	/// The interpolated message text. Empty when `map_data` carries the message.
	pub message: String,
	/// Structured log code extracted from the message arguments, if any.
	pub log_code: Option<String>,
	/// Exception / error text attached to the event, if any.
	pub exception: Option<String>,
	/// Structured key/value payload, if the caller logged a mapping.
	pub map_data: Option<Map<String, Value>>,
	/// Scope indentation depth of the calling thread at emit time.
	pub num_indent: usize,
	/// Identifier of the calling thread, when thread id display is enabled.
	pub thread_id: Option<u64>,
	/// Elapsed seconds, present on records produced by timed scopes.
	pub duration: Option<f64>,
}

/// An output destination for encoded log lines.
pub type Route = Box<dyn Write + Send>;

/// Produces a fresh [`crate::Route`]. Called once for the default route and
/// once per filtered channel on every [`crate::configure`] call.
pub type RouteFactory = Box<dyn Fn() -> Route + Send + Sync>;

/// Renders one [`crate::LogEntry`] into one or more encoded lines. Exactly one
/// formatter is active per registry at a time.
pub trait Formatter: Send + Sync {
	/// Render the entry. Lines are returned without trailing newlines.
	fn format_entry(&self, entry: &LogEntry) -> Result<Vec<String>, Error>;
	/// Used to compare the dynamic type of the installed formatter against a
	/// requested one so that no-op reconfiguration keeps per-instance options.
	fn as_any(&self) -> &dyn Any;
}

/// The human readable encoding. One header-prefixed line per message line,
/// with the channel name padded or truncated to `channel_len` characters.
pub struct PrettyFormatter {
	pub(crate) channel_len: usize,
}

/// The machine parseable encoding. One single-line JSON object per record
/// with deterministic (sorted) key ordering.
pub struct JsonFormatter {}

/// Per-channel severity overrides accepted by [`crate::configure`].
pub enum Filters {
	/// No per-channel overrides.
	None,
	/// A delimited `"CHAN:level,CHAN2:level"` specification.
	Spec(String),
	/// An explicit channel name to level name mapping.
	Map(Vec<(String, String)>),
}

/// Formatter selection accepted by [`crate::configure`].
pub enum FormatterChoice {
	/// One of the built-in names, `"pretty"` or `"json"`.
	Named(String),
	/// A caller supplied formatter instance.
	Instance(Box<dyn Formatter>),
}

/// Configuration applied by [`crate::configure`]. Invalid values degrade to
/// warnings, never errors. See the crate documentation for the full
/// semantics of reconfiguration.
pub struct LogConfig {
	/// Default severity threshold, a level name or `"disable"`.
	pub default_level: String,
	/// Per-channel threshold overrides.
	pub filters: Filters,
	/// The output encoding to install.
	pub formatter: FormatterChoice,
	/// Whether to include the calling thread's id on each record.
	pub thread_id: bool,
	/// Produces output routes. Defaults to stderr routes when [`None`].
	pub route_factory: Option<RouteFactory>,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			default_level: "info".to_string(),
			filters: Filters::None,
			formatter: FormatterChoice::Named("pretty".to_string()),
			thread_id: false,
			route_factory: None,
		}
	}
}

/// A named logging endpoint obtained from [`crate::use_channel`] or
/// [`crate::Logging::use_channel`]. Cheap to clone; all clones share the
/// owning registry.
#[derive(Clone)]
pub struct Channel {
	pub(crate) name: String,
	pub(crate) logging: Logging,
}

/// A logging registry instance. The process-wide registry behind
/// [`crate::configure`] / [`crate::use_channel`] is one of these; independent
/// instances can be built with [`crate::Logging::new`] and injected where an
/// isolated registry is needed (primarily tests).
#[derive(Clone)]
pub struct Logging {
	pub(crate) registry: Arc<RwLock<Registry>>,
}

// Crate local types

pub(crate) struct ChannelState {
	pub(crate) level: Option<LogLevel>,
	pub(crate) route: Option<Mutex<Route>>,
	pub(crate) propagate: bool,
}

pub(crate) struct Registry {
	pub(crate) default_level: LogLevel,
	pub(crate) disabled: bool,
	pub(crate) thread_id: bool,
	pub(crate) channels: HashMap<String, ChannelState>,
	pub(crate) managed: HashSet<String>,
	pub(crate) formatter: Box<dyn Formatter>,
	pub(crate) route_factory: RouteFactory,
	pub(crate) default_route: Mutex<Route>,
	pub(crate) indent_map: HashMap<u64, usize>,
}
