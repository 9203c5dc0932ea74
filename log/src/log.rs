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

use crate::constants::*;
use crate::types::{ChannelState, Registry, ALOG_GLOBAL_LOG};
use crate::{
	Channel, Filters, FormatterChoice, JsonFormatter, LogConfig, LogEntry, LogLevel, Logging,
	PrettyFormatter, Route,
};
use alog_deps::chrono::Utc;
use alog_deps::serde_json::{Map, Value};
use alog_err::Error;
use std::cell::Cell;
use std::collections::HashMap;
use std::fmt::Display;
use std::io::{stderr, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

impl LogLevel {
	/// Numeric severity of this level. Higher values are more severe.
	pub fn value(&self) -> u8 {
		match self {
			LogLevel::Debug4 => 6,
			LogLevel::Debug3 => 7,
			LogLevel::Debug2 => 8,
			LogLevel::Debug1 => 9,
			LogLevel::Debug => 10,
			LogLevel::Trace => 15,
			LogLevel::Info => 20,
			LogLevel::Warning => 30,
			LogLevel::Error => 40,
			LogLevel::Fatal => 50,
			LogLevel::Off => 60,
		}
	}

	/// Canonical lowercase name of this level.
	pub fn name(&self) -> &'static str {
		match self {
			LogLevel::Debug4 => "debug4",
			LogLevel::Debug3 => "debug3",
			LogLevel::Debug2 => "debug2",
			LogLevel::Debug1 => "debug1",
			LogLevel::Debug => "debug",
			LogLevel::Trace => "trace",
			LogLevel::Info => "info",
			LogLevel::Warning => "warning",
			LogLevel::Error => "error",
			LogLevel::Fatal => "fatal",
			LogLevel::Off => "off",
		}
	}

	/// Look up a level by name. The alias `"critical"` is accepted for
	/// [`LogLevel::Fatal`]. Returns [`None`] for unknown names.
	pub fn from_name(name: &str) -> Option<LogLevel> {
		match name {
			"debug4" => Some(LogLevel::Debug4),
			"debug3" => Some(LogLevel::Debug3),
			"debug2" => Some(LogLevel::Debug2),
			"debug1" => Some(LogLevel::Debug1),
			"debug" => Some(LogLevel::Debug),
			"trace" => Some(LogLevel::Trace),
			"info" => Some(LogLevel::Info),
			"warning" => Some(LogLevel::Warning),
			"error" => Some(LogLevel::Error),
			"fatal" => Some(LogLevel::Fatal),
			"critical" => Some(LogLevel::Fatal),
			"off" => Some(LogLevel::Off),
			_ => None,
		}
	}

	/// Look up a level by numeric severity. Returns [`None`] for values that
	/// are not in the registry.
	pub fn from_value(value: u8) -> Option<LogLevel> {
		match value {
			6 => Some(LogLevel::Debug4),
			7 => Some(LogLevel::Debug3),
			8 => Some(LogLevel::Debug2),
			9 => Some(LogLevel::Debug1),
			10 => Some(LogLevel::Debug),
			15 => Some(LogLevel::Trace),
			20 => Some(LogLevel::Info),
			30 => Some(LogLevel::Warning),
			40 => Some(LogLevel::Error),
			50 => Some(LogLevel::Fatal),
			60 => Some(LogLevel::Off),
			_ => None,
		}
	}

	/// Name of the level with the given numeric severity, or `"unknown"`.
	pub fn name_of(value: u8) -> &'static str {
		match LogLevel::from_value(value) {
			Some(level) => level.name(),
			None => "unknown",
		}
	}

	// four character code used in the pretty header
	pub(crate) fn header_code(&self) -> &'static str {
		match self {
			LogLevel::Debug4 => "DBG4",
			LogLevel::Debug3 => "DBG3",
			LogLevel::Debug2 => "DBG2",
			LogLevel::Debug1 => "DBG1",
			LogLevel::Debug => "DBUG",
			LogLevel::Trace => "TRCE",
			LogLevel::Info => "INFO",
			LogLevel::Warning => "WARN",
			LogLevel::Error => "ERRR",
			LogLevel::Fatal => "FATL",
			LogLevel::Off => "UNKN",
		}
	}
}

impl Display for LogLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

// Indentation state is keyed by a process-unique id handed to each thread on
// first use. Keys are never reused, so a terminated thread's entry can never
// be observed by another thread; entries are removed when the depth returns
// to zero.
static NEXT_THREAD_KEY: AtomicU64 = AtomicU64::new(1);

thread_local! {
	static THREAD_KEY: Cell<u64> = Cell::new(0);
}

pub(crate) fn thread_key() -> u64 {
	THREAD_KEY.with(|key| {
		if key.get() == 0 {
			key.set(NEXT_THREAD_KEY.fetch_add(1, Ordering::Relaxed));
		}
		key.get()
	})
}

// Returns true for a log code token: '<' + 3 uppercase letters + 8 digits +
// one of 'FEWID' + '>'.
pub(crate) fn is_log_code(text: &str) -> bool {
	let bytes = text.as_bytes();
	if bytes.len() != 14 || bytes[0] != b'<' || bytes[13] != b'>' {
		return false;
	}
	bytes[1..4].iter().all(|b| b.is_ascii_uppercase())
		&& bytes[4..12].iter().all(|b| b.is_ascii_digit())
		&& matches!(bytes[12], b'F' | b'E' | b'W' | b'I' | b'D')
}

// Runtime printf style interpolation. Each '%' directive (an optional run of
// flag/width/precision characters followed by a conversion letter) consumes
// one argument's Display rendering; '%%' is a literal percent. A mismatch
// between directives and arguments is reported on stderr and the best effort
// result is returned, it never aborts the caller.
pub(crate) fn interpolate(fmt: &str, args: &[&dyn Display]) -> String {
	let mut out = String::with_capacity(fmt.len() + 16);
	let mut chars = fmt.chars().peekable();
	let mut next = 0;
	let mut mismatch = false;

	while let Some(c) = chars.next() {
		if c != '%' {
			out.push(c);
			continue;
		}
		match chars.peek() {
			Some('%') => {
				chars.next();
				out.push('%');
			}
			Some(_) => {
				let mut complete = false;
				let mut taken = String::new();
				while let Some(n) = chars.next() {
					if n.is_ascii_alphabetic() {
						complete = true;
						break;
					}
					taken.push(n);
					if !n.is_ascii_digit() && n != '.' && n != '-' && n != '+' && n != ' ' {
						break;
					}
				}
				if !complete {
					// a malformed directive keeps its text, only the '%' is
					// dropped
					out.push_str(&taken);
					mismatch = true;
					continue;
				}
				match args.get(next) {
					Some(arg) => {
						out.push_str(&arg.to_string());
						next += 1;
					}
					None => mismatch = true,
				}
			}
			None => mismatch = true,
		}
	}

	if mismatch || next < args.len() {
		let _ = writeln!(
			stderr(),
			"log format mismatch: {:?} does not match {} argument(s)",
			fmt,
			args.len()
		);
	}

	out
}

// Turn the positional arguments of a logging call into (log_code, message).
// The first argument is extracted as a log code only when further arguments
// follow; interpolation is applied only when interpolation arguments remain.
pub(crate) fn render_args(args: &[&dyn Display]) -> (Option<String>, String) {
	if args.is_empty() {
		return (None, String::new());
	}
	let first = args[0].to_string();
	if args.len() == 1 {
		return (None, first);
	}
	if is_log_code(&first) {
		let fmt = args[1].to_string();
		if args.len() == 2 {
			(Some(first), fmt)
		} else {
			(Some(first), interpolate(&fmt, &args[2..]))
		}
	} else {
		(None, interpolate(&first, &args[1..]))
	}
}

impl Registry {
	fn stderr_factory() -> crate::RouteFactory {
		Box::new(|| Box::new(stderr()) as Route)
	}

	pub(crate) fn new() -> Self {
		let route_factory = Self::stderr_factory();
		let default_route = Mutex::new(route_factory());
		Self {
			default_level: LogLevel::Info,
			disabled: false,
			thread_id: false,
			channels: HashMap::new(),
			managed: Default::default(),
			formatter: Box::new(PrettyFormatter::default()),
			route_factory,
			default_route,
			indent_map: HashMap::new(),
		}
	}

	pub(crate) fn enabled(&self, channel: &str, level: LogLevel) -> bool {
		if self.disabled || level == LogLevel::Off {
			return false;
		}
		let threshold = match self.channels.get(channel) {
			Some(state) => state.level.unwrap_or(self.default_level),
			None => self.default_level,
		};
		level.value() >= threshold.value()
	}

	pub(crate) fn indent(&mut self, key: u64) {
		*self.indent_map.entry(key).or_insert(0) += 1;
	}

	// floored at zero; the entry is dropped once the depth returns to zero so
	// the map does not accumulate terminated threads
	pub(crate) fn deindent(&mut self, key: u64) {
		if let Some(depth) = self.indent_map.get_mut(&key) {
			if *depth > 0 {
				*depth -= 1;
			}
			if *depth == 0 {
				self.indent_map.remove(&key);
			}
		}
	}

	pub(crate) fn indent_depth(&self, key: u64) -> usize {
		match self.indent_map.get(&key) {
			Some(depth) => *depth,
			None => 0,
		}
	}

	// The single emit primitive. Enablement must already have been checked by
	// the caller.
	pub(crate) fn emit(
		&self,
		channel: &str,
		level: LogLevel,
		message: String,
		log_code: Option<String>,
		exception: Option<String>,
		map_data: Option<Map<String, Value>>,
		duration: Option<f64>,
	) -> Result<(), Error> {
		let key = thread_key();
		let entry = LogEntry {
			channel: channel.to_string(),
			level,
			timestamp: Utc::now(),
			message,
			log_code,
			exception,
			map_data,
			num_indent: self.indent_depth(key),
			thread_id: if self.thread_id { Some(key) } else { None },
			duration,
		};
		let lines = self.formatter.format_entry(&entry)?;

		match self.channels.get(channel) {
			Some(state) if state.route.is_some() => match &state.route {
				Some(route) => {
					let mut route = route.lock()?;
					Self::write_lines(&mut *route, &lines)
				}
				None => Ok(()),
			},
			Some(state) if !state.propagate => Ok(()),
			_ => {
				let mut route = self.default_route.lock()?;
				Self::write_lines(&mut *route, &lines)
			}
		}
	}

	fn write_lines(route: &mut Route, lines: &[String]) -> Result<(), Error> {
		for line in lines {
			route.write_all(line.as_bytes())?;
			route.write_all(b"\n")?;
		}
		route.flush()?;
		Ok(())
	}

	// Apply a configuration. Invalid values degrade to warnings on the root
	// channel, never errors.
	pub(crate) fn configure(&mut self, config: LogConfig) -> Result<(), Error> {
		let mut warnings = vec![];
		let (filters, filters_present) = Self::parse_filters(&config.filters, &mut warnings);

		if config.default_level == DISABLE_LEVEL {
			// suppress everything, apply nothing else
			self.disabled = true;
			if filters_present {
				warnings.push("filters are ignored when logging is disabled".to_string());
			}
			self.emit_warnings(&warnings);
			return Ok(());
		}
		self.disabled = false;

		// install the requested formatter. A built-in name replaces the
		// previous formatter only if its dynamic type differs so per-instance
		// options survive a no-op reconfiguration; a caller supplied instance
		// always wins
		match config.formatter {
			FormatterChoice::Named(name) => match &name[..] {
				"pretty" => {
					if !self.formatter.as_any().is::<PrettyFormatter>() {
						self.formatter = Box::new(PrettyFormatter::default());
					}
				}
				"json" => {
					if !self.formatter.as_any().is::<JsonFormatter>() {
						self.formatter = Box::new(JsonFormatter::new());
					}
				}
				_ => warnings.push(format!(
					"unknown formatter '{}', keeping the current formatter",
					name
				)),
			},
			FormatterChoice::Instance(formatter) => self.formatter = formatter,
		}

		// the factory is taken from this call only; when none is supplied the
		// stream sink default applies again
		self.route_factory = match config.route_factory {
			Some(factory) => factory,
			None => Self::stderr_factory(),
		};
		// drop any previously attached default route and attach a fresh one
		self.default_route = Mutex::new((self.route_factory)());

		match LogLevel::from_name(&config.default_level) {
			Some(level) => self.default_level = level,
			None => warnings.push(format!(
				"invalid default level '{}', keeping '{}'",
				config.default_level, self.default_level
			)),
		}

		// channels that were previously under filter management but are absent
		// from the new filter set are reset to the new default so stale
		// overrides cannot survive a reconfiguration silently
		let stale: Vec<String> = self
			.managed
			.iter()
			.filter(|name| !filters.iter().any(|(chan, _)| chan == *name))
			.cloned()
			.collect();
		for name in stale {
			self.attach_filtered(&name, self.default_level);
		}

		for (name, level) in filters {
			self.attach_filtered(&name, level);
			self.managed.insert(name);
		}

		self.thread_id = config.thread_id;
		self.emit_warnings(&warnings);
		Ok(())
	}

	// Give the channel a dedicated route at the specified threshold and detach
	// it from the default route. Replaces any previous dedicated route, so
	// repeated configuration leaves exactly one route per managed channel.
	fn attach_filtered(&mut self, name: &str, level: LogLevel) {
		self.channels.insert(
			name.to_string(),
			ChannelState {
				level: Some(level),
				route: Some(Mutex::new((self.route_factory)())),
				propagate: false,
			},
		);
	}

	fn parse_filters(
		filters: &Filters,
		warnings: &mut Vec<String>,
	) -> (Vec<(String, LogLevel)>, bool) {
		let mut parsed = vec![];
		let mut present = false;
		match filters {
			Filters::None => {}
			Filters::Spec(spec) => {
				if !spec.trim().is_empty() {
					present = true;
					for entry in spec.split(',') {
						let fields: Vec<&str> = entry.split(':').collect();
						if fields.len() != 2 {
							warnings.push(format!("malformed filter entry '{}'", entry));
							continue;
						}
						match LogLevel::from_name(fields[1]) {
							Some(level) => parsed.push((fields[0].to_string(), level)),
							None => warnings.push(format!(
								"invalid level '{}' in filter entry '{}'",
								fields[1], entry
							)),
						}
					}
				}
			}
			Filters::Map(map) => {
				if !map.is_empty() {
					present = true;
					for (name, level_name) in map {
						match LogLevel::from_name(level_name) {
							Some(level) => parsed.push((name.clone(), level)),
							None => warnings.push(format!(
								"invalid level '{}' for channel '{}'",
								level_name, name
							)),
						}
					}
				}
			}
		}
		(parsed, present)
	}

	// Configuration diagnostics go to the default route on the root channel
	// regardless of thresholds. Best effort.
	fn emit_warnings(&self, warnings: &[String]) {
		for warning in warnings {
			let entry = LogEntry {
				channel: ROOT_CHANNEL.to_string(),
				level: LogLevel::Warning,
				timestamp: Utc::now(),
				message: warning.clone(),
				log_code: None,
				exception: None,
				map_data: None,
				num_indent: 0,
				thread_id: if self.thread_id {
					Some(thread_key())
				} else {
					None
				},
				duration: None,
			};
			if let Ok(lines) = self.formatter.format_entry(&entry) {
				if let Ok(mut route) = self.default_route.lock() {
					let _ = Self::write_lines(&mut *route, &lines);
				}
			}
		}
	}
}

impl Logging {
	/// Build a fresh registry instance, independent of the process-wide one.
	/// Defaults: `info` default level, pretty formatter, stderr routes, no
	/// thread ids.
	pub fn new() -> Self {
		Self {
			registry: std::sync::Arc::new(std::sync::RwLock::new(Registry::new())),
		}
	}

	/// Apply a configuration to this registry. See [`crate::configure`].
	pub fn configure(&self, config: LogConfig) -> Result<(), Error> {
		let mut registry = self.registry.write()?;
		registry.configure(config)
	}

	/// Obtain a [`crate::Channel`] handle bound to this registry.
	pub fn use_channel(&self, name: &str) -> Channel {
		Channel {
			name: name.to_string(),
			logging: self.clone(),
		}
	}

	pub(crate) fn indent(&self) -> Result<(), Error> {
		let mut registry = self.registry.write()?;
		let key = thread_key();
		registry.indent(key);
		Ok(())
	}

	pub(crate) fn deindent(&self) -> Result<(), Error> {
		let mut registry = self.registry.write()?;
		let key = thread_key();
		registry.deindent(key);
		Ok(())
	}

	pub(crate) fn indent_depth(&self) -> Result<usize, Error> {
		let registry = self.registry.read()?;
		Ok(registry.indent_depth(thread_key()))
	}
}

impl Default for Logging {
	fn default() -> Self {
		Self::new()
	}
}

impl Channel {
	/// Name of this channel.
	pub fn name(&self) -> &String {
		&self.name
	}

	/// Whether records at `level` would currently be emitted on this channel.
	pub fn is_enabled(&self, level: LogLevel) -> bool {
		match self.logging.registry.read() {
			Ok(registry) => registry.enabled(&self.name, level),
			Err(_) => false,
		}
	}

	/// [`Channel::is_enabled`] with a level name. Unknown names are never
	/// enabled.
	pub fn is_enabled_for(&self, level_name: &str) -> bool {
		match LogLevel::from_name(level_name) {
			Some(level) => self.is_enabled(level),
			None => false,
		}
	}

	/// The primitive emit. Enablement is checked before any argument is
	/// stringified, so expensive [`std::fmt::Display`] impls passed at a
	/// disabled level are never invoked. If the first argument renders as a
	/// log code token and further arguments follow, it is extracted as the
	/// record's log code and the next argument becomes the printf style
	/// format string for the rest. Usually called through the per-level
	/// macros ([`crate::info`] and friends).
	pub fn log(&self, level: LogLevel, args: &[&dyn Display]) -> Result<(), Error> {
		let registry = self.logging.registry.read()?;
		if !registry.enabled(&self.name, level) {
			return Ok(());
		}
		let (log_code, message) = render_args(args);
		registry.emit(&self.name, level, message, log_code, None, None, None)
	}

	/// Emit a structured record. The mapping's keys become first-class fields
	/// of the JSON encoding; the pretty encoding pulls out `message` and
	/// `log_code` and renders the remaining keys as a compact suffix. When
	/// interpolation arguments are supplied they are applied to the mapping's
	/// string `message` value; if the mapping has no `message` the rendered
	/// arguments become one. A non-string `message` is left untouched.
	pub fn log_map(
		&self,
		level: LogLevel,
		map: Map<String, Value>,
		args: &[&dyn Display],
	) -> Result<(), Error> {
		let registry = self.logging.registry.read()?;
		if !registry.enabled(&self.name, level) {
			return Ok(());
		}
		let mut map = map;
		if !args.is_empty() {
			match map.get("message").cloned() {
				Some(Value::String(fmt)) => {
					let rendered = interpolate(&fmt, args);
					map.insert("message".to_string(), Value::String(rendered));
				}
				Some(_) => {}
				None => {
					let (log_code, message) = render_args(args);
					map.insert("message".to_string(), Value::String(message));
					if let Some(code) = log_code {
						map.entry("log_code".to_string())
							.or_insert(Value::String(code));
					}
				}
			}
		}
		registry.emit(&self.name, level, String::new(), None, None, Some(map), None)
	}

	/// Emit a record with the text of `error` attached as exception info.
	pub fn log_with_err(
		&self,
		level: LogLevel,
		error: &Error,
		args: &[&dyn Display],
	) -> Result<(), Error> {
		let registry = self.logging.registry.read()?;
		if !registry.enabled(&self.name, level) {
			return Ok(());
		}
		let (log_code, message) = render_args(args);
		registry.emit(
			&self.name,
			level,
			message,
			log_code,
			Some(format!("{}", error)),
			None,
			None,
		)
	}

	// emit with a prebuilt message, used by the timed scope on drop
	pub(crate) fn emit_message(
		&self,
		level: LogLevel,
		message: String,
		duration: Option<f64>,
	) -> Result<(), Error> {
		let registry = self.logging.registry.read()?;
		if !registry.enabled(&self.name, level) {
			return Ok(());
		}
		registry.emit(&self.name, level, message, None, None, None, duration)
	}
}

/// Apply a configuration to the process-wide registry. `configure` is the
/// only mutator of registry state and is not designed for concurrent
/// invocation; callers serialize configuration while enablement checks and
/// emission remain safe for concurrent use.
///
/// Invalid inputs (unknown level names, malformed filter entries, unknown
/// formatter names) degrade to warnings on the `root` channel and never
/// return an error; the previous value is kept in each case. Passing the
/// default level `"disable"` suppresses all emission process-wide and
/// ignores the rest of the configuration until the next call.
pub fn configure(config: LogConfig) -> Result<(), Error> {
	ALOG_GLOBAL_LOG.configure(config)
}

/// Obtain a [`crate::Channel`] handle on the process-wide registry. Channels
/// are created lazily; looking one up never mutates registry state.
pub fn use_channel(name: &str) -> Channel {
	ALOG_GLOBAL_LOG.use_channel(name)
}
