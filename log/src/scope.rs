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
use crate::format::format_duration;
use crate::log::interpolate;
use crate::{Channel, LogLevel};
use std::fmt::Display;
use std::time::Instant;

/// A scope guard. Construction logs `BEGIN: <label>` at the bound level and
/// increments the calling thread's indent depth; dropping the guard
/// decrements the depth and logs `END: <label>`. Enablement is captured at
/// construction, so a scope opened at a disabled level logs nothing and never
/// touches indentation, even if the configuration changes while it is open.
/// Dropping is exception safe, the end record is emitted on unwind as well.
///
/// Usually constructed through the [`crate::scoped`], [`crate::fn_scope`] or
/// [`crate::detail_fn_scope`] macros, or bracketing a closure via
/// [`Channel::logged`].
pub struct ScopedLog {
	channel: Channel,
	level: LogLevel,
	label: String,
	enabled: bool,
}

impl ScopedLog {
	/// Open a scope on `channel` at `level`. The label closure is only
	/// invoked when the level is enabled.
	pub fn new<F>(channel: &Channel, level: LogLevel, label: F) -> Self
	where
		F: FnOnce() -> String,
	{
		let enabled = channel.is_enabled(level);
		let label = if enabled { label() } else { String::new() };
		let scope = Self {
			channel: channel.clone(),
			level,
			label,
			enabled,
		};
		if scope.enabled {
			let begin = format!("{}{}", SCOPE_START, scope.label);
			let _ = scope.channel.log(scope.level, &[&begin]);
			let _ = scope.channel.logging.indent();
		}
		scope
	}
}

impl Drop for ScopedLog {
	fn drop(&mut self) {
		if self.enabled {
			let _ = self.channel.logging.deindent();
			let end = format!("{}{}", SCOPE_END, self.label);
			let _ = self.channel.log(self.level, &[&end]);
		}
	}
}

/// A timing guard. Construction records a monotonic start time; dropping the
/// guard logs the caller supplied format string once with the elapsed time
/// appended as the final interpolation argument, rendered as
/// `H:MM:SS.ffffff`. The record additionally carries the elapsed seconds,
/// which the json encoding exposes as a `duration` field. Timers have no
/// indentation side effect. Enablement is captured at construction.
///
/// Usually constructed through the [`crate::timed`] macro or bracketing a
/// closure via [`Channel::timed`].
pub struct ScopedTimer {
	channel: Channel,
	level: LogLevel,
	fmt: String,
	args: Vec<String>,
	start: Instant,
	enabled: bool,
}

impl ScopedTimer {
	/// Start a timer on `channel` at `level`. The arguments are rendered up
	/// front (only when the level is enabled) since the emit happens on drop.
	pub fn new(channel: &Channel, level: LogLevel, fmt: &str, args: &[&dyn Display]) -> Self {
		let enabled = channel.is_enabled(level);
		let args = if enabled {
			args.iter().map(|arg| arg.to_string()).collect()
		} else {
			vec![]
		};
		Self {
			channel: channel.clone(),
			level,
			fmt: fmt.to_string(),
			args,
			start: Instant::now(),
			enabled,
		}
	}
}

impl Drop for ScopedTimer {
	fn drop(&mut self) {
		if self.enabled {
			let elapsed = self.start.elapsed();
			let rendered = format_duration(&elapsed);
			let mut args: Vec<&dyn Display> = vec![];
			for arg in &self.args {
				args.push(arg);
			}
			args.push(&rendered);
			let message = interpolate(&self.fmt, &args);
			let _ = self
				.channel
				.emit_message(self.level, message, Some(elapsed.as_secs_f64()));
		}
	}
}

impl Channel {
	/// Open a [`crate::ScopedLog`] on this channel. Prefer the
	/// [`crate::scoped`] macro, which formats the label lazily.
	pub fn scoped(&self, level: LogLevel, label: &str) -> ScopedLog {
		let label = label.to_string();
		ScopedLog::new(self, level, move || label)
	}

	/// Run `f` bracketed by `BEGIN:` / `END:` records at `level`. The end
	/// record is emitted even if `f` panics.
	pub fn logged<T, F>(&self, level: LogLevel, label: &str, f: F) -> T
	where
		F: FnOnce() -> T,
	{
		let _scope = self.scoped(level, label);
		f()
	}

	/// Run `f` and log `fmt` once afterwards with the elapsed time appended
	/// as the final interpolation argument.
	pub fn timed<T, F>(&self, level: LogLevel, fmt: &str, f: F) -> T
	where
		F: FnOnce() -> T,
	{
		let _timer = ScopedTimer::new(self, level, fmt, &[]);
		f()
	}
}

/// Strip the module path from a fully qualified function name, leaving the
/// bare name. Used by the function boundary scope macros.
#[doc(hidden)]
pub fn short_fn_name(name: &str) -> &str {
	match name.rsplit("::").next() {
		Some(short) => short,
		None => name,
	}
}
