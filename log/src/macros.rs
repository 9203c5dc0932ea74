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

/// Log at an arbitrary [`crate::LogLevel`] on the specified channel. The
/// per-level macros ([`crate::info`] and friends) expand to this macro and
/// are usually preferred.
/// # Input Parameters
/// * `channel` - [`crate::Channel`] - the channel to log on.
/// * `level` - [`crate::LogLevel`] - the severity to log at.
/// * `args` - one or more values implementing [`std::fmt::Display`]. If the
/// first value renders as a log code token (`<ABC12345678I>` style) and more
/// values follow, it becomes the record's log code and the next value is the
/// printf style format string (`%s`, `%d`, .., `%%`) for the rest. Otherwise
/// the first value is the format string, or the literal message when it is
/// the only value.
/// # Return
/// Result < [`()`], [`alog_err::Error`] >
/// # Errors
/// [`alog_err::ErrKind::Poison`] - if the registry lock is poisoned.
/// [`alog_err::ErrKind::IO`] - if writing to the output route fails.
/// # Also see
/// * [`crate::Channel::log`]
/// * [`crate::configure`]
/// # Examples
///```
/// use alog::*;
/// use alog_err::Error;
///
/// fn main() -> Result<(), Error> {
///     let logging = Logging::new();
///     let chan = logging.use_channel("MAIN");
///
///     log!(chan, LogLevel::Info, "listening on port %d", 8080)?;
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! log {
	($channel:expr, $level:expr, $($args:expr),+) => {{
		$channel.log($level, &[$(&$args as &dyn std::fmt::Display),+])
	}};
}

/// Log at [`crate::LogLevel::Fatal`] on the specified channel.
/// See [`crate::log`] for the argument conventions.
#[macro_export]
macro_rules! fatal {
	($channel:expr, $($args:expr),+) => {{
		$crate::log!($channel, $crate::LogLevel::Fatal, $($args),+)
	}};
}

/// Log at [`crate::LogLevel::Error`] on the specified channel.
/// See [`crate::log`] for the argument conventions.
#[macro_export]
macro_rules! error {
	($channel:expr, $($args:expr),+) => {{
		$crate::log!($channel, $crate::LogLevel::Error, $($args),+)
	}};
}

/// Log at [`crate::LogLevel::Warning`] on the specified channel.
/// See [`crate::log`] for the argument conventions.
#[macro_export]
macro_rules! warning {
	($channel:expr, $($args:expr),+) => {{
		$crate::log!($channel, $crate::LogLevel::Warning, $($args),+)
	}};
}

/// Log at [`crate::LogLevel::Info`] on the specified channel.
/// See [`crate::log`] for the argument conventions.
/// # Examples
///```
/// use alog::*;
/// use alog_err::Error;
///
/// fn main() -> Result<(), Error> {
///     let logging = Logging::new();
///     let chan = logging.use_channel("MAIN");
///
///     info!(chan, "service started on port %d", 8080)?;
///     info!(chan, "<SRV12345678I>", "request took %sms", 12)?;
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! info {
	($channel:expr, $($args:expr),+) => {{
		$crate::log!($channel, $crate::LogLevel::Info, $($args),+)
	}};
}

/// Log at [`crate::LogLevel::Trace`] on the specified channel.
/// See [`crate::log`] for the argument conventions.
#[macro_export]
macro_rules! trace {
	($channel:expr, $($args:expr),+) => {{
		$crate::log!($channel, $crate::LogLevel::Trace, $($args),+)
	}};
}

/// Log at [`crate::LogLevel::Debug`] on the specified channel.
/// See [`crate::log`] for the argument conventions.
#[macro_export]
macro_rules! debug {
	($channel:expr, $($args:expr),+) => {{
		$crate::log!($channel, $crate::LogLevel::Debug, $($args),+)
	}};
}

/// Log at [`crate::LogLevel::Debug1`] on the specified channel.
/// See [`crate::log`] for the argument conventions.
#[macro_export]
macro_rules! debug1 {
	($channel:expr, $($args:expr),+) => {{
		$crate::log!($channel, $crate::LogLevel::Debug1, $($args),+)
	}};
}

/// Log at [`crate::LogLevel::Debug2`] on the specified channel.
/// See [`crate::log`] for the argument conventions.
#[macro_export]
macro_rules! debug2 {
	($channel:expr, $($args:expr),+) => {{
		$crate::log!($channel, $crate::LogLevel::Debug2, $($args),+)
	}};
}

/// Log at [`crate::LogLevel::Debug3`] on the specified channel.
/// See [`crate::log`] for the argument conventions.
#[macro_export]
macro_rules! debug3 {
	($channel:expr, $($args:expr),+) => {{
		$crate::log!($channel, $crate::LogLevel::Debug3, $($args),+)
	}};
}

/// Log at [`crate::LogLevel::Debug4`] on the specified channel.
/// See [`crate::log`] for the argument conventions.
#[macro_export]
macro_rules! debug4 {
	($channel:expr, $($args:expr),+) => {{
		$crate::log!($channel, $crate::LogLevel::Debug4, $($args),+)
	}};
}

/// Open a [`crate::ScopedLog`] on the specified channel. A `BEGIN: <label>`
/// record is logged immediately and the thread's indent depth increases; when
/// the returned guard goes out of scope (including on panic) the depth is
/// restored and `END: <label>` is logged. The label is built with
/// [`std::format`] syntax and is only evaluated when the level is enabled.
/// Scopes opened at a disabled level log nothing and never touch
/// indentation.
/// # Input Parameters
/// * `channel` - [`crate::Channel`] - the channel to log on.
/// * `level` - [`crate::LogLevel`] - the severity to log at.
/// * `args` - [`std::format`] style label arguments.
/// # Return
/// [`crate::ScopedLog`] - the guard. Bind it to a named variable; `let _ =`
/// would drop it immediately.
/// # Also see
/// * [`crate::fn_scope`]
/// * [`crate::timed`]
/// # Examples
///```
/// use alog::*;
/// use alog_err::Error;
///
/// fn main() -> Result<(), Error> {
///     let logging = Logging::new();
///     let chan = logging.use_channel("DEMO");
///
///     let _scope = scoped!(chan, LogLevel::Debug, "loading {}", "config");
///     info!(chan, "this line is indented by the scope")?;
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! scoped {
	($channel:expr, $level:expr, $($args:tt)*) => {{
		$crate::ScopedLog::new(&$channel, $level, || format!($($args)*))
	}};
}

/// Open a [`crate::ScopedLog`] labeled with the name of the enclosing
/// function, at [`crate::LogLevel::Trace`]. The label renders as
/// `name(detail)` where `detail` is the optional [`std::format`] style
/// argument list.
/// # Examples
///```
/// use alog::*;
///
/// fn load(logging: &Logging, path: &str) {
///     let chan = logging.use_channel("LOAD");
///     let _scope = fn_scope!(chan, "{}", path);
///     // traces "BEGIN: load(<path>)" .. "END: load(<path>)"
/// }
///```
#[macro_export]
macro_rules! fn_scope {
	($channel:expr) => {{
		$crate::fn_scope!($channel, "")
	}};
	($channel:expr, $($args:tt)*) => {{
		$crate::detail_fn_scope!($channel, $crate::LogLevel::Trace, $($args)*)
	}};
}

/// [`crate::fn_scope`] at a caller specified level.
#[macro_export]
macro_rules! detail_fn_scope {
	($channel:expr, $level:expr) => {{
		$crate::detail_fn_scope!($channel, $level, "")
	}};
	($channel:expr, $level:expr, $($args:tt)*) => {{
		let name = $crate::short_fn_name($crate::function_name!());
		$crate::ScopedLog::new(&$channel, $level, || {
			format!("{}({})", name, format!($($args)*))
		})
	}};
}

/// Fully qualified name of the enclosing function, derived at compile time.
#[doc(hidden)]
#[macro_export]
macro_rules! function_name {
	() => {{
		fn f() {}
		fn type_name_of<T>(_: T) -> &'static str {
			std::any::type_name::<T>()
		}
		let name = type_name_of(f);
		&name[..name.len() - 3]
	}};
}

/// Start a [`crate::ScopedTimer`] on the specified channel. Nothing is logged
/// until the returned guard goes out of scope; then `fmt` is logged once at
/// `level` with the elapsed time appended as the final interpolation
/// argument, rendered as `H:MM:SS.ffffff`. Timers do not affect indentation.
/// # Input Parameters
/// * `channel` - [`crate::Channel`] - the channel to log on.
/// * `level` - [`crate::LogLevel`] - the severity to log at.
/// * `fmt` - printf style format string; include a trailing `%s` for the
/// elapsed time.
/// * `args` - optional interpolation arguments preceding the elapsed time.
/// # Return
/// [`crate::ScopedTimer`] - the guard. Bind it to a named variable.
/// # Examples
///```
/// use alog::*;
/// use alog_err::Error;
///
/// fn main() -> Result<(), Error> {
///     let logging = Logging::new();
///     let chan = logging.use_channel("DEMO");
///
///     {
///         let _timer = timed!(chan, LogLevel::Info, "finished %s in %s", "startup");
///         // .. timed work ..
///     }
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! timed {
	($channel:expr, $level:expr, $fmt:expr) => {{
		$crate::ScopedTimer::new(&$channel, $level, $fmt, &[])
	}};
	($channel:expr, $level:expr, $fmt:expr, $($args:expr),+) => {{
		$crate::ScopedTimer::new(
			&$channel,
			$level,
			$fmt,
			&[$(&$args as &dyn std::fmt::Display),+],
		)
	}};
}
