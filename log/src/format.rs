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
use crate::{Formatter, JsonFormatter, LogEntry, PrettyFormatter};
use alog_deps::chrono::{DateTime, Utc};
use alog_deps::serde_json::{to_string, Map, Number, Value};
use alog_err::Error;
use std::any::Any;
use std::time::Duration;

// iso-8601 utc with microseconds, shared by both encodings
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
	timestamp.format(TIMESTAMP_FORMAT).to_string()
}

// elapsed time as H:MM:SS.ffffff
pub(crate) fn format_duration(duration: &Duration) -> String {
	let total = duration.as_secs();
	let hours = total / 3_600;
	let minutes = (total % 3_600) / 60;
	let seconds = total % 60;
	format!(
		"{}:{:02}:{:02}.{:06}",
		hours,
		minutes,
		seconds,
		duration.subsec_micros()
	)
}

// Pull (message, log_code, residual fields) out of a structured payload. The
// residual keys are rendered as a compact json suffix by the pretty encoding.
fn split_map(
	map: &Map<String, Value>,
	fallback_code: &Option<String>,
) -> Result<(String, Option<String>, Option<String>), Error> {
	let mut map = map.clone();
	let message = match map.remove("message") {
		Some(Value::String(text)) => text,
		Some(other) => to_string(&other)?,
		None => String::new(),
	};
	let log_code = match map.remove("log_code") {
		Some(Value::String(code)) => Some(code),
		Some(other) => Some(to_string(&other)?),
		None => fallback_code.clone(),
	};
	let residual = if map.is_empty() {
		None
	} else {
		Some(to_string(&Value::Object(map))?)
	};
	Ok((message, log_code, residual))
}

impl PrettyFormatter {
	/// Build a pretty formatter with the specified channel display width.
	/// Channel names are left justified and truncated to this width in the
	/// line header.
	pub fn new(channel_len: usize) -> Self {
		Self { channel_len }
	}
}

impl Default for PrettyFormatter {
	fn default() -> Self {
		Self::new(DEFAULT_CHANNEL_LEN)
	}
}

impl Formatter for PrettyFormatter {
	fn format_entry(&self, entry: &LogEntry) -> Result<Vec<String>, Error> {
		let (message, log_code, residual) = match &entry.map_data {
			Some(map) => split_map(map, &entry.log_code)?,
			None => (entry.message.clone(), entry.log_code.clone(), None),
		};

		let thread_id = match entry.thread_id {
			Some(thread_id) => format!(":{}", thread_id),
			None => String::new(),
		};
		let mut header = format!(
			"{} [{:<w$.w$}:{}{}] ",
			format_timestamp(&entry.timestamp),
			entry.channel,
			entry.level.header_code(),
			thread_id,
			w = self.channel_len
		);
		if let Some(code) = log_code {
			header.push_str(&code);
			header.push(' ');
		}
		let indent = INDENT.repeat(entry.num_indent);

		let mut body = message;
		if let Some(residual) = residual {
			body.push(' ');
			body.push_str(&residual);
		}

		// one header prefixed line per source line; exception text follows the
		// body with the same prefix
		let mut lines = vec![];
		for line in body.split('\n') {
			lines.push(format!("{}{}{}", header, indent, line));
		}
		if let Some(exception) = &entry.exception {
			for line in exception.split('\n') {
				lines.push(format!("{}{}{}", header, indent, line));
			}
		}
		Ok(lines)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

impl JsonFormatter {
	/// Build a json formatter. All options of this encoding are fixed.
	pub fn new() -> Self {
		Self {}
	}
}

impl Default for JsonFormatter {
	fn default() -> Self {
		Self::new()
	}
}

impl Formatter for JsonFormatter {
	fn format_entry(&self, entry: &LogEntry) -> Result<Vec<String>, Error> {
		let mut object = Map::new();

		if entry.map_data.is_none() {
			object.insert("message".to_string(), Value::String(entry.message.clone()));
		}
		object.insert("channel".to_string(), Value::String(entry.channel.clone()));
		object.insert(
			"level".to_string(),
			Value::String(entry.level.name().to_string()),
		);
		object.insert(
			"timestamp".to_string(),
			Value::String(format_timestamp(&entry.timestamp)),
		);
		object.insert(
			"num_indent".to_string(),
			Value::Number(Number::from(entry.num_indent)),
		);
		if let Some(thread_id) = entry.thread_id {
			object.insert("thread_id".to_string(), Value::Number(Number::from(thread_id)));
		}
		if let Some(code) = &entry.log_code {
			object.insert("log_code".to_string(), Value::String(code.clone()));
		}
		if let Some(exception) = &entry.exception {
			object.insert("exception".to_string(), Value::String(exception.clone()));
		}
		if let Some(duration) = entry.duration {
			if let Some(number) = Number::from_f64(duration) {
				object.insert("duration".to_string(), Value::Number(number));
			}
		}

		// a structured payload is merged into the top level last, not nested,
		// so caller metadata appears as first class fields and a caller key
		// shadows the record's own on collision
		if let Some(map) = &entry.map_data {
			for (key, value) in map {
				object.insert(key.clone(), value.clone());
			}
		}

		// serde_json's map is btree backed, so key order is sorted and stable
		Ok(vec![to_string(&Value::Object(object))?])
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
