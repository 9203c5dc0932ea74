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

// prefixes used by scope logging
pub(crate) const SCOPE_START: &str = "BEGIN: ";
pub(crate) const SCOPE_END: &str = "END: ";

// two spaces per indent level
pub(crate) const INDENT: &str = "  ";

// sentinel accepted as a default level to suppress all output
pub(crate) const DISABLE_LEVEL: &str = "disable";

// channel used for internal configuration diagnostics
pub(crate) const ROOT_CHANNEL: &str = "root";

// default display width of the channel name in the pretty encoding
pub(crate) const DEFAULT_CHANNEL_LEN: usize = 5;

// iso-8601 utc with microseconds
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
