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

#[cfg(test)]
mod test {
	use crate as alog_err;
	use crate::{err, map_err, ErrKind, Error, ErrorKind};
	use std::fs::File;
	use std::num::TryFromIntError;
	use std::sync::{Arc, RwLock};
	use std::thread::spawn;

	fn get_error(kind: ErrKind, msg: &str) -> Error {
		err!(kind, msg)
	}

	#[test]
	fn test_err_macro_kinds() -> Result<(), Error> {
		assert_eq!(
			get_error(ErrKind::IO, "x").kind(),
			ErrorKind::IO("x".to_string())
		);
		assert_eq!(
			get_error(ErrKind::Log, "x").kind(),
			ErrorKind::Log("x".to_string())
		);
		assert_eq!(
			get_error(ErrKind::Utf8, "x").kind(),
			ErrorKind::Utf8("x".to_string())
		);
		assert_eq!(
			get_error(ErrKind::Configuration, "x").kind(),
			ErrorKind::Configuration("x".to_string())
		);
		assert_eq!(
			get_error(ErrKind::Poison, "x").kind(),
			ErrorKind::Poison("x".to_string())
		);
		assert_eq!(
			get_error(ErrKind::Format, "x").kind(),
			ErrorKind::Format("x".to_string())
		);
		assert_eq!(
			get_error(ErrKind::IllegalArgument, "x").kind(),
			ErrorKind::IllegalArgument("x".to_string())
		);
		assert_eq!(
			get_error(ErrKind::IllegalState, "x").kind(),
			ErrorKind::IllegalState("x".to_string())
		);
		assert_eq!(
			get_error(ErrKind::Misc, "x").kind(),
			ErrorKind::Misc("x".to_string())
		);
		assert_eq!(
			get_error(ErrKind::SystemTime, "x").kind(),
			ErrorKind::SystemTime("x".to_string())
		);
		assert_eq!(
			get_error(ErrKind::Test, "x").kind(),
			ErrorKind::Test("x".to_string())
		);
		Ok(())
	}

	#[test]
	fn test_err_macro_formatting() -> Result<(), Error> {
		let e = err!(ErrKind::Log, "value was {}", 101);
		assert_eq!(e.kind(), ErrorKind::Log("value was 101".to_string()));
		Ok(())
	}

	#[test]
	fn test_map_err() -> Result<(), Error> {
		let res = map_err!(File::open("/no/such/path/exists/here"), ErrKind::IO);
		assert!(res.is_err());
		match res {
			Err(e) => match e.kind() {
				ErrorKind::IO(_) => {}
				_ => panic!("expected io error"),
			},
			Ok(_) => panic!("expected error"),
		}

		let x: Result<u8, TryFromIntError> = 1_000u32.try_into();
		let res = map_err!(x, ErrKind::Misc, "conversion");
		assert!(res.is_err());
		Ok(())
	}

	#[test]
	fn test_from_io_error() -> Result<(), Error> {
		fn open_missing() -> Result<File, Error> {
			let f = File::open("/no/such/path/exists/here")?;
			Ok(f)
		}
		match open_missing() {
			Ok(_) => panic!("expected error"),
			Err(e) => match e.kind() {
				ErrorKind::IO(_) => {}
				_ => panic!("expected io error kind"),
			},
		}
		Ok(())
	}

	#[test]
	fn test_from_poison_error() -> Result<(), Error> {
		let lock = Arc::new(RwLock::new(0u32));
		let lock_clone = lock.clone();
		let _ = spawn(move || {
			let _guard = lock_clone.write().unwrap();
			panic!("poison the lock");
		})
		.join();

		fn read_it(lock: &Arc<RwLock<u32>>) -> Result<u32, Error> {
			let guard = lock.read()?;
			Ok(*guard)
		}

		match read_it(&lock) {
			Ok(_) => panic!("expected poison error"),
			Err(e) => match e.kind() {
				ErrorKind::Poison(_) => {}
				_ => panic!("expected poison error kind"),
			},
		}
		Ok(())
	}

	#[test]
	fn test_display_and_eq() -> Result<(), Error> {
		let e1 = err!(ErrKind::Configuration, "bad level");
		let e2 = err!(ErrKind::Configuration, "bad level");
		let e3 = err!(ErrKind::Log, "bad level");
		assert_eq!(e1, e2);
		assert!(e1 != e3);
		assert!(format!("{}", e1).contains("bad level"));
		Ok(())
	}
}
