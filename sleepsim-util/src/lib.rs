//! Utilities

// Modules
pub mod logger;

// Imports
use std::{cell::RefCell, fmt, io};

/// Extension trait for `R: io::BufRead` types to read a single trimmed line
#[extend::ext(name = ReadTrimmedLine)]
pub impl<R: io::BufRead> R {
	/// Reads the next line from this reader as raw bytes.
	///
	/// The trailing `\n` (and a `\r` before it) are removed.
	/// Returns `None` if the reader was already at the end of input.
	fn read_trimmed_line(&mut self) -> Result<Option<Vec<u8>>, io::Error> {
		let mut line = vec![];
		if self.read_until(b'\n', &mut line)? == 0 {
			return Ok(None);
		}

		if line.last() == Some(&b'\n') {
			line.pop();
			if line.last() == Some(&b'\r') {
				line.pop();
			}
		}

		Ok(Some(line))
	}
}

/// [`fmt::Display`] helper to display using a `FnMut(&mut fmt::Formatter)`
pub struct DisplayWrapper<F: FnMut(&mut fmt::Formatter) -> fmt::Result>(RefCell<F>);

impl<F: FnMut(&mut fmt::Formatter) -> fmt::Result> DisplayWrapper<F> {
	/// Creates a new display wrapper
	#[must_use]
	pub const fn new(func: F) -> Self {
		Self(RefCell::new(func))
	}
}


impl<F: FnMut(&mut fmt::Formatter) -> fmt::Result> fmt::Display for DisplayWrapper<F> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		// Note: `f` cannot be re-entrant, so this cannot fail
		self.0.borrow_mut()(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn read_trimmed_line_strips_newlines() {
		let mut reader = io::Cursor::new(b"AAII\r\nOOSS\nUU".to_vec());
		assert_eq!(reader.read_trimmed_line().unwrap(), Some(b"AAII".to_vec()));
		assert_eq!(reader.read_trimmed_line().unwrap(), Some(b"OOSS".to_vec()));
		assert_eq!(reader.read_trimmed_line().unwrap(), Some(b"UU".to_vec()));
		assert_eq!(reader.read_trimmed_line().unwrap(), None);
	}

	#[test]
	fn read_trimmed_line_keeps_lone_carriage_return() {
		let mut reader = io::Cursor::new(b"AI\r".to_vec());
		assert_eq!(reader.read_trimmed_line().unwrap(), Some(b"AI\r".to_vec()));
	}

	#[test]
	fn display_wrapper_formats() {
		let value = 5;
		let wrapper = DisplayWrapper::new(|f| write!(f, "value={value}"));
		assert_eq!(wrapper.to_string(), "value=5");
	}
}
