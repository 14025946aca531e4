//! Errors

// Imports
use std::io;

/// An input symbol that isn't part of the trace alphabet
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(thiserror::Error)]
#[error("Illegal entry {:?} (byte {symbol}) in trace at minute {position}", char::from(*.symbol))]
pub struct MalformedTraceError {
	/// Offending byte
	pub symbol: u8,

	/// Minute index of the offending byte
	pub position: usize,
}

/// Error for [`ActivityTrace::from_reader`](crate::ActivityTrace::from_reader)
#[derive(Debug, thiserror::Error)]
pub enum LoadTraceError {
	#[error("Unable to read trace")]
	Io(#[from] io::Error),

	#[error(transparent)]
	Malformed(#[from] MalformedTraceError),
}

/// The trace had no minutes to simulate
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(thiserror::Error)]
#[error("Trace is empty, nothing was simulated")]
pub struct EmptyTraceError;

/// Invalid power policy configuration.
///
/// Always raised before any minute of a trace is touched.
#[derive(PartialEq, Eq, Clone, Debug)]
#[derive(thiserror::Error)]
pub enum PolicyConfigError {
	#[error("Wake time {wake_time} is outside of a day (0..1440)")]
	WakeTimeOutOfRange { wake_time: u16 },

	#[error("Boundary {boundary} is outside of a day (0..1440)")]
	BoundaryOutOfRange { boundary: u16 },

	#[error("First boundary {boundary1} is after the second boundary {boundary2}")]
	BoundariesInverted { boundary1: u16, boundary2: u16 },

	#[error("Day {day} is not a day of the week (0..7)")]
	DayOutOfRange { day: u8 },

	#[error("Invalid {which} policy")]
	Policy {
		which:  &'static str,
		#[source]
		source: Box<PolicyConfigError>,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn malformed_trace_message() {
		let err = MalformedTraceError {
			symbol:   b'X',
			position: 12,
		};
		assert_eq!(err.to_string(), "Illegal entry 'X' (byte 88) in trace at minute 12");
	}

	#[test]
	fn policy_config_messages() {
		assert_eq!(
			PolicyConfigError::WakeTimeOutOfRange { wake_time: 1440 }.to_string(),
			"Wake time 1440 is outside of a day (0..1440)"
		);
		assert_eq!(
			PolicyConfigError::DayOutOfRange { day: 7 }.to_string(),
			"Day 7 is not a day of the week (0..7)"
		);
	}
}
