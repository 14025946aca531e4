//! Simulated trace summary

// Imports
use {
	crate::{ActivityTrace, State},
	itertools::Itertools,
	std::fmt,
};

/// Summary of a simulated trace
#[derive(PartialEq, Clone, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Summary {
	/// Total minutes
	pub minutes: usize,

	pub active:  usize,
	pub unknown: usize,
	pub idle:    usize,

	/// Minutes the computer was already off
	pub already_off: usize,

	/// Minutes the computer was already asleep, without the policy
	pub already_asleep: usize,

	/// Minutes the policy forced the computer to sleep
	pub forced_sleep: usize,

	/// Times the computer woke up right after sleeping, forced or not
	pub forced_wake_ups: usize,

	/// Forced sleep run lengths
	pub forced_sleep_runs: Option<RunLengths>,
}

impl Summary {
	/// Summarizes `trace`
	pub fn from_trace(trace: &ActivityTrace) -> Self {
		let mut summary = Self {
			minutes: trace.len(),
			..Self::default()
		};

		for state in trace.iter() {
			let count = match state {
				State::Active => &mut summary.active,
				State::Unknown => &mut summary.unknown,
				State::Idle => &mut summary.idle,
				State::Off => &mut summary.already_off,
				State::Sleep => &mut summary.already_asleep,
				State::ForcedSleep => &mut summary.forced_sleep,
			};
			*count += 1;
		}

		summary.forced_wake_ups = trace
			.iter()
			.tuple_windows()
			.filter(|(prev, cur)| prev.is_asleep() && cur.is_awake())
			.count();

		let forced_sleep_runs = trace
			.iter()
			.dedup_with_count()
			.filter(|&(_, state)| state == State::ForcedSleep)
			.map(|(len, _)| len as f64)
			.collect::<average::Variance>();
		summary.forced_sleep_runs = match forced_sleep_runs.len() {
			0 => None,
			count => Some(RunLengths {
				count,
				mean: forced_sleep_runs.mean(),
				error: forced_sleep_runs.error(),
			}),
		};

		summary
	}
}

impl fmt::Display for Summary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let forced_sleep_percentage = match self.minutes {
			0 => 0.0,
			minutes => 100.0 * (self.forced_sleep as f64 / minutes as f64),
		};

		write!(
			f,
			"{} minutes: {} forced sleep ({forced_sleep_percentage:.2}%), {} already asleep, {} already off, {} \
			 forced wake-ups",
			self.minutes, self.forced_sleep, self.already_asleep, self.already_off, self.forced_wake_ups
		)?;

		if let Some(runs) = &self.forced_sleep_runs {
			write!(
				f,
				", {} forced sleep runs of {:.2} ± {:.2} minutes",
				runs.count, runs.mean, runs.error
			)?;
		}

		Ok(())
	}
}

/// Run length statistics
#[derive(PartialEq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RunLengths {
	pub count: u64,
	pub mean:  f64,
	pub error: f64,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn summarize(symbols: &str) -> Summary {
		let trace = ActivityTrace::from_output_symbols(symbols.as_bytes()).expect("Invalid test trace");
		Summary::from_trace(&trace)
	}

	#[test]
	fn counts_states() {
		let summary = self::summarize("AAUIIIOSSZZZZ");
		assert_eq!(summary.minutes, 13);
		assert_eq!(summary.active, 2);
		assert_eq!(summary.unknown, 1);
		assert_eq!(summary.idle, 3);
		assert_eq!(summary.already_off, 1);
		assert_eq!(summary.already_asleep, 2);
		assert_eq!(summary.forced_sleep, 4);
	}

	#[test]
	fn counts_wake_ups_right_after_sleep() {
		// `ZA`, `SI` and `ZU` count, `ZO` and `OA` don't
		let summary = self::summarize("IZZAISSIZOAZU");
		assert_eq!(summary.forced_wake_ups, 3);
	}

	#[test]
	fn no_wake_ups_without_sleep() {
		assert_eq!(self::summarize("AIUOIA").forced_wake_ups, 0);
		assert_eq!(self::summarize("").forced_wake_ups, 0);
	}

	#[test]
	fn forced_sleep_runs() {
		let summary = self::summarize("IZZIZZZZA");
		let runs = summary.forced_sleep_runs.expect("Missing runs");
		assert_eq!(runs.count, 2);
		assert!((runs.mean - 3.0).abs() < 1e-9);

		assert_eq!(self::summarize("AIS").forced_sleep_runs, None);
	}

	#[test]
	fn display() {
		let summary = self::summarize("IZZA");
		let summary = summary.to_string();
		assert!(
			summary.starts_with(
				"4 minutes: 2 forced sleep (50.00%), 0 already asleep, 0 already off, 1 forced wake-ups, 1 forced \
				 sleep runs of 2.00 ± "
			),
			"Unexpected summary: {summary}"
		);
	}
}
