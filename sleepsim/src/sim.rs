//! Simulator

// Imports
use {
	crate::{
		error::{EmptyTraceError, PolicyConfigError},
		ActivityTrace,
		PolicySchedule,
		State,
	},
	std::fmt,
};

/// Minutes in a day
pub const MINUTES_PER_DAY: u16 = 1440;

/// Days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Simulator.
///
/// Applies a [`PolicySchedule`] to an activity trace, forcing idle
/// minutes to sleep once a timeout elapses and waking the computer
/// at each policy's wake time.
#[derive(Clone, Debug)]
pub struct Simulator {
	/// Policies
	schedule: PolicySchedule,

	/// How far a scheduled wake reaches
	wake_reach: WakeReach,

	/// Debug output period, in days.
	///
	/// A value of 0 disables debug output.
	debug_output_period_days: usize,
}

impl Simulator {
	/// Creates a new simulator.
	///
	/// # Errors
	/// Returns an error if any policy in `schedule` is invalid.
	pub fn new(schedule: PolicySchedule, wake_reach: WakeReach) -> Result<Self, PolicyConfigError> {
		schedule.validate()?;

		Ok(Self {
			schedule,
			wake_reach,
			debug_output_period_days: 0,
		})
	}

	/// Sets the debug output period, in days
	#[must_use]
	pub fn with_debug_output_period(self, days: usize) -> Self {
		Self {
			debug_output_period_days: days,
			..self
		}
	}

	/// Runs the simulator over `trace`, rewriting it in place.
	///
	/// # Errors
	/// Returns an error if `trace` is empty. Nothing is simulated in that case.
	pub fn run(&self, trace: &mut ActivityTrace) -> Result<RunOutput, EmptyTraceError> {
		if trace.is_empty() {
			tracing::warn!("Trace is empty, skipping simulation");
			return Err(EmptyTraceError);
		}

		let total_minutes = trace.len();
		let mut state = SimulationState::default();
		let mut output = RunOutput {
			minutes: total_minutes,
			..RunOutput::default()
		};

		for minute_idx in 0..total_minutes {
			let clock = MinuteClock::new(minute_idx);
			if clock.minute_of_day == 0 {
				tracing::trace!(day = clock.day, day_of_week = clock.day_of_week, "Starting day");
				self.debug_output(&clock, total_minutes, &output);
			}

			let policy = self.schedule.policy_for(clock.day_of_week);
			let threshold = policy.threshold_at(clock.minute_of_day);

			// Update the idle episode from the trace's own state
			match trace.states()[minute_idx] {
				State::Idle if !state.is_idle => {
					state.is_idle = true;
					output.idle_episodes += 1;
				},
				cur_state if cur_state.interrupts_idle() => {
					state.is_idle = false;
					state.idle_run_len = 0;
				},
				_ => (),
			}

			// Then apply the timeout
			if state.is_idle {
				// Note: Crossing into a new window keeps the computer asleep if it was forced to
				//       sleep, but otherwise starts counting the idle time from scratch.
				if policy.is_segment_start(clock.minute_of_day) {
					state.idle_run_len = match trace.previous(minute_idx) {
						Some(State::ForcedSleep) => threshold,
						_ => 0,
					};
				}

				match state.idle_run_len >= threshold {
					true => {
						trace.set(minute_idx, State::ForcedSleep);
						output.forced_sleep_writes += 1;
					},
					false => state.idle_run_len += 1,
				}
			}

			// Finally wake the computer, if scheduled
			if policy.wakes_at(clock.minute_of_day) {
				state = SimulationState::default();

				let limit = match self.wake_reach {
					WakeReach::Contiguous => None,
					WakeReach::Threshold => Some(self.wake_limit(minute_idx, threshold, total_minutes)),
				};
				let woken = trace.wake_from(minute_idx, limit);
				tracing::trace!(minute_idx, woken, "Scheduled wake");
				if woken > 0 {
					output.wake_events += 1;
					output.woken_minutes += woken;
				}
			}
		}

		output.forced_sleep_minutes = trace.iter().filter(|&state| state == State::ForcedSleep).count();
		tracing::debug!(?output, "Finished simulation");

		Ok(output)
	}

	/// Returns how many minutes a wake at `minute_idx` may relabel.
	///
	/// This is at most `threshold`, but stops before the first minute an idle
	/// run starting right after the wake would time out at, so woken minutes
	/// are never forced back to sleep.
	fn wake_limit(&self, minute_idx: usize, threshold: usize, total_minutes: usize) -> usize {
		let max_limit = threshold.min(total_minutes - minute_idx);

		// Note: Minute `minute_idx + offset` has seen at most `offset - 1` idle minutes since the wake.
		(1..max_limit)
			.find(|&offset| {
				let clock = MinuteClock::new(minute_idx + offset);
				let policy = self.schedule.policy_for(clock.day_of_week);
				policy.threshold_at(clock.minute_of_day) < offset
			})
			.unwrap_or(max_limit)
	}

	/// Outputs debug output at the start of `clock`'s day, if it's been long enough
	fn debug_output(&self, clock: &MinuteClock, total_minutes: usize, output: &RunOutput) {
		if self.debug_output_period_days == 0 || clock.day == 0 || clock.day % self.debug_output_period_days != 0 {
			return;
		}

		let minutes_processed_percentage = 100.0 * (clock.minute_idx as f64 / total_minutes as f64);
		tracing::info!(
			"[{minutes_processed_percentage:.2}%] Day {}: {}",
			clock.day,
			sleepsim_util::DisplayWrapper::new(|f| output.fmt_debug(f))
		);
	}
}

/// How far a scheduled wake relabels sleeping minutes
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WakeReach {
	/// Until the first minute that isn't asleep.
	///
	/// Hardware sleep woken this way may later be forced back to sleep
	/// by the timeout.
	Contiguous,

	/// Like [`Self::Contiguous`], but at most the timeout in force at
	/// the wake minute, and never so far that the timeout elapses again
	#[default]
	Threshold,
}

/// Mutable state of a single run
#[derive(Clone, Copy, Debug, Default)]
struct SimulationState {
	/// Minutes since the start of the current idle run
	idle_run_len: usize,

	/// Whether we're inside an idle episode
	is_idle: bool,
}

/// Position of a minute within the week
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct MinuteClock {
	/// Minute index in the trace
	pub minute_idx: usize,

	/// Day index in the trace
	pub day: usize,

	/// Day of the week (`0..7`)
	pub day_of_week: u8,

	/// Minute of the day (`0..1440`)
	pub minute_of_day: u16,
}

impl MinuteClock {
	/// Creates the clock for minute `minute_idx` of a trace
	pub fn new(minute_idx: usize) -> Self {
		let minutes_per_day = usize::from(MINUTES_PER_DAY);
		let day = minute_idx / minutes_per_day;

		// Note: Both casts are lossless, since the values are below 7 and 1440.
		Self {
			minute_idx,
			day,
			day_of_week: (day % usize::from(DAYS_PER_WEEK)) as u8,
			minute_of_day: (minute_idx % minutes_per_day) as u16,
		}
	}
}

/// Output for [`Simulator::run`]
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RunOutput {
	/// Minutes simulated
	pub minutes: usize,

	/// Minutes left in forced sleep at the end of the run
	pub forced_sleep_minutes: usize,

	/// Times forced sleep was written.
	///
	/// Larger than `forced_sleep_minutes` when wakes undid some.
	pub forced_sleep_writes: usize,

	/// Scheduled wakes that relabeled at least one minute
	pub wake_events: usize,

	/// Minutes relabeled as idle by scheduled wakes
	pub woken_minutes: usize,

	/// Idle episodes entered
	pub idle_episodes: usize,
}

impl RunOutput {
	/// Formats debug output to `f`
	pub fn fmt_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} idle episodes, {} forced sleep minutes written, {} wakes ({} minutes woken)",
			self.idle_episodes, self.forced_sleep_writes, self.wake_events, self.woken_minutes
		)
	}
}
