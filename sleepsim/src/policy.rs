//! Power policies

// Imports
use {
	crate::{error::PolicyConfigError, sim::MINUTES_PER_DAY},
	std::fmt,
};

/// Dual-timeout power policy.
///
/// Splits each day into three windows: up to and including `boundary1`,
/// after `boundary1` up to and including `boundary2`, and after `boundary2`.
/// The outer windows use `timeout1`, the middle window uses `timeout2`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PowerPolicy {
	/// Idle minutes tolerated in the outer windows
	pub timeout1: usize,

	/// Idle minutes tolerated in the middle window
	pub timeout2: usize,

	/// Last minute of day of the first window
	pub boundary1: u16,

	/// Last minute of day of the middle window
	pub boundary2: u16,

	/// Scheduled wake
	#[serde(default)]
	pub wake_time: WakeTime,
}

impl PowerPolicy {
	/// Validates this policy
	pub fn validate(&self) -> Result<(), PolicyConfigError> {
		for boundary in [self.boundary1, self.boundary2] {
			if boundary >= MINUTES_PER_DAY {
				return Err(PolicyConfigError::BoundaryOutOfRange { boundary });
			}
		}

		if self.boundary1 > self.boundary2 {
			return Err(PolicyConfigError::BoundariesInverted {
				boundary1: self.boundary1,
				boundary2: self.boundary2,
			});
		}

		if let WakeTime::At(wake_time) = self.wake_time {
			if wake_time >= MINUTES_PER_DAY {
				return Err(PolicyConfigError::WakeTimeOutOfRange { wake_time });
			}
		}

		Ok(())
	}

	/// Returns the idle threshold in force at `minute_of_day`
	pub fn threshold_at(&self, minute_of_day: u16) -> usize {
		match minute_of_day <= self.boundary1 || minute_of_day > self.boundary2 {
			true => self.timeout1,
			false => self.timeout2,
		}
	}

	/// Returns if `minute_of_day` is the first minute after either boundary
	// Note: Compared independently of the windows in `threshold_at`.
	pub fn is_segment_start(&self, minute_of_day: u16) -> bool {
		let minute_of_day = Some(minute_of_day);
		minute_of_day == self.boundary1.checked_add(1) || minute_of_day == self.boundary2.checked_add(1)
	}

	/// Returns if this policy wakes the computer at `minute_of_day`
	pub fn wakes_at(&self, minute_of_day: u16) -> bool {
		self.wake_time == WakeTime::At(minute_of_day)
	}
}

/// Scheduled wake time
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(from = "Option<u16>", into = "Option<u16>")]
pub enum WakeTime {
	/// Never wake
	#[default]
	Never,

	/// Wake at a minute of the day
	At(u16),
}

impl From<Option<u16>> for WakeTime {
	fn from(minute_of_day: Option<u16>) -> Self {
		match minute_of_day {
			Some(minute_of_day) => Self::At(minute_of_day),
			None => Self::Never,
		}
	}
}

impl From<WakeTime> for Option<u16> {
	fn from(wake_time: WakeTime) -> Self {
		match wake_time {
			WakeTime::Never => None,
			WakeTime::At(minute_of_day) => Some(minute_of_day),
		}
	}
}

/// Set of days of the week (`0..7`)
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct DaySet {
	/// Bit `n` is set if day `n` is in the set
	mask: u8,
}

impl DaySet {
	/// Empty set
	pub const EMPTY: Self = Self { mask: 0 };

	/// Creates a day set from a mask, where bit `n` is set if day `n` is in the set.
	///
	/// Bits past day `6` are ignored.
	pub const fn from_mask(mask: u8) -> Self {
		Self { mask: mask & 0b111_1111 }
	}

	/// Creates a day set from day indices
	pub fn new(days: impl IntoIterator<Item = u8>) -> Result<Self, PolicyConfigError> {
		days.into_iter().try_fold(Self::EMPTY, |set, day| match day < 7 {
			true => Ok(Self {
				mask: set.mask | (1 << day),
			}),
			false => Err(PolicyConfigError::DayOutOfRange { day }),
		})
	}

	/// Returns if `day` is in this set
	pub fn contains(&self, day: u8) -> bool {
		day < 7 && self.mask & (1 << day) != 0
	}

	/// Returns all days in this set, in order
	pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
		(0..7).filter(|&day| self.contains(day))
	}
}

impl TryFrom<Vec<u8>> for DaySet {
	type Error = PolicyConfigError;

	fn try_from(days: Vec<u8>) -> Result<Self, Self::Error> {
		Self::new(days)
	}
}

impl From<DaySet> for Vec<u8> {
	fn from(days: DaySet) -> Self {
		days.iter().collect()
	}
}

impl fmt::Display for DaySet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}

/// Weekday / weekend policy schedule
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PolicySchedule {
	/// Policy for days not in `weekend_days`
	pub weekday: PowerPolicy,

	/// Policy for days in `weekend_days`
	pub weekend: PowerPolicy,

	/// Days of the week using the weekend policy.
	///
	/// Day `0` is the first day of the trace, these have no fixed
	/// calendar meaning.
	pub weekend_days: DaySet,
}

impl PolicySchedule {
	/// Creates a schedule using `policy` every day
	pub fn uniform(policy: PowerPolicy) -> Self {
		Self {
			weekday:      policy,
			weekend:      policy,
			weekend_days: DaySet::EMPTY,
		}
	}

	/// Validates both policies
	pub fn validate(&self) -> Result<(), PolicyConfigError> {
		for (which, policy) in [("weekday", &self.weekday), ("weekend", &self.weekend)] {
			policy.validate().map_err(|source| PolicyConfigError::Policy {
				which,
				source: Box::new(source),
			})?;
		}

		Ok(())
	}

	/// Returns the policy active on `day_of_week`
	pub fn policy_for(&self, day_of_week: u8) -> &PowerPolicy {
		match self.weekend_days.contains(day_of_week) {
			true => &self.weekend,
			false => &self.weekday,
		}
	}
}
