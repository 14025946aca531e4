//! Configuration

// Imports
use crate::{DaySet, PolicySchedule, PowerPolicy, WakeReach, WakeTime};

/// Configuration
#[derive(PartialEq, Eq, Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Debug output period (in simulated days)
	pub debug_output_period_days: usize,

	/// How far scheduled wakes reach
	pub wake_reach: WakeReach,

	/// Weekday policy
	pub weekday: PowerPolicy,

	/// Weekend policy
	pub weekend: PowerPolicy,

	/// Days of the week that use the weekend policy
	pub weekend_days: DaySet,
}

impl Config {
	/// Returns the policy schedule of this config
	pub fn schedule(&self) -> PolicySchedule {
		PolicySchedule {
			weekday:      self.weekday,
			weekend:      self.weekend,
			weekend_days: self.weekend_days,
		}
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			debug_output_period_days: 7,
			wake_reach:               WakeReach::Threshold,
			// 45 minutes outside of 8am..6pm, 8 hours inside, waking at 8am
			weekday:                  PowerPolicy {
				timeout1:  45,
				timeout2:  480,
				boundary1: 480,
				boundary2: 1080,
				wake_time: WakeTime::At(480),
			},
			// 45 minutes all day, never waking
			weekend:                  PowerPolicy {
				timeout1:  45,
				timeout2:  45,
				boundary1: 480,
				boundary2: 480,
				wake_time: WakeTime::Never,
			},
			// Days 1 and 2
			weekend_days:             DaySet::from_mask(0b110),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_valid() {
		assert_eq!(Config::default().schedule().validate(), Ok(()));
	}

	#[test]
	fn empty_config_is_default() {
		let config = serde_json::from_str::<Config>("{}").unwrap();
		assert_eq!(config, Config::default());
		assert_eq!(config.wake_reach, WakeReach::Threshold);
		assert_eq!(config.weekend_days, DaySet::new([1, 2]).unwrap());
	}

	#[test]
	fn parses_full_config() {
		let config = serde_json::from_str::<Config>(
			r#"{
				"debug_output_period_days": 0,
				"wake_reach": "contiguous",
				"weekday": { "timeout1": 30, "timeout2": 120, "boundary1": 420, "boundary2": 1020, "wake_time": 420 },
				"weekend": { "timeout1": 15, "timeout2": 15, "boundary1": 0, "boundary2": 0, "wake_time": null },
				"weekend_days": [5, 6]
			}"#,
		)
		.unwrap();

		assert_eq!(config.debug_output_period_days, 0);
		assert_eq!(config.wake_reach, WakeReach::Contiguous);
		assert_eq!(config.weekday.wake_time, WakeTime::At(420));
		assert_eq!(config.weekend.wake_time, WakeTime::Never);

		let schedule = config.schedule();
		assert_eq!(schedule.policy_for(5).timeout1, 15);
		assert_eq!(schedule.policy_for(0).timeout1, 30);
	}

	#[test]
	fn missing_wake_time_never_wakes() {
		let policy = serde_json::from_str::<PowerPolicy>(
			r#"{ "timeout1": 30, "timeout2": 120, "boundary1": 420, "boundary2": 1020 }"#,
		)
		.unwrap();
		assert_eq!(policy.wake_time, WakeTime::Never);
	}

	#[test]
	fn rejects_bad_weekend_days() {
		assert!(serde_json::from_str::<Config>(r#"{ "weekend_days": [7] }"#).is_err());
	}
}
