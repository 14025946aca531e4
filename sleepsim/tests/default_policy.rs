//! Runs the built-in policies over whole days

// Imports
use sleepsim::{ActivityTrace, Config, Simulator, Summary};

fn simulate(input: &str) -> (ActivityTrace, sleepsim::RunOutput) {
	let config = Config::default();
	let sim = Simulator::new(config.schedule(), config.wake_reach).expect("Default config should be valid");
	let mut trace = ActivityTrace::from_reader(input.as_bytes()).expect("Unable to load trace");
	let output = sim.run(&mut trace).expect("Unable to run simulation");

	(trace, output)
}

fn runs(runs: &[(char, usize)]) -> String {
	runs.iter()
		.map(|&(symbol, count)| symbol.to_string().repeat(count))
		.collect()
}

#[test]
fn idle_weekday_wakes_at_eight() {
	let input = format!("{}\r\n", "I".repeat(1440));
	let (trace, output) = self::simulate(&input);

	assert_eq!(
		trace.to_string(),
		self::runs(&[('I', 45), ('Z', 435), ('I', 481), ('Z', 479)])
	);
	assert_eq!(output.wake_events, 1);
	assert_eq!(output.woken_minutes, 1);

	let summary = Summary::from_trace(&trace);
	assert_eq!(summary.forced_sleep, 435 + 479);
	assert_eq!(summary.forced_wake_ups, 1);
}

#[test]
fn idle_weekend_never_wakes() {
	// Day 0 is a weekday, days 1 and 2 are the weekend
	let input = format!("{}{}\n", "A".repeat(1440), "I".repeat(2 * 1440));
	let (trace, output) = self::simulate(&input);

	assert_eq!(
		trace.to_string(),
		self::runs(&[('A', 1440), ('I', 45), ('Z', 2 * 1440 - 45)])
	);
	assert_eq!(output.wake_events, 0);
}

#[test]
fn woken_hardware_sleep_is_never_forced_to_sleep() {
	let input = "S".repeat(1440);
	let (trace, output) = self::simulate(&input);

	assert_eq!(trace.to_string(), self::runs(&[('S', 480), ('I', 45), ('S', 915)]));
	assert_eq!(output.woken_minutes, 45);

	let summary = Summary::from_trace(&trace);
	assert_eq!(summary.forced_sleep, 0);
	assert_eq!(summary.already_asleep, 480 + 915);
}

#[test]
fn active_and_off_minutes_are_kept() {
	let input = self::runs(&[('O', 300), ('A', 200), ('U', 100), ('I', 30), ('A', 810)]);
	let (trace, output) = self::simulate(&input);

	assert_eq!(trace.to_string(), input);
	assert_eq!(output.forced_sleep_minutes, 0);
}
