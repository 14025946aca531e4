//! Power policy sleep simulator (`sleepsim`)
//!
//! Rewrites per-minute activity traces as if a dual-timeout power policy
//! had been enforced on the computer, including scheduled wakes.

// Modules
pub mod config;
pub mod error;
pub mod policy;
pub mod sim;
pub mod state;
pub mod summary;
pub mod trace;

// Exports
pub use self::{
	config::Config,
	error::{EmptyTraceError, LoadTraceError, MalformedTraceError, PolicyConfigError},
	policy::{DaySet, PolicySchedule, PowerPolicy, WakeTime},
	sim::{RunOutput, Simulator, WakeReach},
	state::State,
	summary::Summary,
	trace::ActivityTrace,
};
