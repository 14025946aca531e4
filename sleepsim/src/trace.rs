//! Activity traces
//!
//! A trace is a single line of symbols, one per minute, starting at
//! midnight of the first day.

// Imports
use {
	crate::{
		error::{LoadTraceError, MalformedTraceError},
		State,
	},
	sleepsim_util::ReadTrimmedLine,
	std::{fmt, io},
};

/// Activity trace
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct ActivityTrace {
	/// States, indexed by minute
	states: Vec<State>,
}

impl ActivityTrace {
	/// Parses an input trace from its symbols
	pub fn from_symbols(symbols: &[u8]) -> Result<Self, MalformedTraceError> {
		Self::parse_with(symbols, State::from_input_symbol)
	}

	/// Parses an already simulated trace from its symbols.
	///
	/// Unlike [`Self::from_symbols`], this accepts forced sleep.
	pub fn from_output_symbols(symbols: &[u8]) -> Result<Self, MalformedTraceError> {
		Self::parse_with(symbols, State::from_symbol)
	}

	fn parse_with(symbols: &[u8], parse: impl Fn(u8) -> Option<State>) -> Result<Self, MalformedTraceError> {
		let states = symbols
			.iter()
			.enumerate()
			.map(|(position, &symbol)| parse(symbol).ok_or(MalformedTraceError { symbol, position }))
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self { states })
	}

	/// Reads an input trace from the next line of `reader`.
	///
	/// Reading stops at the end of the line or the end of input.
	pub fn from_reader<R: io::BufRead>(mut reader: R) -> Result<Self, LoadTraceError> {
		let line = reader.read_trimmed_line()?.unwrap_or_default();
		let trace = Self::from_symbols(&line)?;
		tracing::debug!(minutes = trace.len(), "Loaded trace");

		Ok(trace)
	}

	/// Writes this trace's symbols to `writer`
	pub fn to_writer<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
		let symbols = self.states.iter().map(|state| state.symbol()).collect::<Vec<_>>();
		writer.write_all(&symbols)
	}

	/// Returns the number of minutes in this trace
	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// Returns if this trace has no minutes
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Returns the state at minute `idx`
	pub fn get(&self, idx: usize) -> Option<State> {
		self.states.get(idx).copied()
	}

	/// Returns the state of the minute before `idx`, if any
	pub fn previous(&self, idx: usize) -> Option<State> {
		self.get(idx.checked_sub(1)?)
	}

	/// Sets the state at minute `idx`
	///
	/// # Panics
	/// Panics if `idx` is out of bounds.
	pub fn set(&mut self, idx: usize, state: State) {
		self.states[idx] = state;
	}

	/// Wakes the computer at minute `start`.
	///
	/// Relabels the run of sleeping minutes (forced or not) starting at `start`
	/// as idle, stopping at the first minute that isn't asleep, at the end of
	/// the trace, or after `limit` minutes, if given.
	///
	/// Returns the number of minutes relabeled.
	pub fn wake_from(&mut self, start: usize, limit: Option<usize>) -> usize {
		let end = match limit {
			Some(limit) => start.saturating_add(limit).min(self.states.len()),
			None => self.states.len(),
		};
		let Some(states) = self.states.get_mut(start..end) else {
			return 0;
		};

		let mut woken = 0;
		for state in states.iter_mut().take_while(|state| state.is_asleep()) {
			*state = State::Idle;
			woken += 1;
		}

		woken
	}

	/// Returns all states
	pub fn states(&self) -> &[State] {
		&self.states
	}

	/// Returns an iterator over all states
	pub fn iter(&self) -> impl Iterator<Item = State> + '_ {
		self.states.iter().copied()
	}
}

impl fmt::Display for ActivityTrace {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for state in &self.states {
			write!(f, "{state}")?;
		}

		Ok(())
	}
}
