//! Per-minute states

// Imports
use std::fmt;

/// State of the computer during a single minute
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub enum State {
	/// Active (`A`)
	Active,

	/// Unknown (`U`)
	Unknown,

	/// Already asleep, without any policy (`S`)
	Sleep,

	/// Idle (`I`)
	Idle,

	/// Off (`O`)
	Off,

	/// Asleep because the policy forced it (`Z`).
	///
	/// Never present in input traces, only written by the simulator.
	ForcedSleep,
}

impl State {
	/// All states, in symbol order
	pub const ALL: [Self; 6] = [
		Self::Active,
		Self::Unknown,
		Self::Sleep,
		Self::Idle,
		Self::Off,
		Self::ForcedSleep,
	];

	/// Parses an input trace symbol.
	///
	/// `Z` is rejected, since input traces can't contain forced sleep.
	pub const fn from_input_symbol(symbol: u8) -> Option<Self> {
		match symbol {
			b'Z' => None,
			_ => Self::from_symbol(symbol),
		}
	}

	/// Parses any trace symbol, including forced sleep
	pub const fn from_symbol(symbol: u8) -> Option<Self> {
		let state = match symbol {
			b'A' => Self::Active,
			b'U' => Self::Unknown,
			b'S' => Self::Sleep,
			b'I' => Self::Idle,
			b'O' => Self::Off,
			b'Z' => Self::ForcedSleep,
			_ => return None,
		};

		Some(state)
	}

	/// Returns the symbol of this state
	pub const fn symbol(self) -> u8 {
		match self {
			Self::Active => b'A',
			Self::Unknown => b'U',
			Self::Sleep => b'S',
			Self::Idle => b'I',
			Self::Off => b'O',
			Self::ForcedSleep => b'Z',
		}
	}

	/// Returns if this state, when read from the trace, ends an idle episode
	pub const fn interrupts_idle(self) -> bool {
		matches!(self, Self::Active | Self::Unknown | Self::Off | Self::Sleep)
	}

	/// Returns if this state is a sleep, forced or not
	pub const fn is_asleep(self) -> bool {
		matches!(self, Self::Sleep | Self::ForcedSleep)
	}

	/// Returns if the computer is awake and running during this state
	pub const fn is_awake(self) -> bool {
		matches!(self, Self::Active | Self::Unknown | Self::Idle)
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", char::from(self.symbol()))
	}
}
