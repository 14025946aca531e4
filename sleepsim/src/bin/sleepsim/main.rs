//! Power policy sleep simulator (`sleepsim`)

// Modules
mod args;

// Imports
use {
	self::args::Args,
	anyhow::Context,
	clap::Parser,
	sleepsim::{ActivityTrace, Config, RunOutput, Simulator, Summary},
	sleepsim_util::{logger, ReadTrimmedLine},
	std::{
		fs,
		io::{self, BufReader, BufWriter, Write},
	},
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Read the config file
	let config = match &args.config_file {
		Some(config_file) => {
			let config_file = fs::File::open(config_file).context("Unable to open config file")?;
			serde_json::from_reader::<_, Config>(config_file).context("Unable to parse config file")?
		},
		None => Config::default(),
	};
	tracing::debug!(?config, "Loaded config");

	// Note: We create the simulator before reading the trace so bad policies fail fast
	let sim = Simulator::new(config.schedule(), config.wake_reach)
		.context("Invalid power policy")?
		.with_debug_output_period(config.debug_output_period_days);

	// Read the trace file
	let trace_file = fs::File::open(&args.trace_file).context("Unable to open trace file")?;
	let mut trace_reader = BufReader::new(trace_file);
	let header = match args.header {
		true => Some(
			trace_reader
				.read_trimmed_line()
				.context("Unable to read header")?
				.context("Trace file is missing its header")?,
		),
		false => None,
	};
	let mut trace = ActivityTrace::from_reader(&mut trace_reader).context("Unable to load trace")?;

	// Run the simulator
	let run_output = sim.run(&mut trace).context("Unable to run simulator")?;
	tracing::info!(?run_output, "Finished simulation");

	// Write the simulated trace
	match &args.output_file {
		Some(output_file) => {
			let output_file = fs::File::create(output_file).context("Unable to create output file")?;
			self::write_trace(BufWriter::new(output_file), header.as_deref(), &trace)?;
		},
		None => self::write_trace(io::stdout().lock(), header.as_deref(), &trace)?,
	}

	// And summarize it
	let summary = Summary::from_trace(&trace);
	tracing::info!("Summary: {summary}");

	if let Some(summary_file) = &args.summary_file {
		let summary_file = fs::File::create(summary_file).context("Unable to create summary file")?;
		let report = Report {
			run:     &run_output,
			summary: &summary,
		};
		serde_json::to_writer_pretty(summary_file, &report).context("Unable to write to summary file")?;
	}

	Ok(())
}

/// Writes `trace`, preceded by `header`, if any, to `writer`
fn write_trace(mut writer: impl Write, header: Option<&[u8]>, trace: &ActivityTrace) -> Result<(), anyhow::Error> {
	if let Some(header) = header {
		writer.write_all(header).context("Unable to write header")?;
		writer.write_all(b"\n").context("Unable to write header")?;
	}

	trace.to_writer(&mut writer).context("Unable to write trace")?;
	writer.write_all(b"\n").context("Unable to write trace")?;
	writer.flush().context("Unable to flush output")?;

	Ok(())
}

/// Summary file contents
#[derive(Debug)]
#[derive(serde::Serialize)]
struct Report<'a> {
	run:     &'a RunOutput,
	summary: &'a Summary,
}
