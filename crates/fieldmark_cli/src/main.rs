#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "fieldmark", about = "Marker-driven field initialization tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Resolve one field's argument range in a stream document.
	Resolve {
		path: PathBuf,
		#[arg(long)]
		name: String,
		#[arg(long)]
		json: bool,
	},
	/// Instantiate the document's schema against its stream.
	Init {
		path: PathBuf,
		#[arg(long)]
		strict: bool,
		#[arg(long)]
		json: bool,
	},
	/// Report marker and value binding anomalies.
	Audit {
		path: PathBuf,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> fieldmark::init::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Resolve { path, name, json } => cmd::resolve::run(path, name, json),
		Commands::Init { path, strict, json } => cmd::init::run(path, strict, json),
		Commands::Audit { path, json } => cmd::audit::run(path, json),
	}
}
