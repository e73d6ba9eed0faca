#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "glbaudit", about = "Binary glTF (.glb) integrity checks")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Cross-check declared buffer, view, and accessor sizes against the binary chunk.
	Check(cmd::check::Args),
	/// Print container header and chunk framing.
	Info(cmd::info::Args),
}

fn main() {
	env_logger::init();

	match run() {
		Ok(code) => std::process::exit(code),
		Err(err) => {
			eprintln!("error: {err}");
			std::process::exit(1);
		}
	}
}

fn run() -> glbaudit::glb::Result<i32> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Check(args) => cmd::check::run(args),
		Commands::Info(args) => cmd::info::run(args).map(|()| 0),
	}
}
