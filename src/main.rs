use std::process::ExitCode;

use clap::Parser;

mod cli;

use self::cli::Args;

#[allow(clippy::print_stderr)]
fn main() -> anyhow::Result<ExitCode> {
    init_logger();

    let args = Args::parse();
    miette::set_hook(args.format().into_error_hook())?;

    let invocation = args.into_invocation();
    log::debug!("{invocation:?}");

    let mut stdout = std::io::stdout().lock();
    if let Err(error) = invocation.run(&mut stdout)? {
        let report: miette::Report = error.into();
        eprintln!("{report:?}");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logger() {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();
}
