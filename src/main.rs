fn main() {
    // 1. Parse commandline arguments
    let cli = planesect::args::parse_cli_args();

    // 2. Initialize logging (RUST_LOG takes precedence over --verbose)
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    // 3. Run the command
    if let Err(err) = planesect::run_command(cli.command) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
