use flappy::{app, build_info, AppError, Difficulty};

fn main() {
    // Logging is off unless RUST_LOG is set; the TUI owns the screen, so
    // redirect stderr to a file to capture it.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_timestamp_millis()
        .try_init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Flappy - Terminal Flappy Bird\n");
                println!("Usage: flappy\n");
                println!("Controls:");
                println!("  Space / Up / Click   Jump");
                println!("  Enter / S            Start, or restart after a crash");
                println!("  Q / Esc              Quit");
                println!("\nOptions:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Run 'flappy --help' for usage.");
                return Err(AppError::UnknownArgument(other.to_string()));
            }
        }
    }

    let platform = flappy::config::platform_identifier();
    let difficulty = Difficulty::detect();
    log::info!("platform {:?}, difficulty {}", platform, difficulty.name());

    app::run(difficulty)?;

    println!("Goodbye!");
    Ok(())
}
