fn main() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    // Every failure surfaces as a plain message; nothing is retried
    if let Err(err) = csviz::interfaces::cli::run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
