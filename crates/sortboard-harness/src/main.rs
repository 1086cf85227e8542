#![forbid(unsafe_code)]

fn main() {
    sortboard_harness::init_tracing();
    if let Err(error) = sortboard_harness::run_from_env() {
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}
