fn main() {
    zodgen::init_tracing();
    std::process::exit(zodgen::run_cli(std::env::args().collect()));
}
