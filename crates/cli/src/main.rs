fn main() {
    if let Err(e) = codata_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
