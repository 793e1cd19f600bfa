fn main() {
    if let Err(e) = benchtab_cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
