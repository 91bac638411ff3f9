fn main() {
    if let Err(e) = psico_assist::cli::main() {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
