fn main() {
    if let Err(e) = simpletester_import::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
