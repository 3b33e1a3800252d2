use std::process;

fn main() {
    if let Err(e) = alphabet_rsa::cli::run_cli() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
