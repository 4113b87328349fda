use std::process;

fn main() {
    if let Err(e) = comandante::cli::run() {
        // Syntax errors were already printed along with the relevant help
        if !e.is_syntax() {
            eprintln!("Error: {:#}", e);
        }
        process::exit(e.exit_code());
    }
}
