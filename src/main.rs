fn main() {
    if let Err(err) = quadcrop::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
