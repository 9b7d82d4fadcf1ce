pub fn run() {
    println!("cem {}", env!("CARGO_PKG_VERSION"));
}
