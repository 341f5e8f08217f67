/// Write an informational or result line to stdout with the `[+]` prefix.
pub fn log_out(message: &str) {
    println!("[+] {message}");
}

/// Write an error line to stderr with the `[-]` prefix.
pub fn log_err(message: &str) {
    eprintln!("[-] {message}");
}
