//! `cup` binary. All behaviour lives in the library; this only maps fatal
//! errors to a non-zero exit status.

fn main() {
    if let Err(err) = cup::entry() {
        eprintln!("{}", err.user_message());
        std::process::exit(1);
    }
}
