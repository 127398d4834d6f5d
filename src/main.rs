//! Desktop entrypoint.

fn main() {
    if let Err(err) = textconvert_gui::run() {
        eprintln!("textconvert gui failed: {}", err);
        std::process::exit(1);
    }
}
