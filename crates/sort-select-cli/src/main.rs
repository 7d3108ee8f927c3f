use std::process;

fn main() {
    match sort_select_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("sort-select error: {err:#}");
            process::exit(1);
        }
    }
}
