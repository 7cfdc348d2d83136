mod cli_runtime;

fn main() {
    shotlift::logging::init();
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
