use std::process::ExitCode;

fn main() -> ExitCode {
    xicon::run(|config| xicon::command::generate_icons(&config.generate))
}
