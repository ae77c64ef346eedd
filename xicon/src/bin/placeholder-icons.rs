use std::process::ExitCode;

fn main() -> ExitCode {
    xicon::run(|config| xicon::command::placeholder_icons(&config.placeholder))
}
