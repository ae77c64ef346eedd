use std::process::ExitCode;

fn main() -> ExitCode {
    xicon::run(|config| xicon::command::embed_icon_svg(&config.embed))
}
