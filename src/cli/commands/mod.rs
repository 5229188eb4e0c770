pub mod logging;

use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::{
        BoolishValueParser,
        styling::{AnsiColor, Effects, Styles},
    },
};

pub const ARG_PORT: &str = "port";
pub const ARG_SEED_DEMO_USER: &str = "seed-demo-user";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("heybabyy")
        .about("HeyBabyy authentication API")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8000")
                .env("HEYBABYY_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_SEED_DEMO_USER)
                .long("seed-demo-user")
                .help("Create the demo account (9876543210@demo.com / demo123) at startup")
                .env("HEYBABYY_SEED_DEMO_USER")
                .action(ArgAction::SetTrue)
                .value_parser(BoolishValueParser::new()),
        );

    logging::with_args(command)
}
