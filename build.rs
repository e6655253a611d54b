// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

const PLATFORMS: [&str; 4] = ["TIE", "XvT", "BoP", "XWA"];

/// Common argument: a platform name
fn platform_arg(id: &'static str, long: Option<&'static str>, help: &'static str) -> Arg {
    let arg = Arg::new(id)
        .value_name("PLATFORM")
        .value_parser(PLATFORMS)
        .ignore_case(true)
        .help(help);
    match long {
        Some(name) => arg.long(name).short(name.chars().next().unwrap_or('p')),
        None => arg,
    }
}

fn build_cli() -> Command {
    Command::new("mission-convert")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Mission Convert Contributors")
        .about("Downgrade space-combat missions between TIE, XvT/BoP and XWA")
        .subcommand_required(false)
        .subcommand(
            Command::new("convert")
                .about("Convert a JSON mission graph to a simpler platform")
                .arg(Arg::new("input").required(true).help("Path to the source mission (JSON)"))
                .arg(platform_arg(
                    "from",
                    Some("from"),
                    "Source platform (detected from the mission if omitted)",
                ))
                .arg(platform_arg("to", Some("to"), "Destination platform").required(true))
                .arg(
                    Arg::new("bop")
                        .long("bop")
                        .action(ArgAction::SetTrue)
                        .help("Produce BoP instead of XvT"),
                )
                .arg(
                    Arg::new("names")
                        .long("names")
                        .value_name("FILE")
                        .help("TOML file overriding display names"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output path (stdout if omitted)"),
                ),
        )
        .subcommand(
            Command::new("limits")
                .about("Show the capability constants of a platform")
                .arg(platform_arg("platform", None, "Platform name").required(true)),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("mission-convert.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
