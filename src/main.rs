use clap::{crate_description, crate_name, crate_version, Arg, ArgAction, Command};
use colored::Colorize;
use scaffold::{api, blueprint, config::Settings};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log every directory and file as it is created")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .get_matches();

    let settings = Settings::default().with_verbose(matches.get_flag("verbose"));

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.default_log_filter()),
    )
    .init();

    let created = api::scaffold(&settings, &blueprint::project_structure())?;

    println!(
        "{} {}",
        "Project structure created in".green(),
        created.display()
    );

    Ok(())
}
