use anyhow::Result;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use campaign_report::config::ReportConfig;
use campaign_report::navigation::{LayoutKind, Section};
use campaign_report_cli::report::input::config_from_arguments;
use campaign_report_cli::report::render::{run_render, run_site};
use campaign_report_cli::report::resolve::{catalog_keys, print_resolve_reports, resolve_assets};
use campaign_report_cli::report::trend::run_trend;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(
            "CAMPAIGN_REPORT_LOG",
            "error,campaign_report=info,campaign_report_cli=info",
        ))
        .init();

    let matches = Command::new("campaign-report")
        .version(clap::crate_version!())
        .author("DK Marketing Analytics")
        .about("\u{1F45F} DK White Sneaker Campaign Review - static HTML report renderer")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render the campaign report to a single HTML file")
                .arg(config_arg())
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output_file")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help(
                            "HTML file the report will be written to. \
                             Overrides the output file specified in the configuration file.",
                        )
                        .value_hint(ValueHint::FilePath),
                )
                .arg(layout_arg())
                .arg(
                    Arg::new("section")
                        .short('s')
                        .long("section")
                        .help(
                            "Section shown by the tabs and sidebar layouts, by number (1-7), \
                             slug (e.g. 'authority') or label. Defaults to the first section.",
                        )
                        .value_parser(|s: &str| s.parse::<Section>())
                        .value_hint(ValueHint::Other),
                )
                .arg(asset_dir_arg())
                .arg(no_embed_arg()),
        )
        .subcommand(
            Command::new("site")
                .about("Render every page of the report into a directory")
                .arg(config_arg())
                .arg(
                    Arg::new("out_dir")
                        .short('d')
                        .long("out_dir")
                        .help("Directory the pages will be written to")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::DirPath),
                )
                .arg(layout_arg())
                .arg(asset_dir_arg())
                .arg(no_embed_arg()),
        )
        .subcommand(
            Command::new("resolve")
                .about("Show where report images are loaded from")
                .arg(
                    Arg::new("names")
                        .help("Logical asset keys or filenames to resolve")
                        .num_args(1..)
                        .required_unless_present("all")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .help("Resolve every key in the asset catalog")
                        .conflicts_with("names")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to report JSON configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(asset_dir_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("trend")
                .about("Export the brand search-interest trend dataset")
                .arg(
                    Arg::new("trend_output")
                        .short('o')
                        .long("output")
                        .help("File to write the dataset to. Defaults to stdout.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("config")
                .about("Print the default report configuration as JSON"),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("render", sub_m)) => handle_render(sub_m),
        Some(("site", sub_m)) => handle_site(sub_m),
        Some(("resolve", sub_m)) => handle_resolve(sub_m),
        Some(("trend", sub_m)) => handle_trend(sub_m),
        Some(("config", _)) => handle_config(),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn config_arg() -> Arg {
    Arg::new("config")
        .help("Path to report JSON configuration file. Built-in defaults are used when omitted.")
        .required(false)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn layout_arg() -> Arg {
    Arg::new("layout")
        .short('l')
        .long("layout")
        .help("Page layout. Overrides the layout specified in the configuration file.")
        .value_parser(
            PossibleValuesParser::new(["scroll", "cards", "tabs", "sidebar"])
                .try_map(|s| s.parse::<LayoutKind>()),
        )
}

fn asset_dir_arg() -> Arg {
    Arg::new("asset_dir")
        .short('a')
        .long("asset_dir")
        .help("Directory searched for report images. Overrides the configuration file.")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::DirPath)
}

fn no_embed_arg() -> Arg {
    Arg::new("no_embed")
        .long("no-embed")
        .help("Link images by path instead of embedding them in the HTML.")
        .action(ArgAction::SetTrue)
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output machine-readable JSON")
        .action(ArgAction::SetTrue)
}

fn handle_render(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    log::info!("[CampaignReport::Render] Using config: {:?}", config_path);

    let config = config_from_arguments(config_path, matches)?;
    let section = matches.get_one::<Section>("section").copied();

    match run_render(&config, section) {
        Ok(path) => {
            eprintln!("[CampaignReport::Render] Report written to {}", path.display());
            Ok(())
        }
        Err(e) => {
            log::error!("Rendering failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_site(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    let out_dir: &PathBuf = matches
        .get_one("out_dir")
        .expect("out_dir is required by CLI configuration");

    let config = config_from_arguments(config_path, matches)?;

    match run_site(&config, out_dir) {
        Ok(pages) => {
            eprintln!(
                "[CampaignReport::Site] Wrote {} page(s) to {}",
                pages.len(),
                out_dir.display()
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Site rendering failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_resolve(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    let config = config_from_arguments(config_path, matches)?;

    let names: Vec<String> = if matches.get_flag("all") {
        catalog_keys(&config)
    } else {
        matches
            .get_many::<String>("names")
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    };

    let reports = resolve_assets(&config, &names);
    print_resolve_reports(&reports, matches.get_flag("json"))
}

fn handle_trend(matches: &ArgMatches) -> Result<()> {
    let output: Option<&PathBuf> = matches.get_one("trend_output");
    run_trend(output.map(|p| p.as_path()), matches.get_flag("json"))
}

fn handle_config() -> Result<()> {
    let json = serde_json::to_string_pretty(&ReportConfig::default())?;
    println!("{}", json);
    Ok(())
}
