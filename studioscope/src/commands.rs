use crate::CLAP_STYLING;
use clap::{arg, command};

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("studioscope")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("studioscope")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("enrich")
                .about(
                    "Politely crawl each entity's website and classify its practice. \
                Every network action is appended to the run log.",
                )
                .arg(
                    arg!(-i --"input" <PATH>)
                        .required(false)
                        .help("Input CSV path (columns: name,url and optionally notes)")
                        .default_value("input.csv"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help(
                            "Output path. With csv format this becomes one file per \
                        category; with json a single array.",
                        )
                        .default_value("enrichment.csv"),
                )
                .arg(
                    arg!(-l --"log" <PATH>)
                        .required(false)
                        .help("Run log CSV path, appended to across runs")
                        .default_value("run_log.csv"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: csv or json")
                        .default_value("csv"),
                )
                .arg(
                    arg!(--"min-delay" <SECONDS>)
                        .required(false)
                        .help("Minimum spacing between requests to the same host")
                        .value_parser(clap::value_parser!(f64))
                        .default_value("1.0"),
                )
                .arg(
                    arg!(--"max-delay" <SECONDS>)
                        .required(false)
                        .help("Maximum spacing between requests to the same host")
                        .value_parser(clap::value_parser!(f64))
                        .default_value("2.0"),
                ),
        )
}
