use studioscope::commands::command_argument_builder;
use studioscope::handlers;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        handlers::print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    match chosen_command.subcommand() {
        Some(("enrich", primary_command)) => {
            if let Err(e) = handlers::handle_enrich(primary_command, quiet).await {
                eprintln!("✗ enrichment failed: {e:#}");
                std::process::exit(1);
            }
        }
        _ => unreachable!("clap should ensure we don't get here"),
    }
}
