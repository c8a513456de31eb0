use clap::{Parser, Subcommand};
use ipv4_class_viz::config::{init_logging, Config};
use ipv4_class_viz::interactive;
use ipv4_class_viz::output::OutputFormat;
use ipv4_class_viz::{compute_view, random_address_for, AddrClass, PrefixLength, ViewInput};
use std::error::Error;
use std::io;

/// Show an IPv4 address, its class and subnet mask bit by bit
#[derive(Parser)]
#[command(name = "ipv4-class-viz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the view as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one address (classful unless --prefix is given)
    Show(ShowArgs),
    /// Show a random address of class A, B or C
    Random(RandomArgs),
    /// Read addresses and commands from stdin
    Interactive,
}

#[derive(Parser)]
struct ShowArgs {
    /// Dotted-decimal address, defaults to IPVIZ_DEFAULT_ADDRESS
    #[arg(value_name = "ADDRESS")]
    address: Option<String>,

    /// Classless prefix length, clamped to 0-32
    #[arg(short, long, value_name = "BITS", allow_hyphen_values = true)]
    prefix: Option<String>,
}

#[derive(Parser)]
struct RandomArgs {
    /// A, B or C
    #[arg(value_name = "CLASS")]
    class: AddrClass,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Terminal
    };

    let input = match cli.command {
        Some(Commands::Interactive) => {
            let initial = ViewInput::classful(&config.default_address);
            interactive::run(io::stdin().lock(), io::stdout(), initial, format)?;
            return Ok(());
        }
        Some(Commands::Random(args)) => {
            ViewInput::classful(&random_address_for(args.class)?.to_string())
        }
        Some(Commands::Show(args)) => {
            let text = args.address.unwrap_or(config.default_address);
            match args.prefix {
                Some(bits) => ViewInput::classless(&text, PrefixLength::from_input(&bits)),
                None => ViewInput::classful(&text),
            }
        }
        None => ViewInput::classful(&config.default_address),
    };

    let result = compute_view(&input);
    println!("{}", format.render(&result)?);
    result?;

    Ok(())
}
