use std::env;
use std::path::PathBuf;

use anyhow::Context;
use birthdaystore::asset::{self, Format};
use birthdaystore::{EventKey, GreetingConfig};
use clap::{Parser, Subcommand};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Greeting asset (.toml or .json). The built-in greeting is used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every section of the greeting.
    Show,
    /// Print the poem, one line per entry.
    Texts,
    /// Print the path of an image.
    Image {
        label: String,
        /// Directory the relative image path is joined onto.
        #[arg(long)]
        base: Option<PathBuf>,
    },
    /// Print the caption of an event.
    Desc { key: String },
    /// Print the greeting in the given format.
    Export {
        #[arg(long, default_value = "toml")]
        format: String,
    },
    /// Load and validate the greeting.
    Check,
}

fn load_config(path: &Option<PathBuf>) -> anyhow::Result<GreetingConfig> {
    match path {
        Some(path) => asset::load(path)
            .with_context(|| format!("could not load file `{}`", path.display())),
        None => asset::builtin().context("built-in greeting is invalid"),
    }
}

fn show(config: &GreetingConfig) {
    info!(
        "{} lines, {} images, {} captions",
        config.texts().len(),
        config.imgs.len(),
        EventKey::ALL.len()
    );
    println!("[texts]");
    for line in config.texts() {
        println!("{}", line);
    }
    println!("\n[imgs]");
    for (label, path) in &config.imgs {
        println!("{} = {}", label, path);
    }
    println!("\n[desc]");
    for key in EventKey::ALL {
        println!("{} = {}", key, config.caption(key));
    }
}

fn main() -> anyhow::Result<()> {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args.config)?;

    match args.command {
        Command::Show => show(&config),
        Command::Texts => {
            for line in config.texts() {
                println!("{}", line);
            }
        }
        Command::Image { label, base } => match base {
            Some(base) => {
                let path = config.resolve_image(&label, &base)?;
                println!("{}", path.display());
            }
            None => println!("{}", config.image_path(&label)?),
        },
        Command::Desc { key } => println!("{}", config.description(&key)?),
        Command::Export { format } => {
            let format: Format = format
                .parse()
                .with_context(|| format!("unsupported export format `{}`", format))?;
            print!("{}", asset::to_string(&config, format)?);
        }
        Command::Check => info!("greeting is valid"),
    }
    Ok(())
}
