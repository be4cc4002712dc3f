use clap::Parser;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the settings file; overrides `AZUML__CONFIG`.
    #[clap(short, long)]
    pub config_path: Option<std::path::PathBuf>,
}
