use clap::Parser;

/// Command-line arguments. Options left unset fall back to the settings file.
#[derive(Parser, Debug, Clone)]
#[command(name = "disk-canvas")]
#[command(version, about = "Visualize disk usage as a colored character canvas", long_about = None)]
pub struct Cli {
    /// Directory to analyze
    #[arg(value_name = "DIR")]
    pub dir: String,

    /// Number of largest items to list [default: 10]
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub top: Option<u32>,

    /// Exclude directories from the largest-items list
    #[arg(short, long)]
    pub files: bool,

    /// Maximum depth for the largest-items list [default: 1]
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32))]
    pub depth: Option<u32>,

    /// Detailed styles and a per-extension legend
    #[arg(short = 'D', long)]
    pub detail: bool,

    /// Lay the canvas out as a treemap of the directory tree
    #[arg(short = 'U', long)]
    pub unsort: bool,

    /// Path to settings file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
