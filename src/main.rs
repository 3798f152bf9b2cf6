use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use igframe::config::{parse_ratio, BlurConfig, BorderConfig, Job, DEFAULT_QUALITY};
use igframe::{batch, FsStore, HasRecoverySuggestion};

/// Re-frame photos for social media:
/// - file/list: 4:5 canvas with a blurred copy of the photo behind it
/// - alt: fixed canvas with padding and a white border
#[derive(Parser, Debug)]
#[command(name = "igframe")]
#[command(about = "Convert photos to 4:5 (or custom) canvases for social media")]
struct Cli {
    /// Log geometry and timings to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one image onto a blurred 4:5 background
    File {
        /// Image to convert
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        blur: BlurArgs,
    },
    /// Convert every image listed (one per line) in a text file
    List {
        /// Text file with one image path per line, relative to the list's directory
        #[arg(short = 'f', long = "file-list")]
        file_list: PathBuf,

        #[command(flatten)]
        blur: BlurArgs,
    },
    /// Convert one image onto a fixed canvas with padding and border
    #[command(disable_help_flag = true)]
    Alt(AltArgs),
}

#[derive(Args, Debug)]
struct BlurArgs {
    /// Background lightness: 0 = black, 1 = unchanged
    #[arg(short, long, default_value_t = 0.0)]
    lightness: f32,

    /// JPEG quality (1-100)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY)]
    quality: u8,

    /// Output filename postfix
    #[arg(short = 'P', long = "filename-postfix", default_value = "_4_3")]
    suffix: String,
}

impl BlurArgs {
    fn into_job(self) -> Job {
        Job::Blurred(BlurConfig {
            lightness: self.lightness,
            quality: self.quality,
            suffix: self.suffix,
        })
    }
}

#[derive(Args, Debug)]
struct AltArgs {
    /// Image to convert
    #[arg(short, long)]
    file: PathBuf,

    /// Padding between the canvas edge and the photo
    #[arg(short, long, default_value_t = 30)]
    padding: u32,

    /// Target image width
    #[arg(short, long, default_value_t = 1080)]
    width: u32,

    /// Target image height
    #[arg(short = 'h', long, default_value_t = 1350)]
    height: u32,

    /// JPEG quality (1-100)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY)]
    quality: u8,

    /// Output filename postfix
    #[arg(short = 'P', long = "filename-postfix", alias = "filename-posfix", default_value = "_IG")]
    suffix: String,

    /// Border width. Set 0 to remove border.
    #[arg(short, long, default_value_t = 10)]
    border: u32,

    /// Fixed ratio for the derived side, e.g. 3:4 (default: keep the photo's own)
    #[arg(short, long, value_parser = parse_ratio)]
    ratio: Option<(u32, u32)>,

    /// Print help (-h is taken by --height)
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl AltArgs {
    fn into_job(self) -> (PathBuf, Job) {
        let job = Job::Bordered(BorderConfig {
            width: self.width,
            height: self.height,
            padding: self.padding,
            border: self.border,
            ratio: self.ratio,
            quality: self.quality,
            suffix: self.suffix,
        });
        (self.file, job)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let summary = match cli.command {
        Command::File { file, blur } => {
            let job = validated(blur.into_job())?;
            batch::convert_files(&[file], &job, &FsStore, &mut out)?
        }
        Command::List { file_list, blur } => {
            let job = validated(blur.into_job())?;
            batch::convert_list(&file_list, &job, &FsStore, &mut out)
                .with_context(|| format!("processing list {}", file_list.display()))?
        }
        Command::Alt(args) => {
            let (file, job) = args.into_job();
            let job = validated(job)?;
            batch::convert_files(&[file], &job, &FsStore, &mut out)?
        }
    };

    log::debug!("{:?}", summary);
    Ok(())
}

fn validated(job: Job) -> Result<Job> {
    if let Err(e) = job.validate() {
        let hint = e.recovery_suggestion().unwrap_or_default();
        return Err(anyhow::anyhow!("{}\nhint: {}", e, hint));
    }
    Ok(job)
}
