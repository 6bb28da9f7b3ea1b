//! visdrone2yolo: VisDrone detection annotations to YOLO labels.
//!
//! VisDrone annotation files store one raw, pixel-space detection record
//! per line; YOLO-family detectors expect normalized, class-indexed,
//! center-based label lines. This crate converts between the two through a
//! policy-parameterized pipeline: parse → class policy → normalize →
//! write, with optional subsetting (copying only the images that contain
//! one target class).
//!
//! # Modules
//!
//! - [`anno`]: annotation records, typed bounding boxes, class policies
//! - [`convert`]: the pure per-file conversion job and split summaries
//! - [`dataset`]: split materialization (directory walking, label/image output)
//! - [`error`]: error types for visdrone2yolo operations

pub mod anno;
pub mod convert;
pub mod dataset;
pub mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use anno::{class_name, ClassPolicy, VISDRONE_CLASS_NAMES};
use convert::SplitSummary;
use dataset::{materialize_split, write_data_yaml, SplitTask};
pub use error::VisdroneError;

/// The visdrone2yolo CLI application.
#[derive(Parser)]
#[command(name = "visdrone2yolo")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Convert raw VisDrone annotations to YOLO labels (all ten classes).
    Convert(ConvertArgs),

    /// Extract a single class into its own labels (and optionally images) subset.
    Extract(ExtractArgs),
}

/// Arguments for the convert subcommand.
#[derive(clap::Args)]
struct ConvertArgs {
    /// Dataset root containing `<split>/annotations` and `<split>/images`.
    base_dir: PathBuf,

    /// Splits to process.
    #[arg(long, value_delimiter = ',', default_values_t = [String::from("train"), String::from("val")])]
    splits: Vec<String>,

    /// Output format for the summaries ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the extract subcommand.
#[derive(clap::Args)]
struct ExtractArgs {
    /// Dataset root containing `<split>/annotations` and `<split>/images`.
    base_dir: PathBuf,

    /// Raw VisDrone id of the class to extract (1..=10; 4 = car).
    #[arg(long = "class", default_value_t = 4)]
    class_id: i64,

    /// Class id written to the output labels.
    #[arg(long, default_value_t = 0)]
    output_class: i64,

    /// Name of the subset directory; defaults to the VisDrone class name.
    #[arg(long)]
    name: Option<String>,

    /// Also copy each kept image into `<name>/images/<split>`.
    #[arg(long)]
    copy_images: bool,

    /// Read already-converted labels from `labels/<split>` (paired with
    /// `images/<split>`) instead of raw `<split>/annotations`.
    #[arg(long)]
    from_labels: bool,

    /// Splits to process.
    #[arg(long, value_delimiter = ',', default_values_t = [String::from("train"), String::from("val")])]
    splits: Vec<String>,

    /// Output format for the summaries ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the visdrone2yolo CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), VisdroneError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert(args)) => run_convert(args),
        Some(Commands::Extract(args)) => run_extract(args),
        None => {
            println!("visdrone2yolo {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Convert VisDrone detection annotations to YOLO labels.");
            println!();
            println!("Run 'visdrone2yolo --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the convert subcommand.
fn run_convert(args: ConvertArgs) -> Result<(), VisdroneError> {
    let text = args.output != "json";
    let mut summaries = Vec::new();

    for split in &args.splits {
        let task = SplitTask {
            split: split.clone(),
            annotations_dir: args.base_dir.join(split).join("annotations"),
            images_dir: args.base_dir.join(split).join("images"),
            labels_out_dir: args.base_dir.join("labels").join(split),
            images_out_dir: None,
            policy: ClassPolicy::ContiguousRemap,
        };

        if text {
            println!("Converting {split} annotations...");
        }
        let summary = materialize_split(&task)?;
        if text {
            print!("{summary}");
        }
        summaries.push(summary);
    }

    write_data_yaml(&args.base_dir, &VISDRONE_CLASS_NAMES)?;
    report_summaries(text, &summaries)
}

/// Execute the extract subcommand.
fn run_extract(args: ExtractArgs) -> Result<(), VisdroneError> {
    let text = args.output != "json";

    let subset_name = args.name.clone().unwrap_or_else(|| {
        class_name(args.class_id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("class_{}", args.class_id))
    });
    let output_root = args.base_dir.join(&subset_name);

    let policy = ClassPolicy::SingleClass {
        target: args.class_id,
        output: args.output_class,
    };

    let mut summaries = Vec::new();
    for split in &args.splits {
        let (annotations_dir, images_dir) = if args.from_labels {
            (
                args.base_dir.join("labels").join(split),
                args.base_dir.join("images").join(split),
            )
        } else {
            (
                args.base_dir.join(split).join("annotations"),
                args.base_dir.join(split).join("images"),
            )
        };

        let task = SplitTask {
            split: split.clone(),
            annotations_dir,
            images_dir,
            labels_out_dir: output_root.join("labels").join(split),
            images_out_dir: args
                .copy_images
                .then(|| output_root.join("images").join(split)),
            policy,
        };

        if text {
            println!("Extracting '{subset_name}' from {split}...");
        }
        let summary = materialize_split(&task)?;
        if text {
            print!("{summary}");
        }
        summaries.push(summary);
    }

    write_data_yaml(&output_root, &[subset_name.as_str()])?;
    report_summaries(text, &summaries)
}

/// Print the collected summaries as JSON when requested; text mode has
/// already printed them per split.
fn report_summaries(text: bool, summaries: &[SplitSummary]) -> Result<(), VisdroneError> {
    if !text {
        println!("{}", serde_json::to_string_pretty(summaries)?);
        return Ok(());
    }

    let mut total = SplitSummary::new("total");
    for summary in summaries {
        total.merge(summary);
    }
    println!(
        "Done: {} label file(s) written across {} split(s).",
        total.labels_written,
        summaries.len()
    );
    Ok(())
}
