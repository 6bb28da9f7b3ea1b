//! Split materialization: walking a dataset split and writing its labels.
//!
//! One split (`train`, `val`, `test`) is processed at a time. For every
//! annotation file the materializer pairs the image with the same stem,
//! probes its pixel dimensions, runs the conversion job, and writes the
//! label file — or skips the annotation file entirely when the image is
//! missing, undecodable, or reports a zero dimension. A file whose every
//! record is dropped produces no label file at all; absence of the label
//! is how "keep only images containing the target class" is expressed.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::anno::ClassPolicy;
use crate::convert::{convert_annotation_lines, SplitSummary};
use crate::error::VisdroneError;

const ANNOTATION_EXTENSION: &str = "txt";
const IMAGE_EXTENSION: &str = "jpg";

/// Everything needed to materialize one split.
///
/// The caller decides the directory layout; the materializer only connects
/// the four (or five) directories it is given.
#[derive(Clone, Debug)]
pub struct SplitTask {
    /// Name of the split, used for reporting only.
    pub split: String,

    /// Directory holding the input annotation `.txt` files.
    pub annotations_dir: PathBuf,

    /// Directory holding the paired `.jpg` images.
    pub images_dir: PathBuf,

    /// Directory the output label files are written to.
    pub labels_out_dir: PathBuf,

    /// When subsetting, the directory paired images are copied into.
    pub images_out_dir: Option<PathBuf>,

    /// Class retention/remapping rule applied to every record.
    pub policy: ClassPolicy,
}

/// Processes every annotation file in the split and writes the output
/// labels (and image copies, when subsetting).
///
/// Skips are counted but never abort the split; write failures do, since
/// continuing would silently under-report progress.
pub fn materialize_split(task: &SplitTask) -> Result<SplitSummary, VisdroneError> {
    let annotation_files = collect_annotation_files(&task.annotations_dir)?;

    fs::create_dir_all(&task.labels_out_dir)?;
    if let Some(images_out_dir) = &task.images_out_dir {
        fs::create_dir_all(images_out_dir)?;
    }

    let mut summary = SplitSummary::new(&task.split);

    for annotation_path in annotation_files {
        summary.files_scanned += 1;

        let Some(file_name) = annotation_path.file_name() else {
            continue;
        };
        let image_path = task
            .images_dir
            .join(file_name)
            .with_extension(IMAGE_EXTENSION);

        // No label is ever written for a file whose image is missing.
        if !image_path.is_file() {
            continue;
        }

        // Decode failures and zero-area dimensions skip the file the same
        // way a missing image does.
        let Ok(size) = imagesize::size(&image_path) else {
            continue;
        };
        let (Ok(width), Ok(height)) = (u32::try_from(size.width), u32::try_from(size.height))
        else {
            continue;
        };
        if width == 0 || height == 0 {
            continue;
        }

        let content = fs::read_to_string(&annotation_path)?;
        let conversion = convert_annotation_lines(&content, width, height, &task.policy);
        if !conversion.has_kept_records() {
            continue;
        }

        fs::write(
            task.labels_out_dir.join(file_name),
            conversion.into_contents(),
        )?;
        summary.labels_written += 1;

        if let Some(images_out_dir) = &task.images_out_dir {
            let Some(image_name) = image_path.file_name() else {
                continue;
            };
            fs::copy(&image_path, images_out_dir.join(image_name))?;
            summary.images_copied += 1;
        }
    }

    Ok(summary)
}

/// Collects the split's annotation files in deterministic order.
fn collect_annotation_files(annotations_dir: &Path) -> Result<Vec<PathBuf>, VisdroneError> {
    if !annotations_dir.is_dir() {
        return Err(VisdroneError::LayoutInvalid {
            path: annotations_dir.to_path_buf(),
            message: "annotations directory does not exist".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(annotations_dir).follow_links(true) {
        let entry = entry.map_err(|source| VisdroneError::LayoutInvalid {
            path: annotations_dir.to_path_buf(),
            message: format!("failed while traversing directory: {source}"),
        })?;

        if entry.file_type().is_file() && has_extension(entry.path(), ANNOTATION_EXTENSION) {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

/// Writes an Ultralytics-style `data.yaml` listing the output class names.
///
/// Emitted once per run at the output root so the converted tree is
/// directly consumable by YOLO tooling.
pub fn write_data_yaml(output_root: &Path, names: &[&str]) -> Result<(), VisdroneError> {
    let mut yaml = String::from("names:\n");
    for (index, name) in names.iter().enumerate() {
        yaml.push_str(&format!("  {}: {}\n", index, yaml_single_quoted(name)));
    }

    fs::create_dir_all(output_root)?;
    fs::write(output_root.join("data.yaml"), yaml)?;
    Ok(())
}

fn yaml_single_quoted(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', "''"))
}
