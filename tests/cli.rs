use assert_cmd::Command;
use std::fs;

mod common;
use common::{write_image, write_text};

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.arg("-V");
    cmd.assert()
        .success()
        .stdout(predicates::str::starts_with("visdrone2yolo"));
}

// Convert subcommand tests

#[test]
fn convert_writes_labels_and_data_yaml() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let root = temp.path();

    write_image(&root.join("train/images/0000001.jpg"), 100, 100);
    write_text(
        &root.join("train/annotations/0000001.txt"),
        "10,20,30,40,1,4,0,1\n",
    );
    write_image(&root.join("val/images/0000002.jpg"), 100, 100);
    write_text(
        &root.join("val/annotations/0000002.txt"),
        "50,60,10,10,1,1,0,0\n",
    );

    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.arg("convert").arg(root);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Converting train annotations..."))
        .stdout(predicates::str::contains("1 label file(s) written"))
        .stdout(predicates::str::contains("Done: 2 label file(s)"));

    let label = fs::read_to_string(root.join("labels/train/0000001.txt")).expect("read label");
    assert_eq!(label, "3 0.250000 0.400000 0.300000 0.400000");

    let yaml = fs::read_to_string(root.join("data.yaml")).expect("read data.yaml");
    assert!(yaml.contains("0: 'pedestrian'"));
    assert!(yaml.contains("9: 'motor'"));
}

#[test]
fn convert_json_output_reports_counters() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let root = temp.path();

    write_image(&root.join("train/images/a.jpg"), 50, 50);
    write_text(&root.join("train/annotations/a.txt"), "10,10,10,10,1,4,0,1\n");

    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.args(["convert", "--splits", "train", "--output", "json"])
        .arg(root);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"split\": \"train\""))
        .stdout(predicates::str::contains("\"labels_written\": 1"));
}

#[test]
fn convert_missing_split_dir_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");

    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.arg("convert").arg(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("invalid dataset layout"));
}

// Extract subcommand tests

#[test]
fn extract_copies_only_images_with_the_target_class() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let root = temp.path();

    write_image(&root.join("train/images/with_car.jpg"), 100, 100);
    write_text(
        &root.join("train/annotations/with_car.txt"),
        "10,20,30,40,1,4,0,1\n",
    );
    write_image(&root.join("train/images/without_car.jpg"), 100, 100);
    write_text(
        &root.join("train/annotations/without_car.txt"),
        "10,20,30,40,1,9,0,1\n",
    );

    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.args(["extract", "--splits", "train", "--copy-images"])
        .arg(root);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Extracting 'car' from train..."))
        .stdout(predicates::str::contains("1 image(s) copied"));

    assert!(root.join("car/labels/train/with_car.txt").is_file());
    assert!(root.join("car/images/train/with_car.jpg").is_file());
    assert!(!root.join("car/labels/train/without_car.txt").exists());
    assert!(!root.join("car/images/train/without_car.jpg").exists());

    let yaml = fs::read_to_string(root.join("car/data.yaml")).expect("read data.yaml");
    assert!(yaml.contains("0: 'car'"));
}

#[test]
fn extract_from_labels_reingests_converted_output() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let root = temp.path();

    write_image(&root.join("images/train/seen.jpg"), 100, 100);
    write_text(&root.join("labels/train/seen.txt"), "3 0.25 0.40 0.30 0.40\n");

    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.args(["extract", "--splits", "train", "--from-labels"])
        .arg(root);
    cmd.assert().success();

    let label = fs::read_to_string(root.join("car/labels/train/seen.txt")).expect("read label");
    assert_eq!(label, "0 0.250000 0.400000 0.300000 0.400000");
}

#[test]
fn extract_honors_custom_name_and_class() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let root = temp.path();

    write_image(&root.join("train/images/bus.jpg"), 100, 100);
    write_text(&root.join("train/annotations/bus.txt"), "10,20,30,40,1,9,0,1\n");

    let mut cmd = Command::cargo_bin("visdrone2yolo").unwrap();
    cmd.args([
        "extract",
        "--splits",
        "train",
        "--class",
        "9",
        "--name",
        "buses",
    ])
    .arg(root);
    cmd.assert().success();

    assert!(root.join("buses/labels/train/bus.txt").is_file());
}
