use std::fs;
use std::path::Path;

use slideshow::scan::{collect_images, is_supported_image};
use tempfile::tempdir;

fn names(images: &[std::path::PathBuf]) -> Vec<String> {
    images
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect()
}

#[test]
fn directory_yields_only_image_suffixes() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("a.jpg"), b"x").unwrap();
    fs::write(root.join("b.PNG"), b"x").unwrap();
    fs::write(root.join("c.gif"), b"x").unwrap();
    fs::write(root.join("notes.txt"), b"x").unwrap();
    fs::write(root.join("d.jpeg"), b"x").unwrap(); // not in the accepted set

    let images = collect_images(&[root.to_path_buf()]);
    assert_eq!(names(&images), vec!["a.jpg", "b.PNG", "c.gif"]);
}

#[test]
fn subdirectories_are_not_entered() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("top.jpg"), b"x").unwrap();
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("nested.jpg"), b"x").unwrap();

    let images = collect_images(&[root.to_path_buf()]);
    assert_eq!(names(&images), vec!["top.jpg"]);
}

#[test]
fn direct_file_argument_is_included_regardless_of_suffix() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("slides.webp");
    fs::write(&file, b"x").unwrap();

    assert_eq!(collect_images(std::slice::from_ref(&file)), vec![file]);
}

#[test]
fn missing_path_contributes_nothing() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope");

    assert!(collect_images(&[missing]).is_empty());
}

#[test]
fn output_is_sorted_case_insensitively() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("Beta.jpg"), b"x").unwrap();
    fs::write(root.join("alpha.jpg"), b"x").unwrap();
    fs::write(root.join("GAMMA.png"), b"x").unwrap();

    let images = collect_images(&[root.to_path_buf()]);
    assert_eq!(names(&images), vec!["alpha.jpg", "Beta.jpg", "GAMMA.png"]);
}

#[test]
fn multiple_arguments_are_flattened_and_sorted_together() {
    let tmp = tempdir().unwrap();
    let first = tmp.path().join("pics-b");
    let second = tmp.path().join("Pics-A");
    fs::create_dir_all(&first).unwrap();
    fs::create_dir_all(&second).unwrap();
    fs::write(first.join("y.jpg"), b"x").unwrap();
    fs::write(second.join("x.jpg"), b"x").unwrap();

    let images = collect_images(&[first.clone(), second.clone()]);
    assert_eq!(images, vec![second.join("x.jpg"), first.join("y.jpg")]);
}

#[test]
fn extension_check_is_case_insensitive() {
    assert!(is_supported_image(Path::new("x.JPG")));
    assert!(is_supported_image(Path::new("x.Gif")));
    assert!(is_supported_image(Path::new("x.png")));
    assert!(!is_supported_image(Path::new("x.jpeg")));
    assert!(!is_supported_image(Path::new("x.txt")));
    assert!(!is_supported_image(Path::new("x")));
}
