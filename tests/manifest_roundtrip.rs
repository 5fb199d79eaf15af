//! End-to-end manifest tests: build over a real directory tree, write JSON,
//! parse it back.

use astro_dataprep::filelist::{build_manifest, FilelistOptions, Manifest};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"").unwrap();
}

#[test]
fn empty_root_produces_valid_empty_manifest() {
    let tmp = TempDir::new().unwrap();
    let outfile = tmp.path().join("filelist.json");

    let opts = FilelistOptions {
        root_dir: tmp.path().join("does-not-exist"),
        ..Default::default()
    };
    let manifest = build_manifest(&opts).unwrap();
    manifest.write(&outfile).unwrap();

    let parsed: Manifest = serde_json::from_str(&fs::read_to_string(&outfile).unwrap()).unwrap();
    assert!(parsed.data.is_empty());
}

#[test]
fn written_manifest_parses_back_with_matched_file_count() {
    let tmp = TempDir::new().unwrap();
    let images = tmp.path().join("images");
    let sub = images.join("G254");
    fs::create_dir_all(&sub).unwrap();

    touch(&images, "askap_G001_cutout.fits");
    touch(&images, "wise_12_G001_cutout.fits");
    touch(&images, "notes.txt");
    touch(&sub, "higal_70_G254_cutout.fits");
    touch(&sub, "askap_G254_badpix.fits");

    let outfile = tmp.path().join("filelist.json");
    let opts = FilelistOptions {
        root_dir: images.clone(),
        recursive: true,
        exclude_patterns: vec!["badpix".to_string()],
        sname_strip_patterns: vec!["_cutout".to_string()],
        class_id: 2,
        class_label: "GALAXY".to_string(),
        ..Default::default()
    };

    let manifest = build_manifest(&opts).unwrap();
    manifest.write(&outfile).unwrap();

    let parsed: Manifest = serde_json::from_str(&fs::read_to_string(&outfile).unwrap()).unwrap();
    // Matched on disk: 3 fits files after dropping notes.txt and the badpix one.
    assert_eq!(parsed.data.len(), 3);
    assert_eq!(parsed, manifest);

    // Root directory records come first (top-down walk), band-ordered within.
    let snames: Vec<&str> = parsed.data.iter().map(|r| r.sname.as_str()).collect();
    assert_eq!(
        snames,
        vec!["askap_G001", "wise_12_G001", "higal_70_G254"]
    );
    for record in &parsed.data {
        assert_eq!(record.id, 2);
        assert_eq!(record.label, "GALAXY");
        assert_eq!(record.normalizable, vec![1]);
        assert_eq!(record.filepaths.len(), 1);
    }
}
