//! File-level export/import round trips across the registry.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use swatchery_codec::{CodecError, Format, export_to_path, import_from_path};
use swatchery_color::Color;

fn test_temp_dir(test_name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be monotonic")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "swatchery-codec-{test_name}-{stamp}-{}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("temporary directory should be created");
    dir
}

fn sample_colors() -> Vec<Color> {
    vec![
        Color::new(255, 85, 0),
        Color::new(18, 52, 86),
        Color::new(0, 255, 0),
    ]
}

#[test]
fn every_decodable_format_round_trips_through_files() {
    let root = test_temp_dir("round_trip");
    let colors = sample_colors();

    for format in Format::ALL {
        if !format.supports_decode() {
            continue;
        }
        let path = root.join(format!("palette.{format}"));
        export_to_path(&path, format, &colors, "Disk Trip")
            .unwrap_or_else(|err| panic!("{format} export failed: {err}"));
        let palette = import_from_path(&path)
            .unwrap_or_else(|err| panic!("{format} import failed: {err}"));
        assert_eq!(palette.colors(), colors.as_slice(), "{format}");
    }

    fs::remove_dir_all(&root).expect("temporary directory should be removed");
}

#[test]
fn extensionless_files_are_sniffed() {
    let root = test_temp_dir("sniff");
    let colors = sample_colors();

    for format in [Format::Ase, Format::Aco, Format::Gpl, Format::Json] {
        let path = root.join(format!("swatches-{format}"));
        export_to_path(&path, format, &colors, "No Extension")
            .unwrap_or_else(|err| panic!("{format} export failed: {err}"));
        let palette = import_from_path(&path)
            .unwrap_or_else(|err| panic!("{format} sniffed import failed: {err}"));
        assert_eq!(palette.colors(), colors.as_slice(), "{format}");
    }

    fs::remove_dir_all(&root).expect("temporary directory should be removed");
}

#[test]
fn unrecognizable_files_are_rejected() {
    let root = test_temp_dir("reject");
    let path = root.join("mystery");
    fs::write(&path, "nothing colorful here").expect("test payload should be written");

    assert!(matches!(
        import_from_path(&path),
        Err(CodecError::UnsupportedFormat(_))
    ));

    fs::remove_dir_all(&root).expect("temporary directory should be removed");
}

#[test]
fn truncated_binary_files_fail_closed() {
    let root = test_temp_dir("truncated");
    let path = root.join("palette.ase");
    export_to_path(&path, Format::Ase, &sample_colors(), "Cut Short")
        .expect("export should succeed");

    let bytes = fs::read(&path).expect("file should be readable");
    fs::write(&path, &bytes[..bytes.len() / 2]).expect("truncation should be written");

    assert!(matches!(
        import_from_path(&path),
        Err(CodecError::Decode { .. })
    ));

    fs::remove_dir_all(&root).expect("temporary directory should be removed");
}
