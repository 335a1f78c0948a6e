//! CLI round trips through the raw RGBA transport.

use std::process::Command;

use tempfile::tempdir;

fn ditherlab() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ditherlab"))
}

const GRAYSCALE_LEVELS: [u8; 8] = [0, 36, 73, 109, 146, 182, 219, 255];

#[test]
fn test_gradient_then_render_round_trip() {
    let dir = tempdir().unwrap();
    let gradient = dir.path().join("gradient.rgba");
    let params = dir.path().join("params.json");
    let output = dir.path().join("out.rgba");

    let status = ditherlab()
        .args(["gradient", "--width", "32", "--height", "8", "--output"])
        .arg(&gradient)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(std::fs::read(&gradient).unwrap().len(), 32 * 8 * 4);

    std::fs::write(
        &params,
        r#"{
            "adjustments": {"contrast": 140},
            "dither": {"algorithm": "atkinson", "palette": "grayscale"}
        }"#,
    )
    .unwrap();

    let status = ditherlab()
        .args(["render", "--width", "32", "--height", "8"])
        .arg("--input")
        .arg(&gradient)
        .arg("--output")
        .arg(&output)
        .arg("--params")
        .arg(&params)
        .status()
        .unwrap();
    assert!(status.success());

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(bytes.len(), 32 * 8 * 4);
    for pixel in bytes.chunks(4) {
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
        assert!(GRAYSCALE_LEVELS.contains(&pixel[0]));
        assert_eq!(pixel[3], 255);
    }
}

#[test]
fn test_render_flags_override_params_file() {
    let dir = tempdir().unwrap();
    let gradient = dir.path().join("gradient.rgba");
    let params = dir.path().join("params.json");
    let bw_out = dir.path().join("bw.rgba");

    ditherlab()
        .args(["gradient", "--width", "16", "--height", "4", "--output"])
        .arg(&gradient)
        .status()
        .unwrap();

    std::fs::write(&params, r#"{"dither": {"palette": "grayscale"}}"#).unwrap();

    let status = ditherlab()
        .args(["render", "--width", "16", "--height", "4", "--palette", "bw"])
        .arg("--input")
        .arg(&gradient)
        .arg("--output")
        .arg(&bw_out)
        .arg("--params")
        .arg(&params)
        .status()
        .unwrap();
    assert!(status.success());

    // The flag wins: output is strictly two-tone.
    let bytes = std::fs::read(&bw_out).unwrap();
    for pixel in bytes.chunks(4) {
        assert!(pixel[0] == 0 || pixel[0] == 255);
    }
}

#[test]
fn test_render_rejects_mismatched_dimensions() {
    let dir = tempdir().unwrap();
    let gradient = dir.path().join("gradient.rgba");
    let output = dir.path().join("out.rgba");

    ditherlab()
        .args(["gradient", "--width", "32", "--height", "8", "--output"])
        .arg(&gradient)
        .status()
        .unwrap();

    // Declared dimensions disagree with the file's byte count.
    let status = ditherlab()
        .args(["render", "--width", "10", "--height", "10"])
        .arg("--input")
        .arg(&gradient)
        .arg("--output")
        .arg(&output)
        .status()
        .unwrap();
    assert!(!status.success());
    assert!(!output.exists());
}
