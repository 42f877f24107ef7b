//! End-to-end checks for the compute side of the pipeline: sequence
//! generation, summary reporting, polar mapping and config handling.

use std::f64::consts::FRAC_PI_2;

use antlion::color::ColorScheme;
use antlion::config::Config;
use antlion::{plot, polar};
use antlion::sequence::{collatz_sequence, print_summary, SequenceStats};

#[test]
fn reference_trajectory_flows_through_every_stage() {
    let seq = collatz_sequence(27).unwrap();
    let stats = SequenceStats::from_sequence(&seq);
    assert_eq!(stats.start, 27);
    assert_eq!(stats.max_value, 9232);
    assert_eq!(stats.steps, 111);
    assert_eq!(stats.final_value, 1);

    let points = polar::map_sequence(&seq);
    assert_eq!(points.len(), seq.len());
    // The exit value 1 sits at the origin on the center line.
    let last = points.last().unwrap();
    assert_eq!(last.radius, 0.0);
    assert_eq!(last.theta, FRAC_PI_2);

    let r_max = points.iter().map(|p| p.radius).fold(0.0f64, f64::max);
    assert!((r_max - (9232f64).log2()).abs() < 1e-9);
    assert_eq!(polar::radial_ticks(r_max).len(), 14);
}

#[test]
fn single_element_run_renders_markers_only() {
    // n = 1 yields [1]: no edges to draw, just the frame and the
    // coinciding start/exit markers at the origin.
    let seq = collatz_sequence(1).unwrap();
    assert!(seq.windows(2).next().is_none());

    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.output.path = dir.path().join("pit.png");
    plot::render(&seq, &config).unwrap();

    let written = std::fs::metadata(&config.output.path).unwrap();
    assert!(written.len() > 0);
}

#[test]
fn summary_lists_the_whole_sequence() {
    let seq = collatz_sequence(6).unwrap();
    let mut out = Vec::new();
    print_summary(&seq, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("[6, 3, 10, 5, 16, 8, 4, 2, 1]"));
    assert!(text.contains("Max value: 16"));
}

#[test]
fn config_loads_from_a_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[plot]
color_scheme = "ocean"
width = 640
height = 480
marker_size = 3
central_axis = false
legend = false

[output]
path = "deep.svg"
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.plot.color_scheme, ColorScheme::Ocean);
    assert_eq!((config.plot.width, config.plot.height), (640, 480));
    assert!(!config.plot.central_axis);
    assert_eq!(config.output.path.to_str(), Some("deep.svg"));
}

#[test]
fn generated_template_is_loadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, Config::generate_config_template()).unwrap();
    let config = Config::load(&path).unwrap();
    assert_eq!(config.plot.color_scheme, ColorScheme::Classic);
}

#[test]
fn broken_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "plot = \"not a table\"").unwrap();
    assert!(Config::load(&path).is_err());
}
