use std::io::Write;

use interaction_content::{ConfigLoader, ScenarioLoader};
use interaction_core::{InteractionMode, TriggerMode};

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn loads_config_from_disk() {
    let file = write_temp(
        ".toml",
        r#"
        [detection]
        interact_distance = 4.5
        interactable_mask = 1

        [input]
        hold_to_interact = true
        hold_duration_secs = 0.75
        "#,
    );

    let config = ConfigLoader::load(file.path()).expect("config loads");
    assert_eq!(config.detection.interact_distance, 4.5);
    assert_eq!(config.detection.interactable_mask, 1);
    assert_eq!(config.detection.sphere_radius, 0.05);

    let defaults = config.trigger_defaults().expect("valid defaults");
    assert_eq!(defaults.mode, TriggerMode::Hold);
    assert_eq!(defaults.hold_duration.as_millis(), 750);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    let err = ConfigLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn loads_scenario_with_custom_prompt() {
    let file = write_temp(
        ".ron",
        r#"
        Scenario(
            targets: [
                TargetSpec(
                    id: "vault",
                    label: "Open",
                    mode: Press,
                    available: false,
                    distance: 1.5,
                    prompt: Some(PromptDescriptor(
                        label: "Open",
                        unavailable_label: "Locked",
                        show_when_unavailable: true,
                    )),
                ),
            ],
            frames: [
                FrameSpec(dt_ms: 16, aim: Some(Aim(target: "vault", offset: 0.2)), down: true),
            ],
        )
        "#,
    );

    let scenario = ScenarioLoader::load(file.path()).expect("scenario loads");
    let vault = scenario.target("vault").expect("vault exists");
    assert_eq!(vault.mode, InteractionMode::Press);
    assert!(!vault.available);

    let prompt = vault.prompt.as_ref().expect("custom prompt");
    assert_eq!(prompt.unavailable_label, "Locked");
    assert!(prompt.show_when_unavailable);
    assert!(!prompt.is_full_sentence);

    let aim = scenario.frames[0].aim.as_ref().expect("aimed frame");
    assert_eq!(aim.offset, 0.2);
}

#[test]
fn rejects_negative_hold_override() {
    let file = write_temp(
        ".ron",
        r#"Scenario(
            targets: [TargetSpec(id: "lever", label: "Pull", hold_secs: Some(-1.0), distance: 1.0)],
            frames: [],
        )"#,
    );
    let err = ScenarioLoader::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("lever"));
}
