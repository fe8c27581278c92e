//! Scenario loader.

use std::collections::HashSet;
use std::path::Path;

use interaction_core::config::secs_to_duration;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

/// Loader for simulation scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file and check its references.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        validate(&scenario)?;
        Ok(scenario)
    }
}

fn validate(scenario: &Scenario) -> LoadResult<()> {
    let mut ids = HashSet::new();
    for target in &scenario.targets {
        if !ids.insert(target.id.as_str()) {
            anyhow::bail!("Duplicate target id '{}'", target.id);
        }
        if let Some(secs) = target.hold_secs {
            secs_to_duration("hold_secs", secs)
                .map_err(|e| anyhow::anyhow!("Target '{}': {}", target.id, e))?;
        }
        if !(target.distance.is_finite() && target.distance >= 0.0) {
            anyhow::bail!("Target '{}': distance must be non-negative", target.id);
        }
    }

    for (index, frame) in scenario.frames.iter().enumerate() {
        let aimed = frame.aim.as_ref().map(|aim| aim.target.as_str());
        let toggled = frame.set_available.iter().map(|(id, _)| id.as_str());
        for id in aimed.into_iter().chain(toggled) {
            if !ids.contains(id) {
                anyhow::bail!("Frame {}: unknown target '{}'", index, id);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use interaction_core::InteractionMode;

    const SCENARIO: &str = r#"
        Scenario(
            targets: [
                TargetSpec(id: "door", label: "Open", mode: Hold, hold_secs: Some(1.0), distance: 2.0),
                TargetSpec(id: "lamp", label: "Toggle", distance: 1.0, layer: 3),
            ],
            frames: [
                FrameSpec(dt_ms: 100, aim: Some(Aim(target: "door")), down: true),
                FrameSpec(dt_ms: 100, set_available: [("lamp", false)]),
            ],
        )
    "#;

    #[test]
    fn parses_with_defaults() {
        let scenario = ScenarioLoader::parse(SCENARIO).unwrap();

        let door = scenario.target("door").unwrap();
        assert_eq!(door.mode, InteractionMode::Hold);
        assert!(door.available);
        assert_eq!(door.radius, 0.5);

        let lamp = scenario.target("lamp").unwrap();
        assert_eq!(lamp.mode, InteractionMode::Inherit);
        assert_eq!(lamp.layer, 3);

        assert_eq!(scenario.frames.len(), 2);
        assert!(scenario.frames[1].aim.is_none());
        assert!(!scenario.frames[1].down);
        assert_eq!(scenario.duration().as_millis(), 200);
    }

    #[test]
    fn rejects_unknown_target_reference() {
        let err = ScenarioLoader::parse(
            r#"Scenario(targets: [], frames: [FrameSpec(aim: Some(Aim(target: "ghost")))])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = ScenarioLoader::parse(
            r#"Scenario(
                targets: [
                    TargetSpec(id: "a", label: "A", distance: 1.0),
                    TargetSpec(id: "a", label: "B", distance: 1.0),
                ],
                frames: [],
            )"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }
}
