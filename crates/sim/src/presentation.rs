//! Text rendering of frame outcomes.

use crate::simulation::FrameOutcome;

const BAR_WIDTH: usize = 10;

/// Formats one frame as a single log line.
pub fn render_line(outcome: &FrameOutcome) -> String {
    let focused = outcome.focused.as_deref().unwrap_or("-");
    let prompt = outcome.text.as_deref().unwrap_or("");
    let reticle = match (outcome.reticle.visible, outcome.reticle.icon) {
        (true, Some(icon)) => format!("icon#{}", icon.0),
        _ => "none".to_owned(),
    };

    let mut line = format!(
        "#{:03} {:>7.3}s focus={:<10} {} alpha={:.2} reticle={:<8} | {}",
        outcome.index,
        outcome.elapsed.as_secs_f32(),
        focused,
        progress_bar(outcome.progress),
        outcome.alpha,
        reticle,
        prompt,
    );
    if outcome.fired {
        line.push_str("  FIRED");
    }
    line
}

/// `[####------]` style bar for a progress in `[0, 1]`.
pub fn progress_bar(progress: f32) -> String {
    let filled = (progress.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use interaction_core::{IconId, ReticleStyle};

    use super::*;

    #[test]
    fn bar_fill() {
        assert_eq!(progress_bar(0.0), "[----------]");
        assert_eq!(progress_bar(0.4), "[####------]");
        assert_eq!(progress_bar(2.0), "[##########]");
    }

    #[test]
    fn line_marks_fire() {
        let outcome = FrameOutcome {
            index: 4,
            elapsed: Duration::from_millis(500),
            focused: Some("Open".into()),
            fired: true,
            text: Some("Hold E to Open".into()),
            progress: 1.0,
            alpha: 1.0,
            reticle: ReticleStyle::default().resolve(Some(IconId(3)), true),
        };

        let line = render_line(&outcome);
        assert!(line.starts_with("#004   0.500s focus=Open"));
        assert!(line.contains("reticle=icon#3"));
        assert!(line.contains("| Hold E to Open"));
        assert!(line.ends_with("FIRED"));
    }
}
