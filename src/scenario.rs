//! Recorded input scenarios
//!
//! A scenario is a TOML list of frames (touch sample, debug keys, gates)
//! that can be replayed through a recognizer without a touch screen.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::{
    DebugKey, GestureEvent, GestureRecognizer, InputGates, PointerSample, ScreenSize, TickInput,
    TouchPhase,
};
use crate::{Error, Result};

fn default_dt() -> f64 { 1.0 / 60.0 }
fn default_enabled() -> bool { true }

/// Touch state for one recorded frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchRecord {
    pub x: f64,
    pub y: f64,
    pub phase: TouchPhase,
}

/// One recorded frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    /// Seconds since the previous frame
    #[serde(default = "default_dt")]
    pub dt: f64,
    #[serde(default)]
    pub touch: Option<TouchRecord>,
    #[serde(default)]
    pub keys: Vec<DebugKey>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub special_mode: bool,
}

/// A recorded input session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub screen: ScreenSize,
    #[serde(default, rename = "tick")]
    pub ticks: Vec<TickRecord>,
}

/// A gesture produced while replaying, tagged with its frame index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReplayEvent {
    pub tick: usize,
    pub event: GestureEvent,
}

impl Scenario {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(contents)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let scenario = Self::from_toml_str(&contents)?;
        tracing::info!(ticks = scenario.ticks.len(), "Loaded scenario from {:?}", path);
        Ok(scenario)
    }

    fn validate(&self) -> Result<()> {
        if let Some((i, tick)) = self
            .ticks
            .iter()
            .enumerate()
            .find(|(_, t)| !t.dt.is_finite() || t.dt < 0.0)
        {
            return Err(Error::InvalidScenario(format!(
                "tick {} has invalid dt {}",
                i, tick.dt
            )));
        }
        Ok(())
    }

    /// Convert recorded frames into recognizer input.
    ///
    /// Sample timestamps are the running sum of frame deltas.
    pub fn tick_inputs(&self) -> Vec<TickInput> {
        let mut elapsed = 0.0;
        self.ticks
            .iter()
            .map(|tick| {
                elapsed += tick.dt;
                let gates = InputGates {
                    input_enabled: tick.enabled,
                    special_mode: tick.special_mode,
                };
                TickInput {
                    pointer: tick
                        .touch
                        .map(|t| PointerSample::new(t.x, t.y, t.phase, elapsed)),
                    keys: tick.keys.clone(),
                    delta_time: tick.dt,
                    screen: self.screen,
                    gates,
                }
            })
            .collect()
    }
}

/// Feed every frame of a scenario through the recognizer
pub fn replay(recognizer: &mut GestureRecognizer, scenario: &Scenario) -> Vec<ReplayEvent> {
    let mut out = Vec::new();
    for (tick, input) in scenario.tick_inputs().iter().enumerate() {
        let frame = recognizer.update(input);
        out.extend(frame.events.into_iter().map(|event| ReplayEvent { tick, event }));
    }
    tracing::debug!(events = out.len(), "Replay finished");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWIPE_AND_KEYS: &str = r#"
[screen]
width = 1000.0
height = 2000.0

[[tick]]
dt = 0.016
touch = { x = 500.0, y = 1000.0, phase = "began" }

[[tick]]
dt = 0.016
touch = { x = 520.0, y = 1000.0, phase = "moved" }

[[tick]]
dt = 0.016
touch = { x = 520.0, y = 1000.0, phase = "ended" }

[[tick]]
keys = ["left", "space"]
"#;

    #[test]
    fn test_parse_scenario() {
        let scenario = Scenario::from_toml_str(SWIPE_AND_KEYS).unwrap();
        assert_eq!(scenario.ticks.len(), 4);
        assert!(scenario.ticks[3].enabled);
        assert!((scenario.ticks[3].dt - 1.0 / 60.0).abs() < 1e-12);
        assert_eq!(scenario.ticks[3].keys, vec![DebugKey::Left, DebugKey::DoubleTap]);
    }

    #[test]
    fn test_timestamps_accumulate() {
        let scenario = Scenario::from_toml_str(SWIPE_AND_KEYS).unwrap();
        let inputs = scenario.tick_inputs();
        let ts = inputs[1].pointer.unwrap().timestamp;
        assert!((ts - 0.032).abs() < 1e-9);
    }

    #[test]
    fn test_replay() {
        let scenario = Scenario::from_toml_str(SWIPE_AND_KEYS).unwrap();
        let mut recognizer = GestureRecognizer::default();
        let events = replay(&mut recognizer, &scenario);
        assert_eq!(
            events,
            vec![
                ReplayEvent { tick: 1, event: GestureEvent::SwipeRight },
                ReplayEvent { tick: 3, event: GestureEvent::SwipeLeft },
                ReplayEvent { tick: 3, event: GestureEvent::DoubleTap },
            ]
        );
    }

    #[test]
    fn test_disabled_ticks_are_dropped() {
        let contents = r#"
[screen]
width = 1000.0
height = 2000.0

[[tick]]
enabled = false
touch = { x = 500.0, y = 1000.0, phase = "began" }
keys = ["e"]
"#;
        let scenario = Scenario::from_toml_str(contents).unwrap();
        let mut recognizer = GestureRecognizer::default();
        assert!(replay(&mut recognizer, &scenario).is_empty());
        assert_eq!(recognizer.tap_count(), 0);
    }

    #[test]
    fn test_bundled_scenario() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/swipe_and_double_tap.toml");
        let scenario = Scenario::load(path).unwrap();
        let config_path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/gesture.toml");
        let config = crate::GestureConfig::load(config_path).unwrap();

        let mut recognizer = GestureRecognizer::new(config);
        let events: Vec<_> = replay(&mut recognizer, &scenario)
            .into_iter()
            .map(|r| r.event)
            .collect();
        assert_eq!(
            events,
            vec![
                GestureEvent::SwipeRight,
                GestureEvent::DoubleTap,
                GestureEvent::SingleTap,
                GestureEvent::SwipeDown,
            ]
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let contents = r#"
[screen]
width = 1000.0
height = 2000.0

[[tick]]
keys = ["escape"]
"#;
        assert!(Scenario::from_toml_str(contents).is_err());
    }

    #[test]
    fn test_negative_dt_rejected() {
        let contents = r#"
[screen]
width = 1000.0
height = 2000.0

[[tick]]
dt = -0.5
"#;
        let err = Scenario::from_toml_str(contents).unwrap_err();
        assert!(matches!(err, Error::InvalidScenario(_)));
    }
}
