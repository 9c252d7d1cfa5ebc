use std::path::PathBuf;

use walkthrough::core::{InputEvent, Key};
use walkthrough::frame::FrameInfo;
use walkthrough::{CameraStateUpdater, WalkthroughConfig};

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("walkthrough-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_load_overrides_only_named_fields() {
        let path = write_temp(
            "partial.json",
            r#"{
                "spawn_height": 5.0,
                "movement": { "step_distance": 0.5 },
                "bindings": { "forward": ["KeyS"], "back": ["KeyW"] }
            }"#,
        );

        let config = WalkthroughConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.spawn_height, 5.0);
        assert_eq!(config.movement.step_distance, 0.5);
        assert_eq!(config.movement.run_multiplier, 2.0);
        assert_eq!(config.jump, WalkthroughConfig::default().jump);
        assert_eq!(config.bindings.forward, vec![Key::KeyS]);
    }

    #[test]
    fn test_rebound_keys_drive_the_camera() {
        let config = WalkthroughConfig::from_json(
            r#"{ "breathing": { "walk_amplitude": 0.0 }, "bindings": { "forward": ["KeyS"], "back": ["KeyW"] } }"#,
        )
        .unwrap();
        let mut updater = CameraStateUpdater::new(&config);
        updater.push_event(InputEvent::KeyDown(Key::KeyS));

        let pose = updater.tick(&FrameInfo::fixed(0));
        assert!((pose.position.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_load_reports_path_on_bad_json() {
        let path = write_temp("broken.json", "{ spawn_height: ");
        let err = WalkthroughConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        let message = format!("{:#}", err);
        assert!(message.contains("broken.json"), "{}", message);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = WalkthroughConfig::from_json(
            r#"{ "bounds": { "min": [10.0, 0.0, 0.0], "max": [-10.0, 20.0, 5.0] } }"#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("exceeds max"));
    }

    #[test]
    fn test_zero_jump_duration_rejected() {
        assert!(WalkthroughConfig::from_json(r#"{ "jump": { "duration_ticks": 0 } }"#).is_err());
    }
}
