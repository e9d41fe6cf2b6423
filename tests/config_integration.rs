// SPDX-License-Identifier: MPL-2.0
use iced::Size;
use iced_toast::config::{self, AnimationConfig, Config, ToastConfig};
use iced_toast::domain::{LifecycleState, ToastPosition};
use iced_toast::overlay::Overlay;
use iced_toast::toast::{ToastController, ToastRequest};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn saved_config_drives_controller_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("IcedToast").join("toast.toml");

    let config = Config {
        toast: ToastConfig {
            decay_secs: Some(1.0),
            position: Some(ToastPosition::Bottom),
        },
        animation: AnimationConfig {
            fade_in_secs: Some(0.25),
            ..AnimationConfig::default()
        },
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, config);

    let start = Instant::now();
    let overlay = Overlay::new(start);
    overlay.resize(Size::new(400.0, 800.0));
    let controller = ToastController::with_config(overlay.host(), &loaded);
    let handle = controller
        .present(ToastRequest::new("Saved"))
        .expect("overlay should provide a surface");

    let view = handle.view().expect("attached");
    assert_eq!(view.content().position, ToastPosition::Bottom);

    overlay.tick(start + Duration::from_millis(300));
    assert_eq!(handle.state(), LifecycleState::Visible);

    // Decay of 1 s from `show`, then the 1 s fade.
    overlay.tick(start + Duration::from_millis(950));
    assert_eq!(handle.state(), LifecycleState::Visible);
    overlay.tick(start + Duration::from_millis(1050));
    assert_eq!(handle.state(), LifecycleState::Dismissing);
    overlay.tick(start + Duration::from_millis(2100));
    assert!(handle.is_removed());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("toast.toml");
    std::fs::write(&path, "this is = not [valid toml").expect("Failed to write file");

    let loaded = config::load_from_path(&path).expect("invalid TOML is not an error");
    assert_eq!(loaded, Config::default());
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let result = config::load_from_path(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(iced_toast::error::Error::Io(_))));
}
