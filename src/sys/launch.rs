use crate::config::{ButtonConfig, ExecCommand};
use crate::gui::menu::ButtonSpec;
use std::process::{Command, Stdio};

/// Launches a configured command, detached from the menu process. Failures
/// are logged and never propagate; a broken button is a no-op.
pub fn spawn(cmd: &ExecCommand) {
    let parts = match shell_words::split(cmd.as_str()) {
        Ok(parts) => parts,
        Err(e) => {
            log::error!("Invalid command '{}': {}", cmd, e);
            return;
        }
    };
    let Some((program, args)) = parts.split_first() else {
        return;
    };

    if let Err(e) = Command::new(program)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        log::error!("Failed to launch '{}': {}", cmd, e);
    }
}

/// Builds runtime button specs from file-side descriptors. Buttons without
/// an `exec` command get no action and stay inert when clicked.
pub fn button_specs(configs: &[ButtonConfig]) -> Vec<ButtonSpec> {
    configs
        .iter()
        .map(|cfg| {
            let mut spec = ButtonSpec::new(cfg.text.clone());
            if let Some(cmd) = cfg.exec.clone() {
                spec = spec.with_action(move || spawn(&cmd));
            }
            spec.background = cfg.background_color.map(|c| c.srgba());
            spec.border = cfg.border_color.map(|c| c.srgba());
            spec.text_color = cfg.text_color.map(|c| c.srgba());
            spec
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specs_mirror_the_config_entries() {
        let configs = vec![
            ButtonConfig {
                text: "Terminal".into(),
                exec: Some(ExecCommand::new("foot")),
                background_color: Some("#356".parse().unwrap()),
                border_color: None,
                text_color: None,
            },
            ButtonConfig {
                text: "Inert".into(),
                exec: None,
                background_color: None,
                border_color: None,
                text_color: None,
            },
        ];

        let specs = button_specs(&configs);
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].text, "Terminal");
        assert!(specs[0].action.is_some());
        assert!(specs[0].background.is_some());
        assert!(specs[1].action.is_none());
        assert!(specs[1].background.is_none());
    }
}
