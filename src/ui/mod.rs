pub mod blocks;
pub mod context;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

use agentrules::AgentRulesError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

/// Report a command failure: an `error` event with `--json`, a boxed
/// message on stderr otherwise.
pub fn render_error(err: &anyhow::Error, ui: &UiContext) {
    let message = format!("{:#}", err);
    if ui.json {
        let _ = json::emit(json::error_json(&message));
        return;
    }
    eprint!("{}", error_block(err, message).render(ui.color, ui.unicode));
}

fn error_block(err: &anyhow::Error, message: String) -> ErrorBlock {
    let Some(known) = err.downcast_ref::<AgentRulesError>() else {
        return ErrorBlock::new(message);
    };

    match known {
        AgentRulesError::ConfigNotFound { path } => ErrorBlock::new(message)
            .with_file(path)
            .with_fix("run `agentrules init` or `agentrules auto-config` to create one"),
        AgentRulesError::InvalidConfig { file, message: detail } => {
            let block = ErrorBlock::new(message)
                .with_file(file)
                .with_fix("correct the configuration file and rerun");
            match yaml_error_line(detail) {
                Some(line) => block.with_line(line).with_file_context(1, 1),
                None => block,
            }
        }
        AgentRulesError::DuplicateDomain { .. } | AgentRulesError::OutputCollision { .. } => {
            ErrorBlock::new(message).with_fix("give each tree_focus entry a distinct name")
        }
        AgentRulesError::InvalidPattern { .. } | AgentRulesError::EmptyDomainSpec { .. } => {
            ErrorBlock::new(message).with_fix("check the patterns listed under tree_focus")
        }
        AgentRulesError::ProjectNotFound { .. } => {
            ErrorBlock::new(message).with_fix("pass an existing directory with --path")
        }
        _ => ErrorBlock::new(message),
    }
}

/// `... at line 4 column 3` as reported by the YAML parser
fn yaml_error_line(detail: &str) -> Option<usize> {
    let rest = &detail[detail.rfind("at line ")? + "at line ".len()..];
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn yaml_line_is_extracted() {
        assert_eq!(
            yaml_error_line("tree_focus: invalid type: integer at line 2 column 13"),
            Some(2)
        );
        assert_eq!(yaml_error_line("missing field"), None);
    }

    #[test]
    fn duplicate_domain_gets_rename_hint() {
        let err = anyhow::Error::from(AgentRulesError::DuplicateDomain {
            name: "api".to_string(),
        });
        let rendered = error_block(&err, format!("{:#}", err)).render(false, false);
        assert!(rendered.contains("duplicate domain name 'api'"));
        assert!(rendered.contains("FIX: give each tree_focus entry a distinct name"));
    }

    #[test]
    fn missing_config_names_the_file() {
        let err = anyhow::Error::from(AgentRulesError::ConfigNotFound {
            path: PathBuf::from("custom.yaml"),
        });
        let rendered = error_block(&err, format!("{:#}", err)).render(false, false);
        assert!(rendered.contains("custom.yaml"));
        assert!(rendered.contains("agentrules init"));
    }
}
