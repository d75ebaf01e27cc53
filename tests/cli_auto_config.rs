mod common;

use common::*;

#[test]
fn auto_config_writes_both_files() {
    let env = TestEnv::with_files(SHOP_FILES);

    let result = env.run(&["auto-config", "--title", "shop"]);
    assert!(result.success, "{}", result.combined_output());

    let auto = env.read_project_file(".agentrules/config_auto.yaml");
    let detected = env.read_project_file(".agentrules/detected_config.yaml");
    assert_eq!(auto, detected);
    assert!(auto.contains("project_title: shop"));
    assert!(auto.contains("tree_focus"));
    assert!(!auto.contains("node_modules/react"));
}

#[test]
fn detected_config_is_used_only_when_asked() {
    let env = TestEnv::with_files(SHOP_FILES);
    env.write_config(SHOP_CONFIG);
    assert!(env.run(&["auto-config"]).success);

    let plain = env.run(&["--json", "generate", "--dry-run"]).json_lines().pop().unwrap();
    let plain_path = plain["config"]["path"].as_str().unwrap();
    assert!(plain_path.ends_with("config.yaml") && !plain_path.contains("detected"));

    let detected = env
        .run(&["--json", "generate", "--dry-run", "--use-detected"])
        .json_lines()
        .pop()
        .unwrap();
    assert!(detected["config"]["path"]
        .as_str()
        .unwrap()
        .ends_with("detected_config.yaml"));
}

#[test]
fn init_with_yes_writes_config_and_generates() {
    let env = TestEnv::with_files(SHOP_FILES);

    let result = env.run(&["init", "-y", "--title", "shop"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(env.read_project_file(".agentrules/config.yaml").contains("project_title: shop"));
    assert!(result.stdout.contains("Generation Complete"));
}

#[test]
fn init_refuses_to_overwrite_without_yes() {
    let env = TestEnv::with_files(SHOP_FILES);
    env.write_config(SHOP_CONFIG);

    let result = env.run(&["init"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("already exists"));
    assert_eq!(env.read_project_file(".agentrules/config.yaml"), SHOP_CONFIG);
}
