use crate::utils::*;
use predicates::prelude::*;

register_behavior_tests!(
    test_config_path_uses_env_override,
    test_config_init_then_show,
    test_config_init_refuses_overwrite_non_interactive,
    test_config_init_confirms_overwrite,
    test_config_preset_applies_to_select,
    test_config_unknown_preset_fails,
    test_config_env_override,
    test_config_ignores_inherited_environment,
);

fn test_config_path_uses_env_override() -> BehaviorResult {
    let fixture = Fixture::new();
    let assert = fixture.cmd().args(["config", "path"]).assert().success();

    assert_eq!(
        stdout_of(assert.get_output()),
        fixture.config_path().display().to_string()
    );
    Ok(())
}

fn test_config_init_then_show() -> BehaviorResult {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config template written"));
    assert!(fixture.config_path().exists());

    // The template is fully commented out, so only defaults apply.
    fixture
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Configuration sources: defaults"))
        .stdout(predicate::str::contains("finished_name = \"== Done ==\""));
    Ok(())
}

fn test_config_init_refuses_overwrite_non_interactive() -> BehaviorResult {
    let fixture = Fixture::new();
    fixture.write("config.toml", "item_type = \"card\"\n");
    fixture
        .cmd()
        .args(["--non-interactive", "config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(fixture.config_path())?;
    assert_eq!(content, "item_type = \"card\"\n");
    Ok(())
}

fn test_config_init_confirms_overwrite() -> BehaviorResult {
    let fixture = Fixture::new();
    fixture.write("config.toml", "item_type = \"card\"\n");
    let script = fixture.answers(&["yes"]);
    fixture
        .cmd()
        .arg("--answers")
        .arg(script)
        .args(["config", "init"])
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.config_path())?;
    assert!(content.starts_with("# item-selector configuration"));
    Ok(())
}

fn test_config_preset_applies_to_select() -> BehaviorResult {
    let fixture = Fixture::new();
    fixture.write(
        "config.toml",
        "finished_name = \"Stop\"\n\n[presets.loot]\naskForCount = true\n",
    );
    let assert = fixture
        .select_with(&["Gold", "30", "Stop"])
        .args(["--preset", "loot", "--format", "count", "Gold", "Gem"])
        .assert()
        .success();

    assert_eq!(stdout_of(assert.get_output()), "30x Gold");
    Ok(())
}

fn test_config_unknown_preset_fails() -> BehaviorResult {
    let fixture = Fixture::new();
    fixture.write("config.toml", "[presets.loot]\nask_for_count = true\n");
    fixture
        .cmd()
        .args(["config", "show", "--preset", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Preset 'missing' not found"))
        .stderr(predicate::str::contains("loot"));
    Ok(())
}

fn test_config_env_override() -> BehaviorResult {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .env("ITEM_SELECTOR_ITEM_TYPE", "card")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ITEM_SELECTOR_ITEM_TYPE"))
        .stdout(predicate::str::contains("item_type = \"card\""));
    Ok(())
}

fn test_config_ignores_inherited_environment() -> BehaviorResult {
    let fixture = Fixture::new();
    let mut cmd = assert_cmd::Command::cargo_bin("item-selector")?;
    cmd.env("ITEM_SELECTOR_ITEM_TYPE", "card")
        .env("ITEM_SELECTOR_ANSWERS", fixture.path("missing-answers.txt"));
    fixture.isolate(&mut cmd);

    cmd.args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Configuration sources: defaults\n"))
        .stdout(predicate::str::contains("item_type = \"item\""));
    Ok(())
}
