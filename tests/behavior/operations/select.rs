use crate::utils::*;
use predicates::prelude::*;

register_behavior_tests!(
    test_select_respects_limit,
    test_select_other_entry,
    test_select_counts_joined,
    test_select_finished_ends_early,
    test_select_keep_selected_items,
    test_select_attributes_wrap_names,
    test_select_template_output,
    test_select_json_report,
    test_select_negative_limit_fails,
    test_select_non_interactive_fails,
    test_select_script_mismatch_fails,
);

fn test_select_respects_limit() -> BehaviorResult {
    let fixture = Fixture::new();
    let assert = fixture
        .select_with(&["Apple"])
        .args(["--limit", "1", "Apple", "Banana"])
        .assert()
        .success();

    assert_eq!(stdout_of(assert.get_output()), "Apple");
    Ok(())
}

fn test_select_other_entry() -> BehaviorResult {
    let fixture = Fixture::new();
    let assert = fixture
        .select_with(&["== Other ==", "Mango", "== Done =="])
        .args(["--show-other", "Apple", "Banana"])
        .assert()
        .success();

    assert_eq!(stdout_of(assert.get_output()), "Mango");
    Ok(())
}

fn test_select_counts_joined() -> BehaviorResult {
    let fixture = Fixture::new();
    let assert = fixture
        .select_with(&["Sword", "2", "Shield", "abc", "3"])
        .args(["--ask-count", "--format", "count", "Sword", "Shield"])
        .assert()
        .success();

    assert_eq!(stdout_of(assert.get_output()), "2x Sword, 3x Shield");
    Ok(())
}

fn test_select_finished_ends_early() -> BehaviorResult {
    let fixture = Fixture::new();
    let assert = fixture
        .select_with(&["@3", "== Done =="])
        .args(["Sword", "Shield", "Bow"])
        .assert()
        .success();

    assert_eq!(stdout_of(assert.get_output()), "Shield");
    Ok(())
}

fn test_select_keep_selected_items() -> BehaviorResult {
    let fixture = Fixture::new();
    let assert = fixture
        .select_with(&["Potion", "Potion", "Potion"])
        .args(["--keep-selected", "--limit", "3", "--hide-finished", "Potion"])
        .assert()
        .success();

    assert_eq!(stdout_of(assert.get_output()), "Potion, Potion, Potion");
    Ok(())
}

fn test_select_attributes_wrap_names() -> BehaviorResult {
    let fixture = Fixture::new();
    let assert = fixture
        .select_with(&["Sword", "bold", "Shield", "italic"])
        .args([
            "--ask-attributes",
            "--attribute",
            "bold,**,**",
            "--attribute",
            "italic,_,_",
            "--format",
            "attribute",
            "--limit",
            "2",
            "Sword",
            "Shield",
        ])
        .assert()
        .success();

    assert_eq!(stdout_of(assert.get_output()), "**Sword**, _Shield_");
    Ok(())
}

fn test_select_template_output() -> BehaviorResult {
    let fixture = Fixture::new();
    let assert = fixture
        .select_with(&["Sword", "2"])
        .args([
            "--ask-count",
            "--limit",
            "1",
            "--template",
            "- [ ] {count} {name}",
            "Sword",
        ])
        .assert()
        .success();

    assert_eq!(stdout_of(assert.get_output()), "- [ ] 2 Sword");
    Ok(())
}

fn test_select_json_report() -> BehaviorResult {
    let fixture = Fixture::new();
    let assert = fixture
        .select_with(&["Banana"])
        .args(["--format", "json", "--limit", "1", "Apple", "Banana"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_str(&stdout_of(assert.get_output()))?;
    assert_eq!(report["selectedDisplay"], serde_json::json!(["Banana"]));
    assert_eq!(report["remainingDisplay"], serde_json::json!(["Apple"]));
    assert_eq!(report["totalItemCount"], serde_json::json!(1));
    Ok(())
}

fn test_select_negative_limit_fails() -> BehaviorResult {
    let fixture = Fixture::new();
    fixture
        .select_with(&["Apple"])
        .args(["--limit", "-1", "Apple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid selection limit"));
    Ok(())
}

fn test_select_non_interactive_fails() -> BehaviorResult {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["--non-interactive", "select", "Apple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires interactive input"));
    Ok(())
}

fn test_select_script_mismatch_fails() -> BehaviorResult {
    let fixture = Fixture::new();
    fixture
        .select_with(&["Cherry"])
        .args(["Apple", "Banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Cherry' matches none of"));
    Ok(())
}
