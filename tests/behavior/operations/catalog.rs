use crate::utils::*;
use predicates::prelude::*;

register_behavior_tests!(
    test_catalog_toml_records,
    test_catalog_json_with_display,
    test_catalog_mismatched_lengths_fails,
    test_catalog_conflicts_with_items,
);

const ARMORY: &str = r#"
limit = 2
items = [
    "Sword",
    { name = "Arrow", ask_for_count = true, keep_when_selected = true },
]

[options]
item_type = "weapon"
"#;

fn test_catalog_toml_records() -> BehaviorResult {
    let fixture = Fixture::new();
    let catalog = fixture.write("armory.toml", ARMORY);
    let assert = fixture
        .select_with(&["Arrow", "12 arrows", "Sword"])
        .arg("--catalog")
        .arg(&catalog)
        .args(["--format", "count"])
        .assert()
        .success();

    assert_eq!(stdout_of(assert.get_output()), "12x Arrow, 1x Sword");
    Ok(())
}

fn test_catalog_json_with_display() -> BehaviorResult {
    let fixture = Fixture::new();
    let catalog = fixture.write(
        "cards.json",
        r#"{
            "display": ["Ace of spades", "King of hearts"],
            "items": [{ "name": "AS" }, { "name": "KH" }],
            "options": { "itemType": "card" }
        }"#,
    );
    let assert = fixture
        .select_with(&["King of hearts", "== Done =="])
        .arg("--catalog")
        .arg(&catalog)
        .args(["--format", "count"])
        .assert()
        .success();

    assert_eq!(stdout_of(assert.get_output()), "1x KH");
    Ok(())
}

fn test_catalog_mismatched_lengths_fails() -> BehaviorResult {
    let fixture = Fixture::new();
    let catalog = fixture.write(
        "broken.toml",
        "display = [\"One\", \"Two\"]\nitems = [\"One\"]\n",
    );
    fixture
        .select_with(&["One"])
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("same number of elements"));
    Ok(())
}

fn test_catalog_conflicts_with_items() -> BehaviorResult {
    let fixture = Fixture::new();
    let catalog = fixture.write("armory.toml", ARMORY);
    fixture
        .select_with(&[])
        .arg("--catalog")
        .arg(&catalog)
        .arg("Shield")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
    Ok(())
}
