use assert_cmd::Command;
use item_selector::config::file::CONFIG_PATH_ENV;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Variables the binary reads besides the config path.
const SELECTOR_ENV: &[&str] = &[
    "ITEM_SELECTOR_ANSWERS",
    "ITEM_SELECTOR_SHOW_FINISHED",
    "ITEM_SELECTOR_FINISHED_NAME",
    "ITEM_SELECTOR_SHOW_OTHER",
    "ITEM_SELECTOR_OTHER_NAME",
    "ITEM_SELECTOR_ITEM_TYPE",
    "ITEM_SELECTOR_ITEM_TYPE_ARTICLE",
    "ITEM_SELECTOR_KEEP_SELECTED_ITEMS",
    "ITEM_SELECTOR_ASK_FOR_COUNT",
    "ITEM_SELECTOR_COUNT_OFFSET",
    "ITEM_SELECTOR_COUNT_NAME",
    "ITEM_SELECTOR_COUNT_SHOWN",
    "ITEM_SELECTOR_ASK_FOR_ATTRIBUTES",
    "ITEM_SELECTOR_ATTRIBUTE_LIST",
    "ITEM_SELECTOR_DEFAULT_ATTRIBUTE",
    "ITEM_SELECTOR_ATTRIBUTE_NAME",
    "ITEM_SELECTOR_ATTRIBUTE_ARTICLE",
];

pub type BehaviorResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Scratch directory holding the answer script, catalog and config for one case.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("write fixture file");
        path
    }

    pub fn answers(&self, answers: &[&str]) -> PathBuf {
        self.write("answers.txt", &(answers.join("\n") + "\n"))
    }

    pub fn config_path(&self) -> PathBuf {
        self.path("config.toml")
    }

    /// A command isolated from the user's own config file and environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("item-selector").expect("item-selector binary");
        self.isolate(&mut cmd);
        cmd
    }

    /// Drop inherited selector variables and point the binary at this
    /// fixture's config path.
    pub fn isolate(&self, cmd: &mut Command) {
        for key in SELECTOR_ENV {
            cmd.env_remove(key);
        }
        cmd.env(CONFIG_PATH_ENV, self.config_path());
    }

    pub fn select_with(&self, answers: &[&str]) -> Command {
        let script = self.answers(answers);
        let mut cmd = self.cmd();
        cmd.arg("--answers").arg(script).arg("select");
        cmd
    }
}

pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}
