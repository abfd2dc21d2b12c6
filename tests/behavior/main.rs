use libtest_mimic::{Arguments, Trial};

#[macro_use]
mod macros;

mod operations;
mod utils;

pub const SKIP_ENV: &str = "ITEM_SELECTOR_SKIP_BEHAVIOR";

fn main() {
    if std::env::var(SKIP_ENV).is_ok() {
        eprintln!("behavior suite skipped because {SKIP_ENV} is set");
        return;
    }

    let args = Arguments::from_args();

    let mut tests: Vec<Trial> = Vec::new();
    operations::select::tests(&mut tests);
    operations::catalog::tests(&mut tests);
    operations::config::tests(&mut tests);

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    libtest_mimic::run(&args, tests).exit();
}
