macro_rules! register_behavior_tests {
    ($($test:ident),+ $(,)?) => {
        pub fn tests(tests: &mut Vec<libtest_mimic::Trial>) {
            $(
            tests.push(libtest_mimic::Trial::test(
                concat!("behavior::", stringify!($test)),
                || $test().map_err(|err| libtest_mimic::Failed::from(err.to_string())),
            ));
            )+
        }
    };
}
