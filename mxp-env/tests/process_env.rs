//! Reads the real process environment without modifying it.

#[test]
fn vars_snapshot_matches_process() {
    let snapshot = mxp_env::vars();
    assert_eq!(
        snapshot.contains("PATH"),
        std::env::var_os("PATH").is_some()
    );
}

#[test]
fn var_reads_process_value() {
    let expected = std::env::var("PATH").ok();
    assert_eq!(mxp_env::var("PATH").as_string(), expected);
}

#[test]
fn var_or_falls_back_for_unset_name() {
    let var = mxp_env::var_or("MXP_ENV_TEST_UNSET_8F3A", "true");
    assert_eq!(var.as_bool().expect("bool"), Some(true));
}

#[test]
fn unset_required_variable_fails() {
    let err = mxp_env::var("MXP_ENV_TEST_UNSET_8F3A")
        .required()
        .expect_err("unset");
    assert!(err.is_missing());
}
