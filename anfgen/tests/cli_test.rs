use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn bin_under_test() -> escargot::CargoRun {
    escargot::CargoBuild::new()
        .bin("anfgen")
        .current_release()
        .current_target()
        .run()
        .expect("failed to build the anfgen binary")
}

#[test]
fn encode_mc_emits_and_gate_and_affine_operands() {
    let mut cmd = bin_under_test().command();
    cmd.arg("encode").arg("mc").arg("lac").arg("1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("t_0 = q_0 * q_1"))
        .stdout(predicate::str::contains(
            "q_0 = a_0 + a_1 * x_0 + a_2 * x_1 + a_3 * x_2 + a_4 * x_3",
        ));
}

#[test]
fn encode_bgc_emits_dual_exclusions() {
    let mut cmd = bin_under_test().command();
    cmd.arg("encode").arg("bgc").arg("ctc2").arg("2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("b_0 * b_2"))
        .stdout(predicate::str::contains("b_1 * b_2"));
}

#[test]
fn encode_depth_requires_width() {
    let mut cmd = bin_under_test().command();
    cmd.arg("encode").arg("depth").arg("lac").arg("3");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("required for mode=depth: width"));
}

#[test]
fn encode_rejects_unknown_cipher() {
    let mut cmd = bin_under_test().command();
    cmd.arg("encode").arg("gc").arg("des").arg("4");

    cmd.assert().failure().stderr(predicate::str::contains("unknown cipher"));
}

#[test]
fn encode_rejects_out_of_range_bound() {
    let mut cmd = bin_under_test().command();
    cmd.arg("encode").arg("mc").arg("lac").arg("0");

    cmd.assert().failure();
}

#[test]
fn translate_claim_round_trip() {
    let dir = std::env::temp_dir();
    let resolve_path = dir.join("anfgen_cli_round_trip.eqs.cnf.resolve");
    let claim_path = dir.join("anfgen_cli_round_trip.claim");
    fs::write(&resolve_path, "c\nc\nc\nc\nc\n1  signifies a_0\n2  signifies a_1\n").unwrap();
    fs::write(&claim_path, "SAT\n-1 2 0\n").unwrap();

    let mut cmd = bin_under_test().command();
    cmd.arg("translate").arg(&claim_path).arg(&resolve_path);
    cmd.assert().success().stdout(predicate::str::diff("a_0=0\na_1=1\n"));

    fs::remove_file(&resolve_path).unwrap();
    fs::remove_file(&claim_path).unwrap();
}

#[test]
fn translate_defaults_resolve_path_next_to_claim() {
    let dir = std::env::temp_dir();
    let resolve_path = dir.join("anfgen_cli_default.eqs.cnf.resolve");
    let claim_path = dir.join("anfgen_cli_default.eqs.cnf.claim");
    fs::write(&resolve_path, "c\nc\nc\nc\nc\n3  signifies t_0\n").unwrap();
    fs::write(&claim_path, "SAT\n3\n").unwrap();

    let mut cmd = bin_under_test().command();
    cmd.arg("translate").arg(&claim_path);
    cmd.assert().success().stdout(predicate::str::diff("t_0=1\n"));

    fs::remove_file(&resolve_path).unwrap();
    fs::remove_file(&claim_path).unwrap();
}

#[test]
fn list_names_registered_ciphers() {
    let mut cmd = bin_under_test().command();
    cmd.arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("present"))
        .stdout(predicate::str::contains("ascon"))
        .stdout(predicate::str::contains("5-bit"));
}
