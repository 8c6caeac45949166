use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "8"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 1);
    assert_eq!(v["summary"]["size"], 8);
    assert_eq!(v["summary"]["health"], 0);
    assert_eq!(v["summary"]["hits"], 13);
    assert_eq!(v["summary"]["ships_sunk"], 4);
    assert_eq!(v["summary"]["ending"], "FleetDestroyed");
}

#[test]
fn sim_binary_rejects_bad_size() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "3"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
