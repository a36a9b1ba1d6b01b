use std::{fs::create_dir, process::Command};


#[test]
fn test_no_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_hexembed"))
        .output()
        .unwrap();

    assert!(!output.status.success());

    let usage = String::from_utf8_lossy(&output.stdout);
    assert!(usage.contains("Usage:") && usage.contains("hexembed"));
}

#[test]
fn test_first_argument_is_input() {
    let setup = setup::setup(4);
    let result_path = setup.test_dir.path().join("result.h");

    let output = Command::new(env!("CARGO_BIN_EXE_hexembed"))
        .arg("-o")
        .arg(&result_path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let err_msg = String::from_utf8_lossy(&output.stderr);
    assert!(err_msg.contains("failed to open input file '-o'"));
    assert!(!result_path.exists());
}

#[test]
fn test_input_file_not_present() {
    let setup = setup::setup(4);
    let not_present_input = setup.test_dir.path().join("no.such.file");
    let result_path = setup.test_dir.path().join("result.h");

    let output = Command::new(env!("CARGO_BIN_EXE_hexembed"))
        .arg(&not_present_input)
        .arg("-o")
        .arg(&result_path)
        .output()
        .unwrap();

    assert!(!output.status.success());

    let err_msg = String::from_utf8_lossy(&output.stderr);
    assert!(
        err_msg.contains("failed to open input file")
            && err_msg.contains(not_present_input.to_str().unwrap())
    );
}

#[test]
fn test_output_file_not_creatable() {
    let setup = setup::setup(4);
    let bad_output = setup.test_dir.path().join("no/such/dir/result.h");

    let output = Command::new(env!("CARGO_BIN_EXE_hexembed"))
        .arg(&setup.input_path)
        .arg("-o")
        .arg(&bad_output)
        .output()
        .unwrap();

    assert!(!output.status.success());

    let err_msg = String::from_utf8_lossy(&output.stderr);
    assert!(
        err_msg.contains("failed to create output file")
            && err_msg.contains(bad_output.to_str().unwrap())
    );
}

#[test]
fn test_output_checked_before_input() {
    let setup = setup::setup(4);
    let not_present_input = setup.test_dir.path().join("no.such.file");
    let bad_output = setup.test_dir.path().join("no/such/dir/result.h");

    let output = Command::new(env!("CARGO_BIN_EXE_hexembed"))
        .arg(&not_present_input)
        .arg("-o")
        .arg(&bad_output)
        .output()
        .unwrap();

    assert!(!output.status.success());

    let err_msg = String::from_utf8_lossy(&output.stderr);
    assert!(err_msg.contains("failed to create output file"));
    assert!(!err_msg.contains("failed to open input file"));
}

#[test]
fn test_input_not_a_regular_file() {
    let setup = setup::setup(4);
    let dir_input = setup.test_dir.path().join("subdir");
    create_dir(&dir_input).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hexembed"))
        .arg(&dir_input)
        .output()
        .unwrap();

    assert!(!output.status.success());

    let err_msg = String::from_utf8_lossy(&output.stderr);
    assert!(
        err_msg.contains("cannot determine length of input file")
            && err_msg.contains(dir_input.to_str().unwrap())
    );
}
