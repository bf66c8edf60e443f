use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, SPOT_PROGRAM, stderr, stdout};

#[test]
fn test_check_reports_without_writing() -> Result<()> {
    let test = CliTest::with_program("in/SPOT_A.ls")?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("(dry run, nothing written)"));
    assert!(out.contains("SPOT_A.ls  /MN:  2 /POS:  2"));
    assert!(out.contains("1 file checked"));
    assert!(out.contains("/MN  to tag: 2"));
    assert!(!out.contains("Output written to"));

    assert_eq!(test.read_file("in/SPOT_A.ls")?, SPOT_PROGRAM);
    assert!(!test.exists("out"));
    Ok(())
}

#[test]
fn test_check_already_tagged_tree() -> Result<()> {
    let test = CliTest::with_program("in/SPOT_A.ls")?;

    let mut cmd = test.command();
    cmd.args(["annotate", "in", "tagged"]);
    assert_eq!(cmd.output()?.status.code(), Some(0));

    let mut cmd = test.command();
    cmd.args(["check", "tagged", "--format", "json"]);
    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(0));

    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(json["dryRun"], true);
    assert!(json.get("outputRoot").is_none());
    assert_eq!(json["summary"]["totals"]["changedMn"], 0);
    assert_eq!(json["summary"]["totals"]["changedPos"], 0);
    assert_eq!(json["summary"]["totals"]["skippedMn"], 2);
    assert_eq!(json["summary"]["totals"]["skippedPos"], 2);
    Ok(())
}

#[test]
fn test_check_input_is_a_file() -> Result<()> {
    let test = CliTest::with_program("in/SPOT_A.ls")?;

    let mut cmd = test.command();
    cmd.args(["check", "in/SPOT_A.ls"]);
    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("not a directory"));
    Ok(())
}
