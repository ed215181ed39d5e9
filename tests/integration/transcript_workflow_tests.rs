/*!
 * End-to-end tests for the extraction workflow
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use ttscribe::app_config::Config;
use ttscribe::app_controller::Controller;

use crate::common;

fn controller_for(root: PathBuf, output_dir: PathBuf) -> Result<Controller> {
    Controller::with_config(Config {
        batch_root: Some(root),
        output_dir,
        ..Config::default()
    })
}

/// Test single-file mode end to end with timestamps
#[test]
fn test_run_single_withTimestamps_shouldWriteExactTranscript() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(
        temp_dir.path(),
        "episode.ttml",
        "<tt><body><div>\
         <p begin=\"5.2\"><span>Hello</span></p>\
         <p begin=\"9\"/>\
         </div></body></tt>",
    )?;
    let output = temp_dir.path().join("episode.txt");

    let controller = Controller::with_config(Config::default())?;
    controller.run_single(&input, &output, true)?;

    assert_eq!(fs::read_to_string(&output)?, "[00:00:05] Hello");

    Ok(())
}

/// Test single-file mode without timestamps
#[test]
fn test_run_single_withoutTimestamps_shouldOmitPrefixes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_ttml(temp_dir.path(), "episode.ttml")?;
    let output = temp_dir.path().join("episode.txt");

    let controller = Controller::with_config(Config::default())?;
    controller.run_single(&input, &output, false)?;

    assert_eq!(fs::read_to_string(&output)?, "Welcome back\n\nNested spans");

    Ok(())
}

/// Test that a missing input is fatal in single-file mode
#[test]
fn test_run_single_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    let result = controller.run_single(
        &temp_dir.path().join("absent.ttml"),
        &temp_dir.path().join("out.txt"),
        false,
    );
    assert!(result.is_err());

    Ok(())
}

/// Test that a malformed document is fatal in single-file mode
#[test]
fn test_run_single_withMalformedDocument_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "bad.ttml", common::malformed_ttml())?;
    let output = temp_dir.path().join("out.txt");

    let controller = Controller::with_config(Config::default())?;
    assert!(controller.run_single(&input, &output, false).is_err());
    assert!(!output.exists());

    Ok(())
}

/// Test batch mode over a tree, including name deduplication on disk
#[test]
fn test_run_batch_withCollidingIdentifiers_shouldDeduplicateNames() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().join("cache");
    let out = temp_dir.path().join("out");

    common::create_test_ttml(&root.join("d1").join("PodcastContentabc"), "episode.ttml")?;
    common::create_test_ttml(&root.join("d2").join("PodcastContentabc"), "episode.ttml")?;
    common::create_test_ttml(&root.join("d3").join("PodcastContentxyz"), "episode.ttml")?;

    let controller = controller_for(root, out.clone())?;
    controller.run_batch(false)?;

    assert!(out.join("abc.txt").exists());
    assert!(out.join("abc-1.txt").exists());
    assert!(out.join("xyz.txt").exists());
    assert_eq!(
        fs::read_to_string(out.join("abc.txt"))?,
        "Welcome back\n\nNested spans"
    );

    Ok(())
}

/// Test that one bad document does not abort the rest of the batch
#[test]
fn test_run_batch_withOneMalformedDocument_shouldIsolateFailure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().join("cache");
    let out = temp_dir.path().join("out");

    common::create_test_ttml(&root.join("PodcastContentgood"), "episode.ttml")?;
    common::create_test_file(
        &root.join("PodcastContentbad"),
        "episode.ttml",
        common::malformed_ttml(),
    )?;
    common::create_test_ttml(&root.join("PodcastContentother"), "episode.ttml")?;

    let controller = controller_for(root, out.clone())?;
    controller.run_batch(true)?;

    assert!(out.join("good.txt").exists());
    assert!(out.join("other.txt").exists());
    assert!(!out.join("bad.txt").exists());

    Ok(())
}

/// Test that batch mode creates the output directory when absent
#[test]
fn test_run_batch_withMissingOutputDir_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().join("cache");
    let out = temp_dir.path().join("transcripts");

    common::create_test_ttml(&root.join("PodcastContentep"), "episode.ttml")?;

    let controller = controller_for(root, out.clone())?;
    controller.run_batch(false)?;

    assert!(out.is_dir());
    assert!(out.join("ep.txt").exists());

    Ok(())
}

/// Test that a missing batch root is an error
#[test]
fn test_run_batch_withMissingRoot_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let controller = controller_for(
        temp_dir.path().join("absent"),
        temp_dir.path().join("out"),
    )?;
    assert!(controller.run_batch(false).is_err());

    Ok(())
}

/// Test batch mode timestamps flow through to the artifacts
#[test]
fn test_run_batch_withTimestamps_shouldPrefixLines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().join("cache");
    let out = temp_dir.path().join("out");

    common::create_test_ttml(&root.join("PodcastContentep"), "episode.ttml")?;

    let controller = controller_for(root, out.clone())?;
    controller.run_batch(true)?;

    assert_eq!(
        fs::read_to_string(out.join("ep.txt"))?,
        "[00:00:01] Welcome back\n\n[01:01:01] Nested spans"
    );

    Ok(())
}
