//! External command execution.
//!
//! Runs the router discovery tool and returns its output.

use crate::{Error, Result};
use colored::Colorize;
use regex::Regex;
use std::process::Command;
use std::sync::OnceLock;

/// Upper bound on captured stdout; rdisc6 output is a few KB at most.
const MAX_OUTPUT_LEN: usize = 500_000;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]+)\s*"#).expect("Invalid Regex")
    })
}

/// Run a command line and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved.
///
/// # Returns
/// * `Ok(String)` - stdout on success
/// * `Err(Error::DiscoveryFailed)` - the command could not be started, exited
///   non-zero, or produced too much or non UTF-8 output
pub fn run(cmd: &str) -> Result<String> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd);
    log::trace!("split cmds={:?}", cmds);

    let (program, args) = cmds
        .split_first()
        .ok_or_else(|| Error::DiscoveryFailed("empty discovery command".to_string()))?;

    let output = Command::new(program).args(args).output().map_err(|e| {
        log::error!("Command execution failed: {}", e);
        Error::DiscoveryFailed(format!("failed to execute {program}: {e}"))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(Error::DiscoveryFailed(format!(
            "{program} exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    log::debug!("Success output.stdout.len(): {}", output.stdout.len());
    if output.stdout.len() > MAX_OUTPUT_LEN {
        return Err(Error::DiscoveryFailed(format!(
            "response too large: {} bytes for command: {:?}",
            output.stdout.len(),
            cmds
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| Error::DiscoveryFailed(format!("invalid UTF-8 from {program}: {e}")))
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_strip_plain() {
        assert_eq!(split_and_strip("rdisc6 -1 wlan0"), vec!["rdisc6", "-1", "wlan0"]);
    }

    #[test]
    fn test_split_and_strip_quoted() {
        let input = "sudo 'rdisc6 wrapper'  -w 2000 eth0";
        let expected = vec!["sudo", "rdisc6 wrapper", "-w", "2000", "eth0"];
        assert_eq!(split_and_strip(input), expected);
    }

    #[test]
    fn test_split_and_strip_empty_quotes() {
        let input = "Empty '' Single Quotes";
        let expected = vec!["Empty", "", "Single", "Quotes"];
        assert_eq!(split_and_strip(input), expected);
    }

    #[test]
    fn test_run_empty_command() {
        assert!(matches!(run("   "), Err(Error::DiscoveryFailed(_))));
    }

    #[test]
    fn test_run_missing_program() {
        let err = run("net-autoconfig-no-such-binary wlan0").unwrap_err();
        assert!(matches!(err, Error::DiscoveryFailed(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_success_and_failure() {
        assert_eq!(run("echo ' Prefix : fd00::/64'").unwrap(), " Prefix : fd00::/64\n");
        assert!(matches!(run("false"), Err(Error::DiscoveryFailed(_))));
    }
}
