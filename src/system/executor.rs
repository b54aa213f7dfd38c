// src/system/executor.rs

//! Running the user's command with a resolved environment.

use crate::models::EnvMap;
use std::process::Command;
use thiserror::Error;

/// Errors raised while running the user's command.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// No program was given.
    #[error("No command specified to run.")]
    EmptyCommand,
    /// The program could not be started or `exec` failed.
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    /// The child exited without a status code.
    #[error("Command '{0}' was terminated by a signal.")]
    Terminated(String),
}

/// Builds the command for `args`, with exactly `env_map` as its environment.
///
/// The first argument is the program; the rest are passed through untouched.
pub fn build_command(args: &[String], env_map: &EnvMap) -> Result<Command, ExecutionError> {
    let (program, rest) = args.split_first().ok_or(ExecutionError::EmptyCommand)?;
    if program.trim().is_empty() {
        return Err(ExecutionError::EmptyCommand);
    }

    let mut command = Command::new(program);
    command.args(rest).env_clear().envs(env_map.pairs());
    Ok(command)
}

/// Spawns the command, waits for it, and returns its exit code.
pub fn run_with_env(args: &[String], env_map: &EnvMap) -> Result<i32, ExecutionError> {
    let mut command = build_command(args, env_map)?;
    let program = command.get_program().to_string_lossy().into_owned();
    log::debug!("Spawning '{}' with {} variable(s).", program, env_map.len());

    let status = command
        .status()
        .map_err(|e| ExecutionError::CommandFailed(program.clone(), e))?;
    status.code().ok_or(ExecutionError::Terminated(program))
}

/// Replaces the current process with the command, using `env_map` as its environment.
///
/// Only returns on failure. Off Unix there is no `exec`, so the command is
/// spawned instead and its exit code returned.
#[cfg(unix)]
pub fn exec_with_env(args: &[String], env_map: &EnvMap) -> Result<i32, ExecutionError> {
    use std::os::unix::process::CommandExt;

    let mut command = build_command(args, env_map)?;
    let program = command.get_program().to_string_lossy().into_owned();
    log::debug!("Exec'ing '{}' with {} variable(s).", program, env_map.len());

    let error = command.exec();
    Err(ExecutionError::CommandFailed(program, error))
}

/// Replaces the current process with the command, using `env_map` as its environment.
///
/// Only returns on failure. Off Unix there is no `exec`, so the command is
/// spawned instead and its exit code returned.
#[cfg(not(unix))]
pub fn exec_with_env(args: &[String], env_map: &EnvMap) -> Result<i32, ExecutionError> {
    run_with_env(args, env_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EnvEntry;
    use std::ffi::OsStr;

    fn env(entries: &[(&str, &str)]) -> EnvMap {
        entries
            .iter()
            .map(|(k, v)| EnvEntry::new(*k, *v, false))
            .collect()
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_command_is_rejected() {
        assert!(matches!(
            build_command(&[], &EnvMap::new()),
            Err(ExecutionError::EmptyCommand)
        ));
        assert!(matches!(
            build_command(&args(&["  "]), &EnvMap::new()),
            Err(ExecutionError::EmptyCommand)
        ));
    }

    #[test]
    fn test_build_command_sets_program_args_and_env() {
        let command =
            build_command(&args(&["printenv", "-0", "FOO"]), &env(&[("FOO", "bar")])).unwrap();
        assert_eq!(command.get_program(), OsStr::new("printenv"));
        let passed: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(passed, vec![OsStr::new("-0"), OsStr::new("FOO")]);
        let vars: Vec<(&OsStr, Option<&OsStr>)> = command.get_envs().collect();
        assert_eq!(vars, vec![(OsStr::new("FOO"), Some(OsStr::new("bar")))]);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_with_env_passes_merged_environment() {
        let code = run_with_env(
            &args(&["/bin/sh", "-c", "test \"$GREETING\" = 'hello world' && test -z \"$HOME\""]),
            &env(&[("GREETING", "hello world")]),
        )
        .unwrap();
        assert_eq!(code, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_with_env_propagates_exit_code() {
        let code = run_with_env(&args(&["/bin/sh", "-c", "exit 3"]), &EnvMap::new()).unwrap();
        assert_eq!(code, 3);
    }

    #[test]
    fn test_missing_program_fails() {
        let result = run_with_env(
            &args(&["/definitely/not/a/real/program"]),
            &EnvMap::new(),
        );
        assert!(matches!(result, Err(ExecutionError::CommandFailed(_, _))));
    }
}
