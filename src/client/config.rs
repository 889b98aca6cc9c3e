//! Client configuration: which server to spawn and how long to wait for it.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use super::error::ClientError;

/// Command line used to start the server, split on whitespace.
pub const ENV_SERVER_COMMAND: &str = "RIMS_SERVER_COMMAND";

/// Upper bound, in seconds, on a single tool call.
pub const ENV_CALL_TIMEOUT_SECS: &str = "RIMS_CLIENT_TIMEOUT_SECS";

const DEFAULT_CALL_TIMEOUT_SECS: u64 = 120;
const SERVER_BINARY: &str = "rims-mcp-server";

fn parse_timeout_secs(s: &str) -> Result<u64, String> {
    match s.trim().parse::<u64>() {
        Ok(0) => Err("timeout must be at least one second".to_string()),
        Ok(secs) => Ok(secs),
        Err(_) => Err(format!("expected a whole number of seconds, got '{s}'")),
    }
}

/// Command line of `rims-mcp-client`.
#[derive(Parser, Debug)]
#[command(name = "rims-mcp-client", about = "Interactive client for the RIMS MCP server")]
pub struct ClientArgs {
    /// Server program and its arguments. Overrides --server.
    #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,

    /// Server command line, split on whitespace.
    #[clap(long, env = ENV_SERVER_COMMAND)]
    pub server: Option<String>,

    /// Seconds to wait for one tool call.
    #[clap(long, env = ENV_CALL_TIMEOUT_SECS, default_value_t = DEFAULT_CALL_TIMEOUT_SECS, value_parser = parse_timeout_secs)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Program to spawn.
    pub server_command: String,

    /// Arguments passed to the program.
    pub server_args: Vec<String>,

    /// Timeout for one tool call.
    pub call_timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(server_command: impl Into<String>, server_args: Vec<String>) -> Self {
        Self {
            server_command: server_command.into(),
            server_args,
            call_timeout_secs: DEFAULT_CALL_TIMEOUT_SECS,
        }
    }

    pub fn with_call_timeout_secs(mut self, secs: u64) -> Self {
        self.call_timeout_secs = secs;
        self
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }

    /// Resolve the server command from, in order: positional arguments,
    /// `--server` / `RIMS_SERVER_COMMAND`, then the `rims-mcp-server` binary
    /// installed next to the running executable.
    pub fn from_args(args: ClientArgs) -> Result<Self, ClientError> {
        let mut command = args.command.into_iter();
        let config = match command.next() {
            Some(program) => Self::new(program, command.collect()),
            None => match args.server {
                Some(line) if !line.trim().is_empty() => Self::from_command_line(&line)?,
                _ => Self::new(sibling_server_binary()?.to_string_lossy(), Vec::new()),
            },
        };

        Ok(config.with_call_timeout_secs(args.timeout_secs))
    }

    /// Split a command line on whitespace into program and arguments.
    pub fn from_command_line(line: &str) -> Result<Self, ClientError> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let command = parts
            .next()
            .ok_or_else(|| ClientError::Config("empty server command".to_string()))?;
        Ok(Self::new(command, parts.collect()))
    }
}

fn sibling_server_binary() -> Result<PathBuf, ClientError> {
    let exe = env::current_exe()?;
    Ok(exe.with_file_name(format!("{SERVER_BINARY}{}", env::consts::EXE_SUFFIX)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            env::remove_var(ENV_SERVER_COMMAND);
            env::remove_var(ENV_CALL_TIMEOUT_SECS);
        }
    }

    fn resolve(argv: &[&str]) -> ClientConfig {
        let args = ClientArgs::try_parse_from(argv).unwrap();
        ClientConfig::from_args(args).unwrap()
    }

    #[test]
    fn test_command_line_split() {
        let config = ClientConfig::from_command_line("  cargo run --bin rims-mcp-server ").unwrap();
        assert_eq!(config.server_command, "cargo");
        assert_eq!(config.server_args, vec!["run", "--bin", "rims-mcp-server"]);
        assert_eq!(config.call_timeout(), Duration::from_secs(120));

        assert!(matches!(
            ClientConfig::from_command_line("   "),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn test_positional_command_wins() {
        let _guard = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_SERVER_COMMAND, "ignored");
        }

        let config = resolve(&["rims-mcp-client", "/opt/server", "-v", "--port", "9"]);
        assert_eq!(config.server_command, "/opt/server");
        assert_eq!(config.server_args, vec!["-v", "--port", "9"]);

        let config = resolve(&["rims-mcp-client", "--timeout-secs", "7", "/opt/server"]);
        assert_eq!(config.server_command, "/opt/server");
        assert_eq!(config.call_timeout(), Duration::from_secs(7));

        clear_env();
    }

    #[test]
    fn test_env_command_and_timeout() {
        let _guard = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_SERVER_COMMAND, "python server.py");
            env::set_var(ENV_CALL_TIMEOUT_SECS, "5");
        }

        let config = resolve(&["rims-mcp-client"]);
        assert_eq!(config.server_command, "python");
        assert_eq!(config.server_args, vec!["server.py"]);
        assert_eq!(config.call_timeout(), Duration::from_secs(5));

        let config = resolve(&["rims-mcp-client", "--server", "node dist/index.js"]);
        assert_eq!(config.server_command, "node");
        assert_eq!(config.server_args, vec!["dist/index.js"]);

        unsafe {
            env::set_var(ENV_CALL_TIMEOUT_SECS, "soon");
        }
        assert!(ClientArgs::try_parse_from(["rims-mcp-client"]).is_err());

        clear_env();
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let _guard = ENV_TEST_LOCK.lock().unwrap();
        clear_env();

        assert!(ClientArgs::try_parse_from(["rims-mcp-client", "--timeout-secs", "0"]).is_err());
        assert!(parse_timeout_secs("0").is_err());
        assert_eq!(parse_timeout_secs(" 30 "), Ok(30));
    }

    #[test]
    fn test_default_is_sibling_binary() {
        let _guard = ENV_TEST_LOCK.lock().unwrap();
        clear_env();

        let config = resolve(&["rims-mcp-client"]);
        assert!(config.server_command.contains(SERVER_BINARY));
        assert!(config.server_args.is_empty());
        assert_eq!(config.call_timeout(), Duration::from_secs(120));
    }
}
