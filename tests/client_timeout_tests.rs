//! A tool call that outlives the client's call timeout is abandoned with
//! `ClientError::Timeout`.

mod common;

use common::*;
use rims_mcp_server::client::{
    ClientConfig, ClientError, InteractiveSession, RimsClient, SessionOutcome, ToolInvoker,
};
use serde_json::Map;
use std::io::Cursor;
use std::time::{Duration, Instant};

const SERVER_BIN: &str = env!("CARGO_BIN_EXE_rims-mcp-server");

#[tokio::test(flavor = "multi_thread")]
async fn test_slow_remote_hits_call_timeout() {
    let mock = MockRims::spawn().await;
    mock.json_after("get_teams.php", 200, teams_body(), Duration::from_secs(10));

    // Separate test binary, so this environment is not shared with other tests
    unsafe {
        std::env::set_var("API_ENDPOINT", &mock.base_url);
        std::env::set_var("COMPETITION_ID", COMPETITION_ID);
        std::env::set_var("WEB_PAGE_URL", WEB_PAGE_URL);
        std::env::set_var("MCP_HTTP_TIMEOUT_SECS", "30");
        std::env::set_var("MCP_LOG_LEVEL", "warn");
    }

    let config = ClientConfig::new(SERVER_BIN, Vec::new()).with_call_timeout_secs(1);
    let client = RimsClient::connect(&config)
        .await
        .expect("Failed to connect to server");

    let started = Instant::now();
    let err = client
        .invoke("get_team_list", Map::new())
        .await
        .expect_err("call should time out");

    assert!(matches!(err, ClientError::Timeout(d) if d == Duration::from_secs(1)));
    assert!(started.elapsed() < Duration::from_secs(5));

    // The session reports the timeout and still ends cleanly
    let input = Cursor::new(b"6\n".to_vec());
    let mut session = InteractiveSession::new(input, Vec::new());
    let outcome = session.run(&client).await.unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();

    assert_eq!(outcome, SessionOutcome::CallFailed);
    assert!(
        output.contains("Tool execution failed: Tool call timed out after 1s"),
        "{output}"
    );

    client.close().await.unwrap();
}
