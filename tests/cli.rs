//! End-to-end tests for the binary surface: dispatch, listing output,
//! diagnostics, exit codes. Remote calls go to a local mock server.

use assert_cmd::Command;
use mockito::{Matcher, ServerGuard};
use predicates::prelude::*;

const MISSING_CREDENTIALS_DIAGNOSTIC: &str = "FORGE_CLIENT_ID and/or FORGE_CLIENT_SECRET not defined either as environment variables or command options --ci/--cs.\n";

fn da_console() -> Command {
    let mut cmd = Command::cargo_bin("da-console").unwrap();
    cmd.env_remove("FORGE_CLIENT_ID");
    cmd.env_remove("FORGE_CLIENT_SECRET");
    cmd
}

/// Mock the token endpoint under `/auth` and return a command pointed at
/// the server, with credentials supplied as command options.
fn da_console_against(server: &mut ServerGuard) -> Command {
    server
        .mock("POST", "/auth/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()),
            Matcher::UrlEncoded("client_id".into(), "cli-id".into()),
            Matcher::UrlEncoded("client_secret".into(), "cli-secret".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"abc123","token_type":"Bearer","expires_in":3599}"#)
        .create();

    let mut cmd = da_console();
    cmd.env("APS_AUTH_BASE_URL", format!("{}/auth", server.url()));
    cmd.env("APS_DA_BASE_URL", format!("{}/da", server.url()));
    cmd.args(["--clientid", "cli-id", "--clientsecret", "cli-secret"]);
    cmd
}

#[test]
fn no_command_prints_notice_and_exits_zero() {
    da_console()
        .assert()
        .success()
        .stdout("No command was selected\n");
}

#[test]
fn version_flag_prints_version() {
    da_console()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag_works() {
    da_console()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn listactivities_without_credentials_prints_diagnostic_once() {
    da_console()
        .arg("listactivities")
        .assert()
        .success()
        .stdout(MISSING_CREDENTIALS_DIAGNOSTIC);
}

#[test]
fn listappbundles_without_credentials_prints_diagnostic_once() {
    da_console()
        .arg("listappbundles")
        .assert()
        .success()
        .stdout(MISSING_CREDENTIALS_DIAGNOSTIC);
}

#[test]
fn listactivities_prints_header_and_identifiers() {
    let mut server = mockito::Server::new();
    let list_mock = server
        .mock("GET", "/da/activities")
        .match_header("authorization", "Bearer abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":["a1","a2"]}"#)
        .create();

    da_console_against(&mut server)
        .arg("listactivities")
        .assert()
        .success()
        .stdout("abc123\n*** Activities ***\na1\na2\n");

    list_mock.assert();
}

#[test]
fn listappbundles_empty_page_prints_header_only() {
    let mut server = mockito::Server::new();
    let list_mock = server
        .mock("GET", "/da/appbundles")
        .match_header("authorization", "Bearer abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":[]}"#)
        .create();

    da_console_against(&mut server)
        .arg("listappbundles")
        .assert()
        .success()
        .stdout("abc123\n*** AppBundles ***\n");

    list_mock.assert();
}

#[test]
fn remote_failure_exits_nonzero() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/da/activities")
        .with_status(500)
        .with_body("upstream unavailable")
        .create();

    da_console_against(&mut server)
        .arg("listactivities")
        .assert()
        .failure()
        .stderr(predicate::str::contains("upstream unavailable"));
}

#[test]
fn help_lists_subcommands() {
    da_console()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("listactivities")
                .and(predicate::str::contains("listappbundles")),
        );
}

#[test]
fn subcommand_has_its_own_help() {
    da_console()
        .args(["listactivities", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    da_console()
        .args(["listappbundles", "-?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_is_rejected() {
    da_console()
        .arg("listworkitems")
        .assert()
        .failure()
        .stderr(predicate::str::contains("listworkitems"));
}
