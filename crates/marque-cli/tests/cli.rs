use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A `marque` command isolated from the host's config files and credentials.
fn marque(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("marque").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_prints_every_agent() {
    let home = TempDir::new().unwrap();
    let mut assert = marque(&home).arg("list").assert().success();

    for id in [
        "content-strategist",
        "copywriter",
        "seo-specialist",
        "social-media-manager",
        "brand-guardian",
        "email-marketer",
        "market-researcher",
        "campaign-analyst",
    ] {
        assert = assert.stdout(predicate::str::contains(id));
    }
}

#[test]
fn list_json_is_ordered_descriptors() {
    let home = TempDir::new().unwrap();
    let output = marque(&home).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let agents: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let agents = agents.as_array().unwrap();
    assert_eq!(agents.len(), 8);
    assert_eq!(agents[0]["id"], "content-strategist");
    assert_eq!(agents[7]["id"], "campaign-analyst");
    assert!(agents[0]["colorToken"].is_string());
}

#[test]
fn show_prints_persona() {
    let home = TempDir::new().unwrap();
    marque(&home)
        .args(["show", "brand-guardian"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentinel"))
        .stdout(predicate::str::contains("Capabilities:"));
}

#[test]
fn show_unknown_agent_fails() {
    let home = TempDir::new().unwrap();
    marque(&home)
        .args(["show", "unknown-agent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("agent not found: unknown-agent"));
}

#[test]
fn compose_embeds_default_tone_without_brand() {
    let home = TempDir::new().unwrap();
    marque(&home)
        .args(["compose", "brand-guardian", "Buy our stuff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No brand guidelines were provided"))
        .stdout(predicate::str::contains("Buy our stuff"));
}

#[test]
fn compose_reads_brand_file_and_voices() {
    let home = TempDir::new().unwrap();
    let brand = home.path().join("brand.json");
    fs::write(
        &brand,
        r#"{"voiceDescriptors": ["calm", "witty"], "audience": "new parents"}"#,
    )
    .unwrap();

    let output = marque(&home)
        .args(["compose", "brand-guardian", "--json", "--voice", "witty", "--brand"])
        .arg(&brand)
        .arg("Nap-friendly stroller launch")
        .output()
        .unwrap();
    assert!(output.status.success());

    let composed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let prompt = composed["prompt"].as_str().unwrap();
    assert!(prompt.contains("new parents"));
    let witty = prompt.find("\"witty\"").unwrap();
    let calm = prompt.find("\"calm\"").unwrap();
    assert!(witty < calm);
    assert!(composed["systemInstruction"]
        .as_str()
        .unwrap()
        .starts_with("You are Sentinel"));
}

#[test]
fn compose_reads_input_from_stdin() {
    let home = TempDir::new().unwrap();
    marque(&home)
        .args(["compose", "copywriter"])
        .write_stdin("Headline for a bakery\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Headline for a bakery"));
}

#[test]
fn compose_rejects_invalid_brand_file() {
    let home = TempDir::new().unwrap();
    let brand = home.path().join("brand.json");
    fs::write(&brand, "not json").unwrap();

    marque(&home)
        .args(["compose", "brand-guardian", "--brand"])
        .arg(&brand)
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid brand file"));
}

#[test]
fn run_without_api_key_fails_before_calling_out() {
    let home = TempDir::new().unwrap();
    marque(&home)
        .args(["run", "copywriter", "Tagline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key required"));
}

#[test]
fn run_unknown_agent_fails() {
    let home = TempDir::new().unwrap();
    marque(&home)
        .env("GEMINI_API_KEY", "test-key")
        .args(["run", "unknown-agent", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("agent not found"));
}

#[test]
fn explicit_missing_config_fails() {
    let home = TempDir::new().unwrap();
    marque(&home)
        .args(["--config", "nope.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[tokio::test]
async fn run_prints_model_text_from_configured_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-pro:generateContent"))
        .and(header("x-goog-api-key", "file-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Fresh bread, daily."}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let config = home.path().join("marque.json");
    fs::write(
        &config,
        serde_json::json!({
            "provider": {"api_key": "file-key", "base_url": server.uri()}
        })
        .to_string(),
    )
    .unwrap();

    marque(&home)
        .args(["--model", "gemini-2.5-pro", "run", "copywriter", "Tagline"])
        .assert()
        .success()
        .stdout(predicate::eq("Fresh bread, daily.\n"));
}

#[tokio::test]
async fn run_json_reports_remote_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let config = home.path().join("marque.json");
    fs::write(
        &config,
        serde_json::json!({
            "provider": {"api_key": "file-key", "base_url": server.uri()}
        })
        .to_string(),
    )
    .unwrap();

    marque(&home)
        .args(["run", "--json", "seo-specialist", "running shoes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("provider"));

    marque(&home)
        .args(["run", "seo-specialist", "running shoes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: the agent encountered an issue processing your request.",
        ));
}
