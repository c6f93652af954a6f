mod common;

use ai_content_etl::utils::validation::Validate;
use ai_content_etl::{DeployNotifier, DeployOutcome, EtlEngine, ProcessingOutcome};
use anyhow::Result;
use common::{mock_generation, Workspace, GENERATE_PATH};
use httpmock::prelude::*;

#[tokio::test]
async fn test_end_to_end_fenced_reply() -> Result<()> {
    let server = MockServer::start();
    let api_mock = mock_generation(
        &server,
        "```json\n{\"title\": \"Tiny ETL\", \"summary\": \"A small tool.\"}\n```",
    );
    let workspace = Workspace::new(&server, "my notes about a tiny etl tool");

    let report = EtlEngine::new(workspace.pipeline()).run().await?;

    api_mock.assert();
    assert_eq!(report.outcome, ProcessingOutcome::Generated);
    assert_eq!(report.output_path, "content_output.json");
    assert_eq!(
        workspace.output_json(),
        serde_json::json!({"title": "Tiny ETL", "summary": "A small tool."})
    );
    Ok(())
}

#[tokio::test]
async fn test_prompt_embeds_input_text() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path(GENERATE_PATH)
            .body_contains("The original text is: \\\"hello from input.txt\\\"");
        then.status(200)
            .json_body(common::gemini_reply("{\"title\":\"T\",\"summary\":\"S\"}"));
    });
    let workspace = Workspace::new(&server, "hello from input.txt");

    EtlEngine::new(workspace.pipeline()).run().await?;

    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_api_failure_writes_fallback_record() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path(GENERATE_PATH);
        then.status(500).body("internal error");
    });
    let workspace = Workspace::new(&server, "some text");

    let report = EtlEngine::new(workspace.pipeline()).run().await?;

    api_mock.assert();
    assert!(matches!(report.outcome, ProcessingOutcome::Fallback { .. }));

    let output = workspace.output_json();
    assert_eq!(output["title"], "Error: AI Processing Failed");
    let summary = output["summary"].as_str().unwrap();
    assert!(summary.starts_with("Could not process content. Error: "));
    assert!(summary.contains("500"));
    assert!(summary.contains("internal error"));
    Ok(())
}

#[tokio::test]
async fn test_malformed_reply_writes_fallback_record() -> Result<()> {
    let server = MockServer::start();
    mock_generation(&server, "Here is your summary: it is great!");
    let workspace = Workspace::new(&server, "some text");

    let report = EtlEngine::new(workspace.pipeline()).run().await?;

    assert!(!report.is_generated());
    let output = workspace.output_json();
    assert_eq!(output["title"], "Error: AI Processing Failed");
    assert!(output["summary"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_missing_api_key_never_calls_api() -> Result<()> {
    let server = MockServer::start();
    let api_mock = mock_generation(&server, "{}");
    let mut workspace = Workspace::new(&server, "some text");
    workspace.config.generation.api_key = None;

    let report = EtlEngine::new(workspace.pipeline()).run().await?;

    assert_eq!(api_mock.hits(), 0);
    match report.outcome {
        ProcessingOutcome::Fallback { reason } => assert!(reason.contains("GEMINI_API_KEY")),
        other => panic!("unexpected outcome: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_input_file_writes_fallback_record() -> Result<()> {
    let server = MockServer::start();
    let api_mock = mock_generation(&server, "{}");
    let workspace = Workspace::new(&server, "");
    std::fs::remove_file(workspace.dir.path().join("input.txt"))?;

    let report = EtlEngine::new(workspace.pipeline()).run().await?;

    assert_eq!(api_mock.hits(), 0);
    assert!(!report.is_generated());
    assert_eq!(workspace.output_json()["title"], "Error: AI Processing Failed");
    Ok(())
}

#[tokio::test]
async fn test_rerun_overwrites_output() -> Result<()> {
    let server = MockServer::start();
    let workspace = Workspace::new(&server, "first run");

    let mut first = mock_generation(
        &server,
        "{\"title\": \"First\", \"summary\": \"A much longer first summary paragraph.\"}",
    );
    EtlEngine::new(workspace.pipeline()).run().await?;
    first.delete();

    mock_generation(&server, "{\"title\": \"Second\", \"summary\": \"Short.\"}");
    EtlEngine::new(workspace.pipeline()).run().await?;

    assert_eq!(
        workspace.output_json(),
        serde_json::json!({"title": "Second", "summary": "Short."})
    );
    Ok(())
}

#[tokio::test]
async fn test_deploy_hook_called_after_success() -> Result<()> {
    let server = MockServer::start();
    mock_generation(&server, "{\"title\":\"T\",\"summary\":\"S\"}");
    let hook = server.mock(|when, then| {
        when.method(POST).path("/deploy/hook-id");
        then.status(201);
    });
    let workspace = Workspace::new(&server, "text");

    let report = EtlEngine::new(workspace.pipeline())
        .with_notifier(DeployNotifier::new(Some(server.url("/deploy/hook-id"))))
        .run()
        .await?;

    hook.assert();
    assert_eq!(report.deploy, Some(DeployOutcome::Triggered { status: 201 }));
    Ok(())
}

#[tokio::test]
async fn test_deploy_hook_404_keeps_generation_success() -> Result<()> {
    let server = MockServer::start();
    mock_generation(&server, "{\"title\":\"T\",\"summary\":\"S\"}");
    let hook = server.mock(|when, then| {
        when.method(POST).path("/deploy/gone");
        then.status(404).body("not found");
    });
    let workspace = Workspace::new(&server, "text");

    let report = EtlEngine::new(workspace.pipeline())
        .with_notifier(DeployNotifier::new(Some(server.url("/deploy/gone"))))
        .run()
        .await?;

    hook.assert();
    assert!(report.is_generated());
    assert!(matches!(
        report.deploy,
        Some(DeployOutcome::Rejected { status: 404, .. })
    ));
    assert_eq!(workspace.output_json()["title"], "T");
    Ok(())
}

#[tokio::test]
async fn test_fallback_run_skips_deploy_hook() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(GENERATE_PATH);
        then.status(429).body("quota");
    });
    let hook = server.mock(|when, then| {
        when.method(POST).path("/deploy/hook-id");
        then.status(200);
    });
    let workspace = Workspace::new(&server, "text");

    let report = EtlEngine::new(workspace.pipeline())
        .with_notifier(DeployNotifier::new(Some(server.url("/deploy/hook-id"))))
        .run()
        .await?;

    assert_eq!(hook.hits(), 0);
    assert!(report.deploy.is_none());
    Ok(())
}

#[tokio::test]
async fn test_malformed_hook_url_still_writes_output() -> Result<()> {
    let server = MockServer::start();
    mock_generation(&server, "{\"title\":\"T\",\"summary\":\"S\"}");
    let mut workspace = Workspace::new(&server, "text");
    workspace.config.deploy_hook_url = Some("vercel-hook-id-only".to_string());
    assert!(workspace.config.validate().is_ok());

    let report = EtlEngine::new(workspace.pipeline())
        .with_notifier(DeployNotifier::new(
            workspace.config.deploy_hook_url().map(str::to_string),
        ))
        .run()
        .await?;

    assert!(report.is_generated());
    assert!(matches!(
        report.deploy,
        Some(DeployOutcome::Unreachable { .. })
    ));
    assert_eq!(workspace.output_json()["title"], "T");
    Ok(())
}
