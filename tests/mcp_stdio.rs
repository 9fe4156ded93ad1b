use std::path::{Path, PathBuf};

use rmcp::{
    ServiceExt,
    model::CallToolRequestParams,
    transport::{ConfigureCommandExt, TokioChildProcess},
};
use serde_json::json;

fn setup_fixture(dir: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let catalog = dir.join("catalog.json");
    std::fs::write(
        &catalog,
        serde_json::to_string(&json!([
            {
                "id": "visa",
                "title": "Student Visas",
                "content": "International students apply for an F-1 visa after admission. Bring your I-20 to the interview.",
                "category": "support",
                "tags": ["visa", "international"],
                "lastUpdated": "2024-02-01"
            },
            {
                "id": "fees",
                "title": "Tuition and Fees",
                "content": "Undergraduate tuition is $45,000 per year.",
                "category": "fees",
                "tags": ["tuition"]
            }
        ]))?,
    )?;

    let config = dir.join("config.json");
    std::fs::write(
        &config,
        serde_json::to_string(&json!({
            "catalog": catalog,
            "latency": { "rag_ms": 5000, "generation_ms": 5000, "reply_ms": 5000 }
        }))?,
    )?;

    Ok(config)
}

#[tokio::test]
async fn mcp_stdio_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let tempdir = tempfile::tempdir()?;
    let config = setup_fixture(tempdir.path())?;

    let bin = admitbot_bin()?;
    let transport = TokioChildProcess::new(
        tokio::process::Command::new(bin).configure(|cmd| {
            cmd.arg("mcp").env("ADMITBOT_CONFIG", &config);
        }),
    )?;

    let client = ().serve(transport).await?;

    let args = json!({ "query": "visa interview", "limit": 5 });
    let result = client
        .peer()
        .call_tool(CallToolRequestParams::new("admissions_search").with_arguments(args.as_object().unwrap().clone()))
        .await?;

    let structured = result.structured_content.expect("structured content");
    let results = structured
        .get("results")
        .and_then(|v| v.as_array())
        .expect("results array");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].get("id").and_then(|v| v.as_str()), Some("visa"));
    assert_eq!(results[0].get("score").and_then(|v| v.as_u64()), Some(2));

    // The configured delays would make this slow if the server honored them.
    let started = std::time::Instant::now();
    let ask_args = json!({ "query": "visa interview", "strategy": "rag" });
    let ask_result = client
        .peer()
        .call_tool(CallToolRequestParams::new("admissions_ask").with_arguments(ask_args.as_object().unwrap().clone()))
        .await?;
    assert!(started.elapsed() < std::time::Duration::from_secs(4));

    let structured = ask_result.structured_content.expect("structured content");
    assert_eq!(
        structured.get("strategy").and_then(|v| v.as_str()),
        Some("rag")
    );
    assert_eq!(
        structured.get("sources").and_then(|v| v.as_array()).cloned(),
        Some(vec![json!("Student Visas")])
    );

    let text = ask_result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.clone())
        .unwrap_or_default();
    assert!(text.starts_with("International students apply for an F-1 visa"));
    assert!(text.contains("*Sources: Student Visas*"));

    client.cancel().await?;
    Ok(())
}

fn admitbot_bin() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(bin) = std::env::var("CARGO_BIN_EXE_admitbot") {
        return Ok(PathBuf::from(bin));
    }

    let mut path = std::env::current_exe()?;
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("admitbot");

    if cfg!(windows) {
        path.set_extension("exe");
    }

    Ok(path)
}
