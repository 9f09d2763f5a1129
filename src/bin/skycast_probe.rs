//! Exercise a running skycast server and report which endpoints behave.

use anyhow::Context;
use clap::Parser;
use reqwest::{Client, StatusCode};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "skycast_probe", about = "Smoke-test a running skycast server")]
struct Args {
    /// Base URL of the server
    #[arg(long, env = "SKYCAST_URL", default_value = "http://localhost:5055")]
    base_url: String,
}

/// One request and the status it should come back with.
struct Check {
    name: &'static str,
    path: &'static str,
    city: Option<&'static str>,
    expected: StatusCode,
}

const CHECKS: &[Check] = &[
    Check {
        name: "Home Endpoint",
        path: "/",
        city: None,
        expected: StatusCode::OK,
    },
    Check {
        name: "Get Cities",
        path: "/weather/cities",
        city: None,
        expected: StatusCode::OK,
    },
    Check {
        name: "Get Weather - Valid City",
        path: "/weather",
        city: Some("New York"),
        expected: StatusCode::OK,
    },
    Check {
        name: "Get Weather - Invalid City",
        path: "/weather",
        city: Some("Mars"),
        expected: StatusCode::NOT_FOUND,
    },
    Check {
        name: "Get Weather - Missing Parameter",
        path: "/weather",
        city: None,
        expected: StatusCode::BAD_REQUEST,
    },
    Check {
        name: "Multiple Cities - London",
        path: "/weather",
        city: Some("London"),
        expected: StatusCode::OK,
    },
    Check {
        name: "Multiple Cities - Tokyo",
        path: "/weather",
        city: Some("Tokyo"),
        expected: StatusCode::OK,
    },
    Check {
        name: "Multiple Cities - Paris",
        path: "/weather",
        city: Some("Paris"),
        expected: StatusCode::OK,
    },
];

async fn run_check(client: &Client, base_url: &str, check: &Check) -> anyhow::Result<bool> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), check.path);
    let mut request = client.get(&url);
    if let Some(city) = check.city {
        request = request.query(&[("city", city)]);
    }

    let response = request
        .send()
        .await
        .with_context(|| format!("cannot reach {}", url))?;
    let status = response.status();
    let body: serde_json::Value = response
        .json()
        .await
        .with_context(|| format!("{} did not return JSON", url))?;

    println!("  Status Code: {}", status.as_u16());
    println!("  Response: {}", body);

    Ok(status == check.expected)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let client = Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .context("failed to build HTTP client")?;

    println!("Probing skycast at {}", args.base_url);

    let mut passed = 0;
    for check in CHECKS {
        println!("\n{}", check.name);
        let ok = match run_check(&client, &args.base_url, check).await {
            Ok(ok) => ok,
            Err(e) => {
                println!("  ERROR: {:#}", e);
                false
            }
        };
        println!("  {}", if ok { "PASSED" } else { "FAILED" });
        if ok {
            passed += 1;
        }
    }

    println!("\nTotal: {}/{} checks passed", passed, CHECKS.len());

    if passed != CHECKS.len() {
        anyhow::bail!("{} check(s) failed", CHECKS.len() - passed);
    }
    Ok(())
}
