use anyhow::Context;
use clap::Parser;
use shared::ExtraAllowanceResponse;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod cli;
mod domain;

use cli::Args;
use domain::EligibilityService;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG overrides -v/-q. Results own stdout.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(args.log_level()).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let request = args.load_request().context("Failed to load allowances")?;
    let response = EligibilityService::new().evaluate(&request);

    let output = render(&response, args.json)?;
    println!("{}", output);

    info!("Done");
    Ok(())
}

fn render(response: &ExtraAllowanceResponse, json: bool) -> anyhow::Result<String> {
    if json {
        serde_json::to_string_pretty(response).context("Failed to serialize report")
    } else {
        Ok(response.to_tokens())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ExtraAllowanceRequest;

    fn demo_response() -> ExtraAllowanceResponse {
        EligibilityService::new().evaluate(&ExtraAllowanceRequest {
            allowances: cli::DEMO_ALLOWANCES.to_vec(),
            extra: cli::DEMO_EXTRA,
        })
    }

    #[test]
    fn test_render_tokens() {
        let output = render(&demo_response(), false).unwrap();
        assert_eq!(output, "false false false false true");
    }

    #[test]
    fn test_render_json() {
        let output = render(&demo_response(), true).unwrap();
        let parsed: ExtraAllowanceResponse = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, demo_response());
    }

    #[test]
    fn test_render_json_with_extreme_sums() {
        let response = EligibilityService::new().evaluate(&ExtraAllowanceRequest {
            allowances: vec![i64::MAX, i64::MIN],
            extra: i64::MAX,
        });

        let output = render(&response, true).unwrap();
        assert!(output.contains(&(i128::from(i64::MAX) * 2).to_string()));
    }
}
