use crate::domain::model::DeployOutcome;
use reqwest::Client;

/// Triggers a rebuild of the static site through its deploy hook.
///
/// Failures are logged and reported through [`DeployOutcome`], never raised.
pub struct DeployNotifier {
    hook_url: Option<String>,
    client: Client,
}

impl DeployNotifier {
    pub fn new(hook_url: Option<String>) -> Self {
        Self {
            hook_url: hook_url.filter(|u| !u.trim().is_empty()),
            client: Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.hook_url.is_some()
    }

    pub async fn notify(&self) -> DeployOutcome {
        let Some(url) = self.hook_url.as_deref() else {
            tracing::warn!("⚠️ Deploy hook URL not set. Skipping deployment trigger.");
            return DeployOutcome::Skipped;
        };

        tracing::info!("🚀 Triggering deploy hook...");
        let response = match self.client.post(url).send().await {
            Ok(response) => response,
            Err(e) => {
                // hook URL 本身就是憑證，不寫進日誌
                let e = e.without_url();
                tracing::error!("❌ Failed to reach deploy hook: {}", e);
                return DeployOutcome::Unreachable {
                    reason: e.to_string(),
                };
            }
        };

        let status = response.status().as_u16();
        // 只有 200 / 201 視為成功
        if status == 200 || status == 201 {
            tracing::info!("✅ Deploy hook triggered successfully (status {}).", status);
            DeployOutcome::Triggered { status }
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                "❌ Failed to trigger deploy hook. Status: {}. Response: {}",
                status,
                body
            );
            DeployOutcome::Rejected { status, body }
        }
    }
}
