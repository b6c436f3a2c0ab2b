// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use anyhow::Context;
use async_trait::async_trait;
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use crate::command::Command;
use crate::config::constants::{DEMO_DECIMALS, DEMO_NETWORK_ID, DEMO_PRICE_USD};
use crate::errors::SubmissionError;
use crate::{
    AmountField, AmountFieldConfig, AmountFieldListener, AmountFieldProps, BlurCause,
    TokenAmount, TokenDecimals, TokenPrice, TransferRequest, TransferSession, TransferSubmitter,
};

/// Main entry point for the application.
///
/// Reads one command per line from stdin and prints the field state after
/// each one.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let price = TokenPrice::new(env_or("PRICE_USD", DEMO_PRICE_USD.as_f64())?);
    let decimals = TokenDecimals::new(env_or("DECIMALS", DEMO_DECIMALS.as_u8())?);
    let network_id: String = env_or("NETWORK_ID", DEMO_NETWORK_ID.to_string())?;

    let mut props = AmountFieldProps::new(decimals).with_network_id(network_id);
    props.balance = optional_env::<TokenAmount>("BALANCE")?;
    props.fee = optional_env::<TokenAmount>("FEE")?;

    info!(%price, decimals = decimals.as_u8(), "Starting transfer form");

    let mut runner = ScriptRunner::new(AmountFieldConfig::new(price), props);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "Skipping script line");
                continue;
            }
        };

        let report = runner.apply(command).await?;
        stdout.write_all(report.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;

    Ok(())
}

fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(optional_env(key)?.unwrap_or(default))
}

fn optional_env<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match dotenvy::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid {key}: {raw}")),
        Err(_) => Ok(None),
    }
}

/// Holds the latest canonical amount until the session picks it up
#[derive(Debug, Default)]
pub struct PendingAmount(Option<String>);

impl AmountFieldListener for PendingAmount {
    fn on_change(&mut self, canonical: &str) {
        self.0 = Some(canonical.to_string());
    }
}

/// Submitter that only logs the request
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSubmitter;

#[async_trait]
impl TransferSubmitter for LoggingSubmitter {
    async fn submit(&self, request: &TransferRequest) -> Result<(), SubmissionError> {
        let body =
            serde_json::to_string(request).map_err(|e| SubmissionError::transport(e.to_string()))?;
        info!(%body, "Transfer request");
        Ok(())
    }
}

/// Amount field and wizard driven by script commands
pub struct ScriptRunner<S = LoggingSubmitter> {
    field: AmountField<PendingAmount>,
    session: TransferSession,
    submitter: S,
}

impl ScriptRunner {
    pub fn new(config: AmountFieldConfig, props: AmountFieldProps) -> Self {
        Self::with_submitter(config, props, LoggingSubmitter)
    }
}

impl<S: TransferSubmitter> ScriptRunner<S> {
    pub fn with_submitter(config: AmountFieldConfig, props: AmountFieldProps, submitter: S) -> Self {
        Self {
            field: AmountField::new(config, props, PendingAmount::default()),
            session: TransferSession::new(),
            submitter,
        }
    }

    pub fn field(&self) -> &AmountField<PendingAmount> {
        &self.field
    }

    pub fn session(&self) -> &TransferSession {
        &self.session
    }

    /// Apply one command and describe the outcome
    pub async fn apply(&mut self, command: Command) -> anyhow::Result<String> {
        let note = match command {
            Command::Focus => {
                self.field.on_focus();
                None
            }
            Command::Blur => {
                self.field.on_blur(BlurCause::Elsewhere);
                None
            }
            Command::SubmitBlur => {
                self.field.on_blur(BlurCause::SubmitControl);
                None
            }
            Command::Type(text) => (!self.field.on_change(&text)).then_some("rejected"),
            Command::Max => (!self.field.on_max()).then_some("max unavailable"),
            Command::Toggle => (!self.field.on_toggle_mode()).then_some("toggle unavailable"),
            Command::Show => None,
            Command::From(vault_id) => {
                self.session.select_from(vault_id);
                None
            }
            Command::Asset(asset_id) => {
                self.session.select_asset(asset_id);
                None
            }
            Command::To(address) => {
                self.session.select_to(address);
                None
            }
            Command::Memo(memo) => {
                self.session.set_memo(memo);
                None
            }
            Command::Submit => {
                return Ok(match self.session.submit(&self.submitter).await {
                    Ok(request) => format!("submitted {}", serde_json::to_string(&request)?),
                    Err(e) => format!("not submitted: {e}"),
                });
            }
            Command::Reset => {
                self.session.reset();
                self.field.reset();
                None
            }
            Command::NewRequest => {
                self.session.new_request();
                self.field.reset();
                None
            }
        };

        if let Some(canonical) = self.field.listener_mut().0.take() {
            self.session.set_amount(&canonical);
        }

        let mut report = self.describe();
        if let Some(note) = note {
            report.push_str(" (");
            report.push_str(note);
            report.push(')');
        }
        Ok(report)
    }

    fn describe(&self) -> String {
        let symbol = self.field.native_currency().unwrap_or_default();
        format!(
            "[{:?}] display={:?} amount={:?} {} | {}",
            self.field.state(),
            self.field.display_value(),
            self.session.values().amount,
            self.field.available_summary(&symbol),
            self.field.fee_summary(&symbol),
        )
    }
}
