use std::future::Future;

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials as SmtpCredentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info};

use crate::config::{CheckerConfig, Credentials};
use crate::error::Result;

/// Delivers a single plain-text notification.
pub trait Mailer {
    fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Sends over implicit TLS to a fixed relay, authenticating as the sender.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    credentials: Credentials,
    host: String,
    port: u16,
}

impl SmtpMailer {
    pub fn new(credentials: Credentials, host: impl Into<String>, port: u16) -> Self {
        Self {
            credentials,
            host: host.into(),
            port,
        }
    }

    pub fn from_config(credentials: Credentials, config: &CheckerConfig) -> Self {
        Self::new(credentials, config.relay_host.clone(), config.relay_port)
    }

    async fn deliver(&self, message: Message) -> Result<()> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.host)?
            .port(self.port)
            .credentials(SmtpCredentials::new(
                self.credentials.email.clone(),
                self.credentials.password.clone(),
            ))
            .build();

        let response = transport.send(message).await?;
        info!("Relay accepted message: {:?}", response.code());
        Ok(())
    }
}

impl Mailer for SmtpMailer {
    async fn send_email(&self, recipient: &str, subject: &str, body: &str) -> Result<()> {
        info!(
            "Preparing to send email with subject: {} via {}:{}",
            subject, self.host, self.port
        );

        let result = match build_message(&self.credentials.email, recipient, subject, body) {
            Ok(message) => self.deliver(message).await,
            Err(e) => Err(e),
        };

        match &result {
            Ok(()) => info!("Email sent successfully to {}", recipient),
            Err(e) => error!("Failed to send email: {}", e),
        }

        result
    }
}

pub fn build_message(sender: &str, recipient: &str, subject: &str, body: &str) -> Result<Message> {
    let message = Message::builder()
        .from(sender.parse::<Mailbox>()?)
        .to(recipient.parse::<Mailbox>()?)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_string())?;
    Ok(message)
}
