use std::fs;
use std::path::Path;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Message, SmtpTransport, Transport};
use thiserror::Error;

use crate::config::{SmtpSecurity, SmtpSettings};

#[derive(Error, Debug)]
pub enum MailerError {
    #[error("SMTP connection failed: {0}")]
    Connection(String),

    #[error("SMTP authentication failed: {0}")]
    Auth(String),

    #[error("Failed to send message: {0}")]
    Send(String),
}

/// One live sending session. A send failure only affects that recipient.
pub trait MailSession {
    fn send(
        &mut self,
        to: &str,
        subject: &str,
        body: &str,
        attachment_path: &Path,
    ) -> Result<(), MailerError>;
}

/// Opens a sending session. A connect failure is fatal to the whole batch;
/// there is no per-recipient retry of the connection.
pub trait Mailer {
    fn connect(&self) -> Result<Box<dyn MailSession>, MailerError>;
}

/// Production mailer speaking SMTP through lettre.
pub struct SmtpMailer {
    settings: SmtpSettings,
    sender: String,
    password: String,
}

impl SmtpMailer {
    pub fn new(settings: SmtpSettings, sender: String, password: String) -> Self {
        Self {
            settings,
            sender,
            password,
        }
    }

    fn build_transport(&self) -> Result<SmtpTransport, MailerError> {
        let creds = Credentials::new(self.sender.clone(), self.password.clone());

        let transport = match self.settings.security {
            SmtpSecurity::SSL => {
                let tls_params = TlsParameters::new(self.settings.server.clone())
                    .map_err(|e| MailerError::Connection(e.to_string()))?;

                SmtpTransport::relay(&self.settings.server)
                    .map_err(|e| MailerError::Connection(e.to_string()))?
                    .credentials(creds)
                    .port(self.settings.port)
                    .tls(Tls::Wrapper(tls_params))
                    .build()
            }
            SmtpSecurity::StartTLS => {
                let tls_params = TlsParameters::new(self.settings.server.clone())
                    .map_err(|e| MailerError::Connection(e.to_string()))?;

                SmtpTransport::relay(&self.settings.server)
                    .map_err(|e| MailerError::Connection(e.to_string()))?
                    .credentials(creds)
                    .port(self.settings.port)
                    .tls(Tls::Required(tls_params))
                    .build()
            }
            SmtpSecurity::None => SmtpTransport::relay(&self.settings.server)
                .map_err(|e| MailerError::Connection(e.to_string()))?
                .credentials(creds)
                .port(self.settings.port)
                .build(),
        };

        Ok(transport)
    }
}

impl Mailer for SmtpMailer {
    fn connect(&self) -> Result<Box<dyn MailSession>, MailerError> {
        let from: Mailbox = self
            .sender
            .parse()
            .map_err(|e| MailerError::Connection(format!("invalid sender address '{}': {}", self.sender, e)))?;

        let transport = self.build_transport()?;

        // Probe the server up front so authentication problems surface before
        // any recipient is touched. Permanent rejections at this stage are
        // almost always bad credentials.
        match transport.test_connection() {
            Ok(true) => {}
            Ok(false) => {
                return Err(MailerError::Connection(
                    "server did not accept the connection probe".to_string(),
                ))
            }
            Err(e) if e.is_permanent() => return Err(MailerError::Auth(e.to_string())),
            Err(e) => return Err(MailerError::Connection(e.to_string())),
        }

        log::debug!("SMTP connection to {} verified", self.settings.server);

        Ok(Box::new(SmtpSession { transport, from }))
    }
}

struct SmtpSession {
    transport: SmtpTransport,
    from: Mailbox,
}

impl MailSession for SmtpSession {
    fn send(
        &mut self,
        to: &str,
        subject: &str,
        body: &str,
        attachment_path: &Path,
    ) -> Result<(), MailerError> {
        let to_mailbox: Mailbox = to
            .parse()
            .map_err(|e| MailerError::Send(format!("invalid recipient address '{}': {}", to, e)))?;

        let content = fs::read(attachment_path).map_err(|e| {
            MailerError::Send(format!(
                "failed to read attachment {}: {}",
                attachment_path.display(),
                e
            ))
        })?;

        let filename = attachment_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "anexo.pdf".to_string());

        let content_type = ContentType::parse("application/pdf")
            .map_err(|e| MailerError::Send(e.to_string()))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to_mailbox)
            .subject(subject)
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(body.to_string()))
                    .singlepart(Attachment::new(filename).body(content, content_type)),
            )
            .map_err(|e| MailerError::Send(e.to_string()))?;

        self.transport
            .send(&message)
            .map_err(|e| MailerError::Send(e.to_string()))?;

        Ok(())
    }
}
