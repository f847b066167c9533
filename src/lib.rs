pub mod attachments;
pub mod batch_log;
pub mod composer;
pub mod config;
pub mod controller;
pub mod credentials;
pub mod mailer;
pub mod recipients;

// Re-export commonly used types
pub use config::{Config, SmtpSecurity, SmtpSettings};
pub use controller::{
    BatchEvent, BatchProgress, BatchRequest, BatchSummary, SendBatchController, SendOutcome,
};
pub use credentials::CredentialStore;
pub use mailer::{MailSession, Mailer, MailerError, SmtpMailer};
pub use recipients::{DatasetError, Recipient};
