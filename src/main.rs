use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use log::debug;

use batchmail::attachments;
use batchmail::config::Config;
use batchmail::controller::{BatchEvent, BatchRequest, SendBatchController};
use batchmail::credentials::CredentialStore;
use batchmail::mailer::SmtpMailer;

/// Emails each recipient in a dataset its matching PDF attachment
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to config file
    #[clap(short, long, default_value = "~/.config/batchmail/config.json")]
    config: String,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send one batch of emails from a recipient dataset
    Send {
        /// CSV dataset with RESPONSAVEL and Contato columns
        #[clap(long)]
        dataset: String,

        /// Directory holding one <RESPONSAVEL>.pdf per recipient
        #[clap(long)]
        pdf_dir: String,

        /// Sender email address
        #[clap(long)]
        sender: String,

        /// Sender password; falls back to the system keyring when omitted
        #[clap(long)]
        password: Option<String>,

        /// Email subject
        #[clap(long)]
        subject: Option<String>,

        /// Body template; {nome} is replaced with the recipient name
        #[clap(long)]
        template: Option<String>,

        /// Seconds to wait between successful sends
        #[clap(long)]
        delay: Option<f64>,

        /// Directory the run log is written to
        #[clap(long, default_value = ".")]
        log_dir: String,

        /// Remember the password in the system keyring for this sender
        #[clap(long)]
        remember: bool,

        /// Skip the confirmation prompt
        #[clap(short, long)]
        yes: bool,
    },

    /// Store a sender password in the system keyring
    SaveCredentials {
        /// Sender email address
        #[clap(long)]
        sender: String,

        /// Password to store
        #[clap(long)]
        password: String,
    },

    /// Remove a stored sender password from the system keyring
    ForgetCredentials {
        /// Sender email address
        #[clap(long)]
        sender: String,
    },

    /// Print the active configuration
    ShowConfig,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if args.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    // Load configuration
    let config_path = shellexpand::tilde(&args.config).into_owned();
    let config = Config::load(&config_path).unwrap_or_else(|e| {
        println!("Could not load config at {}: {}. Using defaults.", config_path, e);
        Config::default()
    });

    match args.command {
        Commands::Send {
            dataset,
            pdf_dir,
            sender,
            password,
            subject,
            template,
            delay,
            log_dir,
            remember,
            yes,
        } => run_send(
            config,
            &config_path,
            SendOptions {
                dataset,
                pdf_dir,
                sender,
                password,
                subject,
                template,
                delay,
                log_dir,
                remember,
                yes,
            },
        ),
        Commands::SaveCredentials { sender, password } => {
            CredentialStore::new()
                .store_password(&sender, &password)
                .context("Failed to store the password")?;
            println!("Password stored securely for {}", sender);
            Ok(())
        }
        Commands::ForgetCredentials { sender } => {
            CredentialStore::new()
                .delete_password(&sender)
                .context("Failed to delete the password")?;
            println!("Stored password removed for {}", sender);
            Ok(())
        }
        Commands::ShowConfig => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

struct SendOptions {
    dataset: String,
    pdf_dir: String,
    sender: String,
    password: Option<String>,
    subject: Option<String>,
    template: Option<String>,
    delay: Option<f64>,
    log_dir: String,
    remember: bool,
    yes: bool,
}

fn run_send(mut config: Config, config_path: &str, options: SendOptions) -> Result<()> {
    let credentials = CredentialStore::new();

    // Use the stored password when none was given on the command line.
    let password = match options.password {
        Some(password) => password,
        None => match credentials.get_password(&options.sender)? {
            Some(password) => {
                println!("Using the password stored for {}.", options.sender);
                password
            }
            None => bail!(
                "No password given and none stored for {}. Pass --password or run `batchmail save-credentials` first.",
                options.sender
            ),
        },
    };

    if options.remember {
        credentials.store_password(&options.sender, &password)?;
        println!("Password stored securely for {}.", options.sender);
    }

    // Remember the sender for the next invocation.
    if config.sender.as_deref() != Some(options.sender.as_str()) {
        config.sender = Some(options.sender.clone());
        if let Err(e) = config.save(config_path) {
            debug!("could not save config: {}", e);
        }
    }

    let dataset_path = PathBuf::from(shellexpand::tilde(&options.dataset).into_owned());
    let attachment_dir = PathBuf::from(shellexpand::tilde(&options.pdf_dir).into_owned());
    let log_dir = PathBuf::from(shellexpand::tilde(&options.log_dir).into_owned());

    let pdf_count = attachments::count_pdfs(&attachment_dir);
    println!("Attachment folder: {} PDF files found.", pdf_count);

    if !options.yes && !confirm("Start sending emails?")? {
        println!("Aborted.");
        return Ok(());
    }

    let delay_seconds = options.delay.unwrap_or(config.defaults.delay_seconds);
    let request = BatchRequest {
        dataset_path,
        attachment_dir,
        sender: options.sender.clone(),
        password: password.clone(),
        subject_template: options.subject.unwrap_or_else(|| config.defaults.subject.clone()),
        body_template: options
            .template
            .unwrap_or_else(|| config.defaults.body_template.clone()),
        delay: Duration::from_secs_f64(delay_seconds.max(0.0)),
        log_dir,
    };

    let mailer = SmtpMailer::new(config.smtp.clone(), options.sender, password);

    let (events_tx, events_rx) = mpsc::channel();
    let mut controller = SendBatchController::new(events_tx);
    controller
        .start(mailer, request)
        .context("Failed to start the batch")?;

    // The batch runs on its own worker; this thread renders events. A line
    // on stdin requests cancellation, mirroring the stop control.
    println!("Batch running. Press Enter to cancel.");
    let cancel = controller.cancel_handle();
    thread::spawn(move || {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_ok() {
            cancel.cancel();
        }
    });

    let mut exit_error = None;
    for event in &events_rx {
        match event {
            BatchEvent::Progress { completed, total } => {
                print!("\rProgress: {}/{}", completed, total);
                let _ = io::stdout().flush();
            }
            BatchEvent::Log(message) => {
                println!("\n[{}] {}", Local::now().format("%H:%M:%S"), message);
            }
            BatchEvent::Finished(result) => {
                println!();
                match result {
                    Ok(summary) => {
                        if summary.cancelled {
                            println!(
                                "Batch cancelled: {} of {} recipients processed.",
                                summary.completed, summary.total
                            );
                        } else {
                            println!(
                                "Batch completed: {} of {} recipients processed.",
                                summary.completed, summary.total
                            );
                        }
                        println!(
                            "Sent: {}  Invalid email: {}  Missing PDF: {}  Failed: {}",
                            summary.counts.sent,
                            summary.counts.invalid_email,
                            summary.counts.missing_attachment,
                            summary.counts.send_failed
                        );
                        println!("Detailed log: {}", summary.log_path.display());
                    }
                    Err(e) => {
                        exit_error = Some(e);
                    }
                }
                break;
            }
        }
    }

    controller.join();

    if let Some(e) = exit_error {
        bail!("Batch failed: {}", e);
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
