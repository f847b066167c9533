use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::Local;
use log::debug;
use thiserror::Error;

use crate::attachments;
use crate::batch_log::BatchLog;
use crate::composer;
use crate::mailer::{MailSession, Mailer, MailerError};
use crate::recipients::{self, DatasetError, Recipient};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("A batch is already running")]
    AlreadyRunning,

    #[error("Invalid batch inputs: {0}")]
    Validation(String),

    #[error(transparent)]
    Connect(#[from] MailerError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("Failed to write run log: {0}")]
    Log(#[from] std::io::Error),
}

/// Everything one batch needs. Validated before any work happens.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub dataset_path: PathBuf,
    pub attachment_dir: PathBuf,
    pub sender: String,
    pub password: String,
    pub subject_template: String,
    pub body_template: String,
    /// Pause after each successful send, skipped for the last recipient.
    pub delay: Duration,
    /// Directory the run log file is created in.
    pub log_dir: PathBuf,
}

/// Terminal classification of one recipient within one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    SkippedInvalidEmail,
    SkippedMissingAttachment,
    SendFailed(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub sent: usize,
    pub invalid_email: usize,
    pub missing_attachment: usize,
    pub send_failed: usize,
}

impl OutcomeCounts {
    fn record(&mut self, outcome: &SendOutcome) {
        match outcome {
            SendOutcome::Sent => self.sent += 1,
            SendOutcome::SkippedInvalidEmail => self.invalid_email += 1,
            SendOutcome::SkippedMissingAttachment => self.missing_attachment += 1,
            SendOutcome::SendFailed(_) => self.send_failed += 1,
        }
    }
}

/// Progress state shared between the worker and the invoking context.
///
/// The worker is the sole writer of `total` and `completed`; the invoker is
/// the sole writer of `cancelled`. Readers tolerate staleness, so relaxed
/// scalar loads and stores are enough.
#[derive(Debug, Default)]
pub struct BatchProgress {
    total: AtomicUsize,
    completed: AtomicUsize,
    cancelled: AtomicBool,
}

impl BatchProgress {
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            total: self.total.load(Ordering::Relaxed),
            completed: self.completed.load(Ordering::Relaxed),
            cancelled: self.cancelled.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        self.total.store(0, Ordering::Relaxed);
        self.completed.store(0, Ordering::Relaxed);
        self.cancelled.store(false, Ordering::Relaxed);
    }

    fn set_total(&self, total: usize) {
        self.total.store(total, Ordering::Relaxed);
    }

    fn increment_completed(&self) -> usize {
        self.completed.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn request_cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

/// Read-only view of [`BatchProgress`] handed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub total: usize,
    pub completed: usize,
    pub cancelled: bool,
}

/// Clonable handle for requesting cancellation from another thread.
///
/// Cancellation is cooperative: it is honored between recipients, never
/// mid-send and never mid-delay, so the recipient in flight still finishes.
#[derive(Clone)]
pub struct CancelHandle {
    progress: Arc<BatchProgress>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.progress.request_cancel();
    }
}

/// Events emitted to the observer channel. Emission is fire and forget; a
/// dropped receiver never disturbs the batch.
#[derive(Debug)]
pub enum BatchEvent {
    Progress { completed: usize, total: usize },
    Log(String),
    Finished(Result<BatchSummary, BatchError>),
}

/// Terminal report for one batch.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub total: usize,
    pub completed: usize,
    pub counts: OutcomeCounts,
    /// Distinguishes completion by cancellation from natural completion.
    pub cancelled: bool,
    pub log_path: PathBuf,
}

/// Orchestrates one send batch on a dedicated worker thread.
///
/// The invoking context starts the batch, may request cancellation, and
/// observes progress through the event channel or a polled snapshot. Only
/// one batch may be active at a time; the controller defends that on its
/// own, independent of whatever the caller's UI disables.
pub struct SendBatchController {
    progress: Arc<BatchProgress>,
    running: Arc<AtomicBool>,
    events: Sender<BatchEvent>,
    worker: Option<JoinHandle<()>>,
}

impl SendBatchController {
    pub fn new(events: Sender<BatchEvent>) -> Self {
        Self {
            progress: Arc::new(BatchProgress::default()),
            running: Arc::new(AtomicBool::new(false)),
            events,
            worker: None,
        }
    }

    /// Start a batch on a background worker thread.
    ///
    /// Returns [`BatchError::AlreadyRunning`] while a previous batch is
    /// still active. The terminal result is delivered as
    /// [`BatchEvent::Finished`]; afterwards the shared progress state is
    /// reset and the controller is ready for the next invocation.
    pub fn start<M>(&mut self, mailer: M, request: BatchRequest) -> Result<(), BatchError>
    where
        M: Mailer + Send + 'static,
    {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(BatchError::AlreadyRunning);
        }

        let progress = Arc::clone(&self.progress);
        let running = Arc::clone(&self.running);
        let events = self.events.clone();

        let handle = thread::spawn(move || {
            debug!("batch worker started");
            let result = run_batch(&mailer, &request, &progress, &events);
            let _ = events.send(BatchEvent::Finished(result));
            progress.reset();
            running.store(false, Ordering::SeqCst);
            debug!("batch worker finished");
        });

        self.worker = Some(handle);
        Ok(())
    }

    /// Request cooperative cancellation of the running batch.
    pub fn cancel(&self) {
        self.progress.request_cancel();
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            progress: Arc::clone(&self.progress),
        }
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.progress.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Block until the current batch worker exits.
    pub fn join(&mut self) {
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("Batch worker thread panicked");
            }
        }
    }
}

impl Drop for SendBatchController {
    fn drop(&mut self) {
        self.join();
    }
}

/// The batch state machine, run to completion on the worker thread.
///
/// Validating, connecting and loading happen before the run log is opened:
/// inputs that were never actionable leave no partial log behind. The
/// connection is established before the dataset is loaded because without a
/// session no work can proceed at all.
fn run_batch(
    mailer: &dyn Mailer,
    request: &BatchRequest,
    progress: &BatchProgress,
    events: &Sender<BatchEvent>,
) -> Result<BatchSummary, BatchError> {
    validate_request(request)?;

    emit_log(events, "Connecting to the mail server...");
    let mut session = mailer.connect()?;
    emit_log(events, "Connection established.");

    emit_log(events, "Loading recipient dataset...");
    let recipients = recipients::load_recipients(&request.dataset_path)?;
    emit_log(
        events,
        &format!("Dataset loaded: {} emails to send.", recipients.len()),
    );

    let total = recipients.len();
    progress.set_total(total);
    emit_progress(events, 0, total);

    let started_at = Local::now();
    let mut run_log = BatchLog::open(&request.log_dir, started_at)?;
    run_log.write_start_marker(started_at)?;

    let mut counts = OutcomeCounts::default();
    let mut cancelled = false;

    for (position, recipient) in recipients.iter().enumerate() {
        // Re-checked once per recipient: a pending cancel stops the loop
        // before the next recipient is touched.
        if progress.is_cancelled() {
            cancelled = true;
            let note = format!(
                "Batch cancelled by user after {} of {} recipients.",
                progress.snapshot().completed,
                total
            );
            run_log.write_record(&note)?;
            emit_log(events, &note);
            break;
        }

        let outcome = process_recipient(session.as_mut(), recipient, request, events);
        let record = describe_outcome(recipient, &outcome);
        run_log.write_record(&record)?;
        emit_log(events, &record);
        counts.record(&outcome);

        // Every visited recipient counts toward progress, whatever the outcome.
        let completed = progress.increment_completed();
        emit_progress(events, completed, total);

        if outcome == SendOutcome::Sent && !request.delay.is_zero() && position + 1 < total {
            emit_log(
                events,
                &format!(
                    "Waiting {:.1}s before the next send...",
                    request.delay.as_secs_f64()
                ),
            );
            thread::sleep(request.delay);
        }
    }

    let finished_at = Local::now();
    run_log.write_end_marker(finished_at)?;
    let log_path = run_log.path().to_path_buf();
    run_log.close()?;

    emit_log(
        events,
        &format!("Batch finished. Log saved to: {}", log_path.display()),
    );

    Ok(BatchSummary {
        total,
        completed: progress.snapshot().completed,
        counts,
        cancelled,
        log_path,
    })
}

fn validate_request(request: &BatchRequest) -> Result<(), BatchError> {
    if !request.dataset_path.exists() {
        return Err(BatchError::Validation(format!(
            "dataset file does not exist: {}",
            request.dataset_path.display()
        )));
    }
    if !request.attachment_dir.is_dir() {
        return Err(BatchError::Validation(format!(
            "attachment directory does not exist: {}",
            request.attachment_dir.display()
        )));
    }
    if request.sender.is_empty() || request.password.is_empty() {
        return Err(BatchError::Validation(
            "sender address and password must both be provided".to_string(),
        ));
    }
    Ok(())
}

/// Process one recipient in isolation. Never fails the batch: every failure
/// mode maps to an outcome for this recipient alone.
fn process_recipient(
    session: &mut dyn MailSession,
    recipient: &Recipient,
    request: &BatchRequest,
    events: &Sender<BatchEvent>,
) -> SendOutcome {
    if !recipient.has_valid_email() {
        return SendOutcome::SkippedInvalidEmail;
    }

    let attachment = attachments::resolve(&recipient.display_name, &request.attachment_dir);
    if !attachment.exists {
        return SendOutcome::SkippedMissingAttachment;
    }

    let (subject, body) = composer::compose(
        &recipient.display_name,
        &request.subject_template,
        &request.body_template,
    );

    emit_log(events, &format!("Sending to {}...", recipient.email_address));
    match session.send(
        &recipient.email_address,
        &subject,
        &body,
        &attachment.resolved_path,
    ) {
        Ok(()) => SendOutcome::Sent,
        Err(e) => SendOutcome::SendFailed(e.to_string()),
    }
}

fn describe_outcome(recipient: &Recipient, outcome: &SendOutcome) -> String {
    let line = recipient.line_number();
    match outcome {
        SendOutcome::Sent => format!(
            "Row {}: {} - email sent successfully.",
            line, recipient.email_address
        ),
        SendOutcome::SkippedInvalidEmail => format!(
            "Row {}: invalid or missing email address: '{}'",
            line, recipient.email_address
        ),
        SendOutcome::SkippedMissingAttachment => format!(
            "Row {}: {} - attachment {}.pdf not found",
            line, recipient.email_address, recipient.display_name
        ),
        SendOutcome::SendFailed(reason) => format!(
            "Row {}: {} - send failed: {}",
            line, recipient.email_address, reason
        ),
    }
}

fn emit_log(events: &Sender<BatchEvent>, message: &str) {
    let _ = events.send(BatchEvent::Log(message.to_string()));
}

fn emit_progress(events: &Sender<BatchEvent>, completed: usize, total: usize) {
    let _ = events.send(BatchEvent::Progress { completed, total });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::sync::mpsc::{self, Receiver};
    use std::sync::Mutex;

    struct MockSession {
        sent_to: Arc<Mutex<Vec<String>>>,
        fail_for: Vec<String>,
        entered: Option<Sender<()>>,
        gate: Option<Arc<Mutex<Receiver<()>>>>,
    }

    impl MailSession for MockSession {
        fn send(
            &mut self,
            to: &str,
            _subject: &str,
            _body: &str,
            _attachment_path: &Path,
        ) -> Result<(), MailerError> {
            if let Some(entered) = &self.entered {
                let _ = entered.send(());
            }
            if let Some(gate) = &self.gate {
                let _ = gate.lock().unwrap().recv();
            }
            if self.fail_for.iter().any(|addr| addr == to) {
                return Err(MailerError::Send("mock transport rejected".to_string()));
            }
            self.sent_to.lock().unwrap().push(to.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockMailer {
        sent_to: Arc<Mutex<Vec<String>>>,
        connect_calls: Arc<Mutex<usize>>,
        fail_connect: bool,
        fail_for: Vec<String>,
        entered: Option<Sender<()>>,
        gate: Option<Arc<Mutex<Receiver<()>>>>,
    }

    impl Mailer for MockMailer {
        fn connect(&self) -> Result<Box<dyn MailSession>, MailerError> {
            *self.connect_calls.lock().unwrap() += 1;
            if self.fail_connect {
                return Err(MailerError::Connection("mock connect refused".to_string()));
            }
            Ok(Box::new(MockSession {
                sent_to: Arc::clone(&self.sent_to),
                fail_for: self.fail_for.clone(),
                entered: self.entered.clone(),
                gate: self.gate.clone(),
            }))
        }
    }

    struct Fixture {
        dir: tempfile::TempDir,
    }

    impl Fixture {
        /// Dataset from the reference scenario: Ana sends, Bob has a bad
        /// address, Cid has no PDF on disk.
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::create_dir(dir.path().join("pdfs")).unwrap();
            fs::create_dir(dir.path().join("logs")).unwrap();
            fs::write(
                dir.path().join("recipients.csv"),
                "RESPONSAVEL,Contato\nAna,ana@x.com\nBob,not-an-email\nCid,cid@x.com\n",
            )
            .unwrap();
            fs::write(dir.path().join("pdfs").join("Ana.pdf"), b"%PDF-1.4").unwrap();
            Self { dir }
        }

        fn request(&self) -> BatchRequest {
            BatchRequest {
                dataset_path: self.dir.path().join("recipients.csv"),
                attachment_dir: self.dir.path().join("pdfs"),
                sender: "sender@example.com".to_string(),
                password: "secret".to_string(),
                subject_template: "Seu arquivo PDF".to_string(),
                body_template: "Olá {nome}".to_string(),
                delay: Duration::ZERO,
                log_dir: self.dir.path().join("logs"),
            }
        }

        fn log_files(&self) -> Vec<PathBuf> {
            fs::read_dir(self.dir.path().join("logs"))
                .unwrap()
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .collect()
        }
    }

    fn run_to_summary(
        mailer: &MockMailer,
        request: &BatchRequest,
        progress: &BatchProgress,
    ) -> Result<BatchSummary, BatchError> {
        let (tx, _rx) = mpsc::channel();
        run_batch(mailer, request, progress, &tx)
    }

    #[test]
    fn test_end_to_end_outcome_ordering() {
        let fixture = Fixture::new();
        let mailer = MockMailer::default();
        let progress = BatchProgress::default();

        let summary = run_to_summary(&mailer, &fixture.request(), &progress).unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 3);
        assert!(!summary.cancelled);
        assert_eq!(summary.counts.sent, 1);
        assert_eq!(summary.counts.invalid_email, 1);
        assert_eq!(summary.counts.missing_attachment, 1);
        assert_eq!(summary.counts.send_failed, 0);

        // Only Ana ever reaches the transport.
        assert_eq!(*mailer.sent_to.lock().unwrap(), vec!["ana@x.com"]);

        let contents = fs::read_to_string(&summary.log_path).unwrap();
        let records: Vec<&str> = contents
            .lines()
            .filter(|line| line.starts_with("Row "))
            .collect();
        assert_eq!(records.len(), 3);
        assert!(records[0].starts_with("Row 2: ana@x.com - email sent"));
        assert!(records[1].starts_with("Row 3: invalid or missing email"));
        assert!(records[2].contains("attachment Cid.pdf not found"));
        assert_eq!(contents.matches("Batch started").count(), 1);
        assert_eq!(contents.matches("Batch finished").count(), 1);
    }

    #[test]
    fn test_send_failure_is_isolated_to_one_recipient() {
        let fixture = Fixture::new();
        fs::write(fixture.dir.path().join("pdfs").join("Cid.pdf"), b"%PDF-1.4").unwrap();
        let mailer = MockMailer {
            fail_for: vec!["ana@x.com".to_string()],
            ..MockMailer::default()
        };
        let progress = BatchProgress::default();

        let summary = run_to_summary(&mailer, &fixture.request(), &progress).unwrap();

        // Ana fails, the batch carries on and Cid still goes out.
        assert_eq!(summary.counts.send_failed, 1);
        assert_eq!(summary.counts.sent, 1);
        assert_eq!(summary.completed, 3);
        assert_eq!(*mailer.sent_to.lock().unwrap(), vec!["cid@x.com"]);

        let contents = fs::read_to_string(&summary.log_path).unwrap();
        assert!(contents.contains("Row 2: ana@x.com - send failed: "));
    }

    #[test]
    fn test_validation_failure_opens_no_log() {
        let fixture = Fixture::new();
        let mut request = fixture.request();
        request.dataset_path = fixture.dir.path().join("missing.csv");
        let mailer = MockMailer::default();
        let progress = BatchProgress::default();

        let result = run_to_summary(&mailer, &request, &progress);

        assert!(matches!(result, Err(BatchError::Validation(_))));
        assert_eq!(*mailer.connect_calls.lock().unwrap(), 0);
        assert!(fixture.log_files().is_empty());
    }

    #[test]
    fn test_empty_credentials_fail_validation() {
        let fixture = Fixture::new();
        let mut request = fixture.request();
        request.password = String::new();
        let progress = BatchProgress::default();

        let result = run_to_summary(&MockMailer::default(), &request, &progress);
        assert!(matches!(result, Err(BatchError::Validation(_))));
    }

    #[test]
    fn test_connect_failure_is_fatal_and_pre_log() {
        let fixture = Fixture::new();
        let mailer = MockMailer {
            fail_connect: true,
            ..MockMailer::default()
        };
        let progress = BatchProgress::default();

        let result = run_to_summary(&mailer, &fixture.request(), &progress);

        assert!(matches!(
            result,
            Err(BatchError::Connect(MailerError::Connection(_)))
        ));
        assert!(fixture.log_files().is_empty());
        assert_eq!(progress.snapshot().total, 0);
    }

    #[test]
    fn test_dataset_error_happens_after_connect() {
        let fixture = Fixture::new();
        fs::write(
            fixture.dir.path().join("recipients.csv"),
            "Nome,Email\nAna,ana@x.com\n",
        )
        .unwrap();
        let mailer = MockMailer::default();
        let progress = BatchProgress::default();

        let result = run_to_summary(&mailer, &fixture.request(), &progress);

        assert!(matches!(result, Err(BatchError::Dataset(_))));
        // Connection precedes dataset load.
        assert_eq!(*mailer.connect_calls.lock().unwrap(), 1);
        assert!(fixture.log_files().is_empty());
    }

    #[test]
    fn test_cancel_before_first_recipient() {
        let fixture = Fixture::new();
        let mailer = MockMailer::default();
        let progress = BatchProgress::default();
        progress.request_cancel();

        let summary = run_to_summary(&mailer, &fixture.request(), &progress).unwrap();

        assert!(summary.cancelled);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.counts, OutcomeCounts::default());
        assert!(mailer.sent_to.lock().unwrap().is_empty());

        let contents = fs::read_to_string(&summary.log_path).unwrap();
        assert_eq!(contents.matches("Batch started").count(), 1);
        assert_eq!(contents.matches("Batch cancelled by user").count(), 1);
        assert_eq!(contents.matches("Batch finished").count(), 1);
        assert_eq!(contents.lines().filter(|l| l.starts_with("Row ")).count(), 0);
    }

    #[test]
    fn test_progress_events_are_monotonic() {
        let fixture = Fixture::new();
        let mailer = MockMailer::default();
        let progress = BatchProgress::default();
        let (tx, rx) = mpsc::channel();

        run_batch(&mailer, &fixture.request(), &progress, &tx).unwrap();
        drop(tx);

        let mut last = 0;
        let mut seen_total = 0;
        for event in rx {
            if let BatchEvent::Progress { completed, total } = event {
                assert!(completed >= last);
                assert!(completed <= total);
                last = completed;
                seen_total = total;
            }
        }
        assert_eq!(last, 3);
        assert_eq!(seen_total, 3);
    }

    #[test]
    fn test_controller_rejects_concurrent_start() {
        let fixture = Fixture::new();
        let (gate_tx, gate_rx) = mpsc::channel();
        let mailer = MockMailer {
            gate: Some(Arc::new(Mutex::new(gate_rx))),
            ..MockMailer::default()
        };

        let (tx, rx) = mpsc::channel();
        let mut controller = SendBatchController::new(tx);
        controller.start(mailer, fixture.request()).unwrap();

        // The worker is parked inside the first send; a second start must
        // be rejected while the batch is active.
        let second = controller.start(MockMailer::default(), fixture.request());
        assert!(matches!(second, Err(BatchError::AlreadyRunning)));

        // Release the gated sends and let the batch finish.
        drop(gate_tx);
        controller.join();
        assert!(!controller.is_running());

        let finished = rx
            .try_iter()
            .find(|event| matches!(event, BatchEvent::Finished(_)));
        match finished {
            Some(BatchEvent::Finished(Ok(summary))) => {
                assert_eq!(summary.completed, 3);
            }
            other => panic!("expected a successful Finished event, got {:?}", other),
        }

        // Progress resets once the batch is done.
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.completed, 0);
        assert_eq!(snapshot.total, 0);
        assert!(!snapshot.cancelled);

        // And the controller accepts a new batch again.
        controller
            .start(MockMailer::default(), fixture.request())
            .unwrap();
        controller.join();
    }

    #[test]
    fn test_cancel_handle_stops_iteration() {
        let fixture = Fixture::new();
        // Cid gets a PDF too, so only cancellation can keep him from sending.
        fs::write(fixture.dir.path().join("pdfs").join("Cid.pdf"), b"%PDF-1.4").unwrap();

        let (entered_tx, entered_rx) = mpsc::channel();
        let (gate_tx, gate_rx) = mpsc::channel();
        let mailer = MockMailer {
            entered: Some(entered_tx),
            gate: Some(Arc::new(Mutex::new(gate_rx))),
            ..MockMailer::default()
        };
        let sent_to = Arc::clone(&mailer.sent_to);

        let (tx, rx) = mpsc::channel();
        let mut controller = SendBatchController::new(tx);
        let cancel = controller.cancel_handle();
        controller.start(mailer, fixture.request()).unwrap();

        // Wait until the first send is in flight, cancel, then let it finish.
        entered_rx.recv().unwrap();
        cancel.cancel();
        gate_tx.send(()).unwrap();
        drop(gate_tx);
        controller.join();

        // The in-flight recipient completed; nobody after it was touched.
        assert_eq!(*sent_to.lock().unwrap(), vec!["ana@x.com"]);

        match rx
            .try_iter()
            .find(|event| matches!(event, BatchEvent::Finished(_)))
        {
            Some(BatchEvent::Finished(Ok(summary))) => {
                assert!(summary.cancelled);
                assert_eq!(summary.completed, 1);
                assert_eq!(summary.counts.sent, 1);
            }
            other => panic!("expected a cancelled summary, got {:?}", other),
        }
    }
}
