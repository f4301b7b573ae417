use std::{
    env, fs,
    io::{self, Read},
    path::Path,
    process,
    sync::Arc,
};

use safety_report::{
    cli::{
        output::{self, NoticeQueue, OutputPreferences},
        run_session, DialoguerPrompter, SessionOutcome, TerminalNotifier,
    },
    config::{Config, ConfigManager},
    core::{utils::PathResolver, Clock, SystemClock},
    domain::ReportData,
    errors::Result,
    init,
    notify::{check_and_notify, CheckOutcome, ReminderTask},
    report::{failing_steps, ReportFormatter, REQUIRED_FIELDS_NOTICE},
    share::SystemDistributor,
    storage::{JsonStateStore, TimestampStore},
    utils::build_info,
    wizard::WizardController,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });

    match command.as_str() {
        "new" => new_report(),
        "render" => {
            let source = args.next().unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });
            render(&source)
        }
        "check" => check(),
        "watch" => watch(),
        "version" => {
            println!("{}", build_info::current().summary());
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }
}

struct Session {
    config: Config,
    store: Arc<dyn TimestampStore>,
    clock: Arc<dyn Clock>,
}

impl Session {
    fn open() -> Result<Self> {
        let base = PathResolver::base_dir();
        let config = ConfigManager::with_base_dir(base.clone())?.load()?;
        output::set_preferences(OutputPreferences {
            plain: config.plain_output,
        });
        Ok(Self {
            config,
            store: Arc::new(JsonStateStore::in_base(&base)),
            clock: Arc::new(SystemClock),
        })
    }

    fn reminders(&self, notifier: TerminalNotifier) -> Result<ReminderTask> {
        Ok(ReminderTask::spawn(
            self.config.reminder_interval()?,
            self.config.notification_policy()?,
            self.store.clone(),
            Arc::new(notifier),
            self.clock.clone(),
        ))
    }
}

fn new_report() -> Result<()> {
    let session = Session::open()?;
    // Reminders wait for the next screen so the prompt redraw cannot wipe them.
    let notices = NoticeQueue::default();
    let reminders =
        session.reminders(TerminalNotifier::from_config(&session.config).deferred(notices.clone()))?;

    let mut controller = WizardController::new(session.store.clone(), session.clock.clone())
        .with_default_guard(session.config.default_guard_name.clone());
    let mut prompter = DialoguerPrompter::new().with_notices(notices.clone());
    let outcome = run_session(&mut controller, &mut prompter, &SystemDistributor);
    reminders.cancel();

    notices.flush();

    if outcome? == SessionOutcome::Cancelled {
        output::info("Report discarded.");
    }
    Ok(())
}

fn render(source: &str) -> Result<()> {
    let raw = if source == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(Path::new(source))?
    };
    let data: ReportData = serde_json::from_str(&raw)?;

    let failing = failing_steps(&data);
    if !failing.is_empty() {
        output::warning(REQUIRED_FIELDS_NOTICE);
        for step in failing {
            output::warning(format!("{step} is incomplete"));
        }
    }

    println!("{}", ReportFormatter::new(&SystemClock).render(&data));
    Ok(())
}

fn check() -> Result<()> {
    let session = Session::open()?;
    let notifier = TerminalNotifier::from_config(&session.config);
    let outcome = check_and_notify(
        &session.config.notification_policy()?,
        session.store.as_ref(),
        &notifier,
        session.clock.as_ref(),
    )?;
    match outcome {
        CheckOutcome::NotDue => output::info("No report is overdue."),
        CheckOutcome::Notified => {}
        CheckOutcome::PermissionMissing => {
            output::warning("A report is overdue but notifications are disabled.")
        }
    }
    Ok(())
}

fn watch() -> Result<()> {
    let session = Session::open()?;
    let reminders = session.reminders(TerminalNotifier::from_config(&session.config))?;
    output::info(format!(
        "Checking for overdue reports every {}s. Press Ctrl+C to stop.",
        session.config.reminder_interval_secs
    ));
    reminders.join();
    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage: safety_report_cli <command>\n\
         Commands:\n  \
         new                    fill in a report interactively\n  \
         render <file.json|->   print the report for a saved record\n  \
         check                  run one overdue-report check\n  \
         watch                  keep checking until interrupted\n  \
         version                show build information"
    );
}
