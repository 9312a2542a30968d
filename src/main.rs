mod cli;

use cli::{Args, Command};
use fleet_dashboard::adapters::outbound::console::StderrProgressReporter;
use fleet_dashboard::adapters::outbound::network::FleetApiClient;
use fleet_dashboard::adapters::outbound::storage::JsonFileStorage;
use fleet_dashboard::application::dto::DashboardRequest;
use fleet_dashboard::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use fleet_dashboard::application::read_models::DashboardReadModelBuilder;
use fleet_dashboard::application::search::SearchLine;
use fleet_dashboard::application::session::{GuardDecision, Route, SessionService};
use fleet_dashboard::application::use_cases::{DashboardUseCase, LoginOutcome, LoginUseCase};
use fleet_dashboard::config::{self, Settings, SettingsOverrides};
use fleet_dashboard::fleet::domain::Credentials;
use fleet_dashboard::fleet::policies::ImageFallback;
use fleet_dashboard::ports::outbound::{KeyValueStorage, ProgressReporter};
use fleet_dashboard::shared::error::{ExitCode, FleetError};
use fleet_dashboard::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "fleet_dashboard=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(
        config,
        SettingsOverrides {
            api_url: args.api_url.clone(),
            session_file: args.session_file.clone(),
            format: args.format(),
        },
    )?;
    tracing::debug!(api_url = %settings.api_url, session_file = %settings.session_file.display(), "settings resolved");

    let colors = !args.no_color;
    let session = SessionService::new(JsonFileStorage::new(settings.session_file.clone()));

    match args.command {
        Command::Login { user, password } => {
            let password = match password {
                Some(password) => password,
                None => read_password().await?,
            };
            login(&settings, session, progress_reporter(colors), &user, &password).await
        }
        Command::Logout => {
            session.logout()?;
            progress_reporter(colors).report_completion("👋 Logged out");
            Ok(ExitCode::Success)
        }
        Command::Whoami => {
            if !session.is_logged_in()? {
                return Err(FleetError::NotAuthenticated.into());
            }
            let user = session
                .current_user()?
                .ok_or(FleetError::NotAuthenticated)?;
            println!("{}", user.name);
            Ok(ExitCode::Success)
        }
        Command::Dashboard {
            model,
            code,
            output,
            ..
        } => {
            require_session(&session)?;
            let request = DashboardRequest::new(model, code);
            dashboard(&settings, colors, request, output).await
        }
        Command::Search { .. } => {
            require_session(&session)?;
            search(&settings, colors).await
        }
    }
}

/// Explicit `--config` must exist; otherwise look in the current directory
fn load_config(path: Option<&Path>) -> Result<Option<config::ConfigFile>> {
    match path {
        Some(path) => Ok(Some(config::load_config_from_path(path)?)),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)
        }
    }
}

fn require_session<S: KeyValueStorage>(session: &SessionService<S>) -> Result<()> {
    match session.guard(Route::Dashboard)? {
        GuardDecision::Allow => Ok(()),
        GuardDecision::Redirect(_) => Err(FleetError::NotAuthenticated.into()),
    }
}

fn progress_reporter(colors: bool) -> StderrProgressReporter {
    if colors && std::io::stderr().is_terminal() {
        StderrProgressReporter::new()
    } else {
        StderrProgressReporter::without_colors()
    }
}

fn client(settings: &Settings) -> Result<FleetApiClient> {
    FleetApiClient::new(&settings.api_url, settings.timeout)
}

async fn read_password() -> Result<String> {
    eprint!("Password: ");
    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

async fn login(
    settings: &Settings,
    session: SessionService<JsonFileStorage>,
    reporter: StderrProgressReporter,
    user: &str,
    password: &str,
) -> Result<ExitCode> {
    let use_case = LoginUseCase::new(client(settings)?, session, reporter);

    match use_case.execute(&Credentials::new(user, password)).await? {
        LoginOutcome::Success { user, next } => {
            tracing::debug!(user = %user.name, next = %next, "logged in");
            Ok(ExitCode::Success)
        }
        LoginOutcome::AlreadyLoggedIn { next } => {
            eprintln!("ℹ️  Already logged in (continue with `{}`)", next);
            Ok(ExitCode::Success)
        }
        LoginOutcome::Rejected(_) => Ok(ExitCode::LoginRejected),
    }
}

async fn dashboard(
    settings: &Settings,
    colors: bool,
    request: DashboardRequest,
    output: Option<PathBuf>,
) -> Result<ExitCode> {
    let use_case = DashboardUseCase::new(client(settings)?, progress_reporter(colors));
    let state = use_case.execute(request).await?;

    let colored_output = colors && output.is_none() && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(settings.format, colored_output);
    let images = ImageFallback::new(settings.assets_dir.clone());
    let rendered = formatter.format(&DashboardReadModelBuilder::build(&state, &images))?;

    let presenter = PresenterFactory::create(PresenterType::from_output(output));
    presenter.present(&rendered)?;

    Ok(ExitCode::Success)
}

async fn search(settings: &Settings, colors: bool) -> Result<ExitCode> {
    let use_case = DashboardUseCase::new(client(settings)?, progress_reporter(colors));
    let mut state = use_case.load().await;
    let (input, subscription) = use_case.start_search(&state, settings.search_debounce)?;

    let colored_output = colors && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(settings.format, colored_output);
    let images = ImageFallback::new(settings.assets_dir.clone());
    let presenter = PresenterFactory::create(PresenterType::Stdout);

    if std::io::stdin().is_terminal() {
        eprintln!("🔎 Type a vehicle model and press Enter (Ctrl-D to quit)");
        eprintln!("   :code <term> searches codes, :clear resets, :deselect drops the selection");
    }

    // Dropping `input` at end of stdin flushes the last query
    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => match SearchLine::parse(&line) {
                    SearchLine::Model(text) => input.push(text),
                    SearchLine::Command(command) => input.command(command),
                    SearchLine::Unknown(name) => {
                        tracing::warn!(command = %name, "unknown search command ignored")
                    }
                },
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "stopped reading search input");
                    break;
                }
            }
        }
    });

    let result = use_case
        .run_search(&mut state, subscription, |state, _event| {
            let rendered = formatter.format(&DashboardReadModelBuilder::build(state, &images))?;
            presenter.present(&rendered)
        })
        .await;

    reader.abort();
    result.map(|_| ExitCode::Success)
}
