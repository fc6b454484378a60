use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use flowdeck_catalog::Catalog;
use flowdeck_session::{EditorCommand, Session, SessionOptions, SubmitOutcome, parse_script};
use flowdeck_settings::{ClientEnvironment, ConfigField, ProviderConfig, StandardInitializer};
use flowdeck_workflow::{Toast, ToastVariant};

/// Flowdeck - assemble provider modules into a workflow
#[derive(Parser)]
#[command(name = "flowdeck")]
#[command(version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// List the modules available in the palette
  Catalog {
    /// Print the catalog as JSON
    #[arg(long)]
    json: bool,
  },

  /// Build a workflow from editor commands
  Build {
    /// Script of editor commands (reads stdin when omitted)
    script: Option<PathBuf>,
  },

  /// Validate provider credentials and initialize the provider app
  Settings(SettingsArgs),
}

#[derive(Args)]
struct SettingsArgs {
  /// Path to a JSON settings file (default: <config dir>/flowdeck/provider.json if present)
  #[arg(long)]
  config: Option<PathBuf>,

  /// Resolve endpoints as a browser client would (enables messaging)
  #[arg(long)]
  browser: bool,

  #[arg(long)]
  api_key: Option<String>,
  #[arg(long)]
  auth_domain: Option<String>,
  #[arg(long)]
  project_id: Option<String>,
  #[arg(long)]
  storage_bucket: Option<String>,
  #[arg(long)]
  messaging_sender_id: Option<String>,
  #[arg(long)]
  app_id: Option<String>,
  #[arg(long)]
  database_url: Option<String>,
}

fn main() -> Result<()> {
  init_tracing();
  let cli = Cli::parse();

  match cli.command {
    Some(Commands::Catalog { json }) => print_catalog(json)?,
    Some(Commands::Build { script }) => build(script.as_deref())?,
    Some(Commands::Settings(args)) => settings(args)?,
    None => {
      println!("flowdeck - use --help to see available commands");
    }
  }

  Ok(())
}

fn init_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .with_target(false)
    .init();
}

fn print_catalog(json: bool) -> Result<()> {
  let catalog = Catalog::standard();

  if json {
    println!("{}", serde_json::to_string_pretty(catalog.definitions())?);
    return Ok(());
  }

  for definition in catalog.definitions() {
    println!(
      "{:<10} {:<16} {}",
      definition.kind.as_str(),
      definition.title,
      definition.description
    );
  }
  Ok(())
}

fn build(script: Option<&Path>) -> Result<()> {
  let content = match script {
    Some(path) => std::fs::read_to_string(path)
      .with_context(|| format!("failed to read script: {}", path.display()))?,
    None => {
      let mut input = String::new();
      io::stdin()
        .read_to_string(&mut input)
        .context("failed to read script from stdin")?;
      input
    }
  };

  let commands = parse_script(&content).context("failed to parse script")?;
  let mut session = Session::default();
  info!(session_id = %session.id(), commands = commands.len(), "running editor script");

  for command in &commands {
    session.run_command(command);
    print_toasts(&mut session);

    if *command == EditorCommand::List {
      for (index, module) in session.modules().iter().enumerate() {
        eprintln!("{index}: {} ({})", module.title, module.id);
      }
    }
  }

  println!("{}", serde_json::to_string_pretty(session.modules())?);
  Ok(())
}

fn settings(args: SettingsArgs) -> Result<()> {
  let mut config = match settings_path(args.config.as_deref()) {
    Some(path) => ProviderConfig::from_file(&path)
      .with_context(|| format!("failed to load settings: {}", path.display()))?,
    None => ProviderConfig::default(),
  };

  let overrides = [
    (ConfigField::ApiKey, args.api_key),
    (ConfigField::AuthDomain, args.auth_domain),
    (ConfigField::ProjectId, args.project_id),
    (ConfigField::StorageBucket, args.storage_bucket),
    (ConfigField::MessagingSenderId, args.messaging_sender_id),
    (ConfigField::AppId, args.app_id),
  ];
  for (field, value) in overrides {
    if let Some(value) = value {
      config.set(field, value);
    }
  }
  if args.database_url.is_some() {
    config.database_url = args.database_url;
  }

  let environment = if args.browser {
    ClientEnvironment::Browser
  } else {
    ClientEnvironment::Headless
  };
  let mut session = Session::new(SessionOptions {
    environment,
    ..SessionOptions::default()
  });

  let outcome = session.submit_settings(&config, &StandardInitializer);
  print_toasts(&mut session);

  match outcome {
    SubmitOutcome::Saved { .. } => {
      let services = session.provider().services()?;
      println!("{}", serde_json::to_string_pretty(&services)?);
      Ok(())
    }
    SubmitOutcome::Invalid(errors) => {
      for error in &errors {
        eprintln!("{}: {}", error.field, error.message);
      }
      bail!("{} required setting(s) missing", errors.len())
    }
    SubmitOutcome::Failed => bail!("provider initialization failed"),
  }
}

/// The explicit settings path, or the default one when it exists.
fn settings_path(explicit: Option<&Path>) -> Option<PathBuf> {
  if let Some(path) = explicit {
    return Some(path.to_path_buf());
  }

  dirs::config_dir()
    .map(|dir| dir.join("flowdeck").join("provider.json"))
    .filter(|path| path.exists())
}

fn print_toasts(session: &mut Session) {
  for Toast {
    title,
    description,
    variant,
  } in session.drain_toasts()
  {
    let marker = match variant {
      ToastVariant::Default => "+",
      ToastVariant::Destructive => "!",
    };
    eprintln!("[{marker}] {title}: {description}");
  }
}
