use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use conference_portal::command::{create_command, remove_command};
use conference_portal::config::{load_config, PortalConfig};
use conference_portal::forms::{CreateForm, FieldError, RemoveForm};

#[derive(Parser)]
#[command(name = "conference-cmd")]
#[command(about = "Generate conference user commands without the web portal", long_about = None)]
struct Cli {
    /// Portal configuration (script names, locations).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print JSON instead of the bare command.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Command for New-ConferenceUsers.ps1
    Create(CreateArgs),
    /// Command for Remove-ConferenceUsers.ps1
    Remove(RemoveArgs),
}

#[derive(Args)]
struct CreateArgs {
    #[arg(long)]
    conference_name: String,
    /// Defaults to the configured user count.
    #[arg(long)]
    user_count: Option<String>,
    #[arg(long)]
    domain: Option<String>,
    #[arg(long)]
    password: Option<String>,
    /// Do not force a password change at first sign-in.
    #[arg(long)]
    no_force_password_change: bool,
    #[arg(long)]
    create_resource_groups: bool,
    #[arg(long)]
    subscription_id: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    excel_output_path: Option<String>,
    #[arg(long)]
    dry_run: bool,
}

#[derive(Args)]
struct RemoveArgs {
    #[arg(long)]
    conference_name: String,
    #[arg(long)]
    domain: Option<String>,
    /// Keep the conference groups.
    #[arg(long)]
    keep_groups: bool,
    #[arg(long)]
    remove_resource_groups: bool,
    #[arg(long)]
    force: bool,
    #[arg(long)]
    dry_run: bool,
}

fn checkbox(on: bool) -> Option<String> {
    on.then(|| "true".to_string())
}

impl From<CreateArgs> for CreateForm {
    fn from(args: CreateArgs) -> Self {
        Self {
            conference_name: Some(args.conference_name),
            user_count: args.user_count,
            domain: args.domain,
            password: args.password,
            force_password_change: checkbox(!args.no_force_password_change),
            create_resource_groups: checkbox(args.create_resource_groups),
            subscription_id: args.subscription_id,
            location: args.location,
            dry_run: checkbox(args.dry_run),
            excel_output_path: args.excel_output_path,
        }
    }
}

impl From<RemoveArgs> for RemoveForm {
    fn from(args: RemoveArgs) -> Self {
        Self {
            conference_name: Some(args.conference_name),
            domain: args.domain,
            remove_groups: checkbox(!args.keep_groups),
            remove_resource_groups: checkbox(args.remove_resource_groups),
            force: checkbox(args.force),
            dry_run: checkbox(args.dry_run),
        }
    }
}

fn report(errors: &[FieldError], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let errors: Vec<_> = errors
            .iter()
            .map(|e| serde_json::json!({ "field": e.field(), "message": e.to_string() }))
            .collect();
        eprintln!("{}", serde_json::to_string_pretty(&serde_json::json!({ "errors": errors }))?);
    } else {
        for e in errors {
            eprintln!("error: {e}");
        }
    }
    Ok(())
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PortalConfig::default(),
    };

    let (operation, result) = match cli.command {
        Commands::Create(args) => (
            "create",
            CreateForm::from(args)
                .validate(&config.form)
                .map(|req| create_command(&req, &config.scripts)),
        ),
        Commands::Remove(args) => (
            "remove",
            RemoveForm::from(args)
                .validate()
                .map(|req| remove_command(&req, &config.scripts)),
        ),
    };

    match result {
        Ok(command) if cli.json => {
            let body = serde_json::json!({ "operation": operation, "command": command });
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(command) => {
            println!("{command}");
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            report(&errors, cli.json)?;
            Ok(ExitCode::from(2))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_args(no_force_password_change: bool) -> CreateArgs {
        CreateArgs {
            conference_name: "Summit".into(),
            user_count: None,
            domain: None,
            password: None,
            no_force_password_change,
            create_resource_groups: false,
            subscription_id: None,
            location: None,
            excel_output_path: None,
            dry_run: true,
        }
    }

    fn remove_args(keep_groups: bool) -> RemoveArgs {
        RemoveArgs {
            conference_name: "Summit".into(),
            domain: None,
            keep_groups,
            remove_resource_groups: false,
            force: true,
            dry_run: false,
        }
    }

    fn create(args: CreateArgs) -> String {
        let config = PortalConfig::default();
        let req = CreateForm::from(args).validate(&config.form).unwrap();
        create_command(&req, &config.scripts)
    }

    fn remove(args: RemoveArgs) -> String {
        let req = RemoveForm::from(args).validate().unwrap();
        remove_command(&req, &PortalConfig::default().scripts)
    }

    #[test]
    fn password_change_is_forced_by_default() {
        let form = CreateForm::from(create_args(false));
        assert_eq!(form.force_password_change.as_deref(), Some("true"));
        assert_eq!(form.dry_run.as_deref(), Some("true"));
        assert_eq!(form.create_resource_groups, None);

        let cmd = create(create_args(false));
        assert!(!cmd.contains("-ForcePasswordChange $false"));
        assert!(cmd.ends_with("-UserCount 10 -DryRun"));
    }

    #[test]
    fn no_force_password_change_unsets_the_checkbox() {
        let form = CreateForm::from(create_args(true));
        assert_eq!(form.force_password_change, None);

        let cmd = create(create_args(true));
        assert!(cmd.ends_with("-ForcePasswordChange $false -DryRun"));
    }

    #[test]
    fn groups_are_removed_by_default() {
        let form = RemoveForm::from(remove_args(false));
        assert_eq!(form.remove_groups.as_deref(), Some("true"));
        assert_eq!(form.force.as_deref(), Some("true"));

        assert_eq!(
            remove(remove_args(false)),
            ".\\Remove-ConferenceUsers.ps1 -ConferenceName 'Summit' -Force"
        );
    }

    #[test]
    fn keep_groups_unsets_the_checkbox() {
        let form = RemoveForm::from(remove_args(true));
        assert_eq!(form.remove_groups, None);

        assert_eq!(
            remove(remove_args(true)),
            ".\\Remove-ConferenceUsers.ps1 -ConferenceName 'Summit' -RemoveGroups $false -Force"
        );
    }

    #[test]
    fn flags_parse_into_the_create_subcommand() {
        let cli = Cli::try_parse_from([
            "conference-cmd",
            "--json",
            "create",
            "--conference-name",
            "Summit",
            "--no-force-password-change",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.conference_name, "Summit");
                assert!(args.no_force_password_change);
            }
            Commands::Remove(_) => panic!("expected create"),
        }
    }
}
