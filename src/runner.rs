use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use camino::Utf8Path;
use tracing::{debug, info};

use crate::cli::{Cli, Command, InitArgs};
use crate::folders::ASSET_FOLDERS;
use crate::init::{self, FolderPlan, FolderState};

pub fn run(cli: Cli) -> Result<()> {
    let ctx = CliContext::from(&cli);
    let command = resolve_command(&cli)?;
    ctx.apply_chdir()?;

    match command {
        Command::Init(args) => handle_init(args),
        Command::List => handle_list(),
        Command::Status => handle_status(),
    }
}

/// Fold the top-level `init` flags into the selected command.
fn resolve_command(cli: &Cli) -> Result<Command> {
    match cli.command {
        None => Ok(Command::Init(cli.init)),
        Some(Command::Init(args)) => Ok(Command::Init(InitArgs {
            dry_run: args.dry_run || cli.init.dry_run,
        })),
        Some(_) if cli.init.dry_run => bail!("--dry-run only applies to `init`"),
        Some(other) => Ok(other),
    }
}

fn handle_init(args: InitArgs) -> Result<()> {
    if args.dry_run {
        let plans = init::plan_folders(Utf8Path::new("."), ASSET_FOLDERS);
        let pending = plans.iter().filter(|plan| plan.would_create()).count();
        debug!(pending, "dry-run planned");
        print!("{}", format_dry_run(&plans));
        return Ok(());
    }

    debug!(count = ASSET_FOLDERS.len(), "ensuring asset folders");
    init::ensure_folders(ASSET_FOLDERS)?;
    info!("asset folders ready");
    Ok(())
}

fn handle_list() -> Result<()> {
    for folder in ASSET_FOLDERS {
        println!("{}", folder);
    }
    Ok(())
}

fn handle_status() -> Result<()> {
    let plans = init::plan_folders(Utf8Path::new("."), ASSET_FOLDERS);
    print!("{}", format_status(&plans));
    Ok(())
}

fn format_status(plans: &[FolderPlan<'_>]) -> String {
    let mut out = String::new();
    for plan in plans {
        let _ = writeln!(out, "{:28} {}", plan.path, plan.state.label());
    }
    out
}

fn format_dry_run(plans: &[FolderPlan<'_>]) -> String {
    let mut out = String::new();
    for plan in plans {
        let _ = match plan.state {
            FolderState::Present => writeln!(out, "[dry-run] exists {}", plan.path),
            FolderState::Missing => writeln!(out, "[dry-run] would create {}", plan.path),
            FolderState::Blocked => writeln!(out, "[dry-run] cannot create {} (blocked)", plan.path),
        };
    }
    out
}

#[derive(Debug)]
struct CliContext {
    chdir: Option<PathBuf>,
}

impl CliContext {
    fn apply_chdir(&self) -> Result<()> {
        if let Some(path) = &self.chdir {
            std::env::set_current_dir(path)
                .with_context(|| format!("changing directory to {}", path.display()))?;
        }
        Ok(())
    }
}

impl From<&Cli> for CliContext {
    fn from(cli: &Cli) -> Self {
        Self {
            chdir: cli.chdir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plans() -> Vec<FolderPlan<'static>> {
        vec![
            FolderPlan {
                path: "Assets/Art",
                state: FolderState::Present,
            },
            FolderPlan {
                path: "Assets/Audio",
                state: FolderState::Missing,
            },
            FolderPlan {
                path: "Assets/Prefabs",
                state: FolderState::Blocked,
            },
        ]
    }

    #[test]
    fn status_lists_every_folder_in_order() {
        let text = format_status(&plans());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Assets/Art "));
        assert!(lines[0].ends_with("✓ present"));
        assert!(lines[1].ends_with("❌ missing"));
        assert!(lines[2].ends_with("⚠️  blocked"));
    }

    #[test]
    fn dry_run_describes_each_outcome() {
        let text = format_dry_run(&plans());
        assert_eq!(
            text,
            "[dry-run] exists Assets/Art\n\
             [dry-run] would create Assets/Audio\n\
             [dry-run] cannot create Assets/Prefabs (blocked)\n"
        );
    }

    fn parse(args: &[&str]) -> Cli {
        use clap::Parser;
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn dry_run_before_init_is_kept() {
        let command = resolve_command(&parse(&["assetinit", "-n", "init"])).unwrap();
        assert_eq!(command, Command::Init(InitArgs { dry_run: true }));
    }

    #[test]
    fn bare_run_resolves_to_init() {
        let command = resolve_command(&parse(&["assetinit"])).unwrap();
        assert_eq!(command, Command::Init(InitArgs::default()));
    }

    #[test]
    fn dry_run_before_report_command_is_an_error() {
        for sub in ["list", "status"] {
            let err = resolve_command(&parse(&["assetinit", "-n", sub])).unwrap_err();
            assert!(err.to_string().contains("only applies to `init`"));
        }
    }

    #[test]
    fn missing_chdir_target_is_an_error() {
        let ctx = CliContext {
            chdir: Some(PathBuf::from("/definitely/not/here/assetinit")),
        };
        let err = ctx.apply_chdir().unwrap_err();
        assert!(err.to_string().starts_with("changing directory to"));
    }
}
