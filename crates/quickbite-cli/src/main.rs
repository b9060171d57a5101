// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result, anyhow, bail};
use config::Config;
use quickbite_app::{
    Advertisement, Console, Credentials, FixtureProvider, FoodItem, JsonFileProvider, Order,
    Record, Review, Session, Shift, Vehicle, ViewKind, WithdrawMethod, demo,
};
use runtime::{CliAction, run_view};
use serde::de::DeserializeOwned;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

/// The mock sign-in only checks that a password is present.
const LOCAL_PASSWORD: &str = "local";

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `quickbite --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;
    logging::init(config.log_filter())?;

    let console = match &options.console {
        Some(raw) => Console::parse(raw).ok_or_else(|| {
            anyhow!("unknown console {raw:?}; use one of: admin, partner, restaurant")
        })?,
        None => config.console(),
    };
    let email = options
        .user
        .clone()
        .unwrap_or_else(|| config.user().to_owned());

    let mut session = Session::default();
    session
        .sign_in(
            console,
            Credentials {
                email,
                password: LOCAL_PASSWORD.to_owned(),
            },
        )
        .with_context(|| format!("sign in to the {} console", console.as_str()))?;

    if options.list_views {
        for view in console.views() {
            println!("{}", view.label());
        }
        return Ok(());
    }

    let raw_view = options.view.as_deref().ok_or_else(|| {
        anyhow!("--view is required; run `quickbite --list-views` to see what this console offers")
    })?;
    let kind = ViewKind::parse(raw_view)
        .ok_or_else(|| anyhow!("unknown view {raw_view:?}; run with --list-views"))?;
    session.open(kind)?;

    let source = DataSource::resolve(kind, options.data.as_deref(), config.data_dir().as_deref());
    info!(view = kind.label(), source = %source.describe(), "opening view");

    let output = match kind {
        ViewKind::Orders => source.run::<Order>(demo::order_provider, &options.actions)?,
        ViewKind::Shifts => source.run::<Shift>(demo::shift_provider, &options.actions)?,
        ViewKind::Vehicles => source.run::<Vehicle>(demo::vehicle_provider, &options.actions)?,
        ViewKind::Advertisements => {
            source.run::<Advertisement>(demo::advertisement_provider, &options.actions)?
        }
        ViewKind::Reviews => source.run::<Review>(demo::review_provider, &options.actions)?,
        ViewKind::WithdrawMethods => {
            source.run::<WithdrawMethod>(demo::withdraw_method_provider, &options.actions)?
        }
        ViewKind::Menu => source.run::<FoodItem>(demo::menu_provider, &options.actions)?,
    };
    print!("{output}");
    Ok(())
}

/// Where a view's records come from: an explicit file, `<data.dir>/<view>.json`
/// when it exists, or the built-in demo set.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DataSource {
    File(JsonFileProvider),
    Demo,
}

impl DataSource {
    fn resolve(kind: ViewKind, explicit: Option<&Path>, data_dir: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::File(JsonFileProvider::new(path));
        }
        if let Some(dir) = data_dir {
            let provider = JsonFileProvider::new(dir.join(format!("{}.json", kind.label())));
            if provider.exists() {
                return Self::File(provider);
            }
        }
        Self::Demo
    }

    fn describe(&self) -> String {
        match self {
            Self::File(provider) => provider.path().display().to_string(),
            Self::Demo => "demo data".to_owned(),
        }
    }

    fn run<R>(&self, demo: fn() -> FixtureProvider<R>, actions: &[CliAction]) -> Result<String>
    where
        R: Record + DeserializeOwned,
    {
        match self {
            Self::File(provider) => run_view::<R, _>(provider, actions),
            Self::Demo => run_view(&demo(), actions),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    console: Option<String>,
    user: Option<String>,
    view: Option<String>,
    data: Option<PathBuf>,
    actions: Vec<CliAction>,
    confirmed: bool,
    print_config_path: bool,
    print_example: bool,
    list_views: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        console: None,
        user: None,
        view: None,
        data: None,
        actions: Vec::new(),
        confirmed: false,
        print_config_path: false,
        print_example: false,
        list_views: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        let flag = arg.as_ref();
        let mut value = |what: &str| -> Result<String> {
            iter.next()
                .map(|value| value.as_ref().to_owned())
                .ok_or_else(|| anyhow!("{flag} requires {what}"))
        };
        match flag {
            "--config" => options.config_path = PathBuf::from(value("a file path")?),
            "--console" => options.console = Some(value("a console name")?),
            "--user" => options.user = Some(value("an email address")?),
            "--view" => options.view = Some(value("a view name")?),
            "--data" => options.data = Some(PathBuf::from(value("a JSON file path")?)),
            "--query" => options.actions.push(CliAction::Query(value("search text")?)),
            "--category" => options.actions.push(CliAction::Category(value("a category")?)),
            "--tab" => options.actions.push(CliAction::Tab(value("a status tab")?)),
            "--sort" => options.actions.push(CliAction::Sort(value("<field>[:desc]")?)),
            "--toggle" => {
                let (key, field) = split_target(flag, &value("<key>:<field>")?)?;
                options.actions.push(CliAction::Toggle { key, field });
            }
            "--set" => {
                let raw = value("<key>:<field>=<value>")?;
                let Some((target, new_value)) = raw.split_once('=') else {
                    bail!("--set expects <key>:<field>=<value>, got {raw:?}");
                };
                let (key, field) = split_target(flag, target)?;
                options.actions.push(CliAction::Set {
                    key,
                    field,
                    value: new_value.to_owned(),
                });
            }
            "--default" => {
                let (key, field) = split_target(flag, &value("<key>:<field>")?)?;
                options.actions.push(CliAction::Default { key, field });
            }
            "--remove" => options.actions.push(CliAction::Remove(value("a record key")?)),
            "--yes" | "-y" => options.confirmed = true,
            "--print-config-path" => options.print_config_path = true,
            "--print-example-config" => options.print_example = true,
            "--list-views" => options.list_views = true,
            "--help" | "-h" => options.show_help = true,
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    if !options.confirmed
        && let Some(CliAction::Remove(key)) = options.actions.iter().find(|a| a.is_remove())
    {
        bail!("--remove {key} deletes a record; add --yes to confirm");
    }

    Ok(options)
}

fn split_target(flag: &str, raw: &str) -> Result<(String, String)> {
    match raw.split_once(':') {
        Some((key, field)) if !key.trim().is_empty() && !field.trim().is_empty() => {
            Ok((key.trim().to_owned(), field.trim().to_owned()))
        }
        _ => bail!("{flag} expects <key>:<field>, got {raw:?}"),
    }
}

fn print_help() {
    println!("quickbite");
    println!("  --config <path>              Use a specific config path");
    println!("  --console <name>             admin, partner, or restaurant");
    println!("  --user <email>               Sign in as this user");
    println!("  --view <name>                View to open (see --list-views)");
    println!("  --data <file.json>           Load records from a JSON file");
    println!("  --query <text>               Filter by free text");
    println!("  --category <value>           Filter by category (all to clear)");
    println!("  --tab <value>                Filter by status tab (all to clear)");
    println!("  --sort <field>[:desc]        Sort the visible records");
    println!("  --toggle <key>:<field>       Flip a yes/no field");
    println!("  --set <key>:<field>=<value>  Replace one field");
    println!("  --default <key>:<field>      Make one record the only one flagged");
    println!("  --remove <key>               Remove a record (needs --yes)");
    println!("  --yes                        Confirm removals");
    println!("  --list-views                 List views for the console");
    println!("  --print-config-path          Print resolved config path");
    println!("  --print-example-config       Print a v1 config template");
    println!("  --help                       Show this help");
}
