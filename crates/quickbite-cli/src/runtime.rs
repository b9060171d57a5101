// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use quickbite_app::{
    Field, FieldValue, ListView, Record, RecordProvider, SortSpec, ViewEvent, ViewIntent,
};
use std::fmt::Write as _;
use tracing::{info, warn};

/// One step requested on the command line, still in raw string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Query(String),
    Category(String),
    Tab(String),
    Sort(String),
    Toggle { key: String, field: String },
    Set { key: String, field: String, value: String },
    Default { key: String, field: String },
    Remove(String),
}

impl CliAction {
    pub fn is_remove(&self) -> bool {
        matches!(self, Self::Remove(_))
    }
}

/// Loads the view, applies `actions` in order, and renders the result.
pub fn run_view<R, P>(provider: &P, actions: &[CliAction]) -> Result<String>
where
    R: Record,
    P: RecordProvider<R> + ?Sized,
{
    let mut view = ListView::load(provider)?;
    for action in actions {
        let intent = resolve_intent::<R>(action)?;
        let events = view
            .dispatch(intent)
            .with_context(|| format!("apply {} to {}", describe(action), R::VIEW))?;
        log_events::<R>(&events);
    }
    Ok(render(&mut view))
}

fn resolve_intent<R: Record>(action: &CliAction) -> Result<ViewIntent<R>> {
    let intent = match action {
        CliAction::Query(text) => ViewIntent::QueryChanged(text.clone()),
        CliAction::Category(value) => ViewIntent::CategorySelected(value.clone()),
        CliAction::Tab(value) => ViewIntent::TabSelected(value.clone()),
        CliAction::Sort(raw) => {
            let sort = SortSpec::<R::Field>::parse(raw).ok_or_else(|| {
                anyhow!(
                    "cannot sort {} by {raw:?}; use <field>[:asc|:desc] with one of: {}",
                    R::VIEW,
                    field_names::<R>()
                )
            })?;
            ViewIntent::SortRequested(Some(sort))
        }
        CliAction::Toggle { key, field } => ViewIntent::ToggleRequested {
            key: parse_key::<R>(key)?,
            field: parse_field::<R>(field)?,
        },
        CliAction::Set { key, field, value } => {
            let field = parse_field::<R>(field)?;
            let value = FieldValue::parse_for_kind(field.kind(), value).ok_or_else(|| {
                anyhow!(
                    "{value:?} is not a {} value for {}.{}",
                    field.kind(),
                    R::VIEW,
                    field.name()
                )
            })?;
            ViewIntent::FieldSetRequested {
                key: parse_key::<R>(key)?,
                field,
                value,
            }
        }
        CliAction::Default { key, field } => ViewIntent::ExclusiveFlagRequested {
            field: parse_field::<R>(field)?,
            key: parse_key::<R>(key)?,
        },
        CliAction::Remove(key) => ViewIntent::RemoveConfirmed(parse_key::<R>(key)?),
    };
    Ok(intent)
}

fn parse_key<R: Record>(raw: &str) -> Result<R::Key> {
    raw.trim()
        .parse()
        .map_err(|_| anyhow!("{raw:?} is not a valid {} key", R::VIEW))
}

fn parse_field<R: Record>(raw: &str) -> Result<R::Field> {
    <R::Field as Field>::parse(raw).ok_or_else(|| {
        anyhow!(
            "{} has no field {raw:?}; use one of: {}",
            R::VIEW,
            field_names::<R>()
        )
    })
}

fn field_names<R: Record>() -> String {
    <R::Field as Field>::ALL
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe(action: &CliAction) -> String {
    match action {
        CliAction::Query(text) => format!("--query {text:?}"),
        CliAction::Category(value) => format!("--category {value:?}"),
        CliAction::Tab(value) => format!("--tab {value:?}"),
        CliAction::Sort(raw) => format!("--sort {raw}"),
        CliAction::Toggle { key, field } => format!("--toggle {key}:{field}"),
        CliAction::Set { key, field, value } => format!("--set {key}:{field}={value}"),
        CliAction::Default { key, field } => format!("--default {key}:{field}"),
        CliAction::Remove(key) => format!("--remove {key}"),
    }
}

fn log_events<R: Record>(events: &[ViewEvent<R::Key>]) {
    for event in events {
        match event {
            ViewEvent::NoEffect(key) => {
                warn!(view = R::VIEW, %key, "no record with that key; nothing changed");
            }
            ViewEvent::RecordUpdated(key) => info!(view = R::VIEW, %key, "record updated"),
            ViewEvent::RecordRemoved(key) => info!(view = R::VIEW, %key, "record removed"),
            ViewEvent::ExclusiveFlagMoved { field, key } => {
                info!(view = R::VIEW, %key, field = *field, "flag moved");
            }
            other => info!(view = R::VIEW, event = ?other, "filter changed"),
        }
    }
}

/// Plain text table, one column per field, then `N of M records`.
pub fn render<R: Record>(view: &mut ListView<R>) -> String {
    let total = view.store().len();
    let fields = <R::Field as Field>::ALL;
    let rows: Vec<Vec<String>> = view
        .derived_view()
        .records()
        .map(|record| {
            fields
                .iter()
                .map(|field| record.get(*field).display())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = fields.iter().map(|field| field.name().len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = fields.iter().map(|field| field.name().to_owned()).collect();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    let _ = writeln!(out, "{} of {} records", rows.len(), total);
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}
