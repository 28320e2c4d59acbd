//! CLI commands: navigation check, width classification, interaction replay
//!
//! Replay scripts hold one step per line; `#` starts a comment.
//!
//! ```text
//! resize 1280
//! hover learn        # pointer enters the "learn" item
//! leave
//! wait 150
//! ```

use anyhow::{bail, Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use sitehead_core::runtime::{HeaderEvent, HeaderHandle, HeaderSnapshot};
use sitehead_core::{NavigationSet, Regime, ViewportClass};
use std::time::Duration;

// ============================================================================
// Script
// ============================================================================

/// One parsed line of a replay script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Event(HeaderEvent),
    Wait(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line_number: usize,
    pub source: String,
    pub step: Step,
}

fn parse_step(command: &str, argument: Option<&str>) -> Result<Step> {
    let require = |what: &str| argument.with_context(|| format!("'{}' needs {}", command, what));

    let step = match command {
        "resize" => {
            let width = require("a width")?
                .parse::<u32>()
                .context("Invalid width (expected pixels, e.g. resize 1280)")?;
            Step::Event(HeaderEvent::Resize(width))
        }
        "mobile" => Step::Event(HeaderEvent::SetViewport(ViewportClass::Mobile)),
        "desktop" => Step::Event(HeaderEvent::SetViewport(ViewportClass::NotMobile)),
        "enter" => Step::Event(HeaderEvent::PointerEnter),
        "leave" => Step::Event(HeaderEvent::PointerLeave),
        "focus" => Step::Event(HeaderEvent::FocusIn),
        "blur" => Step::Event(HeaderEvent::FocusOut),
        "hover" => Step::Event(HeaderEvent::EnterItem(require("a slug")?.to_string())),
        "focus-item" => Step::Event(HeaderEvent::FocusItem(require("a slug")?.to_string())),
        "toggle" => Step::Event(HeaderEvent::ToggleMobileMenu),
        "open-menu" => Step::Event(HeaderEvent::SetMobileMenuOpen(true)),
        "close-menu" => Step::Event(HeaderEvent::SetMobileMenuOpen(false)),
        "navigate" => Step::Event(HeaderEvent::Navigate),
        "close-subnav" => Step::Event(HeaderEvent::CloseSubnav),
        "wait" => {
            let ms = require("milliseconds")?
                .parse::<u64>()
                .context("Invalid wait (expected milliseconds, e.g. wait 150)")?;
            Step::Wait(Duration::from_millis(ms))
        }
        other => bail!("Unknown step '{}'", other),
    };

    Ok(step)
}

/// Parse a whole replay script
pub fn parse_script(content: &str) -> Result<Vec<ScriptLine>> {
    let mut lines = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line_number = index + 1;
        let source = raw.split('#').next().unwrap_or_default().trim();
        if source.is_empty() {
            continue;
        }

        let mut parts = source.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let argument = parts.next();
        if parts.next().is_some() {
            bail!("Line {}: too many arguments in '{}'", line_number, source);
        }

        let step = parse_step(command, argument)
            .with_context(|| format!("Line {}: '{}'", line_number, source))?;
        lines.push(ScriptLine {
            line_number,
            source: source.to_string(),
            step,
        });
    }

    Ok(lines)
}

// ============================================================================
// Replay
// ============================================================================

/// Header state after one script line
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayRecord {
    pub line: usize,
    pub step: String,
    pub regime: Regime,
    pub subnav_open_slug: Option<String>,
    pub subnav_items: Vec<String>,
    pub mobile_menu_open: bool,
    pub is_mobile: bool,
    pub hovered: bool,
    pub dismiss_pending: bool,
    pub scroll_locked: bool,
}

impl ReplayRecord {
    fn new(line: &ScriptLine, snapshot: HeaderSnapshot) -> Self {
        Self {
            line: line.line_number,
            step: line.source.clone(),
            regime: snapshot.regime,
            subnav_open_slug: snapshot.decision.subnav_open_slug,
            subnav_items: snapshot
                .decision
                .subnav_items
                .into_iter()
                .map(|item| item.slug)
                .collect(),
            mobile_menu_open: snapshot.decision.mobile_menu_open,
            is_mobile: snapshot.decision.is_mobile,
            hovered: snapshot.hovered,
            dismiss_pending: snapshot.pending_dismiss.is_some(),
            scroll_locked: snapshot.holds_scroll_lock,
        }
    }
}

/// Drive a running header through `script`, recording state after each line
pub async fn replay(header: &HeaderHandle, script: &[ScriptLine]) -> Result<Vec<ReplayRecord>> {
    let mut records = Vec::with_capacity(script.len());

    for line in script {
        match &line.step {
            Step::Event(event) => header
                .send(event.clone())
                .with_context(|| format!("Failed to apply line {}", line.line_number))?,
            Step::Wait(duration) => tokio::time::sleep(*duration).await,
        }

        let snapshot = header
            .snapshot()
            .await
            .context("Header runtime stopped during replay")?;
        records.push(ReplayRecord::new(line, snapshot));
    }

    Ok(records)
}

// ============================================================================
// Output
// ============================================================================

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

pub fn print_replay_table(records: &[ReplayRecord], no_color: bool) {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Line", "Step", "Regime", "Subnav", "Items", "Menu", "Mobile", "Lock",
        ]);

    for record in records {
        let mut regime = Cell::new(record.regime.name());
        if !no_color {
            regime = regime.fg(match record.regime {
                Regime::Idle => Color::DarkGrey,
                Regime::DesktopSubnavOpen => Color::Green,
                Regime::DesktopSubnavDismissing => Color::Yellow,
                Regime::MobileMenuOpen => Color::Cyan,
            });
        }

        table.add_row(vec![
            Cell::new(record.line),
            Cell::new(&record.step),
            regime,
            Cell::new(record.subnav_open_slug.as_deref().unwrap_or("-")),
            Cell::new(record.subnav_items.join(", ")),
            Cell::new(yes_no(record.mobile_menu_open)),
            Cell::new(yes_no(record.is_mobile)),
            Cell::new(yes_no(record.scroll_locked)),
        ]);
    }

    println!("{table}");
}

pub fn print_navigation_table(navigation: &NavigationSet) {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Slug", "Label", "Href", "Children"]);

    for item in navigation.items() {
        let children = item
            .children
            .iter()
            .map(|c| c.slug.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(&item.slug),
            Cell::new(&item.label),
            Cell::new(item.href.as_deref().unwrap_or("-")),
            Cell::new(if children.is_empty() { "-".to_string() } else { children }),
        ]);
    }

    println!("{table}");
}
