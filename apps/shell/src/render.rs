//! Plain-text rendering of shell results.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use rhub::domain::partner::PartnerRecord;
use rhub::features::campaign::{CountdownParts, DistributionResult, format_krw};
use rhub::features::partners::IssuedCode;
use std::io::{self, Write};

pub(crate) fn quote(out: &mut impl Write, result: &DistributionResult, rate: f64) -> io::Result<()> {
    let rows = [
        ("Price", result.price),
        ("Cost (20%)", result.cost),
        ("Reward fund (60%)", result.reward_fund),
        ("Company gross (20%)", result.company_gross),
        ("  Partner fee (5%)", result.partner_fee),
        ("  Company net (15%)", result.company_net),
        ("Customer target (130%)", result.customer_target),
    ];
    for (label, amount) in rows {
        writeln!(out, "{label:<24}{:>16}", format_krw(amount))?;
    }

    let instant = format!("  Instant ({:.0}%)", rate * 100.0);
    writeln!(out, "{instant:<24}{:>16}", format_krw(result.instant_reward))?;
    writeln!(out, "{:<24}{:>16}", "  Reserved", format_krw(result.reserved_reward))
}

pub(crate) fn countdown(
    out: &mut impl Write,
    parts: &CountdownParts,
    deadline: DateTime<FixedOffset>,
    open: bool,
) -> io::Result<()> {
    writeln!(out, "Deadline   {}", deadline.format("%Y-%m-%d %H:%M %:z"))?;
    writeln!(out, "Remaining  {parts}")?;
    let status = if open { "open" } else { "closed for good" };
    writeln!(out, "Partner enrolment is {status}")
}

pub(crate) fn issued(out: &mut impl Write, issued: &IssuedCode) -> io::Result<()> {
    writeln!(out, "Your code: {}", issued.record.code)?;
    if let Some(partner_ref) = &issued.record.partner_ref {
        writeln!(out, "Referred by: {partner_ref}")?;
    }
    writeln!(out, "Sheet: {}", issued.mirror)
}

pub(crate) fn records(out: &mut impl Write, records: &[PartnerRecord]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "No records found.");
    }

    for record in records {
        writeln!(
            out,
            "{}  {}  {}  {}  deposit {} by {}  ref {}  created {}",
            record.code,
            record.name,
            record.phone,
            record.email,
            record.deposit_at,
            record.depositor_name,
            record.partner_ref.as_deref().unwrap_or("-"),
            record.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;
    }
    writeln!(out, "{} record(s)", records.len())
}
