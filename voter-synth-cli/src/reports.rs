use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use voter_synth::{Breakdown, CampaignDemographicsReport};

const BAR_WIDTH: u32 = 25;

pub fn generate_console_report<W: Write + ?Sized>(
    out: &mut W,
    report: &CampaignDemographicsReport,
) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format!("📊 Campaign Demographics: {}", report.campaign_id)
            .bright_cyan()
            .bold()
    )?;
    writeln!(out, "{}", "==============================".cyan())?;
    writeln!(out, "Total participants: {}", report.total_participants)?;
    writeln!(
        out,
        "Verified voters: {} ({}%)",
        report.verified_voters.to_string().green(),
        report.verified_voter_pct
    )?;
    writeln!(
        out,
        "Support: {} ({}%)  Oppose: {} ({}%)",
        report.stance.support.to_string().green(),
        report.stance.support_pct,
        report.stance.oppose.to_string().red(),
        report.stance.oppose_pct
    )?;
    writeln!(
        out,
        "Average general turnout: {}%",
        report.turnout.average_general_pct
    )?;
    writeln!(
        out,
        "Engagement: high {} ({}%), medium {} ({}%), low {} ({}%)",
        report.engagement.high,
        report.engagement.high_pct,
        report.engagement.medium,
        report.engagement.medium_pct,
        report.engagement.low,
        report.engagement.low_pct
    )?;
    writeln!(
        out,
        "Households: homeowner {}%, children {}%, veteran {}%",
        report.household.homeowner_pct,
        report.household.children_present_pct,
        report.household.veteran_in_household_pct
    )?;
    writeln!(out)?;

    for (name, breakdown) in report.demographics.dimensions() {
        write_console_breakdown(out, name, breakdown)?;
    }
    write_console_breakdown(out, "general_turnout", &report.turnout.general)?;
    write_console_breakdown(out, "primary_turnout", &report.turnout.primary)?;
    Ok(())
}

fn write_console_breakdown<W: Write + ?Sized>(
    out: &mut W,
    name: &str,
    breakdown: &Breakdown,
) -> Result<()> {
    writeln!(out, "{}", name.bright_yellow().bold())?;
    for (key, pct) in breakdown {
        let filled = usize::try_from((*pct).min(100) * BAR_WIDTH / 100).unwrap_or(0);
        writeln!(out, "  {key:22} {pct:>3}% {}", "█".repeat(filled).cyan())?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(
    out: &mut W,
    report: &CampaignDemographicsReport,
) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    out: &mut W,
    report: &CampaignDemographicsReport,
) -> Result<()> {
    writeln!(out, "# Campaign Demographics: {}\n", report.campaign_id)?;

    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total participants**: {}", report.total_participants)?;
    writeln!(
        out,
        "- **Verified voters**: {} ({}%)",
        report.verified_voters, report.verified_voter_pct
    )?;
    writeln!(
        out,
        "- **Support / Oppose**: {}% / {}%",
        report.stance.support_pct, report.stance.oppose_pct
    )?;
    writeln!(
        out,
        "- **Average general turnout**: {}%",
        report.turnout.average_general_pct
    )?;
    writeln!(
        out,
        "- **Engagement (high / medium / low)**: {}% / {}% / {}%\n",
        report.engagement.high_pct, report.engagement.medium_pct, report.engagement.low_pct
    )?;

    writeln!(out, "## Breakdown\n")?;
    let turnout = [
        ("general_turnout", &report.turnout.general),
        ("primary_turnout", &report.turnout.primary),
    ];
    for (name, breakdown) in report.demographics.dimensions().into_iter().chain(turnout) {
        writeln!(out, "### {name}\n")?;
        writeln!(out, "| Category | % |")?;
        writeln!(out, "| --- | ---: |")?;
        for (key, pct) in breakdown {
            writeln!(out, "| {key} | {pct} |")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
