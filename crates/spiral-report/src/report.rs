//! Plain-text console report and JSON export for a batch of configurations.
//!
//! The text layout has one detailed section per configuration followed by
//! three summary tables: method comparison, spiral plus structural lines, and
//! net length. Rejected configurations are listed at the end.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::batch::{ConfigAnalysis, ConfigOutcome};

/// Widths used when laying out the text report.
///
/// Headings inside a configuration's section are underlined to their own
/// length; every other rule comes from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStyle {
    /// Width of the banner rules around the report title.
    pub banner_width: usize,
    /// Width of the method comparison table rule.
    pub summary_width: usize,
    /// Width of the spiral plus structural lines table rule.
    pub structural_width: usize,
    /// Width of the net length table rule.
    pub net_width: usize,
    /// Width of the rule under the rejected configuration list.
    pub rejected_width: usize,
    /// Column width for configuration names in summary tables.
    pub name_width: usize,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            banner_width: 60,
            summary_width: 140,
            structural_width: 100,
            net_width: 80,
            rejected_width: 40,
            name_width: 30,
        }
    }
}

/// A finished batch, ready to render.
pub struct BatchReport {
    pub generated: DateTime<Utc>,
    pub outcomes: Vec<ConfigOutcome>,
    pub style: ReportStyle,
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<&'a ConfigAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated: DateTime<Utc>,
    configurations: Vec<JsonOutcome<'a>>,
}

fn rule(c: char, width: usize) -> String {
    std::iter::repeat(c).take(width).collect()
}

/// Write `title` underlined with `c` to its own length.
fn heading(out: &mut String, title: &str, c: char) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", rule(c, title.chars().count()));
}

impl BatchReport {
    pub fn new(outcomes: Vec<ConfigOutcome>) -> Self {
        Self {
            generated: Utc::now(),
            outcomes,
            style: ReportStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ReportStyle) -> Self {
        self.style = style;
        self
    }

    fn successes(&self) -> impl Iterator<Item = (&ConfigOutcome, &ConfigAnalysis)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|a| (o, a)))
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Render the full console report.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let banner = rule('=', self.style.banner_width);
        let _ = writeln!(out, "DOUBLE CONICAL SPIRAL ANALYSIS");
        let _ = writeln!(out, "{banner}");
        let _ = writeln!(
            out,
            "Generated: {}",
            self.generated.format("%Y-%m-%d %H:%M:%S UTC")
        );

        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(analysis) => write_configuration(&mut out, &outcome.name, analysis),
                Err(err) => {
                    let _ = writeln!(out);
                    heading(&mut out, &outcome.name, '=');
                    let _ = writeln!(out, "REJECTED: {err}");
                }
            }
        }

        self.write_summaries(&mut out);

        let _ = writeln!(out, "\n{banner}");
        let _ = writeln!(
            out,
            "ANALYSIS COMPLETE: {} analyzed, {} rejected",
            self.outcomes.len() - self.failure_count(),
            self.failure_count()
        );
        let _ = writeln!(out, "{banner}");
        out
    }

    fn write_summaries(&self, out: &mut String) {
        let w = self.style.name_width;

        // Method comparison
        let _ = writeln!(out, "\n{}", rule('=', self.style.summary_width));
        let _ = writeln!(out, "CONFIGURATION COMPARISON SUMMARY");
        let _ = writeln!(out, "{}", rule('=', self.style.summary_width));
        let _ = writeln!(
            out,
            "{:<w$} {:<12} {:<12} {:<12} {:<15} {:<12} {:<12}",
            "Configuration",
            "Analytical",
            "Numerical",
            "Circular",
            "Best Match",
            "Struct Lines",
            "Net Length",
        );
        let _ = writeln!(out, "{}", rule('-', self.style.summary_width));
        for (outcome, a) in self.successes() {
            let c = &a.comparison;
            let _ = writeln!(
                out,
                "{:<w$} {:>9.2}    {:>9.2}    {:>9.2}    {:<15} {:>9.2}    {:>9.4}",
                outcome.short_name,
                c.analytical.total,
                c.numerical.total,
                c.circular_approximation.lengths.total,
                c.best_match().label(),
                a.structural_length(),
                a.net.total_length,
            );
        }

        // Spiral plus structural lines
        let structural = rule('=', self.style.structural_width);
        let _ = writeln!(out, "\n{structural}");
        let _ = writeln!(out, "STRUCTURAL CONFIGURATION SUMMARY (Spiral + Structural Lines)");
        let _ = writeln!(out, "{structural}");
        let _ = writeln!(
            out,
            "{:<w$} {:<15} {:<15} {:<15}",
            "Configuration", "Spiral Length", "Struct Lines", "Total Length",
        );
        let _ = writeln!(out, "{}", rule('-', self.style.structural_width));
        for (outcome, a) in self.successes() {
            let _ = writeln!(
                out,
                "{:<w$} {:>12.2}    {:>12.2}    {:>12.2}",
                outcome.short_name,
                a.comparison.analytical.total,
                a.structural_length(),
                a.total_material(),
            );
        }

        // Net length
        let net = rule('=', self.style.net_width);
        let _ = writeln!(out, "\n{net}");
        let _ = writeln!(out, "NET LENGTH CONFIGURATION SUMMARY");
        let _ = writeln!(out, "{net}");
        let _ = writeln!(
            out,
            "{:<w$} {:<15} {:<10} {:<10}",
            "Configuration", "Net Length", "Struts", "Anchors"
        );
        let _ = writeln!(out, "{}", rule('-', self.style.net_width));
        for (outcome, a) in self.successes() {
            let _ = writeln!(
                out,
                "{:<w$} {:>12.4}    {:>7}    {:>7}",
                outcome.short_name, a.net.total_length, a.net.strut_count, a.net.anchor_points,
            );
        }

        if self.failure_count() > 0 {
            let _ = writeln!(out, "\nREJECTED CONFIGURATIONS:");
            let _ = writeln!(out, "{}", rule('-', self.style.rejected_width));
            for outcome in &self.outcomes {
                if let Err(err) = &outcome.result {
                    let _ = writeln!(out, "  {}: {}", outcome.short_name, err);
                }
            }
        }
    }

    /// Results as JSON for plotting and report collaborators.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let configurations = self
            .outcomes
            .iter()
            .map(|o| JsonOutcome {
                name: &o.name,
                analysis: o.result.as_ref().ok(),
                error: o.result.as_ref().err().map(|e| e.to_string()),
            })
            .collect();
        serde_json::to_string_pretty(&JsonReport {
            generated: self.generated,
            configurations,
        })
    }
}

fn write_configuration(out: &mut String, name: &str, a: &ConfigAnalysis) {
    let spiral = &a.params.spiral;
    let c = &a.comparison;

    let _ = writeln!(out);
    heading(out, name, '=');

    heading(out, "CONFIGURATION PARAMETERS:", '-');
    let _ = writeln!(out, "{:<20} {:>8.2}", "Outer Radius:", spiral.outer_radius);
    let _ = writeln!(out, "{:<20} {:>8.2}", "Inner Radius:", spiral.inner_radius);
    let _ = writeln!(out, "{:<20} {:>8.2}", "Height:", spiral.height);
    let _ = writeln!(out, "{:<20} {:>8.2}", "Number of Turns:", a.effective_turns);
    let _ = writeln!(
        out,
        "{:<20} {:>8.0}°",
        "Phase Offset:",
        spiral.phase_offset.to_degrees()
    );
    if a.params.struct_lines != 0.0 {
        let _ = writeln!(out, "{:<20} {:>8.2}", "Structural Lines:", a.structural_length());
    }

    let _ = writeln!(out);
    heading(out, "PERIMETER CALCULATIONS:", '=');

    heading(out, "Analytical Method (Exact):", '-');
    let _ = writeln!(out, "  {:<15} {:>10.4}", "Outer Spiral:", c.analytical.outer);
    let _ = writeln!(out, "  {:<15} {:>10.4}", "Inner Spiral:", c.analytical.inner);
    let _ = writeln!(out, "  {:<15} {:>10.4}", "Total Length:", c.analytical.total);
    let _ = writeln!(
        out,
        "  {:<15} {:>10.6}",
        "Error Margin:",
        c.analytical.error.unwrap_or(0.0)
    );

    let _ = writeln!(out);
    heading(out, "Numerical Method (Discrete Approximation):", '-');
    let _ = writeln!(out, "  {:<15} {:>10.4}", "Outer Spiral:", c.numerical.outer);
    let _ = writeln!(out, "  {:<15} {:>10.4}", "Inner Spiral:", c.numerical.inner);
    let _ = writeln!(out, "  {:<15} {:>10.4}", "Total Length:", c.numerical.total);

    let circular = &c.circular_approximation;
    let _ = writeln!(out);
    heading(out, "Circular Approximation Method:", '-');
    let _ = writeln!(out, "  {:<15} {:>10.4}", "Outer Spiral:", circular.lengths.outer);
    let _ = writeln!(out, "  {:<15} {:>10.4}", "Inner Spiral:", circular.lengths.inner);
    let _ = writeln!(out, "  {:<15} {:>10.4}", "Total Length:", circular.lengths.total);
    let _ = writeln!(out, "  {:<15} {:>10}", "Turns Used:", circular.turns);

    let d = &c.differences;
    let _ = writeln!(out);
    heading(out, "METHOD ACCURACY COMPARISON:", '=');
    for (label, value) in [
        ("Analytical vs Numerical:", d.analytical_vs_numerical),
        ("Analytical vs Circular:", d.analytical_vs_circular),
        ("Numerical vs Circular:", d.numerical_vs_circular),
    ] {
        let _ = writeln!(out, "{label:<25} {value:>10.6}");
    }

    let _ = writeln!(out);
    heading(out, "FLAT XY CIRCLES (Approximation):", '-');
    for (i, ring) in a.rings.iter().enumerate() {
        let _ = writeln!(
            out,
            "  Circle {:>2}: r_outer={:>6.2}, r_inner={:>6.2}",
            i + 1,
            ring.r_outer,
            ring.r_inner
        );
    }

    let _ = writeln!(out);
    heading(out, "ANNULAR NET:", '-');
    let _ = writeln!(out, "  {:<15} {:>12.4}", "Net Length:", a.net.total_length);
    let _ = writeln!(out, "  {:<15} {:>12}", "Struts:", a.net.strut_count);
    let _ = writeln!(out, "  {:<15} {:>12}", "Anchor Points:", a.net.anchor_points);
}
