//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::alerts::{Alert, AlertBatch, Severity};
use crate::cli::args::OutputFormat;

use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Triage report: the highest-priority alerts plus optional batch statistics
#[derive(Debug, Clone, Serialize)]
pub struct TriageReport {
    pub total: usize,
    pub shown: usize,
    pub window_minutes: Option<u64>,
    pub alerts: Vec<Alert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SummaryStats>,
}

impl TriageReport {
    /// Build a report over a scored, sorted batch, keeping the top `limit`.
    pub fn new(
        batch: &AlertBatch,
        limit: usize,
        window_minutes: Option<u64>,
        with_stats: bool,
    ) -> Self {
        let shown = batch.len().min(limit);
        Self {
            total: batch.len(),
            shown,
            window_minutes,
            alerts: batch.alerts[..shown].to_vec(),
            stats: with_stats.then(|| SummaryStats::from_batch(batch)),
        }
    }
}

impl TableDisplay for TriageReport {
    fn to_table(&self) -> String {
        let mut output = format!(
            "Top {} Highest Priority Alerts ({} total)\n",
            self.shown, self.total
        );
        if let Some(minutes) = self.window_minutes {
            output.push_str(&format!("Showing alerts from the last {} minutes\n", minutes));
        }
        output.push_str(&"=".repeat(60));
        output.push('\n');

        for (i, alert) in self.alerts.iter().enumerate() {
            output.push_str(&format!(
                "\n[{}] Priority: {:.2} | {} | {}\n",
                i + 1,
                alert.priority,
                alert.severity,
                alert.id
            ));
            output.push_str(&format!(
                "    Service: {} | Component: {}\n",
                alert.service, alert.component
            ));
            output.push_str(&format!(
                "    Metric: {} ({:.2} / {:.2})\n",
                alert.metric, alert.value, alert.threshold
            ));
            output.push_str(&format!("    Description: {}\n", alert.description));
        }

        if self.total > self.shown {
            output.push_str(&format!(
                "\n... and {} more alerts (use 'show' to see all or 'group' to organize)\n",
                self.total - self.shown
            ));
        }

        if let Some(stats) = &self.stats {
            output.push('\n');
            output.push_str(&stats.to_table());
        }

        output
    }

    fn to_compact(&self) -> String {
        self.alerts
            .iter()
            .map(|a| format!("{}:{:.2}", a.id, a.priority))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Summary statistics over a scored batch
#[derive(Debug, Clone, Serialize)]
pub struct SummaryStats {
    pub severity_breakdown: Vec<SeverityCount>,
    pub average_priority: f64,
    pub top_services: Vec<ServiceCount>,
}

/// Count and share of one severity class
#[derive(Debug, Clone, Serialize)]
pub struct SeverityCount {
    pub severity: String,
    pub count: usize,
    pub percentage: f64,
}

/// Alert count for one service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceCount {
    pub service: String,
    pub count: usize,
}

/// How many services the top-services list shows
const TOP_SERVICES: usize = 5;

impl SummaryStats {
    /// Compute statistics for a scored batch.
    ///
    /// Severity rows cover the recognized classes present in the batch, most
    /// urgent first; services rank by count descending, then name, top five.
    pub fn from_batch(batch: &AlertBatch) -> Self {
        let total = batch.len();

        let severity_breakdown = Severity::ALL
            .iter()
            .filter_map(|class| {
                let count = batch
                    .iter()
                    .filter(|a| Severity::from_label(&a.severity) == Some(*class))
                    .count();
                (count > 0).then(|| SeverityCount {
                    severity: class.to_string(),
                    count,
                    percentage: count as f64 / total as f64 * 100.0,
                })
            })
            .collect();

        let average_priority = if total == 0 {
            0.0
        } else {
            batch.iter().map(|a| a.priority).sum::<f64>() / total as f64
        };

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for alert in batch.iter() {
            *counts.entry(alert.service.as_str()).or_default() += 1;
        }
        let mut top_services: Vec<ServiceCount> = counts
            .into_iter()
            .map(|(service, count)| ServiceCount {
                service: service.to_string(),
                count,
            })
            .collect();
        top_services.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.service.cmp(&b.service)));
        top_services.truncate(TOP_SERVICES);

        Self {
            severity_breakdown,
            average_priority,
            top_services,
        }
    }
}

impl TableDisplay for SummaryStats {
    fn to_table(&self) -> String {
        let mut output = "=".repeat(60);
        output.push_str("\nSUMMARY STATISTICS\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str("\nSeverity Breakdown:\n");
        for row in &self.severity_breakdown {
            output.push_str(&format!(
                "  {}: {} alerts ({:.1}%)\n",
                row.severity, row.count, row.percentage
            ));
        }

        output.push_str(&format!(
            "\nAverage Priority Score: {:.2}\n",
            self.average_priority
        ));

        output.push_str("\nTop Services by Alert Count:\n");
        for row in &self.top_services {
            output.push_str(&format!("  {}: {} alerts\n", row.service, row.count));
        }

        output
    }
}

/// Detailed listing of every alert in a batch
#[derive(Debug, Clone, Serialize)]
pub struct AlertListing {
    pub total: usize,
    pub alerts: Vec<Alert>,
}

impl AlertListing {
    pub fn new(batch: &AlertBatch) -> Self {
        Self {
            total: batch.len(),
            alerts: batch.alerts.clone(),
        }
    }
}

impl TableDisplay for AlertListing {
    fn to_table(&self) -> String {
        let mut output = format!("Alerts Summary: {} total\n", self.total);
        output.push_str(&"=".repeat(50));
        output.push('\n');

        if self.alerts.is_empty() {
            output.push_str("No alerts to display.\n");
            return output;
        }

        for (i, alert) in self.alerts.iter().enumerate() {
            output.push_str(&format!("\n[{}/{}]\n", i + 1, self.total));
            output.push_str(&format!("Alert: {}\n", alert.id));
            output.push_str(&format!("  Service:     {}\n", alert.service));
            output.push_str(&format!("  Component:   {}\n", alert.component));
            output.push_str(&format!("  Severity:    {}\n", alert.severity));
            output.push_str(&format!("  Metric:      {}\n", alert.metric));
            output.push_str(&format!(
                "  Value:       {:.2} (threshold: {:.2})\n",
                alert.value, alert.threshold
            ));
            output.push_str(&format!("  Priority:    {:.2}\n", alert.priority));
            output.push_str(&format!(
                "  Time:        {}\n",
                alert.timestamp.format("%Y-%m-%d %H:%M:%S")
            ));
            output.push_str(&format!("  Description: {}\n", alert.description));
        }

        output.push_str(&format!("\nTotal: {} alerts displayed\n", self.total));
        output
    }

    fn to_compact(&self) -> String {
        self.alerts
            .iter()
            .map(|a| format!("{}:{}:{:.2}", a.id, a.severity, a.priority))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Grouped view of a batch
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub field: String,
    pub groups: BTreeMap<String, AlertBatch>,
}

impl GroupReport {
    pub fn new(field: &str, groups: BTreeMap<String, AlertBatch>) -> Self {
        Self {
            field: field.to_string(),
            groups,
        }
    }
}

impl TableDisplay for GroupReport {
    fn to_table(&self) -> String {
        let mut output = format!("Alerts grouped by {}:\n", self.field);
        output.push_str(&"=".repeat(60));
        output.push('\n');

        for (key, group) in &self.groups {
            output.push_str(&format!("\n{}: {} alerts\n", key, group.len()));
            output.push_str(&"-".repeat(40));
            output.push('\n');

            for (i, alert) in group.iter().enumerate() {
                output.push_str(&format!(
                    "  [{}] {} - {} ({})\n",
                    i + 1,
                    alert.id,
                    alert.description,
                    alert.severity
                ));
            }
        }

        output.push_str(&format!("\nTotal groups: {}\n", self.groups.len()));
        output
    }

    fn to_compact(&self) -> String {
        self.groups
            .iter()
            .map(|(key, group)| format!("{}:{}", key, group.len()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Simple message output
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
    pub success: bool,
}

impl TableDisplay for Message {
    fn to_table(&self) -> String {
        if self.success {
            format!("✓ {}", self.message)
        } else {
            format!("✗ {}", self.message)
        }
    }
}
