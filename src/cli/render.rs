use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::dashboard::{group_by_time, stats, DashboardState};
use crate::store::Medicine;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(Value::Object(extra)) = data {
                if let Some(obj) = response.as_object_mut() {
                    obj.extend(extra);
                }
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Render the dashboard: statistics, then the schedule grouped by time slot.
pub fn render_schedule(state: &DashboardState, output_format: &OutputFormat) -> anyhow::Result<()> {
    let medicines: Vec<Medicine> = state.visible().into_iter().cloned().collect();
    let counters = stats(&medicines);
    let groups = group_by_time(&medicines);

    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "stats": {
                    "total": counters.total,
                    "time_slots": counters.time_slots,
                    "taken": counters.taken
                },
                "schedule": groups
                    .iter()
                    .map(|g| json!({ "time": g.label, "medications": g.medicines }))
                    .collect::<Vec<_>>()
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!(
                "📊 {} medications   ⏰ {} time slots   ✓ {} taken today",
                counters.total, counters.time_slots, counters.taken
            );

            if medicines.is_empty() {
                println!();
                println!("No medications scheduled yet");
                return Ok(());
            }

            for group in &groups {
                println!();
                println!("{}", group.label);
                for medicine in &group.medicines {
                    println!("  {}", format_medicine(medicine));
                }
            }
        }
    }
    Ok(())
}

fn format_medicine(medicine: &Medicine) -> String {
    let mut line = format!("💊 {}", medicine.name);
    if let Some(dosage) = &medicine.dosage {
        line.push_str(&format!(" ({})", dosage));
    }
    if let Some(notes) = &medicine.notes {
        line.push_str(&format!(" - {}", notes));
    }
    if medicine.taken {
        line.push_str(" [taken]");
    }
    line.push_str(&format!("  [{}]", medicine.id));
    line
}
