use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::Serialize;
use serde_json::to_string_pretty;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::intent::{DesignIntent, JobType, ModifierSet};
use crate::synth::Source;

/// Everything one invocation produced, as written to `run.json`.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub job: Option<JobType>,
    pub intent: DesignIntent,
    pub modifiers: ModifierSet,
    pub synthesizer: String,
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    pub prompt: String,
    pub description_ta: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

pub struct SavedPaths {
    pub dir: PathBuf,
    pub record: PathBuf,
    pub intent: PathBuf,
    pub prompt: PathBuf,
    pub description: PathBuf,
}

pub fn run_dir(out_dir: &Path, id: Uuid) -> PathBuf {
    out_dir.join(".mind2design").join("runs").join(id.to_string())
}

pub fn save_run(out_dir: &Path, run: &RunRecord) -> anyhow::Result<SavedPaths> {
    let dir = run_dir(out_dir, run.id);
    fs::create_dir_all(&dir)?;

    let record = dir.join("run.json");
    fs::write(&record, to_string_pretty(run)?)?;

    let intent = dir.join("intent.json");
    fs::write(&intent, to_string_pretty(&run.intent)?)?;

    let prompt = dir.join("prompt.txt");
    fs::write(&prompt, format!("{}\n", run.prompt))?;

    let description = dir.join("description.ta.txt");
    fs::write(&description, format!("{}\n", run.description_ta))?;

    Ok(SavedPaths { dir, record, intent, prompt, description })
}

pub fn print_saved_paths(saved: &SavedPaths) {
    println!("artifacts directory: {}", saved.dir.display());
    println!("  run record:   {}", saved.record.display());
    println!("  intent:       {}", saved.intent.display());
    println!("  prompt:       {}", saved.prompt.display());
    println!("  description:  {}", saved.description.display());
}
