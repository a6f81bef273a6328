use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use regionality_i18n::Dictionary;
use serde::Deserialize;

#[derive(Debug, Parser)]
#[command(
    name = "l10n-compiler",
    about = "Validates Regionality language packs",
    version
)]
struct Args {
    /// 語言包資料夾路徑；預設為 lang。 / Directory holding <code>.json packs (defaults to lang).
    #[arg(value_name = "DIR", default_value = "lang")]
    directory: PathBuf,

    /// 基準語言代碼。 / Baseline language code.
    #[arg(long, default_value = "en")]
    baseline: String,

    /// 遇到缺鍵時使程序失敗。 / Fail when packs are missing keys relative to the baseline.
    #[arg(long)]
    fail_on_missing: bool,

    /// 比對參考鍵清單確保覆蓋率。 / Optional reference key list to compare against.
    #[arg(long, value_name = "FILE")]
    reference: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("l10n-compiler error: {err}");
        std::process::exit(1);
    }
}

struct LoadedPack {
    code: String,
    keys: Vec<String>,
}

fn run() -> Result<()> {
    let args = Args::parse();
    let packs = load_packs(&args.directory)
        .with_context(|| format!("load language packs from {}", args.directory.display()))?;
    if packs.is_empty() {
        bail!("no .json packs found in {}", args.directory.display());
    }

    let baseline = packs
        .iter()
        .find(|pack| pack.code == args.baseline)
        .with_context(|| format!("baseline pack '{}' not present", args.baseline))?;
    let baseline_keys = baseline.keys.clone();
    println!(
        "Loaded {} pack(s); baseline: {} ({} keys)",
        packs.len(),
        args.baseline,
        baseline_keys.len()
    );

    let mut total_missing = 0usize;
    for pack in &packs {
        let mut line = format!(" - {}: {} key(s)", pack.code, pack.keys.len());
        if pack.code == args.baseline {
            line.push_str(" [baseline]");
            println!("{line}");
            continue;
        }

        let missing: Vec<_> = baseline_keys
            .iter()
            .filter(|key| !pack.keys.contains(key))
            .collect();
        if missing.is_empty() {
            println!("{line}");
        } else {
            line.push_str(&format!(" — missing {} key(s)", missing.len()));
            println!("{line}");
            for key in missing.iter().take(5) {
                println!("     · {key}");
            }
            if missing.len() > 5 {
                println!("     · ... {} more", missing.len() - 5);
            }
        }
        total_missing += missing.len();
    }

    if total_missing > 0 {
        eprintln!(
            "Found {total_missing} missing key(s) relative to baseline '{}'",
            args.baseline
        );
        if args.fail_on_missing {
            bail!("missing translation keys detected");
        }
    }

    if let Some(reference) = args.reference.as_ref() {
        verify_reference_keys(&baseline_keys, &args.baseline, reference)?;
    }

    Ok(())
}

fn load_packs(dir: &Path) -> Result<Vec<LoadedPack>> {
    let mut packs = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("enumerate {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let Some(code) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let contents =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        let dictionary: Dictionary = serde_json::from_str(&contents)
            .with_context(|| format!("parse {}", path.display()))?;
        packs.push(LoadedPack {
            code: code.to_string(),
            keys: dictionary.flat_keys(),
        });
    }
    packs.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(packs)
}

#[derive(Debug, Deserialize)]
struct ReferenceSpec {
    #[serde(default)]
    source: Option<String>,
    keys: Vec<String>,
}

fn verify_reference_keys(baseline_keys: &[String], baseline: &str, path: &Path) -> Result<()> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read reference {}", path.display()))?;
    let spec: ReferenceSpec = serde_json::from_str(&contents)
        .with_context(|| format!("parse reference {}", path.display()))?;

    let missing: Vec<_> = spec
        .keys
        .iter()
        .filter(|key| !baseline_keys.contains(key))
        .collect();
    if missing.is_empty() {
        if let Some(source) = spec.source {
            println!(
                "Reference coverage OK for '{baseline}' against {source} ({} keys)",
                spec.keys.len()
            );
        } else {
            println!(
                "Reference coverage OK for '{baseline}' ({} keys)",
                spec.keys.len()
            );
        }
        return Ok(());
    }
    eprintln!(
        "Reference check failed for '{baseline}'; missing {} key(s)",
        missing.len()
    );
    for key in missing.iter() {
        eprintln!("  · {key}");
    }
    bail!("reference coverage mismatch detected");
}
