use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use regionality_app::{LanguageChoice, Phase, SiteController, SiteOptions, ViewHost};
use regionality_i18n::{DictionaryStore, DEFAULT_LANGUAGE, LANGUAGES};
use regionality_pages::{fill_data_lang, render, RenderContext};
use regionality_router::Route;

#[derive(Parser)]
#[command(
    name = "regionality-cli",
    about = "Utility commands for the Regionality site",
    author,
    version
)]
struct Cli {
    /// 語言包資料夾路徑；預設為 lang。 / Directory holding the language packs (defaults to lang).
    #[arg(long, global = true, value_name = "DIR", default_value = "lang")]
    lang_dir: PathBuf,

    /// 圖片資源的基底路徑。 / Base path prepended to image references.
    #[arg(long, global = true, value_name = "PATH", default_value = "assets")]
    assets: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 渲染單一路由頁面。 / Render one route to HTML.
    Render(RenderArgs),
    /// 將全部路由與語言輸出為靜態網站。 / Export every route for every language.
    Export(ExportArgs),
    /// 列出支援語言、偵測結果與已存偏好。 / List languages, detection, and the saved preference.
    Langs(LangsArgs),
    /// 檢查語言包相對於基準包的缺鍵。 / Diff packs against the baseline for missing keys.
    Check(CheckArgs),
    /// 以終端機主機走一遍瀏覽流程。 / Walk the site flow against a terminal host.
    Show(ShowArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// 路由鍵，例如 faq 或 guides-nintendo。 / Route key, e.g. faq or guides-nintendo.
    #[arg(value_name = "ROUTE")]
    route: String,

    /// 渲染使用的語言代碼。 / Language code to render with.
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    lang: String,

    /// 輸出檔案；省略時寫至標準輸出。 / Output file; stdout when omitted.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct ExportArgs {
    /// 靜態輸出資料夾。 / Directory receiving the static export.
    #[arg(long, value_name = "DIR")]
    out_dir: PathBuf,

    /// 逗號分隔的語言代碼；預設全部。 / Comma-separated codes; defaults to all.
    #[arg(long, value_name = "CODES")]
    langs: Option<String>,
}

#[derive(Args)]
struct LangsArgs {
    /// 偏好檔路徑；提供時一併顯示已存語言。 / Preference file; shown when given.
    #[arg(long, value_name = "FILE")]
    prefs: Option<PathBuf>,
}

#[derive(Args)]
struct CheckArgs {
    /// 基準語言代碼。 / Baseline language code.
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    baseline: String,

    /// 遇缺鍵時以失敗結束。 / Exit nonzero when keys are missing.
    #[arg(long)]
    fail_on_missing: bool,
}

#[derive(Args)]
struct ShowArgs {
    /// 偏好檔路徑。 / Preference file path.
    #[arg(long, value_name = "FILE", default_value = "regionality_lang.json")]
    prefs: PathBuf,

    /// 要顯示的 URL 片段。 / URL fragment to show.
    #[arg(long, default_value = "#home")]
    fragment: String,

    /// 首次造訪時代替使用者選擇的語言。 / Language picked on behalf of a first-time visitor.
    #[arg(long, value_name = "CODE")]
    pick: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("regionality-cli error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(ref args) => run_render(&cli, args),
        Commands::Export(ref args) => run_export(&cli, args),
        Commands::Langs(ref args) => run_langs(args),
        Commands::Check(ref args) => run_check(&cli, args),
        Commands::Show(ref args) => run_show(&cli, args),
    }
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn parse_route(key: &str) -> Result<Route> {
    Route::from_key(key).ok_or_else(|| {
        let valid: Vec<_> = Route::ALL.iter().map(Route::key).collect();
        anyhow!("unknown route key '{key}'; valid keys: {}", valid.join(", "))
    })
}

fn loaded_store(cli: &Cli, code: &str) -> Result<DictionaryStore> {
    let mut store = DictionaryStore::new(&cli.lang_dir);
    store
        .load(code)
        .with_context(|| format!("load language pack '{code}'"))?;
    Ok(store)
}

fn run_render(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let route = parse_route(&args.route)?;
    let store = loaded_store(cli, &args.lang)?;
    let ctx = RenderContext {
        store: &store,
        asset_base: &cli.assets,
        year: current_year(),
    };
    let html = fill_data_lang(&render(route, &ctx), &store);
    match &args.out {
        Some(path) => {
            fs::write(path, html.as_bytes())
                .with_context(|| format!("write {}", path.display()))?;
            println!("Wrote {} ({} / {})", path.display(), route, args.lang);
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn run_export(cli: &Cli, args: &ExportArgs) -> Result<()> {
    let codes: Vec<String> = match &args.langs {
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect(),
        None => LANGUAGES
            .iter()
            .map(|language| language.code.to_string())
            .collect(),
    };
    if codes.is_empty() {
        bail!("no languages selected for export");
    }

    let year = current_year();
    let mut written = 0usize;
    for code in &codes {
        let store = loaded_store(cli, code)?;
        let dir = args.out_dir.join(code);
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        for route in Route::ALL {
            let ctx = RenderContext {
                store: &store,
                asset_base: &cli.assets,
                year,
            };
            let html = fill_data_lang(&render(route, &ctx), &store);
            let path = dir.join(format!("{}.html", route.key()));
            fs::write(&path, html.as_bytes())
                .with_context(|| format!("write {}", path.display()))?;
            written += 1;
        }
    }
    println!(
        "Exported {written} page(s) for {} language(s) to {}",
        codes.len(),
        args.out_dir.display()
    );
    Ok(())
}

fn run_langs(args: &LangsArgs) -> Result<()> {
    for language in LANGUAGES {
        println!(
            " - {} {} [{}] {}",
            language.flag, language.label, language.code, language.name
        );
    }
    println!("Detected system language: {}", regionality_i18n::detect());
    if let Some(path) = &args.prefs {
        let store = regionality_app::PreferenceStore::load(path)
            .with_context(|| format!("read preference {}", path.display()))?;
        match store.lang() {
            Some(code) => println!("Saved preference: {code}"),
            None => println!("Saved preference: none (first visit)"),
        }
    }
    Ok(())
}

fn run_check(cli: &Cli, args: &CheckArgs) -> Result<()> {
    let baseline_store = loaded_store(cli, &args.baseline)?;
    let baseline_keys = baseline_store
        .dictionary()
        .expect("baseline just loaded")
        .flat_keys();
    println!(
        "Baseline '{}': {} key(s)",
        args.baseline,
        baseline_keys.len()
    );

    let mut total_missing = 0usize;
    for language in LANGUAGES {
        if language.code == args.baseline {
            continue;
        }
        let store = loaded_store(cli, language.code)?;
        let keys = store.dictionary().expect("pack just loaded").flat_keys();
        let missing: Vec<_> = baseline_keys
            .iter()
            .filter(|key| !keys.contains(key))
            .collect();
        if missing.is_empty() {
            println!(" - {}: complete ({} key(s))", language.code, keys.len());
        } else {
            println!(
                " - {}: missing {} key(s) relative to '{}'",
                language.code,
                missing.len(),
                args.baseline
            );
            for key in &missing {
                println!("     · {key}");
            }
            total_missing += missing.len();
        }
    }

    if total_missing > 0 && args.fail_on_missing {
        bail!("missing translation keys detected");
    }
    Ok(())
}

/// Terminal frontend for the controller: overlay and alerts stream to
/// stderr, while the page keeps only its latest HTML so `show` prints the
/// final state once and piped output stays clean.
#[derive(Default)]
struct TerminalHost {
    content: Option<String>,
}

impl ViewHost for TerminalHost {
    fn set_content(&mut self, html: &str) {
        self.content = Some(html.to_string());
    }

    fn show_language_overlay(&mut self, title: &str, hint: &str, choices: &[LanguageChoice]) {
        eprintln!("== {title} ==");
        for choice in choices {
            eprintln!("  {} {} {}", choice.flag, choice.label, choice.name);
        }
        eprintln!("{hint}");
    }

    fn hide_language_overlay(&mut self) {}

    fn set_language_picker(&mut self, _choices: &[LanguageChoice], active: &str) {
        eprintln!("Language: {active}");
    }

    fn alert(&mut self, message: &str) {
        eprintln!("! {message}");
    }
}

fn run_show(cli: &Cli, args: &ShowArgs) -> Result<()> {
    let options = SiteOptions {
        lang_dir: cli.lang_dir.clone(),
        preference_path: args.prefs.clone(),
        asset_base: cli.assets.clone(),
        year: current_year(),
    };
    let mut controller = SiteController::start(TerminalHost::default(), options)
        .with_context(|| format!("load preference {}", args.prefs.display()))?;

    // Record the requested route first: during the overlay phase nothing
    // renders until a language is picked, so the pick shows the right page.
    controller.on_fragment_change(&args.fragment);
    if controller.phase() == Phase::LanguageOverlay {
        match &args.pick {
            Some(code) => controller.select_language(code),
            None => {
                eprintln!("No language chosen yet; pass --pick <code> to continue.");
                return Ok(());
            }
        }
    }
    if let Some(html) = &controller.host().content {
        print!("{html}");
    }
    Ok(())
}
