#![deny(warnings)]

use anyhow::Context;
use clap::{ArgGroup, Parser};
use ms_translator_core::config::{
    resolve_microsoft_config, Env, MicrosoftConfig, MicrosoftOverrides, StdEnv,
};
use ms_translator_core::documentation::HtmlDocument;
use ms_translator_core::translate::{
    DocumentationTranslator, HttpMicrosoftService, MicrosoftTranslator, Translation, Translator,
};
use ms_translator_core::Lang;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mstranslate")]
#[command(about = "Translate text or HTML documentation with Microsoft Translator")]
#[command(group(
    ArgGroup::new("input")
        .multiple(false)
        .args(["text", "html", "list_languages"])
))]
struct Args {
    /// Text to translate; read from stdin when omitted.
    text: Option<String>,

    #[arg(long, default_value = "auto")]
    from: Lang,

    #[arg(long, default_value = "en")]
    to: Lang,

    /// Translate the body of an HTML file instead of plain text.
    #[arg(long)]
    html: Option<PathBuf>,

    #[arg(long)]
    list_languages: bool,

    #[arg(long)]
    api_key: Option<String>,

    #[arg(long)]
    region: Option<String>,

    #[arg(long)]
    endpoint: Option<String>,

    #[arg(long)]
    timeout_ms: Option<u64>,

    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let env = StdEnv;
    let cfg = build_config(&args, &env)?;

    tracing::info!(
        endpoint = %cfg.endpoint,
        region = cfg.region.as_deref().unwrap_or("global"),
        "config loaded"
    );

    let service = HttpMicrosoftService::new(cfg).context("failed to build HTTP client")?;
    let translator = MicrosoftTranslator::new(service);

    if args.list_languages {
        list_languages(&translator);
        return Ok(());
    }

    match &args.html {
        Some(path) => translate_html(&translator, path, args.from, args.to).await,
        None => {
            let text = match args.text {
                Some(text) => text,
                None => read_stdin()?,
            };
            translate_text(&translator, text, args.from, args.to).await
        }
    }
}

async fn translate_text(
    translator: &MicrosoftTranslator,
    text: String,
    from: Lang,
    to: Lang,
) -> anyhow::Result<()> {
    let limit = translator.content_length_limit();
    if text.chars().count() > limit {
        anyhow::bail!("input exceeds {limit} characters");
    }

    let translation = translator
        .translate(text, from, to)
        .await
        .context("translation failed")?;
    print_translation(&translation);
    Ok(())
}

async fn translate_html(
    translator: &MicrosoftTranslator,
    path: &Path,
    from: Lang,
    to: Lang,
) -> anyhow::Result<()> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document = translator
        .translate_documentation(HtmlDocument::parse(&html), from, to)
        .await
        .context("documentation translation failed")?;
    println!("{}", document.to_html());
    Ok(())
}

fn print_translation(translation: &Translation) {
    tracing::debug!(
        src = %translation.src_lang,
        target = %translation.target_lang,
        "translated"
    );
    println!("{}", translation.translation);

    if let Some(dict) = translation.dict_document.as_ref().filter(|d| !d.is_empty()) {
        println!();
        println!("{dict}");
    }
    for extra in &translation.extra_documents {
        println!();
        println!("[{}]", extra.name);
        println!("{}", extra.document);
    }
}

fn list_languages(translator: &MicrosoftTranslator) {
    let targets = translator.supported_target_languages();
    for lang in translator.supported_source_languages() {
        let marker = if targets.contains(lang) { "" } else { "  (source only)" };
        println!("{:<10} {}{marker}", lang.code(), lang.name());
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    let text = text.trim_end_matches(['\n', '\r']).to_owned();
    if text.trim().is_empty() {
        anyhow::bail!("no text given; pass it as an argument or on stdin");
    }
    Ok(text)
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn build_config(args: &Args, env: &impl Env) -> anyhow::Result<MicrosoftConfig> {
    let overrides = MicrosoftOverrides {
        api_key: args.api_key.clone(),
        region: args.region.clone(),
        endpoint: args.endpoint.clone(),
        timeout_ms: args.timeout_ms,
    };
    resolve_microsoft_config(overrides, env).context("invalid translator configuration")
}
