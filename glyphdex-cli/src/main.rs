use clap::Parser;
use glyphdex::io::PngDirWriter;
use glyphdex::{
    BinConfig, FontEngine, ForegroundRule, GlyphFailure, PipelineConfig, RenderSpec, Template,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

/// Built-in Thai character set, used when the config lists no characters.
const DEFAULT_CHARACTERS: &str = "ฟ ห ก ด เ ้ ่ า ส ว ง ๆ ไ พ ั ี ร น ย บ ล";

#[derive(Parser, Debug)]
#[command(author, version, about = "Glyphdex CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for run progress.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    font_path: String,
    out_dir: String,
    output_path: Option<String>,
    characters: Vec<String>,
    font_size: f32,
    /// 0 derives the default canvas (font_size * 3 / 2).
    canvas_width: usize,
    canvas_height: usize,
    bin_size: f32,
    bin_num: usize,
    tolerance: u8,
}

impl Default for Config {
    fn default() -> Self {
        let bins = BinConfig::default();
        Self {
            font_path: String::new(),
            out_dir: "templates".to_string(),
            output_path: None,
            characters: Vec::new(),
            font_size: 40.0,
            canvas_width: 0,
            canvas_height: 0,
            bin_size: bins.bin_size,
            bin_num: bins.bin_num,
            tolerance: 0,
        }
    }
}

#[derive(Debug, Serialize)]
struct TemplateRecord {
    character: String,
    image_ref: String,
    bin: usize,
}

impl From<&Template> for TemplateRecord {
    fn from(value: &Template) -> Self {
        Self {
            character: value.character.clone(),
            image_ref: value.image_ref.clone(),
            bin: value.bin,
        }
    }
}

#[derive(Debug, Serialize)]
struct FailureRecord {
    character: String,
    error: String,
}

impl From<&GlyphFailure> for FailureRecord {
    fn from(value: &GlyphFailure) -> Self {
        Self {
            character: value.character.clone(),
            error: value.error.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    bins: Vec<Vec<TemplateRecord>>,
    failures: Vec<FailureRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("glyphdex=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.font_path.is_empty() {
        return Err("font_path must be set in the config".into());
    }

    let characters = if config.characters.is_empty() {
        DEFAULT_CHARACTERS
            .split_whitespace()
            .map(str::to_string)
            .collect()
    } else {
        config.characters.clone()
    };

    let mut render = RenderSpec::for_font_size(config.font_size);
    if config.canvas_width > 0 {
        render.canvas_width = config.canvas_width;
    }
    if config.canvas_height > 0 {
        render.canvas_height = config.canvas_height;
    }

    let pipeline_cfg = PipelineConfig {
        characters,
        render,
        bins: BinConfig::new(config.bin_size, config.bin_num)?,
        foreground: ForegroundRule {
            background: render.background,
            tolerance: config.tolerance,
        },
    };

    let engine = FontEngine::from_file(&config.font_path)?;
    let mut writer = PngDirWriter::create(&config.out_dir)?;
    let report = glyphdex::run(&engine, &mut writer, &pipeline_cfg)?;

    let output = Output {
        bins: report
            .index
            .bins()
            .iter()
            .map(|bin| bin.iter().map(TemplateRecord::from).collect())
            .collect(),
        failures: report.failures.iter().map(FailureRecord::from).collect(),
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
