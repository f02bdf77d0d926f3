//! Replays an input script against the default deck and prints the final
//! presentation snapshot as JSON.
//!
//! Script steps: `ArrowLeft`, `ArrowRight` (or any other key name), `click:prev`,
//! `click:next`, `goto:<slide>`, `ready`, `wait:<ms>`.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use slide_deck::Presentation;
use slide_deck::charts::{FrameChartBackend, NEWSPAPER_CHART_TARGET, SOCIAL_MEDIA_CHART_TARGET};
use slide_deck::core::{DEFAULT_TOTAL_SLIDES, Viewport};
use slide_deck::display::HeadlessDisplay;
use slide_deck::interaction::{ControlId, KeyInput};
use slide_deck::render::NullRenderer;

const USAGE: &str = "usage: deck_trace_tool [--output <path>] <step>...";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Key(KeyInput),
    Click(ControlId),
    GoTo(u32),
    Ready,
    Wait(u64),
}

#[derive(Debug)]
struct CliArgs {
    output: Option<PathBuf>,
    steps: Vec<Step>,
}

fn main() {
    let _ = slide_deck::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let display = HeadlessDisplay::with_slides(DEFAULT_TOTAL_SLIDES)
        .with_chart_target(NEWSPAPER_CHART_TARGET)
        .with_chart_target(SOCIAL_MEDIA_CHART_TARGET);
    let backend = FrameChartBackend::new(NullRenderer::default(), Viewport::default())
        .map_err(|err| err.to_string())?;
    let mut presentation =
        Presentation::with_default_deck(display, backend).map_err(|err| err.to_string())?;

    for step in args.steps {
        match step {
            Step::Key(key) => {
                presentation.handle_key(key);
            }
            Step::Click(control) => {
                presentation.click(control);
            }
            Step::GoTo(slide) => {
                presentation.go_to_slide(slide);
            }
            Step::Ready => {
                presentation.chart_library_ready();
            }
            Step::Wait(ms) => {
                presentation.advance_time(Duration::from_millis(ms));
            }
        }
    }

    let json = presentation
        .snapshot()
        .to_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;
    match args.output {
        Some(path) => fs::write(&path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut output = None::<PathBuf>;
    let mut steps = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => steps.push(parse_step(&arg)?),
        }
    }

    Ok(CliArgs { output, steps })
}

fn parse_step(raw: &str) -> Result<Step, String> {
    if raw == "ready" {
        return Ok(Step::Ready);
    }
    if let Some(ms) = raw.strip_prefix("wait:") {
        return ms
            .parse::<u64>()
            .map(Step::Wait)
            .map_err(|err| format!("invalid wait `{raw}`: {err}"));
    }
    if let Some(slide) = raw.strip_prefix("goto:") {
        return slide
            .parse::<u32>()
            .map(Step::GoTo)
            .map_err(|err| format!("invalid goto `{raw}`: {err}"));
    }
    match raw {
        "click:prev" => Ok(Step::Click(ControlId::Previous)),
        "click:next" => Ok(Step::Click(ControlId::Next)),
        _ if raw.starts_with("click:") => Err(format!("unknown control in `{raw}`")),
        _ => Ok(Step::Key(KeyInput::from_key_name(raw))),
    }
}
