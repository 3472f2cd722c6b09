// src/cli.rs
// Headless scenario driver: load a page, click every ranking button, then
// either feed it the backend's reply or jump the clock past the deadline.
// Real time is only spent on the reply delay; the 120 s fallback is
// exercised with an injected timestamp, never slept out.
use std::{
    env, fs,
    path::PathBuf,
    time::{Duration, Instant},
};

use crate::config::consts::*;
use crate::config::options::{Outcome, RunOptions};
use crate::controller::{self, ButtonController};
use crate::core::html::normalize_ws;
use crate::dom::Document;
use crate::progress::Progress;
use crate::runner::{self, RunEvent};

pub struct Params {
    pub scenario: Outcome,
    pub delay: Duration,
    pub ideas: usize,
    pub page: Option<PathBuf>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            scenario: Outcome::Success,
            // Short by default; this is a demo, not the real pipeline.
            delay: Duration::from_millis(250),
            ideas: DEFAULT_IDEAS,
            page: None,
        }
    }
}

struct CliProgress;
impl Progress for CliProgress {
    fn begin(&mut self, ideas: usize) {
        println!("Procesando {ideas} ideas...");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;

    let html = match &params.page {
        Some(p) => fs::read_to_string(p)?,
        None => s!(crate::demo_page()),
    };
    let mut doc = Document::parse(&html);
    let mut ctl = ButtonController::attach(&doc);

    let bound = ctl.bound_ids();
    if bound.is_empty() {
        println!("No hay botones de ranking en esta página; nada que hacer.");
        return Ok(());
    }
    println!("{} botón(es) de ranking enlazado(s):", bound.len());
    for (i, &id) in bound.iter().enumerate() {
        let label = ctl.original_label(id).unwrap_or_default();
        println!("  #{} \"{}\"", i + 1, normalize_ws(label));
    }

    let t0 = Instant::now();
    for &id in &bound {
        ctl.click(&mut doc, id, t0);
    }
    println!("clic → \"{LOADING_LABEL}\" (deshabilitado)");
    print_statuses(&doc);

    match params.scenario {
        Outcome::Success => {
            let opts = RunOptions {
                outcome: Outcome::Success,
                response_delay: params.delay,
                ideas: params.ideas,
            };
            let mut prog = CliProgress;
            let handle = runner::start(&opts, Some(&mut prog));
            if let Some(RunEvent::Finished { markup }) = handle.wait_event() {
                let target = runner::results_container(&doc);
                doc.append_html(target, &markup);
            }
            let summary = ctl.pump(&mut doc, Instant::now());
            println!(
                "señal de éxito → {} botón(es) restaurado(s)",
                summary.restored
            );
        }
        Outcome::Silent => {
            // No reply is coming; advance time instead of waiting it out.
            let later = t0 + Duration::from_millis(RESTORE_DEADLINE_MS) + Duration::from_millis(1);
            let summary = ctl.pump(&mut doc, later);
            println!(
                "tiempo agotado → {} botón(es) restaurado(s)",
                summary.restored
            );
        }
    }

    for (i, &id) in bound.iter().enumerate() {
        let el = doc.get(id);
        println!(
            "  #{} \"{}\" disabled={}",
            i + 1,
            normalize_ws(&doc.text_of(id)),
            el.disabled
        );
    }
    print_statuses(&doc);
    Ok(())
}

fn print_statuses(doc: &Document) {
    for id in doc.all() {
        if controller::is_status_element(doc.get(id)) {
            println!("  estado: \"{}\"", normalize_ws(&doc.text_of(id)));
        }
    }
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::new();
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--scenario" => {
                let v = args.next().ok_or("Missing value for --scenario")?;
                params.scenario = match v.to_ascii_lowercase().as_str() {
                    "exito" | "éxito" => Outcome::Success,
                    "silencio" => Outcome::Silent,
                    other => return Err(format!("Unknown scenario: {}", other).into()),
                };
            }
            "--delay-ms" => {
                let v: u64 = args.next().ok_or("Missing value for --delay-ms")?.parse()?;
                params.delay = Duration::from_millis(v);
            }
            "--ideas" => {
                params.ideas = args.next().ok_or("Missing value for --ideas")?.parse()?;
            }
            "--page" => {
                params.page = Some(PathBuf::from(args.next().ok_or("Missing page path")?));
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(params)
}
