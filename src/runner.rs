// src/runner.rs
// Stand-in for the host app's ranking pipeline. The real page gets its
// success markup rendered by the server; here a worker thread sleeps for
// the configured response delay and hands the same markup back over a
// channel, or stays silent so the deadline fallback is the only way out.

use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::config::consts::{RESULTS_ID_FRAGMENT, SUCCESS_PHRASE};
use crate::config::options::{Outcome, RunOptions};
use crate::dom::{Document, NodeId};
use crate::progress::Progress;

pub enum RunEvent {
    /// Markup the page would render on completion.
    Finished { markup: String },
}

/// Non-blocking view of a pending run.
pub enum RunPoll {
    Ready(RunEvent),
    Pending,
    /// Worker hung up without a word (the silent outcome).
    Gone,
}

pub struct RunHandle {
    rx: Receiver<RunEvent>,
}

impl RunHandle {
    /// Non-blocking poll, for the GUI frame loop.
    pub fn poll(&self) -> RunPoll {
        match self.rx.try_recv() {
            Ok(ev) => RunPoll::Ready(ev),
            Err(mpsc::TryRecvError::Empty) => RunPoll::Pending,
            Err(mpsc::TryRecvError::Disconnected) => RunPoll::Gone,
        }
    }

    /// Blocking wait, for the CLI. None means the worker went silent.
    pub fn wait_event(&self) -> Option<RunEvent> {
        self.rx.recv().ok()
    }
}

/// The result block the page appends when a run completes.
pub fn success_markup(ideas: usize) -> String {
    let body = format!("✅ {SUCCESS_PHRASE} para {ideas} ideas.");
    join!("<div class=\"ranking-result\">", &body, "</div>")
}

/// Where result markup lands: the results container if the page has one,
/// else the page root.
pub fn results_container(doc: &Document) -> NodeId {
    doc.all()
        .into_iter()
        .find(|&id| doc.get(id).id_contains(RESULTS_ID_FRAGMENT))
        .unwrap_or_else(|| doc.root())
}

/// Kick off a simulated run. Progress callbacks fire on the caller's
/// thread before the hand-off; the worker only sleeps and reports.
pub fn start(opts: &RunOptions, progress: Option<&mut dyn Progress>) -> RunHandle {
    if let Some(p) = progress {
        p.begin(opts.ideas);
        p.log("Procesando ideas...");
        p.finish();
    }
    logf!(
        "Runner: start outcome={:?} delay={}ms ideas={}",
        opts.outcome,
        opts.response_delay.as_millis(),
        opts.ideas
    );

    let (tx, rx) = mpsc::channel();
    let outcome = opts.outcome;
    let delay = opts.response_delay;
    let ideas = opts.ideas;
    thread::spawn(move || {
        thread::sleep(delay);
        if outcome == Outcome::Success {
            let _ = tx.send(RunEvent::Finished {
                markup: success_markup(ideas),
            });
        }
        // Outcome::Silent: drop the sender without a word. The page's
        // deadline fallback is the only way back.
    });

    RunHandle { rx }
}
