// src/config/consts.rs

// Host-page strings. The page ships in Spanish; these are matched and
// written verbatim, so keep the accents intact.
pub const TRIGGER_LABEL: &str = "Generar Ranking";
pub const TRIGGER_CLASS: &str = "generate-ranking-btn";
pub const TRIGGER_ID_FRAGMENT: &str = "ranking";

pub const LOADING_LABEL: &str = "⏳ Generando ranking...";
// Substring that identifies a button as mid-load. Shorter than the full
// label so a partial rewrite by the host page still counts.
pub const LOADING_MARKER: &str = "Generando ranking";

pub const SUCCESS_PHRASE: &str = "Ranking generado con éxito";
pub const PROCESSING_MESSAGE: &str =
    "Procesando ideas y generando ranking. Este proceso puede tardar unos minutos...";

// Status elements: div/p whose id or class carries this fragment.
pub const STATUS_FRAGMENT: &str = "status";
// A status element is overwritten only while idle: empty text, or one of
// these placeholder markers.
pub const IDLE_MARKERS: &[&str] = &["Esperando", "estado"];

// Container the ranking result lands in (falls back to the page root).
pub const RESULTS_ID_FRAGMENT: &str = "results";

// Safety fallback: re-enable a loading button after this long even if the
// success phrase never shows up.
pub const RESTORE_DEADLINE_MS: u64 = 120_000;

// Demo backend
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 3_000;
pub const DEFAULT_IDEAS: usize = 8;
