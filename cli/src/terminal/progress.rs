use indicatif::ProgressStyle;
use lazarus_core::capture::CaptureProgress;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TEMPLATE: &str = "{spinner:.blue} {msg} [{bar:40.green/bright_black}] {pos}/{len}s";

/// Capture progress drawn as an indicatif bar attached to a tracing span.
pub struct CaptureBar {
    span: Span,
}

impl CaptureBar {
    pub fn new() -> Self {
        Self {
            span: info_span!("capture", indicatif.pb_show = true),
        }
    }
}

impl CaptureProgress for CaptureBar {
    fn started(&self, total_secs: u64) {
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            self.span.pb_set_style(&style.progress_chars("█▓░").tick_strings(&[
                "▁▁▁▁▁",
                "▁▂▂▂▁",
                "▁▄▂▄▁",
                "▂▄▆▄▂",
                "▄▆█▆▄",
                "▂▄▆▄▂",
                "▁▄▂▄▁",
                "▁▂▂▂▁",
            ]));
        }
        self.span.pb_set_length(total_secs);
        self.span.pb_set_message("Capturing packets...");
        self.span.pb_start();
    }

    fn tick(&self, elapsed_secs: u64, _total_secs: u64) {
        self.span.pb_set_position(elapsed_secs);
    }

    fn finished(&self) {
        self.span.pb_set_message("Stopping capture...");
    }
}
